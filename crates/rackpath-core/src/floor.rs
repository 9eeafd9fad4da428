//! The warehouse floor: obstacles, shelves with stock, and start/goal markers.
//!
//! [`Floor`] is the mutable bookkeeping side of the system. Searches never
//! read it directly; they take a [`GridModel`] produced by
//! [`Floor::snapshot`], so edits made after a snapshot cannot affect a
//! running search.

use std::collections::{BTreeMap, BTreeSet};

use crate::cell::Cell;
use crate::error::{CoreResult, InvalidRequest, StockError, Stop};
use crate::grid::GridModel;

/// A storage shelf. Occupies its cell and blocks movement through it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shelf {
    /// What the shelf stocks.
    pub item: String,
    pub color: String,
    pub quantity: u32,
}

impl Shelf {
    pub fn new(item: impl Into<String>, color: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            color: color.into(),
            quantity,
        }
    }
}

/// A warehouse floor plan under edit.
#[derive(Debug, Clone)]
pub struct Floor {
    /// Empty grid of the floor's size; snapshots start from a copy of it.
    blank: GridModel,
    obstacles: BTreeSet<Cell>,
    shelves: BTreeMap<Cell, Shelf>,
    start: Option<Cell>,
    goal: Option<Cell>,
}

impl Floor {
    /// Create an empty floor.
    pub fn new(width: i32, height: i32) -> CoreResult<Self> {
        Ok(Self {
            blank: GridModel::new(width, height)?,
            obstacles: BTreeSet::new(),
            shelves: BTreeMap::new(),
            start: None,
            goal: None,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.blank.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.blank.height()
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.blank.in_bounds(cell)
    }

    fn check_bounds(&self, cell: Cell) -> CoreResult<()> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(InvalidRequest::OutOfBounds {
                stop: Stop::Cell,
                cell,
            })
        }
    }

    // -----------------------------------------------------------------------
    // Obstacles
    // -----------------------------------------------------------------------

    /// Block `cell`. A shelf already standing there is removed.
    pub fn add_obstacle(&mut self, cell: Cell) -> CoreResult<()> {
        self.check_bounds(cell)?;
        if self.shelves.remove(&cell).is_some() {
            log::debug!("obstacle at {cell} replaces shelf");
        }
        self.obstacles.insert(cell);
        Ok(())
    }

    /// Unblock a plain obstacle. Returns `false` if there was none.
    /// Shelves are left alone; use [`remove_shelf`](Self::remove_shelf).
    pub fn remove_obstacle(&mut self, cell: Cell) -> bool {
        self.obstacles.remove(&cell)
    }

    /// Whether `cell` is blocked by an obstacle or a shelf.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.obstacles.contains(&cell) || self.shelves.contains_key(&cell)
    }

    /// Plain obstacles (shelves excluded).
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.obstacles.iter().copied()
    }

    // -----------------------------------------------------------------------
    // Shelves
    // -----------------------------------------------------------------------

    /// Place a shelf at `cell`, replacing whatever stood there.
    pub fn add_shelf(&mut self, cell: Cell, shelf: Shelf) -> CoreResult<()> {
        self.check_bounds(cell)?;
        self.obstacles.remove(&cell);
        if let Some(old) = self.shelves.insert(cell, shelf) {
            log::debug!("shelf at {cell} replaced (held {} {})", old.quantity, old.item);
        }
        Ok(())
    }

    /// Remove the shelf at `cell`, freeing the cell.
    pub fn remove_shelf(&mut self, cell: Cell) -> Option<Shelf> {
        self.shelves.remove(&cell)
    }

    pub fn shelf(&self, cell: Cell) -> Option<&Shelf> {
        self.shelves.get(&cell)
    }

    /// All shelves in row-major order.
    pub fn shelves(&self) -> impl Iterator<Item = (Cell, &Shelf)> {
        self.shelves.iter().map(|(c, s)| (*c, s))
    }

    /// Whether any cardinal neighbour of `cell` holds a shelf.
    pub fn is_near_shelf(&self, cell: Cell) -> bool {
        self.adjacent_shelf(cell).is_some()
    }

    /// First shelf found next to `cell`, scanning neighbours in search order.
    pub fn adjacent_shelf(&self, cell: Cell) -> Option<(Cell, &Shelf)> {
        cell.neighbors_4()
            .find_map(|n| self.shelves.get(&n).map(|s| (n, s)))
    }

    /// Take `n` units from the shelf at `cell`, returning what is left.
    pub fn take_stock(&mut self, cell: Cell, n: u32) -> Result<u32, StockError> {
        let shelf = self
            .shelves
            .get_mut(&cell)
            .ok_or(StockError::NoShelf(cell))?;
        if shelf.quantity < n {
            return Err(StockError::InsufficientStock {
                cell,
                requested: n,
                available: shelf.quantity,
            });
        }
        shelf.quantity -= n;
        log::debug!("took {n} {} from {cell}, {} left", shelf.item, shelf.quantity);
        Ok(shelf.quantity)
    }

    // -----------------------------------------------------------------------
    // Start / goal markers
    // -----------------------------------------------------------------------

    pub fn set_start(&mut self, cell: Cell) {
        self.start = Some(cell);
    }

    pub fn reset_start(&mut self) {
        self.start = None;
    }

    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    pub fn set_goal(&mut self, cell: Cell) {
        self.goal = Some(cell);
    }

    pub fn reset_goal(&mut self) {
        self.goal = None;
    }

    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    /// Start and goal, or the marker that is missing.
    pub fn endpoints(&self) -> CoreResult<(Cell, Cell)> {
        let start = self
            .start
            .ok_or(InvalidRequest::MissingStop { stop: Stop::Start })?;
        let goal = self
            .goal
            .ok_or(InvalidRequest::MissingStop { stop: Stop::Goal })?;
        Ok((start, goal))
    }

    /// Clear obstacles, shelves and both markers. Dimensions are kept.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.shelves.clear();
        self.start = None;
        self.goal = None;
    }

    /// Freeze the current layout into a [`GridModel`].
    pub fn snapshot(&self) -> GridModel {
        let mut grid = self.blank.clone();
        for &cell in self.obstacles.iter().chain(self.shelves.keys()) {
            grid.block(cell);
        }
        grid
    }
}
