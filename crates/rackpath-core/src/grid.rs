//! The [`GridModel`] type: an immutable snapshot of the floor for searching.
//!
//! A `GridModel` only knows its dimensions and which cells are blocked.
//! Shelves and obstacles are both just blocked cells here; inventory lives
//! in [`Floor`](crate::Floor).
//!
//! The first axis (`row`) spans `[0, width)` and the second (`col`) spans
//! `[0, height)`.

use crate::cell::Cell;
use crate::error::{CoreResult, InvalidRequest, Stop};

/// A rectangular grid with a set of blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

impl GridModel {
    /// Create an empty grid of the given dimensions.
    ///
    /// Fails with [`InvalidRequest::Dimensions`] if either side is not
    /// positive or the cell buffer cannot be allocated.
    pub fn new(width: i32, height: i32) -> CoreResult<Self> {
        let dims = InvalidRequest::Dimensions { width, height };
        if width <= 0 || height <= 0 {
            return Err(dims);
        }
        let Some(len) = (width as usize).checked_mul(height as usize) else {
            return Err(dims);
        };
        let mut blocked = Vec::new();
        if blocked.try_reserve_exact(len).is_err() {
            log::warn!("cannot allocate a {width}x{height} grid");
            return Err(dims);
        }
        blocked.resize(len, false);
        Ok(Self {
            width,
            height,
            blocked,
        })
    }

    /// Create a grid with the given cells blocked.
    ///
    /// Every blocked cell must lie inside the grid.
    pub fn with_blocked(
        width: i32,
        height: i32,
        blocked: impl IntoIterator<Item = Cell>,
    ) -> CoreResult<Self> {
        let mut grid = Self::new(width, height)?;
        for cell in blocked {
            let Some(i) = grid.index(cell) else {
                return Err(InvalidRequest::OutOfBounds {
                    stop: Stop::Cell,
                    cell,
                });
            };
            grid.blocked[i] = true;
        }
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Always `false`: dimensions are validated on construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Whether `cell` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        0 <= cell.row && cell.row < self.width && 0 <= cell.col && cell.col < self.height
    }

    /// Whether `cell` is an obstacle or shelf. Out-of-bounds cells are not
    /// considered blocked.
    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.blocked[i])
    }

    /// Whether `cell` is in bounds and not blocked.
    #[inline]
    pub fn is_valid(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| !self.blocked[i])
    }

    /// Traversable cardinal neighbours of `cell`, in the order given by
    /// [`Cell::neighbors_4`].
    ///
    /// Cells outside the grid have no neighbours.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let inside = self.in_bounds(cell);
        cell.neighbors_4()
            .filter(move |&n| inside && self.is_valid(n))
    }

    /// Iterate over all blocked cells in row-major order.
    pub fn blocked_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(i, _)| self.cell(i))
    }

    /// Check that `cell` can be used as `stop` of a request.
    pub fn check(&self, cell: Cell, stop: Stop) -> CoreResult<()> {
        if !self.in_bounds(cell) {
            return Err(InvalidRequest::OutOfBounds { stop, cell });
        }
        if self.is_blocked(cell) {
            return Err(InvalidRequest::Blocked { stop, cell });
        }
        Ok(())
    }

    /// Mark `cell` blocked. Out-of-bounds cells are ignored.
    pub(crate) fn block(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.blocked[i] = true;
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Cell` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some(cell.row as usize * self.height as usize + cell.col as usize)
    }

    /// Convert a flat index back to a `Cell`.
    #[inline]
    pub fn cell(&self, idx: usize) -> Cell {
        let h = self.height as usize;
        Cell::new((idx / h) as i32, (idx % h) as i32)
    }
}
