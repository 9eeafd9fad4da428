//! [`FloorPlan`]: a plain description of a floor and a routing job.
//!
//! With the `serde` feature this is the JSON document the CLI reads:
//!
//! ```json
//! {
//!   "width": 5, "height": 5,
//!   "obstacles": [{ "row": 1, "col": 1 }],
//!   "shelves": [{ "cell": { "row": 2, "col": 2 }, "item": "tulip", "color": "red", "quantity": 4 }],
//!   "start": { "row": 0, "col": 0 },
//!   "goal": { "row": 4, "col": 4 },
//!   "waypoints": [{ "row": 0, "col": 4 }]
//! }
//! ```
//!
//! Every top-level field is optional; dimensions default to 20x20.

use crate::cell::Cell;
use crate::error::CoreResult;
use crate::floor::{Floor, Shelf};

/// Default floor width and height.
pub const DEFAULT_SIZE: i32 = 20;

/// A shelf entry of a [`FloorPlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShelfPlacement {
    pub cell: Cell,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub shelf: Shelf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FloorPlan {
    pub width: i32,
    pub height: i32,
    pub obstacles: Vec<Cell>,
    pub shelves: Vec<ShelfPlacement>,
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
    pub waypoints: Vec<Cell>,
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            obstacles: Vec::new(),
            shelves: Vec::new(),
            start: None,
            goal: None,
            waypoints: Vec::new(),
        }
    }
}

impl FloorPlan {
    /// Build the [`Floor`] this plan describes.
    ///
    /// Obstacles are placed before shelves, so a cell listed as both ends up
    /// holding the shelf.
    pub fn to_floor(&self) -> CoreResult<Floor> {
        let mut floor = Floor::new(self.width, self.height)?;
        for &cell in &self.obstacles {
            floor.add_obstacle(cell)?;
        }
        for placement in &self.shelves {
            floor.add_shelf(placement.cell, placement.shelf.clone())?;
        }
        if let Some(start) = self.start {
            floor.set_start(start);
        }
        if let Some(goal) = self.goal {
            floor.set_goal(goal);
        }
        log::debug!(
            "floor {}x{} with {} obstacles, {} shelves",
            self.width,
            self.height,
            self.obstacles.len(),
            self.shelves.len()
        );
        Ok(floor)
    }

    /// Describe an existing floor. Waypoints are left empty.
    pub fn from_floor(floor: &Floor) -> Self {
        Self {
            width: floor.width(),
            height: floor.height(),
            obstacles: floor.obstacles().collect(),
            shelves: floor
                .shelves()
                .map(|(cell, shelf)| ShelfPlacement {
                    cell,
                    shelf: shelf.clone(),
                })
                .collect(),
            start: floor.start(),
            goal: floor.goal(),
            waypoints: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvalidRequest, Stop};

    #[test]
    fn default_is_empty_twenty_square() {
        let plan = FloorPlan::default();
        let floor = plan.to_floor().unwrap();
        assert_eq!((floor.width(), floor.height()), (20, 20));
        assert_eq!(floor.snapshot().blocked_cells().count(), 0);
    }

    #[test]
    fn shelf_wins_over_obstacle() {
        let c = Cell::new(1, 1);
        let plan = FloorPlan {
            width: 3,
            height: 3,
            obstacles: vec![c],
            shelves: vec![ShelfPlacement {
                cell: c,
                shelf: Shelf::new("lily", "yellow", 2),
            }],
            ..FloorPlan::default()
        };
        let floor = plan.to_floor().unwrap();
        assert_eq!(floor.obstacles().count(), 0);
        assert_eq!(floor.shelf(c).map(|s| s.quantity), Some(2));
    }

    #[test]
    fn out_of_bounds_entry_fails() {
        let plan = FloorPlan {
            width: 2,
            height: 2,
            obstacles: vec![Cell::new(5, 5)],
            ..FloorPlan::default()
        };
        assert_eq!(
            plan.to_floor().unwrap_err(),
            InvalidRequest::OutOfBounds {
                stop: Stop::Cell,
                cell: Cell::new(5, 5)
            }
        );
    }

    #[test]
    fn from_floor_round_trip() {
        let mut floor = Floor::new(4, 4).unwrap();
        floor.add_obstacle(Cell::new(0, 3)).unwrap();
        floor
            .add_shelf(Cell::new(2, 2), Shelf::new("rose", "pink", 7))
            .unwrap();
        floor.set_start(Cell::new(0, 0));

        let plan = FloorPlan::from_floor(&floor);
        let rebuilt = plan.to_floor().unwrap();
        assert_eq!(rebuilt.snapshot(), floor.snapshot());
        assert_eq!(rebuilt.start(), Some(Cell::new(0, 0)));
        assert_eq!(rebuilt.goal(), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn parses_partial_document() {
        let json = r#"{
            "width": 5,
            "height": 5,
            "shelves": [
                { "cell": { "row": 2, "col": 2 }, "item": "tulip", "color": "red", "quantity": 4 }
            ],
            "start": { "row": 0, "col": 0 },
            "goal": { "row": 4, "col": 4 }
        }"#;
        let plan: FloorPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.width, 5);
        assert!(plan.obstacles.is_empty());
        assert!(plan.waypoints.is_empty());
        assert_eq!(plan.shelves[0].shelf, Shelf::new("tulip", "red", 4));
        assert_eq!(plan.goal, Some(Cell::new(4, 4)));
    }

    #[test]
    fn empty_document_uses_defaults() {
        let plan: FloorPlan = serde_json::from_str("{}").unwrap();
        assert_eq!(plan, FloorPlan::default());
    }
}
