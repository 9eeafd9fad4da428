//! Error types for floor construction, request validation and shelf stock.

use std::fmt;

use thiserror::Error;

use crate::cell::Cell;

/// Which stop of a request a cell was supplied as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stop {
    Start,
    Goal,
    /// A waypoint, by its position in the caller's waypoint list.
    Waypoint(usize),
    /// A plain floor edit (obstacle or shelf placement).
    Cell,
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
            Self::Waypoint(i) => write!(f, "waypoint #{i}"),
            Self::Cell => f.write_str("cell"),
        }
    }
}

/// A request that cannot be searched at all.
///
/// Detected before any search begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    Dimensions { width: i32, height: i32 },

    #[error("{stop} {cell} lies outside the grid")]
    OutOfBounds { stop: Stop, cell: Cell },

    #[error("{stop} {cell} is blocked")]
    Blocked { stop: Stop, cell: Cell },

    #[error("{stop} has not been set")]
    MissingStop { stop: Stop },
}

/// Errors produced when taking stock from a shelf.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("no shelf at {0}")]
    NoShelf(Cell),

    #[error("shelf at {cell} holds {available}, cannot take {requested}")]
    InsufficientStock {
        cell: Cell,
        requested: u32,
        available: u32,
    },
}

pub type CoreResult<T> = Result<T, InvalidRequest>;
