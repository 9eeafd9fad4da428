//! **rackpath-core** — warehouse floor model (core types).
//!
//! This crate provides the types shared across *rackpath*: grid cells, the
//! read-only [`GridModel`] snapshot searched by `rackpath-paths`, the
//! editable [`Floor`] with its shelves and stock, and the [`FloorPlan`]
//! description used to load a floor.

pub mod cell;
pub mod error;
pub mod floor;
pub mod grid;
pub mod plan;

pub use cell::Cell;
pub use error::{CoreResult, InvalidRequest, StockError, Stop};
pub use floor::{Floor, Shelf};
pub use grid::GridModel;
pub use plan::{DEFAULT_SIZE, FloorPlan, ShelfPlacement};
