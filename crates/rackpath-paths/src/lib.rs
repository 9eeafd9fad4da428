//! Pathfinding on warehouse floor grids.
//!
//! This crate searches the [`GridModel`](rackpath_core::GridModel) snapshots
//! produced by `rackpath-core`:
//!
//! - **A\*** shortest-path search ([`PathSearch::find_path`], [`find_path`])
//! - **Multi-stop routing** through unordered waypoints
//!   ([`MultiTargetRouter::route`], [`route`])
//! - **BFS** unweighted distance maps ([`PathSearch::bfs_map`])
//!
//! Movement is 4-connected with unit step cost. Searches never touch storage
//! and never mutate the grid; "no path" is an ordinary
//! [`RouteError::NoPathFound`] value.
//!
//! [`PathSearch`] and [`MultiTargetRouter`] own reusable buffers, so keeping
//! one around across queries avoids reallocating per search. The free
//! functions build a fresh one per call.

mod astar;
mod bfs;
mod distance;
mod error;
mod path;
mod router;
mod search;

pub use astar::find_path;
pub use distance::manhattan;
pub use error::{RouteError, RouteResult};
pub use path::Path;
pub use router::{MultiTargetRouter, RouteRequest, route, visit_order};
pub use search::{PathSearch, UNREACHABLE};
