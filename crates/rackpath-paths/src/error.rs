//! Search and routing error type.

use thiserror::Error;

use rackpath_core::{Cell, InvalidRequest};

/// Why a search or route produced no path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The request was rejected before any search ran.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] InvalidRequest),

    /// Every reachable cell was explored without connecting the two stops.
    /// For a route, `from`/`to` name the leg that failed.
    #[error("no path from {from} to {to}")]
    NoPathFound { from: Cell, to: Cell },
}

impl RouteError {
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
