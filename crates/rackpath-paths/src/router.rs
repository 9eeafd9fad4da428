//! Multi-stop routing: visit every waypoint between a start and a goal.
//!
//! # Ordering
//!
//! Stops are ordered by a nearest-neighbour construction on Manhattan
//! distance: from the start, repeatedly go to the closest waypoint not yet
//! visited (lowest waypoint index on ties), then finish at the goal. This is
//! a fast approximation, not an optimal tour; obstacles are ignored while
//! ordering and only matter once each leg is searched.
//!
//! # Legs
//!
//! Each consecutive pair of stops is solved by its own A* search with that
//! pair passed explicitly as start and goal. If any leg has no path the whole
//! route fails; partial routes are never returned.

use rackpath_core::{Cell, Floor, GridModel, Stop};

use crate::distance::manhattan;
use crate::error::RouteResult;
use crate::path::Path;
use crate::search::PathSearch;

/// Everything needed for one routing run.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub grid: GridModel,
    pub start: Cell,
    pub goal: Cell,
    /// Unordered; the router picks the visiting order.
    pub waypoints: Vec<Cell>,
}

impl RouteRequest {
    pub fn new(grid: GridModel, start: Cell, goal: Cell) -> Self {
        Self {
            grid,
            start,
            goal,
            waypoints: Vec::new(),
        }
    }

    pub fn with_waypoints(mut self, waypoints: impl IntoIterator<Item = Cell>) -> Self {
        self.waypoints.extend(waypoints);
        self
    }

    /// Snapshot `floor` and take its start and goal markers.
    pub fn from_floor(floor: &Floor, waypoints: impl IntoIterator<Item = Cell>) -> RouteResult<Self> {
        let (start, goal) = floor.endpoints()?;
        Ok(Self::new(floor.snapshot(), start, goal).with_waypoints(waypoints))
    }
}

/// Order `start`, `waypoints` and `goal` for visiting.
///
/// The result always begins with `start`, ends with `goal`, and lists every
/// waypoint exactly once in between.
pub fn visit_order(start: Cell, goal: Cell, waypoints: &[Cell]) -> Vec<Cell> {
    let mut locations = Vec::with_capacity(waypoints.len() + 2);
    locations.push(start);
    locations.extend_from_slice(waypoints);
    locations.push(goal);

    let n = locations.len();
    let distances: Vec<Vec<i32>> = locations
        .iter()
        .map(|&a| locations.iter().map(|&b| manhattan(a, b)).collect())
        .collect();

    let mut order = Vec::with_capacity(n);
    order.push(0);
    let mut visited = vec![false; n];
    visited[0] = true;

    for _ in 1..n - 1 {
        let current = order[order.len() - 1];
        let mut best: Option<usize> = None;
        for i in 1..n - 1 {
            if visited[i] {
                continue;
            }
            // Strict comparison keeps the lowest index on ties.
            if best.is_none_or(|b| distances[current][i] < distances[current][b]) {
                best = Some(i);
            }
        }
        if let Some(next) = best {
            visited[next] = true;
            order.push(next);
        }
    }
    order.push(n - 1);

    order.into_iter().map(|i| locations[i]).collect()
}

/// Routes through unordered waypoints by chaining A* legs.
///
/// The router keeps a [`PathSearch`] for its buffers only; each call is
/// independent of the previous one.
#[derive(Default)]
pub struct MultiTargetRouter {
    search: PathSearch,
}

impl MultiTargetRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a path from `start` to `goal` that passes through every waypoint.
    ///
    /// With no waypoints this is exactly [`PathSearch::find_path`]. Every
    /// stop is validated before any leg is searched.
    pub fn route(
        &mut self,
        grid: &GridModel,
        start: Cell,
        goal: Cell,
        waypoints: &[Cell],
    ) -> RouteResult<Path> {
        if waypoints.is_empty() {
            return self.search.find_path(grid, start, goal);
        }

        grid.check(start, Stop::Start)?;
        for (i, &w) in waypoints.iter().enumerate() {
            grid.check(w, Stop::Waypoint(i))?;
        }
        grid.check(goal, Stop::Goal)?;

        let stops = visit_order(start, goal, waypoints);
        log::debug!(
            "routing {} stops: {}",
            stops.len(),
            stops
                .iter()
                .map(Cell::to_string)
                .collect::<Vec<_>>()
                .join(" -> ")
        );

        let mut total = Path::single(start);
        for leg in stops.windows(2) {
            let path = self.search.find_path(grid, leg[0], leg[1])?;
            total.extend_leg(path);
        }
        Ok(total)
    }

    /// Run a prepared [`RouteRequest`].
    pub fn run(&mut self, request: &RouteRequest) -> RouteResult<Path> {
        self.route(
            &request.grid,
            request.start,
            request.goal,
            &request.waypoints,
        )
    }

    /// Route across `floor` from its start marker to its goal marker.
    pub fn route_floor(&mut self, floor: &Floor, waypoints: &[Cell]) -> RouteResult<Path> {
        let (start, goal) = floor.endpoints()?;
        self.route(&floor.snapshot(), start, goal, waypoints)
    }
}

/// Route with a fresh [`MultiTargetRouter`].
pub fn route(grid: &GridModel, start: Cell, goal: Cell, waypoints: &[Cell]) -> RouteResult<Path> {
    MultiTargetRouter::new().route(grid, start, goal, waypoints)
}
