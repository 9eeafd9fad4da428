//! Property-based tests for search and routing.
//!
//! Random floors are generated with proptest and every result is checked
//! against a BFS distance map of the same grid.

use proptest::prelude::*;
use rackpath_core::{Cell, GridModel};
use rackpath_paths::{PathSearch, RouteError, UNREACHABLE, find_path, route, visit_order};

// =============================================================================
// Strategies
// =============================================================================

/// A grid plus stops that are guaranteed to be open cells.
#[derive(Debug, Clone)]
struct Layout {
    grid: GridModel,
    start: Cell,
    goal: Cell,
    waypoints: Vec<Cell>,
}

fn arb_cell(width: i32, height: i32) -> impl Strategy<Value = Cell> {
    (0..width, 0..height).prop_map(|(row, col)| Cell::new(row, col))
}

/// Roughly 30% of cells blocked, with up to `max_waypoints` waypoints.
fn arb_layout(max_side: i32, max_waypoints: usize) -> impl Strategy<Value = Layout> {
    (2..=max_side, 2..=max_side).prop_flat_map(move |(width, height)| {
        let mask = prop::collection::vec(prop::bool::weighted(0.3), (width * height) as usize);
        let stops = prop::collection::vec(arb_cell(width, height), 2..=max_waypoints + 2);

        (mask, stops).prop_map(move |(mut mask, stops)| {
            for s in &stops {
                mask[(s.row * height + s.col) as usize] = false;
            }
            let blocked: Vec<Cell> = (0..width)
                .flat_map(|row| (0..height).map(move |col| Cell::new(row, col)))
                .filter(|c| mask[(c.row * height + c.col) as usize])
                .collect();
            let grid = GridModel::with_blocked(width, height, blocked)
                .expect("generated cells lie inside the grid");

            Layout {
                grid,
                start: stops[0],
                goal: stops[stops.len() - 1],
                waypoints: stops[1..stops.len() - 1].to_vec(),
            }
        })
    })
}

fn bfs_distance(search: &mut PathSearch, grid: &GridModel, from: Cell, to: Cell) -> i32 {
    search.bfs_map(grid, &[from]);
    search.bfs_at(grid, to)
}

// =============================================================================
// Property Tests: A*
// =============================================================================

proptest! {
    /// A* finds a path exactly when BFS reaches the goal, and it is as short.
    #[test]
    fn astar_length_matches_bfs(layout in arb_layout(8, 0)) {
        let Layout { grid, start, goal, .. } = layout;
        let expected = bfs_distance(&mut PathSearch::new(), &grid, start, goal);

        match find_path(&grid, start, goal) {
            Ok(p) => {
                prop_assert_eq!(p.steps() as i32, expected);
                prop_assert_eq!(p.start(), start);
                prop_assert_eq!(p.goal(), goal);
                prop_assert!(p.is_contiguous());
                prop_assert!(p.iter().all(|&c| grid.is_valid(c)));
            }
            Err(e) => {
                prop_assert!(e.is_no_path(), "unexpected error: {}", e);
                prop_assert_eq!(expected, UNREACHABLE);
            }
        }
    }

    /// Repeating a search on a reused `PathSearch` gives the same path.
    #[test]
    fn reused_search_is_deterministic(layout in arb_layout(8, 0)) {
        let Layout { grid, start, goal, .. } = layout;
        let mut search = PathSearch::new();
        let first = search.find_path(&grid, start, goal);
        let second = search.find_path(&grid, start, goal);
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Property Tests: Multi-stop routing
// =============================================================================

proptest! {
    /// A route starts and ends at the right cells, visits every waypoint,
    /// moves one cardinal step at a time and chains optimal legs. When it
    /// fails, the reported leg is the first one BFS cannot connect.
    #[test]
    fn route_chains_optimal_legs(layout in arb_layout(7, 4)) {
        let Layout { grid, start, goal, waypoints } = layout;
        let stops = visit_order(start, goal, &waypoints);
        let mut search = PathSearch::new();
        let legs: Vec<i32> = stops
            .windows(2)
            .map(|pair| bfs_distance(&mut search, &grid, pair[0], pair[1]))
            .collect();
        let first_cut = legs.iter().position(|&d| d == UNREACHABLE);

        match route(&grid, start, goal, &waypoints) {
            Ok(p) => {
                prop_assert_eq!(first_cut, None);
                prop_assert_eq!(p.start(), start);
                prop_assert_eq!(p.goal(), goal);
                prop_assert!(p.is_contiguous(), "route has a jump or repeated joint: {:?}", p);
                for &w in &waypoints {
                    prop_assert!(p.contains(w), "route misses waypoint {}", w);
                }
                prop_assert!(p.iter().all(|&c| grid.is_valid(c)));
                prop_assert_eq!(p.steps() as i32, legs.iter().sum::<i32>());
            }
            Err(RouteError::NoPathFound { from, to }) => {
                prop_assert_eq!(first_cut.map(|i| (stops[i], stops[i + 1])), Some((from, to)));
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    /// Distances saturate instead of overflowing, so ordering never panics.
    #[test]
    fn visit_order_accepts_any_cells(
        start in any::<(i32, i32)>(),
        goal in any::<(i32, i32)>(),
        waypoints in prop::collection::vec(any::<(i32, i32)>(), 0..6),
    ) {
        let waypoints: Vec<Cell> = waypoints.into_iter().map(Cell::from).collect();
        let order = visit_order(start.into(), goal.into(), &waypoints);
        prop_assert_eq!(order.len(), waypoints.len() + 2);
        prop_assert_eq!(order[0], Cell::from(start));
        prop_assert_eq!(order[order.len() - 1], Cell::from(goal));
    }
}
