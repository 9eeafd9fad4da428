use rackpath_core::{Cell, GridModel, Stop};

use crate::distance::manhattan;
use crate::error::{RouteError, RouteResult};
use crate::path::Path;
use crate::search::{NodeRef, PathSearch};

impl PathSearch {
    /// Compute the shortest path from `start` to `goal` using A* with the
    /// Manhattan heuristic and unit step costs.
    ///
    /// Returns the full path (including both endpoints). Start and goal must
    /// be in bounds and unblocked; otherwise the request is rejected before
    /// searching. An unreachable goal is [`RouteError::NoPathFound`].
    pub fn find_path(&mut self, grid: &GridModel, start: Cell, goal: Cell) -> RouteResult<Path> {
        grid.check(start, Stop::Start)?;
        grid.check(goal, Stop::Goal)?;

        if start == goal {
            return Ok(Path::single(start));
        }

        match self.astar(grid, start, goal) {
            Some(path) => Ok(path),
            None => {
                log::debug!("no path from {start} to {goal}");
                Err(RouteError::NoPathFound {
                    from: start,
                    to: goal,
                })
            }
        }
    }

    fn astar(&mut self, grid: &GridModel, start: Cell, goal: Cell) -> Option<Path> {
        let start_idx = grid.index(start)?;
        let goal_idx = grid.index(goal)?;

        let cur_gen = self.begin(grid.len());
        let mut seq: u64 = 0;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }
        self.open.push(NodeRef {
            idx: start_idx,
            f: 0,
            seq,
        });

        let mut expanded = 0usize;
        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip entries for nodes already expanded at a lower cost.
            if !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_cell = grid.cell(ci);

            for nc in grid.neighbors(current_cell) {
                let Some(ni) = grid.index(nc) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.parent = ci;
                n.open = true;

                seq += 1;
                self.open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + manhattan(goal, nc),
                    seq,
                });
            }
        };

        log::trace!("A* {start} -> {goal}: expanded {expanded} cells");

        if !found {
            return None;
        }

        // Reconstruct path.
        let mut cells = Vec::with_capacity(self.nodes[goal_idx].g as usize + 1);
        let mut ci = goal_idx;
        while ci != usize::MAX {
            cells.push(grid.cell(ci));
            ci = self.nodes[ci].parent;
        }
        cells.reverse();
        Some(Path::from_cells(cells))
    }
}

/// Find a shortest path with a fresh [`PathSearch`].
pub fn find_path(grid: &GridModel, start: Cell, goal: Cell) -> RouteResult<Path> {
    PathSearch::with_capacity(grid.len()).find_path(grid, start, goal)
}
