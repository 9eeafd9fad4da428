use rackpath_core::{Cell, GridModel};

use crate::search::{PathSearch, UNREACHABLE};

impl PathSearch {
    /// Compute a multi-source breadth-first distance map over `grid`.
    ///
    /// Each step has cost 1. The returned slice is indexed like
    /// [`GridModel::index`]; cells not reached hold [`UNREACHABLE`].
    /// Sources that are out of bounds or blocked are ignored.
    pub fn bfs_map(&mut self, grid: &GridModel, sources: &[Cell]) -> &[i32] {
        let len = grid.len();
        self.bfs_map.clear();
        self.bfs_map.resize(len, UNREACHABLE);
        self.bfs_queue.clear();

        for &src in sources {
            if !grid.is_valid(src) {
                continue;
            }
            if let Some(si) = grid.index(src) {
                if self.bfs_map[si] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[si] = 0;
                self.bfs_queue.push_back(si);
            }
        }

        while let Some(ci) = self.bfs_queue.pop_front() {
            let current_dist = self.bfs_map[ci];
            for np in grid.neighbors(grid.cell(ci)) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[ni] = current_dist + 1;
                self.bfs_queue.push_back(ni);
            }
        }

        &self.bfs_map[..len]
    }

    /// Query the BFS distance at a specific cell.
    ///
    /// Returns [`UNREACHABLE`] if the cell is outside `grid` or was not
    /// reached by the last `bfs_map` call on it.
    pub fn bfs_at(&self, grid: &GridModel, cell: Cell) -> i32 {
        match grid.index(cell) {
            Some(i) if i < self.bfs_map.len() => self.bfs_map[i],
            _ => UNREACHABLE,
        }
    }
}
