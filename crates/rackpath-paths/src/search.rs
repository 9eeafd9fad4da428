use std::collections::{BinaryHeap, VecDeque};

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry, ordered by `f` and then by push order for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the entry pushed first.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel value meaning "unreachable" in BFS distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Single-pair shortest-path search over a [`GridModel`](rackpath_core::GridModel).
///
/// `PathSearch` owns its node array, frontier and BFS buffers so that
/// repeated queries (one per route leg, say) do not allocate after the first
/// use. It carries no results from one query into the next.
pub struct PathSearch {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    // BFS caches
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_queue: VecDeque<usize>,
}

impl Default for PathSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl PathSearch {
    /// Create a search with empty caches.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a search with caches sized for grids of up to `cells` cells.
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            nodes: vec![Node::default(); cells],
            generation: 0,
            open: BinaryHeap::new(),
            bfs_map: vec![UNREACHABLE; cells],
            bfs_queue: VecDeque::new(),
        }
    }

    /// Number of cells the caches currently cover.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Start a new A* generation on a grid of `len` cells.
    ///
    /// If the grid fits within existing capacity only the generation counter
    /// is bumped, so stale nodes are ignored. Otherwise the node array is
    /// reallocated.
    pub(crate) fn begin(&mut self, len: usize) -> u32 {
        self.open.clear();
        if len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: generation 0 is what fresh nodes carry.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }
}
