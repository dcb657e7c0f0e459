//! Per-query search state shared by the cell searches.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use rectnav_core::{Cell, Point};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Which end of the query a search front grows from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub(crate) fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    #[inline]
    fn slot(self) -> usize {
        match self {
            Direction::Forward => 0,
            Direction::Backward => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// Best known state of one (cell, direction) pair.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    /// Path length from this direction's endpoint, measured through
    /// crossing points.
    pub(crate) g: f64,
    /// Where the best known route enters the cell. For a root this is the
    /// literal endpoint.
    pub(crate) crossing: Point,
    /// Predecessor cell id, `None` for a search root.
    pub(crate) parent: Option<usize>,
    pub(crate) open: bool,
}

impl Node {
    pub(crate) fn root(at: Point) -> Self {
        Self {
            g: 0.0,
            crossing: at,
            parent: None,
            open: true,
        }
    }
}

/// Reference into the node arrays, ordered by `f` for use in `BinaryHeap`.
///
/// Equal priorities pop in insertion order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) dir: Direction,
    pub(crate) f: f64,
    seq: u64,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest, first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of [`NodeRef`]s with FIFO tie-breaking.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, idx: usize, dir: Direction, f: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(NodeRef { idx, dir, f, seq });
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Cells discovered during one query, interned to dense ids, with one node
/// array per direction.
///
/// Everything here lives for a single query and is dropped with it.
#[derive(Default)]
pub(crate) struct SearchSpace {
    cells: Vec<Cell>,
    ids: HashMap<Cell, usize>,
    nodes: [Vec<Option<Node>>; 2],
}

impl SearchSpace {
    /// Dense id of `cell`, interning it on first sight.
    pub(crate) fn id(&mut self, cell: Cell) -> usize {
        if let Some(&i) = self.ids.get(&cell) {
            return i;
        }
        let i = self.cells.len();
        self.cells.push(cell);
        self.ids.insert(cell, i);
        for nodes in &mut self.nodes {
            nodes.push(None);
        }
        i
    }

    #[inline]
    pub(crate) fn cell(&self, id: usize) -> Cell {
        self.cells[id]
    }

    #[inline]
    pub(crate) fn node(&self, dir: Direction, id: usize) -> Option<&Node> {
        self.nodes[dir.slot()][id].as_ref()
    }

    #[inline]
    pub(crate) fn set(&mut self, dir: Direction, id: usize, node: Node) {
        self.nodes[dir.slot()][id] = Some(node);
    }

    #[inline]
    pub(crate) fn close(&mut self, dir: Direction, id: usize) {
        if let Some(n) = self.nodes[dir.slot()][id].as_mut() {
            n.open = false;
        }
    }

    /// Cells from `id` back to the root of `dir`, in that order.
    pub(crate) fn chain(&self, dir: Direction, id: usize) -> Vec<Cell> {
        let mut out = Vec::new();
        let mut cur = Some(id);
        while let Some(i) = cur {
            out.push(self.cells[i]);
            cur = self.node(dir, i).and_then(|n| n.parent);
        }
        out
    }
}
