use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use hexmove_core::{Point, TileData};

use crate::traits::GridOracle;

/// A position with an associated cost, returned from range queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel cost of a node that has not been relaxed yet.
pub const UNREACHABLE: i32 = i32::MAX;

/// Parent index of a node with no predecessor (the search origin).
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// SearchNode
// ---------------------------------------------------------------------------

/// Per-coordinate bookkeeping for one search episode.
///
/// Block tests receive the current and candidate node, so the fields a test
/// may need are exposed through accessors.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub(crate) pos: Point,
    pub(crate) parent_pos: Point,
    pub(crate) parent: usize,
    pub(crate) cost: i32,
    pub(crate) total: i32,
    pub(crate) open: bool,
    pub(crate) closed: bool,
    pub(crate) tile: TileData,
}

impl SearchNode {
    fn new(pos: Point, tile: TileData) -> Self {
        Self {
            pos,
            parent_pos: pos,
            parent: NO_PARENT,
            cost: UNREACHABLE,
            total: UNREACHABLE,
            open: false,
            closed: false,
            tile,
        }
    }

    /// Grid coordinate of the node.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Tile data captured when the node was created.
    #[inline]
    pub fn tile(&self) -> &TileData {
        &self.tile
    }

    /// Best known cost from the search origin, or [`UNREACHABLE`].
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Coordinate of the predecessor on the best known route. Equal to
    /// [`pos`](Self::pos) for the origin and for unrelaxed nodes.
    #[inline]
    pub fn parent_pos(&self) -> Point {
        self.parent_pos
    }

    /// Whether the node currently sits in the open list.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the node has been popped and not re-opened since.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

// ---------------------------------------------------------------------------
// NodePool
// ---------------------------------------------------------------------------

/// Arena of [`SearchNode`]s with a coordinate index.
///
/// Nodes refer to each other by arena index only. `reset` empties the pool
/// but keeps both allocations so repeated searches do not reallocate.
#[derive(Debug, Default)]
pub(crate) struct NodePool {
    nodes: Vec<SearchNode>,
    index: HashMap<Point, usize>,
}

impl NodePool {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Create the node for `pos`. The coordinate must not be in the pool yet.
    pub(crate) fn add<G: GridOracle + ?Sized>(&mut self, grid: &G, pos: Point) -> usize {
        debug_assert!(
            !self.index.contains_key(&pos),
            "node for {pos} already exists"
        );
        let tile = grid.tile(pos).copied();
        debug_assert!(tile.is_some(), "grid has no tile at {pos}");
        let tile = tile.unwrap_or(TileData::VOID);
        let idx = self.nodes.len();
        self.nodes.push(SearchNode::new(pos, tile));
        self.index.insert(pos, idx);
        idx
    }

    /// Index of the node for `pos`, creating it if needed.
    pub(crate) fn find_or_add<G: GridOracle + ?Sized>(&mut self, grid: &G, pos: Point) -> usize {
        match self.index.get(&pos) {
            Some(&idx) => idx,
            None => self.add(grid, pos),
        }
    }

    /// Drop every node, keeping capacity.
    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }
}

impl Index<usize> for NodePool {
    type Output = SearchNode;
    #[inline]
    fn index(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }
}

impl IndexMut<usize> for NodePool {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut SearchNode {
        &mut self.nodes[idx]
    }
}
