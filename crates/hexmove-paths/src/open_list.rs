use std::collections::BinaryHeap;

use crate::node::NodePool;

/// Reference into the node pool, ordered by `key` for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) key: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first; ties go
        // to the node created first.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of pool indices keyed by each node's `total` cost.
///
/// Improving a node that is already queued pushes a second entry with the
/// new key instead of re-sorting the heap. An entry whose key no longer
/// matches its node, or whose node is no longer open, is stale and is
/// skipped by [`pop`](Self::pop). The first valid entry popped for a node is
/// therefore always the one carrying its current key.
#[derive(Debug, Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<NodeRef>,
}

impl OpenList {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Queue node `idx` under its current `total` and mark it open.
    pub(crate) fn push(&mut self, pool: &mut NodePool, idx: usize) {
        let node = &mut pool[idx];
        node.open = true;
        self.heap.push(NodeRef {
            idx,
            key: node.total,
        });
    }

    /// Remove and return the open node with the smallest key, clearing its
    /// open flag. Returns `None` once no open node remains.
    pub(crate) fn pop(&mut self, pool: &mut NodePool) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            let node = &mut pool[entry.idx];
            if !node.open || node.total != entry.key {
                continue;
            }
            node.open = false;
            return Some(entry.idx);
        }
        None
    }

    /// Drop every entry, keeping capacity. Must accompany every pool reset.
    pub(crate) fn reset(&mut self) {
        self.heap.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexmove_core::{Element, HexGrid, Point, Range, TileData};

    fn setup(n: i32) -> (HexGrid, NodePool, Vec<usize>) {
        let g = HexGrid::new(Range::new(0, 0, n, 1), TileData::new(Element::Stone, 0));
        let mut pool = NodePool::with_capacity(n as usize);
        let idxs = (0..n).map(|x| pool.add(&g, Point::new(x, 0))).collect();
        (g, pool, idxs)
    }

    #[test]
    fn pops_in_key_order() {
        let (_g, mut pool, idxs) = setup(5);
        let mut open = OpenList::with_capacity(8);
        for (&i, key) in idxs.iter().zip([7, 3, 9, 1, 5]) {
            pool[i].total = key;
            open.push(&mut pool, i);
            assert!(pool[i].is_open());
        }
        let mut keys = Vec::new();
        while let Some(i) = open.pop(&mut pool) {
            assert!(!pool[i].is_open());
            keys.push(pool[i].total);
        }
        assert_eq!(keys, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn decreased_key_wins_and_stale_entry_is_skipped() {
        let (_g, mut pool, idxs) = setup(3);
        let mut open = OpenList::with_capacity(8);
        pool[idxs[0]].total = 4;
        pool[idxs[1]].total = 10;
        open.push(&mut pool, idxs[0]);
        open.push(&mut pool, idxs[1]);

        // Improve node 1 while it is still queued.
        pool[idxs[1]].total = 2;
        open.push(&mut pool, idxs[1]);
        assert_eq!(open.len(), 3);

        assert_eq!(open.pop(&mut pool), Some(idxs[1]));
        assert_eq!(open.pop(&mut pool), Some(idxs[0]));
        // The old key-10 entry for node 1 is stale.
        assert_eq!(open.pop(&mut pool), None);
    }

    #[test]
    fn reopened_node_is_popped_again() {
        let (_g, mut pool, idxs) = setup(1);
        let mut open = OpenList::with_capacity(2);
        pool[idxs[0]].total = 5;
        open.push(&mut pool, idxs[0]);
        assert_eq!(open.pop(&mut pool), Some(idxs[0]));
        pool[idxs[0]].total = 3;
        open.push(&mut pool, idxs[0]);
        assert_eq!(open.pop(&mut pool), Some(idxs[0]));
        assert_eq!(open.pop(&mut pool), None);
    }

    #[test]
    fn equal_keys_pop_in_creation_order() {
        let (_g, mut pool, idxs) = setup(3);
        let mut open = OpenList::with_capacity(4);
        for &i in idxs.iter().rev() {
            pool[i].total = 1;
            open.push(&mut pool, i);
        }
        let order: Vec<_> = std::iter::from_fn(|| open.pop(&mut pool)).collect();
        assert_eq!(order, idxs);
    }

    #[test]
    fn reset_discards_entries() {
        let (_g, mut pool, idxs) = setup(2);
        let mut open = OpenList::with_capacity(4);
        pool[idxs[0]].total = 1;
        open.push(&mut pool, idxs[0]);
        open.reset();
        assert_eq!(open.len(), 0);
        assert_eq!(open.pop(&mut pool), None);
    }
}
