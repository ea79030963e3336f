//! Scratch state shared by every best-first search in the crate.

use hexmove_core::Point;

use crate::config::SearchConfig;
use crate::node::{NodePool, SearchNode};
use crate::open_list::OpenList;
use crate::traits::GridOracle;

/// Node pool, open list and neighbour buffer of one search.
///
/// The engines keep one of these across queries and [`begin`](Self::begin)
/// resets it; the nested reachability check builds a fresh one instead.
#[derive(Debug)]
pub(crate) struct SearchState {
    pub(crate) pool: NodePool,
    pub(crate) open: OpenList,
    nbuf: Vec<Point>,
}

impl SearchState {
    pub(crate) fn new(config: &SearchConfig) -> Self {
        Self {
            pool: NodePool::with_capacity(config.node_pool_size),
            open: OpenList::with_capacity(config.open_set_size),
            nbuf: Vec::with_capacity(6),
        }
    }

    /// Empty the pool and open list, then queue `origin` at cost 0.
    pub(crate) fn begin<G: GridOracle + ?Sized>(&mut self, grid: &G, origin: Point) -> usize {
        self.pool.reset();
        self.open.reset();
        let idx = self.pool.add(grid, origin);
        let node = &mut self.pool[idx];
        node.cost = 0;
        node.total = 0;
        self.open.push(&mut self.pool, idx);
        idx
    }

    /// Pop the open node with the smallest key and mark it closed.
    pub(crate) fn next(&mut self) -> Option<usize> {
        let idx = self.open.pop(&mut self.pool)?;
        self.pool[idx].closed = true;
        Some(idx)
    }

    /// Relax every neighbour of node `current`.
    ///
    /// Steps onto `exempt` skip `blocked`. With a `goal` the key is cost
    /// plus [`GridOracle::distance`] to the goal (A*), otherwise the key is
    /// the cost alone (uniform-cost). A neighbour is updated and queued only
    /// when its key strictly improves.
    pub(crate) fn expand<G, B>(
        &mut self,
        grid: &G,
        current: usize,
        exempt: Point,
        goal: Option<Point>,
        blocked: &B,
    ) where
        G: GridOracle + ?Sized,
        B: Fn(&SearchNode, &SearchNode, &G) -> bool + ?Sized,
    {
        let cur_pos = self.pool[current].pos;
        let cur_cost = self.pool[current].cost;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        grid.neighbors(cur_pos, &mut nbuf);

        for &np in nbuf.iter() {
            let ni = self.pool.find_or_add(grid, np);

            if np != exempt && !blocked(&self.pool[current], &self.pool[ni], grid) {
                continue;
            }

            let step = grid.cost(cur_pos, np);
            debug_assert!(step > 0, "non-positive step cost {step} from {cur_pos} to {np}");
            let cost = cur_cost + step;
            let total = match goal {
                Some(g) => cost + grid.distance(np, g),
                None => cost,
            };

            let n = &mut self.pool[ni];
            if total >= n.total {
                continue;
            }
            n.cost = cost;
            n.total = total;
            n.parent = current;
            n.parent_pos = cur_pos;
            n.closed = false;
            self.open.push(&mut self.pool, ni);
        }

        self.nbuf = nbuf;
    }

    /// Number of nodes created since the last [`begin`](Self::begin).
    #[inline]
    pub(crate) fn nodes(&self) -> usize {
        self.pool.len()
    }
}
