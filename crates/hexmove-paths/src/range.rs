//! Movement ranges: every tile a mover can reach within a cost budget.

use std::collections::HashMap;

use hexmove_core::{ElementMask, Point};

use crate::block;
use crate::config::SearchConfig;
use crate::node::{PathNode, SearchNode};
use crate::rules::MoveRules;
use crate::search::SearchState;
use crate::traits::GridOracle;

// ---------------------------------------------------------------------------
// ReachableTiles
// ---------------------------------------------------------------------------

/// Result of a range query: the reachable tiles with their cost from the
/// origin, in non-decreasing cost order.
///
/// A tile's cost is its *ring*. The origin is the only tile in ring 0.
/// Lookups by coordinate go through an index, so [`contains`](Self::contains)
/// and [`cost_of`](Self::cost_of) are O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawReachableTiles"))]
pub struct ReachableTiles {
    origin: Point,
    budget: i32,
    nodes: Vec<PathNode>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<Point, usize>,
}

/// Serialized form of [`ReachableTiles`]; the index is rebuilt on load.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawReachableTiles {
    origin: Point,
    budget: i32,
    nodes: Vec<PathNode>,
}

#[cfg(feature = "serde")]
impl From<RawReachableTiles> for ReachableTiles {
    fn from(raw: RawReachableTiles) -> Self {
        Self::new(raw.origin, raw.budget, raw.nodes)
    }
}

impl ReachableTiles {
    fn new(origin: Point, budget: i32, nodes: Vec<PathNode>) -> Self {
        let mut tiles = Self {
            origin,
            budget,
            nodes,
            index: HashMap::new(),
        };
        tiles.reindex();
        tiles
    }

    /// Keep only the tiles `keep` accepts.
    fn retain(&mut self, keep: impl FnMut(&PathNode) -> bool) {
        self.nodes.retain(keep);
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index.clear();
        self.index.reserve(self.nodes.len());
        for (i, n) in self.nodes.iter().enumerate() {
            self.index.entry(n.pos).or_insert(i);
        }
    }

    /// Where the query started.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The cost budget of the query.
    #[inline]
    pub fn budget(&self) -> i32 {
        self.budget
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reachable tiles with their costs.
    #[inline]
    pub fn as_slice(&self) -> &[PathNode] {
        &self.nodes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PathNode> {
        self.nodes.iter()
    }

    /// Reachable coordinates, cheapest first.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|n| n.pos)
    }

    /// Whether `p` is in the range.
    pub fn contains(&self, p: Point) -> bool {
        self.index.contains_key(&p)
    }

    /// Cost of reaching `p`, if it is in the range.
    pub fn cost_of(&self, p: Point) -> Option<i32> {
        self.index.get(&p).map(|&i| self.nodes[i].cost)
    }

    /// Tiles whose cost is exactly `ring`.
    pub fn ring(&self, ring: i32) -> Vec<Point> {
        self.nodes
            .iter()
            .filter(|n| n.cost == ring)
            .map(|n| n.pos)
            .collect()
    }

    /// Tiles grouped by cost: `rings()[k]` holds the tiles of cost `k`.
    ///
    /// With non-unit step costs some rings may be empty. Tiles with a
    /// negative cost belong to no ring.
    pub fn rings(&self) -> Vec<Vec<Point>> {
        let Some(max) = self.nodes.iter().map(|n| n.cost).filter(|&c| c >= 0).max() else {
            return Vec::new();
        };
        let mut rings = vec![Vec::new(); max as usize + 1];
        for n in &self.nodes {
            if let Ok(ring) = usize::try_from(n.cost) {
                rings[ring].push(n.pos);
            }
        }
        rings
    }
}

impl<'a> IntoIterator for &'a ReachableTiles {
    type Item = &'a PathNode;
    type IntoIter = std::slice::Iter<'a, PathNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

// ---------------------------------------------------------------------------
// MovementRange
// ---------------------------------------------------------------------------

/// Bounded uniform-cost flood fill with a dead-end filter.
///
/// Like [`AStar`](crate::AStar), the engine owns scratch buffers that are
/// reset by every query; one instance serves one caller at a time.
#[derive(Debug)]
pub struct MovementRange {
    config: SearchConfig,
    state: SearchState,
}

impl Default for MovementRange {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementRange {
    /// Create an engine with the default [`SearchConfig`].
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create an engine with explicit buffer sizes.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            state: SearchState::new(&config),
            config,
        }
    }

    /// The configuration the engine was built with.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Tiles a mover following `rules` can reach from `origin` spending at
    /// most `budget`.
    ///
    /// Tiles cheaper than `budget` must match [`MoveRules::path_mask`];
    /// tiles costing exactly `budget` must match
    /// [`MoveRules::destination_mask`]. Obstructions and unclimbable height
    /// differences block.
    ///
    /// Unless `rules.any_destination` is set, every tile from which no
    /// destination-colored tile can be reached with the budget left over is
    /// then dropped. The origin is always kept in ring 0 when `budget >= 0`.
    pub fn movement_range<G: GridOracle + ?Sized>(
        &mut self,
        grid: &G,
        origin: Point,
        budget: i32,
        rules: &MoveRules,
    ) -> ReachableTiles {
        let destination_mask = rules.destination_mask();
        let path_mask = rules.path_mask();

        let mut tiles = self.tiles_in_range(
            grid,
            origin,
            budget,
            destination_mask,
            path_mask,
            block::height,
        );

        if rules.any_destination {
            return tiles;
        }

        let config = self.config;
        let before = tiles.len();
        tiles.retain(|n| {
            n.pos == origin
                || stop_reachable(
                    &config,
                    grid,
                    n.pos,
                    budget - n.cost,
                    destination_mask,
                    origin,
                    &block::height,
                )
        });

        if tiles.len() != before {
            log::trace!(
                "range: dropped {} dead-end tiles around {origin}",
                before - tiles.len()
            );
        }
        tiles
    }

    /// Uniform-cost flood fill from `origin` with explicit masks and block
    /// test, without the dead-end filter.
    ///
    /// The origin is accepted whatever its color. Any other tile is accepted
    /// if it matches `destination_mask` when its cost equals `budget`, or
    /// `path_mask` when its cost is lower. Rejected tiles are not expanded.
    pub fn tiles_in_range<G, B>(
        &mut self,
        grid: &G,
        origin: Point,
        budget: i32,
        destination_mask: ElementMask,
        path_mask: ElementMask,
        blocked: B,
    ) -> ReachableTiles
    where
        G: GridOracle + ?Sized,
        B: Fn(&SearchNode, &SearchNode, &G) -> bool,
    {
        let state = &mut self.state;
        state.begin(grid, origin);

        let mut nodes = Vec::new();
        while let Some(ci) = state.next() {
            let current = &state.pool[ci];

            // Pops never get cheaper, so nothing past here fits either.
            if current.cost > budget {
                break;
            }

            if current.pos != origin {
                let mask = if current.cost == budget {
                    destination_mask
                } else {
                    path_mask
                };
                if !mask.matches(current.tile.top) {
                    continue;
                }
            }

            nodes.push(PathNode {
                pos: current.pos,
                cost: current.cost,
            });

            state.expand(grid, ci, origin, None, &blocked);
        }

        log::debug!(
            "range: {} tiles within {budget} of {origin} ({} nodes)",
            nodes.len(),
            state.nodes()
        );

        ReachableTiles::new(origin, budget, nodes)
    }
}

/// Whether any tile matching `destination_mask` can be reached from `from`
/// spending at most `remaining`, `from` itself included.
///
/// Runs on its own freshly allocated state so it can be called while an
/// engine's scratch buffers still hold an outer search. Colors do not
/// restrict transit here; only `blocked` does, and steps onto `exempt` skip
/// it.
fn stop_reachable<G, B>(
    config: &SearchConfig,
    grid: &G,
    from: Point,
    remaining: i32,
    destination_mask: ElementMask,
    exempt: Point,
    blocked: &B,
) -> bool
where
    G: GridOracle + ?Sized,
    B: Fn(&SearchNode, &SearchNode, &G) -> bool,
{
    let mut state = SearchState::new(config);
    state.begin(grid, from);

    while let Some(ci) = state.next() {
        let current = &state.pool[ci];
        if current.cost > remaining {
            return false;
        }
        if destination_mask.matches(current.tile.top) {
            return true;
        }
        state.expand(grid, ci, exempt, None, blocked);
    }
    false
}
