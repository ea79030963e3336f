use hexmove_core::{Element, ElementMask, Point};

use crate::block;
use crate::config::SearchConfig;
use crate::node::{NO_PARENT, SearchNode};
use crate::rules::MoveRules;
use crate::search::SearchState;
use crate::traits::GridOracle;

/// Point-to-point A* search engine.
///
/// The engine keeps its node pool and open list between queries and resets
/// them at the start of each one, so a single instance must not be shared
/// by concurrent callers.
#[derive(Debug)]
pub struct AStar {
    config: SearchConfig,
    state: SearchState,
}

impl Default for AStar {
    fn default() -> Self {
        Self::new()
    }
}

impl AStar {
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

    /// Shortest path ignoring colors, obstructions and heights.
    ///
    /// Useful as a reference distance when only the topology matters.
    /// See [`search`](Self::search) for the shape of the result.
    pub fn shortest_path<G: GridOracle + ?Sized>(
        &mut self,
        grid: &G,
        start: Point,
        destination: Point,
    ) -> Option<Vec<Point>> {
        self.search(grid, start, destination, ElementMask::ANY, block::none)
    }

    /// Path a mover following `rules` can walk.
    ///
    /// Transit tiles must match [`MoveRules::path_mask`]; obstructed tiles
    /// and unclimbable height differences block. Unless
    /// `rules.any_destination` is set, a destination whose color is not in
    /// the path mask fails immediately without searching.
    pub fn path<G: GridOracle + ?Sized>(
        &mut self,
        grid: &G,
        start: Point,
        destination: Point,
        rules: &MoveRules,
    ) -> Option<Vec<Point>> {
        let mask = rules.path_mask();

        if !rules.any_destination && !destination_matches(grid, destination, mask) {
            log::trace!(
                "astar: destination {destination} is not a legal {} stop",
                rules.element
            );
            return None;
        }

        self.search(grid, start, destination, mask, block::height)
    }

    /// A* from `start` to `destination` with a custom color mask and block
    /// test.
    ///
    /// Returns the tiles to walk in order, excluding `start` and ending with
    /// `destination`, or `None` if no path exists. When `start` equals
    /// `destination` the path is empty.
    ///
    /// Only tiles whose color matches `path_mask` are expanded. The
    /// destination itself may have any color.
    pub fn search<G, B>(
        &mut self,
        grid: &G,
        start: Point,
        destination: Point,
        path_mask: ElementMask,
        blocked: B,
    ) -> Option<Vec<Point>>
    where
        G: GridOracle + ?Sized,
        B: Fn(&SearchNode, &SearchNode, &G) -> bool,
    {
        let state = &mut self.state;
        state.begin(grid, start);

        let found = loop {
            let Some(ci) = state.next() else {
                break None;
            };
            let current = &state.pool[ci];

            if current.pos == destination {
                break Some(ci);
            }

            // Checked after the destination test so that a destination of
            // any color can still be reached.
            if !path_mask.matches(current.tile.top) {
                continue;
            }

            state.expand(grid, ci, start, Some(destination), &blocked);
        };

        let Some(goal) = found else {
            log::debug!(
                "astar: no path {start} -> {destination} ({} nodes)",
                state.nodes()
            );
            return None;
        };

        let mut path = Vec::new();
        let mut ci = goal;
        while state.pool[ci].parent != NO_PARENT {
            path.push(state.pool[ci].pos);
            ci = state.pool[ci].parent;
        }
        path.reverse();

        log::debug!(
            "astar: {start} -> {destination} in {} steps, cost {} ({} nodes)",
            path.len(),
            state.pool[goal].cost,
            state.nodes()
        );
        Some(path)
    }
}

fn destination_matches<G: GridOracle + ?Sized>(grid: &G, p: Point, mask: ElementMask) -> bool {
    Element::ALL
        .into_iter()
        .any(|e| mask.matches(e) && grid.test_tile_element(p, e))
}
