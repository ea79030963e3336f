//! Pathfinding and movement ranges on colored, height-mapped hex grids.
//!
//! Tiles carry a terrain color ([`Element`](hexmove_core::Element)) and a
//! height. A mover may only cross tiles of certain colors, may only stop on
//! some of those, and cannot climb steep height differences. This crate
//! provides two engines built on a shared node pool and open list:
//!
//! - **A\*** point-to-point search ([`AStar::path`],
//!   [`AStar::shortest_path`])
//! - **Movement range** bounded uniform-cost flood fill with a dead-end
//!   filter ([`MovementRange::movement_range`])
//!
//! Both engines read the map through [`GridOracle`], implemented here for
//! [`HexGrid`](hexmove_core::HexGrid). Each engine owns and reuses its
//! scratch buffers, so repeated queries do not reallocate once warm, and a
//! single engine must only run one query at a time.

pub mod block;

mod astar;
mod config;
mod node;
mod open_list;
mod range;
mod rules;
mod search;
mod traits;

pub use astar::AStar;
pub use config::SearchConfig;
pub use node::{PathNode, SearchNode, UNREACHABLE};
pub use range::{MovementRange, ReachableTiles};
pub use rules::MoveRules;
pub use traits::GridOracle;
