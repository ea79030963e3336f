//! Block tests: predicates deciding whether a search may step from the
//! current node onto a neighbour.
//!
//! A block test returns `true` when the step is allowed. Any
//! `Fn(&SearchNode, &SearchNode, &G) -> bool` works; the functions here are
//! the stock rules.

use crate::node::SearchNode;
use crate::traits::GridOracle;

/// Every step is allowed.
pub fn none<G: GridOracle + ?Sized>(_from: &SearchNode, _to: &SearchNode, _grid: &G) -> bool {
    true
}

/// The neighbour must not be obstructed.
pub fn obstruction<G: GridOracle + ?Sized>(
    _from: &SearchNode,
    to: &SearchNode,
    _grid: &G,
) -> bool {
    !to.tile().blocked
}

/// The neighbour must not be obstructed and the height difference must be
/// climbable according to [`GridOracle::is_passable`].
pub fn height<G: GridOracle + ?Sized>(from: &SearchNode, to: &SearchNode, grid: &G) -> bool {
    !to.tile().blocked && grid.is_passable(from.pos(), to.pos())
}
