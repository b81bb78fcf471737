//! The rule of Conway's Game of Life, `B3/S23`.
//!
//! For the notation, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

/// The rule string. The rule is not configurable.
pub const RULE_STRING: &str = "B3/S23";

/// The state of a cell in the next generation.
///
/// A living cell survives with 2 or 3 living neighbors;
/// a dead cell is born with exactly 3.
#[inline]
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    matches!((alive, live_neighbors), (true, 2 | 3) | (false, 3))
}
