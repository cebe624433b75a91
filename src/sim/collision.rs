//! Cell-exact collision tests
//!
//! Shots and invaders each occupy exactly one cell, so collision is
//! plain position equality and resolution is set filtering. Everything
//! here is order-independent: filtering removes by membership, not by
//! pairing, so one shot can take out several stacked positions and
//! vice versa.

use super::state::Position;

/// Two entities collide when they share a cell
pub fn hit(a: Position, b: Position) -> bool {
    a.row == b.row && a.col == b.col
}

/// Keep the entries of `targets` that share no cell with `against`
pub fn without_hits(targets: &[Position], against: &[Position]) -> Vec<Position> {
    targets
        .iter()
        .filter(|t| !against.iter().any(|a| hit(**t, *a)))
        .copied()
        .collect()
}

/// Whether any entry of `a` shares a cell with any entry of `b`
pub fn any_hit(a: &[Position], b: &[Position]) -> bool {
    a.iter().any(|x| b.iter().any(|y| hit(*x, *y)))
}
