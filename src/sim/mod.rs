//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One transition per external tick, no internal clock
//! - Seeded RNG only, re-derived per tick from the state
//! - Stable formation order (row-major, ascending column)
//! - No rendering or platform dependencies

pub mod board;
pub mod collision;
pub mod state;
pub mod tick;

pub use board::Board;
pub use collision::{any_hit, hit, without_hits};
pub use state::{Cell, GameState, Position, RngState};
pub use tick::{advance, Key, TickInput};
