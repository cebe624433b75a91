//! Grid Invaders - a deterministic grid-based shooter engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `tuning`: Data-driven difficulty numbers
//!
//! The engine is a pure transition function over an external tick
//! stream: the driver folds [`sim::advance`] across its clock and
//! paints whatever state comes back. Rendering, input devices, and
//! timers are the driver's problem; nothing here knows about them.

pub mod sim;
pub mod tuning;

pub use sim::{advance, Board, Cell, GameState, Key, Position, TickInput};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Board edge length; the board is always square
    pub const GRID_SIZE: i32 = 10;
    /// Row the ship lives on (bottom edge)
    pub const SHIP_ROW: i32 = GRID_SIZE - 1;
    /// Rows of invaders in a fresh wave
    pub const INVADER_ROWS: i32 = 3;

    /// Lives at the start of a run
    pub const START_LIVES: i32 = 3;
    /// Tick modulus for invader fire at the start of a run
    pub const START_SHOT_INTERVAL: u64 = 20;
    /// How much the fire modulus shrinks per cleared wave
    pub const SHOT_INTERVAL_STEP: u64 = 5;
    /// Fire modulus never drops below this (a zero modulus is a division fault)
    pub const MIN_SHOT_INTERVAL: u64 = 5;

    /// The formation drifts sideways every this many ticks
    pub const DRIFT_PERIOD: u64 = 10;
    /// Added to the fire modulus to form the descent modulus; descent
    /// ticks are a strict subset of drift ticks
    pub const DESCENT_LAG: u64 = 10;
}
