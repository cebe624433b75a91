//! Game state and core simulation types
//!
//! Everything that must survive from one tick to the next lives here.
//! The state is replaced wholesale by [`super::advance`], never mutated
//! in place; the engine itself keeps nothing between calls.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::consts::*;
use crate::tuning::Tuning;

/// What occupies a board cell, for the external painter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Invader,
    Shot,
}

/// A cell address: `row` grows toward the player, `col` grows rightward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether this position addresses a real board cell
    pub fn on_board(&self) -> bool {
        (0..GRID_SIZE).contains(&self.row) && (0..GRID_SIZE).contains(&self.col)
    }
}

/// RNG state wrapper for serialization
///
/// Only the seed is carried; each tick derives a fresh stream so the
/// transition never drags a mutable RNG cursor across steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Stream for one simulation step
    pub fn for_tick(&self, tick: u64) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed ^ tick.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Complete game state (deterministic, serializable)
///
/// `board` is a derived projection of the other fields, rebuilt from
/// scratch every step; the simulation never reads it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// RNG seed for reproducibility
    pub rng: RngState,
    /// Last tick folded in; supplied by the driver, frozen after game over
    pub tick: u64,
    /// Rasterized board for the painter
    pub board: Board,
    /// Ship column, clamped to the board every step
    pub ship_col: i32,
    /// Remaining lives; may go negative, game over derives from `<= 0`
    pub lives: i32,
    /// Latched once lives run out or the formation reaches the ship row
    pub game_over: bool,
    /// One point per step in which any player shot found an invader
    pub score: u32,
    /// Sideways drift direction of the formation, `+1` or `-1`
    pub drift_dir: i32,
    /// Live invaders, row-major with ascending columns per row
    pub invaders: Vec<Position>,
    /// Invader shots, moving toward the ship (rows increase)
    pub incoming: Vec<Position>,
    /// Player shots, moving toward the formation (rows decrease)
    pub outgoing: Vec<Position>,
    /// Current invader fire modulus; shrinks as waves clear
    pub shot_interval: u64,
    /// Difficulty table for this run
    pub tuning: Tuning,
}

impl GameState {
    /// Create the starting state for a run with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Starting state with a custom difficulty table
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let ship_col = GRID_SIZE - 1;
        let invaders = formation();
        let board = Board::rasterize(ship_col, &invaders, &[], &[]);
        Self {
            rng: RngState::new(seed),
            tick: 0,
            board,
            ship_col,
            lives: tuning.start_lives,
            game_over: false,
            score: 0,
            drift_dir: 1,
            invaders,
            incoming: Vec::new(),
            outgoing: Vec::new(),
            shot_interval: tuning.start_shot_interval,
            tuning,
        }
    }
}

/// Build a fresh wave of invaders
///
/// Rows alternate their column parity, giving the classic staggered
/// block in the middle of the board. The result is row-major with
/// ascending columns inside each row; the direction-flip check in the
/// tick relies on that ordering.
pub fn formation() -> Vec<Position> {
    (0..INVADER_ROWS)
        .flat_map(|row| {
            (0..GRID_SIZE / 2)
                .filter(move |k| k % 2 == row % 2)
                .map(move |k| Position::new(row, k + 4))
        })
        .collect()
}
