//! Per-tick state transition
//!
//! [`advance`] is the whole engine: one call folds one external tick
//! and one held key into the next state. It is total and side-effect
//! free; the only randomness is the seeded per-tick stream used to
//! pick which invader fires.

use rand::Rng;

use super::board::Board;
use super::collision;
use super::state::{self, GameState, Position};
use crate::consts::{GRID_SIZE, SHIP_ROW};

/// The key held by the player for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Key {
    #[default]
    None,
    Left,
    Right,
    Fire,
}

impl Key {
    /// Map a DOM-style key code from an external driver; anything
    /// unrecognized is a no-op. Nothing in this crate produces key
    /// codes, so the headless binary feeds [`Key`] values directly.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Space" => Key::Fire,
            _ => Key::None,
        }
    }
}

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Monotonically increasing step counter from the driver's clock
    pub tick: u64,
    /// Currently held key
    pub key: Key,
}

/// Advance the game by one tick
///
/// Step order: input, ship clamp, wave regeneration, formation drift,
/// boundary flip, invader fire, shot propagation, collision filtering,
/// scoring, damage, terminal check, rasterization.
pub fn advance(state: &GameState, input: &TickInput) -> GameState {
    let t = state.tuning;

    // Input reaches the ship even after the run has ended, so the
    // terminal frame still tracks the player's cursor.
    let ship_col = steer(state.ship_col, input.key);
    let fired = matches!(input.key, Key::Fire).then(|| Position::new(SHIP_ROW - 1, ship_col));

    if state.game_over {
        // Time is frozen: the tick counter holds and nothing else moves.
        let mut outgoing = state.outgoing.clone();
        outgoing.extend(fired);
        let board = Board::rasterize(ship_col, &state.invaders, &state.incoming, &outgoing);
        return GameState {
            ship_col,
            outgoing,
            board,
            ..state.clone()
        };
    }

    let tick = input.tick;

    // Player shots as of this step, including one fired just now.
    // Collisions are resolved against the step-start formation.
    let mut shots = state.outgoing.clone();
    shots.extend(fired);
    let scored = collision::any_hit(&shots, &state.invaders);
    let survivors = collision::without_hits(&state.invaders, &shots);

    // Only shots that existed at step start advance; a shot fired this
    // step holds its spawn cell for this frame. Shots leaving the top
    // edge are dropped before moving.
    let mut outgoing: Vec<Position> = collision::without_hits(&state.outgoing, &state.invaders)
        .into_iter()
        .filter(|s| s.row > 0)
        .map(|s| Position::new(s.row - 1, s.col))
        .collect();
    if let Some(s) = fired {
        if !state.invaders.iter().any(|i| collision::hit(*i, s)) {
            outgoing.push(s);
        }
    }

    // A formation emptied on the previous step is replaced before this
    // frame is painted, and the fire modulus tightens.
    let (invaders, shot_interval) = if state.invaders.is_empty() {
        let next = t.next_shot_interval(state.shot_interval);
        log::info!(
            "wave cleared at tick {tick}, shot interval {} -> {next}",
            state.shot_interval
        );
        (state::formation(), next)
    } else {
        let moved = if tick % t.drift_period.max(1) == 0 {
            let descend = tick % (state.shot_interval + t.descent_lag).max(1) == 0;
            survivors
                .iter()
                .map(|p| Position::new(p.row + i32::from(descend), p.col + state.drift_dir))
                .collect()
        } else {
            survivors
        };
        (moved, state.shot_interval)
    };

    // Boundary flip. This leans on the formation list being row-major
    // with ascending columns: the first entry is the leftmost invader
    // of the top row, the last the rightmost of the bottom row.
    let drift_dir = match (invaders.first(), invaders.last()) {
        (Some(first), _) if first.col <= 0 => 1,
        (_, Some(last)) if last.col >= GRID_SIZE - 1 => -1,
        _ => state.drift_dir,
    };

    // A shot that was already sitting on the ship's cell costs a life;
    // the row filter below then takes it off the board.
    let hit_ship = state
        .incoming
        .iter()
        .any(|s| s.row == SHIP_ROW && s.col == ship_col);
    let lives = state.lives - i32::from(hit_ship);

    let mut incoming: Vec<Position> = state
        .incoming
        .iter()
        .filter(|s| s.row < SHIP_ROW)
        .map(|s| Position::new(s.row + 1, s.col))
        .collect();

    // Invader fire targets a uniformly random member of the step-start
    // formation; an emptied formation stays quiet until regenerated.
    if tick % state.shot_interval.max(1) == 0 && !state.invaders.is_empty() {
        let mut rng = state.rng.for_tick(tick);
        let shooter = state.invaders[rng.random_range(0..state.invaders.len())];
        incoming.push(shooter);
    }

    // One point per step with any overlap: a double kill in the same
    // step still scores a single point.
    let score = state.score + u32::from(scored);

    let reached_ship_row = invaders.last().is_some_and(|p| p.row >= SHIP_ROW);
    let game_over = lives <= 0 || reached_ship_row;
    if game_over {
        log::info!("game over at tick {tick}: score {score}, lives {lives}");
    }

    let board = Board::rasterize(ship_col, &invaders, &incoming, &outgoing);

    GameState {
        rng: state.rng,
        tick,
        board,
        ship_col,
        lives,
        game_over,
        score,
        drift_dir,
        invaders,
        incoming,
        outgoing,
        shot_interval,
        tuning: t,
    }
}

fn steer(col: i32, key: Key) -> i32 {
    let col = match key {
        Key::Left => col - 1,
        Key::Right => col + 1,
        _ => col,
    };
    col.clamp(0, GRID_SIZE - 1)
}
