//! Headless session runner
//!
//! Folds the engine over a synthetic tick stream with a small
//! autopilot supplying keys, then prints the final board and HUD
//! numbers. Useful for eyeballing balance changes and as a determinism
//! harness: the same seed always produces the same session.

use std::process::exit;

use grid_invaders::consts::{GRID_SIZE, SHIP_ROW};
use grid_invaders::{advance, GameState, Key, TickInput};

struct Args {
    seed: u64,
    ticks: u64,
    dump: bool,
}

fn usage() -> ! {
    eprintln!("usage: grid-invaders [--seed N] [--ticks N] [--dump]");
    exit(2);
}

fn parse_args() -> Args {
    let mut parsed = Args {
        seed: 0xC0FFEE,
        ticks: 5_000,
        dump: false,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => match args.next().and_then(|v| v.parse().ok()) {
                Some(v) => parsed.seed = v,
                None => usage(),
            },
            "--ticks" => match args.next().and_then(|v| v.parse().ok()) {
                Some(v) => parsed.ticks = v,
                None => usage(),
            },
            "--dump" => parsed.dump = true,
            _ => usage(),
        }
    }
    parsed
}

/// Pick a key for the current state: dodge the nearest shot bearing
/// down on our column, otherwise line up under an invader and fire.
fn autopilot(state: &GameState) -> Key {
    let threatened = state
        .incoming
        .iter()
        .any(|s| s.col == state.ship_col && s.row >= SHIP_ROW - 3);
    if threatened {
        return if state.ship_col == 0 {
            Key::Right
        } else {
            Key::Left
        };
    }

    // Chase the column of the lowest invader
    let target = state
        .invaders
        .iter()
        .max_by_key(|p| p.row)
        .map(|p| p.col.clamp(0, GRID_SIZE - 1));
    match target {
        Some(col) if col < state.ship_col => Key::Left,
        Some(col) if col > state.ship_col => Key::Right,
        Some(_) => Key::Fire,
        None => Key::None,
    }
}

fn main() {
    env_logger::init();
    let args = parse_args();

    log::info!("running session: seed {}, up to {} ticks", args.seed, args.ticks);

    let mut state = GameState::new(args.seed);
    for tick in 0..args.ticks {
        let key = autopilot(&state);
        state = advance(&state, &TickInput { tick, key });
        if state.game_over {
            break;
        }
    }

    print!("{}", state.board);
    println!(
        "tick {}  score {}  lives {}  {}",
        state.tick,
        state.score,
        state.lives,
        if state.game_over { "GAME OVER" } else { "still playing" }
    );

    if args.dump {
        let json = serde_json::to_string_pretty(&state).expect("state serializes");
        println!("{json}");
    }
}
