//! Headless demo driver
//!
//! Runs a scripted bot through the built-in level (or a level JSON passed as
//! the first argument) at the fixed tick rate and reports how the match
//! ended. Useful for smoke-testing level files and tuning changes without a
//! renderer.

use std::process::ExitCode;

use coin_dash::consts::TICKS_PER_SECOND;
use coin_dash::sim::{GamePhase, GameState, Level, MatchOutcome, TickInput, tick};

fn main() -> ExitCode {
    env_logger::init();

    let level = match std::env::args().nth(1) {
        Some(path) => match load_level(&path) {
            Ok(level) => level,
            Err(err) => {
                log::error!("failed to load level {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Level::default(),
    };

    let mut state = GameState::new(level);
    state.start();

    // Bot strategy: hold right, jump whenever grounded
    let max_ticks = 120 * TICKS_PER_SECOND;
    for _ in 0..max_ticks {
        let input = TickInput {
            move_right: true,
            jump: state.player.on_ground,
            ..Default::default()
        };
        for event in tick(&mut state, &input) {
            log::debug!("{event:?}");
        }

        if state.time_ticks % (5 * TICKS_PER_SECOND as u64) == 0 {
            let hud = state.hud();
            log::info!(
                "t={}s score={} coins={} lives={}",
                state.time_ticks / TICKS_PER_SECOND as u64,
                hud.score,
                hud.coins_collected,
                hud.lives
            );
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let hud = state.hud();
    match state.outcome {
        Some(MatchOutcome::Won) => {
            println!(
                "level complete: score {} with {} lives left",
                hud.score, hud.lives
            );
        }
        Some(MatchOutcome::Lost) => {
            println!("out of lives: score {}", hud.score);
        }
        None => {
            println!("time limit reached: score {}", hud.score);
        }
    }
    ExitCode::SUCCESS
}

fn load_level(path: &str) -> Result<Level, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(Level::from_json(&json)?)
}
