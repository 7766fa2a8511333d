//! Banana Toss entry point
//!
//! Headless driver: runs the autopilot against the simulation at the fixed
//! tick rate for a few seeds, ranks the runs on a high score board and prints
//! the last final frame as JSON.
//!
//! Usage: `banana-toss [config.json] [seed] [runs]`

use banana_toss::sim::{GameEvent, GameState, TickInput, plan_shot, tick};
use banana_toss::{Config, HighScores};

/// Ten simulated minutes at 60 Hz
const MAX_TICKS: u64 = 60 * 60 * 10;
const DEFAULT_SEED: u64 = 0xBA7A7A;
/// Sessions played per invocation, seeded consecutively
const DEFAULT_RUNS: u64 = 5;

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            let config = Config::from_json(&json)?;
            log::info!("Loaded config from {}", path);
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

/// Play one autopilot session until the run ends or the tick limit is hit
fn play_session(config: Config, seed: u64, max_ticks: u64) -> Result<GameState, Box<dyn std::error::Error>> {
    let dt = config.dt();
    let mut state = GameState::new(config, seed)?;

    while !state.is_over() && state.time_ticks < max_ticks {
        let input = match plan_shot(&state) {
            Some((press, release)) => TickInput::drag(press, release),
            None => TickInput::default(),
        };
        tick(&mut state, &input, dt);

        for event in state.drain_events() {
            match event {
                GameEvent::LevelCleared {
                    level,
                    points,
                    golden,
                } => {
                    println!(
                        "Level {} cleared: +{:.2}{}",
                        level,
                        points,
                        if golden { " (golden!)" } else { "" }
                    );
                }
                GameEvent::RunEnded { reason, level, .. } => {
                    println!("Run over on level {} ({:?})", level, reason);
                }
                other => log::debug!("{:?}", other),
            }
        }
    }

    if !state.is_over() {
        log::info!("Tick limit reached on level {}", state.level_number);
    }
    Ok(state)
}

/// Put a finished or abandoned session on the board
fn record(scores: &mut HighScores, state: &GameState) -> Option<usize> {
    let rank = scores.add_score(state.score, state.level_number, state.time_ticks);
    if let Some(rank) = rank {
        println!("High score #{}: {:.2} (seed {})", rank, state.score, state.seed);
    }
    rank
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let seed = match args.get(1) {
        Some(s) => s.parse()?,
        None => DEFAULT_SEED,
    };
    let runs: u64 = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_RUNS,
    };

    let mut scores = HighScores::new();
    let mut last = None;
    for i in 0..runs.max(1) {
        let state = play_session(config.clone(), seed.wrapping_add(i), MAX_TICKS)?;
        record(&mut scores, &state);
        last = Some(state);
    }

    for (i, entry) in scores.entries.iter().enumerate() {
        println!(
            "{:>2}. {:>8.2}  level {:>3}  {} ticks",
            i + 1,
            entry.score,
            entry.level,
            entry.ticks
        );
    }
    if let Some(state) = last {
        println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Banana Toss (headless) starting...");

    if let Err(err) = run() {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
