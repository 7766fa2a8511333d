//! Banana Toss - A single-screen slingshot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, level generation, collisions, scoring)
//! - `config`: Immutable game configuration
//! - `error`: Configuration errors
//! - `highscores`: In-memory leaderboard of finished runs

pub mod config;
pub mod error;
pub mod highscores;
pub mod sim;

pub use config::{Config, LevelParams};
pub use error::ConfigError;
pub use highscores::HighScores;

use glam::Vec2;

/// Game configuration defaults
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1920.0;
    pub const SCREEN_HEIGHT: f32 = 1020.0;
    /// Size of one grid cell (pixels)
    pub const GRID_CELL_SIZE: f32 = 50.0;

    /// Frame rate the simulation is ticked at
    pub const TICK_RATE: f32 = 60.0;
    /// Wall-time elapsed per tick at the target rate
    pub const SIM_DT: f32 = 1.0 / TICK_RATE;

    /// Velocity multiplier applied after every tick
    pub const DAMPING: f32 = 0.99;
    /// Drag length to launch speed
    pub const LAUNCH_SCALE: f32 = 0.01;
    /// Speed (pixels/tick) under which a projectile counts as resting
    pub const REST_SPEED: f32 = 0.05;

    /// A level's first projectile is golden with probability 1 in this
    pub const GOLDEN_CHANCE: u32 = 20;
    /// Score multiplier for a golden hit
    pub const GOLDEN_MULTIPLIER: f32 = 2.0;
    /// Points awarded once the level timer has run out
    pub const EXPIRED_TIME_POINTS: f32 = 1.0;

    /// Per-level time budget
    pub const LEVEL_TIME_BUDGET: f32 = 100.0;
    /// Hit radius as a fraction of the cell size
    pub const COLLISION_RADIUS_FRACTION: f32 = 0.5;

    /// First level: small grid
    pub const FIRST_GRID_SIZE: u32 = 8;
    /// Every later level
    pub const LATER_GRID_SIZE: u32 = 15;
    pub const OBSTACLES_PER_LEVEL: u32 = 5;

    /// Rejection-sampling cap when placing the projectile
    pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;
}

/// Pixel-space center of a grid cell
#[inline]
pub fn cell_center(col: u32, row: u32, cell_size: f32) -> Vec2 {
    Vec2::new(
        col as f32 * cell_size + cell_size / 2.0,
        row as f32 * cell_size + cell_size / 2.0,
    )
}

/// Whether a pixel-space point falls inside a cell's square footprint
#[inline]
pub fn cell_contains(col: u32, row: u32, cell_size: f32, point: Vec2) -> bool {
    let min = Vec2::new(col as f32 * cell_size, row as f32 * cell_size);
    let max = min + Vec2::splat(cell_size);
    point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
}
