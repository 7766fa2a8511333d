//! Session state and core simulation types
//!
//! `GameState` owns the one live level and projectile together with the
//! player's progress, and is the only thing that mutates them.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::Level;
use super::projectile::Projectile;
use super::scoring::compute_score;
use crate::config::Config;
use crate::error::Result;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Projectile resting, waiting for a press
    AwaitingInput,
    /// Pointer held down since `anchor`
    Dragging { anchor: Vec2 },
    /// Projectile moving, physics ticking
    InFlight,
    /// Target hit; scoring and regeneration in progress
    LevelCleared,
    /// Timer and physics frozen
    Paused { in_flight: bool },
    /// Run ended
    Failed(FailReason),
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Failed(_))
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailReason {
    /// Projectile landed on an obstacle
    HitObstacle,
    /// Quit signal from the player
    Quit,
    /// The next level could not be built
    InvalidLevel,
}

/// Things that happened during a tick, for the driver to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched { shot: u32, vel: Vec2 },
    CameToRest { pos: Vec2 },
    LevelCleared { level: u32, points: f32, golden: bool },
    RunEnded { reason: FailReason, score: f32, level: u32 },
    Paused,
    Resumed,
}

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Complete session state
///
/// Events accumulate until [`GameState::drain_events`] is called. A driver
/// that never drains only keeps the most recent [`MAX_PENDING_EVENTS`].
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub level: Level,
    pub projectile: Projectile,
    pub phase: GamePhase,
    /// Accumulated points (fractional)
    pub score: f32,
    /// Current level number, starting at 1
    pub level_number: u32,
    pub shots_this_level: u32,
    /// Counts down from the level budget; may go negative
    pub time_remaining: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Undrained events, oldest first, at most [`MAX_PENDING_EVENTS`]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Start a run: validate the config and build level 1
    pub fn new(config: Config, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let level = Level::generate(config.level_params(1), &mut rng)?;
        let projectile = Projectile::spawn(&config, &level, true, &mut rng)?;
        log::info!("New run (seed {})", seed);
        Ok(Self::assemble(config, seed, rng, level, projectile))
    }

    /// Start a run on a fixed first level and projectile
    pub fn from_parts(config: Config, seed: u64, level: Level, projectile: Projectile) -> Result<Self> {
        config.validate()?;
        let level = Level::from_layout(level.grid_size, level.target, level.obstacles)?;
        let rng = Pcg32::seed_from_u64(seed);
        Ok(Self::assemble(config, seed, rng, level, projectile))
    }

    fn assemble(config: Config, seed: u64, rng: Pcg32, level: Level, projectile: Projectile) -> Self {
        let time_remaining = config.level_time_budget;
        Self {
            config,
            seed,
            rng,
            level,
            projectile,
            phase: GamePhase::AwaitingInput,
            score: 0.0,
            level_number: 1,
            shots_this_level: 0,
            time_remaining,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Whether the run has ended
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let excess = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
        self.events.push(event);
    }

    /// Launch the projectile with a drag vector and count the shot
    ///
    /// No-op once the run has ended.
    pub fn launch(&mut self, drag: Vec2) {
        if self.is_over() {
            return;
        }
        self.shots_this_level += 1;
        let shot = self.shots_this_level;
        self.projectile.launch(drag, self.config.launch_scale, shot);
        self.phase = GamePhase::InFlight;
        log::debug!(
            "Shot {} on level {}: drag ({:.1}, {:.1})",
            shot,
            self.level_number,
            drag.x,
            drag.y
        );
        self.emit(GameEvent::Launched {
            shot,
            vel: self.projectile.vel,
        });
    }

    /// Score the hit, then move to the next level
    ///
    /// No-op once the run has ended.
    pub fn clear_level(&mut self) {
        if self.is_over() {
            return;
        }
        self.phase = GamePhase::LevelCleared;
        let golden = self.projectile.golden;
        let points = compute_score(self.time_remaining, self.shots_this_level, golden);
        self.score += points;
        log::info!(
            "Level {} cleared in {} shot(s): +{:.2}{} (total {:.2})",
            self.level_number,
            self.shots_this_level,
            points,
            if golden { " golden" } else { "" },
            self.score
        );
        self.emit(GameEvent::LevelCleared {
            level: self.level_number,
            points,
            golden,
        });

        self.level_number += 1;
        self.advance_level();
    }

    /// Regenerate the level and replace the projectile for `level_number`
    fn advance_level(&mut self) {
        self.shots_this_level = 0;
        self.time_remaining = self.config.level_time_budget;

        let params = self.config.level_params(self.level_number);
        // A level's first projectile is always eligible for golden
        let next = Level::generate(params, &mut self.rng).and_then(|level| {
            Projectile::spawn(&self.config, &level, true, &mut self.rng)
                .map(|projectile| (level, projectile))
        });

        match next {
            Ok((level, projectile)) => {
                self.level = level;
                self.projectile = projectile;
                self.phase = GamePhase::AwaitingInput;
            }
            Err(err) => {
                log::error!("Could not build level {}: {}", self.level_number, err);
                self.fail(FailReason::InvalidLevel);
            }
        }
    }

    /// End the run
    pub fn fail(&mut self, reason: FailReason) {
        if self.is_over() {
            return;
        }
        self.phase = GamePhase::Failed(reason);
        log::info!(
            "Run ended on level {} ({:?}), score {:.2}",
            self.level_number,
            reason,
            self.score
        );
        self.emit(GameEvent::RunEnded {
            reason,
            score: self.score,
            level: self.level_number,
        });
    }

    /// Freeze or unfreeze the timer and physics
    pub fn toggle_pause(&mut self) {
        if self.is_over() {
            return;
        }
        match self.phase {
            GamePhase::AwaitingInput | GamePhase::Dragging { .. } => {
                self.phase = GamePhase::Paused { in_flight: false };
                self.emit(GameEvent::Paused);
            }
            GamePhase::InFlight => {
                self.phase = GamePhase::Paused { in_flight: true };
                self.emit(GameEvent::Paused);
            }
            GamePhase::Paused { in_flight } => {
                self.phase = if in_flight {
                    GamePhase::InFlight
                } else {
                    GamePhase::AwaitingInput
                };
                self.emit(GameEvent::Resumed);
            }
            GamePhase::LevelCleared | GamePhase::Failed(_) => {}
        }
    }
}
