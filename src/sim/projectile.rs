//! The banana: position, velocity and the golden flag

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::level::Level;
use super::physics;
use crate::config::Config;
use crate::consts::MAX_SPAWN_ATTEMPTS;
use crate::error::{ConfigError, Result};

/// A projectile entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Screen-space pixels
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    /// Worth double on a first-shot hit
    pub golden: bool,
}

impl Projectile {
    /// A resting, non-golden projectile at `pos`
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            golden: false,
        }
    }

    /// Place a fresh projectile somewhere on screen, off every occupied cell
    ///
    /// Only a level's first projectile may roll golden; `golden_eligible` is
    /// decided by the caller at level start. An invalid `config` is rejected
    /// before any sampling.
    pub fn spawn<R: Rng>(
        config: &Config,
        level: &Level,
        golden_eligible: bool,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let bounds = config.bounds();
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let pos = Vec2::new(
                rng.random_range(0.0..bounds.x),
                rng.random_range(0.0..bounds.y),
            );
            if level.footprint_contains(config.cell_size, pos) {
                continue;
            }
            let golden = golden_eligible && rng.random_ratio(1, config.golden_chance);
            if golden {
                log::info!("Golden banana at ({:.0}, {:.0})", pos.x, pos.y);
            }
            return Ok(Self {
                pos,
                vel: Vec2::ZERO,
                golden,
            });
        }
        Err(ConfigError::NoSpawnSpace)
    }

    /// Slingshot launch from a drag vector
    ///
    /// `shot_number` counts this shot (1 for the first of the level); the
    /// golden bonus is lost from the second shot on.
    pub fn launch(&mut self, drag: Vec2, scale: f32, shot_number: u32) {
        self.vel = physics::launch_impulse(drag, scale);
        if shot_number > 1 {
            self.golden = false;
        }
    }

    /// Reflect off the screen edges, then integrate with damping
    pub fn tick(&mut self, bounds: Vec2, damping: f32) {
        let (pos, vel) = physics::step(self.pos, self.vel, bounds, damping);
        self.pos = pos;
        self.vel = vel;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Whether the projectile has effectively stopped
    #[inline]
    pub fn is_at_rest(&self, rest_speed: f32) -> bool {
        self.speed() <= rest_speed
    }
}
