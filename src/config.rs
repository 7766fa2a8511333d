//! Game configuration
//!
//! One immutable value handed to the session at construction. Loadable from
//! JSON; missing fields fall back to the defaults in [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Grid parameters for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelParams {
    /// Cells per side (grid is square)
    pub grid_size: u32,
    /// Obstacles placed besides the target
    pub obstacle_count: u32,
}

impl LevelParams {
    pub fn new(grid_size: u32, obstacle_count: u32) -> Self {
        Self {
            grid_size,
            obstacle_count,
        }
    }

    /// Total number of grid cells
    pub fn cell_count(&self) -> u32 {
        self.grid_size.saturating_mul(self.grid_size)
    }

    /// Reject grids that cannot hold the target plus every obstacle
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.obstacle_count >= self.cell_count() {
            return Err(ConfigError::TooManyObstacles {
                count: self.obstacle_count,
                cells: self.cell_count(),
            });
        }
        Ok(())
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Pixel size of one grid cell
    pub cell_size: f32,

    // === Progression ===
    /// Level N uses entry N-1; later levels reuse the last entry
    pub levels: Vec<LevelParams>,
    /// Countdown per level, only weights the score
    pub level_time_budget: f32,
    /// A level's first projectile is golden with probability 1 in this
    pub golden_chance: u32,

    // === Physics ===
    pub damping: f32,
    pub launch_scale: f32,
    /// Hit radius as a fraction of the cell size
    pub collision_radius_fraction: f32,
    /// Below this speed (pixels/tick) a flying projectile comes to rest
    pub rest_speed: f32,
    /// Frames per second the external driver ticks at
    pub tick_rate: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            cell_size: GRID_CELL_SIZE,

            levels: vec![
                LevelParams::new(FIRST_GRID_SIZE, OBSTACLES_PER_LEVEL),
                LevelParams::new(LATER_GRID_SIZE, OBSTACLES_PER_LEVEL),
            ],
            level_time_budget: LEVEL_TIME_BUDGET,
            golden_chance: GOLDEN_CHANCE,

            damping: DAMPING,
            launch_scale: LAUNCH_SCALE,
            collision_radius_fraction: COLLISION_RADIUS_FRACTION,
            rest_speed: REST_SPEED,
            tick_rate: TICK_RATE,
        }
    }
}

impl Config {
    /// Parse a JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field once, up front
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            log::warn!("Rejected config: {}", err);
        }
        result
    }

    fn check(&self) -> Result<()> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        if !(self.launch_scale > 0.0) {
            return Err(ConfigError::InvalidLaunchScale(self.launch_scale));
        }
        if self.golden_chance == 0 {
            return Err(ConfigError::ZeroGoldenChance);
        }
        if !(self.level_time_budget > 0.0) {
            return Err(ConfigError::InvalidTimeBudget(self.level_time_budget));
        }
        if !(self.tick_rate > 0.0) {
            return Err(ConfigError::InvalidTickRate(self.tick_rate));
        }
        if !(self.collision_radius_fraction > 0.0 && self.collision_radius_fraction <= 1.0) {
            return Err(ConfigError::InvalidCollisionFraction(
                self.collision_radius_fraction,
            ));
        }
        if !(self.rest_speed >= 0.0) {
            return Err(ConfigError::InvalidRestSpeed(self.rest_speed));
        }
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        for params in &self.levels {
            params.validate()?;
            let extent = params.grid_size as f32 * self.cell_size;
            if extent > self.screen_width || extent > self.screen_height {
                return Err(ConfigError::GridOffScreen {
                    grid_size: params.grid_size,
                    cell_size: self.cell_size,
                });
            }
        }
        Ok(())
    }

    /// Grid parameters for a 1-based level number
    pub fn level_params(&self, level: u32) -> LevelParams {
        let idx = (level.max(1) - 1) as usize;
        self.levels
            .get(idx)
            .or_else(|| self.levels.last())
            .copied()
            .unwrap_or(LevelParams::new(FIRST_GRID_SIZE, OBSTACLES_PER_LEVEL))
    }

    /// Screen size as a vector
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Distance from a cell center that counts as a hit
    #[inline]
    pub fn collision_radius(&self) -> f32 {
        self.cell_size * self.collision_radius_fraction
    }

    /// Nominal wall time per tick
    #[inline]
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate
    }
}
