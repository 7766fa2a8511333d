//! Read-only view of a session for the render/input boundary

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{GridCoord, ObstacleKind};
use super::state::{GamePhase, GameState};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub projectile_pos: Vec2,
    pub golden: bool,
    pub grid_size: u32,
    pub cell_size: f32,
    pub target: GridCoord,
    pub obstacles: Vec<(GridCoord, ObstacleKind)>,
    pub level: u32,
    pub score: f32,
    pub time_remaining: f32,
    pub shots: u32,
}

impl GameState {
    /// Copy out the drawable state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            projectile_pos: self.projectile.pos,
            golden: self.projectile.golden,
            grid_size: self.level.grid_size,
            cell_size: self.config.cell_size,
            target: self.level.target,
            obstacles: self.level.obstacles.iter().map(|o| (o.cell, o.kind)).collect(),
            level: self.level_number,
            score: self.score,
            time_remaining: self.time_remaining,
            shots: self.shots_this_level,
        }
    }
}
