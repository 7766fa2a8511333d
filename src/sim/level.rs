//! Level layout and procedural generation
//!
//! A level is a square grid holding one target cell and a set of obstacle
//! cells. Placement is rejection-sampled: the target never shares a cell with
//! an obstacle and no two obstacles share a cell.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::LevelParams;
use crate::error::{ConfigError, Result};
use crate::{cell_center, cell_contains};

/// A cell on the level grid, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub col: u32,
    pub row: u32,
}

impl GridCoord {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Uniformly random cell in `[0, grid_size)²`
    pub fn random<R: Rng>(grid_size: u32, rng: &mut R) -> Self {
        Self {
            col: rng.random_range(0..grid_size),
            row: rng.random_range(0..grid_size),
        }
    }

    /// Pixel-space center of this cell
    #[inline]
    pub fn center(&self, cell_size: f32) -> Vec2 {
        cell_center(self.col, self.row, cell_size)
    }

    /// Whether a pixel-space point lies on this cell's footprint
    #[inline]
    pub fn footprint_contains(&self, cell_size: f32, point: Vec2) -> bool {
        cell_contains(self.col, self.row, cell_size, point)
    }
}

/// Obstacle behaviour tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObstacleKind {
    #[default]
    Static,
    Moving,
    Bouncing,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [Self::Static, Self::Moving, Self::Bouncing];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// An obstacle entity
///
/// Motion is recorded but the tick loop never advances it: `offset` and `vel`
/// stay zero unless a caller drives `update_position`/`bounce` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub cell: GridCoord,
    pub kind: ObstacleKind,
    /// Pixel displacement from the cell's resting position
    #[serde(default)]
    pub offset: Vec2,
    /// Pixels per tick
    #[serde(default)]
    pub vel: Vec2,
}

impl Obstacle {
    pub fn new(cell: GridCoord, kind: ObstacleKind) -> Self {
        Self {
            cell,
            kind,
            offset: Vec2::ZERO,
            vel: Vec2::ZERO,
        }
    }

    /// Pixel-space center including any displacement
    #[inline]
    pub fn center(&self, cell_size: f32) -> Vec2 {
        self.cell.center(cell_size) + self.offset
    }

    /// Advance by velocity (moving and bouncing kinds only)
    pub fn update_position(&mut self) {
        if matches!(self.kind, ObstacleKind::Moving | ObstacleKind::Bouncing) {
            self.offset += self.vel;
        }
    }

    /// Reverse direction (bouncing kind only)
    pub fn bounce(&mut self) {
        if self.kind == ObstacleKind::Bouncing {
            self.vel = -self.vel;
        }
    }
}

/// One level: grid, target and obstacles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub grid_size: u32,
    /// The box the projectile must land on
    pub target: GridCoord,
    /// Obstacles in placement order
    pub obstacles: Vec<Obstacle>,
}

impl Level {
    /// Generate a level: target first, then obstacles around it
    pub fn generate<R: Rng>(params: LevelParams, rng: &mut R) -> Result<Self> {
        params.validate()?;
        let target = generate_target(params.grid_size, &[], rng);
        let obstacles = generate_obstacles(params.grid_size, params.obstacle_count, target, rng)?;
        log::info!(
            "Generated {}x{} level: target ({}, {}), {} obstacles",
            params.grid_size,
            params.grid_size,
            target.col,
            target.row,
            obstacles.len()
        );
        Ok(Self {
            grid_size: params.grid_size,
            target,
            obstacles,
        })
    }

    /// Build a level from a fixed layout, checking the placement invariants
    pub fn from_layout(grid_size: u32, target: GridCoord, obstacles: Vec<Obstacle>) -> Result<Self> {
        LevelParams::new(grid_size, obstacles.len() as u32).validate()?;
        let level = Self {
            grid_size,
            target,
            obstacles,
        };
        if !level.is_well_formed() {
            return Err(ConfigError::OverlappingCells);
        }
        Ok(level)
    }

    /// Obstacle cells in placement order
    pub fn obstacle_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.obstacles.iter().map(|o| o.cell)
    }

    /// Whether a cell holds the target or an obstacle
    pub fn is_occupied(&self, cell: GridCoord) -> bool {
        cell == self.target || self.obstacle_cells().any(|c| c == cell)
    }

    /// Whether a pixel-space point lies on any occupied cell's footprint
    pub fn footprint_contains(&self, cell_size: f32, point: Vec2) -> bool {
        self.target.footprint_contains(cell_size, point)
            || self
                .obstacle_cells()
                .any(|c| c.footprint_contains(cell_size, point))
    }

    /// In range, target not on an obstacle, no duplicate obstacles
    pub fn is_well_formed(&self) -> bool {
        let in_range = |c: GridCoord| c.col < self.grid_size && c.row < self.grid_size;
        if !in_range(self.target) {
            return false;
        }
        for (i, cell) in self.obstacle_cells().enumerate() {
            if !in_range(cell) || cell == self.target {
                return false;
            }
            if self.obstacle_cells().skip(i + 1).any(|other| other == cell) {
                return false;
            }
        }
        true
    }
}

/// Rejection-sample a cell not listed in `excluded`
///
/// Callers must leave at least one free cell or this never returns.
pub fn generate_target<R: Rng>(grid_size: u32, excluded: &[GridCoord], rng: &mut R) -> GridCoord {
    loop {
        let cell = GridCoord::random(grid_size, rng);
        if !excluded.contains(&cell) {
            return cell;
        }
    }
}

/// Rejection-sample `count` distinct obstacles, none on the target
pub fn generate_obstacles<R: Rng>(
    grid_size: u32,
    count: u32,
    target: GridCoord,
    rng: &mut R,
) -> Result<Vec<Obstacle>> {
    LevelParams::new(grid_size, count).validate()?;

    let mut excluded = Vec::with_capacity(count as usize + 1);
    excluded.push(target);
    let mut obstacles = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let cell = generate_target(grid_size, &excluded, rng);
        excluded.push(cell);
        obstacles.push(Obstacle::new(cell, ObstacleKind::random(rng)));
    }
    Ok(obstacles)
}
