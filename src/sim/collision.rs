//! Collision detection against grid cells
//!
//! Cells are tested as circles around their pixel-space centers. Obstacles are
//! checked before the target and the first match wins.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::Level;

/// What the projectile touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionOutcome {
    None,
    /// Index into `Level::obstacles`
    HitObstacle(usize),
    HitTarget,
}

/// Whether a point lies strictly within `radius` of `center`
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) < radius
}

/// Test the projectile against every obstacle, then the target
pub fn detect_collision(pos: Vec2, level: &Level, cell_size: f32, radius: f32) -> CollisionOutcome {
    if let Some(idx) = level
        .obstacles
        .iter()
        .position(|o| point_in_circle(pos, o.center(cell_size), radius))
    {
        return CollisionOutcome::HitObstacle(idx);
    }

    if point_in_circle(pos, level.target.center(cell_size), radius) {
        return CollisionOutcome::HitTarget;
    }

    CollisionOutcome::None
}
