//! Idle/demo mode - the computer takes the shot
//!
//! Aims straight at the target center with just enough speed to coast a
//! little past it. Obstacles on the line are not avoided.

use glam::Vec2;

use super::physics::travel_distance;
use super::state::{GamePhase, GameState};

/// Press and release positions for the next shot, if one can be taken now
pub fn plan_shot(state: &GameState) -> Option<(Vec2, Vec2)> {
    if state.phase != GamePhase::AwaitingInput {
        return None;
    }

    let config = &state.config;
    let radius = config.collision_radius();
    let to_target = state.level.target.center(config.cell_size) - state.projectile.pos;
    let dir = to_target.normalize_or_zero();
    if dir == Vec2::ZERO {
        return None;
    }

    // Aim half a radius past the center; cap the per-tick step so the
    // projectile cannot skip over the hit circle.
    let wanted = to_target.length() + radius * 0.5;
    let speed = (wanted / travel_distance(1.0, config.damping)).min(radius);
    let drag = -dir * speed / config.launch_scale;

    let press = state.projectile.pos;
    Some((press, press + drag))
}
