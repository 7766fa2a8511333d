//! Geometry/physics kernel
//!
//! Pure functions only: edge reflection, damped fixed-step integration and the
//! slingshot launch rule. Same inputs always give bit-identical outputs.

use glam::Vec2;

/// Flip each velocity axis whose *next* position would leave `[0, bounds]`
///
/// Evaluated against the projected position, so the bounce happens the tick
/// before the object would cross the edge.
#[inline]
pub fn reflect(pos: Vec2, vel: Vec2, bounds: Vec2) -> Vec2 {
    let next = pos + vel;
    let mut vel = vel;
    if next.x < 0.0 || next.x > bounds.x {
        vel.x = -vel.x;
    }
    if next.y < 0.0 || next.y > bounds.y {
        vel.y = -vel.y;
    }
    vel
}

/// One unit Euler step followed by velocity decay
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2, damping: f32) -> (Vec2, Vec2) {
    (pos + vel, vel * damping)
}

/// Slingshot: release opposite to the drag, scaled
#[inline]
pub fn launch_impulse(drag: Vec2, scale: f32) -> Vec2 {
    -drag * scale
}

/// Reflect then integrate, the per-tick projectile motion
#[inline]
pub fn step(pos: Vec2, vel: Vec2, bounds: Vec2, damping: f32) -> (Vec2, Vec2) {
    let vel = reflect(pos, vel, bounds);
    integrate(pos, vel, damping)
}

/// Total distance a launch at `speed` covers before damping stops it
#[inline]
pub fn travel_distance(speed: f32, damping: f32) -> f32 {
    speed / (1.0 - damping)
}
