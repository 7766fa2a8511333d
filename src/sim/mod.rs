//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, unit-step physics
//! - Seeded RNG only
//! - Stable iteration order (placement order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod level;
pub mod physics;
pub mod projectile;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::plan_shot;
pub use collision::{CollisionOutcome, detect_collision};
pub use level::{GridCoord, Level, Obstacle, ObstacleKind, generate_obstacles, generate_target};
pub use physics::{integrate, launch_impulse, reflect};
pub use projectile::Projectile;
pub use scoring::compute_score;
pub use snapshot::Snapshot;
pub use state::{FailReason, GameEvent, GamePhase, GameState};
pub use tick::{InputEvent, TickInput, tick};
