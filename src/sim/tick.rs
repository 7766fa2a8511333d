//! Fixed timestep simulation tick
//!
//! One call per rendered frame. Input events are applied in the order the
//! driver received them, then the timer and physics advance.

use glam::Vec2;

use super::collision::{CollisionOutcome, detect_collision};
use super::state::{FailReason, GameEvent, GamePhase, GameState};

/// A discrete event from the render/input boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at a screen position
    Press(Vec2),
    /// Pointer released at a screen position
    Release(Vec2),
    /// Pause toggle
    TogglePause,
    /// Player asked to leave
    Quit,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events in arrival order
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// A press immediately followed by a release
    pub fn drag(from: Vec2, to: Vec2) -> Self {
        Self::new([InputEvent::Press(from), InputEvent::Release(to)])
    }

    pub fn quit() -> Self {
        Self::new([InputEvent::Quit])
    }
}

/// Advance the session by one tick of `dt` wall time
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.is_over() {
        return;
    }

    for event in &input.events {
        match *event {
            InputEvent::Quit => {
                state.fail(FailReason::Quit);
                return;
            }
            InputEvent::TogglePause => state.toggle_pause(),
            InputEvent::Press(pos) => {
                if state.phase == GamePhase::AwaitingInput {
                    state.phase = GamePhase::Dragging { anchor: pos };
                }
            }
            InputEvent::Release(pos) => {
                if let GamePhase::Dragging { anchor } = state.phase {
                    state.launch(pos - anchor);
                }
            }
        }
    }

    if matches!(state.phase, GamePhase::Paused { .. }) {
        return;
    }

    state.time_ticks += 1;
    state.time_remaining -= dt;

    if state.phase != GamePhase::InFlight {
        return;
    }

    state
        .projectile
        .tick(state.config.bounds(), state.config.damping);

    let outcome = detect_collision(
        state.projectile.pos,
        &state.level,
        state.config.cell_size,
        state.config.collision_radius(),
    );
    match outcome {
        CollisionOutcome::HitObstacle(idx) => {
            log::info!(
                "Hit obstacle {} at ({:.0}, {:.0})",
                idx,
                state.projectile.pos.x,
                state.projectile.pos.y
            );
            state.fail(FailReason::HitObstacle);
        }
        CollisionOutcome::HitTarget => state.clear_level(),
        CollisionOutcome::None => {
            if state.projectile.is_at_rest(state.config.rest_speed) {
                let pos = state.projectile.pos;
                log::debug!("Projectile came to rest at ({:.1}, {:.1})", pos.x, pos.y);
                state.phase = GamePhase::AwaitingInput;
                state.emit(GameEvent::CameToRest { pos });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::consts::SIM_DT;
    use crate::sim::level::{GridCoord, Level, Obstacle, ObstacleKind};
    use crate::sim::projectile::Projectile;

    fn state_at(pos: Vec2) -> GameState {
        let level = Level::from_layout(
            8,
            GridCoord::new(3, 3),
            vec![Obstacle::new(GridCoord::new(1, 1), ObstacleKind::Static)],
        )
        .unwrap();
        GameState::from_parts(Config::default(), 1, level, Projectile::new(pos)).unwrap()
    }

    #[test]
    fn test_tick_press_release_launches() {
        let mut state = state_at(Vec2::new(500.0, 500.0));

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::AwaitingInput);

        let press = TickInput::new([InputEvent::Press(Vec2::new(10.0, 10.0))]);
        tick(&mut state, &press, SIM_DT);
        assert_eq!(
            state.phase,
            GamePhase::Dragging {
                anchor: Vec2::new(10.0, 10.0)
            }
        );
        assert_eq!(state.projectile.pos, Vec2::new(500.0, 500.0));

        let release = TickInput::new([InputEvent::Release(Vec2::new(110.0, 10.0))]);
        tick(&mut state, &release, SIM_DT);
        assert_eq!(state.phase, GamePhase::InFlight);
        assert_eq!(state.shots_this_level, 1);
        assert_eq!(state.projectile.pos, Vec2::new(499.0, 500.0));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut state = state_at(Vec2::new(500.0, 500.0));
        let release = TickInput::new([InputEvent::Release(Vec2::new(110.0, 10.0))]);
        tick(&mut state, &release, SIM_DT);
        assert_eq!(state.phase, GamePhase::AwaitingInput);
        assert_eq!(state.shots_this_level, 0);
    }

    #[test]
    fn test_timer_counts_down_past_zero() {
        let mut state = state_at(Vec2::new(500.0, 500.0));
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), 15.0);
        }
        assert_eq!(state.time_remaining, -50.0);
        assert_eq!(state.time_ticks, 10);
        assert!(!state.is_over());
    }

    #[test]
    fn test_tick_pause() {
        let mut state = state_at(Vec2::new(500.0, 500.0));
        tick(&mut state, &TickInput::drag(Vec2::ZERO, Vec2::new(100.0, 0.0)), SIM_DT);
        assert_eq!(state.phase, GamePhase::InFlight);

        let pause = TickInput::new([InputEvent::TogglePause]);
        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused { in_flight: true });

        let frozen_pos = state.projectile.pos;
        let frozen_time = state.time_remaining;
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.projectile.pos, frozen_pos);
        assert_eq!(state.time_remaining, frozen_time);

        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::InFlight);
        assert!(state.projectile.pos.x < frozen_pos.x);
    }

    #[test]
    fn test_comes_to_rest() {
        let mut state = state_at(Vec2::new(500.0, 500.0));
        tick(&mut state, &TickInput::drag(Vec2::ZERO, Vec2::new(100.0, 0.0)), SIM_DT);
        for _ in 0..1000 {
            if state.phase != GamePhase::InFlight {
                break;
            }
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.phase, GamePhase::AwaitingInput);
        assert!(state.projectile.pos.x > 400.0);
        let events = state.drain_events();
        assert!(matches!(events.last(), Some(GameEvent::CameToRest { .. })));
    }

    #[test]
    fn test_quit_before_collision() {
        // Resting right next to the target; the quit in the same tick wins
        let mut state = state_at(Vec2::new(205.0, 175.0));
        state.projectile.vel = Vec2::new(-10.0, 0.0);
        state.phase = GamePhase::InFlight;
        tick(&mut state, &TickInput::quit(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Failed(FailReason::Quit));
        assert_eq!(state.projectile.pos, Vec2::new(205.0, 175.0));
        assert_eq!(state.level_number, 1);
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            TickInput::drag(Vec2::new(400.0, 400.0), Vec2::new(520.0, 470.0)),
            TickInput::default(),
            TickInput::new([InputEvent::TogglePause]),
            TickInput::new([InputEvent::TogglePause]),
            TickInput::default(),
        ];

        let mut state1 = GameState::new(Config::default(), 99999).unwrap();
        let mut state2 = GameState::new(Config::default(), 99999).unwrap();
        for input in &inputs {
            tick(&mut state1, input, SIM_DT);
            tick(&mut state2, input, SIM_DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.projectile, state2.projectile);
    }
}
