//! End-to-end session scenarios driven through `tick`

use banana_toss::Config;
use banana_toss::consts::SIM_DT;
use banana_toss::sim::{
    FailReason, GameEvent, GamePhase, GameState, GridCoord, InputEvent, Level, Obstacle,
    ObstacleKind, Projectile, TickInput, tick,
};
use glam::Vec2;

/// 8x8 grid, target (3,3), one obstacle at (1,1)
fn session_at(pos: Vec2) -> GameState {
    let level = Level::from_layout(
        8,
        GridCoord::new(3, 3),
        vec![Obstacle::new(GridCoord::new(1, 1), ObstacleKind::Static)],
    )
    .unwrap();
    GameState::from_parts(Config::default(), 2024, level, Projectile::new(pos)).unwrap()
}

fn run_until_settled(state: &mut GameState, max_ticks: usize) {
    for _ in 0..max_ticks {
        if state.phase != GamePhase::InFlight {
            return;
        }
        tick(state, &TickInput::default(), SIM_DT);
    }
}

#[test]
fn launch_decays_without_reaching_the_edge() {
    let mut state = session_at(Vec2::new(500.0, 500.0));

    tick(
        &mut state,
        &TickInput::drag(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)),
        SIM_DT,
    );
    assert_eq!(state.projectile.pos, Vec2::new(499.0, 500.0));
    assert!((state.projectile.vel - Vec2::new(-0.99, 0.0)).length() < 1e-6);

    let mut last_x = state.projectile.pos.x;
    let mut last_speed = state.projectile.speed();
    for _ in 0..2000 {
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.projectile.pos.x <= last_x);
        assert!(state.projectile.speed() <= last_speed);
        last_x = state.projectile.pos.x;
        last_speed = state.projectile.speed();
    }

    // Total travel of a unit launch is 1 / (1 - 0.99) = 100px
    assert!(state.projectile.pos.x > 400.0);
    assert_eq!(state.projectile.pos.y, 500.0);
    assert_eq!(state.phase, GamePhase::AwaitingInput);
    assert!(!state.is_over());
}

#[test]
fn hitting_the_target_scores_and_advances() {
    // 125px right of the target center, flung left
    let mut state = session_at(Vec2::new(300.0, 175.0));
    tick(
        &mut state,
        &TickInput::drag(Vec2::new(0.0, 0.0), Vec2::new(500.0, 0.0)),
        SIM_DT,
    );
    run_until_settled(&mut state, 600);

    assert_eq!(state.level_number, 2);
    assert_eq!(state.shots_this_level, 0);
    assert_eq!(state.time_remaining, 100.0);
    assert_eq!(state.phase, GamePhase::AwaitingInput);
    assert_eq!(state.level.grid_size, 15);
    assert!(state.level.is_well_formed());
    assert!(!state.level.footprint_contains(50.0, state.projectile.pos));
    assert_eq!(state.projectile.vel, Vec2::ZERO);

    // One shot, cleared within the first second
    assert!(state.score > 99.0 && state.score < 100.0);

    let events = state.drain_events();
    assert!(matches!(
        events.as_slice(),
        [
            GameEvent::Launched { shot: 1, .. },
            GameEvent::LevelCleared {
                level: 1,
                golden: false,
                ..
            }
        ]
    ));
}

#[test]
fn second_shot_halves_the_reward() {
    let mut state = session_at(Vec2::new(500.0, 500.0));

    // First shot falls short and comes to rest
    tick(&mut state, &TickInput::drag(Vec2::ZERO, Vec2::new(10.0, 0.0)), SIM_DT);
    run_until_settled(&mut state, 1000);
    assert_eq!(state.phase, GamePhase::AwaitingInput);
    assert_eq!(state.shots_this_level, 1);

    // Second shot: put the projectile beside the target first
    state.projectile.pos = Vec2::new(300.0, 175.0);
    tick(&mut state, &TickInput::drag(Vec2::ZERO, Vec2::new(500.0, 0.0)), SIM_DT);
    let time_at_launch = state.time_remaining;
    run_until_settled(&mut state, 600);

    assert_eq!(state.level_number, 2);
    assert!(state.score < time_at_launch / 2.0);
    assert!(state.score > (time_at_launch - 1.0) / 2.0);
}

#[test]
fn golden_first_shot_doubles() {
    let mut state = session_at(Vec2::new(300.0, 175.0));
    state.projectile.golden = true;
    tick(&mut state, &TickInput::drag(Vec2::ZERO, Vec2::new(500.0, 0.0)), SIM_DT);
    run_until_settled(&mut state, 600);

    assert_eq!(state.level_number, 2);
    assert!(state.score > 198.0 && state.score < 200.0);
}

#[test]
fn hitting_an_obstacle_ends_the_run() {
    // Flung up-left from (200,200) into the obstacle at (75,75)
    let mut state = session_at(Vec2::new(200.0, 200.0));
    state.level.target = GridCoord::new(7, 7);
    tick(
        &mut state,
        &TickInput::drag(Vec2::ZERO, Vec2::new(300.0, 300.0)),
        SIM_DT,
    );
    run_until_settled(&mut state, 600);

    assert_eq!(state.phase, GamePhase::Failed(FailReason::HitObstacle));
    assert_eq!(state.level_number, 1);
    assert_eq!(state.score, 0.0);
}

#[test]
fn failed_state_is_frozen() {
    let mut state = session_at(Vec2::new(500.0, 500.0));
    tick(&mut state, &TickInput::drag(Vec2::ZERO, Vec2::new(300.0, 0.0)), SIM_DT);
    tick(&mut state, &TickInput::quit(), SIM_DT);
    assert_eq!(state.phase, GamePhase::Failed(FailReason::Quit));

    let before = state.snapshot();
    let ticks = state.time_ticks;
    let inputs = [
        TickInput::default(),
        TickInput::drag(Vec2::ZERO, Vec2::new(50.0, 50.0)),
        TickInput::new([InputEvent::TogglePause]),
        TickInput::quit(),
    ];
    for input in &inputs {
        for _ in 0..20 {
            tick(&mut state, input, SIM_DT);
        }
    }
    assert_eq!(state.snapshot(), before);
    assert_eq!(state.time_ticks, ticks);
}

#[test]
fn quit_wins_over_input_after_it() {
    let mut state = session_at(Vec2::new(500.0, 500.0));
    let input = TickInput::new([
        InputEvent::Quit,
        InputEvent::Press(Vec2::ZERO),
        InputEvent::Release(Vec2::new(100.0, 0.0)),
    ]);
    tick(&mut state, &input, SIM_DT);
    assert_eq!(state.phase, GamePhase::Failed(FailReason::Quit));
    assert_eq!(state.shots_this_level, 0);
    assert_eq!(state.projectile.pos, Vec2::new(500.0, 500.0));
}

#[test]
fn zero_drag_is_a_wasted_shot() {
    let mut state = session_at(Vec2::new(500.0, 500.0));
    tick(&mut state, &TickInput::drag(Vec2::new(7.0, 7.0), Vec2::new(7.0, 7.0)), SIM_DT);
    assert_eq!(state.shots_this_level, 1);
    assert_eq!(state.projectile.pos, Vec2::new(500.0, 500.0));
    assert_eq!(state.phase, GamePhase::AwaitingInput);
}

#[test]
fn edge_bounce_keeps_projectile_on_screen() {
    let mut state = session_at(Vec2::new(1905.0, 900.0));
    state.level.target = GridCoord::new(0, 7);
    tick(
        &mut state,
        &TickInput::drag(Vec2::ZERO, Vec2::new(-2000.0, 0.0)),
        SIM_DT,
    );
    assert!(state.projectile.vel.x < 0.0, "bounced off the right edge");
    for _ in 0..200 {
        tick(&mut state, &TickInput::default(), SIM_DT);
        let p = state.projectile.pos;
        assert!(p.x >= 0.0 && p.x <= 1920.0);
    }
}
