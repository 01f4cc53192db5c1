//! Integration tests for the simulation engine

use flappy_ascii::core::{Bird, GameState, Phase, Pipe, RunState, SequenceRng};
use flappy_ascii::types::{GameAction, BIRD_X, PIPE_FREQUENCY, SCREEN_HEIGHT};

fn started_run() -> RunState {
    let mut run = RunState::new();
    run.started = true;
    run
}

fn game(run: RunState) -> GameState<SequenceRng> {
    GameState::from_parts(run, 0, SequenceRng::constant(14))
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::Idle);

    state.apply_action(GameAction::Flap);
    assert_eq!(state.phase(), Phase::Active);

    // Free fall to the ground.
    let mut ticks = 0;
    while state.tick() {
        ticks += 1;
        assert!(ticks < 100, "bird never landed");
    }
    assert_eq!(state.phase(), Phase::Over);

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.score(), 0);
    assert!(state.pipes().is_empty());
    assert_eq!(state.tick_counter(), 0);
}

#[test]
fn passing_a_pipe_scores_exactly_once() {
    let mut run = started_run();
    run.bird = Bird::new(14.0);
    run.pipes.push(Pipe::with_gap(BIRD_X as f64 + 1.0, 14));
    let mut state = game(run);

    // x: 21 -> 20, in the lane, inside the gap.
    assert!(state.tick());
    assert_eq!(state.score(), 0);
    assert!(!state.pipes()[0].passed);

    state.run_mut().bird = Bird::new(14.0);
    // x: 20 -> 19, past the lane.
    assert!(state.tick());
    assert_eq!(state.score(), 1);
    assert!(state.pipes()[0].passed);

    for _ in 0..5 {
        state.run_mut().bird = Bird::new(14.0);
        state.tick();
    }
    assert_eq!(state.score(), 1);
}

#[test]
fn aligned_pipe_outside_gap_ends_run() {
    let mut run = started_run();
    run.bird = Bird::new(3.0);
    run.pipes.push(Pipe::with_gap(BIRD_X as f64 + 1.0, 14));
    let mut state = game(run);

    assert!(!state.tick());
    assert!(!state.running());
    assert_eq!(state.phase(), Phase::Over);
}

#[test]
fn several_collisions_in_one_tick_resolve_to_game_over() {
    let mut run = started_run();
    run.bird = Bird::new(3.0);
    run.pipes.push(Pipe::with_gap(BIRD_X as f64 + 1.0, 14));
    run.pipes.push(Pipe::with_gap(BIRD_X as f64 + 1.5, 20));
    let mut state = game(run);
    assert!(!state.tick());
}

#[test]
fn ground_contact_ends_run_without_pipes() {
    let mut run = started_run();
    run.bird = Bird::new((SCREEN_HEIGHT - 2) as f64).with_velocity(1.0);
    let mut state = game(run);
    assert!(!state.tick());
    assert_eq!(state.bird().y(), (SCREEN_HEIGHT - 1) as f64);
}

#[test]
fn offscreen_pipes_are_retired_and_scored() {
    let mut run = started_run();
    run.bird = Bird::new(14.0);
    run.pipes.push(Pipe::with_gap(0.0, 14));
    let mut state = game(run);

    state.tick();
    assert!(state.pipes().is_empty());
    // It crossed the lane during this pass as well.
    assert_eq!(state.score(), 1);
}

#[test]
fn idle_run_spawns_nothing() {
    let mut state = GameState::new(1);
    for _ in 0..(PIPE_FREQUENCY * 5) {
        state.tick();
    }
    assert!(state.pipes().is_empty());
    assert_eq!(state.tick_counter(), 0);
    assert!(state.running());
}

#[test]
fn finished_run_is_frozen() {
    let mut run = started_run();
    run.running = false;
    run.score = 4;
    run.bird = Bird::new(10.0).with_velocity(2.0);
    run.pipes.push(Pipe::with_gap(50.0, 12));
    let mut state = game(run.clone());

    for _ in 0..10 {
        assert!(!state.tick());
    }
    assert_eq!(state.run(), &run);
    assert!(!state.apply_action(GameAction::Flap));
    assert_eq!(state.run(), &run);
}

#[test]
fn steady_play_keeps_spawning_and_retiring() {
    let mut state = game(started_run());
    let mut max_live = 0;
    for _ in 0..500 {
        // Keep the bird parked in the gap row.
        state.run_mut().bird = Bird::new(14.0);
        assert!(state.tick());
        max_live = max_live.max(state.pipes().len());
    }
    assert!(max_live <= 5, "max live pipes {max_live}");
    assert!(state.score() >= 20);
    assert!(state.pipes().iter().all(|p| p.x >= 0.0));
}

#[test]
fn same_seed_same_gaps() {
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);
    a.apply_action(GameAction::Flap);
    b.apply_action(GameAction::Flap);
    for _ in 0..60 {
        a.run_mut().bird = Bird::new(14.0);
        b.run_mut().bird = Bird::new(14.0);
        a.tick();
        b.tick();
    }
    let gaps_a: Vec<i32> = a.pipes().iter().map(|p| p.gap_y).collect();
    let gaps_b: Vec<i32> = b.pipes().iter().map(|p| p.gap_y).collect();
    assert_eq!(gaps_a.len(), 3);
    assert_eq!(gaps_a, gaps_b);
}
