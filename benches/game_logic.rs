use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flappy_ascii::core::{Bird, GameState, Pipe};
use flappy_ascii::term::{FrameBuffer, GameView, Viewport};
use flappy_ascii::types::{GameAction, Theme, BIRD_X};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.apply_action(GameAction::Flap);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            // Park the bird so the run never ends.
            state.run_mut().bird = Bird::new(14.0);
            black_box(state.tick());
            if !state.running() {
                state.apply_action(GameAction::Restart);
                state.apply_action(GameAction::Flap);
            }
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let pipe = Pipe::with_gap(BIRD_X as f64, 14);
    let bird = Bird::new(11.5);

    c.bench_function("pipe_collision", |b| {
        b.iter(|| black_box(&pipe).collides_with(black_box(&bird)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.apply_action(GameAction::Flap);
    for _ in 0..4 {
        state.spawn_pipe();
    }
    let view = GameView::default();
    let mut fb = FrameBuffer::new(120, 40);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            view.render_into(&state, Theme::Dark, Viewport::new(120, 40), &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_collision, bench_render);
criterion_main!(benches);
