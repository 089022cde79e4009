use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris3d::core::{Board, Engine};
use tetris3d::term::{encode_diff_into, FrameBuffer, PitView, Viewport};
use tetris3d::types::{Axis, Dimensions, EngineState};

fn playing() -> Engine {
    let mut engine = Engine::new(12345);
    engine.start(Dimensions::CLASSIC);
    engine
}

fn bench_update(c: &mut Criterion) {
    let mut engine = playing();

    c.bench_function("update_16ms", |b| {
        b.iter(|| {
            engine.update(black_box(16));
            if engine.state() != EngineState::Playing {
                engine.restart();
            }
        })
    });
}

fn bench_layer_clear(c: &mut Criterion) {
    c.bench_function("clear_4_layers", |b| {
        b.iter(|| {
            let mut board = Board::new(Dimensions::CLASSIC);
            // Fill the bottom 4 layers
            for y in 0..4 {
                for z in 0..10 {
                    for x in 0..10 {
                        board.set(x, y, z, Some(0x00ffff));
                    }
                }
            }
            board.clear_lines()
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut engine = playing();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            if !engine.spawn() {
                engine.restart();
            }
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut engine = playing();

    c.bench_function("move_x", |b| {
        b.iter(|| {
            if !engine.move_x(1) {
                engine.move_x(-1);
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = playing();

    c.bench_function("rotate_y", |b| {
        b.iter(|| engine.rotate(black_box(Axis::Y), true))
    });
}

fn bench_render(c: &mut Criterion) {
    let engine = playing();
    let snap = engine.snapshot();
    let view = PitView::default();
    let viewport = Viewport::new(80, 24);
    let prev = FrameBuffer::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);
    let mut out = Vec::with_capacity(16 * 1024);

    c.bench_function("render_and_diff", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), viewport, &mut fb);
            out.clear();
            encode_diff_into(&prev, &fb, &mut out).ok();
            out.len()
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_layer_clear,
    bench_spawn,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
