use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_stack::core::PieceSource;
use tetris_stack::engine::ExchangeEngine;

fn bench_play(c: &mut Criterion) {
    let mut engine = ExchangeEngine::new(PieceSource::new(12345));

    c.bench_function("play_front", |b| {
        b.iter(|| black_box(engine.play_front()))
    });
}

fn bench_single_swap(c: &mut Criterion) {
    let mut engine = ExchangeEngine::new(PieceSource::new(12345));
    engine.move_front_to_reserve().unwrap();

    c.bench_function("swap_front_top", |b| {
        b.iter(|| black_box(engine.swap_front_top()))
    });
}

fn bench_triple_swap(c: &mut Criterion) {
    let mut engine = ExchangeEngine::new(PieceSource::new(12345));
    for _ in 0..3 {
        engine.move_front_to_reserve().unwrap();
    }

    c.bench_function("swap_three_block", |b| {
        b.iter(|| black_box(engine.swap_three_block()))
    });
}

criterion_group!(benches, bench_play, bench_single_swap, bench_triple_swap);
criterion_main!(benches);
