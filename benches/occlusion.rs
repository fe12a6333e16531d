//! Benchmarks for occlusion recompute and full play sequences.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tripeaks_core::{deal_classic, generate, recompute_face_up, GameSession, RuleConfig, TableState};

fn dealt_table(seed: u64) -> TableState {
    let mut table = TableState::new();
    generate(&mut table, &deal_classic(seed, 1), &RuleConfig::default())
        .expect("classic deal is valid");
    table
}

fn bench_recompute(c: &mut Criterion) {
    let config = RuleConfig::default();
    let table = dealt_table(42);

    c.bench_function("recompute_face_up/classic", |b| {
        b.iter_batched(
            || table.clone(),
            |mut t| black_box(recompute_face_up(&mut t, &config)),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_draw_and_undo(c: &mut Criterion) {
    let mut session = GameSession::default();
    session
        .start_level(&deal_classic(42, 1))
        .expect("classic deal is valid");

    c.bench_function("session/draw_all_then_undo_all", |b| {
        b.iter_batched(
            || session.clone(),
            |mut s| {
                while s.request_draw().is_applied() {}
                while s.request_undo().is_applied() {}
                black_box(s)
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_recompute, bench_draw_and_undo);
criterion_main!(benches);
