use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_hints::details::*;
use wordle_hints::*;

use std::collections::HashSet;
use std::sync::Arc;

fn bench_construct_bundled(c: &mut Criterion) {
    c.bench_function("construct bundled solver", |b| {
        b.iter(|| Solver::new(black_box(5), None))
    });
}

fn bench_update(c: &mut Criterion) {
    let solver = Solver::new(5, None).unwrap();

    c.bench_function("update crane 01020", |b| {
        b.iter(|| {
            let mut solver = solver.clone();
            solver.update(black_box("crane"), black_box("01020"))
        })
    });
}

fn bench_score_words(c: &mut Criterion) {
    let bank = WordBank::from_source(&WordSource::default(), 5, InvalidWordPolicy::Reject).unwrap();
    let words: HashSet<Arc<str>> = bank.iter().cloned().collect();

    c.bench_function("score bundled words", |b| {
        b.iter(|| score_words(black_box(&words), 5))
    });
}

fn bench_guess(c: &mut Criterion) {
    let solver = Solver::new(5, None).unwrap();

    c.bench_function("guess top 5 excluding e", |b| {
        b.iter(|| solver.guess(black_box("e"), 5))
    });
}

fn bench_play_game(c: &mut Criterion) {
    let mut solver = Solver::new(5, None).unwrap();

    c.bench_function("play game for 'spoke'", |b| {
        b.iter(|| play_game(black_box("spoke"), 128, &mut solver))
    });
}

criterion_group!(
    benches,
    bench_construct_bundled,
    bench_update,
    bench_score_words,
    bench_guess,
    bench_play_game
);
criterion_main!(benches);
