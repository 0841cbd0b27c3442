use criterion::{criterion_group, criterion_main, Criterion};
use maze_search::{
    generators,
    units::{ColumnsCount, RowsCount},
};

fn bench_generate_maze_63(c: &mut Criterion) {
    let mut seed = 0;
    c.bench_function("generate_maze_63", move |b| {
        b.iter(|| {
            seed += 1;
            generators::generate_with_seed(RowsCount(63), ColumnsCount(63), seed)
        })
    });
}

fn bench_generate_maze_401(c: &mut Criterion) {
    c.bench_function("generate_maze_401", |b| {
        b.iter(|| generators::generate_with_seed(RowsCount(401), ColumnsCount(401), 42))
    });
}

fn bench_is_perfect_maze_201(c: &mut Criterion) {
    let g = generators::generate_with_seed(RowsCount(201), ColumnsCount(201), 7).unwrap();
    c.bench_function("is_perfect_maze_201", move |b| {
        b.iter(|| generators::is_perfect_maze(&g))
    });
}

criterion_group!(
    benches,
    bench_generate_maze_63,
    bench_generate_maze_401,
    bench_is_perfect_maze_201
);
criterion_main!(benches);
