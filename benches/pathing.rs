use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use maze_search::frontier::FrontierKind;
use maze_search::generators;
use maze_search::grid::Grid;
use maze_search::heuristics::{Manhattan, SummedOffset};
use maze_search::pathing::{CostModel, PathSearch, SearchOptionsBuilder};
use maze_search::units::{ColumnsCount, RowsCount};

fn large_maze() -> Grid {
    generators::generate_with_seed(RowsCount(351), ColumnsCount(351), 2024).unwrap()
}

fn bench_depth_first(c: &mut Criterion) {
    c.bench_function("depth_first", |b| {
        let g = large_maze();
        let mut search = PathSearch::new(&g);
        b.iter(|| search.solve(FrontierKind::Lifo))
    });
}

fn bench_breadth_first(c: &mut Criterion) {
    c.bench_function("breadth_first", |b| {
        let g = large_maze();
        let mut search = PathSearch::new(&g);
        b.iter(|| search.solve(FrontierKind::Fifo))
    });
}

fn bench_summed_offset_priority(c: &mut Criterion) {
    c.bench_function("summed_offset_priority", |b| {
        let g = large_maze();
        let mut search = PathSearch::new(&g);
        b.iter(|| search.solve_informed(&SummedOffset))
    });
}

fn bench_manhattan_astar(c: &mut Criterion) {
    c.bench_function("manhattan_astar", |b| {
        let g = large_maze();
        let options = SearchOptionsBuilder::new().cost_model(CostModel::PathDepth).build();
        let mut search = PathSearch::with_options(&g, options);
        b.iter(|| search.solve_informed(&Manhattan))
    });
}

criterion_group!(
    benches,
    bench_depth_first,
    bench_breadth_first,
    bench_summed_offset_priority,
    bench_manhattan_astar
);
criterion_main!(benches);
