use criterion::{black_box, criterion_group, criterion_main, Criterion};
use solver::{solve_maze, synthetic::MazeImageBuilder, SolveOutcome, SolverConfig};

fn bench_serpentine(c: &mut Criterion, cells: usize) {
    let img = MazeImageBuilder::serpentine(cells, cells, 8).build();
    let config = SolverConfig::default();

    c.bench_function(&format!("serpentine_{}", cells), |b| {
        b.iter(|| {
            let res = solve_maze(black_box(&img), black_box(&config));
            assert!(matches!(res, SolveOutcome::Solved(_)));
        })
    });
}

pub fn maze_small(c: &mut Criterion) {
    bench_serpentine(c, 16);
}

pub fn maze_medium(c: &mut Criterion) {
    bench_serpentine(c, 64);
}

pub fn maze_large(c: &mut Criterion) {
    bench_serpentine(c, 128);
}

criterion_group!(benches, maze_small, maze_medium, maze_large);
criterion_main!(benches);
