use criterion::{criterion_group, criterion_main, Criterion};
use crucible_lib::{load_grid, solve, solve_with_path, CostGrid, RunLimits, SearchConfig};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/example_grid.txt")
}

static EXAMPLE: Lazy<CostGrid> = Lazy::new(|| load_grid(&fixture_path()).expect("fixture loads"));

/// 141x141 grid tiled from the example so the search has real work to do.
static LARGE: Lazy<CostGrid> = Lazy::new(|| {
    let rows: Vec<Vec<u32>> = EXAMPLE.rows().map(<[u32]>::to_vec).collect();
    let size = 141;
    let tiled = (0..size)
        .map(|r| {
            (0..size)
                .map(|c| {
                    let base = rows[r % rows.len()][c % rows[0].len()];
                    (base + (r / rows.len() + c / rows[0].len()) as u32) % 9 + 1
                })
                .collect()
        })
        .collect();
    CostGrid::new(tiled).expect("rectangular grid")
});

fn benchmark_search(c: &mut Criterion) {
    let example = &*EXAMPLE;
    let large = &*LARGE;

    c.bench_function("basic_example", |b| {
        b.iter(|| black_box(solve(example, RunLimits::BASIC).expect("route exists")));
    });

    c.bench_function("ultra_example", |b| {
        b.iter(|| black_box(solve(example, RunLimits::ULTRA).expect("route exists")));
    });

    c.bench_function("basic_large", |b| {
        b.iter(|| black_box(solve(large, RunLimits::BASIC).expect("route exists")));
    });

    c.bench_function("ultra_large_with_path", |b| {
        let config = SearchConfig::new(RunLimits::ULTRA);
        b.iter(|| {
            let solution = solve_with_path(large, config).expect("route exists");
            black_box(solution.path.moves().len())
        });
    });
}

criterion_group!(benches, benchmark_search);
criterion_main!(benches);
