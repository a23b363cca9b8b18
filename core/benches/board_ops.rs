use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minestep_core::{BoardConfig, GridGenerator, RandomGridGenerator};
use std::hint::black_box;

const TIERS: [(&str, u8, u8, u16); 3] = [
    ("beginner", 9, 9, 10),
    ("intermediate", 16, 16, 40),
    ("expert", 30, 16, 99),
];

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    for (name, width, height, mines) in TIERS {
        let config = BoardConfig::new(width, height, mines).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(RandomGridGenerator::new(seed).generate(config))
            });
        });
    }
    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for (name, width, height, mines) in TIERS {
        let config = BoardConfig::new(width, height, mines).unwrap();
        let grid = RandomGridGenerator::new(7).generate(config);
        let Some((start, _)) = grid.cells().find(|(_, cell)| cell.value.is_zero()) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), &grid, |b, grid| {
            b.iter(|| black_box(grid.reveal(black_box(start))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_create, bench_flood_fill);
criterion_main!(benches);
