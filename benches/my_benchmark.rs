use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nanorand::{Rng, WyRand};
use uniform_cost::prelude::*;

fn random_grid(size: usize, seed: u64) -> Grid {
    let mut rng = WyRand::new_seed(seed);
    let cells = (0..size)
        .map(|row| {
            (0..size)
                .map(|column| {
                    // corners stay open so they can be used as endpoints
                    let corner = (row == 0 || row == size - 1) && (column == 0 || column == size - 1);
                    if !corner && rng.generate_range(0_u32..5) == 0 {
                        Cell::Wall
                    } else {
                        Cell::Open(rng.generate_range(1_usize..=9))
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    Grid::from_rows(cells).unwrap()
}

fn corner_to_corner(c: &mut Criterion) {
    for size in [16, 64, 256] {
        let grid = random_grid(size, size as u64);
        let goal = (size - 1, size - 1);
        c.bench_function(&format!("find_path {size}x{size}"), |b| {
            b.iter(|| find_path(black_box(&grid), (0, 0), goal))
        });
    }
}

fn batch(c: &mut Criterion) {
    let size = 128;
    let grid = random_grid(size, 1);
    let last = size - 1;
    let queries = [
        ((0, 0), (last, last)),
        ((0, last), (last, 0)),
        ((last, 0), (0, last)),
        ((last, last), (0, 0)),
    ];
    c.bench_function("search_batch 128x128 x4", |b| {
        b.iter(|| search_batch(black_box(&grid), &queries, SearchConfig::default()))
    });
}

fn parse(c: &mut Criterion) {
    let text = random_grid(128, 2).to_string();
    c.bench_function("parse 128x128", |b| {
        b.iter(|| black_box(&text).parse::<Grid>())
    });
}

criterion_group!(benches, corner_to_corner, batch, parse);
criterion_main!(benches);
