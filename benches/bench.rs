use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use difflife::{next_state, DiffGrid, Grid, SparseDiffGrid, World};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

const SIZE: usize = 256;
const STEPS: usize = 16;

fn random_grid() -> Grid {
    Grid::new_random(SIZE, SIZE, &mut StdRng::seed_from_u64(67))
}

fn recount(grid: &Grid, next: &mut Grid) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            next.set(x, y, next_state(grid.get(x, y), grid.live_neighbors(x, y)));
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("256x256 random soup");
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));

    group
        .bench_function("incremental", |b| {
            b.iter_batched(
                || World::<DiffGrid>::with_counts(random_grid()),
                |mut world| {
                    for _ in 0..STEPS {
                        world.step();
                    }
                    world
                },
                BatchSize::LargeInput,
            )
        })
        .bench_function("incremental-sparse", |b| {
            b.iter_batched(
                || World::<SparseDiffGrid>::with_counts(random_grid()),
                |mut world| {
                    for _ in 0..STEPS {
                        world.step();
                    }
                    world
                },
                BatchSize::LargeInput,
            )
        })
        .bench_function("recount", |b| {
            b.iter_batched(
                || (random_grid(), Grid::new(SIZE, SIZE)),
                |(mut grid, mut next)| {
                    for _ in 0..STEPS {
                        recount(&grid, &mut next);
                        grid.swap(&mut next);
                    }
                    grid
                },
                BatchSize::LargeInput,
            )
        });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
