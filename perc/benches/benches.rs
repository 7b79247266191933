use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use perc::{run_trial, Percolation, UnionFind};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn union_find(c: &mut Criterion) {
    c.bench_function("union_find_chain_10000", |b| {
        b.iter(|| {
            let mut uf = UnionFind::new(10_000);
            for i in 1..10_000 {
                uf.union(i - 1, i);
            }
            black_box(uf.find(0))
        })
    });
}

fn open_all_sites(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_all_sites");
    for size in [16, 64, 256] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let mut sites = (1..=size)
            .flat_map(|row| (1..=size).map(move |col| (row, col)))
            .collect::<Vec<_>>();
        sites.shuffle(&mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(size), &sites, |b, sites| {
            b.iter(|| {
                let mut grid = Percolation::new(size).unwrap();
                for &(row, col) in sites {
                    grid.open(row, col).unwrap();
                }
                black_box(grid.percolates())
            })
        });
    }
    group.finish();
}

fn trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial");
    for size in [32, 128] {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| black_box(run_trial(size, &mut rng).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, union_find, open_all_sites, trial);
criterion_main!(benches);
