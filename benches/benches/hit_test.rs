// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point as Px;
use screenplot_benches::{Rng, gen_clustered_samples};
use screenplot_points::{LinearScale, PointManager, SpatialIndex};

fn cursors(n: usize) -> Vec<Px> {
    let mut rng = Rng::new(0x81FD_BEE7_94F0_AF1A);
    (0..n)
        .map(|_| Px::new(rng.next_f64() * 800.0, rng.next_f64() * 600.0))
        .collect()
}

fn manager<I: SpatialIndex>(clusters: usize) -> PointManager<I> {
    let mut m = PointManager::<I>::build(gen_clustered_samples(clusters, 100, 80.0), None).unwrap();
    m.bind_scale(
        LinearScale::new(0.0..1000.0, 0.0..800.0),
        LinearScale::new(0.0..1000.0, 600.0..0.0),
    );
    m
}

fn bench_find_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("points/find_nearest");
    let queries = cursors(256);
    group.throughput(Throughput::Elements(queries.len() as u64));

    for clusters in [10_usize, 100, 500] {
        let flat = manager::<screenplot_points::FlatScan>(clusters);
        group.bench_with_input(BenchmarkId::new("flat", clusters * 100), &queries, |b, qs| {
            b.iter(|| {
                for q in qs {
                    black_box(flat.find_nearest(*q, 6.0).unwrap());
                }
            });
        });

        #[cfg(feature = "compare_rstar")]
        {
            let rtree = manager::<screenplot_points::RTreeIndex>(clusters);
            group.bench_with_input(BenchmarkId::new("rtree", clusters * 100), &queries, |b, qs| {
                b.iter(|| {
                    for q in qs {
                        black_box(rtree.find_nearest(*q, 6.0).unwrap());
                    }
                });
            });
        }
    }
    group.finish();
}

fn bench_select_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("points/select_projection");
    for clusters in [10_usize, 100] {
        let mut m = manager::<screenplot_points::FlatScan>(clusters);
        group.bench_function(BenchmarkId::new("flat", clusters * 100), |b| {
            b.iter(|| {
                m.select_projection("tsne").unwrap();
                m.select_projection("pca").unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_nearest, bench_select_projection);
criterion_main!(benches);
