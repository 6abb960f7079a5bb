// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use screenplot_benches::gen_clustered_samples;
use screenplot_points::{PointManager, StatusFlags};

fn bench_hover_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("points/set_status");

    // Hypothesis: hover-style updates (one active point, a handful of
    // neighbours) cost the same regardless of collection size, since only the
    // previous holders are cleared.
    for clusters in [10_usize, 100, 1_000] {
        let mut m = PointManager::new(gen_clustered_samples(clusters, 100, 80.0)).unwrap();
        let len = m.len();
        group.bench_function(BenchmarkId::new("hover", len), |b| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 7) % len;
                m.set_status([i], StatusFlags::ACTIVE).unwrap();
                m.set_status((i..len).take(8), StatusFlags::NEIGHBOUR).unwrap();
                black_box(m.revision());
            });
        });

        group.bench_function(BenchmarkId::new("filter_half", len), |b| {
            b.iter(|| {
                m.set_status((0..len).step_by(2), StatusFlags::FILTERED_OUT)
                    .unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hover_updates);
criterion_main!(benches);
