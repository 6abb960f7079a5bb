// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use peniko::Color;
use screenplot_benches::gen_clustered_samples;
use screenplot_points::{LinearScale, PointManager, StatusFlags};
use screenplot_render::{LinearColorScale, RecordingContext, ScatterRenderer};

fn bench_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/redraw");

    for clusters in [10_usize, 100] {
        let mut m = PointManager::new(gen_clustered_samples(clusters, 100, 80.0)).unwrap();
        let len = m.len();
        m.set_status((0..len).step_by(3), StatusFlags::FILTERED_OUT)
            .unwrap();
        m.set_status(1..9, StatusFlags::NEIGHBOUR).unwrap();
        m.set_status([4], StatusFlags::ACTIVE).unwrap();
        group.throughput(Throughput::Elements(len as u64));

        let mut plain = ScatterRenderer::new(RecordingContext::new(), (800.0, 600.0), "pca");
        plain.bind_scale(
            LinearScale::new(0.0..1000.0, 0.0..800.0),
            LinearScale::new(0.0..1000.0, 600.0..0.0),
        );
        group.bench_function(BenchmarkId::new("fixed_fill", len), |b| {
            b.iter(|| {
                plain.context_mut().clear_calls();
                plain.redraw(&m, None).unwrap()
            });
        });

        let mut scaled = ScatterRenderer::new(RecordingContext::new(), (800.0, 600.0), "pca");
        scaled.bind_scale(
            LinearScale::new(0.0..1000.0, 0.0..800.0),
            LinearScale::new(0.0..1000.0, 600.0..0.0),
        );
        scaled.set_overlay(Some("dose".into()));
        scaled.set_color_scale(Some(Box::new(LinearColorScale::new(
            0.0..10.0,
            Color::from_rgb8(0x44, 0x01, 0x54),
            Color::from_rgb8(0xfd, 0xe7, 0x25),
        ))));
        group.bench_function(BenchmarkId::new("color_scale", len), |b| {
            b.iter(|| {
                scaled.context_mut().clear_calls();
                scaled.redraw(&m, None).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_redraw);
criterion_main!(benches);
