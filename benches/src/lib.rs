// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared data generators for the Screenplot benches.

use screenplot_points::Point;

/// Small xorshift generator so bench inputs are reproducible.
#[derive(Clone, Debug)]
pub struct Rng(u64);

impl Rng {
    /// Creates a generator from a non-zero seed.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1_u64 << 53) as f64)
    }
}

/// Generates `n_clusters * per_cluster` samples with clustered `pca` and
/// `tsne` coordinates in `0..1000` and a `dose` overlay.
pub fn gen_clustered_samples(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let centers: Vec<(f64, f64)> = (0..n_clusters)
        .map(|_| (rng.next_f64() * 1000.0, rng.next_f64() * 1000.0))
        .collect();
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for (c, (cx, cy)) in centers.iter().enumerate() {
        for k in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(
                Point::new(format!("c{c}-{k}"))
                    .with_projection("pca", (cx + dx, cy + dy))
                    .with_projection("tsne", (cy - dy, cx + dx))
                    .with_overlay("dose", rng.next_f64() * 10.0),
            );
        }
    }
    out
}
