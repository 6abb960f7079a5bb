// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; fine for a few thousand points.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::spatial::SpatialIndex;

/// Flat vector backend answering nearest queries with a linear scan.
///
/// Ties resolve to the lowest slot.
#[derive(Clone, Default)]
pub struct FlatScan {
    entries: Vec<Point>,
}

impl Debug for FlatScan {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatScan")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl SpatialIndex for FlatScan {
    fn build(points: &[Point]) -> Self {
        Self {
            entries: points.to_vec(),
        }
    }

    fn nearest(&self, query: Point) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in self.entries.iter().enumerate() {
            let d = p.distance_squared(query);
            if !d.is_finite() {
                continue;
            }
            match best {
                Some((_, bd)) if bd <= d => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
