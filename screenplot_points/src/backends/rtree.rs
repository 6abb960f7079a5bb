// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! R-tree backend built on `rstar`, for collections where a linear scan per
//! pointer move is too slow.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;
use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::spatial::SpatialIndex;

type Entry = GeomWithData<[f64; 2], usize>;

/// Bulk-loaded R-tree backend.
///
/// Tie-breaking between equidistant entries is left to `rstar`.
pub struct RTreeIndex {
    tree: RTree<Entry>,
}

impl Debug for RTreeIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RTreeIndex")
            .field("len", &self.tree.size())
            .finish_non_exhaustive()
    }
}

impl SpatialIndex for RTreeIndex {
    fn build(points: &[Point]) -> Self {
        let entries: Vec<Entry> = points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_finite())
            .map(|(i, p)| GeomWithData::new([p.x, p.y], i))
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    fn nearest(&self, query: Point) -> Option<usize> {
        self.tree.nearest_neighbor(&[query.x, query.y]).map(|e| e.data)
    }

    fn len(&self) -> usize {
        self.tree.size()
    }
}
