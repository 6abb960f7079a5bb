// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial index abstraction used for nearest-point lookups.

use core::fmt::Debug;

use kurbo::Point;

/// Nearest-neighbour index over one projection's coordinates.
///
/// An index is always built in one go from the coordinates of every point, in
/// index order, so slot `i` is the point with index `i`. The manager drops
/// and rebuilds it whenever the selected projection changes; there is no
/// incremental update path.
pub trait SpatialIndex: Debug {
    /// Builds an index over `points`, where `points[i]` belongs to slot `i`.
    fn build(points: &[Point]) -> Self
    where
        Self: Sized;

    /// Returns the slot nearest to `query` in domain space.
    ///
    /// Returns `None` only when the index is empty. Entries with non-finite
    /// coordinates never match.
    fn nearest(&self, query: Point) -> Option<usize>;

    /// Number of slots in the index.
    fn len(&self) -> usize;

    /// Returns `true` if the index has no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
