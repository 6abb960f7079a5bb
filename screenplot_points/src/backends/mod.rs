// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concrete [`SpatialIndex`](crate::SpatialIndex) implementations.

mod flatscan;
#[cfg(feature = "rstar")]
mod rtree;

pub use flatscan::FlatScan;
#[cfg(feature = "rstar")]
pub use rtree::RTreeIndex;
