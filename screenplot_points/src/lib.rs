// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=screenplot_points --heading-base-level=0

//! Screenplot Points: point bookkeeping for large interactive scatterplots.
//!
//! This crate owns the _data side_ of a scatterplot of screening samples: the
//! canonical, ordered point collection, a mutable status bitmask per point,
//! an id to index table, and a nearest-point index over whichever 2D
//! projection (PCA, t-SNE, ...) is currently selected. It does **not** draw
//! anything and knows nothing about input events; a controller calls its
//! query and command methods from its own mouse handlers and then asks a
//! renderer to repaint.
//!
//! The core type is [`PointManager`]:
//! - Points are addressed by **index**, their position in the input. Indices
//!   are the only handles that cross into renderers.
//! - [`StatusFlags`] carries UI state such as active, neighbour and filtered-out.
//!   [`PointManager::set_status`] makes the named points the *only* holders of a flag.
//! - [`PointManager::find_nearest`] maps a cursor through a pair of [`Scale`]s into
//!   domain space, asks the [`SpatialIndex`] for the nearest point, and confirms the
//!   hit by measuring the distance back in pixels.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point as Px;
//! use screenplot_points::{LinearScale, Point, PointManager, StatusFlags};
//!
//! let mut points = PointManager::new([
//!     Point::new("A01").with_projection("pca", (0.0, 0.0)).with_projection("tsne", (5.0, 5.0)),
//!     Point::new("A02").with_projection("pca", (10.0, 10.0)).with_projection("tsne", (0.0, 0.0)),
//! ])
//! .unwrap();
//! points.bind_scale(LinearScale::identity(), LinearScale::identity());
//!
//! // Hover: highlight whatever lies under the cursor.
//! let hit = points.find_nearest(Px::new(1.0, 1.0), 5.0).unwrap();
//! assert_eq!(hit, Some(0));
//! points.set_status(hit, StatusFlags::ACTIVE).unwrap();
//!
//! // Switching projections rebuilds the spatial index.
//! points.select_projection("tsne").unwrap();
//! assert_eq!(points.find_nearest(Px::new(1.0, 1.0), 5.0).unwrap(), Some(1));
//! ```
//!
//! ## Backends
//!
//! [`FlatScan`] answers queries with a linear scan and is the default. With the
//! `rstar` feature, `RTreeIndex` uses a bulk-loaded R-tree instead. Any type
//! implementing [`SpatialIndex`] can be plugged in through [`PointManager::build`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod backends;
mod error;
mod manager;
mod point;
mod scale;
mod spatial;
pub mod status;

pub use backends::FlatScan;
#[cfg(feature = "rstar")]
pub use backends::RTreeIndex;
pub use error::PointError;
pub use manager::PointManager;
pub use point::Point;
pub use scale::{LinearScale, Scale};
pub use spatial::SpatialIndex;
pub use status::StatusFlags;
