// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=screenplot_render --heading-base-level=0

//! Screenplot Render: order-correct, state-batched scatterplot painting.
//!
//! [`ScatterRenderer`] reads point status from a
//! [`PointManager`](screenplot_points::PointManager) and paints circles through a
//! [`DrawContext`], the small subset of the Canvas 2D API a scatterplot needs.
//! The renderer never mutates the manager.
//!
//! # Draw buckets
//!
//! Each redraw sorts its working set into four [`Bucket`]s by status precedence
//! (active, then neighbour, then default unless filtered out) and paints them in
//! [`Bucket::PAINT_ORDER`]: filtered-out, default, neighbours, active. This is a
//! painter's algorithm guarantee that highlighted points always end up on top.
//! Stroke, line width and alpha are set once per bucket; fills are re-issued
//! only when they change.
//!
//! Filtered-out and default points take their fill from the bound [`ColorScale`]
//! applied to the current overlay value (missing values count as `0.0`);
//! neighbours and the active point always use their bucket's fixed fill.
//!
//! # Example
//!
//! ```rust
//! use screenplot_points::{LinearScale, Point, PointManager, StatusFlags};
//! use screenplot_render::{Bucket, DrawCall, RecordingContext, ScatterRenderer};
//!
//! let mut points = PointManager::new([
//!     Point::new("A01").with_projection("pca", (0.0, 0.0)),
//!     Point::new("A02").with_projection("pca", (10.0, 10.0)),
//! ])
//! .unwrap();
//! points.set_status([0], StatusFlags::ACTIVE).unwrap();
//!
//! let mut renderer = ScatterRenderer::new(RecordingContext::new(), (400.0, 300.0), "pca");
//! renderer.bind_scale(LinearScale::identity(), LinearScale::identity());
//! let stats = renderer.redraw(&points, None).unwrap();
//! assert_eq!(stats.total(), 2);
//!
//! // The active point is painted last.
//! let last = renderer.context().circles().last().unwrap();
//! assert_eq!(last.0.radius, renderer.styles().get(Bucket::Active).radius);
//! assert!(matches!(renderer.context().calls()[0], DrawCall::ClearRect(_)));
//! ```
//!
//! [`RecordingContext`] logs calls instead of painting and is what the tests use
//! as a mock canvas. The `screenplot_web_canvas` crate provides a browser
//! implementation.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod context;
mod error;
mod recording;
mod renderer;
mod style;

pub use color::{ColorScale, LinearColorScale};
pub use context::DrawContext;
pub use error::RenderError;
pub use recording::{ContextState, DrawCall, RecordingContext};
pub use renderer::{Buckets, DrawStats, ScatterRenderer, bucket_for};
pub use style::{Bucket, PointStyle, StyleTable};
