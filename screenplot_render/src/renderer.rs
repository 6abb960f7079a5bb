// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scatterplot renderer.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Circle, Rect, Size};
use peniko::Color;
use screenplot_points::{PointManager, Scale, SpatialIndex, StatusFlags};

use crate::color::ColorScale;
use crate::context::DrawContext;
use crate::error::RenderError;
use crate::style::{Bucket, StyleTable};

/// Point indices partitioned into draw buckets.
///
/// Within a bucket, indices keep the order of the working set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buckets {
    /// Indices in [`Bucket::FilteredOut`].
    pub filtered_out: Vec<usize>,
    /// Indices in [`Bucket::Default`].
    pub default: Vec<usize>,
    /// Indices in [`Bucket::Neighbours`].
    pub neighbours: Vec<usize>,
    /// Indices in [`Bucket::Active`].
    pub active: Vec<usize>,
}

impl Buckets {
    /// Returns the members of `bucket`.
    #[must_use]
    pub fn get(&self, bucket: Bucket) -> &[usize] {
        match bucket {
            Bucket::FilteredOut => &self.filtered_out,
            Bucket::Default => &self.default,
            Bucket::Neighbours => &self.neighbours,
            Bucket::Active => &self.active,
        }
    }

    /// Total number of indices across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        Bucket::PAINT_ORDER.iter().map(|&b| self.get(b).len()).sum()
    }

    /// Returns `true` if every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, status: StatusFlags, index: usize) {
        let bucket = bucket_for(status);
        match bucket {
            Bucket::FilteredOut => self.filtered_out.push(index),
            Bucket::Default => self.default.push(index),
            Bucket::Neighbours => self.neighbours.push(index),
            Bucket::Active => self.active.push(index),
        }
    }
}

/// Chooses the bucket for a status by precedence: active, then neighbour,
/// then default unless filtered out.
#[must_use]
pub fn bucket_for(status: StatusFlags) -> Bucket {
    if status.has(StatusFlags::ACTIVE) {
        Bucket::Active
    } else if status.has(StatusFlags::NEIGHBOUR) {
        Bucket::Neighbours
    } else if !status.has(StatusFlags::FILTERED_OUT) {
        Bucket::Default
    } else {
        Bucket::FilteredOut
    }
}

/// Summary of one redraw.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Points painted per bucket, indexed in [`Bucket::PAINT_ORDER`].
    pub painted: [usize; 4],
    /// Fill colour changes issued.
    pub fill_changes: usize,
}

impl DrawStats {
    /// Total points painted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.painted.iter().sum()
    }
}

/// Paints a [`PointManager`]'s points onto a [`DrawContext`].
///
/// A redraw clears the surface, sorts the working set into [`Buckets`] and
/// paints them in [`Bucket::PAINT_ORDER`]. Stroke colour, line width and alpha
/// are set once per bucket; the fill is only re-issued when it changes.
///
/// All setters are pure configuration and never repaint on their own.
pub struct ScatterRenderer<C> {
    ctx: C,
    size: Size,
    projection: String,
    overlay: Option<String>,
    color_scale: Option<Box<dyn ColorScale>>,
    scales: Option<(Box<dyn Scale>, Box<dyn Scale>)>,
    styles: StyleTable,
}

impl<C> fmt::Debug for ScatterRenderer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScatterRenderer")
            .field("size", &self.size)
            .field("projection", &self.projection)
            .field("overlay", &self.overlay)
            .field("color_scale", &self.color_scale.is_some())
            .field("scale_bound", &self.scales.is_some())
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}

impl<C: DrawContext> ScatterRenderer<C> {
    /// Creates a renderer drawing into `ctx`, a surface of `size` pixels,
    /// using projection `projection` and the default style table.
    pub fn new(ctx: C, size: impl Into<Size>, projection: impl Into<String>) -> Self {
        Self {
            ctx,
            size: size.into(),
            projection: projection.into(),
            overlay: None,
            color_scale: None,
            scales: None,
            styles: StyleTable::default(),
        }
    }

    /// Replaces the style table.
    #[must_use]
    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// Returns the drawing context.
    pub fn context(&self) -> &C {
        &self.ctx
    }

    /// Returns the drawing context mutably.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    /// Consumes the renderer, returning the drawing context.
    pub fn into_context(self) -> C {
        self.ctx
    }

    /// Returns the style table.
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Returns the style table for modification.
    pub fn styles_mut(&mut self) -> &mut StyleTable {
        &mut self.styles
    }

    /// Surface size in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the surface size cleared by each redraw.
    pub fn resize(&mut self, size: impl Into<Size>) {
        self.size = size.into();
    }

    /// Projection the renderer reads coordinates from.
    pub fn projection(&self) -> &str {
        &self.projection
    }

    /// Sets the projection; it must match the manager's at redraw time.
    pub fn set_projection(&mut self, name: impl Into<String>) {
        self.projection = name.into();
    }

    /// Overlay driving the colour scale, or `None` for no overlay.
    pub fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    /// Sets the overlay driving the colour scale.
    pub fn set_overlay(&mut self, name: Option<String>) {
        self.overlay = name;
    }

    /// Sets or removes the colour scale applied to filtered-out and default points.
    pub fn set_color_scale(&mut self, scale: Option<Box<dyn ColorScale>>) {
        self.color_scale = scale;
    }

    /// Binds the per-axis domain-to-pixel transforms.
    pub fn bind_scale(&mut self, x: impl Scale + 'static, y: impl Scale + 'static) {
        self.scales = Some((Box::new(x), Box::new(y)));
    }

    /// Partitions `indices` (or every point) into draw buckets.
    ///
    /// Indices are not validated here; out-of-range ones are skipped.
    pub fn partition<I: SpatialIndex>(
        &self,
        manager: &PointManager<I>,
        indices: Option<&[usize]>,
    ) -> Buckets {
        let mut buckets = Buckets::default();
        match indices {
            Some(indices) => {
                for &i in indices {
                    if let Some(status) = manager.status(i) {
                        buckets.push(status, i);
                    }
                }
            }
            None => {
                for i in 0..manager.len() {
                    if let Some(status) = manager.status(i) {
                        buckets.push(status, i);
                    }
                }
            }
        }
        buckets
    }

    /// Clears the surface and paints `indices`, or every point when `None`.
    ///
    /// Fails without touching the context if no scale is bound, if the
    /// projection differs from the manager's, or if an index is out of range.
    pub fn redraw<I: SpatialIndex>(
        &mut self,
        manager: &PointManager<I>,
        indices: Option<&[usize]>,
    ) -> Result<DrawStats, RenderError> {
        let Some((xs, ys)) = self.scales.as_ref() else {
            return Err(RenderError::ScaleNotBound);
        };
        if manager.current_projection() != self.projection {
            return Err(RenderError::ProjectionMismatch {
                renderer: self.projection.clone(),
                manager: manager.current_projection().into(),
            });
        }
        if let Some(indices) = indices {
            let len = manager.len();
            if let Some(&index) = indices.iter().find(|&&i| i >= len) {
                return Err(RenderError::IndexOutOfRange { index, len });
            }
        }

        let buckets = self.partition(manager, indices);
        self.ctx.clear_rect(Rect::from_origin_size(kurbo::Point::ORIGIN, self.size));

        let mut stats = DrawStats::default();
        let mut current_fill: Option<[f32; 4]> = None;
        for (slot, bucket) in Bucket::PAINT_ORDER.into_iter().enumerate() {
            let members = buckets.get(bucket);
            if members.is_empty() {
                continue;
            }
            let style = *self.styles.get(bucket);
            self.ctx.set_stroke_style(style.stroke);
            self.ctx.set_line_width(style.stroke_width);
            self.ctx.set_global_alpha(style.alpha);

            for &i in members {
                let Some(at) = manager.position(i) else {
                    continue;
                };
                let fill = self.fill_for(manager, bucket, i, style.fill);
                if current_fill != Some(fill.components) {
                    self.ctx.set_fill_style(fill);
                    current_fill = Some(fill.components);
                    stats.fill_changes += 1;
                }
                let center = kurbo::Point::new(xs.forward(at.x), ys.forward(at.y));
                self.ctx.fill_stroke_circle(Circle::new(center, style.radius));
                stats.painted[slot] += 1;
            }
        }

        tracing::debug!(
            projection = %self.projection,
            filtered_out = stats.painted[0],
            default = stats.painted[1],
            neighbours = stats.painted[2],
            active = stats.painted[3],
            fill_changes = stats.fill_changes,
            "redrew scatterplot"
        );
        Ok(stats)
    }

    fn fill_for<I: SpatialIndex>(
        &self,
        manager: &PointManager<I>,
        bucket: Bucket,
        index: usize,
        fallback: Color,
    ) -> Color {
        if !bucket.uses_color_scale() {
            return fallback;
        }
        let Some(scale) = self.color_scale.as_ref() else {
            return fallback;
        };
        let value = self
            .overlay
            .as_deref()
            .and_then(|name| manager.overlay(index, name))
            .unwrap_or(0.0);
        scale.color(value)
    }
}
