// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface abstraction consumed by the renderer.

use kurbo::{Circle, Rect};
use peniko::Color;

/// Minimal immediate-mode 2D drawing context.
///
/// This mirrors the subset of the HTML Canvas 2D API a scatterplot needs.
/// Style setters change state that persists until the next call to the same
/// setter; [`DrawContext::fill_stroke_circle`] paints with whatever state is
/// current. Implementations should treat state changes as potentially
/// expensive; the renderer issues as few as it can.
pub trait DrawContext {
    /// Clears `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Sets the colour used by subsequent fills.
    fn set_fill_style(&mut self, color: Color);

    /// Sets the colour used by subsequent strokes.
    fn set_stroke_style(&mut self, color: Color);

    /// Sets the stroke width used by subsequent strokes.
    fn set_line_width(&mut self, width: f64);

    /// Sets the global alpha applied to subsequent fills and strokes.
    fn set_global_alpha(&mut self, alpha: f64);

    /// Fills, then strokes, a circle as a single path.
    fn fill_stroke_circle(&mut self, circle: Circle);
}

impl<C: DrawContext + ?Sized> DrawContext for &mut C {
    fn clear_rect(&mut self, rect: Rect) {
        (**self).clear_rect(rect);
    }

    fn set_fill_style(&mut self, color: Color) {
        (**self).set_fill_style(color);
    }

    fn set_stroke_style(&mut self, color: Color) {
        (**self).set_stroke_style(color);
    }

    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        (**self).set_global_alpha(alpha);
    }

    fn fill_stroke_circle(&mut self, circle: Circle) {
        (**self).fill_stroke_circle(circle);
    }
}
