// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`DrawContext`] that records calls instead of painting.
//!
//! It is intentionally *not* a rasterizer. It exists for tests and debugging
//! that want to assert on the emitted call sequence and on the context state
//! in effect when each circle was painted.

use alloc::vec::Vec;

use kurbo::{Circle, Rect};
use peniko::Color;
use peniko::color::Rgba8;

use crate::context::DrawContext;

/// Context state in effect at a given point of the call log.
///
/// Colours are stored as 8-bit RGBA so logs compare exactly.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContextState {
    /// Current fill colour, if one was ever set.
    pub fill: Option<Rgba8>,
    /// Current stroke colour, if one was ever set.
    pub stroke: Option<Rgba8>,
    /// Current line width.
    pub line_width: f64,
    /// Current global alpha.
    pub alpha: f64,
}

/// One recorded call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// [`DrawContext::clear_rect`].
    ClearRect(Rect),
    /// [`DrawContext::set_fill_style`].
    SetFillStyle(Rgba8),
    /// [`DrawContext::set_stroke_style`].
    SetStrokeStyle(Rgba8),
    /// [`DrawContext::set_line_width`].
    SetLineWidth(f64),
    /// [`DrawContext::set_global_alpha`].
    SetGlobalAlpha(f64),
    /// [`DrawContext::fill_stroke_circle`] and the state used to paint it.
    Circle {
        /// The painted circle.
        circle: Circle,
        /// State at the time of painting.
        state: ContextState,
    },
}

impl DrawCall {
    /// Returns `true` for calls that change context state.
    #[must_use]
    pub fn is_state_change(&self) -> bool {
        matches!(
            self,
            Self::SetFillStyle(_)
                | Self::SetStrokeStyle(_)
                | Self::SetLineWidth(_)
                | Self::SetGlobalAlpha(_)
        )
    }
}

/// Recording implementation of [`DrawContext`].
///
/// State starts like a fresh canvas context: line width `1.0`, alpha `1.0`,
/// and no colours set.
#[derive(Clone, Debug)]
pub struct RecordingContext {
    calls: Vec<DrawCall>,
    state: ContextState,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingContext {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            state: ContextState {
                fill: None,
                stroke: None,
                line_width: 1.0,
                alpha: 1.0,
            },
        }
    }

    /// Returns the recorded calls in order.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// Iterates the painted circles with their paint-time state.
    pub fn circles(&self) -> impl Iterator<Item = (&Circle, &ContextState)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Circle { circle, state } => Some((circle, state)),
            _ => None,
        })
    }

    /// Number of state-changing calls recorded.
    #[must_use]
    pub fn state_changes(&self) -> usize {
        self.calls.iter().filter(|c| c.is_state_change()).count()
    }

    /// Drops the recorded calls but keeps the current state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Takes the recorded calls, leaving the log empty.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        core::mem::take(&mut self.calls)
    }
}

impl DrawContext for RecordingContext {
    fn clear_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::ClearRect(rect));
    }

    fn set_fill_style(&mut self, color: Color) {
        let c = color.to_rgba8();
        self.state.fill = Some(c);
        self.calls.push(DrawCall::SetFillStyle(c));
    }

    fn set_stroke_style(&mut self, color: Color) {
        let c = color.to_rgba8();
        self.state.stroke = Some(c);
        self.calls.push(DrawCall::SetStrokeStyle(c));
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
        self.calls.push(DrawCall::SetLineWidth(width));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha;
        self.calls.push(DrawCall::SetGlobalAlpha(alpha));
    }

    fn fill_stroke_circle(&mut self, circle: Circle) {
        self.calls.push(DrawCall::Circle {
            circle,
            state: self.state,
        });
    }
}
