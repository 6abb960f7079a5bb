// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Errors reported by [`ScatterRenderer::redraw`](crate::ScatterRenderer::redraw).
///
/// All checks run before the surface is cleared, so a failed redraw leaves the
/// previous frame on screen and the context untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// No coordinate scale was bound to the renderer.
    ScaleNotBound,
    /// The renderer's projection differs from the manager's selected projection.
    ProjectionMismatch {
        /// Projection configured on the renderer.
        renderer: String,
        /// Projection selected on the manager.
        manager: String,
    },
    /// An index in the requested subset was outside `0..len`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Collection size.
        len: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScaleNotBound => f.write_str("no coordinate scale bound to the renderer"),
            Self::ProjectionMismatch { renderer, manager } => write!(
                f,
                "renderer projection {renderer:?} does not match selected projection {manager:?}"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "point index {index} out of range for {len} points")
            }
        }
    }
}

impl core::error::Error for RenderError {}
