// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=screenplot_web_canvas --heading-base-level=0

//! Web Canvas (2D) drawing context for Screenplot.
//!
//! This crate provides a [`DrawContext`](screenplot_render::DrawContext) implementation backed by
//! `web_sys::CanvasRenderingContext2d` when targeting `wasm32`. On other
//! targets it compiles to nothing.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_renderer(
//!     canvas: web_sys::HtmlCanvasElement,
//! ) -> Result<
//!     screenplot_render::ScatterRenderer<screenplot_web_canvas::WebCanvasContext>,
//!     wasm_bindgen::JsValue,
//! > {
//!     let size = (f64::from(canvas.width()), f64::from(canvas.height()));
//!     let ctx = screenplot_web_canvas::WebCanvasContext::new_html_canvas(canvas)?;
//!     Ok(screenplot_render::ScatterRenderer::new(ctx, size, "pca"))
//! }
//! ```
//!
//! Each `DrawContext` call maps onto exactly one Canvas 2D state assignment or
//! path sequence, so the renderer's state batching carries straight through to
//! the browser.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
use alloc::string::{String, ToString};
#[cfg(target_arch = "wasm32")]
use core::fmt;
#[cfg(target_arch = "wasm32")]
use kurbo::{Circle, Rect};
#[cfg(target_arch = "wasm32")]
use peniko::Color;
#[cfg(target_arch = "wasm32")]
use screenplot_render::DrawContext;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[cfg(target_arch = "wasm32")]
fn color_to_css(color: Color) -> String {
    // `Rgba8` formats as a CSS `rgb(...)`/`rgba(...)` string.
    color.to_rgba8().to_string()
}

/// Canvas 2D drawing context (only available on `wasm32`).
#[cfg(target_arch = "wasm32")]
pub struct WebCanvasContext {
    ctx: CanvasRenderingContext2d,
    canvas: Option<HtmlCanvasElement>,
}

#[cfg(target_arch = "wasm32")]
impl fmt::Debug for WebCanvasContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebCanvasContext { .. }")
    }
}

#[cfg(target_arch = "wasm32")]
impl WebCanvasContext {
    /// Wraps an existing canvas 2D context.
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx, canvas: None }
    }

    /// Obtains the 2D context of a DOM canvas element.
    pub fn new_html_canvas(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            canvas: Some(canvas),
        })
    }

    /// The canvas element, when constructed from one.
    pub fn canvas(&self) -> Option<&HtmlCanvasElement> {
        self.canvas.as_ref()
    }

    /// The underlying 2D context.
    pub fn raw(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

#[cfg(target_arch = "wasm32")]
impl DrawContext for WebCanvasContext {
    fn clear_rect(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn set_fill_style(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color_to_css(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color_to_css(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn fill_stroke_circle(&mut self, circle: Circle) {
        self.ctx.begin_path();
        // `arc` only fails for a negative radius.
        let _ = self.ctx.arc(
            circle.center.x,
            circle.center.y,
            circle.radius.max(0.0),
            0.0,
            core::f64::consts::TAU,
        );
        self.ctx.fill();
        self.ctx.stroke();
    }
}
