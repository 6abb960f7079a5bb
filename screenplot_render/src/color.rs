// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colour scales mapping overlay values to fills.

use core::ops::Range;

use peniko::Color;

/// Maps an overlay value to a fill colour.
///
/// Implemented for any `Fn(f64) -> Color`.
pub trait ColorScale {
    /// Returns the fill for `value`.
    fn color(&self, value: f64) -> Color;
}

impl<F: Fn(f64) -> Color> ColorScale for F {
    #[inline]
    fn color(&self, value: f64) -> Color {
        self(value)
    }
}

/// Sequential scale interpolating between two colours over a domain.
///
/// Values outside the domain clamp to the end colours; non-finite values and
/// degenerate domains map to the start colour. Interpolation is componentwise
/// in sRGB, alpha included.
#[derive(Clone, Debug)]
pub struct LinearColorScale {
    domain: Range<f64>,
    start: Color,
    end: Color,
}

impl LinearColorScale {
    /// Creates a scale from `start` at `domain.start` to `end` at `domain.end`.
    #[must_use]
    pub fn new(domain: Range<f64>, start: Color, end: Color) -> Self {
        Self { domain, start, end }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "interpolation parameter is clamped to [0, 1]"
    )]
    fn t(&self, value: f64) -> f32 {
        let len = self.domain.end - self.domain.start;
        let t = (value - self.domain.start) / len;
        if !t.is_finite() {
            return 0.0;
        }
        t.clamp(0.0, 1.0) as f32
    }
}

impl ColorScale for LinearColorScale {
    fn color(&self, value: f64) -> Color {
        let t = self.t(value);
        let a = self.start.components;
        let b = self.end.components;
        Color::new([
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
            a[3] + (b[3] - a[3]) * t,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_midpoint_and_clamping() {
        let s = LinearColorScale::new(0.0..10.0, Color::BLACK, Color::WHITE);
        assert_eq!(s.color(0.0).to_rgba8(), Color::BLACK.to_rgba8());
        assert_eq!(s.color(10.0).to_rgba8(), Color::WHITE.to_rgba8());
        assert_eq!(s.color(-4.0).to_rgba8(), Color::BLACK.to_rgba8());
        assert_eq!(s.color(99.0).to_rgba8(), Color::WHITE.to_rgba8());
        let mid = s.color(5.0).to_rgba8();
        assert!((127..=128).contains(&mid.r), "unexpected midpoint {mid:?}");
        assert_eq!(mid.r, mid.g);
    }

    #[test]
    fn degenerate_inputs_fall_back_to_start() {
        let s = LinearColorScale::new(2.0..2.0, Color::BLACK, Color::WHITE);
        assert_eq!(s.color(2.0).to_rgba8(), Color::BLACK.to_rgba8());
        let s = LinearColorScale::new(0.0..1.0, Color::BLACK, Color::WHITE);
        assert_eq!(s.color(f64::NAN).to_rgba8(), Color::BLACK.to_rgba8());
    }

    #[test]
    fn closures_are_color_scales() {
        let s = |v: f64| if v > 0.5 { Color::WHITE } else { Color::BLACK };
        assert_eq!(ColorScale::color(&s, 0.9).to_rgba8(), Color::WHITE.to_rgba8());
    }
}
