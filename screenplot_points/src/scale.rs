// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis coordinate scales between projection (domain) space and pixels.

use alloc::boxed::Box;
use core::ops::Range;

/// A one-dimensional mapping between domain values and pixel values.
///
/// Hit testing needs both directions: the cursor is mapped into domain space
/// with [`Scale::inverse`] for the spatial lookup, and the candidate is mapped
/// back with [`Scale::forward`] so the radius check happens in pixels.
pub trait Scale {
    /// Maps a domain value to a pixel value.
    fn forward(&self, domain: f64) -> f64;

    /// Maps a pixel value back to a domain value.
    fn inverse(&self, pixel: f64) -> f64;
}

impl<S: Scale + ?Sized> Scale for &S {
    #[inline]
    fn forward(&self, domain: f64) -> f64 {
        (**self).forward(domain)
    }

    #[inline]
    fn inverse(&self, pixel: f64) -> f64 {
        (**self).inverse(pixel)
    }
}

impl<S: Scale + ?Sized> Scale for Box<S> {
    #[inline]
    fn forward(&self, domain: f64) -> f64 {
        (**self).forward(domain)
    }

    #[inline]
    fn inverse(&self, pixel: f64) -> f64 {
        (**self).inverse(pixel)
    }
}

/// Affine scale mapping a domain interval onto a pixel interval.
///
/// The range may be inverted (`start > end`), which is the usual way to flip
/// the y axis so larger domain values sit higher on screen. Values outside the
/// domain extrapolate linearly; nothing is clamped.
///
/// A zero-width domain cannot be inverted meaningfully: every domain value maps
/// to the middle of the range, and every pixel maps back to `domain.start`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain: Range<f64>,
    range: Range<f64>,
}

impl LinearScale {
    /// Creates a scale mapping `domain` onto `range`.
    #[must_use]
    pub fn new(domain: Range<f64>, range: Range<f64>) -> Self {
        Self { domain, range }
    }

    /// The identity mapping; pixel and domain coordinates coincide.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(0.0..1.0, 0.0..1.0)
    }

    /// Returns the domain interval.
    #[must_use]
    pub fn domain(&self) -> Range<f64> {
        self.domain.clone()
    }

    /// Returns the pixel interval.
    #[must_use]
    pub fn range(&self) -> Range<f64> {
        self.range.clone()
    }

    /// Replaces the domain interval, keeping the range.
    pub fn set_domain(&mut self, domain: Range<f64>) {
        self.domain = domain;
    }

    /// Replaces the pixel interval, keeping the domain.
    pub fn set_range(&mut self, range: Range<f64>) {
        self.range = range;
    }

    /// Pixels per domain unit, or `None` for a degenerate domain.
    #[must_use]
    pub fn pixels_per_unit(&self) -> Option<f64> {
        let d_len = self.domain.end - self.domain.start;
        if d_len == 0.0 || !d_len.is_finite() {
            return None;
        }
        Some((self.range.end - self.range.start) / d_len)
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::identity()
    }
}

impl Scale for LinearScale {
    fn forward(&self, domain: f64) -> f64 {
        match self.pixels_per_unit() {
            Some(k) => self.range.start + (domain - self.domain.start) * k,
            None => (self.range.start + self.range.end) * 0.5,
        }
    }

    fn inverse(&self, pixel: f64) -> f64 {
        let r_len = self.range.end - self.range.start;
        if r_len == 0.0 || self.pixels_per_unit().is_none() {
            return self.domain.start;
        }
        let d_len = self.domain.end - self.domain.start;
        self.domain.start + (pixel - self.range.start) * d_len / r_len
    }
}
