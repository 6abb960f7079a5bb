// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw buckets and their styles.

use peniko::Color;

/// A group of points sharing one style, drawn together.
///
/// The variant order is the paint order: later buckets are painted over
/// earlier ones, so highlighted points are never hidden by plain ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    /// Points excluded by the current filter.
    FilteredOut,
    /// Plain points.
    Default,
    /// Neighbours of the active point.
    Neighbours,
    /// The active point.
    Active,
}

impl Bucket {
    /// All buckets in paint order.
    pub const PAINT_ORDER: [Self; 4] = [
        Self::FilteredOut,
        Self::Default,
        Self::Neighbours,
        Self::Active,
    ];

    /// Whether points in this bucket may take their fill from a colour scale.
    #[must_use]
    pub const fn uses_color_scale(self) -> bool {
        matches!(self, Self::FilteredOut | Self::Default)
    }

    /// Stable lowercase name, as used in style tables.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FilteredOut => "filteredOut",
            Self::Default => "default",
            Self::Neighbours => "neighbours",
            Self::Active => "active",
        }
    }
}

/// Visual style of one bucket.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointStyle {
    /// Fill used when no colour scale applies.
    pub fill: Color,
    /// Outline colour.
    pub stroke: Color,
    /// Outline width in pixels.
    pub stroke_width: f64,
    /// Global alpha applied to fill and outline.
    pub alpha: f64,
    /// Circle radius in pixels.
    pub radius: f64,
}

/// The four bucket styles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StyleTable {
    /// Style for [`Bucket::FilteredOut`].
    pub filtered_out: PointStyle,
    /// Style for [`Bucket::Default`].
    pub default: PointStyle,
    /// Style for [`Bucket::Neighbours`].
    pub neighbours: PointStyle,
    /// Style for [`Bucket::Active`].
    pub active: PointStyle,
}

impl StyleTable {
    /// Returns the style for `bucket`.
    #[must_use]
    pub fn get(&self, bucket: Bucket) -> &PointStyle {
        match bucket {
            Bucket::FilteredOut => &self.filtered_out,
            Bucket::Default => &self.default,
            Bucket::Neighbours => &self.neighbours,
            Bucket::Active => &self.active,
        }
    }

    /// Returns the style for `bucket` for modification.
    pub fn get_mut(&mut self, bucket: Bucket) -> &mut PointStyle {
        match bucket {
            Bucket::FilteredOut => &mut self.filtered_out,
            Bucket::Default => &mut self.default,
            Bucket::Neighbours => &mut self.neighbours,
            Bucket::Active => &mut self.active,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            filtered_out: PointStyle {
                fill: Color::from_rgb8(0xcc, 0xcc, 0xcc),
                stroke: Color::from_rgb8(0xaa, 0xaa, 0xaa),
                stroke_width: 0.5,
                alpha: 0.3,
                radius: 3.0,
            },
            default: PointStyle {
                fill: Color::from_rgb8(0x1f, 0x77, 0xb4),
                stroke: Color::from_rgb8(0x33, 0x33, 0x33),
                stroke_width: 0.5,
                alpha: 0.8,
                radius: 4.0,
            },
            neighbours: PointStyle {
                fill: Color::from_rgb8(0xff, 0x7f, 0x0e),
                stroke: Color::BLACK,
                stroke_width: 1.0,
                alpha: 1.0,
                radius: 5.0,
            },
            active: PointStyle {
                fill: Color::from_rgb8(0xd6, 0x27, 0x28),
                stroke: Color::BLACK,
                stroke_width: 2.0,
                alpha: 1.0,
                radius: 7.0,
            },
        }
    }
}
