// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Input record for one sample.
///
/// A `Point` only describes identity and data. Its index is its position in
/// the collection handed to [`PointManager`](crate::PointManager), and its
/// status lives inside the manager.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Unique external identifier.
    pub id: String,
    /// Coordinates per projection name (for example `"pca"` or `"tsne"`).
    pub projections: BTreeMap<String, kurbo::Point>,
    /// Scalar values per overlay name, used for colour mapping.
    #[cfg_attr(feature = "serde", serde(default))]
    pub overlays: BTreeMap<String, f64>,
}

impl Point {
    /// Creates a point with no projections or overlays.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            projections: BTreeMap::new(),
            overlays: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the coordinates for projection `name`.
    #[must_use]
    pub fn with_projection(mut self, name: impl Into<String>, at: impl Into<kurbo::Point>) -> Self {
        self.projections.insert(name.into(), at.into());
        self
    }

    /// Adds (or replaces) the value for overlay `name`.
    #[must_use]
    pub fn with_overlay(mut self, name: impl Into<String>, value: f64) -> Self {
        self.overlays.insert(name.into(), value);
        self
    }
}
