// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Errors reported by [`PointManager`](crate::PointManager).
///
/// Every fallible operation validates its input before mutating anything, so
/// an `Err` always leaves the manager exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointError {
    /// The input collection was empty.
    Empty,
    /// Two input points share the same id.
    DuplicateId {
        /// The repeated id.
        id: String,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the repeated occurrence.
        second: usize,
    },
    /// A point's projection names differ from those of the first point.
    InconsistentProjections {
        /// Id of the offending point.
        id: String,
    },
    /// The named projection is not one of the collection's projections.
    UnknownProjection {
        /// The requested name.
        name: String,
    },
    /// An index was outside `0..len`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Collection size.
        len: usize,
    },
    /// A hit test was attempted before [`PointManager::bind_scale`](crate::PointManager::bind_scale).
    ScaleNotBound,
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("point collection is empty"),
            Self::DuplicateId { id, first, second } => {
                write!(f, "duplicate point id {id:?} at positions {first} and {second}")
            }
            Self::InconsistentProjections { id } => {
                write!(f, "point {id:?} does not carry the collection's projection set")
            }
            Self::UnknownProjection { name } => write!(f, "unknown projection {name:?}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "point index {index} out of range for {len} points")
            }
            Self::ScaleNotBound => f.write_str("no coordinate scale bound"),
        }
    }
}

impl core::error::Error for PointError {}
