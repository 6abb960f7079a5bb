// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The point manager: canonical point order, status, id lookup and hit testing.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::backends::FlatScan;
use crate::error::PointError;
use crate::point::Point;
use crate::scale::Scale;
use crate::spatial::SpatialIndex;
use crate::status::{self, StatusFlags};

/// Owner of a fixed, ordered point collection and all per-point UI state.
///
/// Points are addressed by their index, which is their position in the input
/// collection and never changes. Nothing borrowed from a point escapes except
/// copies of its data.
///
/// The spatial index is always built over the selected projection's
/// coordinates; [`select_projection`](Self::select_projection) rebuilds it
/// before returning.
pub struct PointManager<I: SpatialIndex = FlatScan> {
    ids: Vec<String>,
    overlays: Vec<BTreeMap<String, f64>>,
    overlay_names: Vec<String>,
    /// Sorted projection names; `coords[p]` holds projection `p` for every point.
    projection_names: Vec<String>,
    coords: Vec<Vec<kurbo::Point>>,
    selected: usize,
    index: I,
    statuses: Vec<StatusFlags>,
    /// For each single status bit, the indices currently carrying it.
    holders: HashMap<u32, SmallVec<[usize; 4]>>,
    id_table: HashMap<String, usize>,
    scales: Option<(Box<dyn Scale>, Box<dyn Scale>)>,
    revision: u64,
}

impl<I: SpatialIndex> fmt::Debug for PointManager<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointManager")
            .field("len", &self.ids.len())
            .field("projection", &self.current_projection())
            .field("index", &self.index)
            .field("scale_bound", &self.scales.is_some())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl PointManager<FlatScan> {
    /// Builds a manager with the linear-scan backend and the first projection
    /// name (in sorted order) selected.
    ///
    /// See [`PointManager::build`] for the validation rules.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Result<Self, PointError> {
        Self::build(points, None)
    }

    /// Builds a manager with the linear-scan backend and `projection` selected.
    pub fn with_projection(
        points: impl IntoIterator<Item = Point>,
        projection: &str,
    ) -> Result<Self, PointError> {
        Self::build(points, Some(projection))
    }
}

impl<I: SpatialIndex> PointManager<I> {
    /// Builds a manager over `points` using backend `I`.
    ///
    /// Each point's index is its position in `points` and every status starts
    /// empty. Fails if the collection is empty, if two points share an id, or
    /// if any point's projection names differ from the first point's. When
    /// `projection` is `None` the first name in sorted order is selected.
    pub fn build(
        points: impl IntoIterator<Item = Point>,
        projection: Option<&str>,
    ) -> Result<Self, PointError> {
        let points: Vec<Point> = points.into_iter().collect();
        let Some(first) = points.first() else {
            return Err(PointError::Empty);
        };
        let projection_names: Vec<String> = first.projections.keys().cloned().collect();
        if projection_names.is_empty() {
            return Err(PointError::InconsistentProjections {
                id: first.id.clone(),
            });
        }

        let selected = match projection {
            Some(name) => position_of(&projection_names, name)?,
            None => 0,
        };

        let mut id_table = HashMap::with_capacity(points.len());
        let mut coords: Vec<Vec<kurbo::Point>> = projection_names
            .iter()
            .map(|_| Vec::with_capacity(points.len()))
            .collect();
        let mut overlay_names = BTreeSet::new();
        let mut ids = Vec::with_capacity(points.len());
        let mut overlays = Vec::with_capacity(points.len());

        for (i, point) in points.into_iter().enumerate() {
            if point.projections.len() != projection_names.len()
                || !point.projections.keys().eq(projection_names.iter())
            {
                return Err(PointError::InconsistentProjections { id: point.id });
            }
            if let Some(&first) = id_table.get(&point.id) {
                return Err(PointError::DuplicateId {
                    id: point.id,
                    first,
                    second: i,
                });
            }
            for (column, at) in coords.iter_mut().zip(point.projections.values()) {
                column.push(*at);
            }
            overlay_names.extend(point.overlays.keys().cloned());
            id_table.insert(point.id.clone(), i);
            ids.push(point.id);
            overlays.push(point.overlays);
        }

        let index = I::build(&coords[selected]);
        tracing::debug!(
            points = ids.len(),
            projection = %projection_names[selected],
            "built point manager"
        );

        Ok(Self {
            statuses: alloc::vec![StatusFlags::empty(); ids.len()],
            ids,
            overlays,
            overlay_names: overlay_names.into_iter().collect(),
            projection_names,
            coords,
            selected,
            index,
            holders: HashMap::new(),
            id_table,
            scales: None,
            revision: 0,
        })
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always `false`: construction rejects empty collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Monotonic counter bumped by every status change and projection switch.
    ///
    /// Renderers can compare it against the value seen at their last redraw to
    /// decide whether a repaint is needed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Sorted projection names shared by every point.
    #[must_use]
    pub fn projection_names(&self) -> &[String] {
        &self.projection_names
    }

    /// Sorted union of overlay names present on any point.
    #[must_use]
    pub fn overlay_names(&self) -> &[String] {
        &self.overlay_names
    }

    /// Name of the selected projection.
    #[must_use]
    pub fn current_projection(&self) -> &str {
        &self.projection_names[self.selected]
    }

    /// Selects projection `name` and rebuilds the spatial index over it.
    ///
    /// On error nothing changes. Hit-test results obtained before this call
    /// refer to the old layout and must not be reused.
    pub fn select_projection(&mut self, name: &str) -> Result<(), PointError> {
        let selected = position_of(&self.projection_names, name)?;
        self.index = I::build(&self.coords[selected]);
        self.selected = selected;
        self.revision += 1;
        tracing::debug!(projection = name, "selected projection, spatial index rebuilt");
        Ok(())
    }

    /// Binds the per-axis transforms between pixel space and domain space.
    pub fn bind_scale(&mut self, x: impl Scale + 'static, y: impl Scale + 'static) {
        self.scales = Some((Box::new(x), Box::new(y)));
    }

    /// Returns the point nearest to `cursor` (in pixels) if it lies strictly
    /// within `radius` pixels of it.
    ///
    /// The lookup itself runs in domain space; the winner is then mapped back
    /// to pixels and the distance checked there, since nearest-in-domain and
    /// nearest-in-pixels disagree under non-uniform scales.
    pub fn find_nearest(
        &self,
        cursor: kurbo::Point,
        radius: f64,
    ) -> Result<Option<usize>, PointError> {
        let (xs, ys) = self.scales.as_ref().ok_or(PointError::ScaleNotBound)?;
        let query = kurbo::Point::new(xs.inverse(cursor.x), ys.inverse(cursor.y));
        let Some(hit) = self.index.nearest(query) else {
            return Ok(None);
        };
        let at = self.coords[self.selected][hit];
        let pixel = kurbo::Point::new(xs.forward(at.x), ys.forward(at.y));
        let distance = pixel.distance(cursor);
        tracing::trace!(candidate = hit, distance, radius, "hit test");
        Ok((distance < radius).then_some(hit))
    }

    /// Index of the point with id `id`, if any.
    #[must_use]
    pub fn index_for_id(&self, id: &str) -> Option<usize> {
        self.id_table.get(id).copied()
    }

    /// Looks up several ids at once, preserving input order.
    pub fn indices_for_ids<S: AsRef<str>>(
        &self,
        ids: impl IntoIterator<Item = S>,
    ) -> Vec<Option<usize>> {
        ids.into_iter()
            .map(|id| self.index_for_id(id.as_ref()))
            .collect()
    }

    /// Id of the point at `index`.
    #[must_use]
    pub fn id(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    /// Status of the point at `index`.
    #[must_use]
    pub fn status(&self, index: usize) -> Option<StatusFlags> {
        self.statuses.get(index).copied()
    }

    /// Coordinates of the point at `index` in the selected projection.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<kurbo::Point> {
        self.coords[self.selected].get(index).copied()
    }

    /// Coordinates of the point at `index` in projection `projection`.
    #[must_use]
    pub fn coordinates(&self, index: usize, projection: &str) -> Option<kurbo::Point> {
        let p = position_of(&self.projection_names, projection).ok()?;
        self.coords[p].get(index).copied()
    }

    /// Value of overlay `name` for the point at `index`.
    #[must_use]
    pub fn overlay(&self, index: usize, name: &str) -> Option<f64> {
        self.overlays.get(index)?.get(name).copied()
    }

    /// Domain-space bounding box of every point in `projection`.
    ///
    /// Useful for configuring a [`LinearScale`](crate::LinearScale) domain.
    /// Non-finite coordinates are skipped; if none are finite the result is a
    /// zero rect at the origin.
    pub fn bounds(&self, projection: &str) -> Result<Rect, PointError> {
        let p = position_of(&self.projection_names, projection)?;
        let mut finite = self.coords[p].iter().filter(|at| at.is_finite());
        let Some(&first) = finite.next() else {
            return Ok(Rect::ZERO);
        };
        Ok(finite.fold(Rect::from_points(first, first), |r, &at| r.union_pt(at)))
    }

    /// Indices currently carrying every bit of `flag`, in ascending order.
    #[must_use]
    pub fn indices_with(&self, flag: StatusFlags) -> Vec<usize> {
        self.statuses
            .iter()
            .enumerate()
            .filter(|(_, s)| status::test(**s, flag))
            .map(|(i, _)| i)
            .collect()
    }

    /// Clears `flag` from every point, then sets it on exactly `indices`.
    ///
    /// Afterwards the named points carry `flag` and no other point carries any
    /// of its bits. Every index is validated before anything changes. The clear
    /// phase only visits the previous holders of each bit, so the cost does not
    /// grow with the collection.
    pub fn set_status(
        &mut self,
        indices: impl IntoIterator<Item = usize>,
        flag: StatusFlags,
    ) -> Result<(), PointError> {
        let targets: SmallVec<[usize; 8]> = indices.into_iter().collect();
        let len = self.len();
        if let Some(&index) = targets.iter().find(|&&i| i >= len) {
            return Err(PointError::IndexOutOfRange { index, len });
        }
        self.clear_bits(flag);
        for &index in &targets {
            self.raise(index, flag);
        }
        self.revision += 1;
        Ok(())
    }

    /// Clears `flag` from every point.
    pub fn clear_status(&mut self, flag: StatusFlags) {
        self.clear_bits(flag);
        self.revision += 1;
    }

    fn clear_bits(&mut self, flag: StatusFlags) {
        for bit in flag.single_bits() {
            if let Some(previous) = self.holders.remove(&bit.bits()) {
                for index in previous {
                    self.statuses[index] = status::clear(self.statuses[index], bit);
                }
            }
        }
    }

    fn raise(&mut self, index: usize, flag: StatusFlags) {
        let before = self.statuses[index];
        self.statuses[index] = status::set(before, flag);
        for bit in flag.single_bits() {
            if !before.has(bit) {
                self.holders.entry(bit.bits()).or_default().push(index);
            }
        }
    }
}

fn position_of(names: &[String], name: &str) -> Result<usize, PointError> {
    names
        .binary_search_by(|n| n.as_str().cmp(name))
        .map_err(|_| PointError::UnknownProjection { name: name.into() })
}
