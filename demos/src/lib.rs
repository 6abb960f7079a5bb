// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the Screenplot demos: loading samples and a tiny
//! pointer controller that drives a `PointManager` the way page event
//! handlers would.

use kurbo::Point as Px;
use screenplot_points::{LinearScale, Point, PointError, PointManager, Scale, SpatialIndex, StatusFlags};

/// Parses a JSON array of samples.
pub fn load_samples(json: &str) -> Result<Vec<Point>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Builds x/y scales fitting `projection`'s extent into a `width` x `height`
/// surface with `margin` pixels on each side; y grows upwards.
pub fn fit_scales<I: SpatialIndex>(
    manager: &PointManager<I>,
    projection: &str,
    width: f64,
    height: f64,
    margin: f64,
) -> Result<(LinearScale, LinearScale), PointError> {
    let b = manager.bounds(projection)?;
    Ok((
        LinearScale::new(b.x0..b.x1, margin..width - margin),
        LinearScale::new(b.y0..b.y1, height - margin..margin),
    ))
}

/// Pointer controller: hover marks the nearest point active and everything
/// within `neighbour_radius` pixels of it as neighbours.
#[derive(Clone, Debug)]
pub struct PointerController {
    /// Hit radius in pixels.
    pub hit_radius: f64,
    /// Neighbourhood radius in pixels, measured from the active point.
    pub neighbour_radius: f64,
    /// Scales matching the ones bound to the manager.
    pub scales: (LinearScale, LinearScale),
}

impl PointerController {
    /// Handles a pointer move; returns the newly active index, if any.
    pub fn hover<I: SpatialIndex>(
        &self,
        manager: &mut PointManager<I>,
        cursor: Px,
    ) -> Result<Option<usize>, PointError> {
        let hit = manager.find_nearest(cursor, self.hit_radius)?;
        manager.set_status(hit, StatusFlags::ACTIVE)?;
        let neighbours: Vec<usize> = match hit {
            Some(active) => {
                let centre = self.to_pixels(manager, active);
                (0..manager.len())
                    .filter(|&i| i != active)
                    .filter(|&i| match (centre, self.to_pixels(manager, i)) {
                        (Some(a), Some(b)) => a.distance(b) < self.neighbour_radius,
                        _ => false,
                    })
                    .collect()
            }
            None => Vec::new(),
        };
        manager.set_status(neighbours, StatusFlags::NEIGHBOUR)?;
        Ok(hit)
    }

    /// Marks every sample whose `overlay` value is below `threshold` (or
    /// missing) as filtered out.
    pub fn filter_below<I: SpatialIndex>(
        &self,
        manager: &mut PointManager<I>,
        overlay: &str,
        threshold: f64,
    ) -> Result<(), PointError> {
        let hidden: Vec<usize> = (0..manager.len())
            .filter(|&i| manager.overlay(i, overlay).is_none_or(|v| v < threshold))
            .collect();
        manager.set_status(hidden, StatusFlags::FILTERED_OUT)
    }

    fn to_pixels<I: SpatialIndex>(&self, manager: &PointManager<I>, index: usize) -> Option<Px> {
        let at = manager.position(index)?;
        Some(Px::new(self.scales.0.forward(at.x), self.scales.1.forward(at.y)))
    }
}
