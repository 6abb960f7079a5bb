// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `ScatterRenderer` against a recording context.
//!
//! The recorded call log stands in for a canvas: it shows which points were
//! painted, in what order, and with which context state.

use kurbo::{Circle, Point as Px};
use peniko::Color;
use screenplot_points::{LinearScale, Point, PointManager, StatusFlags};
use screenplot_render::{
    Bucket, DrawCall, LinearColorScale, RecordingContext, RenderError, ScatterRenderer, StyleTable,
};

/// A 4x4 grid of samples, `s{i}` at `(10 * (i % 4), 10 * (i / 4))` in PCA.
fn grid() -> PointManager {
    PointManager::new((0..16_u32).map(|i| {
        let x = f64::from(i % 4) * 10.0;
        let y = f64::from(i / 4) * 10.0;
        Point::new(format!("s{i}"))
            .with_projection("pca", (x, y))
            .with_projection("tsne", (y, -x))
            .with_overlay("dose", f64::from(i))
    }))
    .unwrap()
}

fn renderer() -> ScatterRenderer<RecordingContext> {
    let mut r = ScatterRenderer::new(RecordingContext::new(), (200.0, 100.0), "pca");
    r.bind_scale(LinearScale::identity(), LinearScale::identity());
    r
}

fn centers(r: &ScatterRenderer<RecordingContext>) -> Vec<Px> {
    r.context().circles().map(|(c, _)| c.center).collect()
}

fn index_of(m: &PointManager, center: Px) -> usize {
    (0..m.len()).find(|&i| m.position(i) == Some(center)).unwrap()
}

#[test]
fn full_redraw_paints_every_point_once() {
    let m = grid();
    let mut r = renderer();
    let stats = r.redraw(&m, None).unwrap();

    assert_eq!(stats.total(), 16);
    let mut seen: Vec<usize> = centers(&r).into_iter().map(|c| index_of(&m, c)).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..16).collect::<Vec<_>>());
    assert_eq!(
        r.context().calls()[0],
        DrawCall::ClearRect(kurbo::Rect::new(0.0, 0.0, 200.0, 100.0))
    );
}

#[test]
fn subset_redraw_paints_only_the_subset() {
    let m = grid();
    let mut r = renderer();
    let stats = r.redraw(&m, Some(&[5, 2, 9])).unwrap();

    assert_eq!(stats.total(), 3);
    let seen: Vec<usize> = centers(&r).into_iter().map(|c| index_of(&m, c)).collect();
    assert_eq!(seen, [5, 2, 9]);
}

#[test]
fn active_point_is_painted_after_every_default_point() {
    let mut m = grid();
    m.set_status([0], StatusFlags::ACTIVE).unwrap();
    let mut r = renderer();
    r.redraw(&m, None).unwrap();

    let order: Vec<usize> = centers(&r).into_iter().map(|c| index_of(&m, c)).collect();
    assert_eq!(order.len(), 16);
    assert_eq!(order.last(), Some(&0));
    assert!(!order[..15].contains(&0));
}

#[test]
fn buckets_are_painted_in_fixed_order() {
    let mut m = grid();
    m.set_status([1, 2], StatusFlags::FILTERED_OUT).unwrap();
    m.set_status([3, 2], StatusFlags::NEIGHBOUR).unwrap();
    m.set_status([4], StatusFlags::ACTIVE).unwrap();
    let mut r = renderer();

    let buckets = r.partition(&m, None);
    assert_eq!(buckets.filtered_out, [1]);
    assert_eq!(buckets.neighbours, [2, 3]);
    assert_eq!(buckets.active, [4]);
    assert_eq!(buckets.default.len(), 12);
    assert_eq!(buckets.len(), 16);

    let stats = r.redraw(&m, None).unwrap();
    assert_eq!(stats.painted, [1, 12, 2, 1]);

    let styles = StyleTable::default();
    let radii: Vec<f64> = r.context().circles().map(|(c, _)| c.radius).collect();
    let mut expected = Vec::new();
    for bucket in Bucket::PAINT_ORDER {
        expected.extend(std::iter::repeat_n(
            styles.get(bucket).radius,
            buckets.get(bucket).len(),
        ));
    }
    assert_eq!(radii, expected);
}

#[test]
fn bucket_state_is_set_once_per_bucket() {
    let mut m = grid();
    m.set_status([7], StatusFlags::ACTIVE).unwrap();
    let mut r = renderer();
    r.redraw(&m, None).unwrap();

    let ctx = r.context();
    let strokes = ctx
        .calls()
        .iter()
        .filter(|c| matches!(c, DrawCall::SetStrokeStyle(_)))
        .count();
    let widths = ctx
        .calls()
        .iter()
        .filter(|c| matches!(c, DrawCall::SetLineWidth(_)))
        .count();
    // Two non-empty buckets: default and active.
    assert_eq!(strokes, 2);
    assert_eq!(widths, 2);
    // Without a colour scale each bucket's fill is issued once.
    assert_eq!(ctx.state_changes(), 2 * 4);

    let styles = StyleTable::default();
    for (circle, state) in ctx.circles() {
        let style = if circle.radius == styles.active.radius {
            &styles.active
        } else {
            &styles.default
        };
        assert_eq!(state.alpha, style.alpha);
        assert_eq!(state.line_width, style.stroke_width);
        assert_eq!(state.stroke, Some(style.stroke.to_rgba8()));
        assert_eq!(state.fill, Some(style.fill.to_rgba8()));
    }
}

#[test]
fn color_scale_applies_only_to_plain_buckets() {
    let mut m = grid();
    m.set_status([3], StatusFlags::FILTERED_OUT).unwrap();
    m.set_status([5], StatusFlags::NEIGHBOUR).unwrap();
    m.set_status([15], StatusFlags::ACTIVE).unwrap();

    let scale = LinearColorScale::new(0.0..15.0, Color::BLACK, Color::WHITE);
    let mut r = renderer();
    r.set_overlay(Some("dose".into()));
    r.set_color_scale(Some(Box::new(scale.clone())));
    r.redraw(&m, None).unwrap();

    let styles = StyleTable::default();
    for (circle, state) in r.context().circles() {
        let i = index_of(&m, circle.center);
        let expected = match i {
            5 => styles.neighbours.fill,
            15 => styles.active.fill,
            _ => screenplot_render::ColorScale::color(&scale, i as f64),
        };
        assert_eq!(state.fill, Some(expected.to_rgba8()), "wrong fill for point {i}");
    }
}

#[test]
fn missing_overlay_values_count_as_zero() {
    let m = PointManager::new([
        Point::new("a").with_projection("pca", (1.0, 1.0)),
        Point::new("b")
            .with_projection("pca", (2.0, 2.0))
            .with_overlay("dose", 1.0),
    ])
    .unwrap();
    let mut r = renderer();
    r.set_overlay(Some("dose".into()));
    r.set_color_scale(Some(Box::new(|v: f64| {
        if v == 0.0 { Color::BLACK } else { Color::WHITE }
    })));
    r.redraw(&m, None).unwrap();

    let fills: Vec<_> = r.context().circles().map(|(_, s)| s.fill).collect();
    assert_eq!(
        fills,
        [Some(Color::BLACK.to_rgba8()), Some(Color::WHITE.to_rgba8())]
    );

    // With no overlay selected every value is zero.
    r.set_overlay(None);
    r.context_mut().clear_calls();
    r.redraw(&m, None).unwrap();
    let fills: Vec<_> = r.context().circles().map(|(_, s)| s.fill).collect();
    assert_eq!(fills, [Some(Color::BLACK.to_rgba8()); 2]);
}

#[test]
fn repeated_redraws_emit_identical_calls() {
    let mut m = grid();
    m.set_status([6, 9], StatusFlags::NEIGHBOUR).unwrap();
    m.set_status([10], StatusFlags::ACTIVE).unwrap();
    let mut r = renderer();
    r.set_overlay(Some("dose".into()));
    r.set_color_scale(Some(Box::new(LinearColorScale::new(
        0.0..4.0,
        Color::BLACK,
        Color::WHITE,
    ))));

    r.redraw(&m, Some(&[10, 9, 8, 6, 3])).unwrap();
    let first = r.context_mut().take_calls();
    r.redraw(&m, Some(&[10, 9, 8, 6, 3])).unwrap();
    assert_eq!(first, r.context().calls());
}

#[test]
fn points_are_placed_through_the_bound_scale() {
    let m = grid();
    let mut r = renderer();
    r.bind_scale(
        LinearScale::new(0.0..30.0, 0.0..300.0),
        LinearScale::new(0.0..30.0, 300.0..0.0),
    );
    r.redraw(&m, Some(&[6])).unwrap();
    let (circle, _) = r.context().circles().next().unwrap();
    let style = StyleTable::default();
    assert_eq!(*circle, Circle::new((200.0, 200.0), style.default.radius));
}

#[test]
fn setters_do_not_repaint() {
    let m = grid();
    let mut r = renderer();
    r.set_projection("tsne");
    r.set_overlay(Some("dose".into()));
    r.set_color_scale(None);
    r.resize((10.0, 10.0));
    r.bind_scale(LinearScale::identity(), LinearScale::identity());
    assert!(r.context().calls().is_empty());
    assert_eq!(r.projection(), "tsne");
    assert_eq!(r.overlay(), Some("dose"));
    assert_eq!(m.revision(), 0);
}

#[test]
fn redraw_follows_projection_switches() {
    let mut m = grid();
    let mut r = renderer();

    m.select_projection("tsne").unwrap();
    assert_eq!(
        r.redraw(&m, None).unwrap_err(),
        RenderError::ProjectionMismatch {
            renderer: "pca".into(),
            manager: "tsne".into()
        }
    );
    assert!(r.context().calls().is_empty());

    r.set_projection("tsne");
    r.redraw(&m, Some(&[1])).unwrap();
    let (circle, _) = r.context().circles().next().unwrap();
    assert_eq!(circle.center, Px::new(0.0, -10.0));
}

#[test]
fn invalid_redraws_leave_the_context_untouched() {
    let m = grid();
    let mut r = ScatterRenderer::new(RecordingContext::new(), (10.0, 10.0), "pca");
    assert_eq!(r.redraw(&m, None).unwrap_err(), RenderError::ScaleNotBound);

    r.bind_scale(LinearScale::identity(), LinearScale::identity());
    assert_eq!(
        r.redraw(&m, Some(&[0, 16])).unwrap_err(),
        RenderError::IndexOutOfRange { index: 16, len: 16 }
    );
    assert!(r.context().calls().is_empty());
}

#[test]
fn every_active_point_is_painted() {
    let mut m = grid();
    m.set_status([2, 11], StatusFlags::ACTIVE).unwrap();
    let mut r = renderer();
    let stats = r.redraw(&m, None).unwrap();
    assert_eq!(stats.painted[3], 2);

    let order: Vec<usize> = centers(&r).into_iter().map(|c| index_of(&m, c)).collect();
    assert_eq!(&order[14..], [2, 11]);
}
