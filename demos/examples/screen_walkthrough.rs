// Copyright 2025 the Screenplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loads the bundled screen, replays a hover, a filter and a projection switch,
//! and prints the draw calls each redraw would send to a canvas.
//!
//! Run with `RUST_LOG=debug` to see the manager and renderer events.

use kurbo::Point as Px;
use peniko::Color;
use screenplot_demos::{PointerController, fit_scales, load_samples};
use screenplot_points::{PointManager, RTreeIndex, Scale};
use screenplot_render::{DrawCall, LinearColorScale, RecordingContext, ScatterRenderer};
use tracing_subscriber::EnvFilter;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;

fn dump(title: &str, renderer: &mut ScatterRenderer<RecordingContext>) {
    println!("== {title}");
    for call in renderer.context_mut().take_calls() {
        match call {
            DrawCall::Circle { circle, state } => println!(
                "  circle ({:7.2}, {:7.2}) r={} fill={:?}",
                circle.center.x,
                circle.center.y,
                circle.radius,
                state.fill.map(|c| c.to_string())
            ),
            other => println!("  {other:?}"),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let samples = load_samples(include_str!("../data/screen.json"))?;
    let mut points = PointManager::<RTreeIndex>::build(samples, Some("pca"))?;
    let (xs, ys) = fit_scales(&points, "pca", WIDTH, HEIGHT, 24.0)?;
    points.bind_scale(xs.clone(), ys.clone());

    let mut renderer = ScatterRenderer::new(RecordingContext::new(), (WIDTH, HEIGHT), "pca");
    renderer.bind_scale(xs.clone(), ys.clone());
    renderer.set_overlay(Some("viability".into()));
    renderer.set_color_scale(Some(Box::new(LinearColorScale::new(
        0.0..1.0,
        Color::from_rgb8(0x44, 0x01, 0x54),
        Color::from_rgb8(0xfd, 0xe7, 0x25),
    ))));

    let mut controller = PointerController {
        hit_radius: 10.0,
        neighbour_radius: 60.0,
        scales: (xs.clone(), ys.clone()),
    };

    let stats = renderer.redraw(&points, None)?;
    println!("initial frame: {stats:?}");
    dump("initial", &mut renderer);

    let cursor = Px::new(xs.forward(-2.0), ys.forward(0.5));
    let hit = controller.hover(&mut points, cursor)?;
    println!(
        "hover at {cursor:?} -> {:?}",
        hit.and_then(|i| points.id(i))
    );
    renderer.redraw(&points, None)?;
    dump("after hover", &mut renderer);

    controller.filter_below(&mut points, "viability", 0.5)?;
    renderer.redraw(&points, None)?;
    dump("after filtering viability < 0.5", &mut renderer);

    points.select_projection("tsne")?;
    let (xs, ys) = fit_scales(&points, "tsne", WIDTH, HEIGHT, 24.0)?;
    points.bind_scale(xs.clone(), ys.clone());
    renderer.set_projection("tsne");
    renderer.bind_scale(xs.clone(), ys.clone());
    controller.scales = (xs, ys);
    let subset = points.indices_for_ids(["P1-A01", "P1-A02", "P1-B03"]);
    let subset: Vec<usize> = subset.into_iter().flatten().collect();
    renderer.redraw(&points, Some(&subset))?;
    dump("t-SNE subset", &mut renderer);

    Ok(())
}
