// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Campus map walkthrough.
//!
//! Replays a short pointer and button trace against the built-in campus plan,
//! prints the view models after each step, and writes the final view as SVG.
//!
//! Run:
//! - `cargo run -p campus_demos --example campus_walkthrough -- [out.svg]`
//! - `RUST_LOG=debug cargo run -p campus_demos --example campus_walkthrough`

use std::path::PathBuf;

use campus_map::svg::render_svg;
use campus_map::{MapEvent, MapState, Scene, campus, update};
use kurbo::Point;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    campus_demos::init_logging();

    let scene = campus::default_scene()?;
    info!(shapes = scene.shapes().len(), "campus plan loaded");

    let trace = [
        MapEvent::SetQuery("building".into()),
        MapEvent::SetQuery(String::new()),
        MapEvent::PointerDown(Point::new(400.0, 300.0)),
        MapEvent::PointerMove(Point::new(360.0, 280.0)),
        MapEvent::PointerMove(Point::new(320.0, 260.0)),
        MapEvent::PointerUp,
        MapEvent::ZoomIn,
        MapEvent::ZoomIn,
        // Tree on the vacant lot: decorative, selects nothing.
        MapEvent::PointerClick(project(Point::new(490.0, 210.0), -80.0, -40.0, 1.4)),
        // Middle of the vacant lot.
        MapEvent::PointerClick(project(Point::new(560.0, 330.0), -80.0, -40.0, 1.4)),
        MapEvent::RequestDirections,
        MapEvent::ShapeClicked("technology".into()),
        MapEvent::Dismiss,
        MapEvent::ShapeClicked("swimming-pool".into()),
    ];

    let mut state = scene.initial_state();
    for event in trace {
        println!("> {event:?}");
        state = update(&scene, state, event);
        report(&scene, &state);
    }

    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| std::env::temp_dir().join("campus_map.svg"), PathBuf::from);
    std::fs::write(&path, render_svg(&scene, &state))?;
    println!("wrote {}", path.display());
    Ok(())
}

/// Maps a scene point to the pointer position for a given pan and scale.
fn project(pt: Point, pan_x: f64, pan_y: f64, scale: f64) -> Point {
    Point::new(pt.x * scale + pan_x, pt.y * scale + pan_y)
}

fn report(scene: &Scene, state: &MapState) {
    let controls = state.zoom_controls(scene);
    let shown = state.render_list(scene).len();
    println!(
        "  {} | pan {:?} | {} of {} shapes | in:{} out:{}",
        controls.readout(),
        state.viewport.pan(),
        shown,
        scene.shapes().len(),
        controls.zoom_in_enabled,
        controls.zoom_out_enabled,
    );
    if !state.query.is_empty() {
        println!("  matches: {:?}", scene.query().matching_names(&state.query));
    }
    if let Some(panel) = state.detail_panel(scene) {
        println!(
            "  selected {} ({}): {} [{}]",
            panel.title, panel.id, panel.caption, panel.directions_label
        );
    }
}
