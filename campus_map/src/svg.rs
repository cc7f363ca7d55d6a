// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export of the map as the widget currently shows it.
//!
//! The document has one root `<g>` carrying the viewport transform; every
//! shape lives below it in scene coordinates, in draw order. Rectangles are
//! wrapped in a group tagged with `data-shape-id` so a host can map DOM
//! clicks back to [`MapEvent::ShapeClicked`](crate::MapEvent::ShapeClicked).

use core::fmt::Write as _;

use campus_scene::{Geometry, Shape};
use kurbo::{Affine, Point};
use peniko::Color;

use crate::widget::{MapState, Scene};

const ROAD_COLOR: &str = "#9E9E9E";

/// Roads drawn under the shapes: `(from, to, width)`.
const ROADS: [((f64, f64), (f64, f64), f64); 3] = [
    ((150.0, 300.0), (850.0, 200.0), 80.0),
    ((200.0, 600.0), (750.0, 500.0), 80.0),
    ((400.0, 100.0), (350.0, 850.0), 60.0),
];

/// Labels drawn in the accent color instead of the default label color.
const ACCENT_LABELS: [&str; 2] = ["VACANT LOT", "LONG BUILDING"];

/// Where the guard house at the entrance gate sits, in scene coordinates.
const GATE_ORIGIN: (f64, f64) = (340.0, 850.0);

/// Where the plan title and area caption sit, in scene coordinates.
const INFO_ORIGIN: (f64, f64) = (800.0, 820.0);

/// Renders `state` over `scene` as a standalone SVG document.
#[must_use]
pub fn render_svg(scene: &Scene, state: &MapState) -> String {
    let config = scene.config();
    let width = fmt_f64(config.width);
    let height = fmt_f64(config.height);

    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {width} {height}\" width=\"{width}\" height=\"{height}\">"
    );
    let _ = write!(out, "<g transform=\"{}\">", affine_to_svg_matrix(state.transform()));
    let _ = write!(
        out,
        "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"{}\"/>",
        escape(&config.background)
    );
    for ((x0, y0), (x1, y1), w) in ROADS {
        let _ = write!(
            out,
            "<path d=\"M{} {} L{} {}\" stroke=\"{ROAD_COLOR}\" stroke-width=\"{}\" opacity=\"0.7\"/>",
            fmt_f64(x0),
            fmt_f64(y0),
            fmt_f64(x1),
            fmt_f64(y1),
            fmt_f64(w),
        );
    }
    for shape in state.render_list(scene) {
        let selected = state.selection.is_selected(shape.id.as_str());
        write_shape(&mut out, shape, selected);
    }
    write_landmarks(&mut out);
    out.push_str("</g></svg>");
    out
}

fn write_shape(out: &mut String, shape: &Shape, selected: bool) {
    let fill = color_to_svg(shape.color);
    match &shape.geometry {
        Geometry::Rect { rect, rotation_deg } => {
            let center = rect.center();
            let (stroke, stroke_width) = if selected { ("#000", 4) } else { ("#fff", 2) };
            let _ = write!(
                out,
                "<g data-shape-id=\"{}\" transform=\"rotate({} {} {})\">",
                escape(shape.id.as_str()),
                fmt_f64(*rotation_deg),
                fmt_f64(center.x),
                fmt_f64(center.y),
            );
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\" rx=\"4\" opacity=\"0.9\"/>",
                fmt_f64(rect.x0),
                fmt_f64(rect.y0),
                fmt_f64(rect.width()),
                fmt_f64(rect.height()),
            );
            if let Some(label) = &shape.label {
                write_label(out, label, center);
            }
            out.push_str("</g>");
        }
        Geometry::Polygon { points } => {
            let mut coords = String::new();
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    coords.push(' ');
                }
                let _ = write!(coords, "{},{}", fmt_f64(p.x), fmt_f64(p.y));
            }
            let _ = write!(
                out,
                "<polygon points=\"{coords}\" fill=\"{fill}\" stroke=\"#fff\" stroke-width=\"3\" opacity=\"0.9\"/>"
            );
        }
        Geometry::Circle(circle) => {
            let _ = write!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\" opacity=\"0.8\"/>",
                fmt_f64(circle.center.x),
                fmt_f64(circle.center.y),
                fmt_f64(circle.radius),
            );
        }
    }
}

/// Fixed artwork drawn above the shapes: the entrance gate and the plan title.
///
/// Neither is a shape, so neither is filtered, selectable or hit-tested.
fn write_landmarks(out: &mut String) {
    let (gx, gy) = GATE_ORIGIN;
    let _ = write!(
        out,
        "<g class=\"entrance-gate\" transform=\"translate({} {})\" pointer-events=\"none\">",
        fmt_f64(gx),
        fmt_f64(gy),
    );
    out.push_str(
        "<rect x=\"-40\" y=\"-35\" width=\"80\" height=\"70\" fill=\"#fff\" stroke=\"#424242\" stroke-width=\"3\" rx=\"4\"/>",
    );
    out.push_str(
        "<circle cx=\"0\" cy=\"-15\" r=\"12\" fill=\"none\" stroke=\"#D32F2F\" stroke-width=\"3\"/>",
    );
    out.push_str(
        "<line x1=\"-8\" y1=\"-15\" x2=\"8\" y2=\"-15\" stroke=\"#D32F2F\" stroke-width=\"3\"/>",
    );
    out.push_str(
        "<line x1=\"0\" y1=\"-23\" x2=\"0\" y2=\"-7\" stroke=\"#D32F2F\" stroke-width=\"3\"/>",
    );
    out.push_str(
        "<text x=\"0\" y=\"20\" text-anchor=\"middle\" font-size=\"9\" font-weight=\"bold\" fill=\"#424242\">GUARD</text>",
    );
    out.push_str(
        "<text x=\"0\" y=\"50\" text-anchor=\"middle\" font-size=\"12\" font-weight=\"bold\" fill=\"#D32F2F\">ENTRANCE GATE</text>",
    );
    out.push_str("</g>");

    let (ix, iy) = INFO_ORIGIN;
    let _ = write!(
        out,
        "<g class=\"plan-info\" transform=\"translate({} {})\" pointer-events=\"none\">",
        fmt_f64(ix),
        fmt_f64(iy),
    );
    out.push_str(
        "<text x=\"0\" y=\"0\" font-size=\"28\" font-family=\"serif\" font-weight=\"bold\" fill=\"#424242\">CAMPUS PLAN</text>",
    );
    let _ = write!(
        out,
        "<line x1=\"0\" y1=\"5\" x2=\"200\" y2=\"5\" stroke=\"{ROAD_COLOR}\" stroke-width=\"3\"/>"
    );
    out.push_str(
        "<text x=\"0\" y=\"30\" font-size=\"16\" fill=\"#757575\">1. 115446 hectares</text>",
    );
    out.push_str("</g>");
}

fn write_label(out: &mut String, label: &str, center: Point) {
    let color = if ACCENT_LABELS.contains(&label) {
        "#E91E63"
    } else {
        "#D32F2F"
    };
    let _ = write!(
        out,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"11\" font-weight=\"bold\" fill=\"{color}\" pointer-events=\"none\">{}</text>",
        fmt_f64(center.x),
        fmt_f64(center.y + 4.0),
        escape(label),
    );
}

fn color_to_svg(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn affine_to_svg_matrix(xf: Affine) -> String {
    let c = xf.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_f64(c[0]),
        fmt_f64(c[1]),
        fmt_f64(c[2]),
        fmt_f64(c[3]),
        fmt_f64(c[4]),
        fmt_f64(c[5]),
    )
}

fn fmt_f64(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    if v == 0.0 {
        return String::from("0");
    }
    if v.fract() == 0.0 {
        return format!("{v:.0}");
    }
    let mut s = format!("{v:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
