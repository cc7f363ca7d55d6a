// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry-level hit testing for campus shapes.
//!
//! Hosts without a point-in-shape primitive can use this module to find the
//! shape under the pointer. Queries are made in scene coordinates; convert
//! pointer positions with the inverse of the viewport transform first.
//!
//! Stacking follows draw order: later shapes in a render list occlude earlier
//! ones, so [`topmost_hit`] scans the list back to front.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::{Line, ParamCurveNearest, Point, Shape as _};
use smallvec::SmallVec;

use crate::shape::{Geometry, Shape};

/// Parameters for precise hit testing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitParams {
    /// Extra distance outside a shape's outline that still counts as a hit.
    pub tolerance: f64,
}

/// How a point hit a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitKind {
    /// The point is inside the filled area.
    Fill,
    /// The point is outside the fill but within [`HitParams::tolerance`] of the outline.
    Edge,
}

/// Result of a successful hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Distance from the fill, `0.0` for points inside.
    pub distance: f64,
    /// What was hit.
    pub kind: HitKind,
}

/// Precise hit testing against a shape's own geometry.
pub trait PreciseHitTest {
    /// Tests `pt`, given in scene coordinates.
    fn hit_test(&self, pt: Point, params: &HitParams) -> Option<HitScore>;
}

impl PreciseHitTest for Geometry {
    fn hit_test(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        if !pt.is_finite() {
            return None;
        }
        let distance = match self {
            Self::Rect { rect, .. } => {
                // Undo the rotation and test against the axis-aligned rect.
                let local = self.local_transform().inverse() * pt;
                let dx = (rect.x0 - local.x).max(local.x - rect.x1).max(0.0);
                let dy = (rect.y0 - local.y).max(local.y - rect.y1).max(0.0);
                (dx * dx + dy * dy).sqrt()
            }
            Self::Circle(circle) => ((pt - circle.center).hypot() - circle.radius).max(0.0),
            Self::Polygon { points } => {
                let path = self.polygon_path()?;
                if path.contains(pt) {
                    0.0
                } else {
                    edge_distance(points, pt)?
                }
            }
        };
        score(distance, params)
    }
}

impl PreciseHitTest for Shape {
    fn hit_test(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        self.geometry.hit_test(pt, params)
    }
}

fn score(distance: f64, params: &HitParams) -> Option<HitScore> {
    if distance <= 0.0 {
        Some(HitScore {
            distance: 0.0,
            kind: HitKind::Fill,
        })
    } else if distance <= params.tolerance {
        Some(HitScore {
            distance,
            kind: HitKind::Edge,
        })
    } else {
        None
    }
}

fn edge_distance(points: &[Point], pt: Point) -> Option<f64> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let line = Line::new(points[i], points[(i + 1) % n]);
            line.nearest(pt, 0.).distance_sq.sqrt()
        })
        .min_by(f64::total_cmp)
}

/// Returns the topmost shape of `render_list` under `pt`.
///
/// `render_list` is in draw order, so the last hit in the list wins.
#[must_use]
pub fn topmost_hit<'a>(
    render_list: &[&'a Shape],
    pt: Point,
    params: &HitParams,
) -> Option<&'a Shape> {
    render_list
        .iter()
        .rev()
        .find(|shape| shape.hit_test(pt, params).is_some())
        .copied()
}

/// Returns every shape of `render_list` under `pt`, topmost first.
#[must_use]
pub fn hits_at<'a>(
    render_list: &[&'a Shape],
    pt: Point,
    params: &HitParams,
) -> SmallVec<[&'a Shape; 4]> {
    render_list
        .iter()
        .rev()
        .filter(|shape| shape.hit_test(pt, params).is_some())
        .copied()
        .collect()
}
