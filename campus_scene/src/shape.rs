// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapes drawn on the campus map.

use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::f64::consts::PI;
use core::fmt;

use kurbo::{Affine, BezPath, Circle, Point, Rect, Vec2};
use peniko::Color;

/// Unique identifier of a [`Shape`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(String);

impl ShapeId {
    /// Creates an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ShapeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShapeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ShapeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Geometry of a shape, in scene coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// Rectangle rotated by `rotation_deg` degrees about its own center.
    Rect {
        /// Unrotated rectangle.
        rect: Rect,
        /// Clockwise rotation in degrees (SVG convention, y axis down).
        rotation_deg: f64,
    },
    /// Closed polygon through `points`, in order.
    Polygon {
        /// Vertices; the last one connects back to the first.
        points: Vec<Point>,
    },
    /// Circle.
    Circle(Circle),
}

impl Geometry {
    /// Rectangle with its top-left corner at `(x, y)` and no rotation.
    #[must_use]
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::rotated_rect(x, y, width, height, 0.0)
    }

    /// Rectangle with its top-left corner at `(x, y)`, rotated about its center.
    #[must_use]
    pub fn rotated_rect(x: f64, y: f64, width: f64, height: f64, rotation_deg: f64) -> Self {
        Self::Rect {
            rect: Rect::new(x, y, x + width, y + height),
            rotation_deg,
        }
    }

    /// Closed polygon.
    #[must_use]
    pub fn polygon(points: impl IntoIterator<Item = Point>) -> Self {
        Self::Polygon {
            points: points.into_iter().collect(),
        }
    }

    /// Circle.
    #[must_use]
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::Circle(Circle::new(center, radius))
    }

    /// Returns the transform placing the unrotated geometry in the scene.
    ///
    /// This is a rotation about the rectangle center for rotated rectangles
    /// and the identity otherwise.
    #[must_use]
    pub fn local_transform(&self) -> Affine {
        match self {
            Self::Rect { rect, rotation_deg } if *rotation_deg != 0.0 => {
                Affine::rotate_about(rotation_deg * (PI / 180.0), rect.center())
            }
            _ => Affine::IDENTITY,
        }
    }

    /// Returns the point labels are centered on.
    ///
    /// Rotation about the center leaves it fixed, so this is the rectangle or
    /// circle center, or the vertex average of a polygon.
    #[must_use]
    pub fn label_anchor(&self) -> Point {
        match self {
            Self::Rect { rect, .. } => rect.center(),
            Self::Circle(circle) => circle.center,
            Self::Polygon { points } => {
                if points.is_empty() {
                    return Point::ORIGIN;
                }
                let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
                (sum / points.len() as f64).to_point()
            }
        }
    }

    /// Returns the scene-space bounding box, including rotation.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Rect { rect, .. } => {
                let xf = self.local_transform();
                let corners = [
                    rect.origin(),
                    Point::new(rect.max_x(), rect.y0),
                    Point::new(rect.x0, rect.max_y()),
                    Point::new(rect.max_x(), rect.max_y()),
                ];
                bounds_of(corners.iter().map(|p| xf * *p))
            }
            Self::Circle(circle) => {
                let r = circle.radius;
                Rect::new(
                    circle.center.x - r,
                    circle.center.y - r,
                    circle.center.x + r,
                    circle.center.y + r,
                )
            }
            Self::Polygon { points } => bounds_of(points.iter().copied()),
        }
    }

    /// Returns the polygon outline as a closed path, if this is a polygon.
    #[must_use]
    pub fn polygon_path(&self) -> Option<BezPath> {
        let Self::Polygon { points } = self else {
            return None;
        };
        let mut path = BezPath::new();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            path.move_to(*first);
            for p in iter {
                path.line_to(*p);
            }
            path.close_path();
        }
        Some(path)
    }

    /// Checks that the geometry can be drawn and hit tested.
    pub fn validate(&self) -> Result<(), GeometryError> {
        match self {
            Self::Rect { rect, rotation_deg } => {
                let finite = [rect.x0, rect.y0, rect.x1, rect.y1, *rotation_deg]
                    .iter()
                    .all(|v| v.is_finite());
                if !finite {
                    return Err(GeometryError::NonFinite);
                }
                if rect.width() <= 0.0 || rect.height() <= 0.0 {
                    return Err(GeometryError::EmptyRect {
                        width: rect.width(),
                        height: rect.height(),
                    });
                }
            }
            Self::Polygon { points } => {
                if points.iter().any(|p| !p.is_finite()) {
                    return Err(GeometryError::NonFinite);
                }
                if points.len() < 3 {
                    return Err(GeometryError::TooFewPoints(points.len()));
                }
            }
            Self::Circle(circle) => {
                if !circle.center.is_finite() || !circle.radius.is_finite() {
                    return Err(GeometryError::NonFinite);
                }
                if circle.radius <= 0.0 {
                    return Err(GeometryError::NonPositiveRadius(circle.radius));
                }
            }
        }
        Ok(())
    }
}

fn bounds_of(points: impl Iterator<Item = Point>) -> Rect {
    let mut out: Option<Rect> = None;
    for p in points {
        out = Some(match out {
            Some(r) => r.union_pt(p),
            None => Rect::from_points(p, p),
        });
    }
    out.unwrap_or(Rect::ZERO)
}

/// Defect in shape geometry, reported when a scene is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// A coordinate, size, radius or rotation is NaN or infinite.
    NonFinite,
    /// A rectangle has zero or negative width or height.
    EmptyRect {
        /// Width of the rectangle.
        width: f64,
        /// Height of the rectangle.
        height: f64,
    },
    /// A circle has zero or negative radius.
    NonPositiveRadius(f64),
    /// A polygon has fewer than three vertices.
    TooFewPoints(usize),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("geometry has a non-finite value"),
            Self::EmptyRect { width, height } => {
                write!(f, "rectangle has empty size {width} x {height}")
            }
            Self::NonPositiveRadius(r) => write!(f, "circle has non-positive radius {r}"),
            Self::TooFewPoints(n) => {
                write!(f, "polygon needs at least 3 points, found {n}")
            }
        }
    }
}

impl core::error::Error for GeometryError {}

/// A drawable, searchable shape on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Unique identifier.
    pub id: ShapeId,
    /// Human-readable name used for search and the detail panel.
    pub name: String,
    /// Geometry in scene coordinates.
    pub geometry: Geometry,
    /// Fill color.
    pub color: Color,
    /// Text drawn on the shape, if any.
    pub label: Option<String>,
    /// Whether clicking the shape selects it.
    ///
    /// Decorative shapes (trees, terrain, open-space fills) are drawn and can
    /// be hit by the pointer, but never become the selection.
    pub selectable: bool,
}

impl Shape {
    /// Creates a selectable shape without a label.
    #[must_use]
    pub fn new(
        id: impl Into<ShapeId>,
        name: impl Into<String>,
        geometry: Geometry,
        color: Color,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            geometry,
            color,
            label: None,
            selectable: true,
        }
    }

    /// Sets the label. An empty label is stored as no label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = (!label.is_empty()).then_some(label);
        self
    }

    /// Marks the shape as decorative (not selectable).
    #[must_use]
    pub fn decorative(mut self) -> Self {
        self.selectable = false;
        self
    }
}
