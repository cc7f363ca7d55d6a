// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene documents: the JSON form of a shape table plus its configuration.
//!
//! A document looks like this:
//!
//! ```json
//! {
//!   "config": { "zoom": { "max_scale": 3.0 } },
//!   "shapes": [
//!     { "id": "green-area", "type": "polygon", "points": [[20, 80], [20, 280], [180, 180]],
//!       "color": "#1B5E20", "name": "Green Area" },
//!     { "id": "cafeteria", "type": "rect", "x": 500, "y": 60, "width": 140, "height": 80,
//!       "rotation": -10, "color": "#FFA726", "label": "Cafeteria", "name": "Cafeteria" },
//!     { "id": "tree-1", "type": "circle", "x": 490, "y": 210, "r": 12,
//!       "color": "#4CAF50", "name": "Tree" }
//!   ]
//! }
//! ```
//!
//! When `selectable` is omitted, rectangles are selectable and polygons and
//! circles are decorative.

use campus_scene::{Geometry, Shape};
use kurbo::Point;
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::MapConfig;
use crate::error::LoadError;
use crate::widget::Scene;

/// Geometry as written in a scene document, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryRecord {
    /// Rectangle with top-left corner `(x, y)`, rotated about its center.
    Rect {
        /// Left edge before rotation.
        x: f64,
        /// Top edge before rotation.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Rotation in degrees.
        #[serde(default)]
        rotation: f64,
    },
    /// Closed polygon.
    Polygon {
        /// Vertices as `[x, y]` pairs.
        points: Vec<[f64; 2]>,
    },
    /// Circle centered at `(x, y)`.
    Circle {
        /// Center x.
        x: f64,
        /// Center y.
        y: f64,
        /// Radius.
        r: f64,
    },
}

impl GeometryRecord {
    fn selectable_by_default(&self) -> bool {
        matches!(self, Self::Rect { .. })
    }

    fn to_geometry(&self) -> Geometry {
        match self {
            Self::Rect {
                x,
                y,
                width,
                height,
                rotation,
            } => Geometry::rotated_rect(*x, *y, *width, *height, *rotation),
            Self::Polygon { points } => {
                Geometry::polygon(points.iter().map(|[x, y]| Point::new(*x, *y)))
            }
            Self::Circle { x, y, r } => Geometry::circle(Point::new(*x, *y), *r),
        }
    }
}

/// One shape as written in a scene document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    /// Unique id.
    pub id: String,
    /// Search name.
    #[serde(default)]
    pub name: String,
    /// CSS color string, e.g. `#FFA726`.
    pub color: String,
    /// Optional label; empty means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Overrides the per-geometry selectable default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectable: Option<bool>,
    /// Geometry fields, flattened next to the others.
    #[serde(flatten)]
    pub geometry: GeometryRecord,
}

impl ShapeRecord {
    /// Converts the record into a [`Shape`], parsing its color.
    pub fn to_shape(&self) -> Result<Shape, LoadError> {
        let color = parse_shape_color(&self.id, &self.color)?;
        let mut shape = Shape::new(
            self.id.as_str(),
            self.name.as_str(),
            self.geometry.to_geometry(),
            color,
        );
        if let Some(label) = &self.label {
            shape = shape.with_label(label.as_str());
        }
        shape.selectable = self
            .selectable
            .unwrap_or_else(|| self.geometry.selectable_by_default());
        Ok(shape)
    }
}

/// A complete scene document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Widget configuration.
    #[serde(default)]
    pub config: MapConfig,
    /// Shapes in draw order.
    pub shapes: Vec<ShapeRecord>,
}

impl SceneDocument {
    /// Converts and validates the document.
    pub fn into_scene(self) -> Result<Scene, LoadError> {
        self.config.validate().inspect_err(|err| {
            warn!(%err, "rejected scene configuration");
        })?;
        let shapes = self
            .shapes
            .iter()
            .map(ShapeRecord::to_shape)
            .collect::<Result<Vec<_>, _>>()?;
        let scene = Scene::new(shapes, self.config).inspect_err(|err| {
            warn!(%err, "rejected scene document");
        })?;
        debug!(shapes = scene.shapes().len(), "loaded scene document");
        Ok(scene)
    }
}

/// Parses a scene document from JSON and validates it.
pub fn load_scene(json: &str) -> Result<Scene, LoadError> {
    let document: SceneDocument = serde_json::from_str(json)?;
    document.into_scene()
}

fn parse_shape_color(id: &str, value: &str) -> Result<Color, LoadError> {
    parse_color(value)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|_| {
            warn!(id, value, "unparseable shape color");
            LoadError::Color {
                id: id.to_owned(),
                value: value.to_owned(),
            }
        })
}
