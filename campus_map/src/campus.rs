// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in campus plan.

use campus_scene::{Geometry, Shape};
use kurbo::Point;
use peniko::Color;

use crate::config::MapConfig;
use crate::error::LoadError;
use crate::widget::Scene;

/// Rotation of the left wing of the campus.
const LEFT_WING_DEG: f64 = -25.0;

/// Rotation of the central and right wings.
const MAIN_WING_DEG: f64 = -10.0;

const TREE: Color = Color::from_rgb8(0x4C, 0xAF, 0x50);

struct Building {
    id: &'static str,
    name: &'static str,
    label: &'static str,
    rect: [f64; 4],
    rotation: f64,
    color: Color,
}

const fn building(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    rect: [f64; 4],
    rotation: f64,
    color: Color,
) -> Building {
    Building {
        id,
        name,
        label,
        rect,
        rotation,
        color,
    }
}

const fn rgb(hex: u32) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();
    Color::from_rgb8(r, g, b)
}

#[rustfmt::skip]
const BUILDINGS: &[Building] = &[
    building("yellow-small", "Small Office", "", [200.0, 180.0, 50.0, 40.0], LEFT_WING_DEG, rgb(0xFDD835)),
    building("covered-court", "Covered Court", "Covered Court", [160.0, 210.0, 180.0, 140.0], LEFT_WING_DEG, rgb(0xD7CCC8)),
    building("purple-main", "Main Classroom Building", "Classroom", [280.0, 40.0, 200.0, 160.0], MAIN_WING_DEG, rgb(0x6A1B9A)),
    building("purple-small", "Office Block", "", [330.0, 20.0, 80.0, 80.0], MAIN_WING_DEG, rgb(0x7B1FA2)),
    building("gray-top", "Storage", "", [420.0, 20.0, 100.0, 80.0], MAIN_WING_DEG, rgb(0x616161)),
    building("cafeteria", "Cafeteria", "Cafeteria", [500.0, 60.0, 140.0, 80.0], MAIN_WING_DEG, rgb(0xFFA726)),
    building("swimming-pool", "Swimming Pool", "Swimming pool", [640.0, 100.0, 200.0, 100.0], MAIN_WING_DEG, rgb(0x1976D2)),
    building("pool-area", "Pool Area", "", [840.0, 120.0, 80.0, 60.0], MAIN_WING_DEG, rgb(0x9575CD)),
    building("vacant-lot", "Open Space - Vacant Lot", "VACANT LOT", [380.0, 220.0, 300.0, 200.0], MAIN_WING_DEG, rgb(0x0277BD)),
    building("orange-1", "Structure 1", "", [450.0, 210.0, 40.0, 35.0], MAIN_WING_DEG, rgb(0xFF6F00)),
    building("orange-2", "Structure 2", "", [560.0, 200.0, 40.0, 35.0], MAIN_WING_DEG, rgb(0xFF6F00)),
    building("orange-3", "Structure 3", "", [420.0, 280.0, 40.0, 35.0], MAIN_WING_DEG, rgb(0xFF6F00)),
];

#[rustfmt::skip]
const BUILDINGS_SOUTH: &[Building] = &[
    building("lime-green", "Faculty Room", "", [720.0, 380.0, 80.0, 90.0], MAIN_WING_DEG, rgb(0xCDDC39)),
    building("pink-right", "Arts Building", "Arts & Crafts", [810.0, 400.0, 110.0, 80.0], MAIN_WING_DEG, rgb(0xF48FB1)),
    building("cottage", "Cottage", "Cottage/Lodge", [100.0, 380.0, 100.0, 90.0], LEFT_WING_DEG, rgb(0x4FC3F7)),
    building("technology", "Technology Building", "Technology", [180.0, 420.0, 90.0, 140.0], LEFT_WING_DEG, rgb(0xEF5350)),
    building("green-center", "Green Building", "", [270.0, 450.0, 70.0, 100.0], LEFT_WING_DEG, rgb(0x66BB6A)),
    building("brown-small", "Storage", "", [180.0, 570.0, 60.0, 50.0], LEFT_WING_DEG, rgb(0x8D6E63)),
    building("green-small", "Workshop", "", [240.0, 580.0, 70.0, 50.0], LEFT_WING_DEG, rgb(0x81C784)),
    building("canteen", "Canteen", "", [340.0, 450.0, 90.0, 150.0], LEFT_WING_DEG, rgb(0xFF9800)),
    building("yellow-center", "Office", "", [460.0, 420.0, 60.0, 60.0], LEFT_WING_DEG, rgb(0xFFEB3B)),
];

#[rustfmt::skip]
const BUILDINGS_ENTRANCE: &[Building] = &[
    building("long-building", "Engineering Building", "LONG BUILDING", [400.0, 480.0, 280.0, 160.0], MAIN_WING_DEG, rgb(0x757575)),
    building("engineering-blue", "Engineering Lab", "Engineering Building", [680.0, 550.0, 100.0, 130.0], MAIN_WING_DEG, rgb(0x64B5F6)),
    building("parking-1", "Parking Area 1", "PARKING AREA", [220.0, 760.0, 120.0, 60.0], MAIN_WING_DEG, rgb(0x4FC3F7)),
    building("parking-2", "Parking Area 2", "PARKING AREA", [350.0, 780.0, 120.0, 60.0], MAIN_WING_DEG, rgb(0x4FC3F7)),
];

const GATE_CONTROL: Building = building(
    "red-parking",
    "Gate Control",
    "",
    [380.0, 820.0, 40.0, 35.0],
    MAIN_WING_DEG,
    rgb(0xF44336),
);

const TREES: &[(&str, f64, f64)] = &[
    ("tree-1", 490.0, 210.0),
    ("tree-2", 530.0, 280.0),
    ("tree-3", 600.0, 200.0),
    ("tree-left-1", 75.0, 300.0),
    ("tree-left-2", 100.0, 300.0),
];

const SMALL_TREES: &[(&str, f64, f64)] = &[
    ("tree-parking-1", 260.0, 740.0),
    ("tree-parking-2", 320.0, 740.0),
    ("tree-parking-3", 380.0, 740.0),
];

impl Building {
    fn to_shape(&self) -> Shape {
        let [x, y, width, height] = self.rect;
        Shape::new(
            self.id,
            self.name,
            Geometry::rotated_rect(x, y, width, height, self.rotation),
            self.color,
        )
        .with_label(self.label)
    }
}

fn trees(table: &[(&'static str, f64, f64)], radius: f64) -> impl Iterator<Item = Shape> {
    table.iter().map(move |&(id, x, y)| {
        Shape::new(id, "Tree", Geometry::circle(Point::new(x, y), radius), TREE).decorative()
    })
}

/// Returns the campus shapes in draw order.
///
/// The green area and the trees are decorative; every building can be
/// selected.
pub fn campus_shapes() -> Vec<Shape> {
    let green_area = Shape::new(
        "top-left-triangle",
        "Green Area",
        Geometry::polygon([
            Point::new(20.0, 80.0),
            Point::new(20.0, 280.0),
            Point::new(180.0, 180.0),
        ]),
        rgb(0x1B5E20),
    )
    .decorative();

    let mut shapes = Vec::with_capacity(36);
    shapes.push(green_area);
    shapes.extend(BUILDINGS.iter().map(Building::to_shape));
    shapes.extend(trees(TREES, 12.0));
    shapes.extend(BUILDINGS_SOUTH.iter().map(Building::to_shape));
    shapes.extend(trees(&[("green-dot", 480.0, 500.0)], 10.0));
    shapes.extend(BUILDINGS_ENTRANCE.iter().map(Building::to_shape));
    shapes.extend(trees(SMALL_TREES, 10.0));
    shapes.push(GATE_CONTROL.to_shape());
    shapes
}

/// Returns the campus plan with the default configuration.
pub fn default_scene() -> Result<Scene, LoadError> {
    Ok(Scene::new(campus_shapes(), MapConfig::default())?)
}

#[cfg(test)]
mod tests {
    use campus_scene::filter_by_name;

    use super::*;

    #[test]
    fn campus_is_valid_and_complete() {
        let scene = default_scene().unwrap();
        assert_eq!(scene.shapes().len(), 36);
        assert_eq!(scene.shapes()[0].id.as_str(), "top-left-triangle");
        assert_eq!(scene.shapes()[35].id.as_str(), "red-parking");
    }

    #[test]
    fn decorations_are_not_selectable() {
        let shapes = campus_shapes();
        for shape in &shapes {
            let decorative = !matches!(shape.geometry, Geometry::Rect { .. });
            assert_eq!(shape.selectable, !decorative, "{}", shape.id);
        }
        assert_eq!(filter_by_name(&shapes, "tree").len(), 9);
    }

    #[test]
    fn green_dot_is_drawn_under_the_long_building() {
        let shapes = campus_shapes();
        let position = |id: &str| shapes.iter().position(|s| s.id.as_str() == id).unwrap();
        assert_eq!(position("green-dot"), position("yellow-center") + 1);
        assert_eq!(position("long-building"), position("green-dot") + 1);
    }

    #[test]
    fn unlabeled_buildings_have_no_label() {
        let scene = default_scene().unwrap();
        assert!(scene.query().get("gray-top").unwrap().label.is_none());
        assert_eq!(
            scene.query().get("long-building").unwrap().label.as_deref(),
            Some("LONG BUILDING")
        );
    }
}
