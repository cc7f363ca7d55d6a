// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `campus_scene` crate.
//!
//! These exercise filtering, click resolution, and selection together, the way
//! a rendering layer drives them.

use campus_scene::hit::{HitParams, topmost_hit};
use campus_scene::{Geometry, SceneQuery, SelectionState, Shape, filter_by_name, resolve_click};
use kurbo::Point;
use peniko::Color;

fn lot_and_tree() -> SceneQuery {
    SceneQuery::new(vec![
        Shape::new(
            "vacant-lot",
            "Vacant Lot",
            Geometry::rotated_rect(380.0, 220.0, 300.0, 200.0, -10.0),
            Color::from_rgb8(0x02, 0x77, 0xBD),
        )
        .with_label("VACANT LOT"),
        Shape::new(
            "tree-1",
            "Tree",
            Geometry::circle(Point::new(490.0, 210.0), 12.0),
            Color::from_rgb8(0x4C, 0xAF, 0x50),
        )
        .decorative(),
    ])
    .unwrap()
}

#[test]
fn vacant_lot_and_tree_scenario() {
    let scene = lot_and_tree();

    let found = filter_by_name(scene.shapes(), "vacant");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id.as_str(), "vacant-lot");

    let mut selection = SelectionState::new();

    selection.click(&scene, scene.get("tree-1").unwrap());
    assert!(selection.is_empty());

    selection.click(&scene, scene.get("vacant-lot").unwrap());
    assert!(selection.is_selected("vacant-lot"));

    selection.dismiss();
    assert!(selection.is_empty());
}

#[test]
fn selection_does_not_depend_on_filter() {
    let scene = lot_and_tree();
    let mut selection = SelectionState::new();

    // The lot is filtered out of the render list but can still be selected by id.
    assert!(scene.filtered("tree").iter().all(|s| s.id.as_str() != "vacant-lot"));
    assert!(selection.select_id(&scene, "vacant-lot"));
    assert!(selection.is_selected("vacant-lot"));

    // A filter change leaves the selection alone.
    let _ = scene.filtered("nothing matches this");
    assert!(selection.is_selected("vacant-lot"));
}

#[test]
fn filtering_never_mutates_the_table() {
    let scene = lot_and_tree();
    let before: Vec<Shape> = scene.shapes().to_vec();
    let _ = scene.filtered("lot");
    let _ = scene.filtered("");
    assert_eq!(scene.shapes(), before.as_slice());
}

#[test]
fn pointer_click_through_hit_test_and_resolve() {
    let scene = lot_and_tree();
    let params = HitParams::default();
    let render_list = scene.filtered("");
    let mut selection = SelectionState::new();

    // Tree center: the tree is drawn last, so it wins and selects nothing.
    let top = topmost_hit(&render_list, Point::new(490.0, 210.0), &params).unwrap();
    assert_eq!(top.id.as_str(), "tree-1");
    assert!(resolve_click(top).is_none());
    if let Some(shape) = resolve_click(top) {
        selection.click(&scene, shape);
    }
    assert!(selection.is_empty());

    // Middle of the lot.
    let top = topmost_hit(&render_list, Point::new(530.0, 320.0), &params).unwrap();
    assert!(selection.click(&scene, top));
    assert!(selection.is_selected("vacant-lot"));

    // Empty ground.
    assert!(topmost_hit(&render_list, Point::new(5.0, 5.0), &params).is_none());
}

#[test]
fn empty_query_keeps_every_shape_in_order() {
    let scene = lot_and_tree();
    let ids: Vec<&str> = scene
        .filtered("")
        .into_iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, ["vacant-lot", "tree-1"]);
}
