// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-shape selection state.

use crate::query::{SceneQuery, resolve_click};
use crate::shape::{Shape, ShapeId};

/// At most one selected shape, plus a revision counter.
///
/// The only ways in are [`SelectionState::click`] (which routes through
/// [`resolve_click`] and checks the scene, so decorative or foreign shapes
/// are ignored) and
/// [`SelectionState::select_id`] (which also checks that the id exists in
/// the scene). The filter applied to the render list plays no part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<ShapeId>,
    revision: u64,
}

impl SelectionState {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            revision: 0,
        }
    }

    /// Returns the selected shape id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&ShapeId> {
        self.selected.as_ref()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Returns `true` if `id` is the selected shape.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().is_some_and(|s| s.as_str() == id)
    }

    /// Returns the current revision counter.
    ///
    /// The revision is bumped only when the selected id actually changes.
    /// Clicking the already-selected shape, or dismissing an empty selection,
    /// leaves it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies a click on `shape`, the topmost shape under the pointer.
    ///
    /// A selectable shape replaces the current selection; a decorative one
    /// leaves it untouched. Shapes whose id is not in `scene` are ignored.
    /// Returns `true` if the selection changed.
    pub fn click(&mut self, scene: &SceneQuery, shape: &Shape) -> bool {
        let Some(shape) = resolve_click(shape) else {
            return false;
        };
        if scene.get(shape.id.as_str()).is_none() {
            return false;
        }
        self.replace(shape.id.clone())
    }

    /// Selects the shape with `id` from `scene`, as a direct id dispatch.
    ///
    /// Unknown ids and decorative shapes are ignored. Returns `true` if the
    /// selection changed.
    pub fn select_id(&mut self, scene: &SceneQuery, id: &str) -> bool {
        match scene.resolve_click_id(id) {
            Some(shape) => self.replace(shape.id.clone()),
            None => false,
        }
    }

    /// Clears the selection. Returns `true` if something was selected.
    pub fn dismiss(&mut self) -> bool {
        if self.selected.take().is_some() {
            self.bump_revision();
            true
        } else {
            false
        }
    }

    /// Returns the selected shape looked up in `scene`.
    #[must_use]
    pub fn shape<'a>(&self, scene: &'a SceneQuery) -> Option<&'a Shape> {
        self.selected.as_ref().and_then(|id| scene.get(id.as_str()))
    }

    fn replace(&mut self, id: ShapeId) -> bool {
        if self.selected.as_ref() == Some(&id) {
            return false;
        }
        self.selected = Some(id);
        self.bump_revision();
        true
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Point;
    use peniko::Color;

    use super::*;
    use crate::shape::Geometry;

    fn scene() -> SceneQuery {
        SceneQuery::new(vec![
            Shape::new(
                "vacant-lot",
                "Vacant Lot",
                Geometry::rect(380.0, 220.0, 300.0, 200.0),
                Color::BLACK,
            ),
            Shape::new(
                "tree-1",
                "Tree",
                Geometry::circle(Point::new(490.0, 210.0), 12.0),
                Color::BLACK,
            )
            .decorative(),
            Shape::new(
                "cafeteria",
                "Cafeteria",
                Geometry::rect(500.0, 60.0, 140.0, 80.0),
                Color::BLACK,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn empty_selection_basics() {
        let sel = SelectionState::new();
        assert!(sel.is_empty());
        assert_eq!(sel.selected(), None);
        assert_eq!(sel.revision(), 0);
    }

    #[test]
    fn click_on_decorative_shape_changes_nothing() {
        let scene = scene();
        let mut sel = SelectionState::new();
        assert!(!sel.click(&scene, scene.get("tree-1").unwrap()));
        assert!(sel.is_empty());
        assert_eq!(sel.revision(), 0);

        sel.click(&scene, scene.get("vacant-lot").unwrap());
        assert!(!sel.click(&scene, scene.get("tree-1").unwrap()));
        assert!(sel.is_selected("vacant-lot"));
    }

    #[test]
    fn click_replaces_and_reclick_is_noop() {
        let scene = scene();
        let mut sel = SelectionState::new();
        assert!(sel.click(&scene, scene.get("vacant-lot").unwrap()));
        assert_eq!(sel.revision(), 1);

        assert!(!sel.click(&scene, scene.get("vacant-lot").unwrap()));
        assert_eq!(sel.revision(), 1);
        assert!(sel.is_selected("vacant-lot"));

        assert!(sel.click(&scene, scene.get("cafeteria").unwrap()));
        assert_eq!(sel.selected().map(ShapeId::as_str), Some("cafeteria"));
        assert_eq!(sel.revision(), 2);
    }

    #[test]
    fn click_ignores_shapes_outside_the_scene() {
        let scene = scene();
        let stray = Shape::new(
            "annex",
            "Annex",
            Geometry::rect(0.0, 0.0, 10.0, 10.0),
            Color::BLACK,
        );
        let mut sel = SelectionState::new();
        assert!(!sel.click(&scene, &stray));
        assert!(sel.is_empty());
        assert_eq!(sel.revision(), 0);
    }

    #[test]
    fn dismiss_clears_and_bumps_only_on_change() {
        let scene = scene();
        let mut sel = SelectionState::new();
        assert!(!sel.dismiss());
        assert_eq!(sel.revision(), 0);

        sel.click(&scene, scene.get("vacant-lot").unwrap());
        assert!(sel.dismiss());
        assert!(sel.is_empty());
        assert_eq!(sel.revision(), 2);
    }

    #[test]
    fn select_id_checks_scene() {
        let scene = scene();
        let mut sel = SelectionState::new();
        assert!(!sel.select_id(&scene, "nowhere"));
        assert!(!sel.select_id(&scene, "tree-1"));
        assert!(sel.select_id(&scene, "cafeteria"));
        assert_eq!(sel.shape(&scene).map(|s| s.name.as_str()), Some("Cafeteria"));
    }
}
