// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=campus_scene --heading-base-level=0

//! Campus Scene: the shape table behind the campus map.
//!
//! This crate covers what happens between a static shape table and the
//! detail panel:
//! - [`Shape`] and its [`Geometry`]: rotated rectangles, polygons, circles.
//! - [`filter_by_name`]: the search box, producing the render list.
//! - [`resolve_click`]: decorative shapes never become the selection.
//! - [`SelectionState`]: at most one selected shape id.
//! - [`hit`]: precise point-in-shape tests for hosts that lack them.
//!
//! It does **not** render anything or own the viewport. Pointer positions
//! must be mapped into scene coordinates before hit testing (see
//! `campus_view`).
//!
//! ## Draw order
//!
//! The order of the shape table is the draw order, and [`filter_by_name`]
//! keeps it. Shapes later in the render list are drawn on top of earlier ones,
//! and the topmost shape under the pointer is the one that receives a click.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use campus_scene::{Geometry, SceneQuery, SelectionState, Shape};
//!
//! let scene = SceneQuery::new(vec![
//!     Shape::new(
//!         "vacant-lot",
//!         "Vacant Lot",
//!         Geometry::rotated_rect(380.0, 220.0, 300.0, 200.0, -10.0),
//!         Color::from_rgb8(0x02, 0x77, 0xBD),
//!     ),
//!     Shape::new(
//!         "tree-1",
//!         "Tree",
//!         Geometry::circle(Point::new(490.0, 210.0), 12.0),
//!         Color::from_rgb8(0x4C, 0xAF, 0x50),
//!     )
//!     .decorative(),
//! ])
//! .unwrap();
//!
//! let render_list = scene.filtered("vacant");
//! assert_eq!(render_list.len(), 1);
//!
//! let mut selection = SelectionState::new();
//! selection.click(&scene, scene.get("tree-1").unwrap());
//! assert!(selection.is_empty());
//!
//! selection.click(&scene, scene.get("vacant-lot").unwrap());
//! assert!(selection.is_selected("vacant-lot"));
//!
//! selection.dismiss();
//! assert!(selection.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod hit;
mod query;
mod selection;
mod shape;

pub use query::{SceneError, SceneQuery, filter_by_name, resolve_click};
pub use selection::SelectionState;
pub use shape::{Geometry, GeometryError, Shape, ShapeId};
