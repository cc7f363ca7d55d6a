// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=campus_map --heading-base-level=0

//! Campus Map: state and view models for an interactive campus map widget.
//!
//! The widget is split into an immutable [`Scene`] (a validated shape table and
//! its [`MapConfig`]) and a small [`MapState`] owned by the widget instance.
//! Hosts feed input as [`MapEvent`] values through [`update`] and read back
//! view models:
//!
//! - [`MapState::render_list`]: shapes to draw, in draw order.
//! - [`MapState::transform`]: the transform for the shape layer.
//! - [`MapState::zoom_controls`]: zoom readout and button states.
//! - [`MapState::detail_panel`]: content for the selected shape.
//!
//! Scenes come from [`campus::default_scene`] or from JSON via [`load_scene`].
//! [`svg::render_svg`] exports the current view as an SVG document.
//!
//! ## Example
//!
//! ```
//! use campus_map::{MapEvent, campus, update};
//!
//! let scene = campus::default_scene().unwrap();
//! let mut state = scene.initial_state();
//!
//! for event in [
//!     MapEvent::SetQuery("pool".into()),
//!     MapEvent::ZoomIn,
//!     MapEvent::ShapeClicked("swimming-pool".into()),
//! ] {
//!     state = update(&scene, state, event);
//! }
//!
//! assert_eq!(state.render_list(&scene).len(), 2);
//! assert_eq!(state.zoom_controls(&scene).readout(), "Zoom: 120%");
//! let panel = state.detail_panel(&scene).unwrap();
//! assert_eq!(panel.title, "Swimming Pool");
//! assert_eq!(panel.caption, "Swimming pool");
//!
//! // Clicking a tree does not change the selection.
//! let state = update(&scene, state, MapEvent::ShapeClicked("tree-1".into()));
//! assert!(state.selection.is_selected("swimming-pool"));
//! ```
//!
//! ## Logging
//!
//! Selection changes and scene loading emit [`tracing`] events at `debug`
//! level; rejected documents emit `warn`. Install a subscriber to see them.

pub mod campus;
mod config;
mod data;
mod error;
pub mod svg;
mod widget;

pub use config::{MapConfig, ZoomConfig};
pub use data::{GeometryRecord, SceneDocument, ShapeRecord, load_scene};
pub use error::{ConfigError, LoadError};
pub use widget::{
    DEFAULT_CAPTION, DIRECTIONS_LABEL, DetailPanel, MapEvent, MapState, Scene, ZoomControls,
    update,
};

pub use campus_scene as scene;
pub use campus_view as view;
