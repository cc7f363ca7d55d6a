// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget state and the event reducer.

use campus_scene::hit::HitParams;
use campus_scene::{SceneError, SceneQuery, SelectionState, Shape};
use campus_view::{ViewportState, ZoomLimits};
use kurbo::{Affine, Point};
use peniko::Color;
use tracing::{debug, info, trace};

use crate::config::MapConfig;

/// Caption shown in the detail panel for shapes without a label.
pub const DEFAULT_CAPTION: &str = "Campus Building";

/// Text of the directions button in the detail panel.
pub const DIRECTIONS_LABEL: &str = "Get Directions";

/// The immutable part of the widget: a validated shape table and its config.
#[derive(Clone, Debug)]
pub struct Scene {
    query: SceneQuery,
    config: MapConfig,
    limits: ZoomLimits,
}

impl Scene {
    /// Validates `shapes` and pairs them with `config`.
    pub fn new(shapes: Vec<Shape>, config: MapConfig) -> Result<Self, SceneError> {
        let query = SceneQuery::new(shapes)?;
        let limits = config.zoom_limits();
        Ok(Self {
            query,
            config,
            limits,
        })
    }

    /// Returns the shape table.
    #[must_use]
    pub fn query(&self) -> &SceneQuery {
        &self.query
    }

    /// Returns every shape, in draw order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        self.query.shapes()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Returns the zoom limits derived from the configuration.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Returns the hit-test parameters derived from the configuration.
    #[must_use]
    pub fn hit_params(&self) -> HitParams {
        HitParams {
            tolerance: self.config.hit_tolerance,
        }
    }

    /// Returns the initial widget state for this scene.
    #[must_use]
    pub fn initial_state(&self) -> MapState {
        MapState {
            viewport: ViewportState::IDENTITY.clamped(&self.limits),
            ..MapState::default()
        }
    }
}

/// Everything the widget instance mutates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapState {
    /// Pan/zoom state.
    pub viewport: ViewportState,
    /// Selected shape.
    pub selection: SelectionState,
    /// Search text.
    pub query: String,
}

/// An input to the widget.
///
/// Pointer positions are in the host's pointer space (e.g. client pixels).
#[derive(Clone, Debug, PartialEq)]
pub enum MapEvent {
    /// Primary button pressed over the map.
    PointerDown(Point),
    /// Pointer moved, inside or outside the map.
    PointerMove(Point),
    /// Primary button released.
    PointerUp,
    /// Pointer left the map region.
    PointerLeave,
    /// Zoom-in button.
    ZoomIn,
    /// Zoom-out button.
    ZoomOut,
    /// Reset-view button.
    ResetView,
    /// Search text changed.
    SetQuery(String),
    /// The host resolved a click to the shape with this id.
    ShapeClicked(String),
    /// Click at a pointer position; hit tested against the render list.
    PointerClick(Point),
    /// Close button on the detail panel.
    Dismiss,
    /// Directions button on the detail panel.
    ///
    /// Routing is not available; the request is logged and ignored.
    RequestDirections,
}

/// Applies `event` to `state`.
#[must_use]
pub fn update(scene: &Scene, mut state: MapState, event: MapEvent) -> MapState {
    let limits = scene.limits();
    match event {
        MapEvent::PointerDown(pt) => {
            state.viewport = state.viewport.begin_drag(pt);
        }
        MapEvent::PointerMove(pt) => {
            state.viewport = state.viewport.continue_drag(pt);
            trace!(pan = ?state.viewport.pan(), "pointer move");
        }
        MapEvent::PointerUp | MapEvent::PointerLeave => {
            state.viewport = state.viewport.end_drag();
        }
        MapEvent::ZoomIn => {
            state.viewport = state.viewport.zoom_in(&limits);
            debug!(scale = state.viewport.scale(), "zoom in");
        }
        MapEvent::ZoomOut => {
            state.viewport = state.viewport.zoom_out(&limits);
            debug!(scale = state.viewport.scale(), "zoom out");
        }
        MapEvent::ResetView => {
            state.viewport = state.viewport.reset().clamped(&limits);
            debug!("view reset");
        }
        MapEvent::SetQuery(query) => {
            state.query = query;
        }
        MapEvent::ShapeClicked(id) => {
            if state.selection.select_id(scene.query(), &id) {
                debug!(id = id.as_str(), "shape selected");
            }
        }
        MapEvent::PointerClick(pt) => {
            let scene_pt = state.viewport.view_to_scene_point(pt);
            let hit = scene
                .query()
                .resolve_click_at(&state.query, scene_pt, &scene.hit_params());
            if let Some(shape) = hit
                && state.selection.click(scene.query(), shape)
            {
                debug!(id = shape.id.as_str(), "shape selected");
            }
        }
        MapEvent::Dismiss => {
            if state.selection.dismiss() {
                debug!("selection dismissed");
            }
        }
        MapEvent::RequestDirections => {
            if let Some(id) = state.selection.selected() {
                info!(id = id.as_str(), "directions requested; routing is not available");
            }
        }
    }
    state
}

/// Zoom buttons and readout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoomControls {
    /// `round(scale * 100)`.
    pub percent: u32,
    /// Whether the zoom-in button is enabled.
    pub zoom_in_enabled: bool,
    /// Whether the zoom-out button is enabled.
    pub zoom_out_enabled: bool,
    /// Whether transform changes should be animated (false while dragging).
    pub animate: bool,
}

impl ZoomControls {
    /// Readout text, e.g. `Zoom: 120%`.
    #[must_use]
    pub fn readout(&self) -> String {
        format!("Zoom: {}%", self.percent)
    }
}

/// Content of the detail panel for the selected shape.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailPanel<'a> {
    /// Shape id.
    pub id: &'a str,
    /// Shape name, used as the title.
    pub title: &'a str,
    /// Swatch color.
    pub color: Color,
    /// Label, or [`DEFAULT_CAPTION`] when the shape has none.
    pub caption: &'a str,
    /// Text of the directions button.
    pub directions_label: &'static str,
}

impl MapState {
    /// Returns the shapes to draw, in draw order.
    #[must_use]
    pub fn render_list<'a>(&self, scene: &'a Scene) -> Vec<&'a Shape> {
        scene.query().filtered(&self.query)
    }

    /// Returns the transform for the root of the shape layer.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.viewport.transform()
    }

    /// Returns the zoom controls view model.
    #[must_use]
    pub fn zoom_controls(&self, scene: &Scene) -> ZoomControls {
        let limits = scene.limits();
        ZoomControls {
            percent: self.viewport.zoom_percent(),
            zoom_in_enabled: self.viewport.can_zoom_in(&limits),
            zoom_out_enabled: self.viewport.can_zoom_out(&limits),
            animate: self.viewport.animates_transform(),
        }
    }

    /// Returns the detail panel, if a shape is selected.
    #[must_use]
    pub fn detail_panel<'a>(&self, scene: &'a Scene) -> Option<DetailPanel<'a>> {
        let shape = self.selection.shape(scene.query())?;
        Some(DetailPanel {
            id: shape.id.as_str(),
            title: &shape.name,
            color: shape.color,
            caption: shape.label.as_deref().unwrap_or(DEFAULT_CAPTION),
            directions_label: DIRECTIONS_LABEL,
        })
    }
}
