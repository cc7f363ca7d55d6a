// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=campus_view --heading-base-level=0

//! Campus View: pan/zoom state for the campus map.
//!
//! This crate provides a small, headless model of the map viewport:
//! - A pan offset driven by pointer drags, anchored at drag start.
//! - A uniform scale stepped by zoom buttons and clamped to [`ZoomLimits`].
//! - The resulting scene transform, `translate(pan) * scale(scale)`, with the
//!   scale acting about the scene origin.
//!
//! It does **not** own any shapes or rendering backend. Callers are expected
//! to:
//! - Forward pointer down/move/up/leave and button presses as method calls.
//! - Apply [`ViewportState::transform`] as the one transform on the root of
//!   their shape layer.
//! - Show [`ViewportState::zoom_percent`] as the zoom readout.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use campus_view::{ViewportState, ZoomLimits};
//!
//! let limits = ZoomLimits::default();
//! let view = ViewportState::IDENTITY
//!     .begin_drag(Point::new(100.0, 100.0))
//!     .continue_drag(Point::new(150.0, 130.0))
//!     .end_drag();
//! assert_eq!(view.pan(), Vec2::new(50.0, 30.0));
//!
//! let view = view.zoom_in(&limits);
//! assert_eq!(view.scale(), 1.2);
//! assert_eq!(view.zoom_percent(), 120);
//!
//! let view = view.reset();
//! assert_eq!(view, ViewportState::IDENTITY);
//! ```
//!
//! ## Stateful controller
//!
//! [`ViewportController`] wraps a state and its limits for glue code that
//! prefers `&mut self` handlers:
//!
//! ```rust
//! use kurbo::Point;
//! use campus_view::ViewportController;
//!
//! let mut view = ViewportController::default();
//! view.begin_drag(Point::new(0.0, 0.0));
//! view.continue_drag(Point::new(20.0, 10.0));
//! view.end_drag();
//! // Moves after the release are ignored.
//! view.continue_drag(Point::new(400.0, 400.0));
//! assert_eq!(view.state().pan().x, 20.0);
//! ```
//!
//! ## Design notes
//!
//! - Pan is always `pointer - anchor`; deltas are never accumulated.
//! - Zoom limits are a UX boundary: steps past them clamp silently.
//! - Zoom buttons scale about the scene origin, not about the pointer.
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
mod limits;
mod viewport;

pub use limits::{MAX_SCALE, MIN_SCALE, ZOOM_STEP, ZoomLimits, ZoomLimitsError};
pub use viewport::{ViewportController, ViewportDebugInfo, ViewportState};
