// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag anchor helper: derive the pan offset from the latest pointer position.
//!
//! ## Usage
//!
//! 1) Start a drag with [`PanDrag::start`], passing the pointer position and the
//!    pan offset in effect at that moment. The difference is kept as the anchor.
//! 2) On each move event, call [`PanDrag::pan_for`] to get the pan offset that
//!    keeps the anchor under the pointer.
//! 3) End the drag with [`PanDrag::end`].
//!
//! The pan is always `pointer - anchor`. It does not accumulate per-event
//! deltas, so dropped or coalesced move events cannot make the view drift.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use campus_view::drag::PanDrag;
//!
//! let mut drag = PanDrag::default();
//!
//! // Pointer goes down at (100, 100) while the view is panned by (10, 0).
//! drag.start(Point::new(100.0, 100.0), Vec2::new(10.0, 0.0));
//! assert!(drag.is_dragging());
//!
//! // Pointer moves to (150, 130): the view follows by the same amount.
//! let pan = drag.pan_for(Point::new(150.0, 130.0)).unwrap();
//! assert_eq!(pan, Vec2::new(60.0, 30.0));
//!
//! drag.end();
//! assert_eq!(drag.pan_for(Point::new(0.0, 0.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Tracks the anchor of an in-progress pan drag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanDrag {
    anchor: Option<Vec2>,
}

impl PanDrag {
    /// No drag in progress.
    pub const IDLE: Self = Self { anchor: None };

    /// Start a drag at `pointer` while the view is panned by `pan`.
    ///
    /// Starting again while a drag is active re-anchors it.
    pub fn start(&mut self, pointer: Point, pan: Vec2) {
        self.anchor = Some(pointer.to_vec2() - pan);
    }

    /// Returns the pan offset for `pointer`, or `None` when no drag is active.
    #[must_use]
    pub fn pan_for(&self, pointer: Point) -> Option<Vec2> {
        self.anchor.map(|anchor| pointer.to_vec2() - anchor)
    }

    /// End the current drag. Does nothing when no drag is active.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the anchor (`pointer - pan` at drag start), if dragging.
    #[must_use]
    pub fn anchor(&self) -> Option<Vec2> {
        self.anchor
    }
}
