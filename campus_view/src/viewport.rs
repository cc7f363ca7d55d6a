// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Affine, Point, Vec2};

use crate::drag::PanDrag;
use crate::limits::ZoomLimits;

/// Zoom results are snapped to multiples of `1 / SCALE_GRID` so that repeated
/// decimal steps land on the decimal value instead of drifting.
const SCALE_GRID: f64 = 1e9;

/// Pan/zoom state of the campus map view.
///
/// `ViewportState` is a small `Copy` value. Every operation consumes the
/// current state and returns the next one, which keeps event handling a pure
/// function of `(state, input)`:
///
/// - [`ViewportState::begin_drag`], [`ViewportState::continue_drag`] and
///   [`ViewportState::end_drag`] move the pan offset with the pointer.
/// - [`ViewportState::zoom_in`] and [`ViewportState::zoom_out`] step the scale
///   and clamp it into the given [`ZoomLimits`].
/// - [`ViewportState::reset`] returns to the identity view.
///
/// The pan offset only changes while a drag is active (or on reset).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    scale: f64,
    pan: Vec2,
    drag: PanDrag,
}

impl ViewportState {
    /// Scale `1.0`, no pan, not dragging.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        pan: Vec2::ZERO,
        drag: PanDrag::IDLE,
    };

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current pan offset in pointer coordinates.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns `true` while a pan drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns the drag anchor (`pointer - pan` at drag start), if dragging.
    #[must_use]
    pub fn drag_anchor(&self) -> Option<Vec2> {
        self.drag.anchor()
    }

    /// Starts a pan drag with the pointer at `pointer`.
    #[must_use]
    pub fn begin_drag(mut self, pointer: Point) -> Self {
        self.drag.start(pointer, self.pan);
        self
    }

    /// Moves the pan so the drag anchor stays under `pointer`.
    ///
    /// Does nothing when no drag is active, so stray move events after a
    /// release (or before any press) are harmless.
    #[must_use]
    pub fn continue_drag(mut self, pointer: Point) -> Self {
        if let Some(pan) = self.drag.pan_for(pointer) {
            self.pan = pan;
        }
        self
    }

    /// Ends the pan drag. Idempotent.
    #[must_use]
    pub fn end_drag(mut self) -> Self {
        self.drag.end();
        self
    }

    /// Increases the scale by one step, clamped to `limits`.
    #[must_use]
    pub fn zoom_in(self, limits: &ZoomLimits) -> Self {
        self.step_scale(limits.step(), limits)
    }

    /// Decreases the scale by one step, clamped to `limits`.
    #[must_use]
    pub fn zoom_out(self, limits: &ZoomLimits) -> Self {
        self.step_scale(-limits.step(), limits)
    }

    /// Returns to scale `1.0` and zero pan.
    ///
    /// A drag in progress stays active; its anchor is not touched.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            scale: 1.0,
            pan: Vec2::ZERO,
            drag: self.drag,
        }
    }

    /// Returns the scene transform: `translate(pan) * scale(scale)`.
    ///
    /// The scale acts about the scene origin `(0, 0)`. The rendering layer
    /// applies this as the single transform on the root of the shape layer.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.scale)
    }

    /// Converts a pointer-space point into scene coordinates.
    #[must_use]
    pub fn view_to_scene_point(&self, pt: Point) -> Point {
        self.transform().inverse() * pt
    }

    /// Converts a scene-space point into pointer coordinates.
    #[must_use]
    pub fn scene_to_view_point(&self, pt: Point) -> Point {
        self.transform() * pt
    }

    /// Returns the zoom readout, `round(scale * 100)`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "scale is clamped to a small positive range"
    )]
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// Returns `true` if [`ViewportState::zoom_in`] would change the scale.
    #[must_use]
    pub fn can_zoom_in(&self, limits: &ZoomLimits) -> bool {
        self.scale < limits.max_scale()
    }

    /// Returns `true` if [`ViewportState::zoom_out`] would change the scale.
    #[must_use]
    pub fn can_zoom_out(&self, limits: &ZoomLimits) -> bool {
        self.scale > limits.min_scale()
    }

    /// Returns `true` if transform changes should be animated.
    ///
    /// While dragging the shape layer must follow the pointer directly.
    #[must_use]
    pub fn animates_transform(&self) -> bool {
        !self.is_dragging()
    }

    /// Clamps the scale into new limits, e.g. after a configuration change.
    #[must_use]
    pub fn clamped(mut self, limits: &ZoomLimits) -> Self {
        self.scale = limits.clamp(self.scale);
        self
    }

    fn step_scale(mut self, delta: f64, limits: &ZoomLimits) -> Self {
        let stepped = ((self.scale + delta) * SCALE_GRID).round() / SCALE_GRID;
        self.scale = limits.clamp(stepped);
        self
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Stateful wrapper around [`ViewportState`] and its [`ZoomLimits`].
///
/// Event glue that prefers `&mut self` handlers can own a controller and call
/// these methods directly; each one forwards to the matching pure transition.
#[derive(Clone, Debug, Default)]
pub struct ViewportController {
    state: ViewportState,
    limits: ZoomLimits,
}

impl ViewportController {
    /// Creates a controller at the identity view with the given limits.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            state: ViewportState::IDENTITY.clamped(&limits),
            limits,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Returns the zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Replaces the zoom limits; the current scale is clamped into them.
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        self.state = self.state.clamped(&limits);
    }

    /// See [`ViewportState::begin_drag`].
    pub fn begin_drag(&mut self, pointer: Point) {
        self.state = self.state.begin_drag(pointer);
    }

    /// See [`ViewportState::continue_drag`].
    pub fn continue_drag(&mut self, pointer: Point) {
        self.state = self.state.continue_drag(pointer);
    }

    /// See [`ViewportState::end_drag`].
    pub fn end_drag(&mut self) {
        self.state = self.state.end_drag();
    }

    /// See [`ViewportState::zoom_in`].
    pub fn zoom_in(&mut self) {
        self.state = self.state.zoom_in(&self.limits);
    }

    /// See [`ViewportState::zoom_out`].
    pub fn zoom_out(&mut self) {
        self.state = self.state.zoom_out(&self.limits);
    }

    /// See [`ViewportState::reset`]; the scale is then clamped into the limits.
    pub fn reset(&mut self) {
        self.state = self.state.reset().clamped(&self.limits);
    }

    /// See [`ViewportState::transform`].
    #[must_use]
    pub fn current_transform(&self) -> Affine {
        self.state.transform()
    }

    /// Snapshot of the current controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            scale: self.state.scale,
            pan: self.state.pan,
            drag_anchor: self.state.drag_anchor(),
            zoom_percent: self.state.zoom_percent(),
            min_scale: self.limits.min_scale(),
            max_scale: self.limits.max_scale(),
            step: self.limits.step(),
        }
    }
}

/// Debug snapshot of a [`ViewportController`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current uniform scale.
    pub scale: f64,
    /// Current pan offset in pointer coordinates.
    pub pan: Vec2,
    /// Drag anchor, present while dragging.
    pub drag_anchor: Option<Vec2>,
    /// Zoom readout in percent.
    pub zoom_percent: u32,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Zoom step.
    pub step: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{ViewportController, ViewportState};
    use crate::limits::{MAX_SCALE, MIN_SCALE, ZoomLimits};

    #[test]
    fn zoom_in_reaches_max_after_ten_steps_and_stays() {
        let limits = ZoomLimits::default();
        let mut vp = ViewportState::IDENTITY;
        for _ in 0..9 {
            vp = vp.zoom_in(&limits);
            assert!(vp.scale() < MAX_SCALE);
        }
        vp = vp.zoom_in(&limits);
        assert_eq!(vp.scale(), 3.0);

        for _ in 0..5 {
            vp = vp.zoom_in(&limits);
            assert_eq!(vp.scale(), 3.0);
        }
        assert!(!vp.can_zoom_in(&limits));
    }

    #[test]
    fn zoom_out_clamps_to_min() {
        let limits = ZoomLimits::default();
        let mut vp = ViewportState::IDENTITY;
        vp = vp.zoom_out(&limits);
        assert_eq!(vp.scale(), 0.8);
        vp = vp.zoom_out(&limits);
        assert_eq!(vp.scale(), 0.6);
        vp = vp.zoom_out(&limits);
        assert_eq!(vp.scale(), MIN_SCALE);
        vp = vp.zoom_out(&limits);
        assert_eq!(vp.scale(), MIN_SCALE);
        assert!(!vp.can_zoom_out(&limits));
        assert!(vp.can_zoom_in(&limits));
    }

    #[test]
    fn scale_stays_in_bounds_for_mixed_sequences() {
        let limits = ZoomLimits::default();
        let mut vp = ViewportState::IDENTITY;
        // A fixed pseudo-random walk of zoom presses.
        let presses = [1_u8, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        for press in presses.iter().cycle().take(200) {
            vp = if *press == 1 {
                vp.zoom_in(&limits)
            } else {
                vp.zoom_out(&limits)
            };
            assert!(vp.scale() >= MIN_SCALE && vp.scale() <= MAX_SCALE);
        }
    }

    #[test]
    fn identity_drag_leaves_pan_unchanged() {
        let start = ViewportState::IDENTITY
            .begin_drag(Point::new(0.0, 0.0))
            .continue_drag(Point::new(25.0, -5.0))
            .end_drag();
        let p0 = Point::new(300.0, 200.0);
        let vp = start.begin_drag(p0).continue_drag(p0);
        assert_eq!(vp.pan(), start.pan());
    }

    #[test]
    fn drag_pan_is_pointer_minus_anchor() {
        let before = Vec2::new(-40.0, 12.0);
        let vp = ViewportState::IDENTITY
            .begin_drag(Point::ORIGIN)
            .continue_drag(before.to_point())
            .end_drag();
        assert_eq!(vp.pan(), before);

        let p0 = Point::new(10.0, 10.0);
        let p1 = Point::new(-15.0, 42.0);
        let vp = vp.begin_drag(p0).continue_drag(p1);
        assert_eq!(vp.pan(), p1.to_vec2() - (p0.to_vec2() - before));
    }

    #[test]
    fn continue_drag_without_begin_is_noop() {
        let vp = ViewportState::IDENTITY.continue_drag(Point::new(99.0, 99.0));
        assert_eq!(vp, ViewportState::IDENTITY);
    }

    #[test]
    fn continue_drag_after_end_is_noop() {
        let vp = ViewportState::IDENTITY
            .begin_drag(Point::new(0.0, 0.0))
            .continue_drag(Point::new(5.0, 5.0))
            .end_drag();
        let after = vp.continue_drag(Point::new(500.0, 500.0));
        assert_eq!(after.pan(), Vec2::new(5.0, 5.0));
        assert!(!after.is_dragging());
    }

    #[test]
    fn end_drag_is_idempotent() {
        let vp = ViewportState::IDENTITY.end_drag().end_drag();
        assert_eq!(vp, ViewportState::IDENTITY);
    }

    #[test]
    fn reset_restores_identity_but_keeps_drag() {
        let limits = ZoomLimits::default();
        let vp = ViewportState::IDENTITY
            .zoom_in(&limits)
            .begin_drag(Point::new(1.0, 1.0))
            .continue_drag(Point::new(30.0, 40.0))
            .reset();
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.pan(), Vec2::ZERO);
        assert!(vp.is_dragging());

        let vp = vp.end_drag().reset();
        assert_eq!(vp, ViewportState::IDENTITY);
    }

    #[test]
    fn transform_translates_after_scaling_about_origin() {
        let limits = ZoomLimits::default();
        let vp = ViewportState::IDENTITY
            .begin_drag(Point::new(100.0, 100.0))
            .continue_drag(Point::new(150.0, 130.0))
            .end_drag()
            .zoom_in(&limits);

        // Scene origin lands on the pan offset.
        let origin = vp.scene_to_view_point(Point::ORIGIN);
        assert!((origin.x - 50.0).abs() < 1e-9);
        assert!((origin.y - 30.0).abs() < 1e-9);

        let p = vp.scene_to_view_point(Point::new(10.0, 20.0));
        assert!((p.x - (50.0 + 12.0)).abs() < 1e-9);
        assert!((p.y - (30.0 + 24.0)).abs() < 1e-9);

        let back = vp.view_to_scene_point(p);
        assert!((back.x - 10.0).abs() < 1e-9);
        assert!((back.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_percent_rounds() {
        let limits = ZoomLimits::default();
        let vp = ViewportState::IDENTITY;
        assert_eq!(vp.zoom_percent(), 100);
        assert_eq!(vp.zoom_in(&limits).zoom_percent(), 120);
        assert_eq!(vp.zoom_out(&limits).zoom_out(&limits).zoom_percent(), 60);
    }

    #[test]
    fn animation_is_suppressed_while_dragging() {
        let vp = ViewportState::IDENTITY;
        assert!(vp.animates_transform());
        let vp = vp.begin_drag(Point::ORIGIN);
        assert!(!vp.animates_transform());
        assert!(vp.end_drag().animates_transform());
    }

    #[test]
    fn drag_then_zoom_then_reset_scenario() {
        let mut vp = ViewportController::default();
        vp.begin_drag(Point::new(100.0, 100.0));
        vp.continue_drag(Point::new(150.0, 130.0));
        assert_eq!(vp.state().pan(), Vec2::new(50.0, 30.0));
        vp.end_drag();

        vp.zoom_in();
        assert_eq!(vp.state().scale(), 1.2);
        assert_eq!(vp.state().pan(), Vec2::new(50.0, 30.0));

        vp.reset();
        assert_eq!(vp.state().scale(), 1.0);
        assert_eq!(vp.state().pan(), Vec2::ZERO);
    }

    #[test]
    fn set_limits_clamps_current_scale_and_debug_info_reports_it() {
        let mut vp = ViewportController::new(ZoomLimits::new(0.5, 4.0, 0.2));
        for _ in 0..20 {
            vp.zoom_in();
        }
        assert_eq!(vp.state().scale(), 4.0);

        vp.set_limits(ZoomLimits::default());
        let info = vp.debug_info();
        assert_eq!(info.scale, MAX_SCALE);
        assert_eq!(info.max_scale, MAX_SCALE);
        assert_eq!(info.zoom_percent, 300);
        assert!(info.drag_anchor.is_none());
    }

    #[test]
    fn reset_lands_on_min_scale_when_limits_exclude_one() {
        let mut vp = ViewportController::new(ZoomLimits::new(1.5, 3.0, 0.2));
        assert_eq!(vp.state().scale(), 1.5);
        vp.zoom_in();
        vp.begin_drag(Point::new(0.0, 0.0));
        vp.continue_drag(Point::new(12.0, -8.0));
        vp.reset();
        assert_eq!(vp.state().scale(), 1.5);
        assert_eq!(vp.state().pan(), Vec2::ZERO);
        assert!(vp.state().is_dragging());
        assert!(!vp.state().can_zoom_out(&vp.limits()));
    }
}
