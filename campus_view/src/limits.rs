// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Smallest scale reachable with the zoom-out button.
pub const MIN_SCALE: f64 = 0.5;

/// Largest scale reachable with the zoom-in button.
pub const MAX_SCALE: f64 = 3.0;

/// Amount added to or subtracted from the scale by one zoom button press.
pub const ZOOM_STEP: f64 = 0.2;

/// Zoom bounds and step size used by [`crate::ViewportState`].
///
/// These are the only tunables of the viewport. They are passed into the zoom
/// operations rather than baked into them, so a caller can change them (for
/// example from a scene document) without touching the update logic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min_scale: f64,
    max_scale: f64,
    step: f64,
}

impl ZoomLimits {
    /// Limits built from [`MIN_SCALE`], [`MAX_SCALE`] and [`ZOOM_STEP`].
    pub const DEFAULT: Self = Self {
        min_scale: MIN_SCALE,
        max_scale: MAX_SCALE,
        step: ZOOM_STEP,
    };

    /// Creates zoom limits, falling back to [`ZoomLimits::DEFAULT`] if the
    /// values are rejected by [`ZoomLimits::try_new`].
    #[must_use]
    pub fn new(min_scale: f64, max_scale: f64, step: f64) -> Self {
        Self::try_new(min_scale, max_scale, step).unwrap_or(Self::DEFAULT)
    }

    /// Creates zoom limits.
    ///
    /// The range is normalized so that `min_scale <= max_scale`, and the step
    /// is taken by magnitude. All values must be finite, and both the minimum
    /// scale and the step must be positive.
    pub fn try_new(min_scale: f64, max_scale: f64, step: f64) -> Result<Self, ZoomLimitsError> {
        if !(min_scale.is_finite() && max_scale.is_finite() && step.is_finite()) {
            return Err(ZoomLimitsError::NonFinite);
        }
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        if min_scale <= 0.0 {
            return Err(ZoomLimitsError::NonPositiveScale(min_scale));
        }
        let step = step.abs();
        if step == 0.0 {
            return Err(ZoomLimitsError::ZeroStep);
        }
        Ok(Self {
            min_scale,
            max_scale,
            step,
        })
    }

    /// Returns the minimum scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the maximum scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Returns the zoom step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reason [`ZoomLimits::try_new`] rejected its arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomLimitsError {
    /// A bound or the step is NaN or infinite.
    NonFinite,
    /// The smaller bound is zero or negative.
    NonPositiveScale(f64),
    /// The step is zero.
    ZeroStep,
}

impl fmt::Display for ZoomLimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("zoom limits must be finite"),
            Self::NonPositiveScale(scale) => {
                write!(f, "minimum scale must be positive, got {scale}")
            }
            Self::ZeroStep => f.write_str("zoom step must be non-zero"),
        }
    }
}

impl core::error::Error for ZoomLimitsError {}
