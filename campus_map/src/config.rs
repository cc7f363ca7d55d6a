// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables of the map widget, loadable from a scene document.

use campus_view::{MAX_SCALE, MIN_SCALE, ZOOM_STEP, ZoomLimits};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Zoom bounds as written in a scene document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Smallest scale.
    pub min_scale: f64,
    /// Largest scale.
    pub max_scale: f64,
    /// Scale change per zoom button press.
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            step: ZOOM_STEP,
        }
    }
}

impl ZoomConfig {
    /// Converts to [`ZoomLimits`], rejecting non-finite or non-positive values.
    pub fn to_limits(&self) -> Result<ZoomLimits, ConfigError> {
        ZoomLimits::try_new(self.min_scale, self.max_scale, self.step).map_err(ConfigError::Zoom)
    }
}

/// Falls back to the default limits for values [`ZoomConfig::to_limits`] rejects.
impl From<ZoomConfig> for ZoomLimits {
    fn from(config: ZoomConfig) -> Self {
        Self::new(config.min_scale, config.max_scale, config.step)
    }
}

/// Widget configuration.
///
/// Every field has a default, so a scene document may omit the whole block
/// or any part of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Zoom bounds and step.
    pub zoom: ZoomConfig,
    /// Width of the scene in scene units (the SVG view box).
    pub width: f64,
    /// Height of the scene in scene units.
    pub height: f64,
    /// Background fill, as a CSS color string.
    pub background: String,
    /// Extra distance, in scene units, that still counts as a hit on a shape.
    pub hit_tolerance: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomConfig::default(),
            width: 950.0,
            height: 900.0,
            background: String::from("#D7CCC8"),
            hit_tolerance: 0.0,
        }
    }
}

impl MapConfig {
    /// Returns the zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.zoom.into()
    }

    /// Checks the zoom block, the hit tolerance and the scene extent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zoom.to_limits()?;
        if !(self.hit_tolerance.is_finite() && self.hit_tolerance >= 0.0) {
            return Err(ConfigError::HitTolerance(self.hit_tolerance));
        }
        let extent_ok = [self.width, self.height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0);
        if !extent_ok {
            return Err(ConfigError::Extent {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use campus_view::ZoomLimitsError;

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: MapConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MapConfig::default());
        assert_eq!(config.zoom_limits(), ZoomLimits::default());
    }

    #[test]
    fn partial_zoom_block_overrides_only_given_fields() {
        let config: MapConfig =
            serde_json::from_str(r#"{ "zoom": { "max_scale": 4.0 } }"#).unwrap();
        let limits = config.zoom_limits();
        assert_eq!(limits.max_scale(), 4.0);
        assert_eq!(limits.min_scale(), MIN_SCALE);
        assert_eq!(limits.step(), ZOOM_STEP);
        assert_eq!(config.width, 950.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_zoom_blocks() {
        let mut config = MapConfig::default();
        config.zoom.min_scale = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Zoom(ZoomLimitsError::NonPositiveScale(0.0)))
        );

        config.zoom = ZoomConfig {
            step: 0.0,
            ..ZoomConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Zoom(ZoomLimitsError::ZeroStep))
        );

        config.zoom = ZoomConfig {
            max_scale: f64::NAN,
            ..ZoomConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Zoom(ZoomLimitsError::NonFinite))
        );
        // The lenient conversion still yields usable limits.
        assert_eq!(config.zoom_limits(), ZoomLimits::default());
    }

    #[test]
    fn validate_rejects_bad_tolerance_and_extent() {
        let config = MapConfig {
            hit_tolerance: -1.0,
            ..MapConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::HitTolerance(-1.0)));

        let config = MapConfig {
            width: 0.0,
            ..MapConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Extent {
                width: 0.0,
                height: 900.0
            })
        );
    }
}
