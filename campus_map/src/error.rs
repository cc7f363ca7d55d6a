// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use campus_scene::SceneError;
use campus_view::ZoomLimitsError;
use thiserror::Error;

/// Error loading a scene document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document is not valid JSON or does not match the schema.
    #[error("invalid scene document: {0}")]
    Json(#[from] serde_json::Error),

    /// A shape color could not be parsed.
    #[error("shape `{id}` has invalid color `{value}`")]
    Color {
        /// Offending shape.
        id: String,
        /// The color text as written.
        value: String,
    },

    /// The shape table failed validation.
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// The `config` block failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Defect in a [`MapConfig`](crate::MapConfig).
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The zoom block was rejected.
    #[error("zoom: {0}")]
    Zoom(#[from] ZoomLimitsError),

    /// The hit tolerance is negative or not finite.
    #[error("hit tolerance must be finite and non-negative, got {0}")]
    HitTolerance(f64),

    /// The scene extent is empty or not finite.
    #[error("scene extent must be finite and positive, got {width}x{height}")]
    Extent {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
}
