//! Camera tuning parameters.
//!
//! A [`CameraConfig`] is fixed when a [`crate::camera::Camera`] is built and
//! never changes afterwards. Hosts that want to override a default can parse
//! a partial JSON object with [`CameraConfig::from_json`]; every missing field
//! keeps its value from [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    CENTER_STEP_ZOOM_FACTOR, DOUBLE_CLICK_ZOOM_FACTOR, DRAG_DEAD_ZONE_PX, FRICTION, MAX_ZOOM, MIN_ZOOM, PAN_SPEED,
    SMOOTHING, STEP_ZOOM_FACTOR, VELOCITY_EPSILON, ZOOM_SPEED,
};

/// Errors produced while loading or validating a [`CameraConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON blob could not be parsed into a config.
    #[error("failed to parse camera config: {0}")]
    Parse(#[from] serde_json::Error),
    /// `min_zoom` must be positive and no larger than `max_zoom`.
    #[error("invalid zoom range: min {min}, max {max}")]
    InvalidZoomRange { min: f64, max: f64 },
    /// A scalar parameter lies outside its allowed range.
    #[error("camera config field `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Tuning parameters for the viewport controller.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Fractional zoom change per pixel of wheel delta.
    pub zoom_speed: f64,
    pub pan_speed: f64,
    /// Velocity multiplier applied every frame after release. Must be below 1.
    pub friction: f64,
    /// Interpolation factor toward the target per frame, in `(0, 1]`.
    pub smoothing: f64,
    pub drag_dead_zone_px: f64,
    /// Velocity components at or below this snap to zero. Must be a positive
    /// normal float (at least `f64::MIN_POSITIVE`).
    pub velocity_epsilon: f64,
    pub double_click_factor: f64,
    pub step_factor: f64,
    pub center_step_factor: f64,
    /// Keep the last committed drag velocity on release so the view coasts.
    pub release_momentum: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_speed: ZOOM_SPEED,
            pan_speed: PAN_SPEED,
            friction: FRICTION,
            smoothing: SMOOTHING,
            drag_dead_zone_px: DRAG_DEAD_ZONE_PX,
            velocity_epsilon: VELOCITY_EPSILON,
            double_click_factor: DOUBLE_CLICK_ZOOM_FACTOR,
            step_factor: STEP_ZOOM_FACTOR,
            center_step_factor: CENTER_STEP_ZOOM_FACTOR,
            release_momentum: false,
        }
    }
}

impl CameraConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// any error [`CameraConfig::validate`] reports.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the camera relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("zoom_speed", self.zoom_speed),
            ("pan_speed", self.pan_speed),
            ("friction", self.friction),
            ("smoothing", self.smoothing),
            ("drag_dead_zone_px", self.drag_dead_zone_px),
            ("velocity_epsilon", self.velocity_epsilon),
            ("double_click_factor", self.double_click_factor),
            ("step_factor", self.step_factor),
            ("center_step_factor", self.center_step_factor),
        ];
        if let Some((field, value)) = scalars.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::OutOfRange { field, value });
        }

        if self.min_zoom <= 0.0 || self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvalidZoomRange { min: self.min_zoom, max: self.max_zoom });
        }
        if !(0.0..1.0).contains(&self.friction) {
            return Err(ConfigError::OutOfRange { field: "friction", value: self.friction });
        }
        if self.smoothing <= 0.0 || self.smoothing > 1.0 {
            return Err(ConfigError::OutOfRange { field: "smoothing", value: self.smoothing });
        }

        let non_negative = [
            ("zoom_speed", self.zoom_speed),
            ("drag_dead_zone_px", self.drag_dead_zone_px),
        ];
        if let Some((field, value)) = non_negative.into_iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::OutOfRange { field, value });
        }

        let positive = [
            ("pan_speed", self.pan_speed),
            ("double_click_factor", self.double_click_factor),
            ("step_factor", self.step_factor),
            ("center_step_factor", self.center_step_factor),
        ];
        if let Some((field, value)) = positive.into_iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::OutOfRange { field, value });
        }

        // Friction decay can stall on subnormals, so momentum only ends if
        // epsilon is a positive normal float.
        if self.velocity_epsilon < 0.0 || !self.velocity_epsilon.is_normal() {
            return Err(ConfigError::OutOfRange { field: "velocity_epsilon", value: self.velocity_epsilon });
        }

        Ok(())
    }

    /// Clamp a zoom value into `[min_zoom, max_zoom]`. NaN passes through
    /// unchanged so bad input stays visible.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        if zoom.is_nan() {
            return zoom;
        }
        zoom.max(self.min_zoom).min(self.max_zoom)
    }
}
