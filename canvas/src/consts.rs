//! Shared numeric constants for the canvas crate.
//!
//! These are the defaults behind [`crate::config::CameraConfig`]; the camera
//! itself always reads the values through its config.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom factor the camera will ever reach.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor the camera will ever reach.
pub const MAX_ZOOM: f64 = 10.0;

/// Fractional zoom change per pixel of wheel delta.
pub const ZOOM_SPEED: f64 = 0.003;

/// Zoom multiplier applied by a double-click.
pub const DOUBLE_CLICK_ZOOM_FACTOR: f64 = 2.0;

/// Zoom multiplier for plain zoom-in / zoom-out steps.
pub const STEP_ZOOM_FACTOR: f64 = 1.2;

/// Zoom multiplier for zoom steps that keep the canvas center fixed.
pub const CENTER_STEP_ZOOM_FACTOR: f64 = 1.5;

// ── Pan and momentum ────────────────────────────────────────────

/// Pan distance per pixel of pointer drag.
pub const PAN_SPEED: f64 = 1.0;

/// Per-frame velocity multiplier once a drag has been released.
pub const FRICTION: f64 = 0.92;

/// Velocity components at or below this magnitude snap to zero.
pub const VELOCITY_EPSILON: f64 = 0.1;

/// Pointer moves smaller than this on both axes are treated as jitter.
pub const DRAG_DEAD_ZONE_PX: f64 = 2.0;

// ── Smoothing ───────────────────────────────────────────────────

/// Fraction of the remaining distance to target covered per frame.
pub const SMOOTHING: f64 = 0.15;

/// Distance to target below which the smoothed transform counts as settled.
pub const SETTLE_EPSILON: f64 = 1e-6;

// ── Input normalization ─────────────────────────────────────────

/// Pixels per line for wheel events reported in line mode.
pub const WHEEL_LINE_HEIGHT_PX: f64 = 16.0;

// ── Frame metering ──────────────────────────────────────────────

/// Window over which frames are counted before the FPS readout updates.
pub const FPS_SAMPLE_WINDOW_MS: f64 = 1000.0;
