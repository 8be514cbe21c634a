//! Viewport controller: smoothed pan/zoom with momentum.
//!
//! The world-to-screen mapping is centered on the canvas:
//!
//! ```text
//! screen = world * zoom + center + pan
//! world  = (screen - center - pan) / zoom
//! ```
//!
//! Input never writes the rendered transform directly. Every operation moves
//! the *target* transform, and [`ViewportState::advance`] eases the rendered
//! transform toward it once per frame. Drag momentum is added to the target
//! as well, so it passes through the same smoothing before it becomes visible.
//!
//! [`ViewportState`] is a plain value with pure transitions; [`Camera`] owns
//! one together with its [`CameraConfig`] and [`Viewport`] and is what hosts
//! hold on to.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::config::{CameraConfig, ConfigError};
use crate::consts::SETTLE_EPSILON;
use crate::input::{Button, InputSink, WheelDelta};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the rendering surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Screen-space center of the surface.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldRect {
    pub min: Point,
    pub max: Point,
}

impl WorldRect {
    /// Whether a circle at `center` with `radius` overlaps this rectangle.
    #[must_use]
    pub fn intersects_circle(&self, center: Point, radius: f64) -> bool {
        center.x + radius >= self.min.x
            && center.x - radius <= self.max.x
            && center.y + radius >= self.min.y
            && center.y - radius <= self.max.y
    }
}

/// Snapshot of the rendered transform.
///
/// `pan_x` / `pan_y` are screen pixels relative to the canvas center.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0 }
    }
}

impl Transform {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, viewport: Viewport, screen: Point) -> Point {
        let center = viewport.center();
        Point {
            x: (screen.x - center.x - self.pan_x) / self.zoom,
            y: (screen.y - center.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, viewport: Viewport, world: Point) -> Point {
        let center = viewport.center();
        Point {
            x: world.x * self.zoom + center.x + self.pan_x,
            y: world.y * self.zoom + center.y + self.pan_y,
        }
    }

    /// World-space bounds of everything visible on a surface of `viewport` size.
    #[must_use]
    pub fn visible_world_rect(&self, viewport: Viewport) -> WorldRect {
        WorldRect {
            min: self.screen_to_world(viewport, Point::new(0.0, 0.0)),
            max: self.screen_to_world(viewport, Point::new(viewport.width, viewport.height)),
        }
    }
}

/// Which way a discrete zoom command goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Full controller state. Every transition consumes the state and returns
/// the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub target_zoom: f64,
    pub target_pan_x: f64,
    pub target_pan_y: f64,
    pub dragging: bool,
    /// Last raw pointer position seen during the active drag.
    pub last_pointer: Point,
    /// Pan displacement applied per frame once the drag is released.
    pub velocity: Point,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            target_zoom: 1.0,
            target_pan_x: 0.0,
            target_pan_y: 0.0,
            dragging: false,
            last_pointer: Point::default(),
            velocity: Point::default(),
        }
    }
}

impl ViewportState {
    /// The rendered (smoothed) transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform { zoom: self.zoom, pan_x: self.pan_x, pan_y: self.pan_y }
    }

    /// The transform input is steering toward.
    #[must_use]
    pub fn target(&self) -> Transform {
        Transform { zoom: self.target_zoom, pan_x: self.target_pan_x, pan_y: self.target_pan_y }
    }

    /// Wheel zoom anchored at `pointer`.
    ///
    /// `wheel_delta` is the pixel-normalized wheel `deltaY`: positive scrolls
    /// down and zooms out.
    #[must_use]
    pub fn zoom_at_point(self, config: &CameraConfig, viewport: Viewport, wheel_delta: f64, pointer: Point) -> Self {
        let requested = self.target_zoom * (1.0 - wheel_delta * config.zoom_speed);
        self.zoom_target_toward(config, viewport, requested, pointer)
    }

    #[must_use]
    pub fn begin_drag(mut self, pointer: Point) -> Self {
        self.dragging = true;
        self.last_pointer = pointer;
        self.velocity = Point::default();
        self
    }

    #[must_use]
    pub fn update_drag(mut self, config: &CameraConfig, pointer: Point) -> Self {
        if !self.dragging {
            return self;
        }

        let dx = pointer.x - self.last_pointer.x;
        let dy = pointer.y - self.last_pointer.y;
        if dx.abs() >= config.drag_dead_zone_px || dy.abs() >= config.drag_dead_zone_px {
            self.target_pan_x += dx * config.pan_speed;
            self.target_pan_y += dy * config.pan_speed;
            self.velocity = Point::new(dx * config.pan_speed, dy * config.pan_speed);
        }
        self.last_pointer = pointer;
        self
    }

    #[must_use]
    pub fn end_drag(mut self, config: &CameraConfig) -> Self {
        self.dragging = false;
        if !config.release_momentum {
            self.velocity = Point::default();
        }
        self
    }

    /// Zoom toward `pointer` by the fixed double-click factor.
    #[must_use]
    pub fn double_click_zoom(self, config: &CameraConfig, viewport: Viewport, pointer: Point) -> Self {
        let requested = self.target_zoom * config.double_click_factor;
        self.zoom_target_toward(config, viewport, requested, pointer)
    }

    /// Discrete zoom command.
    ///
    /// Centered steps use `center_step_factor` and keep the world point at
    /// the canvas center where it is. Plain steps use `step_factor` and leave
    /// the pan untouched.
    #[must_use]
    pub fn zoom_step(mut self, config: &CameraConfig, direction: ZoomDirection, around_center: bool) -> Self {
        let factor = if around_center { config.center_step_factor } else { config.step_factor };
        let requested = match direction {
            ZoomDirection::In => self.target_zoom * factor,
            ZoomDirection::Out => self.target_zoom / factor,
        };
        let new_zoom = config.clamp_zoom(requested);

        if around_center {
            let center_world_x = -self.target_pan_x / self.target_zoom;
            let center_world_y = -self.target_pan_y / self.target_zoom;
            self.target_pan_x = -center_world_x * new_zoom;
            self.target_pan_y = -center_world_y * new_zoom;
        }
        self.target_zoom = new_zoom;
        self
    }

    /// Steer back to the identity transform. The visible transform follows
    /// over the next frames.
    #[must_use]
    pub fn reset(mut self) -> Self {
        self.target_zoom = 1.0;
        self.target_pan_x = 0.0;
        self.target_pan_y = 0.0;
        self.velocity = Point::default();
        self
    }

    /// One frame of smoothing and momentum.
    #[must_use]
    pub fn advance(mut self, config: &CameraConfig) -> Self {
        let k = config.smoothing;
        self.zoom += (self.target_zoom - self.zoom) * k;
        self.pan_x += (self.target_pan_x - self.pan_x) * k;
        self.pan_y += (self.target_pan_y - self.pan_y) * k;

        if !self.dragging {
            if self.velocity.x.abs() > config.velocity_epsilon || self.velocity.y.abs() > config.velocity_epsilon {
                self.target_pan_x += self.velocity.x;
                self.target_pan_y += self.velocity.y;
                self.velocity.x *= config.friction;
                self.velocity.y *= config.friction;
            } else {
                self.velocity = Point::default();
            }
        }
        self
    }

    /// Whether further frames will still change the rendered transform.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        (self.target_zoom - self.zoom).abs() > SETTLE_EPSILON
            || (self.target_pan_x - self.pan_x).abs() > SETTLE_EPSILON
            || (self.target_pan_y - self.pan_y).abs() > SETTLE_EPSILON
            || self.velocity != Point::default()
    }

    /// Move the target zoom to `requested` (clamped) while keeping the world
    /// point under `pointer` fixed.
    ///
    /// The pan is rescaled by the ratio actually applied, so the anchor stays
    /// exact even when the clamp cuts the requested zoom short.
    fn zoom_target_toward(mut self, config: &CameraConfig, viewport: Viewport, requested: f64, pointer: Point) -> Self {
        let new_zoom = config.clamp_zoom(requested);
        let ratio = new_zoom / self.target_zoom;
        let center = viewport.center();
        let offset_x = pointer.x - center.x;
        let offset_y = pointer.y - center.y;

        self.target_pan_x = self.target_pan_x * ratio - offset_x * (ratio - 1.0);
        self.target_pan_y = self.target_pan_y * ratio - offset_y * (ratio - 1.0);
        self.target_zoom = new_zoom;
        self
    }
}

/// The viewport controller a host owns for one rendering surface.
#[derive(Debug, Clone)]
pub struct Camera {
    state: ViewportState,
    config: CameraConfig,
    viewport: Viewport,
}

impl Default for Camera {
    fn default() -> Self {
        Self { state: ViewportState::default(), config: CameraConfig::default(), viewport: Viewport::default() }
    }
}

impl Camera {
    /// Camera with the default tuning for a `width` x `height` surface.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { viewport: Viewport::new(width, height), ..Self::default() }
    }

    /// Camera with custom tuning.
    ///
    /// # Errors
    ///
    /// Returns the first constraint `config` violates.
    pub fn with_config(config: CameraConfig, width: f64, height: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { state: ViewportState::default(), config, viewport: Viewport::new(width, height) })
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the surface size. The transform is center-relative, so the
    /// current pan and zoom stay visually consistent.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn zoom_at_point(&mut self, wheel_delta: f64, pointer: Point) {
        self.state = self.state.zoom_at_point(&self.config, self.viewport, wheel_delta, pointer);
        log::trace!("wheel zoom -> target {:.3}", self.state.target_zoom);
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        self.state = self.state.begin_drag(pointer);
    }

    pub fn update_drag(&mut self, pointer: Point) {
        self.state = self.state.update_drag(&self.config, pointer);
    }

    pub fn end_drag(&mut self) {
        self.state = self.state.end_drag(&self.config);
    }

    pub fn double_click_zoom(&mut self, pointer: Point) {
        self.state = self.state.double_click_zoom(&self.config, self.viewport, pointer);
    }

    pub fn zoom_step(&mut self, direction: ZoomDirection, around_center: bool) {
        self.state = self.state.zoom_step(&self.config, direction, around_center);
    }

    pub fn reset(&mut self) {
        self.state = self.state.reset();
    }

    /// Call once per rendered frame, before reading the transform.
    pub fn advance(&mut self) {
        self.state = self.state.advance(&self.config);
    }

    #[must_use]
    pub fn current_transform(&self) -> Transform {
        self.state.transform()
    }

    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        self.state.transform().screen_to_world(self.viewport, screen)
    }

    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        self.state.transform().world_to_screen(self.viewport, world)
    }

    /// Rendered zoom as a whole percentage, for readouts.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn zoom_percentage(&self) -> i64 {
        (self.state.zoom * 100.0).round() as i64
    }

    #[must_use]
    pub fn visible_world_rect(&self) -> WorldRect {
        self.state.transform().visible_world_rect(self.viewport)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }
}

impl InputSink for Camera {
    fn on_wheel(&mut self, screen: Point, delta: WheelDelta) {
        // Horizontal scroll is ignored.
        self.zoom_at_point(delta.pixels(self.viewport.height).y, screen);
    }

    fn on_drag_start(&mut self, screen: Point, _button: Button) {
        self.begin_drag(screen);
    }

    fn on_drag_move(&mut self, screen: Point) {
        self.update_drag(screen);
    }

    fn on_drag_end(&mut self, _screen: Point) {
        self.end_drag();
    }

    fn on_double_click(&mut self, screen: Point) {
        self.double_click_zoom(screen);
    }
}
