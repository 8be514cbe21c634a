use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, Transform};
use crate::config::{CameraConfig, ConfigError};
use crate::fps::FpsMeter;
use crate::input::{Button, Command, InputSink, Key, WheelDelta};
use crate::render::{self, FrameView};
use crate::scene::Scene;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Errors raised while binding the engine to a canvas element.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The element has no 2D rendering context.
    #[error("canvas 2d context unavailable")]
    ContextUnavailable,
    /// A browser API call failed.
    #[error("browser call failed: {0}")]
    Js(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Host state between the DOM and the camera.
///
/// Gates pointer input on the chrome-hover flag and the pressed button, turns
/// chrome buttons and shortcuts into camera commands, and runs each frame as
/// FPS tick, `advance`, then transform read.
#[derive(Debug)]
pub struct EngineCore {
    pub camera: Camera,
    pub scene: Scene,
    fps: FpsMeter,
    show_fps: bool,
    /// Pointer is over UI chrome; pointer input other than drag-end is dropped.
    chrome_hovered: bool,
    dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            scene: Scene::default(),
            fps: FpsMeter::new(),
            show_fps: false,
            chrome_hovered: false,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    /// Engine core for a `width` x `height` surface.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` is invalid.
    pub fn new(config: CameraConfig, width: f64, height: f64) -> Result<Self, ConfigError> {
        Ok(Self { camera: Camera::with_config(config, width, height)?, ..Self::default() })
    }

    // --- Surface ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) {
        self.camera.resize(width, height);
        self.dpr = dpr;
        log::debug!("viewport resized to {width}x{height} @ {dpr}x");
    }

    /// Pointer entered (`true`) or left (`false`) UI chrome.
    pub fn set_chrome_hovered(&mut self, hovered: bool) {
        self.chrome_hovered = hovered;
    }

    pub fn set_scene(&mut self, scene: Scene) {
        log::debug!("scene loaded with {} nodes", scene.len());
        self.scene = scene;
    }

    // --- Commands ---

    pub fn apply_command(&mut self, command: Command) {
        log::debug!("command {command:?}");
        match command {
            Command::ToggleFps => self.show_fps = !self.show_fps,
            Command::Zoom { direction, around_center } => self.camera.zoom_step(direction, around_center),
            Command::ResetView => self.camera.reset(),
        }
    }

    /// Run the shortcut bound to `key`, if any. Returns whether it was handled.
    pub fn on_key_down(&mut self, key: &Key) -> bool {
        let Some(command) = Command::from_key(key) else {
            return false;
        };
        self.apply_command(command);
        true
    }

    // --- Frame ---

    /// Advance one frame and return the transform to draw it with.
    pub fn frame(&mut self, now_ms: f64) -> Transform {
        self.fps.tick(now_ms);
        self.camera.advance();
        self.camera.current_transform()
    }

    // --- Queries ---

    #[must_use]
    pub fn show_fps(&self) -> bool {
        self.show_fps
    }

    /// FPS reading to overlay, `None` while hidden or before the first sample.
    #[must_use]
    pub fn fps_overlay(&self) -> Option<u32> {
        if self.show_fps { self.fps.fps() } else { None }
    }

    #[must_use]
    pub fn chrome_hovered(&self) -> bool {
        self.chrome_hovered
    }

    #[must_use]
    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    /// CSS cursor for the canvas element.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        if self.camera.is_dragging() { "grabbing" } else { "grab" }
    }

    #[must_use]
    pub fn zoom_percentage(&self) -> i64 {
        self.camera.zoom_percentage()
    }
}

impl InputSink for EngineCore {
    fn on_wheel(&mut self, screen: Point, delta: WheelDelta) {
        if self.chrome_hovered {
            return;
        }
        self.camera.on_wheel(screen, delta);
    }

    fn on_drag_start(&mut self, screen: Point, button: Button) {
        if self.chrome_hovered || !button.pans() {
            return;
        }
        self.camera.on_drag_start(screen, button);
    }

    fn on_drag_move(&mut self, screen: Point) {
        if self.chrome_hovered {
            return;
        }
        self.camera.on_drag_move(screen);
    }

    fn on_drag_end(&mut self, screen: Point) {
        self.camera.on_drag_end(screen);
    }

    fn on_double_click(&mut self, screen: Point) {
        if self.chrome_hovered {
            return;
        }
        self.camera.on_double_click(screen);
    }
}

/// [`EngineCore`] bound to a canvas element and its 2D context. Sizes the
/// backing store for the device pixel ratio and draws each frame.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Fails if the element has no 2D context or `config` is invalid.
    pub fn new(canvas: HtmlCanvasElement, config: CameraConfig) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(EngineError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::ContextUnavailable)?;
        let width = f64::from(canvas.client_width());
        let height = f64::from(canvas.client_height());
        let core = EngineCore::new(config, width, height)?;
        Ok(Self { canvas, ctx, core })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Update viewport dimensions (CSS pixels) and size the backing store in
    /// device pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.canvas.set_width((width_css * dpr).round().max(0.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(0.0) as u32);
        self.core.resize(width_css, height_css, dpr);
    }

    /// Advance one frame and draw it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        let transform = self.core.frame(now_ms);
        render::draw(
            &self.ctx,
            &FrameView {
                scene: &self.core.scene,
                transform,
                viewport: self.core.camera.viewport(),
                dpr: self.core.dpr(),
                fps: self.core.fps_overlay(),
            },
        )
    }
}
