//! Input model: pointer buttons, wheel deltas, keys, chrome commands, and the
//! [`InputSink`] seam the host wires native events into.
//!
//! Nothing here depends on a browser. The web host converts DOM events into
//! these types and calls an [`InputSink`]; the camera and the engine core are
//! the two sinks.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::{Point, ZoomDirection};
use crate::consts::WHEEL_LINE_HEIGHT_PX;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }

    /// Whether pressing this button starts a pan.
    #[must_use]
    pub fn pans(self) -> bool {
        matches!(self, Self::Primary | Self::Middle)
    }
}

/// Unit a wheel delta was reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    /// Map a DOM `WheelEvent.deltaMode` code.
    #[must_use]
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount. Normalized with `dy` but not used for
    /// navigation: only vertical scroll zooms, and there is no wheel pan.
    pub dx: f64,
    /// Vertical scroll amount (positive = down).
    pub dy: f64,
    pub mode: DeltaMode,
}

impl WheelDelta {
    /// A delta already expressed in pixels.
    #[must_use]
    pub fn pixels_xy(dx: f64, dy: f64) -> Self {
        Self { dx, dy, mode: DeltaMode::Pixel }
    }

    /// Normalize to pixels. Line deltas use a fixed line height, page deltas
    /// one `page_height`.
    #[must_use]
    pub fn pixels(&self, page_height: f64) -> Point {
        let scale = match self.mode {
            DeltaMode::Pixel => 1.0,
            DeltaMode::Line => WHEEL_LINE_HEIGHT_PX,
            DeltaMode::Page => page_height,
        };
        Point::new(self.dx * scale, self.dy * scale)
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"+"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Discrete commands issued by chrome buttons and keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleFps,
    Zoom { direction: ZoomDirection, around_center: bool },
    ResetView,
}

impl Command {
    /// Keyboard shortcut mapping. Keyboard zoom uses plain steps.
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key.0.as_str() {
            "+" | "=" => Some(Self::Zoom { direction: ZoomDirection::In, around_center: false }),
            "-" | "_" => Some(Self::Zoom { direction: ZoomDirection::Out, around_center: false }),
            "0" => Some(Self::ResetView),
            "f" | "F" => Some(Self::ToggleFps),
            _ => None,
        }
    }
}

/// Receiver for raw pointer input, in screen coordinates relative to the
/// canvas origin.
pub trait InputSink {
    fn on_wheel(&mut self, screen: Point, delta: WheelDelta);
    fn on_drag_start(&mut self, screen: Point, button: Button);
    fn on_drag_move(&mut self, screen: Point);
    /// Must always be delivered, even when other input is being suppressed,
    /// or the sink is left stuck mid-drag.
    fn on_drag_end(&mut self, screen: Point);
    fn on_double_click(&mut self, screen: Point);
}
