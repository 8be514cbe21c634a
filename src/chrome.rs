//! Page chrome: the top bar with the title, the FPS toggle, the zoom buttons
//! and the zoom readout.
//!
//! Labels and layout constants are plain functions so they can be tested
//! natively; [`Chrome::build`] turns them into DOM nodes.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

use canvas::camera::ZoomDirection;
use canvas::input::Command;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement};

use crate::error::AppError;

/// Height of the top bar in CSS pixels. The canvas fills the rest of the window.
pub const TOP_BAR_HEIGHT_PX: u32 = 56;

pub const TITLE: &str = "Tree of Life Visualizer";

/// A chrome button that issues one engine command when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: &'static str,
    /// Tooltip and accessible name.
    pub title: &'static str,
    pub command: Command,
}

/// Zoom controls, left to right. Buttons zoom around the canvas center.
pub const COMMAND_BUTTONS: [ButtonSpec; 3] = [
    ButtonSpec {
        label: "+",
        title: "Zoom in",
        command: Command::Zoom { direction: ZoomDirection::In, around_center: true },
    },
    ButtonSpec {
        label: "\u{2212}",
        title: "Zoom out",
        command: Command::Zoom { direction: ZoomDirection::Out, around_center: true },
    },
    ButtonSpec { label: "Reset", title: "Reset view", command: Command::ResetView },
];

const BAR_STYLE: &str = "position:fixed;top:0;left:0;right:0;display:flex;align-items:center;\
gap:8px;padding:0 16px;box-sizing:border-box;background:#111;color:#eee;\
font:14px sans-serif;border-bottom:1px solid #333;z-index:1";

const BUTTON_STYLE: &str = "background:#222;color:#eee;border:1px solid #444;border-radius:4px;\
padding:4px 10px;cursor:pointer;font:inherit";

#[must_use]
pub fn fps_label(show_fps: bool) -> &'static str {
    if show_fps { "FPS ON" } else { "FPS OFF" }
}

#[must_use]
pub fn zoom_label(percent: i64) -> String {
    format!("{percent}%")
}

/// Inline style for the top bar element.
#[must_use]
pub fn bar_style() -> String {
    format!("{BAR_STYLE};height:{TOP_BAR_HEIGHT_PX}px")
}

/// Inline style for the canvas: fills the window below the top bar.
#[must_use]
pub fn canvas_style() -> String {
    format!(
        "display:block;position:fixed;left:0;top:{TOP_BAR_HEIGHT_PX}px;width:100vw;\
         height:calc(100vh - {TOP_BAR_HEIGHT_PX}px);touch-action:none;cursor:grab"
    )
}

/// DOM handles for the chrome the frame loop and listeners need.
pub struct Chrome {
    pub bar: HtmlElement,
    pub fps_button: HtmlButtonElement,
    pub zoom_readout: HtmlElement,
    pub command_buttons: Vec<(HtmlButtonElement, Command)>,
}

impl Chrome {
    /// Build the top bar and append it to `document.body`.
    ///
    /// # Errors
    ///
    /// Fails if the document has no body or element creation fails.
    pub fn build(document: &Document) -> Result<Self, AppError> {
        let body = document.body().ok_or_else(|| AppError::Dom("document has no body".into()))?;

        let bar: HtmlElement = create(document, "header")?;
        bar.set_attribute("style", &bar_style())?;

        let title: HtmlElement = create(document, "h1")?;
        title.set_attribute("style", "font-size:18px;font-weight:600;margin:0 auto 0 0")?;
        title.set_text_content(Some(TITLE));
        bar.append_child(&title)?;

        let fps_button = button(document, fps_label(false), "Toggle FPS counter")?;
        bar.append_child(&fps_button)?;

        let mut command_buttons = Vec::with_capacity(COMMAND_BUTTONS.len());
        for spec in COMMAND_BUTTONS {
            let el = button(document, spec.label, spec.title)?;
            bar.append_child(&el)?;
            command_buttons.push((el, spec.command));
        }

        let zoom_readout: HtmlElement = create(document, "span")?;
        zoom_readout.set_attribute("style", "min-width:48px;text-align:right;font-variant-numeric:tabular-nums")?;
        zoom_readout.set_text_content(Some(&zoom_label(100)));
        bar.append_child(&zoom_readout)?;

        body.append_child(&bar)?;
        Ok(Self { bar, fps_button, zoom_readout, command_buttons })
    }

    /// Sync the FPS toggle label.
    pub fn set_fps_shown(&self, show_fps: bool) {
        set_text_if_changed(&self.fps_button, fps_label(show_fps));
    }

    pub fn set_zoom_percentage(&self, percent: i64) {
        set_text_if_changed(&self.zoom_readout, &zoom_label(percent));
    }
}

fn set_text_if_changed(el: &HtmlElement, text: &str) {
    if el.text_content().as_deref() != Some(text) {
        el.set_text_content(Some(text));
    }
}

fn button(document: &Document, label: &str, title: &str) -> Result<HtmlButtonElement, AppError> {
    let el: HtmlButtonElement = create(document, "button")?;
    el.set_type("button");
    el.set_attribute("style", BUTTON_STYLE)?;
    el.set_attribute("title", title)?;
    el.set_attribute("aria-label", title)?;
    el.set_text_content(Some(label));
    Ok(el)
}

pub(crate) fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, AppError> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| AppError::Dom(format!("<{tag}> has an unexpected element type")))
}
