//! Rendering: draws the scene to a 2D context through the camera transform.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the scene and the camera transform and
//! produces pixels. It does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::frame`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Transform, Viewport};
use crate::scene::Scene;

/// Canvas clear color (gray 20).
const BACKGROUND: &str = "rgb(20, 20, 20)";

/// Edge stroke width in screen pixels.
const EDGE_WIDTH_PX: f64 = 1.5;

/// Node outline width in screen pixels.
const OUTLINE_WIDTH_PX: f64 = 1.0;

/// Top-left corner of the FPS readout in screen pixels.
const FPS_TEXT_POS: (f64, f64) = (10.0, 10.0);

/// Read-only inputs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub scene: &'a Scene,
    pub transform: Transform,
    pub viewport: Viewport,
    pub dpr: f64,
    /// FPS reading to overlay, or `None` when the readout is hidden.
    pub fps: Option<u32>,
}

/// Draw one full frame: background, world content, then screen-space overlay.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, view: &FrameView<'_>) -> Result<(), JsValue> {
    let FrameView { scene, transform, viewport, dpr, fps } = *view;
    let center = viewport.center();

    // Layer 1: clear in screen space.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);

    // Layer 2: world content, centered scale + translate.
    ctx.save();
    ctx.translate(center.x + transform.pan_x, center.y + transform.pan_y)?;
    ctx.scale(transform.zoom, transform.zoom)?;
    draw_scene(ctx, scene, transform, viewport)?;
    ctx.restore();

    // Layer 3: overlay.
    if let Some(fps) = fps {
        draw_fps(ctx, fps)?;
    }

    Ok(())
}

fn draw_scene(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    transform: Transform,
    viewport: Viewport,
) -> Result<(), JsValue> {
    let visible = transform.visible_world_rect(viewport);

    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.25)");
    ctx.set_line_width(EDGE_WIDTH_PX / transform.zoom);
    ctx.begin_path();
    for (from, to) in scene.edges() {
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
    }
    ctx.stroke();

    ctx.set_line_width(OUTLINE_WIDTH_PX / transform.zoom);
    ctx.set_stroke_style_str("rgba(0, 0, 0, 0.6)");
    for node in scene.nodes() {
        if !visible.intersects_circle(node.position, node.radius) {
            continue;
        }
        ctx.set_fill_style_str(&format!("hsl({:.0}, 70%, 60%)", node.hue));
        ctx.begin_path();
        ctx.arc(node.position.x, node.position.y, node.radius, 0.0, TAU)?;
        ctx.fill();
        ctx.stroke();
    }

    Ok(())
}

fn draw_fps(ctx: &CanvasRenderingContext2d, fps: u32) -> Result<(), JsValue> {
    ctx.set_fill_style_str("#fff");
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.set_font("14px sans-serif");
    ctx.fill_text(&format!("FPS: {fps}"), FPS_TEXT_POS.0, FPS_TEXT_POS.1)
}
