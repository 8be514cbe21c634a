//! Canvas viewport and rendering engine for the tree-of-life viewer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! navigable canvas: translating raw pointer input into a smoothly animated
//! pan/zoom transform, keeping the placeholder scene, and rendering it each
//! frame. The host app is responsible only for building the page chrome,
//! wiring DOM events to the engine's [`input::InputSink`], and driving the
//! frame loop.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`camera`] | Viewport controller: smoothing, momentum, coordinate conversions |
//! | [`config`] | Camera tuning parameters and validation |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`input`] | Input event types, chrome commands, and the [`input::InputSink`] seam |
//! | [`scene`] | Placeholder node graph |
//! | [`fps`] | Frame rate meter for the FPS readout |
//! | [`render`] | Scene rendering to a 2D context |
//! | [`consts`] | Shared numeric constants (zoom limits, friction, etc.) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod fps;
pub mod input;
pub mod render;
pub mod scene;
