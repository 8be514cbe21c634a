//! # lifetree
//!
//! Browser entry point for the Tree of Life viewer. Builds the page chrome
//! (top bar, FPS toggle, zoom buttons and readout), mounts the canvas engine
//! from the `canvas` crate, routes DOM events into it and drives the
//! animation frame loop.
//!
//! All navigation logic lives in `canvas`; this crate only wires the browser
//! to it.

mod app;
pub mod chrome;
pub mod error;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::app::App;

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// WASM entry point: install logging, mount the viewer and keep it alive for
/// the lifetime of the page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("lifetree: logger already installed"));
    }

    match App::mount() {
        Ok(app) => {
            log::info!("tree of life viewer mounted");
            APP.with(|slot| *slot.borrow_mut() = Some(app));
        }
        Err(err) => log::error!("failed to mount viewer: {err}"),
    }
}
