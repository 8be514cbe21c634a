//! Browser host: owns the engine, the chrome and every DOM listener, and
//! drives the animation frame loop.
//!
//! The app is shared as `Rc<App>`. Listeners and the pending frame hold only
//! a `Weak` back-reference, so dropping the app detaches everything.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use canvas::camera::Point;
use canvas::config::CameraConfig;
use canvas::engine::{Engine, EngineCore};
use canvas::input::{Button, Command, DeltaMode, InputSink, Key, WheelDelta};
use canvas::scene::Scene;
use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo_render::{AnimationFrame, request_animation_frame};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, PointerEvent, WheelEvent, Window,
};

use crate::chrome::{self, Chrome};
use crate::error::AppError;

/// Element id of the canvas. A page may provide its own (for example to set
/// `data-camera`); otherwise one is created.
const CANVAS_ID: &str = "lifetree-canvas";

/// Attribute holding optional camera overrides as a JSON object.
const CAMERA_ATTR: &str = "data-camera";

const SCENE_SEED: u64 = 0x1f3e_a7c1;
const SCENE_NODES: usize = 400;

pub struct App {
    window: Window,
    canvas: HtmlCanvasElement,
    chrome: Chrome,
    engine: RefCell<Engine>,
    listeners: RefCell<Vec<EventListener>>,
    frame: RefCell<Option<AnimationFrame>>,
    cursor: Cell<&'static str>,
}

impl App {
    /// Build the page, bind the engine and start the frame loop.
    ///
    /// # Errors
    ///
    /// Fails if the page has no window or document, element creation fails,
    /// or the canvas has no 2D context.
    pub fn mount() -> Result<Rc<Self>, AppError> {
        let window = web_sys::window().ok_or(AppError::NoWindow)?;
        let document = window.document().ok_or(AppError::NoDocument)?;

        let chrome = Chrome::build(&document)?;
        let canvas = mount_canvas(&document)?;
        let mut engine = Engine::new(canvas.clone(), camera_config(&canvas))?;
        engine.core.set_scene(Scene::placeholder(SCENE_SEED, SCENE_NODES));

        let app = Rc::new(Self {
            window,
            canvas,
            chrome,
            engine: RefCell::new(engine),
            listeners: RefCell::new(Vec::new()),
            frame: RefCell::new(None),
            cursor: Cell::new("grab"),
        });
        app.sync_viewport();
        app.install_listeners();
        app.schedule_frame();
        Ok(app)
    }

    // --- Listeners ---

    fn install_listeners(self: &Rc<Self>) {
        let canvas: &EventTarget = &self.canvas;
        let window: &EventTarget = &self.window;
        let bar: &EventTarget = &self.chrome.bar;

        let mut listeners = vec![
            listen(self, canvas, "wheel", App::on_wheel),
            listen(self, canvas, "pointerdown", App::on_pointer_down),
            listen(self, canvas, "pointermove", App::on_pointer_move),
            listen(self, canvas, "dblclick", App::on_double_click),
            // Drag end is caught on the window so a release anywhere ends the drag.
            listen(self, window, "pointerup", App::on_pointer_up),
            listen(self, window, "pointercancel", App::on_pointer_up),
            listen(self, window, "keydown", App::on_key_down),
            listen(self, window, "resize", |app, _| app.sync_viewport()),
            listen(self, bar, "mouseenter", |app, _| {
                app.with_core(|core| core.set_chrome_hovered(true));
            }),
            listen(self, bar, "mouseleave", |app, _| {
                app.with_core(|core| core.set_chrome_hovered(false));
            }),
            listen(self, &self.chrome.fps_button, "click", |app, _| app.apply_command(Command::ToggleFps)),
        ];
        for (button, command) in &self.chrome.command_buttons {
            let command = *command;
            listeners.push(listen(self, button, "click", move |app, _| app.apply_command(command)));
        }

        *self.listeners.borrow_mut() = listeners;
    }

    fn on_wheel(&self, event: &Event) {
        let Some(ev) = event.dyn_ref::<WheelEvent>() else {
            return;
        };
        ev.prevent_default();
        let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y(), mode: DeltaMode::from_dom(ev.delta_mode()) };
        let point = self.local_point(ev);
        self.with_core(|core| core.on_wheel(point, delta));
    }

    fn on_pointer_down(&self, event: &Event) {
        let Some(ev) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let point = self.local_point(ev);
        let button = Button::from_dom(ev.button());
        let dragging = self
            .with_core(|core| {
                core.on_drag_start(point, button);
                core.camera.is_dragging()
            })
            .unwrap_or(false);
        if dragging {
            if let Err(err) = self.canvas.set_pointer_capture(ev.pointer_id()) {
                log::debug!("pointer capture refused: {err:?}");
            }
        }
    }

    fn on_pointer_move(&self, event: &Event) {
        let Some(ev) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let point = self.local_point(ev);
        self.with_core(|core| core.on_drag_move(point));
    }

    fn on_pointer_up(&self, event: &Event) {
        let Some(ev) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let point = self.local_point(ev);
        self.with_core(|core| core.on_drag_end(point));
    }

    fn on_double_click(&self, event: &Event) {
        let Some(ev) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        ev.prevent_default();
        let point = self.local_point(ev);
        self.with_core(|core| core.on_double_click(point));
    }

    fn on_key_down(&self, event: &Event) {
        let Some(ev) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        // Leave browser shortcuts such as Ctrl-+ alone.
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let key = Key(ev.key());
        if self.with_core(|core| core.on_key_down(&key)).unwrap_or(false) {
            ev.prevent_default();
        }
    }

    fn apply_command(&self, command: Command) {
        self.with_core(|core| core.apply_command(command));
    }

    // --- Frame loop ---

    fn schedule_frame(self: &Rc<Self>) {
        let app = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(app) = app.upgrade() {
                app.on_frame(timestamp);
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        let readout = match self.engine.try_borrow_mut() {
            Ok(mut engine) => {
                if let Err(err) = engine.frame(timestamp) {
                    log::error!("frame render failed: {err:?}");
                }
                Some((engine.core.show_fps(), engine.core.zoom_percentage(), engine.core.cursor()))
            }
            Err(_) => None,
        };

        if let Some((show_fps, zoom, cursor)) = readout {
            self.chrome.set_fps_shown(show_fps);
            self.chrome.set_zoom_percentage(zoom);
            self.set_cursor(cursor);
        }
        self.schedule_frame();
    }

    // --- Helpers ---

    fn sync_viewport(&self) {
        let width = f64::from(self.canvas.client_width()).max(0.0);
        let height = f64::from(self.canvas.client_height()).max(0.0);
        let dpr = self.window.device_pixel_ratio().max(1.0);
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => engine.set_viewport(width, height, dpr),
            Err(_) => log::warn!("engine busy, resize dropped"),
        }
    }

    /// Run `f` against the engine core. Returns `None` if the engine is
    /// already borrowed, which only happens on re-entrant dispatch.
    fn with_core<R>(&self, f: impl FnOnce(&mut EngineCore) -> R) -> Option<R> {
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => Some(f(&mut engine.core)),
            Err(_) => {
                log::warn!("engine busy, input dropped");
                None
            }
        }
    }

    /// Pointer position relative to the canvas' top-left corner in CSS pixels.
    fn local_point(&self, ev: &MouseEvent) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top())
    }

    fn set_cursor(&self, cursor: &'static str) {
        if self.cursor.replace(cursor) == cursor {
            return;
        }
        if let Err(err) = self.canvas.style().set_property("cursor", cursor) {
            log::debug!("cursor update failed: {err:?}");
        }
    }
}

/// Attach `handler` to `event` on `target`. Listeners are non-passive so
/// handlers may call `preventDefault`.
fn listen(
    app: &Rc<App>,
    target: &EventTarget,
    event: &'static str,
    handler: impl Fn(&App, &Event) + 'static,
) -> EventListener {
    let app: Weak<App> = Rc::downgrade(app);
    let options = EventListenerOptions { phase: EventListenerPhase::Bubble, passive: false };
    EventListener::new_with_options(target, event, options, move |event| {
        if let Some(app) = app.upgrade() {
            handler(&app, event);
        }
    })
}

/// Find the page's canvas or create one below the top bar.
fn mount_canvas(document: &Document) -> Result<HtmlCanvasElement, AppError> {
    let canvas = match document.get_element_by_id(CANVAS_ID) {
        Some(el) => el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::Dom(format!("#{CANVAS_ID} is not a canvas")))?,
        None => {
            let canvas: HtmlCanvasElement = chrome::create(document, "canvas")?;
            canvas.set_id(CANVAS_ID);
            let body = document.body().ok_or_else(|| AppError::Dom("document has no body".into()))?;
            body.append_child(&canvas)?;
            canvas
        }
    };
    canvas.set_attribute("style", &chrome::canvas_style())?;
    Ok(canvas)
}

/// Camera tuning from the canvas' `data-camera` attribute. Invalid overrides
/// are reported and the defaults used instead.
fn camera_config(canvas: &HtmlCanvasElement) -> CameraConfig {
    let Some(json) = canvas.get_attribute(CAMERA_ATTR) else {
        return CameraConfig::default();
    };
    match CameraConfig::from_json(&json) {
        Ok(config) => {
            log::debug!("camera config from {CAMERA_ATTR}: {config:?}");
            config
        }
        Err(err) => {
            log::warn!("ignoring {CAMERA_ATTR}: {err}");
            CameraConfig::default()
        }
    }
}
