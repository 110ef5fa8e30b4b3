//! Browser driver
//!
//! Draws into a `CanvasRenderingContext2d` and drives the clock with
//! `setTimeout`, one pending timeout at a time.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{Color, SimulationConfig};
use crate::render::Renderer;
use crate::sim::SimulationClock;

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Renderer over a canvas looked up by element id
///
/// The context is acquired lazily; until the canvas exists the renderer reports
/// itself unavailable and ticks are skipped.
pub struct CanvasRenderer {
    canvas_id: String,
    width: f64,
    height: f64,
    context: Option<CanvasRenderingContext2d>,
}

impl CanvasRenderer {
    pub fn new(canvas_id: &str, width: f64, height: f64) -> Self {
        Self {
            canvas_id: canvas_id.to_string(),
            width,
            height,
            context: None,
        }
    }

    /// Try to find the canvas and its 2D context if not done yet
    pub fn acquire(&mut self) {
        if self.context.is_some() {
            return;
        }

        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&self.canvas_id))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            return;
        };

        canvas.set_width(self.width as u32);
        canvas.set_height(self.height as u32);

        self.context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());

        if self.context.is_some() {
            log::info!("Canvas '{}' ready ({}x{})", self.canvas_id, self.width, self.height);
        }
    }
}

impl Renderer for CanvasRenderer {
    fn is_ready(&self) -> bool {
        self.context.is_some()
    }

    fn clear(&mut self) {
        if let Some(ctx) = &self.context {
            ctx.clear_rect(0.0, 0.0, self.width, self.height);
        }
    }

    fn draw_dot(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        if let Some(ctx) = &self.context {
            ctx.set_stroke_style_str(&color.to_css());
            ctx.stroke_rect(x, y, width, height);
        }
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, opacity: f64) {
        if let Some(ctx) = &self.context {
            ctx.set_stroke_style_str(&color.to_css_alpha(opacity));
            ctx.begin_path();
            ctx.move_to(x1, y1);
            ctx.line_to(x2, y2);
            ctx.stroke();
        }
    }
}

struct App {
    clock: SimulationClock,
    renderer: CanvasRenderer,
    /// Id of the pending `setTimeout`, if any
    timeout_id: Option<i32>,
}

/// Linked dots animation bound to a canvas element
#[wasm_bindgen]
pub struct LinkedDots {
    app: Rc<RefCell<App>>,
}

#[wasm_bindgen]
impl LinkedDots {
    /// Create an animation for the canvas with id `canvas_id`
    ///
    /// `config_json` uses the camelCase config fields; defaults apply when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<LinkedDots, JsValue> {
        console_error_panic_hook::set_once();
        // Already initialized when several animations share a page
        let _ = console_log::init_with_level(log::Level::Info);

        let mut config = match config_json {
            Some(json) => SimulationConfig::from_json(&json)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => SimulationConfig::default(),
        };
        if config.seed.is_none() {
            config.seed = Some(js_sys::Date::now() as u64);
        }

        let clock = SimulationClock::new(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let renderer = CanvasRenderer::new(canvas_id, config.canvas_size.width, config.canvas_size.height);

        Ok(LinkedDots {
            app: Rc::new(RefCell::new(App {
                clock,
                renderer,
                timeout_id: None,
            })),
        })
    }

    /// Start animating. No-op while already running.
    pub fn start(&self) {
        {
            let mut app = self.app.borrow_mut();
            if app.timeout_id.is_some() {
                return;
            }
            let App { clock, renderer, .. } = &mut *app;
            renderer.acquire();
            clock.start(renderer, now_ms());
        }
        schedule(self.app.clone());
    }

    /// Cancel the pending frame and drop the dots. Safe to call repeatedly.
    pub fn stop(&self) {
        let mut app = self.app.borrow_mut();
        if let Some(id) = app.timeout_id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
        app.clock.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.app.borrow().clock.is_running()
    }
}

fn schedule(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(due) = app.borrow().clock.next_tick_at() else {
        return;
    };
    let delay = (due - now_ms()).max(0.0).ceil() as i32;

    let handle = app.clone();
    let callback = Closure::once_into_js(move || on_timeout(handle));
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay) {
        Ok(id) => app.borrow_mut().timeout_id = Some(id),
        Err(e) => log::error!("Failed to schedule frame: {:?}", e),
    }
}

fn on_timeout(app: Rc<RefCell<App>>) {
    {
        let mut app = app.borrow_mut();
        app.timeout_id = None;
        let App { clock, renderer, .. } = &mut *app;
        renderer.acquire();
        clock.update(renderer, now_ms());
    }
    schedule(app);
}
