//! JavaScript bindings.
//!
//! [`Viewer`] is the one exported class. The page forwards DOM events as plain
//! numbers (canvas-relative CSS pixels, `MouseEvent.button`, wheel deltas) and
//! each call repaints and updates the cursor itself, so the host never sees
//! [`crate::engine::Action`] values.
//!
//! Every fallible method throws a JS string: the [`ViewError`] message for bad
//! input, or the browser's own error if a canvas call fails.
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::camera::{Point, ZoomDirection};
use crate::config::ViewConfig;
use crate::engine::Engine;
use crate::error::ViewError;
use crate::input::{Button, WheelDelta};

fn js_error(err: ViewError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct Viewer {
    engine: Engine,
}

#[wasm_bindgen]
impl Viewer {
    /// Bind to `canvas` at its CSS layout size. `config_json` may override any
    /// subset of the viewer settings.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        width_css: f64,
        height_css: f64,
        dpr: f64,
        config_json: Option<String>,
    ) -> Result<Viewer, JsValue> {
        let config = match config_json {
            Some(text) => ViewConfig::from_json(&text).map_err(js_error)?,
            None => ViewConfig::default(),
        };
        let viewer = Self { engine: Engine::new(canvas, config, width_css, height_css, dpr) };
        viewer.engine.render()?;
        Ok(viewer)
    }

    /// Replace the scene from JSON text. On error the current view is kept
    /// and the message is thrown to the caller.
    #[wasm_bindgen(js_name = loadJson)]
    pub fn load_json(&mut self, text: &str, closed: bool) -> Result<(), JsValue> {
        let actions = self.engine.load_json(text, closed).map_err(js_error)?;
        self.engine.apply(&actions)
    }

    #[wasm_bindgen(js_name = loadSample)]
    pub fn load_sample(&mut self) -> Result<(), JsValue> {
        let actions = self.engine.load_sample().map_err(js_error)?;
        self.engine.apply(&actions)
    }

    pub fn clear(&mut self) -> Result<(), JsValue> {
        let actions = self.engine.clear_scene();
        self.engine.apply(&actions)
    }

    #[wasm_bindgen(js_name = autoFit)]
    pub fn auto_fit(&mut self) -> Result<(), JsValue> {
        let actions = self.engine.auto_fit();
        self.engine.apply(&actions)
    }

    /// Call on window resize with the canvas's CSS size and `devicePixelRatio`.
    #[wasm_bindgen(js_name = setViewport)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        let actions = self.engine.set_viewport(width_css, height_css, dpr);
        self.engine.apply(&actions)
    }

    #[wasm_bindgen(js_name = panBy)]
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Result<(), JsValue> {
        let actions = self.engine.pan_by(dx, dy);
        self.engine.apply(&actions)
    }

    /// One zoom step about `(x, y)`; `zoom_in` picks the direction.
    #[wasm_bindgen(js_name = zoomAt)]
    pub fn zoom_at(&mut self, x: f64, y: f64, zoom_in: bool) -> Result<(), JsValue> {
        let direction = if zoom_in { ZoomDirection::In } else { ZoomDirection::Out };
        let actions = self.engine.zoom_at(Point::new(x, y), direction);
        self.engine.apply(&actions)
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_down(Point::new(x, y), Button::from_dom(button));
        self.engine.apply(&actions)
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_move(Point::new(x, y));
        self.engine.apply(&actions)
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f64, y: f64, button: i16) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_up(Point::new(x, y), Button::from_dom(button));
        self.engine.apply(&actions)
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_leave();
        self.engine.apply(&actions)
    }

    pub fn wheel(&mut self, x: f64, y: f64, dx: f64, dy: f64) -> Result<(), JsValue> {
        let actions = self.engine.on_wheel(Point::new(x, y), WheelDelta { dx, dy });
        self.engine.apply(&actions)
    }

    pub fn render(&self) -> Result<(), JsValue> {
        self.engine.render()
    }

    /// World coordinates under a canvas position, as `[x, y]`.
    #[wasm_bindgen(js_name = worldAt)]
    pub fn world_at(&self, x: f64, y: f64) -> Vec<f64> {
        let world = self.engine.world_at(Point::new(x, y));
        vec![world.x, world.y]
    }

    #[wasm_bindgen(getter, js_name = centerX)]
    pub fn center_x(&self) -> f64 {
        self.engine.camera().center_x
    }

    #[wasm_bindgen(getter, js_name = centerY)]
    pub fn center_y(&self) -> f64 {
        self.engine.camera().center_y
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.engine.camera().zoom
    }
}
