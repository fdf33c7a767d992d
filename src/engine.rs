use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, Viewport, ZoomDirection};
use crate::canvas2d::Canvas2dSurface;
use crate::config::ViewConfig;
use crate::error::ViewError;
use crate::fit::fit_camera;
use crate::input::{Button, InputState, WheelDelta};
use crate::render::{self, Surface};
use crate::scene::{self, Scene, Shape};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Camera or scene changed; call `render`.
    RenderNeeded,
    /// CSS cursor the host should show over the canvas.
    SetCursor(String),
}

/// Core viewer state: everything that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub scene: Scene,
    pub camera: Camera,
    pub viewport: Viewport,
    pub input: InputState,
    pub config: ViewConfig,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ViewConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Scene ---

    /// Replace the scene and frame it.
    pub fn set_scene(&mut self, shapes: Vec<Shape>, closed: bool) -> Vec<Action> {
        tracing::debug!(shapes = shapes.len(), closed, "scene replaced");
        self.scene = Scene::new(shapes, closed);
        self.auto_fit();
        vec![Action::RenderNeeded]
    }

    /// Parse host JSON and replace the scene with it.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MalformedInput`] if the text is not a point list or
    /// list of point lists. The current scene and camera are left untouched.
    pub fn load_json(&mut self, text: &str, closed: bool) -> Result<Vec<Action>, ViewError> {
        let shapes = scene::parse_shapes(text).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected scene input");
        })?;
        Ok(self.set_scene(shapes, closed))
    }

    /// Load the built-in sample data as polygons.
    ///
    /// # Errors
    ///
    /// Propagates parse errors from [`EngineCore::load_json`].
    pub fn load_sample(&mut self) -> Result<Vec<Action>, ViewError> {
        self.load_json(scene::SAMPLE_INPUT, true)
    }

    /// Drop all shapes. The camera stays where it is.
    pub fn clear_scene(&mut self) -> Vec<Action> {
        tracing::debug!("scene cleared");
        self.scene = Scene::empty();
        vec![Action::RenderNeeded]
    }

    // --- Camera ---

    /// Record new viewport dimensions (CSS pixels) and re-frame the scene.
    pub fn resize_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.viewport = Viewport::new(width.max(0.0), height.max(0.0));
        self.auto_fit();
        vec![Action::RenderNeeded]
    }

    /// Pan by a screen-pixel delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Vec<Action> {
        self.camera.pan_by(dx, dy);
        vec![Action::RenderNeeded]
    }

    /// Zoom one step about a screen position.
    pub fn zoom_at(&mut self, screen_pt: Point, direction: ZoomDirection) -> Vec<Action> {
        self.camera.zoom_at(screen_pt, direction, self.config.zoom_step, self.viewport);
        vec![Action::RenderNeeded]
    }

    /// Frame all shapes with padding. Returns `false` (and leaves the camera
    /// alone) when the scene has no points.
    pub fn auto_fit(&mut self) -> bool {
        let Some(bounds) = self.scene.bounds() else {
            tracing::debug!("auto-fit skipped: scene has no points");
            return false;
        };
        self.camera = fit_camera(&bounds, self.viewport, self.config.fit_padding);
        tracing::debug!(
            center_x = self.camera.center_x,
            center_y = self.camera.center_y,
            zoom = self.camera.zoom,
            "auto-fit"
        );
        true
    }

    // --- Input events ---

    /// Any button starts a pan.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        tracing::trace!(?button, x = screen_pt.x, y = screen_pt.y, "pan started");
        self.input = InputState::Panning { last_screen: screen_pt };
        vec![Action::SetCursor("grabbing".into())]
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Panning { last_screen } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Panning { last_screen: screen_pt };
        self.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y)
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button) -> Vec<Action> {
        self.end_pan()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_pan()
    }

    /// Wheel zooms about the pointer regardless of gesture state.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        match delta.zoom_direction() {
            Some(direction) => self.zoom_at(screen_pt, direction),
            None => Vec::new(),
        }
    }

    fn end_pan(&mut self) -> Vec<Action> {
        if !self.input.is_panning() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor("default".into())]
    }

    // --- Render ---

    /// Draw the current scene through `surface`.
    ///
    /// # Errors
    ///
    /// Propagates the first surface error.
    pub fn repaint<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::repaint(surface, &self.scene, &self.camera, self.viewport, &self.config)
    }

    // --- Queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// World coordinates under a screen position.
    #[must_use]
    pub fn world_at(&self, screen_pt: Point) -> Point {
        self.camera.screen_to_world(screen_pt, self.viewport)
    }
}

/// The full viewer. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    dpr: f64,
    pub core: EngineCore,
}

impl Engine {
    /// Create a viewer bound to `canvas`, laid out at the given CSS size.
    ///
    /// The backing store is resized to `css × dpr` immediately, so the first
    /// auto-fit frames against the CSS viewport rather than whatever pixel
    /// size the canvas element carried before.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: ViewConfig, width_css: f64, height_css: f64, dpr: f64) -> Self {
        let mut engine = Self { canvas, dpr: 1.0, core: EngineCore::with_config(config) };
        engine.set_viewport(width_css, height_css, dpr);
        engine
    }

    // --- Delegated scene / camera operations ---

    pub fn set_scene(&mut self, shapes: Vec<Shape>, closed: bool) -> Vec<Action> {
        self.core.set_scene(shapes, closed)
    }

    /// # Errors
    ///
    /// See [`EngineCore::load_json`].
    pub fn load_json(&mut self, text: &str, closed: bool) -> Result<Vec<Action>, ViewError> {
        self.core.load_json(text, closed)
    }

    /// # Errors
    ///
    /// See [`EngineCore::load_sample`].
    pub fn load_sample(&mut self) -> Result<Vec<Action>, ViewError> {
        self.core.load_sample()
    }

    pub fn clear_scene(&mut self) -> Vec<Action> {
        self.core.clear_scene()
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Vec<Action> {
        self.core.pan_by(dx, dy)
    }

    pub fn zoom_at(&mut self, screen_pt: Point, direction: ZoomDirection) -> Vec<Action> {
        self.core.zoom_at(screen_pt, direction)
    }

    pub fn auto_fit(&mut self) -> Vec<Action> {
        if self.core.auto_fit() {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Viewport ---

    /// Resize the canvas backing store for `dpr` and re-frame the scene.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.dpr = normalize_dpr(dpr);
        self.canvas.set_width(backing_store_px(width_css, self.dpr));
        self.canvas.set_height(backing_store_px(height_css, self.dpr));
        self.core.resize_viewport(width_css, height_css)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let mut surface = Canvas2dSurface::new(&ctx, self.dpr);
        self.core.repaint(&mut surface)
    }

    /// Carry out handler results: set the canvas cursor and repaint at most once.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the cursor style cannot be set or rendering fails.
    pub fn apply(&self, actions: &[Action]) -> Result<(), JsValue> {
        let mut render = false;
        for action in actions {
            match action {
                Action::RenderNeeded => render = true,
                Action::SetCursor(cursor) => self.canvas.style().set_property("cursor", cursor)?,
            }
        }
        if render {
            self.render()?;
        }
        Ok(())
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        self.core.scene()
    }

    #[must_use]
    pub fn world_at(&self, screen_pt: Point) -> Point {
        self.core.world_at(screen_pt)
    }
}

/// Device pixel ratio to use, falling back to 1 for zero, negative, or
/// non-finite input.
fn normalize_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}

/// Backing-store pixel count for a CSS length at `dpr`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_store_px(css: f64, dpr: f64) -> u32 {
    let px = (css * dpr).round();
    if px.is_nan() || px <= 0.0 {
        0
    } else if px >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        px as u32
    }
}
