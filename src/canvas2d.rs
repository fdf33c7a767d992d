//! Browser backend: a [`Surface`] over `CanvasRenderingContext2d`.
//!
//! This module is the only place that touches the 2D context. All fallible
//! `Canvas2D` calls propagate errors as `JsValue`.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Point, Viewport};
use crate::render::{Stroke, Surface};

/// Paints screen-space commands into a canvas 2D context.
///
/// `dpr` is the device pixel ratio; the backing store is `dpr` times the CSS
/// size, so every frame starts from a `dpr` scale.
pub struct Canvas2dSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    dpr: f64,
}

impl<'a> Canvas2dSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d, dpr: f64) -> Self {
        Self { ctx, dpr }
    }
}

impl Surface for Canvas2dSurface<'_> {
    type Error = JsValue;

    fn clear(&mut self, viewport: Viewport) -> Result<(), JsValue> {
        self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)?;
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
        Ok(())
    }

    fn stroke_path(&mut self, points: &[Point], closed: bool, stroke: Stroke<'_>) -> Result<(), JsValue> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        if closed {
            self.ctx.close_path();
        }
        self.ctx.set_stroke_style_str(stroke.color);
        self.ctx.set_line_width(stroke.width);
        self.ctx.stroke();
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke<'_>) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(stroke.color);
        self.ctx.set_line_width(stroke.width);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    fn fill_text(&mut self, pos: Point, text: &str, font: &str, color: &str) -> Result<(), JsValue> {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_text(text, pos.x, pos.y)?;
        Ok(())
    }
}
