//! Rendering: turns a scene and camera into screen-space draw calls.
//!
//! Every repaint computes the world→screen [`Transform`] once and maps world
//! points through it, so all drawing happens in screen pixels. Stroke widths,
//! marker radii and font sizes are therefore constant on screen at any zoom.
//!
//! Output goes to a [`Surface`]. [`DisplayList`] records commands for tests
//! and inspection; [`crate::canvas2d::Canvas2dSurface`] paints to a browser
//! canvas. Rendering never mutates scene or camera state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::convert::Infallible;

use crate::camera::{Camera, Point, Transform, Viewport};
use crate::config::ViewConfig;
use crate::consts::{AXIS_COLOR, GRID_COLOR, GRID_LABEL_COLOR, GRID_LABEL_INSET_PX, GRID_WIDTH_PX, LABEL_COLOR, POINT_COLOR};
use crate::error::GeometryError;
use crate::grid::{format_grid_label, grid_lines, grid_step};
use crate::scene::Scene;

/// Line color and width in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke<'a> {
    pub color: &'a str,
    pub width: f64,
}

/// A screen-space drawing target.
///
/// All coordinates and sizes are in CSS pixels, origin top-left, Y down.
pub trait Surface {
    type Error;

    /// Wipe the whole surface.
    fn clear(&mut self, viewport: Viewport) -> Result<(), Self::Error>;

    /// Stroke a polyline, joining the last point to the first if `closed`.
    fn stroke_path(&mut self, points: &[Point], closed: bool, stroke: Stroke<'_>) -> Result<(), Self::Error>;

    /// Stroke a single segment.
    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke<'_>) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), Self::Error>;

    /// Draw text with its alphabetic baseline starting at `pos`.
    fn fill_text(&mut self, pos: Point, text: &str, font: &str, color: &str) -> Result<(), Self::Error>;
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Path { points: Vec<Point>, closed: bool, color: String, width: f64 },
    Line { from: Point, to: Point, color: String, width: f64 },
    Circle { center: Point, radius: f64, color: String },
    Text { pos: Point, text: String, font: String, color: String },
}

/// A [`Surface`] that records commands instead of drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DisplayList {
    type Error = Infallible;

    fn clear(&mut self, viewport: Viewport) -> Result<(), Infallible> {
        // A clear wipes everything recorded so far, like it wipes pixels.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width: viewport.width, height: viewport.height });
        Ok(())
    }

    fn stroke_path(&mut self, points: &[Point], closed: bool, stroke: Stroke<'_>) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            closed,
            color: stroke.color.to_owned(),
            width: stroke.width,
        });
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke<'_>) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Line { from, to, color: stroke.color.to_owned(), width: stroke.width });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Circle { center, radius, color: color.to_owned() });
        Ok(())
    }

    fn fill_text(&mut self, pos: Point, text: &str, font: &str, color: &str) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_owned(),
            font: font.to_owned(),
            color: color.to_owned(),
        });
        Ok(())
    }
}

/// Draw the full frame: clear, then grid and axes, then shapes.
///
/// Only the clear happens when the scene has no points.
///
/// # Errors
///
/// Propagates the first error returned by the surface.
pub fn repaint<S: Surface>(
    surface: &mut S,
    scene: &Scene,
    camera: &Camera,
    viewport: Viewport,
    config: &ViewConfig,
) -> Result<(), S::Error> {
    surface.clear(viewport)?;

    if scene.bounds().is_none() {
        return Ok(());
    }

    let transform = camera.transform(viewport);
    draw_grid(surface, camera, viewport, config)?;
    draw_shapes(surface, scene, &transform, config)?;
    Ok(())
}

// =============================================================
// Grid and axes
// =============================================================

/// Draw grid lines with value labels over the visible world rectangle, then
/// the world axes through the origin when they are in view.
///
/// An axis whose span is degenerate is skipped; the other axis still draws.
///
/// # Errors
///
/// Propagates surface errors.
pub fn draw_grid<S: Surface>(
    surface: &mut S,
    camera: &Camera,
    viewport: Viewport,
    config: &ViewConfig,
) -> Result<(), S::Error> {
    let transform = camera.transform(viewport);
    let (top_left, bottom_right) = camera.visible_corners(viewport);
    let divisions = f64::from(config.grid_divisions);
    let grid_font = config.font(config.grid_font_px);
    let grid_stroke = Stroke { color: GRID_COLOR, width: GRID_WIDTH_PX };

    match axis_lines(top_left.x, bottom_right.x, divisions) {
        Ok(xs) => {
            for x in xs {
                let sx = transform.apply(Point::new(x, 0.0)).x;
                surface.stroke_line(Point::new(sx, 0.0), Point::new(sx, viewport.height), grid_stroke)?;
                let label_pos = Point::new(sx + GRID_LABEL_INSET_PX, config.grid_font_px);
                surface.fill_text(label_pos, &format_grid_label(x), &grid_font, GRID_LABEL_COLOR)?;
            }
        }
        Err(e) => tracing::debug!(error = %e, "skipping vertical grid lines"),
    }

    match axis_lines(bottom_right.y, top_left.y, divisions) {
        Ok(ys) => {
            for y in ys {
                let sy = transform.apply(Point::new(0.0, y)).y;
                surface.stroke_line(Point::new(0.0, sy), Point::new(viewport.width, sy), grid_stroke)?;
                let label_pos = Point::new(GRID_LABEL_INSET_PX, sy - GRID_LABEL_INSET_PX);
                surface.fill_text(label_pos, &format_grid_label(y), &grid_font, GRID_LABEL_COLOR)?;
            }
        }
        Err(e) => tracing::debug!(error = %e, "skipping horizontal grid lines"),
    }

    let axis_stroke = Stroke { color: AXIS_COLOR, width: config.axis_width_px };
    let origin = transform.apply(Point::new(0.0, 0.0));
    if bottom_right.y <= 0.0 && 0.0 <= top_left.y {
        surface.stroke_line(Point::new(0.0, origin.y), Point::new(viewport.width, origin.y), axis_stroke)?;
    }
    if top_left.x <= 0.0 && 0.0 <= bottom_right.x {
        surface.stroke_line(Point::new(origin.x, 0.0), Point::new(origin.x, viewport.height), axis_stroke)?;
    }
    Ok(())
}

fn axis_lines(min: f64, max: f64, divisions: f64) -> Result<Vec<f64>, GeometryError> {
    let step = grid_step((max - min) / divisions)?;
    grid_lines(min, max, step)
}

// =============================================================
// Shapes
// =============================================================

/// Stroke every shape in scene order, then mark and label its vertices.
///
/// # Errors
///
/// Propagates surface errors.
pub fn draw_shapes<S: Surface>(
    surface: &mut S,
    scene: &Scene,
    transform: &Transform,
    config: &ViewConfig,
) -> Result<(), S::Error> {
    let radius = config.point_radius_px;
    let label_font = config.font(config.label_font_px);

    for (index, shape) in scene.shapes().iter().enumerate() {
        if shape.is_empty() {
            continue;
        }

        let screen: Vec<Point> = shape.points().iter().map(|p| transform.apply(*p)).collect();
        let stroke = Stroke { color: config.shape_color(index), width: config.stroke_width_px };
        surface.stroke_path(&screen, scene.closed(), stroke)?;

        for (vertex, (world, at)) in shape.points().iter().zip(&screen).enumerate() {
            surface.fill_circle(*at, radius, POINT_COLOR)?;
            let label_pos = Point::new(at.x + radius * 1.5, at.y + radius * 0.5);
            surface.fill_text(label_pos, &vertex_label(vertex, *world), &label_font, LABEL_COLOR)?;
        }
    }
    Ok(())
}

/// Vertex label, e.g. `P0 (2478, -474)`.
#[must_use]
pub fn vertex_label(index: usize, world: Point) -> String {
    format!("P{index} ({}, {})", format_coord(world.x), format_coord(world.y))
}

/// Shortest round-trip number text, the way a JavaScript template literal
/// prints it: plain decimals for `1e-6 <= |v| < 1e21`, exponent form with an
/// explicit sign otherwise, and negative zero as `0`.
fn format_coord(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = v.abs();
    if (1e-6..1e21).contains(&magnitude) || v.is_nan() {
        return format!("{v}");
    }
    let exp = format!("{v:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
