//! Scene model: shapes, the open/closed draw mode, and input normalization.
//!
//! The host hands the viewer JSON in one of two layouts: a flat array of
//! `{x, y}` points (one shape) or an array of such arrays (many shapes).
//! Both are normalized to `Vec<Shape>` here. A [`Scene`] is always replaced
//! wholesale; nothing mutates a shape after it is parsed.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};

use crate::bounds::{self, Bounds};
use crate::camera::Point;
use crate::error::ViewError;

/// Data loaded on first start so the canvas is not blank.
pub const SAMPLE_INPUT: &str = r#"[
  [
    { "x": 2478, "y": -474 },
    { "x": 2478, "y": 1526 },
    { "x": 4578, "y": 1526 },
    { "x": 4578, "y": 4474 },
    { "x": -474, "y": 4474 },
    { "x": -474, "y": -474 }
  ],
  [
    { "x": 5000, "y": 5000 },
    { "x": 6000, "y": 4000 },
    { "x": 7000, "y": 5500 }
  ]
]"#;

/// An ordered run of world-space points. Order is draw order and label index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape {
    points: Vec<Point>,
}

impl Shape {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for Shape {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// Either accepted input layout.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShapesInput {
    Flat(Vec<Point>),
    Nested(Vec<Shape>),
}

impl ShapesInput {
    fn into_shapes(self) -> Vec<Shape> {
        match self {
            // `[]` parses as an empty flat list: nothing to draw, not one empty shape.
            Self::Flat(points) if points.is_empty() => Vec::new(),
            Self::Flat(points) => vec![Shape::new(points)],
            Self::Nested(shapes) => shapes,
        }
    }
}

/// Parse host JSON into shapes.
///
/// # Errors
///
/// Returns [`ViewError::MalformedInput`] for blank text, invalid JSON, a
/// non-array top level, or elements that are not `{x, y}` numeric points.
pub fn parse_shapes(text: &str) -> Result<Vec<Shape>, ViewError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ViewError::MalformedInput("no input".into()));
    }

    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(ViewError::MalformedInput("top level must be an array".into()));
    }

    let input = serde_json::from_value::<ShapesInput>(value).map_err(|_| {
        ViewError::MalformedInput("expected an array of {x, y} points or an array of such arrays".into())
    })?;
    Ok(input.into_shapes())
}

/// The shapes currently on display plus the draw mode shared by all of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    closed: bool,
}

impl Scene {
    /// A scene of `shapes`, drawn as polygons if `closed`, else as polylines.
    #[must_use]
    pub fn new(shapes: Vec<Shape>, closed: bool) -> Self {
        Self { shapes, closed }
    }

    /// The scene with nothing in it.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Whether every shape is drawn closed (last vertex joined to first).
    #[must_use]
    pub fn closed(&self) -> bool {
        self.closed
    }

    /// `true` if there are no shapes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Total vertex count across shapes.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.shapes.iter().map(Shape::len).sum()
    }

    /// Bounding box over all shapes; `None` when there are no points.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        bounds::compute(&self.shapes)
    }
}
