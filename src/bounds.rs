//! Axis-aligned bounding box over scene geometry.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use crate::camera::Point;
use crate::scene::Shape;

/// World-space bounding box. Always derived from a scene, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounds of a point set, or `None` if it is empty.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = Self { min_x: first.x, max_x: first.x, min_y: first.y, max_y: first.y };
        Some(iter.fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5)
    }
}

/// Bounds over every point of every shape.
///
/// `None` when there are no shapes or every shape is empty.
#[must_use]
pub fn compute(shapes: &[Shape]) -> Option<Bounds> {
    Bounds::from_points(shapes.iter().flat_map(Shape::points))
}
