//! Camera state and the world/screen coordinate transform.
//!
//! World space is the user's data, Y-up. Screen space is canvas pixels, Y-down,
//! origin top-left. The flip between the two lives in exactly one place,
//! [`Camera::transform`]; everything else maps points through the resulting
//! [`Transform`].

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawing surface size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Screen-space center of the viewport.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Affine 2D transform in canvas `setTransform` layout:
///
/// ```text
/// x' = a*x + c*y + e
/// y' = b*x + d*y + f
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    /// Map a point through the transform.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.e,
            y: self.b * p.x + self.d * p.y + self.f,
        }
    }

    /// Inverse transform, or `None` if the matrix is singular.
    #[must_use]
    pub fn invert(&self) -> Option<Self> {
        let det = self.a * self.d - self.b * self.c;
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            e: (self.c * self.f - self.d * self.e) * inv,
            f: (self.b * self.e - self.a * self.f) * inv,
        })
    }
}

/// Which way a single wheel step zooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Camera state: the world point shown at the viewport center and the scale.
///
/// `zoom` is screen pixels per world unit and is kept strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { center_x: 0.0, center_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// The full world→screen transform for this camera and viewport.
    #[must_use]
    pub fn transform(&self, viewport: Viewport) -> Transform {
        let mid = viewport.center();
        Transform {
            a: self.zoom,
            b: 0.0,
            c: 0.0,
            d: -self.zoom,
            e: mid.x - self.center_x * self.zoom,
            f: mid.y + self.center_y * self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point, viewport: Viewport) -> Point {
        self.transform(viewport).apply(world)
    }

    /// Convert a screen-space point to world coordinates.
    ///
    /// A camera whose zoom was forced to zero through its public fields has
    /// no inverse; every screen point then maps to the camera center.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point, viewport: Viewport) -> Point {
        match self.transform(viewport).invert() {
            Some(inverse) => inverse.apply(screen),
            None => Point::new(self.center_x, self.center_y),
        }
    }

    /// Set the zoom, keeping it within [`MIN_ZOOM`, `MAX_ZOOM`].
    ///
    /// NaN and values below the floor clamp to [`MIN_ZOOM`]; anything above the
    /// ceiling, including `+inf` from an overflowing zoom-in, clamps to
    /// [`MAX_ZOOM`].
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = if zoom.is_nan() || zoom < MIN_ZOOM {
            tracing::warn!(zoom, clamped = MIN_ZOOM, "zoom below range; clamping");
            MIN_ZOOM
        } else if zoom > MAX_ZOOM {
            tracing::warn!(zoom, clamped = MAX_ZOOM, "zoom above range; clamping");
            MAX_ZOOM
        } else {
            zoom
        };
    }

    /// Pan by a screen-pixel pointer delta.
    ///
    /// The world point that sat `(dx, dy)` before the viewport center becomes
    /// the new center, so the content follows the pointer.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let origin = Viewport::default();
        let target = self.screen_to_world(Point::new(-dx, -dy), origin);
        self.center_x = target.x;
        self.center_y = target.y;
    }

    /// Zoom one step about `screen`, keeping the world point under it fixed.
    pub fn zoom_at(&mut self, screen: Point, direction: ZoomDirection, step: f64, viewport: Viewport) {
        let anchor = self.screen_to_world(screen, viewport);
        let next = match direction {
            ZoomDirection::In => self.zoom * step,
            ZoomDirection::Out => self.zoom / step,
        };
        self.set_zoom(next);

        // Shift the camera by however far the anchor drifted under the cursor.
        let drifted = self.screen_to_world(screen, viewport);
        self.center_x += anchor.x - drifted.x;
        self.center_y += anchor.y - drifted.y;
    }

    /// World-space rectangle currently visible in `viewport`, as
    /// `(top_left, bottom_right)` in world coordinates.
    #[must_use]
    pub fn visible_corners(&self, viewport: Viewport) -> (Point, Point) {
        let top_left = self.screen_to_world(Point::new(0.0, 0.0), viewport);
        let bottom_right = self.screen_to_world(Point::new(viewport.width, viewport.height), viewport);
        (top_left, bottom_right)
    }
}
