//! Auto-fit: camera parameters that frame a bounding box with padding.

#[cfg(test)]
#[path = "fit_test.rs"]
mod fit_test;

use crate::bounds::Bounds;
use crate::camera::{Camera, Viewport};
use crate::consts::FIT_MIN_EXTENT;

/// Camera centered on `bounds` and zoomed so the box plus `padding` world
/// units on every side fits inside `viewport`.
///
/// Zero-width or zero-height extents are floored to [`FIT_MIN_EXTENT`] for
/// the zoom so single points and axis-aligned lines still get a finite scale.
#[must_use]
pub fn fit_camera(bounds: &Bounds, viewport: Viewport, padding: f64) -> Camera {
    let width = bounds.width().max(FIT_MIN_EXTENT);
    let height = bounds.height().max(FIT_MIN_EXTENT);
    let center = bounds.center();

    let scale_x = viewport.width / (width + padding * 2.0);
    let scale_y = viewport.height / (height + padding * 2.0);

    let mut camera = Camera { center_x: center.x, center_y: center.y, zoom: 1.0 };
    camera.set_zoom(scale_x.min(scale_y));
    camera
}
