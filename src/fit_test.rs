#![allow(clippy::float_cmp)]

use super::*;
use crate::camera::Point;
use crate::consts::{FIT_PADDING, MIN_ZOOM};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn bounds(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Bounds {
    Bounds { min_x, max_x, min_y, max_y }
}

#[test]
fn square_in_800_by_600() {
    let cam = fit_camera(&bounds(0.0, 10.0, 0.0, 10.0), Viewport::new(800.0, 600.0), FIT_PADDING);
    assert!(approx_eq(cam.center_x, 5.0));
    assert!(approx_eq(cam.center_y, 5.0));
    assert!(approx_eq(cam.zoom, 600.0 / 110.0));
    assert!((cam.zoom - 5.4545).abs() < 1e-4);
}

#[test]
fn single_point_centers_on_point() {
    let cam = fit_camera(&bounds(10.0, 10.0, 10.0, 10.0), Viewport::new(800.0, 600.0), FIT_PADDING);
    assert!(approx_eq(cam.center_x, 10.0));
    assert!(approx_eq(cam.center_y, 10.0));
    // 1-unit floor: min(800 / 101, 600 / 101)
    assert!(approx_eq(cam.zoom, 600.0 / 101.0));
}

#[test]
fn horizontal_line_uses_height_floor() {
    let cam = fit_camera(&bounds(0.0, 1000.0, 3.0, 3.0), Viewport::new(800.0, 600.0), FIT_PADDING);
    assert!(approx_eq(cam.center_y, 3.0));
    assert!(approx_eq(cam.zoom, 800.0 / 1100.0));
}

#[test]
fn wide_data_is_limited_by_width() {
    let cam = fit_camera(&bounds(-474.0, 7000.0, -474.0, 5500.0), Viewport::new(800.0, 600.0), FIT_PADDING);
    let expected = (800.0 / (7474.0 + 100.0_f64)).min(600.0 / (5974.0 + 100.0));
    assert!(approx_eq(cam.zoom, expected));
}

#[test]
fn fitted_bounds_are_inside_viewport() {
    let b = bounds(-474.0, 7000.0, -474.0, 5500.0);
    let vp = Viewport::new(1024.0, 400.0);
    let cam = fit_camera(&b, vp, FIT_PADDING);
    for p in [Point::new(b.min_x, b.min_y), Point::new(b.max_x, b.max_y)] {
        let s = cam.world_to_screen(p, vp);
        assert!(s.x >= 0.0 && s.x <= vp.width);
        assert!(s.y >= 0.0 && s.y <= vp.height);
    }
}

#[test]
fn zero_viewport_clamps_zoom() {
    let cam = fit_camera(&bounds(0.0, 10.0, 0.0, 10.0), Viewport::new(0.0, 0.0), FIT_PADDING);
    assert_eq!(cam.zoom, MIN_ZOOM);
}
