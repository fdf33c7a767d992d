#![allow(clippy::float_cmp)]

use super::*;

fn shape(points: &[(f64, f64)]) -> Shape {
    Shape::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

#[test]
fn no_shapes_has_no_bounds() {
    assert!(compute(&[]).is_none());
}

#[test]
fn all_empty_shapes_have_no_bounds() {
    assert!(compute(&[shape(&[]), shape(&[])]).is_none());
}

#[test]
fn leading_empty_shape_is_skipped() {
    let b = compute(&[shape(&[]), shape(&[(1.0, 2.0), (3.0, -4.0)])]).unwrap();
    assert_eq!(b, Bounds { min_x: 1.0, max_x: 3.0, min_y: -4.0, max_y: 2.0 });
}

#[test]
fn single_point_is_degenerate_box() {
    let b = compute(&[shape(&[(10.0, 10.0)])]).unwrap();
    assert_eq!(b.width(), 0.0);
    assert_eq!(b.height(), 0.0);
    assert_eq!(b.center(), Point::new(10.0, 10.0));
}

#[test]
fn spans_all_shapes() {
    let shapes = [
        shape(&[(2478.0, -474.0), (2478.0, 1526.0), (4578.0, 1526.0), (4578.0, 4474.0), (-474.0, 4474.0), (-474.0, -474.0)]),
        shape(&[(5000.0, 5000.0), (6000.0, 4000.0), (7000.0, 5500.0)]),
    ];
    let b = compute(&shapes).unwrap();
    assert_eq!(b, Bounds { min_x: -474.0, max_x: 7000.0, min_y: -474.0, max_y: 5500.0 });
}

#[test]
fn square_center_and_size() {
    let b = compute(&[shape(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])]).unwrap();
    assert_eq!(b.width(), 10.0);
    assert_eq!(b.height(), 10.0);
    assert_eq!(b.center(), Point::new(5.0, 5.0));
}

#[test]
fn from_points_empty_is_none() {
    let pts: Vec<Point> = Vec::new();
    assert!(Bounds::from_points(&pts).is_none());
}
