#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// parse_shapes: accepted layouts
// =============================================================

#[test]
fn flat_list_is_one_shape() {
    let shapes = parse_shapes(r#"[{"x":1,"y":2},{"x":3,"y":4}]"#).unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].points(), &[pt(1.0, 2.0), pt(3.0, 4.0)]);
}

#[test]
fn nested_list_is_many_shapes() {
    let shapes = parse_shapes(r#"[[{"x":1,"y":2}],[{"x":3,"y":4}]]"#).unwrap();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].points(), &[pt(1.0, 2.0)]);
    assert_eq!(shapes[1].points(), &[pt(3.0, 4.0)]);
}

#[test]
fn empty_array_is_no_shapes() {
    assert!(parse_shapes("[]").unwrap().is_empty());
}

#[test]
fn nested_empty_shape_is_kept() {
    let shapes = parse_shapes(r#"[[], [{"x":0,"y":0}]]"#).unwrap();
    assert_eq!(shapes.len(), 2);
    assert!(shapes[0].is_empty());
    assert_eq!(shapes[1].len(), 1);
}

#[test]
fn fractional_and_negative_coordinates() {
    let shapes = parse_shapes(r#"[{"x":-1.5,"y":2.25e3}]"#).unwrap();
    assert_eq!(shapes[0].points(), &[pt(-1.5, 2250.0)]);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let shapes = parse_shapes("\n  [{\"x\":1,\"y\":1}]  \n").unwrap();
    assert_eq!(shapes.len(), 1);
}

#[test]
fn extra_point_fields_are_ignored() {
    let shapes = parse_shapes(r#"[{"x":1,"y":2,"label":"a"}]"#).unwrap();
    assert_eq!(shapes[0].points(), &[pt(1.0, 2.0)]);
}

#[test]
fn sample_input_parses_to_two_shapes() {
    let shapes = parse_shapes(SAMPLE_INPUT).unwrap();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].len(), 6);
    assert_eq!(shapes[1].len(), 3);
    assert_eq!(shapes[0].points()[0], pt(2478.0, -474.0));
}

// =============================================================
// parse_shapes: rejected input
// =============================================================

fn assert_malformed(text: &str) {
    match parse_shapes(text) {
        Err(ViewError::MalformedInput(_)) => {}
        other => panic!("expected MalformedInput for {text:?}, got {other:?}"),
    }
}

#[test]
fn blank_input_is_malformed() {
    assert_eq!(parse_shapes("   "), Err(ViewError::MalformedInput("no input".into())));
}

#[test]
fn invalid_json_is_malformed() {
    assert_malformed("[{x:1,y:2}]");
    assert_malformed("[{\"x\":1,");
}

#[test]
fn non_array_is_malformed() {
    assert_malformed(r#"{"x":1,"y":2}"#);
    assert_malformed("42");
}

#[test]
fn missing_coordinate_is_malformed() {
    assert_malformed(r#"[{"x":1}]"#);
}

#[test]
fn non_numeric_coordinate_is_malformed() {
    assert_malformed(r#"[{"x":"1","y":2}]"#);
    assert_malformed(r#"[{"x":null,"y":2}]"#);
}

#[test]
fn mixed_layout_is_malformed() {
    assert_malformed(r#"[{"x":1,"y":2},[{"x":3,"y":4}]]"#);
}

// =============================================================
// Scene
// =============================================================

#[test]
fn empty_scene_has_no_bounds() {
    let scene = Scene::empty();
    assert!(scene.is_empty());
    assert!(scene.bounds().is_none());
    assert_eq!(scene.point_count(), 0);
}

#[test]
fn scene_keeps_mode_and_order() {
    let shapes = parse_shapes(r#"[[{"x":1,"y":2}],[{"x":3,"y":4},{"x":5,"y":6}]]"#).unwrap();
    let scene = Scene::new(shapes, true);
    assert!(scene.closed());
    assert_eq!(scene.shapes().len(), 2);
    assert_eq!(scene.shapes()[1].points()[1], pt(5.0, 6.0));
    assert_eq!(scene.point_count(), 3);
}

#[test]
fn scene_bounds_spans_every_shape() {
    let scene = Scene::new(parse_shapes(SAMPLE_INPUT).unwrap(), false);
    let b = scene.bounds().unwrap();
    assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (-474.0, 7000.0, -474.0, 5500.0));
}

#[test]
fn shape_serializes_as_plain_array() {
    let shape = Shape::from(vec![pt(1.0, 2.0)]);
    assert_eq!(serde_json::to_string(&shape).unwrap(), r#"[{"x":1.0,"y":2.0}]"#);
}
