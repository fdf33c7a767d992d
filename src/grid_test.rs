#![allow(clippy::float_cmp)]

use super::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1e-300)
}

fn is_nice(v: f64) -> bool {
    let exponent = v.log10().floor();
    let mantissa = v / 10f64.powf(exponent);
    [1.0, 2.0, 5.0, 10.0].iter().any(|k| (mantissa - k).abs() < 1e-6)
}

// =============================================================
// grid_step
// =============================================================

#[test]
fn step_exact_powers_of_ten() {
    assert!(approx_eq(grid_step(1.0).unwrap(), 1.0));
    assert!(approx_eq(grid_step(10.0).unwrap(), 10.0));
    assert!(approx_eq(grid_step(1000.0).unwrap(), 1000.0));
    assert!(approx_eq(grid_step(0.01).unwrap(), 0.01));
}

#[test]
fn step_rounds_up_to_two() {
    assert!(approx_eq(grid_step(1.5).unwrap(), 2.0));
    assert!(approx_eq(grid_step(2.0).unwrap(), 2.0));
    assert!(approx_eq(grid_step(150.0).unwrap(), 200.0));
}

#[test]
fn step_rounds_up_to_five() {
    assert!(approx_eq(grid_step(2.1).unwrap(), 5.0));
    assert!(approx_eq(grid_step(5.0).unwrap(), 5.0));
    assert!(approx_eq(grid_step(0.03).unwrap(), 0.05));
}

#[test]
fn step_rounds_up_to_next_decade() {
    assert!(approx_eq(grid_step(5.5).unwrap(), 10.0));
    assert!(approx_eq(grid_step(9.99).unwrap(), 10.0));
    assert!(approx_eq(grid_step(740.0).unwrap(), 1000.0));
}

#[test]
fn step_is_nice_and_close_to_target() {
    let mut target = 1e-6;
    while target < 1e9 {
        let step = grid_step(target).unwrap();
        assert!(is_nice(step), "{target} -> {step}");
        let ratio = step / target;
        assert!(ratio >= 1.0 - 1e-9 && ratio < 2.5 + 1e-9, "{target} -> {step}");
        target *= 1.37;
    }
}

#[test]
fn step_rejects_zero() {
    assert_eq!(grid_step(0.0), Err(GeometryError::NonPositiveSpan(0.0)));
}

#[test]
fn step_rejects_negative() {
    assert_eq!(grid_step(-4.0), Err(GeometryError::NonPositiveSpan(-4.0)));
}

#[test]
fn step_rejects_non_finite() {
    assert!(grid_step(f64::NAN).is_err());
    assert!(grid_step(f64::INFINITY).is_err());
}

// =============================================================
// grid_lines
// =============================================================

#[test]
fn lines_cover_range_with_outer_multiples() {
    let lines = grid_lines(-3.0, 12.0, 5.0).unwrap();
    assert_eq!(lines, vec![-5.0, 0.0, 5.0, 10.0, 15.0]);
}

#[test]
fn lines_on_exact_multiples_include_both_ends() {
    let lines = grid_lines(0.0, 10.0, 5.0).unwrap();
    assert_eq!(lines, vec![0.0, 5.0, 10.0]);
}

#[test]
fn lines_fractional_step_has_no_drift() {
    let lines = grid_lines(0.0, 1.0, 0.1).unwrap();
    assert_eq!(lines.len(), 11);
    assert!(approx_eq(lines[10], 1.0));
    assert!(approx_eq(lines[3], 0.30000000000000004) || approx_eq(lines[3], 0.3));
}

#[test]
fn lines_empty_for_inverted_range() {
    assert!(grid_lines(5.0, 1.0, 1.0).unwrap().is_empty());
}

#[test]
fn lines_reject_bad_step() {
    assert!(grid_lines(0.0, 1.0, 0.0).is_err());
    assert!(grid_lines(0.0, 1.0, -1.0).is_err());
}

#[test]
fn lines_refuse_runaway_counts() {
    assert_eq!(grid_lines(0.0, 1e9, 1.0), Err(GeometryError::TooManyLines(MAX_GRID_LINES)));
}

// =============================================================
// format_grid_label
// =============================================================

#[test]
fn label_has_two_decimals() {
    assert_eq!(format_grid_label(5.0), "5.00");
    assert_eq!(format_grid_label(-200.0), "-200.00");
    assert_eq!(format_grid_label(0.05), "0.05");
}

#[test]
fn label_negative_zero_is_plain_zero() {
    assert_eq!(format_grid_label(-0.0), "0.00");
    assert_eq!(format_grid_label(0.0), "0.00");
}
