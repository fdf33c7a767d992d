//! Grid layout math: "nice" step selection and line enumeration.
//!
//! Steps are always `k * 10^n` with `k` in {1, 2, 5}. The renderer asks for a
//! step per axis from the visible span divided by the configured number of
//! divisions, then enumerates the multiples of that step that cover the span.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::MAX_GRID_LINES;
use crate::error::GeometryError;

/// Pick a "nice" grid step for a target spacing.
///
/// The result is the smallest value of the form `k * 10^n`, `k` in {1, 2, 5},
/// that is at least `target`.
///
/// # Errors
///
/// Returns [`GeometryError::NonPositiveSpan`] if `target` is zero, negative,
/// or not finite.
pub fn grid_step(target: f64) -> Result<f64, GeometryError> {
    if !target.is_finite() || target <= 0.0 {
        return Err(GeometryError::NonPositiveSpan(target));
    }

    #[allow(clippy::cast_possible_truncation)]
    let mut exponent = target.log10().floor() as i32;
    let mut magnitude = 10f64.powi(exponent);
    // log10 can land one ulp off at exact powers of ten.
    if target / magnitude >= 10.0 {
        exponent += 1;
        magnitude = 10f64.powi(exponent);
    } else if target / magnitude < 1.0 {
        exponent -= 1;
        magnitude = 10f64.powi(exponent);
    }

    let residual = target / magnitude;
    let step = if residual > 5.0 {
        10.0 * magnitude
    } else if residual > 2.0 {
        5.0 * magnitude
    } else if residual > 1.0 {
        2.0 * magnitude
    } else {
        magnitude
    };
    Ok(step)
}

/// All multiples of `step` from `floor(min / step)` to `ceil(max / step)`
/// inclusive, in ascending order.
///
/// Values are computed as `i * step` so long runs do not accumulate error.
///
/// # Errors
///
/// Returns [`GeometryError::NonPositiveSpan`] for a bad step and
/// [`GeometryError::TooManyLines`] if the range would need more than
/// [`MAX_GRID_LINES`] lines.
pub fn grid_lines(min: f64, max: f64, step: f64) -> Result<Vec<f64>, GeometryError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(GeometryError::NonPositiveSpan(step));
    }
    if !(min.is_finite() && max.is_finite()) || min > max {
        return Ok(Vec::new());
    }

    let first = (min / step).floor();
    let last = (max / step).ceil();
    let count = last - first + 1.0;
    #[allow(clippy::cast_precision_loss)]
    let max_lines = MAX_GRID_LINES as f64;
    if !count.is_finite() || count > max_lines {
        return Err(GeometryError::TooManyLines(MAX_GRID_LINES));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = count as usize;
    #[allow(clippy::cast_precision_loss)]
    let lines = (0..count).map(|i| (first + i as f64) * step).collect();
    Ok(lines)
}

/// Grid label text: two decimals, with negative zero printed as `0.00`.
#[must_use]
pub fn format_grid_label(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}
