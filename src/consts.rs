//! Shared numeric and color constants for the viewer.

// ── Camera ──────────────────────────────────────────────────────

/// Multiplicative zoom change per wheel step.
pub const ZOOM_STEP: f64 = 1.1;

/// Smallest zoom the camera accepts. Anything below it, zero and NaN included, is clamped here
/// so the world/screen transform stays invertible.
pub const MIN_ZOOM: f64 = 1e-12;

/// Largest zoom the camera accepts. Zooming in past it, or overflowing to
/// infinity, holds the camera here.
pub const MAX_ZOOM: f64 = 1e12;

/// World-unit padding kept around the data when auto-fitting.
pub const FIT_PADDING: f64 = 50.0;

/// Floor applied to a degenerate data extent before computing the fit zoom.
pub const FIT_MIN_EXTENT: f64 = 1.0;

// ── Shapes ──────────────────────────────────────────────────────

/// Stroke colors, cycled by shape index.
pub const PALETTE: [&str; 6] = ["#007bff", "#28a745", "#dc3545", "#ffc107", "#17a2b8", "#6f42c1"];

/// Shape outline width in screen pixels.
pub const STROKE_WIDTH_PX: f64 = 2.0;

/// Vertex marker radius in screen pixels.
pub const POINT_RADIUS_PX: f64 = 5.0;

/// Vertex label font size in screen pixels.
pub const LABEL_FONT_PX: f64 = 12.0;

pub const POINT_COLOR: &str = "#000000";
pub const LABEL_COLOR: &str = "black";
pub const FONT_FAMILY: &str = "Arial";

// ── Grid ────────────────────────────────────────────────────────

/// Target number of grid cells across the visible span.
pub const GRID_DIVISIONS: u32 = 10;

/// Upper bound on grid lines per axis; beyond this the grid is treated as degenerate.
pub const MAX_GRID_LINES: usize = 1000;

pub const GRID_COLOR: &str = "#ddd";
pub const GRID_LABEL_COLOR: &str = "#aaa";
pub const GRID_WIDTH_PX: f64 = 1.0;
pub const GRID_FONT_PX: f64 = 10.0;

/// Offset of grid labels from their line, in screen pixels.
pub const GRID_LABEL_INSET_PX: f64 = 4.0;

pub const AXIS_COLOR: &str = "#aaa";
pub const AXIS_WIDTH_PX: f64 = 2.0;
