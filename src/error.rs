//! Error types surfaced by the viewer.
//!
//! `ViewError` is what the host sees: bad input data or a bad config blob.
//! `GeometryError` is internal to rendering; the renderer logs and skips the
//! affected layer instead of propagating it.

/// Errors reported to the host at the point of the offending action.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ViewError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedInput(e.to_string())
    }
}

/// Degenerate geometry encountered while laying out grid lines.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("grid span must be positive and finite, got {0}")]
    NonPositiveSpan(f64),
    #[error("grid would need more than {0} lines")]
    TooManyLines(usize),
}
