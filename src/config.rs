//! Viewer tunables.
//!
//! Every field has a default from [`crate::consts`]; hosts may override any
//! subset by passing a JSON object to [`ViewConfig::from_json`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    AXIS_WIDTH_PX, FIT_PADDING, FONT_FAMILY, GRID_DIVISIONS, GRID_FONT_PX, LABEL_FONT_PX, PALETTE, POINT_RADIUS_PX,
    STROKE_WIDTH_PX, ZOOM_STEP,
};
use crate::error::ViewError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// World units kept clear around the data on auto-fit.
    pub fit_padding: f64,
    /// Zoom factor per wheel step. Must be greater than 1.
    pub zoom_step: f64,
    pub point_radius_px: f64,
    pub stroke_width_px: f64,
    pub axis_width_px: f64,
    pub label_font_px: f64,
    pub grid_font_px: f64,
    /// Grid cells targeted across the visible span on each axis.
    pub grid_divisions: u32,
    pub font_family: String,
    /// Shape stroke colors, cycled by shape index.
    pub palette: Vec<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fit_padding: FIT_PADDING,
            zoom_step: ZOOM_STEP,
            point_radius_px: POINT_RADIUS_PX,
            stroke_width_px: STROKE_WIDTH_PX,
            axis_width_px: AXIS_WIDTH_PX,
            label_font_px: LABEL_FONT_PX,
            grid_font_px: GRID_FONT_PX,
            grid_divisions: GRID_DIVISIONS,
            font_family: FONT_FAMILY.to_owned(),
            palette: PALETTE.iter().map(|c| (*c).to_owned()).collect(),
        }
    }
}

impl ViewConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidConfig`] if the JSON does not parse or any
    /// value is out of range.
    pub fn from_json(text: &str) -> Result<Self, ViewError> {
        let config: Self = serde_json::from_str(text).map_err(|e| ViewError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ViewError> {
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(invalid("zoom_step must be greater than 1"));
        }
        if !(self.fit_padding.is_finite() && self.fit_padding >= 0.0) {
            return Err(invalid("fit_padding must be finite and non-negative"));
        }
        for (name, value) in [
            ("point_radius_px", self.point_radius_px),
            ("stroke_width_px", self.stroke_width_px),
            ("axis_width_px", self.axis_width_px),
            ("label_font_px", self.label_font_px),
            ("grid_font_px", self.grid_font_px),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(&format!("{name} must be positive")));
            }
        }
        if self.grid_divisions == 0 {
            return Err(invalid("grid_divisions must be at least 1"));
        }
        if self.palette.is_empty() {
            return Err(invalid("palette must not be empty"));
        }
        Ok(())
    }

    /// Stroke color for the shape at `index`.
    #[must_use]
    pub fn shape_color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return PALETTE[index % PALETTE.len()];
        }
        &self.palette[index % self.palette.len()]
    }

    /// CSS font shorthand for a pixel size.
    #[must_use]
    pub fn font(&self, size_px: f64) -> String {
        format!("{size_px}px {}", self.font_family)
    }
}

fn invalid(msg: &str) -> ViewError {
    ViewError::InvalidConfig(msg.to_owned())
}
