//! Input model: pointer buttons, wheel deltas, and the pan gesture state machine.
//!
//! The viewer has one gesture. Pointer-down with any button enters
//! [`InputState::Panning`]; pointer-up or the pointer leaving the canvas
//! returns to [`InputState::Idle`]. Wheel input zooms in either state.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::{Point, ZoomDirection};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` index. Unknown buttons (back, forward)
    /// are treated as primary since any button pans.
    #[must_use]
    pub fn from_dom(index: i16) -> Self {
        match index {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

impl WheelDelta {
    /// Scrolling up zooms in, scrolling down zooms out. A purely horizontal
    /// scroll has no zoom direction.
    #[must_use]
    pub fn zoom_direction(&self) -> Option<ZoomDirection> {
        if self.dy < 0.0 {
            Some(ZoomDirection::In)
        } else if self.dy > 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

/// Gesture state between pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The user is dragging the view.
    Panning {
        /// Screen position at the previous pointer sample.
        last_screen: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}
