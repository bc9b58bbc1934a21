//! Input model for the viewport: pointer/wheel events and the drag state
//! machine.
//!
//! Events carry device-space points (e.g. client pixels). The viewport
//! controller converts them into surface space itself, so hosts can forward
//! raw event coordinates.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Which way a wheel notch zooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl WheelDelta {
    /// Scrolling up zooms in, scrolling down zooms out. A purely horizontal
    /// scroll does not zoom.
    #[must_use]
    pub fn zoom_direction(self) -> Option<ZoomDirection> {
        if self.dy < 0.0 {
            Some(ZoomDirection::In)
        } else if self.dy > 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

/// A pointer or wheel event delivered to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    Wheel { at: Point, delta: WheelDelta },
    PointerDown { at: Point },
    PointerMove { at: Point },
    PointerUp { at: Point },
    /// The pointer left the surface; ends any drag like a release.
    PointerLeave,
}

/// Drag gesture state, tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No button held.
    #[default]
    Idle,
    /// The user is dragging the view.
    Panning {
        /// Device-space point where the press happened.
        press: Point,
        /// View box origin at the time of the press.
        origin: Point,
    },
}

impl DragState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}
