//! Plain value types shared by the projector, the surfaces, and the viewport.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in device, surface, or tile-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// An axis-aligned rectangle: origin at the top-left corner plus a size.
///
/// Used both for the visible region (view box) in surface space and for the
/// surface's bounding box in device space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Map a point from device space (where `self` is the surface's bounding
    /// box) into `view`, the region of surface space the box displays.
    ///
    /// A degenerate box maps everything onto the view origin.
    #[must_use]
    pub fn map_into(&self, view: &Rect, device: Point) -> Point {
        if self.width <= 0.0 || self.height <= 0.0 {
            return view.origin();
        }
        Point::new(
            view.x + (device.x - self.x) * view.width / self.width,
            view.y + (device.y - self.y) * view.height / self.height,
        )
    }
}
