//! Pan/zoom over the surface's visible region.
//!
//! The controller owns the visible region (the SVG view box) and the zoom
//! factor. It reacts to wheel and drag events and pushes the new region to
//! the surface. It never looks at scene elements.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::error::SurfaceError;
use crate::geometry::{Point, Rect};
use crate::input::{DragState, ViewportEvent, WheelDelta, ZoomDirection};
use crate::surface::Surface;

/// Visible region plus zoom factor.
///
/// `region` is in surface coordinates. `zoom` is 1.0 when the whole scene is
/// visible and is kept within `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub region: Rect,
    pub zoom: f64,
}

impl Viewport {
    /// The full-canvas view of a `width` x `height` scene.
    #[must_use]
    pub fn full(width: f64, height: f64) -> Self {
        Self { region: Rect::new(0.0, 0.0, width, height), zoom: 1.0 }
    }
}

/// Gesture state machine mapping wheel and drag input onto a [`Viewport`].
#[derive(Debug, Clone)]
pub struct ViewportController {
    scene_width: f64,
    scene_height: f64,
    viewport: Viewport,
    drag: DragState,
}

impl ViewportController {
    #[must_use]
    pub fn new(scene_width: f64, scene_height: f64) -> Self {
        Self {
            scene_width,
            scene_height,
            viewport: Viewport::full(scene_width, scene_height),
            drag: DragState::Idle,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Dispatch one event. Returns `true` when the visible region changed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface rejects the new view box.
    pub fn handle<S: Surface>(&mut self, event: ViewportEvent, surface: &mut S) -> Result<bool, SurfaceError> {
        match event {
            ViewportEvent::Wheel { at, delta } => self.on_wheel(at, delta, surface),
            ViewportEvent::PointerDown { at } => {
                self.on_pointer_down(at);
                Ok(false)
            }
            ViewportEvent::PointerMove { at } => self.on_pointer_move(at, surface),
            ViewportEvent::PointerUp { .. } | ViewportEvent::PointerLeave => {
                self.on_pointer_up();
                Ok(false)
            }
        }
    }

    /// Zoom one notch around the pointer.
    ///
    /// The surface point under `at` before the zoom stays under `at` after it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface rejects the new view box.
    pub fn on_wheel<S: Surface>(&mut self, at: Point, delta: WheelDelta, surface: &mut S) -> Result<bool, SurfaceError> {
        let Some(direction) = delta.zoom_direction() else {
            return Ok(false);
        };

        let bounds = surface.bounding_rect();
        let anchor = surface.to_local(at);
        let offset = at.sub(bounds.origin());

        let factor = match direction {
            ZoomDirection::In => ZOOM_STEP,
            ZoomDirection::Out => 1.0 / ZOOM_STEP,
        };
        let zoom = (self.viewport.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);

        let width = self.scene_width / zoom;
        let height = self.scene_height / zoom;
        // Units of surface space per device pixel after the zoom.
        let (scale_x, scale_y) = if bounds.width > 0.0 && bounds.height > 0.0 {
            (width / bounds.width, height / bounds.height)
        } else {
            (1.0 / zoom, 1.0 / zoom)
        };

        let region = Rect::new(anchor.x - offset.x * scale_x, anchor.y - offset.y * scale_y, width, height);
        self.viewport = Viewport { region, zoom };
        surface.set_view_box(region)?;
        tracing::trace!(zoom, x = region.x, y = region.y, "viewport zoomed");
        Ok(true)
    }

    /// Start a drag at device point `at`.
    pub fn on_pointer_down(&mut self, at: Point) {
        self.drag = DragState::Panning { press: at, origin: self.viewport.region.origin() };
    }

    /// Continue a drag. Dragging right moves the view left, scaled by zoom.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface rejects the new view box.
    pub fn on_pointer_move<S: Surface>(&mut self, at: Point, surface: &mut S) -> Result<bool, SurfaceError> {
        let DragState::Panning { press, origin } = self.drag else {
            return Ok(false);
        };
        let zoom = self.viewport.zoom;
        let delta = press.sub(at);
        self.viewport.region.x = origin.x + delta.x / zoom;
        self.viewport.region.y = origin.y + delta.y / zoom;
        surface.set_view_box(self.viewport.region)?;
        tracing::trace!(x = self.viewport.region.x, y = self.viewport.region.y, "viewport panned");
        Ok(true)
    }

    /// End any drag in progress.
    pub fn on_pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }
}
