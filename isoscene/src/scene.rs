//! The scene: a drawing surface plus the set of elements currently on it.
//!
//! `Scene` is the only path by which primitives reach the surface. Every add,
//! remove, and clear updates the surface and the tracked id list together, so
//! the two always hold exactly the same children in the same order. Pan/zoom
//! events are routed to the embedded [`ViewportController`], which works on
//! the surface's visible region and leaves the element list alone.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};

use crate::drawable::{Drawable, ElementId};
use crate::error::SceneError;
use crate::geometry::Point;
use crate::grid::Grid;
use crate::input::ViewportEvent;
use crate::surface::{Surface, SvgDocument};
use crate::viewport::{Viewport, ViewportController};

/// Scene dimensions: surface size in pixels and board extent in cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub width: f64,
    pub height: f64,
    pub board_size: f64,
}

impl SceneConfig {
    #[must_use]
    pub fn new(width: f64, height: f64, board_size: f64) -> Self {
        Self { width, height, board_size }
    }

    /// Reject sizes that would give a zero, negative, or non-finite tile size.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DegenerateGeometry`] naming the offending field.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (name, value) in [("width", self.width), ("height", self.height), ("board_size", self.board_size)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SceneError::DegenerateGeometry(format!("{name} must be positive and finite, got {value}")));
            }
        }
        Ok(())
    }
}

/// Serializable summary of a scene's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub config: SceneConfig,
    pub grid: Grid,
    pub viewport: Viewport,
    /// Tracked element ids in draw order.
    pub elements: Vec<ElementId>,
}

/// A drawing surface and the elements currently rendered on it.
#[derive(Debug)]
pub struct Scene<S: Surface = SvgDocument> {
    config: SceneConfig,
    grid: Grid,
    surface: S,
    elements: Vec<ElementId>,
    viewport: ViewportController,
}

/// Create a scene over a fresh in-memory [`SvgDocument`].
///
/// # Errors
///
/// Returns [`SceneError::DegenerateGeometry`] for non-positive dimensions.
pub fn create_scene(width: f64, height: f64, board_size: f64) -> Result<Scene<SvgDocument>, SceneError> {
    Scene::new(SceneConfig::new(width, height, board_size), SvgDocument::new())
}

impl<S: Surface> Scene<S> {
    /// Validate `config`, size `surface` to it with a full-canvas view box,
    /// and start tracking an empty element list.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DegenerateGeometry`] for non-positive dimensions,
    /// [`SceneError::SurfaceNotEmpty`] if `surface` already has children, or
    /// [`SceneError::Surface`] if the surface rejects its initial setup.
    pub fn new(config: SceneConfig, mut surface: S) -> Result<Self, SceneError> {
        config.validate()?;
        // Every surface child must be a tracked element.
        let children = surface.child_count();
        if children != 0 {
            return Err(SceneError::SurfaceNotEmpty { children });
        }
        let grid = Grid::fit(config.width, config.height, config.board_size);
        let viewport = ViewportController::new(config.width, config.height);
        surface.set_size(config.width, config.height)?;
        surface.set_view_box(viewport.viewport().region)?;
        tracing::debug!(
            width = config.width,
            height = config.height,
            board_size = config.board_size,
            tile_size = grid.tile_size,
            "scene created"
        );
        Ok(Self { config, grid, surface, elements: Vec::new(), viewport })
    }

    // --- Element lifecycle ---

    /// Append `drawable` to the surface and track it. It draws above every
    /// element added before it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ElementAlreadyAdded`] if the id is already
    /// tracked, or [`SceneError::Surface`] if the surface refuses it.
    pub fn add_element(&mut self, drawable: &Drawable) -> Result<(), SceneError> {
        if self.contains(drawable.id) {
            return Err(SceneError::ElementAlreadyAdded { id: drawable.id });
        }
        self.surface.append_child(drawable)?;
        self.elements.push(drawable.id);
        tracing::debug!(id = %drawable.id, tag = drawable.tag(), "element added");
        Ok(())
    }

    /// Detach and untrack the element with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownElement`] if `id` is not tracked, or
    /// [`SceneError::Surface`] if the surface refuses the removal.
    pub fn remove_element(&mut self, id: ElementId) -> Result<(), SceneError> {
        let Some(index) = self.elements.iter().position(|e| *e == id) else {
            return Err(SceneError::UnknownElement { id });
        };
        self.surface.remove_child(id)?;
        self.elements.remove(index);
        tracing::debug!(%id, "element removed");
        Ok(())
    }

    /// Detach and untrack every element. The surface itself stays.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Surface`] if a removal fails; elements from the
    /// failing one onward remain tracked and attached.
    pub fn clear(&mut self) -> Result<(), SceneError> {
        let ids = std::mem::take(&mut self.elements);
        let count = ids.len();
        for (i, id) in ids.iter().enumerate() {
            if let Err(e) = self.surface.remove_child(*id) {
                self.elements = ids[i..].to_vec();
                return Err(e.into());
            }
        }
        tracing::debug!(count, "scene cleared");
        Ok(())
    }

    // --- Viewport ---

    /// Route a pointer or wheel event to the viewport controller. Returns
    /// `true` when the visible region changed.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Surface`] if the surface rejects the view box.
    pub fn handle_event(&mut self, event: ViewportEvent) -> Result<bool, SceneError> {
        Ok(self.viewport.handle(event, &mut self.surface)?)
    }

    // --- Queries ---

    /// Tracked element ids in draw order (bottom first).
    #[must_use]
    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> SceneConfig {
        self.config
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.config.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.config.height
    }

    #[must_use]
    pub fn board_size(&self) -> f64 {
        self.config.board_size
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn tile_size(&self) -> f64 {
        self.grid.tile_size
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.grid.origin
    }

    /// Project grid coordinates onto the surface.
    #[must_use]
    pub fn project(&self, x: f64, y: f64) -> Point {
        self.grid.project(x, y)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    /// Read-only access to the surface. Mutation goes through the scene.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Release the surface, e.g. to serialize it after the scene is done.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            config: self.config,
            grid: self.grid,
            viewport: self.viewport(),
            elements: self.elements.clone(),
        }
    }

    /// The snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}
