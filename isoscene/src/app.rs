//! `IsoApp`: a facade that owns at most one scene and forwards builder calls
//! to it.
//!
//! Every call made before [`IsoApp::create_scene`] fails with
//! [`SceneError::UninitializedScene`]. Callers that already hold a
//! [`Scene`] can skip the facade and use the builders directly.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::block::{Block, BlockParams, build_block};
use crate::drawable::ElementId;
use crate::error::SceneError;
use crate::ground::{GroundParams, build_ground};
use crate::image::{Image, ImageParams, build_image};
use crate::input::ViewportEvent;
use crate::scene::{Scene, SceneConfig};
use crate::surface::{Surface, SvgDocument};
use crate::tile::{Tile, TileParams, build_tile};

/// Owner of an optional scene.
#[derive(Debug)]
pub struct IsoApp<S: Surface = SvgDocument> {
    scene: Option<Scene<S>>,
}

impl<S: Surface> Default for IsoApp<S> {
    fn default() -> Self {
        Self { scene: None }
    }
}

impl<S: Surface> IsoApp<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Scene ---

    /// Create the scene on `surface`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DegenerateGeometry`] for invalid dimensions; the
    /// previous scene, if any, is kept in that case.
    pub fn create_scene(&mut self, config: SceneConfig, surface: S) -> Result<&mut Scene<S>, SceneError> {
        let scene = Scene::new(config, surface)?;
        Ok(self.scene.insert(scene))
    }

    /// # Errors
    ///
    /// Returns [`SceneError::UninitializedScene`] before `create_scene`.
    pub fn scene(&self) -> Result<&Scene<S>, SceneError> {
        self.scene.as_ref().ok_or(SceneError::UninitializedScene)
    }

    /// # Errors
    ///
    /// Returns [`SceneError::UninitializedScene`] before `create_scene`.
    pub fn scene_mut(&mut self) -> Result<&mut Scene<S>, SceneError> {
        self.scene.as_mut().ok_or(SceneError::UninitializedScene)
    }

    /// Give up the scene, leaving the app uninitialized.
    pub fn take_scene(&mut self) -> Option<Scene<S>> {
        self.scene.take()
    }

    // --- Builders ---

    /// Build a tile. It is not added; call `add_to_scene` on the handle.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UninitializedScene`] before `create_scene`.
    pub fn add_tile(&self, params: TileParams) -> Result<Tile, SceneError> {
        Ok(build_tile(self.scene()?, params))
    }

    /// Build a block. It is not added; call `add_to_scene` on the handle.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UninitializedScene`] before `create_scene`.
    pub fn add_block(&self, params: BlockParams) -> Result<Block, SceneError> {
        Ok(build_block(self.scene()?, params))
    }

    /// Build an image. It is not added; call `add_to_scene` on the handle.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UninitializedScene`] before `create_scene`.
    pub fn add_image(&self, params: ImageParams) -> Result<Image, SceneError> {
        Ok(build_image(self.scene()?, params))
    }

    /// Build and add a ground field.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UninitializedScene`] before `create_scene`, or
    /// any add failure.
    pub fn add_ground(&mut self, params: &GroundParams) -> Result<Vec<Tile>, SceneError> {
        build_ground(self.scene_mut()?, params)
    }

    // --- Lifecycle ---

    /// # Errors
    ///
    /// Returns [`SceneError::UninitializedScene`] before `create_scene`, or
    /// [`SceneError::UnknownElement`] if `id` is not on the scene.
    pub fn remove_element(&mut self, id: ElementId) -> Result<(), SceneError> {
        self.scene_mut()?.remove_element(id)
    }

    /// # Errors
    ///
    /// Returns [`SceneError::UninitializedScene`] before `create_scene`.
    pub fn clear_scene(&mut self) -> Result<(), SceneError> {
        self.scene_mut()?.clear()
    }

    /// Forward a pointer or wheel event to the scene's viewport.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UninitializedScene`] before `create_scene`.
    pub fn handle_event(&mut self, event: ViewportEvent) -> Result<bool, SceneError> {
        self.scene_mut()?.handle_event(event)
    }
}
