//! The handle contract shared by every builder output.

use crate::drawable::{Drawable, ElementId};
use crate::error::SceneError;
use crate::scene::Scene;
use crate::surface::Surface;

/// A built primitive: one or more drawables that join and leave a scene as
/// a unit.
///
/// `add_to_scene` and `remove_from_scene` must be called in strict
/// alternation. A second add fails with [`SceneError::ElementAlreadyAdded`];
/// a remove without an add fails with [`SceneError::UnknownElement`].
pub trait Primitive {
    /// Drawables in draw order.
    fn drawables(&self) -> &[Drawable];

    /// Ids of [`Primitive::drawables`], in the same order.
    fn ids(&self) -> Vec<ElementId> {
        self.drawables().iter().map(|d| d.id).collect()
    }

    /// Append every drawable to `scene`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Scene::add_element`] failure. Drawables added
    /// before the failure stay on the scene.
    fn add_to_scene<S: Surface>(&self, scene: &mut Scene<S>) -> Result<(), SceneError> {
        for drawable in self.drawables() {
            scene.add_element(drawable)?;
        }
        Ok(())
    }

    /// Remove every drawable from `scene`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Scene::remove_element`] failure.
    fn remove_from_scene<S: Surface>(&self, scene: &mut Scene<S>) -> Result<(), SceneError> {
        for drawable in self.drawables() {
            scene.remove_element(drawable.id)?;
        }
        Ok(())
    }
}
