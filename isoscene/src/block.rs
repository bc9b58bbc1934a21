//! Walls and blocks: cuboids standing on a tile footprint.
//!
//! A block of height `z` is three polygons drawn left wall, right wall, top.
//! The top face is the tile diamond raised by `z * s / 2`; the walls join the
//! footprint's lower edges to the raised top's lower edges. Negative heights
//! give a sunken cuboid.
//!
//! Blocks are immutable once built. [`Block::update`] swaps the block out for
//! a freshly built one and hands back the new handle; the old handle is
//! consumed.

#[cfg(test)]
#[path = "block_test.rs"]
mod block_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BLOCK_MATERIAL, BLOCK_STROKE, BLOCK_STROKE_WIDTH};
use crate::drawable::{Drawable, Paint};
use crate::error::SceneError;
use crate::geometry::Point;
use crate::primitive::Primitive;
use crate::scene::Scene;
use crate::surface::Surface;
use crate::tile::diamond;

/// Which face of a block a wall is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    Left,
    Right,
    Top,
}

/// Placement, height, and paint for a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockParams {
    pub x: f64,
    pub y: f64,
    /// Height in tile units; negative values extend downward.
    pub z: f64,
    /// Fill for all three faces. Defaults to `"grey"`.
    pub material: String,
    /// Outline for all three faces. Defaults to `"black"`.
    pub stroke: String,
    /// Outline width. Defaults to `2`.
    pub stroke_width: f64,
}

impl BlockParams {
    /// Default paint at grid cell `(x, y)` with height `z`.
    #[must_use]
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, ..Self::default() }
    }

    /// Apply a sparse update. Absent fields keep their current value.
    #[must_use]
    pub fn merged(mut self, partial: PartialBlockParams) -> Self {
        if let Some(x) = partial.x {
            self.x = x;
        }
        if let Some(y) = partial.y {
            self.y = y;
        }
        if let Some(z) = partial.z {
            self.z = z;
        }
        if let Some(material) = partial.material {
            self.material = material;
        }
        if let Some(stroke) = partial.stroke {
            self.stroke = stroke;
        }
        if let Some(stroke_width) = partial.stroke_width {
            self.stroke_width = stroke_width;
        }
        self
    }

    fn paint(&self) -> Paint {
        Paint::new(self.material.clone(), self.stroke.clone(), self.stroke_width)
    }
}

impl Default for BlockParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            material: BLOCK_MATERIAL.to_string(),
            stroke: BLOCK_STROKE.to_string(),
            stroke_width: BLOCK_STROKE_WIDTH,
        }
    }
}

/// Sparse update for a block. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialBlockParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// Polygon vertices for one face of a block with tile size `s` and height
/// `z`, relative to the projected cell.
#[must_use]
pub fn wall_points(side: WallSide, s: f64, z: f64) -> Vec<Point> {
    let rise = -z * s * 0.5;
    match side {
        WallSide::Left => vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, rise),
            Point::new(s * 0.5, rise + s * 0.25),
            Point::new(s * 0.5, s * 0.25),
        ],
        WallSide::Right => vec![
            Point::new(s * 0.5, s * 0.25),
            Point::new(s * 0.5, s * 0.25 + rise),
            Point::new(s, rise),
            Point::new(s, 0.0),
        ],
        WallSide::Top => diamond(s),
    }
}

/// Handle for a single block face.
#[derive(Debug, Clone)]
pub struct Wall {
    side: WallSide,
    drawable: Drawable,
}

impl Wall {
    #[must_use]
    pub fn side(&self) -> WallSide {
        self.side
    }

    #[must_use]
    pub fn drawable(&self) -> &Drawable {
        &self.drawable
    }
}

impl Primitive for Wall {
    fn drawables(&self) -> &[Drawable] {
        std::slice::from_ref(&self.drawable)
    }
}

/// Build one face of the block described by `params`. The top face is
/// translated up by the block height; the side walls sit on the cell.
#[must_use]
pub fn build_wall<S: Surface>(scene: &Scene<S>, params: &BlockParams, side: WallSide) -> Wall {
    let s = scene.tile_size();
    let cell = scene.project(params.x, params.y);
    let at = match side {
        WallSide::Top => Point::new(cell.x, cell.y - params.z * s * 0.5),
        WallSide::Left | WallSide::Right => cell,
    };
    let drawable = Drawable::polygon(wall_points(side, s, params.z), params.paint(), at);
    Wall { side, drawable }
}

/// Handle for a three-faced block.
#[derive(Debug, Clone)]
pub struct Block {
    params: BlockParams,
    /// Left, right, top.
    faces: [Drawable; 3],
}

impl Block {
    #[must_use]
    pub fn params(&self) -> &BlockParams {
        &self.params
    }

    #[must_use]
    pub fn left(&self) -> &Drawable {
        &self.faces[0]
    }

    #[must_use]
    pub fn right(&self) -> &Drawable {
        &self.faces[1]
    }

    #[must_use]
    pub fn top(&self) -> &Drawable {
        &self.faces[2]
    }

    /// Replace this block on `scene` with one built from merged params.
    ///
    /// `mutator` sees the current params and returns the fields to change.
    /// The current faces are removed, a new block is built and added, and its
    /// handle is returned. `self` is consumed: the old faces no longer exist
    /// on the scene.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownElement`] if any face of this block is not
    /// on the scene, in which case the scene is left untouched. Otherwise
    /// propagates any error from adding the replacement.
    pub fn update<S, F>(self, scene: &mut Scene<S>, mutator: F) -> Result<Block, SceneError>
    where
        S: Surface,
        F: FnOnce(&BlockParams) -> PartialBlockParams,
    {
        if let Some(missing) = self.faces.iter().find(|face| !scene.contains(face.id)) {
            return Err(SceneError::UnknownElement { id: missing.id });
        }
        self.remove_from_scene(scene)?;
        let partial = mutator(&self.params);
        let params = self.params.merged(partial);
        let next = build_block(scene, params);
        next.add_to_scene(scene)?;
        tracing::debug!(x = next.params.x, y = next.params.y, z = next.params.z, "block updated");
        Ok(next)
    }
}

impl Primitive for Block {
    fn drawables(&self) -> &[Drawable] {
        &self.faces
    }
}

/// Build a block. It is not added to the scene; call
/// [`Primitive::add_to_scene`].
#[must_use]
pub fn build_block<S: Surface>(scene: &Scene<S>, params: BlockParams) -> Block {
    let faces = [WallSide::Left, WallSide::Right, WallSide::Top].map(|side| build_wall(scene, &params, side).drawable);
    Block { params, faces }
}
