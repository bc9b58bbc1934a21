//! Ground: a rectangular field of tiles added in one call.

#[cfg(test)]
#[path = "ground_test.rs"]
mod ground_test;

use serde::{Deserialize, Serialize};

use crate::consts::{NO_PAINT, TILE_MATERIAL};
use crate::error::SceneError;
use crate::primitive::Primitive;
use crate::scene::Scene;
use crate::surface::Surface;
use crate::tile::{Tile, TileParams, build_tile};

/// Extent and paint for a ground field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundParams {
    /// Cells along `x`.
    pub rows: u32,
    /// Cells along `y`.
    pub cols: u32,
    pub material: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl GroundParams {
    /// Default paint over `rows` x `cols` cells.
    #[must_use]
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            material: TILE_MATERIAL.to_string(),
            stroke: NO_PAINT.to_string(),
            stroke_width: 0.0,
        }
    }
}

/// Build and add one tile per integer cell `0 <= x < rows`, `0 <= y < cols`.
///
/// Unlike the other builders, this one adds its tiles to the scene right
/// away. Tiles are returned (and drawn) x-major.
///
/// # Errors
///
/// Propagates the first add failure; tiles added before it stay on the scene.
pub fn build_ground<S: Surface>(scene: &mut Scene<S>, params: &GroundParams) -> Result<Vec<Tile>, SceneError> {
    let mut tiles = Vec::new();
    for x in 0..params.rows {
        for y in 0..params.cols {
            let tile = build_tile(
                scene,
                TileParams {
                    x: f64::from(x),
                    y: f64::from(y),
                    material: params.material.clone(),
                    stroke: params.stroke.clone(),
                    stroke_width: params.stroke_width,
                },
            );
            tile.add_to_scene(scene)?;
            tiles.push(tile);
        }
    }
    tracing::debug!(rows = params.rows, cols = params.cols, "ground added");
    Ok(tiles)
}
