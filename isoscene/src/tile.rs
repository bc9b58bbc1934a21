//! Flat ground tiles.

#[cfg(test)]
#[path = "tile_test.rs"]
mod tile_test;

use serde::{Deserialize, Serialize};

use crate::consts::{NO_PAINT, TILE_MATERIAL};
use crate::drawable::{Drawable, Paint};
use crate::geometry::Point;
use crate::primitive::Primitive;
use crate::scene::Scene;
use crate::surface::Surface;

/// Placement and paint for a tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileParams {
    pub x: f64,
    pub y: f64,
    /// Fill color. Defaults to `"lightgrey"`.
    pub material: String,
    /// Outline color. Defaults to `"none"`.
    pub stroke: String,
    /// Outline width. Defaults to `0`.
    pub stroke_width: f64,
}

impl TileParams {
    /// Default paint at grid cell `(x, y)`.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, ..Self::default() }
    }
}

impl Default for TileParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            material: TILE_MATERIAL.to_string(),
            stroke: NO_PAINT.to_string(),
            stroke_width: 0.0,
        }
    }
}

/// Handle for one tile diamond.
#[derive(Debug, Clone)]
pub struct Tile {
    params: TileParams,
    drawable: Drawable,
}

impl Tile {
    #[must_use]
    pub fn params(&self) -> &TileParams {
        &self.params
    }

    #[must_use]
    pub fn drawable(&self) -> &Drawable {
        &self.drawable
    }
}

impl Primitive for Tile {
    fn drawables(&self) -> &[Drawable] {
        std::slice::from_ref(&self.drawable)
    }
}

/// Diamond vertices for a tile of size `s`, relative to the projected cell:
/// left, top, right, bottom corners.
#[must_use]
pub fn diamond(s: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(s * 0.5, -s * 0.25),
        Point::new(s, 0.0),
        Point::new(s * 0.5, s * 0.25),
    ]
}

/// Build a tile at `(params.x, params.y)`. The tile is not added to the
/// scene; call [`Primitive::add_to_scene`].
#[must_use]
pub fn build_tile<S: Surface>(scene: &Scene<S>, params: TileParams) -> Tile {
    let at = scene.project(params.x, params.y);
    let paint = Paint::new(params.material.clone(), params.stroke.clone(), params.stroke_width);
    let drawable = Drawable::polygon(diamond(scene.tile_size()), paint, at);
    Tile { params, drawable }
}
