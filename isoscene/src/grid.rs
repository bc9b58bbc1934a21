//! Isometric projection from logical grid cells to surface coordinates.
//!
//! The mapping is the classic 2:1 diamond grid: moving one cell along `x`
//! goes half a tile right and a quarter tile up, moving one cell along `y`
//! goes half a tile right and a quarter tile down.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Projection parameters fixed at scene creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Pixel width of one grid cell's diamond.
    pub tile_size: f64,
    /// Surface point that grid cell `(0, 0)` projects to.
    pub origin: Point,
}

impl Grid {
    /// Derive the tile size and origin that fit a `board_size` board into a
    /// `width` x `height` surface.
    ///
    /// The tile size is the largest that fits both axes: a row of
    /// `board_size` diamonds spans `board_size * tile_size` horizontally and
    /// `board_size * tile_size / 2` vertically. The board is centred
    /// horizontally and its left corner sits on the vertical midline.
    #[must_use]
    pub fn fit(width: f64, height: f64, board_size: f64) -> Self {
        let tile_size = (width / board_size).min(2.0 * height / board_size);
        let origin = Point::new(width * 0.5 - board_size * 0.5 * tile_size, height * 0.5);
        Self { tile_size, origin }
    }

    /// Project grid coordinates onto the surface. Fractional coordinates are
    /// allowed.
    #[must_use]
    pub fn project(&self, x: f64, y: f64) -> Point {
        Point {
            x: self.origin.x + (x + y) * self.tile_size * 0.5,
            y: self.origin.y + (y - x) * self.tile_size * 0.25,
        }
    }
}
