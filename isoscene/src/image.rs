//! Billboard images: a raster image standing on a tile, framed by a border.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use serde::{Deserialize, Serialize};

use crate::consts::{IMAGE_BORDER_COLOR, IMAGE_BORDER_WIDTH, NO_PAINT};
use crate::drawable::{Drawable, Paint};
use crate::geometry::Point;
use crate::primitive::Primitive;
use crate::scene::Scene;
use crate::surface::Surface;

/// Placement, size, and border for a billboard image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageParams {
    pub x: f64,
    pub y: f64,
    /// Width in tile sizes.
    pub width_blocks: f64,
    /// Height in tile sizes.
    pub height_blocks: f64,
    pub href: String,
    /// Horizontal shift in tile sizes; positive moves right.
    pub offset_x: f64,
    /// Vertical shift in tile sizes; positive moves down.
    pub offset_y: f64,
    pub border_width: f64,
    pub border_color: String,
}

impl ImageParams {
    /// An unshifted image with the default border.
    #[must_use]
    pub fn new(x: f64, y: f64, width_blocks: f64, height_blocks: f64, href: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width_blocks,
            height_blocks,
            href: href.into(),
            offset_x: 0.0,
            offset_y: 0.0,
            border_width: IMAGE_BORDER_WIDTH,
            border_color: IMAGE_BORDER_COLOR.to_string(),
        }
    }
}

/// Handle for an image and its border, which share identical bounds.
#[derive(Debug, Clone)]
pub struct Image {
    params: ImageParams,
    /// Image, then border.
    parts: [Drawable; 2],
}

impl Image {
    #[must_use]
    pub fn params(&self) -> &ImageParams {
        &self.params
    }

    #[must_use]
    pub fn image(&self) -> &Drawable {
        &self.parts[0]
    }

    #[must_use]
    pub fn border(&self) -> &Drawable {
        &self.parts[1]
    }
}

impl Primitive for Image {
    fn drawables(&self) -> &[Drawable] {
        &self.parts
    }
}

/// Build an image whose bottom-left corner sits on the projected cell,
/// shifted by the offsets. Not added to the scene.
#[must_use]
pub fn build_image<S: Surface>(scene: &Scene<S>, params: ImageParams) -> Image {
    let s = scene.tile_size();
    let width = params.width_blocks * s;
    let height = params.height_blocks * s;
    let cell = scene.project(params.x, params.y);
    let at = Point::new(cell.x + params.offset_x * s, cell.y - height + params.offset_y * s);

    let image = Drawable::image(params.href.clone(), at, width, height);
    let border = Drawable::rect(
        at,
        width,
        height,
        Paint::new(NO_PAINT, params.border_color.clone(), params.border_width),
    );
    Image { params, parts: [image, border] }
}
