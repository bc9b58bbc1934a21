//! The demo board: a ground field, a marker tile, and a movable block.

use std::io::Write;

use isoscene::app::IsoApp;
use isoscene::block::{Block, BlockParams, PartialBlockParams};
use isoscene::error::SceneError;
use isoscene::geometry::Point;
use isoscene::ground::GroundParams;
use isoscene::input::{ViewportEvent, WheelDelta};
use isoscene::primitive::Primitive;
use isoscene::scene::{Scene, SceneConfig};
use isoscene::surface::{Surface, SvgDocument};
use isoscene::tile::TileParams;

use crate::config::{DemoConfig, OutputFormat, OutputTarget};

pub const GROUND_MATERIAL: &str = "#d5ded9";
pub const GROUND_STROKE: &str = "#838689";
pub const GROUND_STROKE_WIDTH: f64 = 2.0;
pub const MARKER_MATERIAL: &str = "blue";
pub const BLOCK_MATERIAL: &str = "red";

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("json encode failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The built board plus the handle of its movable block.
pub struct Board {
    pub scene: Scene<SvgDocument>,
    pub block: Block,
}

/// Build the board, replay `config.moves` on the block, then apply the
/// configured wheel clicks at the surface centre.
pub fn build_board(config: &DemoConfig) -> Result<Board, DemoError> {
    let mut app = IsoApp::new();
    let size = config.board_size;
    app.create_scene(SceneConfig::new(config.width, config.height, f64::from(size)), SvgDocument::new())?;

    let ground = GroundParams {
        material: GROUND_MATERIAL.into(),
        stroke: GROUND_STROKE.into(),
        stroke_width: GROUND_STROKE_WIDTH,
        ..GroundParams::new(size, size)
    };
    app.add_ground(&ground)?;

    let marker = app.add_tile(TileParams { material: MARKER_MATERIAL.into(), ..TileParams::at(3.0, 3.0) })?;
    marker.add_to_scene(app.scene_mut()?)?;

    let centre = f64::from(size / 2);
    let block = app.add_block(BlockParams { material: BLOCK_MATERIAL.into(), ..BlockParams::at(centre, centre, 1.0) })?;
    block.add_to_scene(app.scene_mut()?)?;

    let Some(mut scene) = app.take_scene() else {
        return Err(SceneError::UninitializedScene.into());
    };
    let block = apply_moves(&mut scene, block, &config.moves)?;
    apply_zoom(&mut scene, config.zoom_clicks)?;
    Ok(Board { scene, block })
}

/// Map one key press to a block update. Unknown keys map to `None`.
pub fn key_update(params: &BlockParams, key: char) -> Option<PartialBlockParams> {
    let update = match key {
        'w' => PartialBlockParams { x: Some(params.x + 1.0), ..Default::default() },
        's' => PartialBlockParams { x: Some(params.x - 1.0), ..Default::default() },
        'd' => PartialBlockParams { y: Some(params.y + 1.0), ..Default::default() },
        'a' => PartialBlockParams { y: Some(params.y - 1.0), ..Default::default() },
        'r' => PartialBlockParams { z: Some(params.z + 1.0), ..Default::default() },
        'f' => PartialBlockParams { z: Some(params.z - 1.0), ..Default::default() },
        _ => return None,
    };
    Some(update)
}

fn apply_moves(scene: &mut Scene<SvgDocument>, mut block: Block, moves: &str) -> Result<Block, SceneError> {
    for key in moves.chars().filter(|c| !c.is_whitespace()) {
        let Some(update) = key_update(block.params(), key) else {
            tracing::warn!(%key, "unknown move key skipped");
            continue;
        };
        block = block.update(scene, |_| update)?;
    }
    Ok(block)
}

fn apply_zoom(scene: &mut Scene<SvgDocument>, clicks: i32) -> Result<(), SceneError> {
    let bounds = scene.surface().bounding_rect();
    let at = Point::new(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0);
    // Scrolling up (negative dy) zooms in.
    let dy = if clicks > 0 { -1.0 } else { 1.0 };
    for _ in 0..clicks.unsigned_abs() {
        scene.handle_event(ViewportEvent::Wheel { at, delta: WheelDelta { dx: 0.0, dy } })?;
    }
    Ok(())
}

/// Render the board in the configured format.
pub fn render(scene: &Scene<SvgDocument>, format: OutputFormat) -> Result<String, DemoError> {
    match format {
        OutputFormat::Svg => Ok(scene.surface().to_svg()),
        OutputFormat::Json => Ok(scene.to_json()?),
    }
}

pub fn write_output(target: &OutputTarget, body: &str) -> Result<(), DemoError> {
    match target {
        OutputTarget::Stdout => {
            let mut out = std::io::stdout().lock();
            out.write_all(body.as_bytes())?;
            out.flush()?;
        }
        OutputTarget::File(path) => {
            std::fs::write(path, body)?;
            tracing::info!(path = %path.display(), bytes = body.len(), "board written");
        }
    }
    Ok(())
}

pub fn run(config: &DemoConfig) -> Result<(), DemoError> {
    let board = build_board(config)?;
    tracing::debug!(elements = board.scene.len(), zoom = board.scene.viewport().zoom, "board built");
    let body = render(&board.scene, config.format)?;
    write_output(&config.output, &body)
}

#[cfg(test)]
#[path = "demo_test.rs"]
mod tests;
