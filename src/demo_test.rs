#![allow(clippy::float_cmp)]

use super::*;

fn config(moves: &str, zoom_clicks: i32) -> DemoConfig {
    DemoConfig { moves: moves.to_string(), zoom_clicks, ..DemoConfig::default() }
}

// --- Board ---

#[test]
fn board_has_ground_marker_and_block() {
    let board = build_board(&DemoConfig::default()).unwrap();
    // 20x20 ground, one marker tile, three block faces.
    assert_eq!(board.scene.len(), 400 + 1 + 3);
    assert_eq!(board.scene.surface().child_count(), board.scene.len());
    assert_eq!(board.scene.tile_size(), 40.0);
}

#[test]
fn block_starts_at_board_centre() {
    let board = build_board(&DemoConfig::default()).unwrap();
    let p = board.block.params();
    assert_eq!((p.x, p.y, p.z), (10.0, 10.0, 1.0));
    assert_eq!(p.material, BLOCK_MATERIAL);
}

#[test]
fn odd_board_centre_rounds_down() {
    let cfg = DemoConfig { board_size: 5, ..DemoConfig::default() };
    let board = build_board(&cfg).unwrap();
    assert_eq!(board.block.params().x, 2.0);
}

#[test]
fn ground_uses_demo_paint() {
    let board = build_board(&DemoConfig::default()).unwrap();
    let first = board.scene.surface().children().first().unwrap();
    let attrs = first.attributes();
    assert!(attrs.iter().any(|(k, v)| *k == "fill" && v == GROUND_MATERIAL));
    assert!(attrs.iter().any(|(k, v)| *k == "stroke" && v == GROUND_STROKE));
}

// --- Moves ---

#[test]
fn key_update_maps_each_key() {
    let p = BlockParams::at(5.0, 5.0, 1.0);
    assert_eq!(key_update(&p, 'w').unwrap().x, Some(6.0));
    assert_eq!(key_update(&p, 's').unwrap().x, Some(4.0));
    assert_eq!(key_update(&p, 'd').unwrap().y, Some(6.0));
    assert_eq!(key_update(&p, 'a').unwrap().y, Some(4.0));
    assert_eq!(key_update(&p, 'r').unwrap().z, Some(2.0));
    assert_eq!(key_update(&p, 'f').unwrap().z, Some(0.0));
    assert!(key_update(&p, 'q').is_none());
}

#[test]
fn moves_are_replayed_on_block() {
    let board = build_board(&config("wwr", 0)).unwrap();
    let p = board.block.params();
    assert_eq!((p.x, p.y, p.z), (12.0, 10.0, 2.0));
    // The block was recreated, not duplicated.
    assert_eq!(board.scene.len(), 404);
    assert!(board.scene.contains(board.block.top().id));
}

#[test]
fn unknown_keys_are_skipped() {
    let board = build_board(&config("x d ?", 0)).unwrap();
    let p = board.block.params();
    assert_eq!((p.x, p.y), (10.0, 11.0));
}

// --- Zoom ---

#[test]
fn positive_clicks_zoom_in() {
    let board = build_board(&config("", 2)).unwrap();
    let zoom = board.scene.viewport().zoom;
    assert!((zoom - 1.44).abs() < 1e-9);
}

#[test]
fn negative_clicks_zoom_out() {
    let board = build_board(&config("", -1)).unwrap();
    let zoom = board.scene.viewport().zoom;
    assert!((zoom - 1.0 / 1.2).abs() < 1e-9);
}

// --- Output ---

#[test]
fn svg_output_has_one_polygon_per_element() {
    let board = build_board(&DemoConfig::default()).unwrap();
    let svg = render(&board.scene, OutputFormat::Svg).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<polygon").count(), 404);
}

#[test]
fn json_output_lists_elements() {
    let board = build_board(&DemoConfig::default()).unwrap();
    let json = render(&board.scene, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["elements"].as_array().unwrap().len(), 404);
    assert_eq!(value["config"]["board_size"], 20.0);
}

#[test]
fn degenerate_board_is_rejected() {
    let cfg = DemoConfig { board_size: 0, ..DemoConfig::default() };
    let err = build_board(&cfg).err().unwrap();
    assert!(matches!(err, DemoError::Scene(SceneError::DegenerateGeometry(_))));
}

#[test]
fn write_output_to_file() {
    let path = std::env::temp_dir().join(format!("isoboard-{}.svg", std::process::id()));
    write_output(&OutputTarget::File(path.clone()), "<svg/>").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    std::fs::remove_file(&path).unwrap();
}
