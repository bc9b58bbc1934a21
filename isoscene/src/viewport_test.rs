#![allow(clippy::float_cmp)]

use super::*;
use crate::surface::SvgDocument;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn setup() -> (ViewportController, SvgDocument) {
    let mut doc = SvgDocument::new();
    doc.set_size(800.0, 600.0).unwrap();
    doc.set_view_box(Rect::new(0.0, 0.0, 800.0, 600.0)).unwrap();
    (ViewportController::new(800.0, 600.0), doc)
}

fn wheel(at: Point, dy: f64) -> ViewportEvent {
    ViewportEvent::Wheel { at, delta: WheelDelta { dx: 0.0, dy } }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn starts_full_canvas_at_zoom_one() {
    let (ctl, _) = setup();
    assert_eq!(ctl.viewport(), Viewport::full(800.0, 600.0));
    assert_eq!(ctl.viewport().zoom, 1.0);
    assert_eq!(ctl.drag_state(), DragState::Idle);
}

// =============================================================
// Zoom
// =============================================================

#[test]
fn wheel_up_zooms_in_by_step() {
    let (mut ctl, mut doc) = setup();
    assert!(ctl.handle(wheel(Point::new(400.0, 300.0), -1.0), &mut doc).unwrap());
    let vp = ctl.viewport();
    assert!(approx_eq(vp.zoom, ZOOM_STEP));
    assert!(approx_eq(vp.region.width, 800.0 / ZOOM_STEP));
    assert!(approx_eq(vp.region.height, 600.0 / ZOOM_STEP));
    assert_eq!(doc.view_box(), vp.region);
}

#[test]
fn wheel_down_zooms_out_by_step() {
    let (mut ctl, mut doc) = setup();
    ctl.handle(wheel(Point::new(0.0, 0.0), 1.0), &mut doc).unwrap();
    assert!(approx_eq(ctl.viewport().zoom, 1.0 / ZOOM_STEP));
}

#[test]
fn wheel_in_then_out_restores_zoom() {
    let (mut ctl, mut doc) = setup();
    ctl.handle(wheel(Point::new(100.0, 100.0), -1.0), &mut doc).unwrap();
    ctl.handle(wheel(Point::new(100.0, 100.0), 1.0), &mut doc).unwrap();
    assert!(approx_eq(ctl.viewport().zoom, 1.0));
    assert!(point_approx_eq(ctl.viewport().region.origin(), Point::new(0.0, 0.0)));
}

#[test]
fn horizontal_wheel_is_ignored() {
    let (mut ctl, mut doc) = setup();
    let changed = ctl
        .handle(ViewportEvent::Wheel { at: Point::new(1.0, 1.0), delta: WheelDelta { dx: 30.0, dy: 0.0 } }, &mut doc)
        .unwrap();
    assert!(!changed);
    assert_eq!(ctl.viewport(), Viewport::full(800.0, 600.0));
}

#[test]
fn zoom_keeps_point_under_pointer() {
    let (mut ctl, mut doc) = setup();
    let at = Point::new(250.0, 130.0);
    for dy in [-1.0, -1.0, 1.0, -1.0, -1.0] {
        let before = doc.to_local(at);
        ctl.handle(wheel(at, dy), &mut doc).unwrap();
        let after = doc.to_local(at);
        assert!(point_approx_eq(before, after), "{before:?} != {after:?}");
    }
}

#[test]
fn zoom_anchor_holds_with_device_offset() {
    let mut doc = SvgDocument::new().with_device_origin(Point::new(40.0, 25.0));
    doc.set_size(800.0, 600.0).unwrap();
    doc.set_view_box(Rect::new(0.0, 0.0, 800.0, 600.0)).unwrap();
    let mut ctl = ViewportController::new(800.0, 600.0);
    let at = Point::new(500.0, 400.0);
    let before = doc.to_local(at);
    ctl.handle(wheel(at, -1.0), &mut doc).unwrap();
    assert!(point_approx_eq(before, doc.to_local(at)));
}

#[test]
fn zoom_in_is_clamped_to_max() {
    let (mut ctl, mut doc) = setup();
    for _ in 0..100 {
        ctl.handle(wheel(Point::new(400.0, 300.0), -1.0), &mut doc).unwrap();
        assert!(ctl.viewport().zoom <= MAX_ZOOM);
    }
    assert!(approx_eq(ctl.viewport().zoom, MAX_ZOOM));
    assert!(approx_eq(ctl.viewport().region.width, 80.0));
}

#[test]
fn zoom_out_is_clamped_to_min() {
    let (mut ctl, mut doc) = setup();
    for _ in 0..100 {
        ctl.handle(wheel(Point::new(400.0, 300.0), 1.0), &mut doc).unwrap();
        assert!(ctl.viewport().zoom >= MIN_ZOOM);
    }
    assert!(approx_eq(ctl.viewport().zoom, MIN_ZOOM));
}

// =============================================================
// Pan
// =============================================================

#[test]
fn pointer_down_starts_panning() {
    let (mut ctl, mut doc) = setup();
    let changed = ctl.handle(ViewportEvent::PointerDown { at: Point::new(10.0, 10.0) }, &mut doc).unwrap();
    assert!(!changed);
    assert_eq!(ctl.drag_state(), DragState::Panning { press: Point::new(10.0, 10.0), origin: Point::new(0.0, 0.0) });
}

#[test]
fn move_without_press_does_nothing() {
    let (mut ctl, mut doc) = setup();
    let changed = ctl.handle(ViewportEvent::PointerMove { at: Point::new(50.0, 50.0) }, &mut doc).unwrap();
    assert!(!changed);
    assert_eq!(ctl.viewport(), Viewport::full(800.0, 600.0));
}

#[test]
fn drag_at_zoom_one_shifts_by_negative_delta() {
    let (mut ctl, mut doc) = setup();
    let a = Point::new(100.0, 200.0);
    let b = Point::new(160.0, 170.0);
    ctl.handle(ViewportEvent::PointerDown { at: a }, &mut doc).unwrap();
    assert!(ctl.handle(ViewportEvent::PointerMove { at: b }, &mut doc).unwrap());
    let origin = ctl.viewport().region.origin();
    assert!(point_approx_eq(origin, Point::new(-(b.x - a.x), -(b.y - a.y))));
    assert_eq!(doc.view_box().origin(), origin);
}

#[test]
fn drag_moves_are_relative_to_press_not_cumulative() {
    let (mut ctl, mut doc) = setup();
    ctl.handle(ViewportEvent::PointerDown { at: Point::new(0.0, 0.0) }, &mut doc).unwrap();
    ctl.handle(ViewportEvent::PointerMove { at: Point::new(10.0, 0.0) }, &mut doc).unwrap();
    ctl.handle(ViewportEvent::PointerMove { at: Point::new(30.0, 0.0) }, &mut doc).unwrap();
    assert!(approx_eq(ctl.viewport().region.x, -30.0));
}

#[test]
fn drag_is_divided_by_zoom() {
    let (mut ctl, mut doc) = setup();
    ctl.handle(wheel(Point::new(0.0, 0.0), -1.0), &mut doc).unwrap();
    let start = ctl.viewport().region.origin();
    ctl.handle(ViewportEvent::PointerDown { at: Point::new(300.0, 300.0) }, &mut doc).unwrap();
    ctl.handle(ViewportEvent::PointerMove { at: Point::new(240.0, 300.0) }, &mut doc).unwrap();
    let origin = ctl.viewport().region.origin();
    assert!(approx_eq(origin.x, start.x + 60.0 / ZOOM_STEP));
    assert!(approx_eq(origin.y, start.y));
}

#[test]
fn pointer_up_ends_drag() {
    let (mut ctl, mut doc) = setup();
    ctl.handle(ViewportEvent::PointerDown { at: Point::new(0.0, 0.0) }, &mut doc).unwrap();
    ctl.handle(ViewportEvent::PointerUp { at: Point::new(5.0, 5.0) }, &mut doc).unwrap();
    assert_eq!(ctl.drag_state(), DragState::Idle);
    ctl.handle(ViewportEvent::PointerMove { at: Point::new(90.0, 90.0) }, &mut doc).unwrap();
    assert_eq!(ctl.viewport(), Viewport::full(800.0, 600.0));
}

#[test]
fn pointer_leave_ends_drag() {
    let (mut ctl, mut doc) = setup();
    ctl.handle(ViewportEvent::PointerDown { at: Point::new(0.0, 0.0) }, &mut doc).unwrap();
    ctl.handle(ViewportEvent::PointerLeave, &mut doc).unwrap();
    assert!(!ctl.drag_state().is_panning());
}

#[test]
fn zoom_during_drag_keeps_drag_alive() {
    let (mut ctl, mut doc) = setup();
    ctl.handle(ViewportEvent::PointerDown { at: Point::new(0.0, 0.0) }, &mut doc).unwrap();
    ctl.handle(wheel(Point::new(400.0, 300.0), -1.0), &mut doc).unwrap();
    assert!(ctl.drag_state().is_panning());
}
