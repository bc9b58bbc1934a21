use super::*;

fn paint() -> Paint {
    Paint::new("red", "black", 2.0)
}

// =============================================================
// Constructors
// =============================================================

#[test]
fn constructors_assign_fresh_ids() {
    let a = Drawable::polygon(vec![], paint(), Point::default());
    let b = Drawable::polygon(vec![], paint(), Point::default());
    assert_ne!(a.id, b.id);
}

#[test]
fn image_has_no_paint_or_translate() {
    let d = Drawable::image("a.png", Point::new(1.0, 2.0), 10.0, 20.0);
    assert!(d.paint.is_none());
    assert!(d.translate.is_none());
    assert_eq!(d.tag(), "image");
}

// =============================================================
// Attributes
// =============================================================

#[test]
fn polygon_attributes() {
    let d = Drawable::polygon(
        vec![Point::new(0.0, 0.0), Point::new(40.0, -20.0), Point::new(80.0, 0.0)],
        paint(),
        Point::new(5.0, 6.0),
    );
    assert_eq!(d.tag(), "polygon");
    assert_eq!(
        d.attributes(),
        vec![
            ("points", "0,0 40,-20 80,0".to_string()),
            ("fill", "red".to_string()),
            ("stroke", "black".to_string()),
            ("stroke-width", "2".to_string()),
        ]
    );
}

#[test]
fn polygon_points_fold_negative_zero() {
    let d = Drawable::polygon(vec![Point::new(-0.0, -0.0)], paint(), Point::default());
    assert_eq!(d.attributes()[0], ("points", "0,0".to_string()));
}

#[test]
fn image_attributes() {
    let d = Drawable::image("tree.png", Point::new(10.5, -3.0), 80.0, 160.0);
    assert_eq!(
        d.attributes(),
        vec![
            ("href", "tree.png".to_string()),
            ("width", "80px".to_string()),
            ("height", "160px".to_string()),
            ("x", "10.5".to_string()),
            ("y", "-3".to_string()),
        ]
    );
}

#[test]
fn rect_attributes_include_paint() {
    let d = Drawable::rect(Point::new(1.0, 2.0), 3.0, 4.0, Paint::new("none", "blue", 1.0));
    let attrs = d.attributes();
    assert_eq!(d.tag(), "rect");
    assert!(attrs.contains(&("width", "3px".to_string())));
    assert!(attrs.contains(&("fill", "none".to_string())));
    assert!(attrs.contains(&("stroke", "blue".to_string())));
}

// =============================================================
// Style
// =============================================================

#[test]
fn style_carries_translate() {
    let d = Drawable::polygon(vec![], paint(), Point::new(40.0, 280.0));
    assert_eq!(d.style().as_deref(), Some("transform: translate(40px,280px)"));
}

#[test]
fn style_absent_without_translate() {
    let d = Drawable::rect(Point::default(), 1.0, 1.0, paint());
    assert!(d.style().is_none());
}

#[test]
fn shape_serializes_with_kind_tag() {
    let d = Drawable::rect(Point::default(), 1.0, 1.0, paint());
    let json = serde_json::to_value(&d.shape).unwrap();
    assert_eq!(json["kind"], "rect");
}
