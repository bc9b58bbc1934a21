//! Drawables: typed descriptions of single surface children.
//!
//! Builders produce drawables; surfaces materialize them. A drawable knows its
//! SVG tag, its ordered attribute list, and the style transform that places
//! it, so every backend renders the same markup.

#[cfg(test)]
#[path = "drawable_test.rs"]
mod drawable_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Point;

/// Unique identifier for a drawable on a surface.
pub type ElementId = Uuid;

/// Fill and outline shared by polygons and rects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// Fill color as a CSS color string (`"none"` for no fill).
    pub fill: String,
    /// Outline color as a CSS color string (`"none"` for no outline).
    pub stroke: String,
    /// Outline width in surface units.
    pub stroke_width: f64,
}

impl Paint {
    #[must_use]
    pub fn new(fill: impl Into<String>, stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self { fill: fill.into(), stroke: stroke.into(), stroke_width }
    }
}

/// Geometry of a drawable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Closed polygon; points are relative to the drawable's translate.
    Polygon { points: Vec<Point> },
    /// Raster image placed by its top-left corner.
    Image { href: String, x: f64, y: f64, width: f64, height: f64 },
    /// Axis-aligned rectangle placed by its top-left corner.
    Rect { x: f64, y: f64, width: f64, height: f64 },
}

/// One child of a drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub id: ElementId,
    pub shape: Shape,
    /// Absent for images, which carry no fill or stroke.
    pub paint: Option<Paint>,
    /// Style-level translation applied to the whole element.
    pub translate: Option<Point>,
}

impl Drawable {
    /// A polygon with the given tile-local points, translated to `at`.
    #[must_use]
    pub fn polygon(points: Vec<Point>, paint: Paint, at: Point) -> Self {
        Self { id: Uuid::new_v4(), shape: Shape::Polygon { points }, paint: Some(paint), translate: Some(at) }
    }

    /// An image whose top-left corner is `at`.
    #[must_use]
    pub fn image(href: impl Into<String>, at: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            shape: Shape::Image { href: href.into(), x: at.x, y: at.y, width, height },
            paint: None,
            translate: None,
        }
    }

    /// A rectangle whose top-left corner is `at`.
    #[must_use]
    pub fn rect(at: Point, width: f64, height: f64, paint: Paint) -> Self {
        Self {
            id: Uuid::new_v4(),
            shape: Shape::Rect { x: at.x, y: at.y, width, height },
            paint: Some(paint),
            translate: None,
        }
    }

    /// SVG element name.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self.shape {
            Shape::Polygon { .. } => "polygon",
            Shape::Image { .. } => "image",
            Shape::Rect { .. } => "rect",
        }
    }

    /// SVG attributes in emission order, excluding `style`.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        match &self.shape {
            Shape::Polygon { points } => {
                let joined = points
                    .iter()
                    .map(|p| format!("{},{}", num(p.x), num(p.y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                attrs.push(("points", joined));
            }
            Shape::Image { href, x, y, width, height } => {
                attrs.push(("href", href.clone()));
                attrs.push(("width", format!("{}px", num(*width))));
                attrs.push(("height", format!("{}px", num(*height))));
                attrs.push(("x", num(*x)));
                attrs.push(("y", num(*y)));
            }
            Shape::Rect { x, y, width, height } => {
                attrs.push(("x", num(*x)));
                attrs.push(("y", num(*y)));
                attrs.push(("width", format!("{}px", num(*width))));
                attrs.push(("height", format!("{}px", num(*height))));
            }
        }
        if let Some(paint) = &self.paint {
            attrs.push(("fill", paint.fill.clone()));
            attrs.push(("stroke", paint.stroke.clone()));
            attrs.push(("stroke-width", num(paint.stroke_width)));
        }
        attrs
    }

    /// Inline style carrying the translate, if any.
    #[must_use]
    pub fn style(&self) -> Option<String> {
        self.translate
            .map(|t| format!("transform: translate({}px,{}px)", num(t.x), num(t.y)))
    }
}

/// Format a coordinate for markup. Adding zero folds `-0` into `0`.
fn num(v: f64) -> String {
    format!("{}", v + 0.0)
}
