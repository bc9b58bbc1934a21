//! The drawing-surface capability and an in-memory SVG implementation.
//!
//! A [`Surface`] is what the scene draws into. The scene only ever appends,
//! removes, and resizes through this trait, so any backend that can create an
//! element, set its attributes and style transform, and report its own device
//! bounds can host a scene. [`SvgDocument`] keeps the tree in memory and
//! serializes it to SVG markup; the `web` feature provides a DOM-backed one.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::fmt::Write as _;

use crate::consts::SVG_NS;
use crate::drawable::{Drawable, ElementId};
use crate::error::SurfaceError;
use crate::geometry::{Point, Rect};

/// A vector drawing surface that holds an ordered list of children.
pub trait Surface {
    /// Set the surface's pixel size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the attribute update.
    fn set_size(&mut self, width: f64, height: f64) -> Result<(), SurfaceError>;

    /// Set the visible region in surface coordinates.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the attribute update.
    fn set_view_box(&mut self, region: Rect) -> Result<(), SurfaceError>;

    /// Create an element for `drawable` and append it as the last child.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element cannot be created or attached.
    fn append_child(&mut self, drawable: &Drawable) -> Result<(), SurfaceError>;

    /// Detach and discard the child with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::MissingChild`] if no such child exists, or
    /// another variant if the backend refuses the removal.
    fn remove_child(&mut self, id: ElementId) -> Result<(), SurfaceError>;

    /// Number of children currently attached.
    fn child_count(&self) -> usize;

    /// Whether a child with `id` is attached.
    fn contains(&self, id: ElementId) -> bool;

    /// Device-space bounding box of the surface (e.g. client pixels).
    fn bounding_rect(&self) -> Rect;

    /// Current visible region in surface coordinates.
    fn view_box(&self) -> Rect;

    /// Convert a device-space point into the surface's current coordinate
    /// space, honouring the view box.
    fn to_local(&self, device: Point) -> Point {
        self.bounding_rect().map_into(&self.view_box(), device)
    }
}

/// An in-memory SVG element.
#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    view_box: Rect,
    /// Where the element sits in device space; its size tracks `set_size`.
    device_origin: Point,
    children: Vec<Drawable>,
}

impl SvgDocument {
    /// An empty, zero-sized document anchored at device `(0, 0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the document at `origin` in device space, as if it were laid
    /// out below or beside other content.
    #[must_use]
    pub fn with_device_origin(mut self, origin: Point) -> Self {
        self.device_origin = origin;
        self
    }

    /// Children in draw order.
    #[must_use]
    pub fn children(&self) -> &[Drawable] {
        &self.children
    }

    /// Look up a child by id.
    #[must_use]
    pub fn child(&self, id: ElementId) -> Option<&Drawable> {
        self.children.iter().find(|d| d.id == id)
    }

    /// Serialize the document to standalone SVG markup.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let vb = self.view_box;
        let mut out = String::new();
        write_or_skip(&mut out, format_args!(
            "<svg xmlns=\"{SVG_NS}\" viewBox=\"{} {} {} {}\" width=\"{}px\" height=\"{}px\">\n",
            vb.x, vb.y, vb.width, vb.height, self.width, self.height
        ));
        for child in &self.children {
            out.push_str("  <");
            out.push_str(child.tag());
            for (name, value) in child.attributes() {
                write_or_skip(&mut out, format_args!(" {name}=\"{}\"", escape_attr(&value)));
            }
            if let Some(style) = child.style() {
                write_or_skip(&mut out, format_args!(" style=\"{}\"", escape_attr(&style)));
            }
            out.push_str("/>\n");
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgDocument {
    fn set_size(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn set_view_box(&mut self, region: Rect) -> Result<(), SurfaceError> {
        self.view_box = region;
        Ok(())
    }

    fn append_child(&mut self, drawable: &Drawable) -> Result<(), SurfaceError> {
        self.children.push(drawable.clone());
        Ok(())
    }

    fn remove_child(&mut self, id: ElementId) -> Result<(), SurfaceError> {
        let Some(index) = self.children.iter().position(|d| d.id == id) else {
            return Err(SurfaceError::MissingChild(id));
        };
        self.children.remove(index);
        Ok(())
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn contains(&self, id: ElementId) -> bool {
        self.children.iter().any(|d| d.id == id)
    }

    fn bounding_rect(&self) -> Rect {
        Rect::new(self.device_origin.x, self.device_origin.y, self.width, self.height)
    }

    fn view_box(&self) -> Rect {
        self.view_box
    }
}

fn write_or_skip(out: &mut String, args: std::fmt::Arguments<'_>) {
    if out.write_fmt(args).is_err() {
        tracing::warn!("svg serialization dropped a fragment");
    }
}

/// Escape a value for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
