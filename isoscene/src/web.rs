//! Browser surface: a live `<svg>` element driven through `web-sys`.
//!
//! Enabled with the `web` feature. [`DomSurface`] implements [`Surface`] on a
//! DOM element it creates; mounting that element into the page is up to the
//! host. [`attach_viewport`] wires wheel and mouse events on the element to
//! the scene's viewport controller.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, MouseEvent, WheelEvent};

use crate::consts::SVG_NS;
use crate::drawable::{Drawable, ElementId};
use crate::error::SurfaceError;
use crate::geometry::{Point, Rect};
use crate::input::{ViewportEvent, WheelDelta};
use crate::scene::Scene;
use crate::surface::Surface;

/// An `<svg>` element plus the DOM nodes of its tracked children.
pub struct DomSurface {
    document: Document,
    svg: Element,
    nodes: HashMap<ElementId, Element>,
    view_box: Rect,
}

impl DomSurface {
    /// Create a detached `<svg>` element in `document`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::CreateElement`] if the DOM refuses.
    pub fn new(document: Document) -> Result<Self, SurfaceError> {
        let svg = create(&document, "svg")?;
        Ok(Self { document, svg, nodes: HashMap::new(), view_box: Rect::default() })
    }

    /// Create a detached `<svg>` element in the current window's document.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::CreateElement`] when there is no window or
    /// document, or the DOM refuses.
    pub fn from_window() -> Result<Self, SurfaceError> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Err(SurfaceError::CreateElement { tag: "svg".into(), reason: "no document available".into() });
        };
        Self::new(document)
    }

    /// The `<svg>` element, for mounting into the page.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.svg
    }
}

impl Surface for DomSurface {
    fn set_size(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        set_attr(&self.svg, "width", &format!("{width}px"))?;
        set_attr(&self.svg, "height", &format!("{height}px"))
    }

    fn set_view_box(&mut self, region: Rect) -> Result<(), SurfaceError> {
        let value = format!("{} {} {} {}", region.x, region.y, region.width, region.height);
        set_attr(&self.svg, "viewBox", &value)?;
        self.view_box = region;
        Ok(())
    }

    fn append_child(&mut self, drawable: &Drawable) -> Result<(), SurfaceError> {
        let node = create(&self.document, drawable.tag())?;
        for (name, value) in drawable.attributes() {
            set_attr(&node, name, &value)?;
        }
        if let Some(style) = drawable.style() {
            set_attr(&node, "style", &style)?;
        }
        self.svg.append_child(&node).map_err(|e| mutation(&e))?;
        self.nodes.insert(drawable.id, node);
        Ok(())
    }

    fn remove_child(&mut self, id: ElementId) -> Result<(), SurfaceError> {
        let Some(node) = self.nodes.get(&id) else {
            return Err(SurfaceError::MissingChild(id));
        };
        self.svg.remove_child(node).map_err(|e| mutation(&e))?;
        self.nodes.remove(&id);
        Ok(())
    }

    fn child_count(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(&id)
    }

    fn bounding_rect(&self) -> Rect {
        let r = self.svg.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }

    fn view_box(&self) -> Rect {
        self.view_box
    }
}

/// Subscribe wheel, mousedown, mousemove, mouseup, and mouseleave on the
/// scene's `<svg>` element. The listeners live as long as the page.
///
/// # Errors
///
/// Returns [`SurfaceError::Mutation`] if a listener cannot be registered.
pub fn attach_viewport(scene: &Rc<RefCell<Scene<DomSurface>>>) -> Result<(), SurfaceError> {
    let target = scene.borrow().surface().element().clone();

    let wheel_scene = Rc::clone(scene);
    let on_wheel = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
        event.prevent_default();
        let at = client_point(&event);
        let delta = WheelDelta { dx: event.delta_x(), dy: event.delta_y() };
        dispatch(&wheel_scene, ViewportEvent::Wheel { at, delta });
    });
    let callback: &js_sys::Function = on_wheel.as_ref().unchecked_ref();
    target
        .add_event_listener_with_callback("wheel", callback)
        .map_err(|e| mutation(&e))?;
    on_wheel.forget();

    listen_mouse(&target, scene, "mousedown", |at| ViewportEvent::PointerDown { at })?;
    listen_mouse(&target, scene, "mousemove", |at| ViewportEvent::PointerMove { at })?;
    listen_mouse(&target, scene, "mouseup", |at| ViewportEvent::PointerUp { at })?;
    listen_mouse(&target, scene, "mouseleave", |_| ViewportEvent::PointerLeave)?;
    tracing::debug!("viewport listeners attached");
    Ok(())
}

fn listen_mouse(
    target: &Element,
    scene: &Rc<RefCell<Scene<DomSurface>>>,
    name: &str,
    to_event: fn(Point) -> ViewportEvent,
) -> Result<(), SurfaceError> {
    let scene = Rc::clone(scene);
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        dispatch(&scene, to_event(client_point(&event)));
    });
    let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
    target
        .add_event_listener_with_callback(name, callback)
        .map_err(|e| mutation(&e))?;
    closure.forget();
    Ok(())
}

fn dispatch(scene: &Rc<RefCell<Scene<DomSurface>>>, event: ViewportEvent) {
    let Ok(mut scene) = scene.try_borrow_mut() else {
        tracing::warn!(?event, "scene busy; viewport event dropped");
        return;
    };
    if let Err(e) = scene.handle_event(event) {
        tracing::warn!(error = %e, "viewport update failed");
    }
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn create(document: &Document, tag: &str) -> Result<Element, SurfaceError> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| SurfaceError::CreateElement { tag: tag.to_string(), reason: format!("{e:?}") })
}

fn set_attr(node: &Element, name: &str, value: &str) -> Result<(), SurfaceError> {
    node.set_attribute(name, value).map_err(|e| mutation(&e))
}

fn mutation(e: &JsValue) -> SurfaceError {
    SurfaceError::Mutation(format!("{e:?}"))
}
