//! Isometric scene engine: grid projection, primitive builders, and the
//! element lifecycle that keeps a vector drawing surface in sync.
//!
//! The crate renders ground tiles, cuboid blocks, and billboarded images onto
//! any [`surface::Surface`]. An in-memory SVG tree ships with the crate; the
//! `web` feature adds a browser-backed surface driven through `web-sys`. Pan
//! and zoom are handled by a small gesture state machine that only ever
//! touches the surface's visible region.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scene`] | [`scene::Scene`]: surface ownership and tracked-element bookkeeping |
//! | [`grid`] | Isometric projection from grid cells to surface coordinates |
//! | [`geometry`] | `Point` and `Rect` value types |
//! | [`drawable`] | Typed description of one surface child |
//! | [`surface`] | The drawing-surface capability and the in-memory [`surface::SvgDocument`] |
//! | [`primitive`] | The [`primitive::Primitive`] handle contract |
//! | [`tile`], [`block`], [`image`], [`ground`] | Primitive builders and their handles |
//! | [`viewport`] | Pan/zoom state and the gesture controller |
//! | [`input`] | Viewport event types and the drag state machine |
//! | [`app`] | [`app::IsoApp`], a facade that owns an optional scene |
//! | [`error`] | [`error::SceneError`] and [`error::SurfaceError`] |
//! | [`consts`] | Shared constants (zoom limits, default paints) |
//! | `web` | `DomSurface` and browser event wiring (feature `web`) |

pub mod app;
pub mod block;
pub mod consts;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod ground;
pub mod image;
pub mod input;
pub mod primitive;
pub mod scene;
pub mod surface;
pub mod tile;
pub mod viewport;
#[cfg(feature = "web")]
pub mod web;

pub use error::{SceneError, SurfaceError};
pub use primitive::Primitive;
pub use scene::{Scene, SceneConfig, create_scene};
