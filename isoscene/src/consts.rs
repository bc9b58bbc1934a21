//! Shared constants for the isoscene crate.

// ── Viewport ────────────────────────────────────────────────────

/// Multiplicative zoom change applied per wheel notch.
pub const ZOOM_STEP: f64 = 1.2;

/// Smallest allowed zoom factor (zoomed all the way out).
pub const MIN_ZOOM: f64 = 0.1;

/// Largest allowed zoom factor (zoomed all the way in).
pub const MAX_ZOOM: f64 = 10.0;

// ── Paint defaults ──────────────────────────────────────────────

/// Fill for tiles and ground when no material is given.
pub const TILE_MATERIAL: &str = "lightgrey";

/// Fill shared by all three faces of a block when no material is given.
pub const BLOCK_MATERIAL: &str = "grey";

/// Outline color for block faces.
pub const BLOCK_STROKE: &str = "black";

/// Outline width for block faces, in surface units.
pub const BLOCK_STROKE_WIDTH: f64 = 2.0;

/// Paint value meaning "draw nothing".
pub const NO_PAINT: &str = "none";

/// Border color around billboard images.
pub const IMAGE_BORDER_COLOR: &str = "black";

/// Border width around billboard images.
pub const IMAGE_BORDER_WIDTH: f64 = 1.0;

// ── SVG ─────────────────────────────────────────────────────────

/// XML namespace for SVG elements.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
