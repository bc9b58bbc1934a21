//! Error types for scene construction and element lifecycle.
//!
//! Every failure here is caller misuse or a surface backend refusing a call.
//! Nothing is retried; errors surface synchronously from the call that
//! caused them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::drawable::ElementId;

/// Failure reported by a drawing-surface backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The backend could not create an element for the given tag.
    #[error("element creation failed for <{tag}>: {reason}")]
    CreateElement { tag: String, reason: String },

    /// The backend rejected an attribute, child, or view box mutation.
    #[error("surface mutation failed: {0}")]
    Mutation(String),

    /// The surface has no child with this id.
    #[error("surface has no child {0}")]
    MissingChild(ElementId),
}

/// Errors returned by [`crate::scene::Scene`], the builders, and [`crate::app::IsoApp`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// An element call was made before any scene was created.
    #[error("scene not initialized")]
    UninitializedScene,

    /// The element is not currently tracked by the scene.
    #[error("unknown element {id}")]
    UnknownElement { id: ElementId },

    /// The element is already on the scene.
    #[error("element {id} is already in the scene")]
    ElementAlreadyAdded { id: ElementId },

    /// Scene dimensions would produce a zero, negative, or non-finite tile size.
    #[error("degenerate scene geometry: {0}")]
    DegenerateGeometry(String),

    /// A scene was created over a surface that already has children.
    #[error("surface already has {children} children")]
    SurfaceNotEmpty { children: usize },

    /// The drawing surface refused an operation.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Stable machine-readable code for an error value.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

impl ErrorCode for SurfaceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CreateElement { .. } => "E_SURFACE_CREATE",
            Self::Mutation(_) => "E_SURFACE_MUTATION",
            Self::MissingChild(_) => "E_SURFACE_MISSING_CHILD",
        }
    }
}

impl ErrorCode for SceneError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UninitializedScene => "E_UNINITIALIZED_SCENE",
            Self::UnknownElement { .. } => "E_UNKNOWN_ELEMENT",
            Self::ElementAlreadyAdded { .. } => "E_ELEMENT_ALREADY_ADDED",
            Self::DegenerateGeometry(_) => "E_DEGENERATE_GEOMETRY",
            Self::SurfaceNotEmpty { .. } => "E_SURFACE_NOT_EMPTY",
            Self::Surface(inner) => inner.error_code(),
        }
    }
}
