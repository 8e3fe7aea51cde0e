//! Errors reported by the animation engine.

use std::fmt;

use bouncer_shared::{Axis, Rect, SurfaceSize};

/// Errors that can occur while creating balls or talking to the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BounceError {
    /// The drawing surface has no area.
    NoSurface,
    /// The surface is smaller than the requested ball on one axis.
    SurfaceTooSmall { axis: Axis, surface: i32, extent: i32 },
    /// A forced placement does not fit inside the surface.
    OutOfBounds { rect: Rect, surface: SurfaceSize },
    /// The animation loop is gone.
    LoopClosed,
    /// The command channel is at capacity.
    Busy,
}

impl fmt::Display for BounceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BounceError::NoSurface => write!(f, "drawing surface has no area"),
            BounceError::SurfaceTooSmall {
                axis,
                surface,
                extent,
            } => write!(
                f,
                "surface {} extent {} is smaller than ball extent {}",
                axis, surface, extent
            ),
            BounceError::OutOfBounds { rect, surface } => write!(
                f,
                "ball ({}, {}, {}, {}) outside {}x{} surface",
                rect.x0, rect.y0, rect.x1, rect.y1, surface.width, surface.height
            ),
            BounceError::LoopClosed => write!(f, "animation loop closed"),
            BounceError::Busy => write!(f, "animation loop is busy"),
        }
    }
}

impl std::error::Error for BounceError {}
