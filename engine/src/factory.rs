//! Initial placement of new balls.

use bouncer_shared::{Axis, BallSize, Rect, SurfaceSize, Velocity};
use rand::Rng;

use crate::error::BounceError;

/// Where a new ball starts and how it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub rect: Rect,
    pub velocity: Velocity,
}

fn check_fits(size: BallSize, surface: SurfaceSize) -> Result<(), BounceError> {
    if surface.is_empty() {
        return Err(BounceError::NoSurface);
    }
    if surface.width < size.width() {
        return Err(BounceError::SurfaceTooSmall {
            axis: Axis::X,
            surface: surface.width,
            extent: size.width(),
        });
    }
    if surface.height < size.height() {
        return Err(BounceError::SurfaceTooSmall {
            axis: Axis::Y,
            surface: surface.height,
            extent: size.height(),
        });
    }
    Ok(())
}

fn random_unit(rng: &mut impl Rng) -> i32 {
    if rng.gen::<bool>() {
        1
    } else {
        -1
    }
}

/// Uniform top-left corner keeping the whole box on the surface, and a
/// diagonal unit velocity.
pub fn random_placement(
    size: BallSize,
    surface: SurfaceSize,
    rng: &mut impl Rng,
) -> Result<Placement, BounceError> {
    check_fits(size, surface)?;

    let x0 = rng.gen_range(0..=surface.width - size.width());
    let y0 = rng.gen_range(0..=surface.height - size.height());
    let vx = random_unit(rng);
    let vy = random_unit(rng);

    Ok(Placement {
        rect: Rect::from_origin(x0, y0, size.width(), size.height()),
        velocity: Velocity::new(vx, vy),
    })
}

/// Placement at a chosen corner with a chosen velocity.
pub fn fixed_placement(
    size: BallSize,
    surface: SurfaceSize,
    x0: i32,
    y0: i32,
    velocity: Velocity,
) -> Result<Placement, BounceError> {
    check_fits(size, surface)?;

    let rect = Rect::from_origin(x0, y0, size.width(), size.height());
    if !surface.contains(&rect) {
        return Err(BounceError::OutOfBounds { rect, surface });
    }
    Ok(Placement { rect, velocity })
}
