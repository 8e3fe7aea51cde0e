//! Per-ball motion: the pure step and the task that repeats it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bouncer_shared::{BallId, Rect, SurfaceSize, Velocity};
use tokio::sync::watch;

use crate::registry::Registry;
use crate::surface::{lock, Surface};

/// Result of one step: the translated box and which components to negate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub rect: Rect,
    pub flip_x: bool,
    pub flip_y: bool,
}

/// Translate `rect` by `velocity`, then test the translated box against the
/// surface edges. The translation is never corrected, so the box may
/// overshoot an edge by one step before the reflected velocity brings it
/// back. Both edges of an axis are checked with OR.
pub fn step(rect: Rect, velocity: Velocity, bounds: SurfaceSize) -> Step {
    let moved = rect.translated(velocity);
    Step {
        rect: moved,
        flip_x: moved.x1 >= bounds.width || moved.x0 <= 0,
        flip_y: moved.y1 >= bounds.height || moved.y0 <= 0,
    }
}

/// One tick for `id`. Read, move and reflect happen under the registry lock.
/// Returns `None` once the ball is no longer registered or drawn.
pub fn tick_ball(registry: &Mutex<Registry>, surface: &dyn Surface, id: BallId) -> Option<Step> {
    let mut registry = lock(registry);
    let velocity = registry.velocity(id)?;
    let rect = surface.coords(id)?;

    let next = step(rect, velocity, surface.size());
    if !surface.move_to(id, next.rect) {
        return None;
    }
    if next.flip_x {
        registry.reflect_x(id);
    }
    if next.flip_y {
        registry.reflect_y(id);
    }
    Some(next)
}

/// Everything a motion task shares with the controller.
#[derive(Clone)]
pub struct MotionContext {
    pub registry: Arc<Mutex<Registry>>,
    pub surface: Arc<dyn Surface>,
    pub running: watch::Receiver<bool>,
    pub tick: Duration,
}

/// Move `id` every tick until the run flag drops or the ball disappears.
pub async fn run_motion(id: BallId, mut ctx: MotionContext) {
    let mut ticks: u64 = 0;

    loop {
        let running = *ctx.running.borrow_and_update();
        if !running {
            break;
        }
        if tick_ball(&ctx.registry, ctx.surface.as_ref(), id).is_none() {
            break;
        }
        ticks += 1;

        tokio::select! {
            _ = tokio::time::sleep(ctx.tick) => {}
            changed = ctx.running.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    tracing::debug!("Ball {} motion ended after {} ticks", id, ticks);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;

    const SURFACE: SurfaceSize = SurfaceSize::new(720, 720);

    #[test]
    fn step_from_origin_without_reflection() {
        let s = step(Rect::new(0, 0, 25, 25), Velocity::new(1, 1), SURFACE);
        assert_eq!(s.rect, Rect::new(1, 1, 26, 26));
        assert!(!s.flip_x);
        assert!(!s.flip_y);
    }

    #[test]
    fn step_reaching_right_edge_flips_x() {
        let s = step(Rect::new(695, 300, 720, 325), Velocity::new(1, 0), SURFACE);
        assert!(s.rect.x1 >= 720);
        assert!(s.flip_x);
        assert!(!s.flip_y);
    }

    #[test]
    fn step_touching_left_edge_flips_x() {
        let s = step(Rect::new(1, 100, 26, 125), Velocity::new(-1, 1), SURFACE);
        assert_eq!(s.rect.x0, 0);
        assert!(s.flip_x);
    }

    #[test]
    fn corner_contact_flips_both() {
        let s = step(Rect::new(694, 694, 719, 719), Velocity::new(1, 1), SURFACE);
        assert!(s.flip_x);
        assert!(s.flip_y);
    }

    #[test]
    fn overshoot_is_not_corrected() {
        let s = step(Rect::new(690, 10, 715, 35), Velocity::new(8, 1), SURFACE);
        assert_eq!(s.rect.x1, 723);
        assert!(s.flip_x);
    }

    #[test]
    fn spanning_box_flips_every_step() {
        // A box as wide as the surface touches both edges whatever it does.
        let bounds = SurfaceSize::new(50, 720);
        let mut rect = Rect::new(0, 100, 50, 125);
        let mut v = Velocity::new(1, 1);
        let mut signs = Vec::new();
        for _ in 0..4 {
            let s = step(rect, v, bounds);
            assert!(s.flip_x);
            rect = s.rect;
            v.reflect_x();
            signs.push(v.vx);
        }
        assert_eq!(signs, vec![-1, 1, -1, 1]);
    }

    #[test]
    fn extent_constant_over_many_steps() {
        let mut rect = Rect::new(300, 40, 375, 115);
        let mut v = Velocity::new(4, -4);
        for _ in 0..5_000 {
            let s = step(rect, v, SURFACE);
            rect = s.rect;
            if s.flip_x {
                v.reflect_x();
            }
            if s.flip_y {
                v.reflect_y();
            }
            assert_eq!(rect.width(), 75);
            assert_eq!(rect.height(), 75);
        }
    }

    #[test]
    fn tick_ball_writes_position_and_reflects() {
        let canvas = Canvas::new(SURFACE);
        let registry = Mutex::new(Registry::new());
        let id = canvas.create_oval(Rect::new(695, 0, 720, 25), None);
        lock(&registry).insert(id, Velocity::new(1, 0));

        let s = tick_ball(&registry, &canvas, id).unwrap();
        assert_eq!(canvas.coords(id), Some(s.rect));
        assert_eq!(lock(&registry).velocity(id), Some(Velocity::new(-1, 0)));
    }

    #[test]
    fn tick_ball_on_unregistered_id_stops() {
        let canvas = Canvas::new(SURFACE);
        let registry = Mutex::new(Registry::new());
        let id = canvas.create_oval(Rect::new(10, 10, 35, 35), None);

        assert!(tick_ball(&registry, &canvas, id).is_none());
        assert_eq!(canvas.coords(id), Some(Rect::new(10, 10, 35, 35)));
    }

    #[test]
    fn tick_ball_after_surface_clear_stops() {
        let canvas = Canvas::new(SURFACE);
        let registry = Mutex::new(Registry::new());
        let id = canvas.create_oval(Rect::new(10, 10, 35, 35), None);
        lock(&registry).insert(id, Velocity::new(1, 1));
        canvas.clear();

        assert!(tick_ball(&registry, &canvas, id).is_none());
        assert_eq!(lock(&registry).velocity(id), Some(Velocity::new(1, 1)));
    }
}
