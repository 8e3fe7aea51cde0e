//! The animation controller that owns the registry and the motion tasks.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bouncer_shared::protocol::{AnimationSnapshot, BallView};
use bouncer_shared::{AnimationConfig, BallColor, BallId, BallSize, Velocity};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::BounceError;
use crate::factory::{fixed_placement, random_placement, Placement};
use crate::motion::{run_motion, tick_ball, MotionContext, Step};
use crate::registry::Registry;
use crate::surface::{lock, Surface};

/// Animation state owned by the animation loop task.
///
/// Methods that spawn motion tasks must run inside a tokio runtime.
pub struct Animation {
    surface: Arc<dyn Surface>,
    registry: Arc<Mutex<Registry>>,
    running: watch::Sender<bool>,
    tasks: HashMap<BallId, JoinHandle<()>>,
    selected_color: Option<BallColor>,
    rng: ChaCha8Rng,
    tick: Duration,
}

impl Animation {
    pub fn new(config: &AnimationConfig, surface: Arc<dyn Surface>) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let (running, _) = watch::channel(false);

        Self {
            surface,
            registry: Arc::new(Mutex::new(Registry::new())),
            running,
            tasks: HashMap::new(),
            selected_color: None,
            rng,
            tick: config.tick_interval(),
        }
    }

    pub fn surface(&self) -> &Arc<dyn Surface> {
        &self.surface
    }

    pub fn is_running(&self) -> bool {
        *self.running.borrow()
    }

    pub fn set_color(&mut self, color: Option<BallColor>) {
        self.selected_color = color;
    }

    pub fn selected_color(&self) -> Option<BallColor> {
        self.selected_color
    }

    /// Create a ball at a random spot. Starts moving right away if the
    /// animation is running.
    pub fn create_ball(
        &mut self,
        size: BallSize,
        color: Option<BallColor>,
    ) -> Result<BallId, BounceError> {
        let placement = random_placement(size, self.surface.size(), &mut self.rng)?;
        Ok(self.add(placement, color))
    }

    /// Create a ball with its top-left corner at `(x0, y0)` and the given
    /// velocity.
    pub fn create_ball_at(
        &mut self,
        size: BallSize,
        color: Option<BallColor>,
        x0: i32,
        y0: i32,
        velocity: Velocity,
    ) -> Result<BallId, BounceError> {
        let placement = fixed_placement(size, self.surface.size(), x0, y0, velocity)?;
        Ok(self.add(placement, color))
    }

    fn add(&mut self, placement: Placement, color: Option<BallColor>) -> BallId {
        let id = {
            let mut registry = lock(&self.registry);
            let id = self.surface.create_oval(placement.rect, color);
            registry.insert(id, placement.velocity);
            id
        };

        tracing::debug!(
            "Ball {} created at {:?} moving {:?}",
            id,
            placement.rect,
            placement.velocity
        );

        if self.is_running() {
            self.spawn_motion(id);
        }
        id
    }

    /// Set the run flag and start one motion task per registered ball.
    /// No-op if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.running.send_replace(true);

        let ids = lock(&self.registry).ids();
        for id in &ids {
            self.spawn_motion(*id);
        }
        tracing::info!("Animation started with {} balls", ids.len());
    }

    /// Clear the run flag and cancel motion tasks without waiting for them.
    pub fn stop(&mut self) {
        let was_running = self.running.send_replace(false);
        for handle in self.tasks.values() {
            handle.abort();
        }
        if was_running {
            tracing::info!("Animation stopped");
        }
    }

    /// Stop, wait until no motion task is left, then remove every ball.
    pub async fn reset(&mut self) {
        self.stop();
        self.join_tasks().await;

        let mut registry = lock(&self.registry);
        self.surface.clear();
        registry.clear();
        tracing::info!("Animation reset");
    }

    /// Double every ball's velocity, keeping its direction.
    pub fn speed_up(&mut self) {
        let mut registry = lock(&self.registry);
        registry.double_all(self.surface.size());
        tracing::info!("Speed doubled for {} balls", registry.len());
    }

    /// Advance one ball by a single tick outside of any motion task.
    pub fn step_ball(&self, id: BallId) -> Option<Step> {
        tick_ball(&self.registry, self.surface.as_ref(), id)
    }

    pub fn velocity(&self, id: BallId) -> Option<Velocity> {
        lock(&self.registry).velocity(id)
    }

    pub fn ball_count(&self) -> usize {
        lock(&self.registry).len()
    }

    /// Motion tasks that have not finished yet.
    pub fn active_tasks(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    pub fn snapshot(&self) -> AnimationSnapshot {
        let registry = lock(&self.registry);
        let balls = self
            .surface
            .primitives()
            .into_iter()
            .filter_map(|p| {
                registry.velocity(p.id).map(|velocity| BallView {
                    id: p.id,
                    rect: p.rect,
                    velocity,
                    color: p.color,
                })
            })
            .collect();

        AnimationSnapshot {
            running: *self.running.borrow(),
            selected_color: self.selected_color,
            surface: self.surface.size(),
            balls,
        }
    }

    /// Stop and join every motion task. Balls stay on the surface.
    pub async fn shutdown(&mut self) {
        self.stop();
        self.join_tasks().await;
    }

    fn spawn_motion(&mut self, id: BallId) {
        let ctx = MotionContext {
            registry: Arc::clone(&self.registry),
            surface: Arc::clone(&self.surface),
            running: self.running.subscribe(),
            tick: self.tick,
        };
        let handle = tokio::spawn(run_motion(id, ctx));
        if let Some(previous) = self.tasks.insert(id, handle) {
            previous.abort();
        }
    }

    async fn join_tasks(&mut self) {
        for (_, handle) in self.tasks.drain() {
            // Aborted tasks resolve to a cancellation error.
            let _ = handle.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;
    use bouncer_shared::{Rect, SurfaceSize};

    fn test_animation() -> Animation {
        let config = AnimationConfig {
            rng_seed: Some(12345),
            ..Default::default()
        };
        let surface = Arc::new(Canvas::new(SurfaceSize::new(720, 720)));
        Animation::new(&config, surface)
    }

    #[test]
    fn create_while_stopped_registers_without_task() {
        let mut anim = test_animation();
        let id = anim.create_ball(BallSize::Small, None).unwrap();
        assert_eq!(anim.ball_count(), 1);
        assert!(anim.surface().coords(id).is_some());
        assert_eq!(anim.active_tasks(), 0);
    }

    #[test]
    fn two_creations_get_distinct_ids() {
        let mut anim = test_animation();
        let a = anim
            .create_ball(BallSize::Medium, Some(BallColor::Red))
            .unwrap();
        let b = anim
            .create_ball(BallSize::Medium, Some(BallColor::Red))
            .unwrap();
        assert_ne!(a, b);
        assert!(anim.velocity(a).is_some());
        assert!(anim.velocity(b).is_some());

        let ra = anim.surface().coords(a).unwrap();
        let rb = anim.surface().coords(b).unwrap();
        assert_ne!(ra, rb, "seeded placements should differ");
    }

    #[test]
    fn speed_up_doubles_exactly() {
        let mut anim = test_animation();
        let id = anim
            .create_ball_at(BallSize::Small, None, 100, 100, Velocity::new(1, -1))
            .unwrap();
        anim.speed_up();
        assert_eq!(anim.velocity(id), Some(Velocity::new(2, -2)));
        anim.speed_up();
        assert_eq!(anim.velocity(id), Some(Velocity::new(4, -4)));
    }

    #[test]
    fn speed_up_to_the_cap_keeps_ball_shape() {
        let mut anim = test_animation();
        let id = anim
            .create_ball_at(BallSize::Small, None, 300, 300, Velocity::new(1, 1))
            .unwrap();
        for _ in 0..40 {
            anim.speed_up();
        }
        assert_eq!(anim.velocity(id), Some(Velocity::new(720, 720)));

        for _ in 0..50 {
            let step = anim.step_ball(id).unwrap();
            assert_eq!(step.rect.width(), 25);
            assert_eq!(step.rect.height(), 25);
            assert!(step.rect.x0.abs() <= 2 * 720, "{:?}", step.rect);
            assert!(step.rect.y0.abs() <= 2 * 720, "{:?}", step.rect);
            let (cx, cy) = step.rect.center();
            assert!(cx.is_finite() && cy.is_finite());
        }
    }

    #[test]
    fn snapshot_reports_color_and_velocity() {
        let mut anim = test_animation();
        anim.set_color(Some(BallColor::Yellow));
        let id = anim
            .create_ball_at(
                BallSize::Large,
                anim.selected_color(),
                10,
                20,
                Velocity::new(-1, 1),
            )
            .unwrap();

        let snap = anim.snapshot();
        assert!(!snap.running);
        assert_eq!(snap.selected_color, Some(BallColor::Yellow));
        let ball = snap.ball(id).unwrap();
        assert_eq!(ball.rect, Rect::new(10, 20, 85, 95));
        assert_eq!(ball.velocity, Velocity::new(-1, 1));
        assert_eq!(ball.color, Some(BallColor::Yellow));
    }

    #[test]
    fn failed_creation_leaves_no_trace() {
        let config = AnimationConfig::default();
        let surface = Arc::new(Canvas::new(SurfaceSize::new(720, 60)));
        let mut anim = Animation::new(&config, surface);

        assert!(anim.create_ball(BallSize::Large, None).is_err());
        assert_eq!(anim.ball_count(), 0);
        assert!(anim.surface().primitives().is_empty());
    }

    #[tokio::test]
    async fn start_is_idempotent() {
        let mut anim = test_animation();
        anim.create_ball(BallSize::Small, None).unwrap();
        anim.create_ball(BallSize::Small, None).unwrap();

        anim.start();
        anim.start();
        assert!(anim.is_running());
        assert_eq!(anim.tasks.len(), 2);

        anim.shutdown().await;
    }

    #[tokio::test]
    async fn reset_clears_registry_and_surface() {
        let mut anim = test_animation();
        anim.create_ball(BallSize::Small, None).unwrap();
        anim.create_ball(BallSize::Large, Some(BallColor::Blue))
            .unwrap();
        anim.start();
        tokio::time::sleep(Duration::from_millis(30)).await;

        anim.reset().await;
        assert!(!anim.is_running());
        assert_eq!(anim.ball_count(), 0);
        assert!(anim.surface().primitives().is_empty());
        assert_eq!(anim.active_tasks(), 0);
    }
}
