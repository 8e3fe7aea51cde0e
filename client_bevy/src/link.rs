use std::sync::Arc;

use bevy::prelude::*;
use bouncer_engine::animation_loop::{run_animation_loop, AnimationCommand, AnimationHandle};
use bouncer_engine::controller::Animation;
use bouncer_engine::surface::{Canvas, Primitive, Surface};
use bouncer_shared::AnimationConfig;
use tokio::sync::mpsc;

/// Bridge between the render thread and the animation engine.
///
/// The engine runs on its own thread; bevy systems only enqueue commands and
/// read primitives back from the shared canvas.
#[derive(Resource)]
pub struct EngineLink {
    handle: AnimationHandle,
    canvas: Arc<Canvas>,
}

impl EngineLink {
    pub fn new(config: AnimationConfig) -> Self {
        let canvas = Arc::new(Canvas::new(config.surface()));
        let (cmd_tx, cmd_rx) = mpsc::channel::<AnimationCommand>(config.command_buffer.max(1));
        spawn_engine_thread(config, canvas.clone(), cmd_rx);

        Self {
            handle: AnimationHandle::from_sender(cmd_tx),
            canvas,
        }
    }

    /// Enqueue a command without blocking the frame. Returns false if the
    /// command was dropped.
    pub fn send(&self, cmd: AnimationCommand) -> bool {
        match self.handle.try_send(cmd) {
            Ok(()) => true,
            Err(e) => {
                warn!("Dropped animation command: {e}");
                false
            }
        }
    }

    pub fn primitives(&self) -> Vec<Primitive> {
        self.canvas.primitives()
    }

    #[cfg(test)]
    pub fn test_stub(
        surface: bouncer_shared::SurfaceSize,
    ) -> (Self, mpsc::Receiver<AnimationCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let link = Self {
            handle: AnimationHandle::from_sender(cmd_tx),
            canvas: Arc::new(Canvas::new(surface)),
        };
        (link, cmd_rx)
    }

    #[cfg(test)]
    pub fn canvas(&self) -> &Arc<Canvas> {
        &self.canvas
    }
}

fn spawn_engine_thread(
    config: AnimationConfig,
    canvas: Arc<Canvas>,
    cmd_rx: mpsc::Receiver<AnimationCommand>,
) {
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .enable_time()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to build animation runtime: {e}");
                return;
            }
        };

        info!("Animation engine started");
        rt.block_on(async move {
            let surface: Arc<dyn Surface> = canvas;
            let animation = Animation::new(&config, surface);
            run_animation_loop(cmd_rx, animation).await;
        });
    });
}
