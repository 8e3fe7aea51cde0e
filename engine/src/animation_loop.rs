//! Command loop that owns the [`Animation`] and the handle used to drive it.
use std::sync::Arc;

use bouncer_shared::protocol::AnimationSnapshot;
use bouncer_shared::{AnimationConfig, BallColor, BallId, BallSize};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::controller::Animation;
use crate::error::BounceError;
use crate::surface::Surface;

/// Commands from the UI to the animation loop
pub enum AnimationCommand {
    SetColor(Option<BallColor>),
    /// Create a ball in the currently selected color
    CreateBall {
        size: BallSize,
        response: Option<oneshot::Sender<Result<BallId, BounceError>>>,
    },
    Start,
    Stop,
    Reset {
        done: Option<oneshot::Sender<()>>,
    },
    SpeedUp,
    Snapshot {
        response: oneshot::Sender<AnimationSnapshot>,
    },
}

/// Run the animation loop. Owns the animation state and applies commands in
/// arrival order until every sender is dropped.
pub async fn run_animation_loop(
    mut cmd_rx: mpsc::Receiver<AnimationCommand>,
    mut animation: Animation,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            AnimationCommand::SetColor(color) => {
                animation.set_color(color);
            }
            AnimationCommand::CreateBall { size, response } => {
                let color = animation.selected_color();
                let result = animation.create_ball(size, color);
                if let Err(e) = &result {
                    tracing::warn!("Rejected {:?} ball: {}", size, e);
                }
                if let Some(response) = response {
                    let _ = response.send(result);
                }
            }
            AnimationCommand::Start => animation.start(),
            AnimationCommand::Stop => animation.stop(),
            AnimationCommand::Reset { done } => {
                animation.reset().await;
                if let Some(done) = done {
                    let _ = done.send(());
                }
            }
            AnimationCommand::SpeedUp => animation.speed_up(),
            AnimationCommand::Snapshot { response } => {
                let _ = response.send(animation.snapshot());
            }
        }
    }

    animation.shutdown().await;
    tracing::info!("Animation loop ended");
}

/// Cloneable sender side of the animation loop.
#[derive(Clone)]
pub struct AnimationHandle {
    tx: mpsc::Sender<AnimationCommand>,
}

impl AnimationHandle {
    /// Spawn the loop on the current runtime.
    pub fn spawn(config: &AnimationConfig, surface: Arc<dyn Surface>) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(config.command_buffer.max(1));
        let animation = Animation::new(config, surface);
        let task = tokio::spawn(run_animation_loop(rx, animation));
        (Self { tx }, task)
    }

    pub fn from_sender(tx: mpsc::Sender<AnimationCommand>) -> Self {
        Self { tx }
    }

    /// Enqueue without waiting. Safe to call from a UI callback.
    pub fn try_send(&self, cmd: AnimationCommand) -> Result<(), BounceError> {
        self.tx.try_send(cmd).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => BounceError::Busy,
            mpsc::error::TrySendError::Closed(_) => BounceError::LoopClosed,
        })
    }

    async fn send(&self, cmd: AnimationCommand) -> Result<(), BounceError> {
        self.tx.send(cmd).await.map_err(|_| BounceError::LoopClosed)
    }

    pub async fn set_color(&self, color: Option<BallColor>) -> Result<(), BounceError> {
        self.send(AnimationCommand::SetColor(color)).await
    }

    pub async fn create_ball(&self, size: BallSize) -> Result<BallId, BounceError> {
        let (response, rx) = oneshot::channel();
        self.send(AnimationCommand::CreateBall {
            size,
            response: Some(response),
        })
        .await?;
        rx.await.map_err(|_| BounceError::LoopClosed)?
    }

    pub async fn start(&self) -> Result<(), BounceError> {
        self.send(AnimationCommand::Start).await
    }

    pub async fn stop(&self) -> Result<(), BounceError> {
        self.send(AnimationCommand::Stop).await
    }

    /// Resolves once every ball is gone and no motion task is left.
    pub async fn reset(&self) -> Result<(), BounceError> {
        let (done, rx) = oneshot::channel();
        self.send(AnimationCommand::Reset { done: Some(done) })
            .await?;
        rx.await.map_err(|_| BounceError::LoopClosed)
    }

    pub async fn speed_up(&self) -> Result<(), BounceError> {
        self.send(AnimationCommand::SpeedUp).await
    }

    pub async fn snapshot(&self) -> Result<AnimationSnapshot, BounceError> {
        let (response, rx) = oneshot::channel();
        self.send(AnimationCommand::Snapshot { response }).await?;
        rx.await.map_err(|_| BounceError::LoopClosed)
    }
}
