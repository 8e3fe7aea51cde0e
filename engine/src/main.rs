use std::sync::Arc;
use std::time::Duration;

use bouncer_engine::animation_loop::AnimationHandle;
use bouncer_engine::error::BounceError;
use bouncer_engine::surface::Canvas;
use bouncer_shared::{AnimationConfig, BallColor, BallSize};

/// Snapshots printed per scripted phase
const FRAMES_PER_PHASE: u32 = 10;
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match AnimationConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid animation configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Validate configuration before starting
    if let Err(e) = config.validate() {
        eprintln!("Invalid animation configuration: {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "Starting headless animation on {}x{} surface",
        config.surface_width,
        config.surface_height
    );

    let surface = Arc::new(Canvas::new(config.surface()));
    let (handle, loop_task) = AnimationHandle::spawn(&config, surface);

    if let Err(e) = run_script(&handle).await {
        tracing::error!("Scripted session failed: {}", e);
    }

    drop(handle);
    let _ = loop_task.await;
}

async fn run_script(handle: &AnimationHandle) -> Result<(), BounceError> {
    let balls = [
        (Some(BallColor::Red), BallSize::Small),
        (Some(BallColor::Blue), BallSize::Medium),
        (Some(BallColor::Yellow), BallSize::Large),
        (None, BallSize::Small),
    ];
    for (color, size) in balls {
        handle.set_color(color).await?;
        handle.create_ball(size).await?;
    }

    handle.start().await?;
    print_frames(handle, FRAMES_PER_PHASE).await?;

    handle.speed_up().await?;
    print_frames(handle, FRAMES_PER_PHASE).await?;

    handle.stop().await?;
    print_frames(handle, 1).await?;

    handle.reset().await?;
    print_frames(handle, 1).await
}

async fn print_frames(handle: &AnimationHandle, frames: u32) -> Result<(), BounceError> {
    for _ in 0..frames {
        tokio::time::sleep(FRAME_INTERVAL).await;
        let snapshot = handle.snapshot().await?;
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::warn!("Failed to encode snapshot: {}", e),
        }
    }
    Ok(())
}
