mod constants;
mod coord;
mod game;
mod link;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use bevy_prototype_lyon::prelude::ShapePlugin;
use bouncer_shared::AnimationConfig;

use coord::CanvasLayout;
use game::{BallPlugin, ControlsPlugin, CorePlugin};

fn main() {
    let config = match AnimationConfig::from_env().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid animation configuration: {}", e);
            std::process::exit(1);
        }
    };
    let layout = CanvasLayout::new(config.surface());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ball Animation".to_string(),
                resolution: WindowResolution::new(layout.window.x as u32, layout.window.y as u32),
                present_mode: PresentMode::AutoVsync,
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ShapePlugin)
        .add_plugins(CorePlugin { config })
        .add_plugins(BallPlugin)
        .add_plugins(ControlsPlugin)
        .run();
}
