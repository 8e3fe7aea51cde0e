use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bouncer_shared::AnimationConfig;

use crate::constants::{color_from_hex, Colors};
use crate::coord::CanvasLayout;
use crate::link::EngineLink;

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Visuals,
}

pub struct CorePlugin {
    pub config: AnimationConfig,
}

#[derive(Component)]
struct MainCamera;

#[derive(Component)]
struct CanvasBackground;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(EngineLink::new(self.config.clone()))
            .insert_resource(CanvasLayout::new(self.config.surface()))
            .insert_resource(ClearColor(color_from_hex(Colors::PANEL_BG)))
            .configure_sets(Update, (UpdateSet::Input, UpdateSet::Visuals).chain())
            .add_systems(Startup, (setup_camera, spawn_canvas_background))
            .add_systems(Update, fit_camera_to_window);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Msaa::Sample4, MainCamera));
}

fn spawn_canvas_background(mut commands: Commands, layout: Res<CanvasLayout>) {
    let size = Vec2::new(layout.surface.width as f32, layout.surface.height as f32);
    commands.spawn((
        Sprite::from_color(color_from_hex(Colors::CANVAS_BG), size),
        Transform::from_translation(layout.surface_center(0.0)),
        CanvasBackground,
    ));
}

fn fit_camera_to_window(
    layout: Res<CanvasLayout>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut q_projection: Query<&mut Projection, With<MainCamera>>,
) {
    let Ok(window) = q_window.single() else {
        return;
    };

    if window.width() <= 0.0 || window.height() <= 0.0 {
        return;
    }

    let scale_x = layout.window.x / window.width();
    let scale_y = layout.window.y / window.height();
    let target_scale = scale_x.max(scale_y).max(0.0001);

    for mut projection in &mut q_projection {
        if let Projection::Orthographic(ortho) = &mut *projection {
            ortho.scale = target_scale;
        }
    }
}
