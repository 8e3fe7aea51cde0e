use std::collections::HashMap;

use bevy::prelude::*;
use bevy_prototype_lyon::prelude::*;
use bouncer_engine::surface::Primitive;
use bouncer_shared::BallId;

use crate::constants::{color_from_hex, Colors, BALL_OUTLINE_WIDTH};
use crate::coord::CanvasLayout;
use crate::link::EngineLink;

use super::UpdateSet;

const BALL_Z: f32 = 1.0;

pub struct BallPlugin;

/// Bevy-side mirror of one ball primitive on the engine canvas.
#[derive(Component)]
pub(crate) struct BallSprite {
    pub(crate) id: BallId,
}

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sync_balls_system.in_set(UpdateSet::Visuals));
    }
}

/// Mirror the canvas each frame: move known balls, spawn new ones, despawn
/// balls that were cleared.
fn sync_balls_system(
    mut commands: Commands,
    link: Res<EngineLink>,
    layout: Res<CanvasLayout>,
    mut q_balls: Query<(Entity, &BallSprite, &mut Transform)>,
) {
    let mut pending: HashMap<BallId, Primitive> =
        link.primitives().into_iter().map(|p| (p.id, p)).collect();

    for (entity, sprite, mut transform) in &mut q_balls {
        match pending.remove(&sprite.id) {
            Some(p) => transform.translation = layout.ball_translation(&p.rect, BALL_Z),
            None => commands.entity(entity).despawn(),
        }
    }

    for p in pending.into_values() {
        commands.spawn((
            ball_shape(&p),
            Transform::from_translation(layout.ball_translation(&p.rect, BALL_Z)),
            BallSprite { id: p.id },
        ));
    }
}

fn ball_shape(p: &Primitive) -> Shape {
    let ellipse = shapes::Ellipse {
        radii: Vec2::new(p.rect.width() as f32 * 0.5, p.rect.height() as f32 * 0.5),
        center: Vec2::ZERO,
    };
    let outline = (color_from_hex(Colors::OUTLINE), BALL_OUTLINE_WIDTH);

    match p.color {
        Some(color) => ShapeBuilder::with(&ellipse)
            .fill(color_from_hex(color.rgb()))
            .stroke(outline)
            .build(),
        // No color selected: outline only.
        None => ShapeBuilder::with(&ellipse).stroke(outline).build(),
    }
}
