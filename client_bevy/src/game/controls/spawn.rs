use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors, BUTTON_HEIGHT, BUTTON_WIDTH, PANEL_WIDTH};
use crate::coord::CanvasLayout;

use super::types::{ControlButton, ControlsStatusText, STATUS_LEFT, STATUS_TOP};

pub(super) fn spawn_controls(mut commands: Commands, layout: Res<CanvasLayout>) {
    let label = TextFont::from_font_size(14.0);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(layout.surface.width as f32),
                top: Val::Px(0.0),
                width: Val::Px(PANEL_WIDTH),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(color_from_hex(Colors::PANEL_BG)),
        ))
        .with_children(|panel| {
            panel.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(STATUS_LEFT),
                    top: Val::Px(STATUS_TOP),
                    ..default()
                },
                Text::new(""),
                label.clone(),
                TextColor(color_from_hex(Colors::LABEL)),
                ControlsStatusText,
            ));

            for button in ControlButton::ALL {
                let (left, top) = button.position();
                panel
                    .spawn((
                        Button,
                        Node {
                            position_type: PositionType::Absolute,
                            left: Val::Px(left),
                            top: Val::Px(top),
                            width: Val::Px(BUTTON_WIDTH),
                            height: Val::Px(BUTTON_HEIGHT),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(color_from_hex(button.background())),
                        BorderColor::all(Color::NONE),
                        button,
                    ))
                    .with_children(|parent| {
                        parent.spawn((
                            Text::new(button.label()),
                            label.clone(),
                            TextColor(color_from_hex(button.text_color())),
                        ));
                    });
            }
        });
}
