use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};
use crate::link::EngineLink;

use super::types::{ControlButton, ControlsStatusText, ControlsUiState};

type ButtonInteractionQuery<'w, 's> = Query<
    'w,
    's,
    (&'static Interaction, &'static ControlButton),
    (Changed<Interaction>, With<Button>),
>;

pub(super) fn handle_button_interactions(
    buttons: ButtonInteractionQuery,
    link: Res<EngineLink>,
    mut ui: ResMut<ControlsUiState>,
) {
    for (interaction, button) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }

        if link.send(button.command()) {
            ui.apply(*button);
        }
    }
}

/// Outline the selected color button.
pub(super) fn update_color_highlight(
    ui: Res<ControlsUiState>,
    mut q_buttons: Query<(&ControlButton, &mut BorderColor)>,
) {
    if !ui.is_changed() {
        return;
    }

    for (button, mut border) in &mut q_buttons {
        let selected = matches!(button, ControlButton::Color(c) if ui.selected_color == Some(*c));
        *border = BorderColor::all(if selected {
            color_from_hex(Colors::SELECTED)
        } else {
            Color::NONE
        });
    }
}

pub(super) fn update_status_ui(
    ui: Res<ControlsUiState>,
    link: Res<EngineLink>,
    mut q_status: Query<&mut Text, With<ControlsStatusText>>,
) {
    let Ok(mut text) = q_status.single_mut() else {
        return;
    };

    let state = if ui.running { "Running" } else { "Stopped" };
    let count = link.primitives().len();
    let status = format!("{state} - {count} balls");
    if text.0 != status {
        text.0 = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouncer_engine::animation_loop::AnimationCommand;
    use bouncer_shared::{BallColor, BallSize, SurfaceSize};
    use tokio::sync::mpsc;

    fn make_test_app() -> (App, mpsc::Receiver<AnimationCommand>) {
        let (link, rx) = EngineLink::test_stub(SurfaceSize::new(720, 720));

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(link);
        app.init_resource::<ControlsUiState>();
        app.add_systems(Update, handle_button_interactions);
        (app, rx)
    }

    fn press(app: &mut App, button: ControlButton) {
        app.world_mut()
            .spawn((Button, Interaction::Pressed, button));
    }

    #[test]
    fn pressed_start_sends_start() {
        let (mut app, mut rx) = make_test_app();
        press(&mut app, ControlButton::Start);

        app.update();

        assert!(matches!(rx.try_recv(), Ok(AnimationCommand::Start)));
        assert!(app.world().resource::<ControlsUiState>().running);
    }

    #[test]
    fn color_then_size_sends_both_in_order() {
        let (mut app, mut rx) = make_test_app();
        press(&mut app, ControlButton::Color(BallColor::Red));
        app.update();
        press(&mut app, ControlButton::Create(BallSize::Medium));
        app.update();

        assert!(matches!(
            rx.try_recv(),
            Ok(AnimationCommand::SetColor(Some(BallColor::Red)))
        ));
        assert!(matches!(
            rx.try_recv(),
            Ok(AnimationCommand::CreateBall {
                size: BallSize::Medium,
                ..
            })
        ));
        assert_eq!(
            app.world().resource::<ControlsUiState>().selected_color,
            Some(BallColor::Red)
        );
    }

    #[test]
    fn dropped_command_leaves_ui_state_alone() {
        let (mut app, rx) = make_test_app();
        drop(rx);
        press(&mut app, ControlButton::Start);
        press(&mut app, ControlButton::Color(BallColor::Blue));

        app.update();

        let ui = app.world().resource::<ControlsUiState>();
        assert!(!ui.running);
        assert_eq!(ui.selected_color, None);
    }

    #[test]
    fn hovered_button_sends_nothing() {
        let (mut app, mut rx) = make_test_app();
        app.world_mut()
            .spawn((Button, Interaction::Hovered, ControlButton::Reset));

        app.update();

        assert!(rx.try_recv().is_err());
    }
}
