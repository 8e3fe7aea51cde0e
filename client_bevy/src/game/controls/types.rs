use bevy::prelude::*;
use bouncer_engine::animation_loop::AnimationCommand;
use bouncer_shared::{BallColor, BallSize};

use crate::constants::Colors;

pub(super) const STATUS_LEFT: f32 = 40.0;
pub(super) const STATUS_TOP: f32 = 150.0;

/// One button of the control panel.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ControlButton {
    Start,
    Stop,
    Reset,
    SpeedUp,
    Color(BallColor),
    Create(BallSize),
}

impl ControlButton {
    pub(super) const ALL: [ControlButton; 10] = [
        ControlButton::Start,
        ControlButton::Stop,
        ControlButton::Reset,
        ControlButton::Color(BallColor::Red),
        ControlButton::Color(BallColor::Blue),
        ControlButton::Color(BallColor::Yellow),
        ControlButton::Create(BallSize::Small),
        ControlButton::Create(BallSize::Medium),
        ControlButton::Create(BallSize::Large),
        ControlButton::SpeedUp,
    ];

    pub(super) fn label(self) -> &'static str {
        match self {
            ControlButton::Start => "Start",
            ControlButton::Stop => "Stop",
            ControlButton::Reset => "Reset",
            ControlButton::SpeedUp => "Speed Up",
            ControlButton::Color(color) => color.label(),
            ControlButton::Create(size) => size.label(),
        }
    }

    /// Top-left corner inside the panel: transport controls in the first
    /// column, colors in the second, sizes in the third.
    pub(super) fn position(self) -> (f32, f32) {
        const COLUMNS: [f32; 3] = [40.0, 140.0, 240.0];
        const ROWS: [f32; 3] = [220.0, 300.0, 380.0];

        let (column, row) = match self {
            ControlButton::Start => (0, 0),
            ControlButton::Stop => (0, 1),
            ControlButton::Reset => (0, 2),
            ControlButton::Color(BallColor::Red) => (1, 0),
            ControlButton::Color(BallColor::Blue) => (1, 1),
            ControlButton::Color(BallColor::Yellow) => (1, 2),
            ControlButton::Create(BallSize::Small) => (2, 0),
            ControlButton::Create(BallSize::Medium) => (2, 1),
            ControlButton::Create(BallSize::Large) => (2, 2),
            ControlButton::SpeedUp => return (COLUMNS[1], 460.0),
        };
        (COLUMNS[column], ROWS[row])
    }

    pub(super) fn background(self) -> u32 {
        match self {
            ControlButton::Start | ControlButton::Stop | ControlButton::Reset => {
                Colors::CONTROL_BG
            }
            ControlButton::SpeedUp => Colors::SPEED_UP_BG,
            ControlButton::Color(color) => color.rgb(),
            ControlButton::Create(BallSize::Small) => Colors::SMALL_BG,
            ControlButton::Create(BallSize::Medium) => Colors::MEDIUM_BG,
            ControlButton::Create(BallSize::Large) => Colors::LARGE_BG,
        }
    }

    pub(super) fn text_color(self) -> u32 {
        match self {
            ControlButton::Start => Colors::START_TEXT,
            ControlButton::Stop => Colors::STOP_TEXT,
            ControlButton::Reset => Colors::RESET_TEXT,
            _ => Colors::LABEL,
        }
    }

    pub(super) fn command(self) -> AnimationCommand {
        match self {
            ControlButton::Start => AnimationCommand::Start,
            ControlButton::Stop => AnimationCommand::Stop,
            ControlButton::Reset => AnimationCommand::Reset { done: None },
            ControlButton::SpeedUp => AnimationCommand::SpeedUp,
            ControlButton::Color(color) => AnimationCommand::SetColor(Some(color)),
            ControlButton::Create(size) => AnimationCommand::CreateBall {
                size,
                response: None,
            },
        }
    }
}

/// What the panel believes the engine state is, from the buttons pressed.
#[derive(Resource, Default)]
pub(crate) struct ControlsUiState {
    pub(crate) running: bool,
    pub(crate) selected_color: Option<BallColor>,
}

impl ControlsUiState {
    pub(super) fn apply(&mut self, button: ControlButton) {
        match button {
            ControlButton::Start => self.running = true,
            ControlButton::Stop | ControlButton::Reset => self.running = false,
            ControlButton::Color(color) => self.selected_color = Some(color),
            ControlButton::SpeedUp | ControlButton::Create(_) => {}
        }
    }
}

#[derive(Component)]
pub(super) struct ControlsStatusText;
