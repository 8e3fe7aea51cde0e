mod spawn;
mod systems;
mod types;

use bevy::prelude::*;

use super::UpdateSet;
use types::ControlsUiState;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlsUiState>()
            .add_systems(Startup, spawn::spawn_controls)
            .add_systems(
                Update,
                systems::handle_button_interactions.in_set(UpdateSet::Input),
            )
            .add_systems(
                Update,
                (systems::update_color_highlight, systems::update_status_ui)
                    .chain()
                    .in_set(UpdateSet::Visuals),
            );
    }
}
