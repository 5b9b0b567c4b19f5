//! InputPlugin registers the input driver and pause handling.
use bevy::prelude::*;

use crate::input::{
    components::{ControlsState, PauseRequest},
    systems::{
        apply_pause_requests, controls_enabled, read_action_input, read_movement_input,
        read_pause_input,
    },
};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlsState>()
            .add_message::<PauseRequest>()
            .add_systems(
                Update,
                (
                    (read_movement_input, read_action_input).run_if(controls_enabled),
                    read_pause_input,
                    apply_pause_requests.after(read_pause_input),
                ),
            );
    }
}
