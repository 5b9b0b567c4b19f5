// src/ui/hud/plugin.rs
//
// UiPlugin coordinates the character HUD.

use bevy::prelude::*;

use crate::input::systems::apply_pause_requests;

use super::systems::{handle_hud_buttons, spawn_hud, sync_pause_panel, update_hud_readouts};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.add_systems(Startup, spawn_hud).add_systems(
            Update,
            (
                handle_hud_buttons.before(apply_pause_requests),
                update_hud_readouts,
                sync_pause_panel.after(apply_pause_requests),
            ),
        );
    }
}
