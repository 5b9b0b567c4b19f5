//! CharacterPlugin wires the player's needs, actions and motion.
use bevy::prelude::*;

use crate::{
    core::plugin::update_simulation_clock,
    input::systems::{read_action_input, read_movement_input},
    world::systems::spawn_world_environment,
};

use super::{
    config::CharacterConfig,
    events::{ActivityChangedEvent, CharacterCommand},
    systems::{
        apply_activity_tint, handle_character_commands, move_character, spawn_player,
        tick_character_state, update_bed_countdown,
    },
};

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        let config = CharacterConfig::load_or_default();
        info!(
            "Character configured: max {:.0}, hunger decay {:.2}/s, sleepiness decay {:.2}/s, eat {:.1}s, sleep {:.1}s",
            config.stats.max,
            config.stats.hunger_decay_per_second,
            config.stats.sleepiness_decay_per_second,
            config.actions.eat_seconds,
            config.actions.sleep_seconds
        );

        app.insert_resource(config)
            .add_message::<CharacterCommand>()
            .add_message::<ActivityChangedEvent>()
            .add_systems(Startup, spawn_player.after(spawn_world_environment))
            .add_systems(
                Update,
                (
                    update_bed_countdown.after(update_simulation_clock),
                    handle_character_commands
                        .after(update_bed_countdown)
                        .after(read_movement_input)
                        .after(read_action_input),
                    tick_character_state
                        .after(update_simulation_clock)
                        .after(handle_character_commands),
                    move_character.after(tick_character_state),
                    apply_activity_tint.after(tick_character_state),
                ),
            );
    }
}
