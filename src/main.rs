use bevy::prelude::*;

mod character;
mod core;
mod input;
mod ui;
mod world;

use crate::{
    character::CharacterPlugin, core::CorePlugin, input::InputPlugin, ui::UiPlugin,
    world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "lifesim".to_string(),
                    ..default()
                }),
                ..default()
            }),
            CorePlugin::default(),
            WorldPlugin,
            InputPlugin,
            CharacterPlugin, // After WorldPlugin so the player spawns into the room
            UiPlugin,
        ))
        .run();
}
