//! WorldPlugin sets up the room the character lives in.
use bevy::prelude::*;

use crate::world::{components::RoomBounds, systems::spawn_world_environment};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoomBounds>()
            .add_systems(Startup, spawn_world_environment);
    }
}
