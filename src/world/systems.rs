//! Systems for the world module.
use bevy::prelude::*;

use crate::world::components::{Bed, FoodPlate, RoomBounds, PIXELS_PER_UNIT};

const FLOOR_COLOR: Color = Color::srgb(0.36, 0.29, 0.22);
const BED_COLOR: Color = Color::srgb(0.35, 0.45, 0.75);
const PLATE_COLOR: Color = Color::srgb(0.92, 0.9, 0.82);
const BED_POSITION: Vec2 = Vec2::new(-4.0, 2.5);
const PLATE_POSITION: Vec2 = Vec2::new(4.0, 2.5);

/// Spawns the 2D camera, the floor, the bed and the food plate.
pub fn spawn_world_environment(mut commands: Commands, room: Res<RoomBounds>) {
    commands.spawn((Camera2d, Name::new("Main Camera")));

    commands.spawn((
        Sprite::from_color(FLOOR_COLOR, room.size()),
        Transform::from_xyz(0.0, 0.0, 0.0),
        Name::new("Floor"),
    ));

    commands.spawn((
        Sprite::from_color(BED_COLOR, Vec2::new(1.2, 2.0) * PIXELS_PER_UNIT),
        Transform::from_translation((BED_POSITION * PIXELS_PER_UNIT).extend(0.5)),
        Bed,
        Name::new("Bed"),
    ));

    commands.spawn((
        Sprite::from_color(PLATE_COLOR, Vec2::splat(0.6 * PIXELS_PER_UNIT)),
        Transform::from_translation((PLATE_POSITION * PIXELS_PER_UNIT).extend(0.5)),
        FoodPlate,
        Name::new("Food Plate"),
    ));

    info!(
        "World spawned: room {:.0}x{:.0}px, bed at {:?}, plate at {:?}",
        room.size().x,
        room.size().y,
        BED_POSITION,
        PLATE_POSITION
    );
}
