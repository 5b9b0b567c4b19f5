//! Components and resources used by the world module.
use bevy::prelude::*;

/// Screen pixels per world unit; speeds and ranges in config are in units.
pub const PIXELS_PER_UNIT: f32 = 64.0;

/// Where the character sits down to eat.
#[derive(Component, Debug, Default)]
pub struct FoodPlate;

/// Where the character lies down to sleep.
#[derive(Component, Debug, Default)]
pub struct Bed;

/// Walkable rectangle centred on the origin, in pixels.
#[derive(Resource, Debug, Clone, Copy)]
pub struct RoomBounds {
    pub half_extents: Vec2,
}

impl RoomBounds {
    pub fn from_units(half_width: f32, half_height: f32) -> Self {
        Self {
            half_extents: Vec2::new(half_width, half_height) * PIXELS_PER_UNIT,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Keeps a point of the given half size inside the room.
    pub fn clamp(&self, position: Vec2, half_size: Vec2) -> Vec2 {
        let limit = (self.half_extents - half_size).max(Vec2::ZERO);
        position.clamp(-limit, limit)
    }
}

impl Default for RoomBounds {
    fn default() -> Self {
        Self::from_units(6.0, 4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_body_inside_walls() {
        let room = RoomBounds {
            half_extents: Vec2::new(100.0, 50.0),
        };
        let half = Vec2::splat(10.0);

        assert_eq!(room.clamp(Vec2::new(20.0, -5.0), half), Vec2::new(20.0, -5.0));
        assert_eq!(room.clamp(Vec2::new(500.0, -80.0), half), Vec2::new(90.0, -40.0));
        assert_eq!(room.size(), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn oversized_body_is_pinned_to_centre() {
        let room = RoomBounds {
            half_extents: Vec2::splat(5.0),
        };
        assert_eq!(room.clamp(Vec2::new(3.0, 3.0), Vec2::splat(8.0)), Vec2::ZERO);
    }
}
