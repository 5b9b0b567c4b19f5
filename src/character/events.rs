//! Messages flowing into and out of the character systems.
use bevy::prelude::{Event, Message, Vec2};

use super::state::Activity;

/// Request from the input driver or HUD to the character.
#[derive(Event, Message, Debug, Clone, Copy, PartialEq)]
pub enum CharacterCommand {
    Move(Vec2),
    Eat,
    Sleep,
    Dance,
}

/// Fired whenever the character's activity changes.
#[derive(Event, Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityChangedEvent {
    pub from: Activity,
    pub to: Activity,
}

impl ActivityChangedEvent {
    pub fn new(from: Activity, to: Activity) -> Self {
        Self { from, to }
    }
}
