//! Components attached to the player character.
use bevy::prelude::*;

/// Marker component identifying the player character.
#[derive(Component, Debug)]
pub struct Player;

/// Last movement intent forwarded by the character state machine.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MovementIntent(pub Vec2);

/// Proximity countdown that puts an idle character to bed.
///
/// Fires at most once per visit: after firing it stays `Spent` until the
/// character leaves the bed's range.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub enum BedCountdown {
    #[default]
    Away,
    Counting {
        remaining: f32,
    },
    Spent,
}

impl BedCountdown {
    /// Advances the countdown and returns `true` on the frame it expires.
    pub fn update(&mut self, in_range: bool, idle: bool, delta_seconds: f32, delay: f32) -> bool {
        if !in_range {
            *self = Self::Away;
            return false;
        }

        let remaining = match *self {
            Self::Spent => return false,
            Self::Away | Self::Counting { .. } if !idle => {
                *self = Self::Away;
                return false;
            }
            Self::Away => delay,
            Self::Counting { remaining } => remaining,
        } - delta_seconds.max(0.0);

        if remaining <= 0.0 {
            *self = Self::Spent;
            true
        } else {
            *self = Self::Counting { remaining };
            false
        }
    }
}
