// src/ui/hud/components.rs
//
// Components for the character HUD.

use bevy::prelude::*;

use crate::character::state::CharacterState;

/// Text node that mirrors one piece of character state.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudReadout {
    Hunger,
    Sleepiness,
    Activity,
}

impl HudReadout {
    /// Renders the readout for the given character.
    pub fn render(self, state: &CharacterState) -> String {
        match self {
            Self::Hunger => format_stat("Hunger", state.hunger(), state.max()),
            Self::Sleepiness => format_stat("Sleepiness", state.sleepiness(), state.max()),
            Self::Activity => match state.remaining_action_seconds() {
                Some(remaining) => {
                    format!("Status: {} ({:.1}s)", state.activity().label(), remaining)
                }
                None => format!("Status: {}", state.activity().label()),
            },
        }
    }
}

/// Button actions offered by the HUD.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudButton {
    Eat,
    Sleep,
    Dance,
    Pause,
    Resume,
}

impl HudButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::Eat => "Eat",
            Self::Sleep => "Sleep",
            Self::Dance => "Dance",
            Self::Pause => "Pause",
            Self::Resume => "Resume",
        }
    }
}

/// Marker for the pause overlay.
#[derive(Component, Debug)]
pub struct PausePanel;

fn format_stat(label: &str, value: f32, max: f32) -> String {
    format!("{}: {:.0}/{:.0}", label, value.round(), max)
}
