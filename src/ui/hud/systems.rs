// src/ui/hud/systems.rs
//
// Systems for spawning and refreshing the character HUD.

use bevy::prelude::*;

use crate::{
    character::{components::Player, events::CharacterCommand, state::CharacterState},
    core::SimulationClock,
    input::components::PauseRequest,
};

use super::components::{HudButton, HudReadout, PausePanel};

// Visual constants
const PANEL_COLOR: Color = Color::srgba(0.08, 0.08, 0.1, 0.85);
const BORDER_COLOR: Color = Color::srgb(0.3, 0.3, 0.32);
const BUTTON_COLOR: Color = Color::srgba(0.18, 0.18, 0.22, 0.95);
const BUTTON_HOVER_COLOR: Color = Color::srgba(0.26, 0.26, 0.32, 0.95);
const BUTTON_PRESSED_COLOR: Color = Color::srgba(0.35, 0.5, 0.35, 0.95);
const OVERLAY_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);
const TEXT_COLOR: Color = Color::WHITE;
const READOUT_FONT_SIZE: f32 = 18.0;
const BUTTON_FONT_SIZE: f32 = 16.0;

/// Spawns the stat panel, the action bar and the (hidden) pause overlay.
pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                left: Val::Px(16.0),
                padding: UiRect::all(Val::Px(12.0)),
                border: UiRect::all(Val::Px(2.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
            BorderColor::from(BORDER_COLOR),
            Name::new("Stat Panel"),
        ))
        .with_children(|parent| {
            for readout in [HudReadout::Hunger, HudReadout::Sleepiness, HudReadout::Activity] {
                parent.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: READOUT_FONT_SIZE,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                    readout,
                ));
            }
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(16.0),
                right: Val::Px(16.0),
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(8.0),
                ..default()
            },
            Name::new("Action Bar"),
        ))
        .with_children(|parent| {
            for button in [HudButton::Eat, HudButton::Sleep, HudButton::Dance, HudButton::Pause] {
                spawn_button(parent, button);
            }
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                display: Display::None,
                ..default()
            },
            BackgroundColor(OVERLAY_COLOR),
            PausePanel,
            Name::new("Pause Panel"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Paused"),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
            spawn_button(parent, HudButton::Resume);
        });
}

fn spawn_button(parent: &mut ChildSpawnerCommands, button: HudButton) {
    parent
        .spawn((
            Node {
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                border: UiRect::all(Val::Px(1.5)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Button,
            Interaction::None,
            BackgroundColor(BUTTON_COLOR),
            BorderColor::from(BORDER_COLOR),
            button,
            Name::new(format!("{} Button", button.label())),
        ))
        .with_children(|label| {
            label.spawn((
                Text::new(button.label()),
                TextFont {
                    font_size: BUTTON_FONT_SIZE,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}

/// Polls the player's state and refreshes every readout.
pub fn update_hud_readouts(
    player: Query<&CharacterState, With<Player>>,
    mut readouts: Query<(&HudReadout, &mut Text)>,
) {
    let Ok(state) = player.single() else {
        return;
    };

    for (readout, mut text) in readouts.iter_mut() {
        let rendered = readout.render(state);
        if text.0 != rendered {
            text.0 = rendered;
        }
    }
}

/// Turns button presses into character commands or pause requests.
#[allow(clippy::type_complexity)]
pub fn handle_hud_buttons(
    mut buttons: Query<
        (&Interaction, &HudButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut commands: MessageWriter<CharacterCommand>,
    mut pause: MessageWriter<PauseRequest>,
) {
    for (interaction, button, mut background) in buttons.iter_mut() {
        background.0 = match interaction {
            Interaction::Pressed => BUTTON_PRESSED_COLOR,
            Interaction::Hovered => BUTTON_HOVER_COLOR,
            Interaction::None => BUTTON_COLOR,
        };

        if *interaction != Interaction::Pressed {
            continue;
        }

        debug!("HUD button pressed: {}", button.label());
        match button {
            HudButton::Eat => {
                commands.write(CharacterCommand::Eat);
            }
            HudButton::Sleep => {
                commands.write(CharacterCommand::Sleep);
            }
            HudButton::Dance => {
                commands.write(CharacterCommand::Dance);
            }
            HudButton::Pause => {
                pause.write(PauseRequest::Pause);
            }
            HudButton::Resume => {
                pause.write(PauseRequest::Resume);
            }
        }
    }
}

/// Shows the pause overlay while the simulation clock is paused.
pub fn sync_pause_panel(
    clock: Res<SimulationClock>,
    mut panels: Query<&mut Node, With<PausePanel>>,
) {
    let display = if clock.is_paused() {
        Display::Flex
    } else {
        Display::None
    };

    for mut node in panels.iter_mut() {
        if node.display != display {
            node.display = display;
        }
    }
}
