//! Systems driving the player character.
use bevy::prelude::*;

use crate::{
    core::SimulationClock,
    world::components::{Bed, FoodPlate, RoomBounds, PIXELS_PER_UNIT},
};

use super::{
    components::{BedCountdown, MovementIntent, Player},
    config::CharacterConfig,
    events::{ActivityChangedEvent, CharacterCommand},
    state::{Activity, CharacterState},
};

const PLAYER_SIZE: f32 = 0.8 * PIXELS_PER_UNIT;
const PLAYER_Z: f32 = 1.0;

/// Spawns the player in the middle of the room.
pub fn spawn_player(mut commands: Commands, config: Res<CharacterConfig>) {
    let state = CharacterState::new(&config);
    info!(
        "Spawning player (hunger {:.0}, sleepiness {:.0}, death rule {:?})",
        state.hunger(),
        state.sleepiness(),
        config.death_rule
    );

    commands.spawn((
        Player,
        state,
        MovementIntent::default(),
        BedCountdown::default(),
        Sprite::from_color(activity_tint(Activity::Idle), Vec2::splat(PLAYER_SIZE)),
        Transform::from_xyz(0.0, 0.0, PLAYER_Z),
        Name::new("Player"),
    ));
}

/// Applies queued character commands to the player's state machine.
#[allow(clippy::type_complexity)]
pub fn handle_character_commands(
    sim_clock: Res<SimulationClock>,
    mut requests: MessageReader<CharacterCommand>,
    config: Res<CharacterConfig>,
    mut changes: MessageWriter<ActivityChangedEvent>,
    mut player: Query<(&mut CharacterState, &mut MovementIntent, &mut Transform), With<Player>>,
    plates: Query<&Transform, (With<FoodPlate>, Without<Player>)>,
    beds: Query<&Transform, (With<Bed>, Without<Player>)>,
) {
    if sim_clock.is_paused() {
        let dropped = requests.read().count();
        if dropped > 0 {
            debug!("Dropping {} character command(s) while paused", dropped);
        }
        return;
    }

    let Ok((mut state, mut intent, mut transform)) = player.single_mut() else {
        return;
    };

    for request in requests.read() {
        let before = state.activity();
        match *request {
            CharacterCommand::Move(vector) => {
                let outcome = state.apply_movement_intent(vector, config.movement.deadzone);
                if let Some(forwarded) = outcome.forwarded {
                    intent.0 = forwarded;
                }
                if outcome.stopped_dancing {
                    info!("Player stops dancing and moves on");
                }
            }
            CharacterCommand::Eat => match state.request_eat(config.actions.eat_seconds) {
                Ok(()) => {
                    snap_to_nearest(&mut transform, plates.iter());
                    info!(
                        "Player sits down to eat for {:.1}s (hunger {:.1})",
                        config.actions.eat_seconds,
                        state.hunger()
                    );
                }
                Err(err) => debug!("Ignoring request: {}", err),
            },
            CharacterCommand::Sleep => match state.request_sleep(config.actions.sleep_seconds) {
                Ok(()) => {
                    snap_to_nearest(&mut transform, beds.iter());
                    info!(
                        "Player goes to sleep for {:.1}s (sleepiness {:.1})",
                        config.actions.sleep_seconds,
                        state.sleepiness()
                    );
                }
                Err(err) => debug!("Ignoring request: {}", err),
            },
            CharacterCommand::Dance => match state.request_dance() {
                Ok(()) => {
                    // A direction held before the dance started counts as intent too.
                    let held = intent.0;
                    if state
                        .apply_movement_intent(held, config.movement.deadzone)
                        .stopped_dancing
                    {
                        debug!("Dance cancelled by held movement {:?}", held);
                    } else {
                        info!("Player starts dancing");
                    }
                }
                Err(err) => debug!("Ignoring request: {}", err),
            },
        }

        let after = state.activity();
        if after != before {
            changes.write(ActivityChangedEvent::new(before, after));
        }
    }
}

/// Advances stat decay and action timers with the scaled simulation delta.
pub fn tick_character_state(
    sim_clock: Res<SimulationClock>,
    config: Res<CharacterConfig>,
    mut changes: MessageWriter<ActivityChangedEvent>,
    mut query: Query<&mut CharacterState, With<Player>>,
) {
    let delta = sim_clock.last_scaled_delta().as_secs_f32();
    if delta <= 0.0 {
        return;
    }

    for mut state in query.iter_mut() {
        let before = state.activity();
        let outcome = state.tick(delta, &config);

        if let Some(finished) = outcome.finished {
            info!(
                "Player finished {} (hunger {:.1}, sleepiness {:.1})",
                finished.label(),
                state.hunger(),
                state.sleepiness()
            );
            changes.write(ActivityChangedEvent::new(finished, Activity::Idle));
        }

        if outcome.died {
            warn!(
                "Player died while {} (hunger {:.1}, sleepiness {:.1})",
                before.label(),
                state.hunger(),
                state.sleepiness()
            );
            changes.write(ActivityChangedEvent::new(before, Activity::Dead));
        }
    }
}

/// Kinematic motion: moves the player along its intent while it may move.
pub fn move_character(
    sim_clock: Res<SimulationClock>,
    config: Res<CharacterConfig>,
    room: Res<RoomBounds>,
    mut query: Query<(&CharacterState, &MovementIntent, &mut Transform, &mut Sprite), With<Player>>,
) {
    let delta = sim_clock.last_scaled_delta().as_secs_f32();
    if delta <= 0.0 {
        return;
    }

    for (state, intent, mut transform, mut sprite) in query.iter_mut() {
        if !state.activity().allows_motion() {
            continue;
        }

        let direction = intent.0.clamp_length_max(1.0);
        if direction == Vec2::ZERO {
            continue;
        }

        let step = direction * config.movement.speed * PIXELS_PER_UNIT * delta;
        let target = transform.translation.truncate() + step;
        let clamped = room.clamp(target, Vec2::splat(PLAYER_SIZE * 0.5));
        transform.translation.x = clamped.x;
        transform.translation.y = clamped.y;

        if direction.x != 0.0 {
            sprite.flip_x = direction.x > 0.0;
        }
    }
}

/// Puts an idle player to bed after lingering next to it.
#[allow(clippy::type_complexity)]
pub fn update_bed_countdown(
    sim_clock: Res<SimulationClock>,
    config: Res<CharacterConfig>,
    mut requests: MessageWriter<CharacterCommand>,
    mut player: Query<(&CharacterState, &Transform, &mut BedCountdown), With<Player>>,
    beds: Query<&Transform, (With<Bed>, Without<Player>)>,
) {
    if !config.auto_sleep.enabled || sim_clock.is_paused() {
        return;
    }

    let delta = sim_clock.last_scaled_delta().as_secs_f32();
    let range = config.auto_sleep.range * PIXELS_PER_UNIT;

    for (state, transform, mut countdown) in player.iter_mut() {
        let position = transform.translation.truncate();
        let in_range = beds
            .iter()
            .any(|bed| bed.translation.truncate().distance(position) <= range);
        let idle = state.activity() == Activity::Idle;

        if countdown.update(in_range, idle, delta, config.auto_sleep.delay_seconds) {
            info!("Player lingers by the bed and dozes off");
            requests.write(CharacterCommand::Sleep);
        }
    }
}

/// Stand-in for animator flags: recolours the player per activity.
pub fn apply_activity_tint(
    mut changes: MessageReader<ActivityChangedEvent>,
    mut query: Query<&mut Sprite, With<Player>>,
) {
    let mut latest = None;
    for change in changes.read() {
        debug!("Activity {} -> {}", change.from.label(), change.to.label());
        latest = Some(change.to);
    }
    let Some(activity) = latest else {
        return;
    };

    for mut sprite in query.iter_mut() {
        sprite.color = activity_tint(activity);
    }
}

pub fn activity_tint(activity: Activity) -> Color {
    match activity {
        Activity::Idle => Color::srgb(0.95, 0.85, 0.55),
        Activity::Eating => Color::srgb(0.95, 0.55, 0.3),
        Activity::Sleeping => Color::srgb(0.45, 0.55, 0.95),
        Activity::Dancing => Color::srgb(0.9, 0.4, 0.85),
        Activity::Dead => Color::srgb(0.35, 0.35, 0.35),
    }
}

fn snap_to_nearest<'a>(transform: &mut Transform, anchors: impl Iterator<Item = &'a Transform>) {
    let position = transform.translation.truncate();
    let nearest = anchors
        .map(|anchor| anchor.translation.truncate())
        .min_by(|a, b| {
            a.distance_squared(position)
                .total_cmp(&b.distance_squared(position))
        });

    if let Some(anchor) = nearest {
        transform.translation.x = anchor.x;
        transform.translation.y = anchor.y;
    } else {
        warn!("No anchor found to snap the player to; staying in place");
    }
}
