//! Input driver: turns keyboard and gamepad state into character commands.
use bevy::prelude::*;

use crate::{
    character::{config::CharacterConfig, events::CharacterCommand},
    core::SimulationClock,
    input::components::{ControlsState, PauseRequest},
};

const PAUSE_KEY: KeyCode = KeyCode::Escape;

const ACTION_BINDINGS: [(KeyCode, CharacterCommand); 3] = [
    (KeyCode::KeyE, CharacterCommand::Eat),
    (KeyCode::KeyQ, CharacterCommand::Sleep),
    (KeyCode::KeyF, CharacterCommand::Dance),
];

/// Run condition: the listener is registered.
pub fn controls_enabled(controls: Res<ControlsState>) -> bool {
    controls.is_enabled()
}

/// Emits a `Move` command whenever the combined movement intent changes.
pub fn read_movement_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    config: Res<CharacterConfig>,
    mut last_intent: Local<Vec2>,
    mut commands: MessageWriter<CharacterCommand>,
) {
    let stick = gamepads
        .iter()
        .next()
        .map(|gamepad| gamepad.left_stick())
        .unwrap_or(Vec2::ZERO);
    let intent = select_intent(stick, keyboard_direction(&keyboard), config.movement.deadzone);

    if intent != *last_intent {
        *last_intent = intent;
        commands.write(CharacterCommand::Move(intent));
    }
}

/// Emits eat/sleep/dance commands on key press.
pub fn read_action_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: MessageWriter<CharacterCommand>,
) {
    for (key, command) in ACTION_BINDINGS {
        if keyboard.just_pressed(key) {
            debug!("{:?} pressed, requesting {:?}", key, command);
            commands.write(command);
        }
    }
}

/// Escape toggles pause; runs even while the listener is torn down.
pub fn read_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: MessageWriter<PauseRequest>,
) {
    if keyboard.just_pressed(PAUSE_KEY) {
        requests.write(PauseRequest::Toggle);
    }
}

/// Pauses or resumes the clock and tears down or registers the listener.
pub fn apply_pause_requests(
    mut requests: MessageReader<PauseRequest>,
    mut clock: ResMut<SimulationClock>,
    mut controls: ResMut<ControlsState>,
) {
    for request in requests.read() {
        let paused = request.resolve(clock.is_paused());
        if paused == clock.is_paused() {
            continue;
        }

        clock.set_paused(paused);
        if paused {
            controls.teardown();
            info!("Simulation paused");
        } else {
            controls.register();
            info!("Simulation resumed");
        }
    }
}

/// WASD / arrow keys, normalised so diagonals are not faster.
pub fn keyboard_direction(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut direction = Vec2::ZERO;
    if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        direction.y += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        direction.y -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        direction.x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        direction.x += 1.0;
    }
    direction.normalize_or_zero()
}

/// The stick wins once it is pushed past the deadzone.
pub fn select_intent(stick: Vec2, keyboard: Vec2, deadzone: f32) -> Vec2 {
    if stick != Vec2::ZERO && stick.length() >= deadzone {
        stick
    } else {
        keyboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputPlugin;

    #[derive(Resource, Default)]
    struct RecordedCommands(Vec<CharacterCommand>);

    fn record_commands(
        mut requests: MessageReader<CharacterCommand>,
        mut recorded: ResMut<RecordedCommands>,
    ) {
        recorded.0.extend(requests.read().copied());
    }

    fn input_app() -> App {
        let mut app = App::new();
        app.add_plugins(InputPlugin)
            .add_message::<CharacterCommand>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<RecordedCommands>()
            .insert_resource(CharacterConfig::default())
            .insert_resource(SimulationClock::default())
            .add_systems(
                Update,
                record_commands
                    .after(read_movement_input)
                    .after(read_action_input),
            );
        app
    }

    fn recorded(app: &App) -> &[CharacterCommand] {
        &app.world().resource::<RecordedCommands>().0
    }

    #[test]
    fn held_direction_is_sent_once() {
        let mut app = input_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyD);

        app.update();
        app.update();

        assert_eq!(recorded(&app), &[CharacterCommand::Move(Vec2::X)]);
    }

    #[test]
    fn pause_tears_down_the_driver_until_resume() {
        let mut app = input_app();
        app.world_mut().write_message(PauseRequest::Pause);
        app.update();

        assert!(app.world().resource::<SimulationClock>().is_paused());
        assert!(!app.world().resource::<ControlsState>().is_enabled());

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyD);
        app.update();
        assert!(recorded(&app).is_empty());

        app.world_mut().write_message(PauseRequest::Resume);
        app.update();
        app.update();

        assert!(!app.world().resource::<SimulationClock>().is_paused());
        assert!(app.world().resource::<ControlsState>().is_enabled());
        assert_eq!(recorded(&app), &[CharacterCommand::Move(Vec2::X)]);
    }

    #[test]
    fn keyboard_diagonal_is_normalised() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::ArrowRight);

        let direction = keyboard_direction(&keyboard);
        assert!((direction.length() - 1.0).abs() < 1e-5);
        assert!(direction.x > 0.0 && direction.y > 0.0);
    }

    #[test]
    fn opposing_keys_cancel_out() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyA);
        keyboard.press(KeyCode::KeyD);

        assert_eq!(keyboard_direction(&keyboard), Vec2::ZERO);
    }

    #[test]
    fn stick_overrides_keyboard_past_deadzone() {
        let keyboard = Vec2::new(-1.0, 0.0);
        assert_eq!(select_intent(Vec2::new(0.5, 0.0), keyboard, 0.1), Vec2::new(0.5, 0.0));
        assert_eq!(select_intent(Vec2::new(0.05, 0.0), keyboard, 0.1), keyboard);
        assert_eq!(select_intent(Vec2::ZERO, keyboard, 0.0), keyboard);
    }
}
