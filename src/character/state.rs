use bevy::prelude::*;

use super::{
    config::CharacterConfig,
    errors::{ActivityRejected, RequestedAction},
};

/// Mutually exclusive behaviour modes of the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Idle,
    Eating,
    Sleeping,
    Dancing,
    Dead,
}

impl Activity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Eating => "eating",
            Self::Sleeping => "sleeping",
            Self::Dancing => "dancing",
            Self::Dead => "dead",
        }
    }

    /// Only an idle character walks; dances happen on the spot.
    pub fn allows_motion(self) -> bool {
        self == Self::Idle
    }
}

// Timed activities own their countdown, so a second timer cannot exist.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ActivityState {
    Idle,
    Eating { remaining: f32 },
    Sleeping { remaining: f32 },
    Dancing,
    Dead,
}

impl ActivityState {
    fn kind(self) -> Activity {
        match self {
            Self::Idle => Activity::Idle,
            Self::Eating { .. } => Activity::Eating,
            Self::Sleeping { .. } => Activity::Sleeping,
            Self::Dancing => Activity::Dancing,
            Self::Dead => Activity::Dead,
        }
    }
}

/// Hunger, sleepiness and the current activity of the player character.
#[derive(Component, Debug, Clone)]
pub struct CharacterState {
    hunger: f32,
    sleepiness: f32,
    max: f32,
    state: ActivityState,
}

impl CharacterState {
    pub fn new(config: &CharacterConfig) -> Self {
        let max = config.stats.max;
        Self {
            hunger: max,
            sleepiness: max,
            max,
            state: ActivityState::Idle,
        }
    }

    pub fn hunger(&self) -> f32 {
        self.hunger
    }

    pub fn sleepiness(&self) -> f32 {
        self.sleepiness
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn activity(&self) -> Activity {
        self.state.kind()
    }

    pub fn is_dead(&self) -> bool {
        self.state == ActivityState::Dead
    }

    /// Seconds left on the current eat/sleep action, if one is running.
    pub fn remaining_action_seconds(&self) -> Option<f32> {
        match self.state {
            ActivityState::Eating { remaining } | ActivityState::Sleeping { remaining } => {
                Some(remaining.max(0.0))
            }
            _ => None,
        }
    }

    /// Advances decay and the running action timer by `delta_seconds`.
    pub fn tick(&mut self, delta_seconds: f32, config: &CharacterConfig) -> CharacterTickOutcome {
        let mut outcome = CharacterTickOutcome::default();
        if self.is_dead() || delta_seconds.is_nan() || delta_seconds <= 0.0 {
            return outcome;
        }

        let activity = self.activity();
        if activity != Activity::Eating {
            self.hunger =
                (self.hunger - config.stats.hunger_decay_per_second * delta_seconds).max(0.0);
        }
        if activity != Activity::Sleeping {
            self.sleepiness = (self.sleepiness
                - config.stats.sleepiness_decay_per_second * delta_seconds)
                .max(0.0);
        }

        // A pending meal or nap never rescues a character that has already starved.
        if config.death_rule.is_fatal(self.hunger, self.sleepiness) {
            self.state = ActivityState::Dead;
            outcome.died = true;
            return outcome;
        }

        let expired = match &mut self.state {
            ActivityState::Eating { remaining } | ActivityState::Sleeping { remaining } => {
                *remaining -= delta_seconds;
                *remaining <= 0.0
            }
            _ => false,
        };
        if expired {
            match activity {
                Activity::Eating => self.hunger = self.max,
                Activity::Sleeping => self.sleepiness = self.max,
                _ => {}
            }
            self.state = ActivityState::Idle;
            outcome.finished = Some(activity);
        }

        outcome
    }

    pub fn request_eat(&mut self, duration_seconds: f32) -> Result<(), ActivityRejected> {
        self.ensure_idle(RequestedAction::Eat)?;
        self.state = ActivityState::Eating {
            remaining: duration_seconds.max(0.0),
        };
        Ok(())
    }

    pub fn request_sleep(&mut self, duration_seconds: f32) -> Result<(), ActivityRejected> {
        self.ensure_idle(RequestedAction::Sleep)?;
        self.state = ActivityState::Sleeping {
            remaining: duration_seconds.max(0.0),
        };
        Ok(())
    }

    pub fn request_dance(&mut self) -> Result<(), ActivityRejected> {
        self.ensure_idle(RequestedAction::Dance)?;
        self.state = ActivityState::Dancing;
        Ok(())
    }

    /// Feeds a movement intent through the state machine.
    ///
    /// Intents beyond `deadzone` end a dance. Dead characters forward nothing.
    pub fn apply_movement_intent(&mut self, intent: Vec2, deadzone: f32) -> MovementOutcome {
        if self.is_dead() {
            return MovementOutcome::default();
        }

        let intent = if intent.is_finite() { intent } else { Vec2::ZERO };
        let mut stopped_dancing = false;
        if self.state == ActivityState::Dancing && intent.length() > deadzone {
            self.state = ActivityState::Idle;
            stopped_dancing = true;
        }

        MovementOutcome {
            forwarded: Some(intent),
            stopped_dancing,
        }
    }

    fn ensure_idle(&self, requested: RequestedAction) -> Result<(), ActivityRejected> {
        match self.state {
            ActivityState::Idle => Ok(()),
            other => Err(ActivityRejected::new(requested, other.kind())),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct CharacterTickOutcome {
    /// Timed activity that completed during this tick.
    pub finished: Option<Activity>,
    pub died: bool,
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct MovementOutcome {
    /// Intent handed on to the motion system, `None` once dead.
    pub forwarded: Option<Vec2>,
    pub stopped_dancing: bool,
}
