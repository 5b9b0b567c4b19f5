use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/character.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawCharacterConfig {
    #[serde(default)]
    stats: RawStats,
    #[serde(default)]
    actions: RawActions,
    #[serde(default)]
    movement: RawMovement,
    #[serde(default)]
    death: RawDeath,
    #[serde(default)]
    auto_sleep: RawAutoSleep,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawStats {
    max: f32,
    hunger_decay_per_second: f32,
    sleepiness_decay_per_second: f32,
}

impl Default for RawStats {
    fn default() -> Self {
        Self {
            max: 100.0,
            hunger_decay_per_second: 2.0,
            sleepiness_decay_per_second: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawActions {
    eat_seconds: f32,
    sleep_seconds: f32,
}

impl Default for RawActions {
    fn default() -> Self {
        Self {
            eat_seconds: 2.0,
            sleep_seconds: 5.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMovement {
    speed: f32,
    deadzone: f32,
}

impl Default for RawMovement {
    fn default() -> Self {
        Self {
            speed: 5.0,
            deadzone: 0.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawDeath {
    rule: DeathRule,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawAutoSleep {
    enabled: bool,
    range: f32,
    delay_seconds: f32,
}

impl Default for RawAutoSleep {
    fn default() -> Self {
        Self {
            enabled: false,
            range: 1.5,
            delay_seconds: 3.0,
        }
    }
}

/// Which depleted stats kill the character.
///
/// Earlier builds of the game killed the character as soon as either stat hit
/// zero; current builds require both. Both remain selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathRule {
    #[default]
    BothDepleted,
    AnyDepleted,
}

impl DeathRule {
    pub fn is_fatal(self, hunger: f32, sleepiness: f32) -> bool {
        match self {
            Self::BothDepleted => hunger <= 0.0 && sleepiness <= 0.0,
            Self::AnyDepleted => hunger <= 0.0 || sleepiness <= 0.0,
        }
    }
}

/// Runtime configuration derived from `config/character.toml`.
#[derive(Resource, Debug, Clone)]
pub struct CharacterConfig {
    pub stats: StatsConfig,
    pub actions: ActionsConfig,
    pub movement: MovementConfig,
    pub death_rule: DeathRule,
    pub auto_sleep: AutoSleepConfig,
}

#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub max: f32,
    pub hunger_decay_per_second: f32,
    pub sleepiness_decay_per_second: f32,
}

#[derive(Debug, Clone)]
pub struct ActionsConfig {
    pub eat_seconds: f32,
    pub sleep_seconds: f32,
}

#[derive(Debug, Clone)]
pub struct MovementConfig {
    pub speed: f32,
    pub deadzone: f32,
}

#[derive(Debug, Clone)]
pub struct AutoSleepConfig {
    pub enabled: bool,
    pub range: f32,
    pub delay_seconds: f32,
}

impl CharacterConfig {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<RawCharacterConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawCharacterConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawCharacterConfig::default().into()
            }
        }
    }
}

impl Default for CharacterConfig {
    fn default() -> Self {
        RawCharacterConfig::default().into()
    }
}

impl From<RawCharacterConfig> for CharacterConfig {
    fn from(value: RawCharacterConfig) -> Self {
        let stats = StatsConfig {
            max: value.stats.max.max(1.0),
            hunger_decay_per_second: value.stats.hunger_decay_per_second.max(0.0),
            sleepiness_decay_per_second: value.stats.sleepiness_decay_per_second.max(0.0),
        };

        let actions = ActionsConfig {
            eat_seconds: value.actions.eat_seconds.max(0.0),
            sleep_seconds: value.actions.sleep_seconds.max(0.0),
        };

        let movement = MovementConfig {
            speed: value.movement.speed.max(0.0),
            deadzone: if value.movement.deadzone.is_finite() {
                value.movement.deadzone.clamp(0.0, 1.0)
            } else {
                RawMovement::default().deadzone
            },
        };

        let auto_sleep = AutoSleepConfig {
            enabled: value.auto_sleep.enabled,
            range: value.auto_sleep.range.max(0.0),
            delay_seconds: value.auto_sleep.delay_seconds.max(0.0),
        };

        Self {
            stats,
            actions,
            movement,
            death_rule: value.death.rule,
            auto_sleep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_falls_back_to_defaults() {
        let config = CharacterConfig::from(RawCharacterConfig::default());
        assert_eq!(config.stats.max, 100.0);
        assert_eq!(config.stats.hunger_decay_per_second, 2.0);
        assert_eq!(config.stats.sleepiness_decay_per_second, 1.0);
        assert_eq!(config.actions.eat_seconds, 2.0);
        assert_eq!(config.actions.sleep_seconds, 5.0);
        assert_eq!(config.death_rule, DeathRule::BothDepleted);
        assert!(!config.auto_sleep.enabled);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let raw: RawCharacterConfig = toml::from_str(
            r#"
            [stats]
            hunger_decay_per_second = 4.0

            [death]
            rule = "any_depleted"
            "#,
        )
        .expect("valid toml");
        let config = CharacterConfig::from(raw);

        assert_eq!(config.stats.hunger_decay_per_second, 4.0);
        assert_eq!(config.stats.max, 100.0);
        assert_eq!(config.actions.sleep_seconds, 5.0);
        assert_eq!(config.death_rule, DeathRule::AnyDepleted);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let raw: RawCharacterConfig = toml::from_str(
            r#"
            [stats]
            max = -10.0
            hunger_decay_per_second = -1.0

            [actions]
            eat_seconds = -3.0

            [movement]
            deadzone = 5.0
            "#,
        )
        .expect("valid toml");
        let config = CharacterConfig::from(raw);

        assert_eq!(config.stats.max, 1.0);
        assert_eq!(config.stats.hunger_decay_per_second, 0.0);
        assert_eq!(config.actions.eat_seconds, 0.0);
        assert_eq!(config.movement.deadzone, 1.0);
    }

    #[test]
    fn non_finite_deadzone_falls_back_to_default() {
        for literal in ["nan", "inf", "-inf"] {
            let raw: RawCharacterConfig =
                toml::from_str(&format!("[movement]\ndeadzone = {literal}\n"))
                    .expect("valid toml");
            let config = CharacterConfig::from(raw);
            assert_eq!(config.movement.deadzone, 0.1, "deadzone = {literal}");
        }
    }

    #[test]
    fn unknown_death_rule_is_a_parse_error() {
        let parsed = toml::from_str::<RawCharacterConfig>("[death]\nrule = \"sometimes\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn death_rules_disagree_on_single_depleted_stat() {
        assert!(!DeathRule::BothDepleted.is_fatal(0.0, 10.0));
        assert!(DeathRule::AnyDepleted.is_fatal(0.0, 10.0));
        assert!(DeathRule::BothDepleted.is_fatal(0.0, 0.0));
    }
}
