//! Tunables for matching rules, battle damage, per-difficulty timing and score.
//!
//! Read once per process through [`settings()`]. A replacement file can be
//! installed with [`init_custom`], which only works before the first read.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Install a replacement settings file. Validated before it is stored.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Built-in settings, as shipped.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub matching: MatchingSettings,
    pub battle: BattleSettings,
    pub difficulty: PerDifficulty,
    pub score: ScoreSettings,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MatchingSettings {
    pub hatsuon_context: bool,
    pub long_vowel_hyphen: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BattleSettings {
    pub player_hp: i64,
    pub miss_damage: i64,
    pub timeout_damage: i64,
    pub attack_damage: i64,
    pub tick_interval_ms: u64,
}

/// One `f64` per difficulty level.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PerDifficulty {
    pub easy: f64,
    pub normal: f64,
    pub hard: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreSettings {
    pub base: i64,
    pub accuracy_weight: i64,
    pub miss_penalty: i64,
    pub multiplier: PerDifficulty,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check {
        ($cond:expr, $($path:ident).+, $reason:literal) => {
            if !$cond {
                return Err(SettingsError::InvalidValue {
                    field: stringify!($($path).+).replace(' ', ""),
                    reason: $reason.to_string(),
                });
            }
        };
    }

    check!(s.battle.player_hp > 0, battle.player_hp, "must be positive");
    check!(s.battle.miss_damage >= 0, battle.miss_damage, "must be non-negative");
    check!(s.battle.timeout_damage >= 0, battle.timeout_damage, "must be non-negative");
    check!(s.battle.attack_damage > 0, battle.attack_damage, "must be positive");
    check!(s.battle.tick_interval_ms > 0, battle.tick_interval_ms, "must be positive");

    check!(s.difficulty.easy > 0.0, difficulty.easy, "must be positive");
    check!(s.difficulty.normal > 0.0, difficulty.normal, "must be positive");
    check!(s.difficulty.hard > 0.0, difficulty.hard, "must be positive");

    check!(s.score.base >= 0, score.base, "must be non-negative");
    check!(s.score.accuracy_weight >= 0, score.accuracy_weight, "must be non-negative");
    check!(s.score.miss_penalty >= 0, score.miss_penalty, "must be non-negative");
    check!(s.score.multiplier.easy >= 0.0, score.multiplier.easy, "must be non-negative");
    check!(s.score.multiplier.normal >= 0.0, score.multiplier.normal, "must be non-negative");
    check!(s.score.multiplier.hard >= 0.0, score.multiplier.hard, "must be non-negative");

    Ok(())
}
