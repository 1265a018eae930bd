//! Game tuning settings
//!
//! Speeds and delays the state machine runs on. Loaded from JSON (or
//! LocalStorage on the web); anything missing falls back to the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::Mode;

/// Rejected settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("base velocity for {mode} mode must be positive, got {value}")]
    BaseVelocity { mode: Mode, value: f64 },
    #[error("velocity step must be positive, got {0}")]
    VelocityStep(f64),
    #[error("tick interval must be at least 1ms")]
    TickInterval,
    #[error("clear delay ({clear_ms}ms) must come before next round delay ({next_ms}ms)")]
    RoundDelays { clear_ms: u64, next_ms: u64 },
}

/// Starting velocity per difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseVelocity {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
}

impl Default for BaseVelocity {
    fn default() -> Self {
        Self {
            easy: 0.01,
            medium: 0.01,
            hard: 0.01,
        }
    }
}

/// Tuning consumed by the state machine and its host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Difficulty ===
    /// Progress per millisecond at the start of a session
    pub base_velocity: BaseVelocity,
    /// Velocity added after every passed round
    pub velocity_step: f64,

    // === Timing ===
    /// Period of the progress tick
    pub tick_interval_ms: u64,
    /// Delay after a pass before the board is cleared
    pub clear_delay_ms: u64,
    /// Delay after a pass before the next round starts
    pub next_round_delay_ms: u64,

    // === Storage ===
    /// Prefix for high score keys
    pub high_score_namespace: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_velocity: BaseVelocity::default(),
            velocity_step: 0.001,

            tick_interval_ms: 50,
            clear_delay_ms: 250,
            next_round_delay_ms: 500,

            high_score_namespace: crate::consts::HIGH_SCORE_NAMESPACE.to_string(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain data, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for mode in Mode::ALL {
            let value = self.base_velocity(mode);
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::BaseVelocity { mode, value });
            }
        }
        if !(self.velocity_step.is_finite() && self.velocity_step > 0.0) {
            return Err(SettingsError::VelocityStep(self.velocity_step));
        }
        if self.tick_interval_ms == 0 {
            return Err(SettingsError::TickInterval);
        }
        if self.clear_delay_ms >= self.next_round_delay_ms {
            return Err(SettingsError::RoundDelays {
                clear_ms: self.clear_delay_ms,
                next_ms: self.next_round_delay_ms,
            });
        }
        Ok(())
    }

    /// Starting velocity for a mode
    pub fn base_velocity(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Easy => self.base_velocity.easy,
            Mode::Medium => self.base_velocity.medium,
            Mode::Hard => self.base_velocity.hard,
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "re_turn_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native hosts use the defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tick_interval_ms, 50);
        assert_eq!(settings.base_velocity(Mode::Hard), 0.01);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"velocity_step": 0.002, "base_velocity": {"hard": 0.02}}"#).unwrap();
        assert_eq!(settings.velocity_step, 0.002);
        assert_eq!(settings.base_velocity(Mode::Hard), 0.02);
        assert_eq!(settings.base_velocity(Mode::Easy), 0.01);
        assert_eq!(settings.clear_delay_ms, 250);
    }

    #[test]
    fn test_round_trip_json() {
        let settings = Settings::default();
        assert_eq!(Settings::from_json(&settings.to_json()).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"base_velocity": {"medium": 0.0}}"#),
            Err(SettingsError::BaseVelocity { mode: Mode::Medium, .. })
        ));
        assert!(matches!(
            Settings::from_json(r#"{"velocity_step": -1.0}"#),
            Err(SettingsError::VelocityStep(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"tick_interval_ms": 0}"#),
            Err(SettingsError::TickInterval)
        ));
        assert!(matches!(
            Settings::from_json(r#"{"clear_delay_ms": 600}"#),
            Err(SettingsError::RoundDelays { clear_ms: 600, next_ms: 500 })
        ));
    }
}
