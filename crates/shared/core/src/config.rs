//! Engine configuration
//!
//! Numeric constants shared by every signal and finance computation of one
//! simulation run. Created once and passed by reference; nothing reads
//! process-global settings.

use chrono::Duration;
use log::info;
use serde::{Deserialize, Serialize};

use crate::calendar::parse_duration;
use crate::error::{ConfigError, ConfigResult};

/// Settings of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Near-zero / near-equal comparison threshold
    pub epsilon: f64,
    /// Reference duration relating an energy quantity to a power quantity
    #[serde(with = "duration_string")]
    pub energy_to_power_ratio: Duration,
    /// Default tick length for simulation clocks
    #[serde(with = "duration_string")]
    pub step_length: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-9,
            energy_to_power_ratio: Duration::hours(1),
            step_length: Duration::hours(1),
        }
    }
}

impl EngineConfig {
    /// Load a configuration from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        info!(
            "Loaded engine config: epsilon={}, energy_to_power_ratio={}min, step_length={}min",
            config.epsilon,
            config.energy_to_power_ratio.num_minutes(),
            config.step_length.num_minutes()
        );
        Ok(config)
    }

    /// Check that all settings are usable
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        if self.energy_to_power_ratio.num_minutes() <= 0 {
            return Err(ConfigError::NonPositiveDuration("energy_to_power_ratio"));
        }
        if self.step_length.num_minutes() <= 0 {
            return Err(ConfigError::NonPositiveDuration("step_length"));
        }
        Ok(())
    }

    /// Override one setting from a `name = value` pair of a settings file
    ///
    /// The configuration is left unchanged if the new value is rejected.
    pub fn apply_setting(&mut self, name: &str, value: &str) -> ConfigResult<()> {
        let mut updated = self.clone();
        match name {
            "approx_const_epsilon" => {
                updated.epsilon = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        name: name.to_string(),
                        value: value.to_string(),
                    })?;
            }
            "energy2power_ratio" => updated.energy_to_power_ratio = parse_duration(value)?,
            "simulation_step_length" => updated.step_length = parse_duration(value)?,
            _ => return Err(ConfigError::UnknownSetting(name.to_string())),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// True if `value` is within epsilon of zero
    pub fn is_negligible(&self, value: f64) -> bool {
        value.abs() < self.epsilon
    }
}

mod duration_string {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use crate::calendar::{format_duration, parse_duration};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_duration(*duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_duration(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.epsilon, 1e-9);
        assert_eq!(config.energy_to_power_ratio, Duration::hours(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json_str(r#"{"epsilon": 1e-6, "step_length": "15min"}"#)
            .unwrap();
        assert_eq!(config.epsilon, 1e-6);
        assert_eq!(config.step_length, Duration::minutes(15));
        assert_eq!(config.energy_to_power_ratio, Duration::hours(1));
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig {
            epsilon: 1e-7,
            energy_to_power_ratio: Duration::days(1),
            step_length: Duration::hours(2),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"1d\""));
        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"epsilon": -1.0}"#),
            Err(ConfigError::InvalidEpsilon(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"step_length": "0h"}"#),
            Err(ConfigError::NonPositiveDuration("step_length"))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"step_length": "1 week"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_apply_setting() {
        let mut config = EngineConfig::default();
        config.apply_setting("approx_const_epsilon", "1e-4").unwrap();
        config.apply_setting("energy2power_ratio", "2h").unwrap();
        assert_eq!(config.epsilon, 1e-4);
        assert_eq!(config.energy_to_power_ratio, Duration::hours(2));

        assert!(matches!(
            config.apply_setting("no_such_setting", "1"),
            Err(ConfigError::UnknownSetting(_))
        ));
        assert!(matches!(
            config.apply_setting("approx_const_epsilon", "tiny"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_is_negligible() {
        let config = EngineConfig::default();
        assert!(config.is_negligible(1e-10));
        assert!(config.is_negligible(-1e-10));
        assert!(!config.is_negligible(1e-8));
    }
}
