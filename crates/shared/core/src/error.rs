use thiserror::Error;

/// Errors raised while reading or building simulation time values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("No numeric characters in date string '{0}'")]
    NoDigits(String),

    #[error("Date string '{0}' is out of range for one or more fields")]
    FieldOutOfRange(String),

    #[error("Invalid number in '{0}'")]
    InvalidNumber(String),

    #[error("Unknown duration unit in '{0}' (expected a, d, h or min)")]
    UnknownDurationUnit(String),

    #[error("Tick length must be non-zero")]
    ZeroTickLength,
}

pub type TimeResult<T> = std::result::Result<T, TimeError>;

/// Errors raised while loading or validating an [`EngineConfig`](crate::EngineConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),

    #[error("Duration setting '{0}' must be positive")]
    NonPositiveDuration(&'static str),

    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Invalid value '{value}' for setting {name}")]
    InvalidValue { name: String, value: String },

    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
