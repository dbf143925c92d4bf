//! Horizon Core Domain
//!
//! Pure time and configuration types for the Horizon energy-system simulation.
//! This crate contains no I/O beyond parsing strings, and is 100% unit testable.

pub mod calendar;
pub mod config;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use calendar::{format_duration, format_time_point, parse_duration, parse_time_point};
pub use chrono::Duration;
pub use config::EngineConfig;
pub use error::{ConfigError, ConfigResult, TimeError, TimeResult};
pub use values::{TimePoint, whole_steps, years};
