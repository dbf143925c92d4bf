use horizon_core::{Duration, TimeError};
use thiserror::Error;

/// Errors raised while building or evaluating time-based data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("Cannot build a grid signal without values")]
    EmptyValues,

    #[error("Cannot build an irregular signal without time/value pairs")]
    EmptyPairs,

    #[error("Time/value pairs must be strictly increasing in time (pair {0})")]
    UnorderedPairs(usize),

    #[error("Grid interval must be positive, got {0} minutes")]
    NonPositiveInterval(i64),

    #[error("Cannot evaluate an uninitialized signal")]
    Uninitialized,

    #[error("Intervals don't match: {this} minutes vs {other} minutes")]
    IntervalMismatch { this: i64, other: i64 },

    #[error("Negative lookup query not allowed: {0}")]
    NegativeQuery(f64),

    #[error("Unknown signal kind: {0}")]
    UnknownKind(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Time error: {0}")]
    Time(#[from] TimeError),
}

impl SignalError {
    pub fn interval_mismatch(this: Duration, other: Duration) -> Self {
        SignalError::IntervalMismatch {
            this: this.num_minutes(),
            other: other.num_minutes(),
        }
    }
}

pub type SignalResult<T> = std::result::Result<T, SignalError>;
