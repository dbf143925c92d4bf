//! Horizon Ports
//!
//! Port definitions (traits) for the Horizon time-based data engine.
//! These define the boundaries between signal implementations and the model code
//! that queries them.

mod clock;
mod error;
mod signal;

pub use clock::Clock;
pub use error::{SignalError, SignalResult};
pub use signal::TimeBased;
