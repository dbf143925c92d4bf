//! Horizon Clock Infrastructure
//!
//! Provides the simulated time cursor and time-based unit conversions.
//!
//! ## Usage
//!
//! ```
//! use horizon_clock::SimulationClock;
//! use horizon_core::{Duration, TimePoint};
//!
//! let start: TimePoint = "2030-01-01_00:00".parse().unwrap();
//! let mut clock = SimulationClock::new(start, Duration::hours(1)).unwrap();
//!
//! clock.tick();
//! assert_eq!(clock.now().to_string(), "2030-1-1_1:0");
//! ```

mod conversion;
mod simulation;

pub use conversion::{energy_to_power, power_to_energy};
pub use simulation::SimulationClock;

// Re-export the Clock trait for convenience
pub use horizon_ports::Clock;
