use horizon_core::TimePoint;

use crate::clock::Clock;
use crate::error::SignalResult;

/// Port for time-based data: a numeric function of simulated time
///
/// Implemented by every signal representation (grids, irregular pairs,
/// compositions). Model code only sees this contract:
/// - `value` for instantaneous evaluation
/// - `mean` for time-weighted averages over `[from, to)`
/// - `start` for the earliest defined point
pub trait TimeBased {
    /// Evaluate the signal at a time point
    fn value(&self, time_point: TimePoint) -> SignalResult<f64>;

    /// Evaluate the signal at the clock's current time
    fn value_on(&self, clock: &dyn Clock) -> SignalResult<f64> {
        self.value(clock.now())
    }

    /// Time-weighted average over `[from, to)`
    ///
    /// The part of the interval before `start()` contributes zero.
    fn mean(&self, from: TimePoint, to: TimePoint) -> SignalResult<f64>;

    /// Earliest point at which the signal is defined
    fn start(&self) -> TimePoint {
        TimePoint::FAR_PAST
    }

    /// Diagnostic text dump for report writers
    fn to_text(&self) -> String;

    /// True if the signal holds no data
    fn is_empty(&self) -> bool;
}
