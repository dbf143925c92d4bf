use horizon_core::TimePoint;

/// Port for simulated time sources
///
/// Anything that can report a current simulation time: the ticking
/// simulation clock, or a fixed instant in tests.
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> TimePoint;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}

impl Clock for TimePoint {
    fn now(&self) -> TimePoint {
        *self
    }

    fn name(&self) -> &str {
        "FixedTime"
    }
}
