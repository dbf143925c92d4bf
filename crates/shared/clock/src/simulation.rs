use chrono::Duration;
use horizon_core::calendar::{MINUTES_PER_HOUR, MINUTES_PER_YEAR};
use horizon_core::{TimeError, TimePoint, TimeResult};
use horizon_ports::Clock;

/// Ticking simulation clock
///
/// Owns the current simulated time and a fixed, non-zero tick length.
/// Time only moves when the owner calls [`tick`](Self::tick) or
/// [`leap`](Self::leap); there is no wall-clock coupling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationClock {
    /// Current simulated time
    current: TimePoint,
    /// Step applied by each tick
    tick_length: Duration,
}

impl SimulationClock {
    /// Create a clock at `start` that advances by `tick_length` per tick
    ///
    /// # Errors
    /// [`TimeError::ZeroTickLength`] if `tick_length` is shorter than one minute
    pub fn new(start: TimePoint, tick_length: Duration) -> TimeResult<Self> {
        if tick_length.num_minutes() == 0 {
            return Err(TimeError::ZeroTickLength);
        }
        Ok(Self {
            current: start,
            tick_length,
        })
    }

    /// Current simulated time
    pub fn now(&self) -> TimePoint {
        self.current
    }

    /// Advance by one tick and return the new time
    pub fn tick(&mut self) -> TimePoint {
        self.current += self.tick_length;
        self.current
    }

    /// Advance by an arbitrary duration and return the new time
    pub fn leap(&mut self, duration: Duration) -> TimePoint {
        self.current += duration;
        self.current
    }

    pub fn tick_length(&self) -> Duration {
        self.tick_length
    }

    /// Calendar year of the current time
    pub fn year(&self) -> i64 {
        1970 + self.current.minutes_since_epoch().div_euclid(MINUTES_PER_YEAR)
    }

    pub fn ticks_per_hour(&self) -> f64 {
        MINUTES_PER_HOUR as f64 / self.tick_length.num_minutes() as f64
    }

    pub fn ticks_per_year(&self) -> f64 {
        MINUTES_PER_YEAR as f64 / self.tick_length.num_minutes() as f64
    }
}

impl Clock for SimulationClock {
    fn now(&self) -> TimePoint {
        self.current
    }

    fn name(&self) -> &str {
        "SimulationClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn start() -> TimePoint {
        "2030-01-01_00:00".parse().unwrap()
    }

    #[test]
    fn test_zero_tick_length_rejected() {
        assert_eq!(
            SimulationClock::new(start(), Duration::zero()),
            Err(TimeError::ZeroTickLength)
        );
        assert_eq!(
            SimulationClock::new(start(), Duration::seconds(30)),
            Err(TimeError::ZeroTickLength)
        );
    }

    #[test]
    fn test_tick_advances_by_tick_length() {
        let mut clock = SimulationClock::new(start(), Duration::minutes(15)).unwrap();
        assert_eq!(clock.now(), start());

        let first = clock.tick();
        assert_eq!(first, start() + Duration::minutes(15));
        assert_eq!(clock.now(), first);

        for _ in 0..3 {
            clock.tick();
        }
        assert_eq!(clock.now(), start() + Duration::hours(1));
    }

    #[test]
    fn test_leap() {
        let mut clock = SimulationClock::new(start(), Duration::hours(1)).unwrap();
        let t = clock.leap(Duration::days(365));
        assert_eq!(t.to_string(), "2031-1-1_0:0");
        assert_eq!(clock.year(), 2031);
    }

    #[test]
    fn test_year_before_epoch() {
        let clock =
            SimulationClock::new("1969-12-31_23:00".parse().unwrap(), Duration::hours(1)).unwrap();
        assert_eq!(clock.year(), 1969);
    }

    #[test]
    fn test_ticks_per_unit() {
        let clock = SimulationClock::new(start(), Duration::minutes(15)).unwrap();
        assert_relative_eq!(clock.ticks_per_hour(), 4.0);
        assert_relative_eq!(clock.ticks_per_year(), 35040.0);
    }

    #[test]
    fn test_clock_port() {
        let clock = SimulationClock::new(start(), Duration::hours(1)).unwrap();
        let port: &dyn Clock = &clock;
        assert_eq!(port.now(), start());
        assert_eq!(port.name(), "SimulationClock");
    }
}
