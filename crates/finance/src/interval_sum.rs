//! Interval summation
//!
//! A [`SimulationClock`] starts at `start` and ticks by `interval`; the
//! signal is evaluated at every visited time point. The first point is
//! always evaluated, even if `start >= end`. A step whose evaluation fails
//! is logged and contributes zero; the sum carries on.

use chrono::Duration;
use horizon_clock::SimulationClock;
use horizon_core::{EngineConfig, TimePoint};
use horizon_ports::{SignalResult, TimeBased};
use log::warn;

use crate::error::{FinanceError, FinanceResult};

/// Sum of `signal.value` at each step
pub fn sum<S: TimeBased + ?Sized>(
    signal: &S,
    start: TimePoint,
    end: TimePoint,
    interval: Duration,
) -> FinanceResult<f64> {
    accumulate(start, end, interval, "sum", |t| signal.value(t), |_| true)
}

/// Sum of the step values that exceed epsilon
pub fn sum_positive_values<S: TimeBased + ?Sized>(
    config: &EngineConfig,
    signal: &S,
    start: TimePoint,
    end: TimePoint,
    interval: Duration,
) -> FinanceResult<f64> {
    accumulate(
        start,
        end,
        interval,
        "sum_positive_values",
        |t| signal.value(t),
        |v| v > config.epsilon,
    )
}

/// Sum of the means over `[t, t + interval)` that reach epsilon
pub fn sum_means<S: TimeBased + ?Sized>(
    config: &EngineConfig,
    signal: &S,
    start: TimePoint,
    end: TimePoint,
    interval: Duration,
) -> FinanceResult<f64> {
    accumulate(
        start,
        end,
        interval,
        "sum_means",
        |t| signal.mean(t, t + interval),
        |v| v >= config.epsilon,
    )
}

fn accumulate(
    start: TimePoint,
    end: TimePoint,
    interval: Duration,
    operation: &str,
    evaluate: impl Fn(TimePoint) -> SignalResult<f64>,
    counts: impl Fn(f64) -> bool,
) -> FinanceResult<f64> {
    if interval.num_minutes() <= 0 {
        return Err(FinanceError::NonPositivePeriod(interval.num_minutes()));
    }
    let mut clock = SimulationClock::new(start, interval)?;
    let mut total = 0.0;
    loop {
        match evaluate(clock.now()) {
            Ok(value) if counts(value) => total += value,
            Ok(_) => {}
            Err(e) => warn!(
                "{}: evaluation at {} failed, counting zero: {}",
                operation,
                clock.now(),
                e
            ),
        }
        if clock.tick() >= end {
            break;
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_ports::SignalError;

    /// Hour of day as value; fails on 03:00
    struct HourOfDay;

    impl TimeBased for HourOfDay {
        fn value(&self, time_point: TimePoint) -> SignalResult<f64> {
            let hour = time_point.minutes_since_epoch().rem_euclid(1440) / 60;
            if hour == 3 {
                return Err(SignalError::Uninitialized);
            }
            Ok(hour as f64 - 2.0)
        }

        fn mean(&self, from: TimePoint, _to: TimePoint) -> SignalResult<f64> {
            self.value(from)
        }

        fn to_text(&self) -> String {
            "hour of day".to_string()
        }

        fn is_empty(&self) -> bool {
            false
        }
    }

    fn at(h: i64) -> TimePoint {
        "2030-01-01_00:00".parse::<TimePoint>().unwrap() + Duration::hours(h)
    }

    #[test]
    fn test_sum_skips_failed_steps() {
        // -2, -1, 0, (failed), 2, 3
        assert_eq!(sum(&HourOfDay, at(0), at(6), Duration::hours(1)).unwrap(), 2.0);
    }

    #[test]
    fn test_sum_positive_values() {
        let config = EngineConfig::default();
        assert_eq!(
            sum_positive_values(&config, &HourOfDay, at(0), at(6), Duration::hours(1)).unwrap(),
            5.0
        );
    }

    #[test]
    fn test_sum_means_counts_from_epsilon() {
        let config = EngineConfig::default();
        assert_eq!(
            sum_means(&config, &HourOfDay, at(0), at(6), Duration::hours(1)).unwrap(),
            5.0
        );
    }

    #[test]
    fn test_first_step_always_evaluated() {
        assert_eq!(sum(&HourOfDay, at(5), at(5), Duration::hours(1)).unwrap(), 3.0);
        assert_eq!(sum(&HourOfDay, at(5), at(0), Duration::hours(1)).unwrap(), 3.0);
    }

    #[test]
    fn test_rejects_non_positive_interval() {
        assert_eq!(
            sum(&HourOfDay, at(0), at(6), Duration::zero()),
            Err(FinanceError::NonPositivePeriod(0))
        );
        assert_eq!(
            sum(&HourOfDay, at(0), at(6), Duration::hours(-1)),
            Err(FinanceError::NonPositivePeriod(-60))
        );
    }
}
