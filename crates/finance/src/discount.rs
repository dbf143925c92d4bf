//! Time value of money
//!
//! Years are simulation years (365 days). Discount exponents count whole
//! years between the present day and the evaluated time.

use chrono::Duration;
use horizon_core::{EngineConfig, TimePoint, whole_steps, years};
use horizon_ports::TimeBased;

use crate::error::{FinanceError, FinanceResult};

/// Sum of `signal` sampled every `period` over `[start, end)`, discounted
///
/// The sample at step `k` is weighted with `(1 + rate)^-(n + k)`, where `n`
/// is the number of whole years from `present_day` to `start` (rounded
/// toward negative infinity).
///
/// # Errors
/// * [`FinanceError::InvalidInterestRate`] if `rate == -1`
/// * [`FinanceError::NonPositivePeriod`] if `period` is not positive
/// * [`FinanceError::Signal`] if a sample cannot be evaluated
pub fn discount_future<S: TimeBased + ?Sized>(
    signal: &S,
    start: TimePoint,
    end: TimePoint,
    period: Duration,
    rate: f64,
    present_day: TimePoint,
) -> FinanceResult<f64> {
    if rate == -1.0 {
        return Err(FinanceError::InvalidInterestRate);
    }
    if period.num_minutes() <= 0 {
        return Err(FinanceError::NonPositivePeriod(period.num_minutes()));
    }

    let base = 1.0 + rate;
    let mut step = whole_steps(start - present_day, years(1));
    let mut cursor = start;
    let mut discounted_sum = 0.0;
    while cursor < end {
        discounted_sum += signal.value(cursor)? * base.powf(-(step as f64));
        cursor += period;
        step += 1;
    }
    Ok(discounted_sum)
}

/// Move `value` from `present_day` to `other_day` with annual compounding
///
/// The exponent is the number of whole years between the two days
/// (truncated toward zero) minus one, since investments are booked at the
/// end of the year before their first annuity. Results within epsilon of
/// zero are returned as exactly zero.
pub fn timed_value_annual(
    config: &EngineConfig,
    value: f64,
    present_day: TimePoint,
    other_day: TimePoint,
    rate: f64,
) -> FinanceResult<f64> {
    if rate == -1.0 {
        return Err(FinanceError::InvalidInterestRate);
    }
    let whole_years = (other_day - present_day).num_minutes() / years(1).num_minutes();
    let time_value = value * (1.0 + rate).powf((whole_years - 1) as f64);
    if config.is_negligible(time_value) {
        return Ok(0.0);
    }
    Ok(time_value)
}
