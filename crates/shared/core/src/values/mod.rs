use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::calendar::{self, MINUTES_PER_YEAR};
use crate::error::TimeError;

/// Simulated point in time, counted in whole minutes since 1970-01-01 00:00
///
/// The simulation calendar has no leap days, so every year is exactly
/// 8760 hours long. Sub-minute parts of a `Duration` are truncated when
/// added to a time point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimePoint(i64);

impl TimePoint {
    /// The calendar epoch, 1970-01-01 00:00
    pub const EPOCH: TimePoint = TimePoint(0);

    /// 1900-01-01 00:00, used as the start of signals without a real floor
    pub const FAR_PAST: TimePoint = TimePoint(-70 * MINUTES_PER_YEAR);

    pub const fn from_minutes(minutes: i64) -> Self {
        Self(minutes)
    }

    pub const fn minutes_since_epoch(self) -> i64 {
        self.0
    }
}

impl Add<Duration> for TimePoint {
    type Output = TimePoint;

    fn add(self, rhs: Duration) -> TimePoint {
        TimePoint(self.0 + rhs.num_minutes())
    }
}

impl AddAssign<Duration> for TimePoint {
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs.num_minutes();
    }
}

impl Sub<Duration> for TimePoint {
    type Output = TimePoint;

    fn sub(self, rhs: Duration) -> TimePoint {
        TimePoint(self.0 - rhs.num_minutes())
    }
}

impl SubAssign<Duration> for TimePoint {
    fn sub_assign(&mut self, rhs: Duration) {
        self.0 -= rhs.num_minutes();
    }
}

impl Sub for TimePoint {
    type Output = Duration;

    fn sub(self, rhs: TimePoint) -> Duration {
        Duration::minutes(self.0 - rhs.0)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&calendar::format_time_point(*self))
    }
}

impl FromStr for TimePoint {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        calendar::parse_time_point(s)
    }
}

/// A simulation year (365 days)
pub fn years(count: i64) -> Duration {
    Duration::minutes(count * MINUTES_PER_YEAR)
}

/// Number of whole `unit` steps in `span`, rounded toward negative infinity
pub fn whole_steps(span: Duration, unit: Duration) -> i64 {
    span.num_minutes().div_euclid(unit.num_minutes())
}
