//! Simulation calendar
//!
//! Conversion between calendar strings and [`TimePoint`]s, and between
//! duration strings and [`Duration`]s.
//!
//! The calendar uses 365-day years (no leap days), so a date maps to minutes
//! since the epoch through a fixed day-of-year table:
//!
//! ```text
//! minutes = (year - 1970) * 525600 + (days_before_month + day - 1) * 1440
//!         + hour * 60 + minute
//! ```
//!
//! Date strings are scanned for up to five integer fields (year, month, day,
//! hour, minute); anything that is not a digit separates fields, so
//! `2015-01-01_00:00`, `2015/1/1 0:0` and `2015 1 1` are all accepted.

use chrono::Duration;

use crate::error::{TimeError, TimeResult};
use crate::values::TimePoint;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;
pub const MINUTES_PER_YEAR: i64 = 365 * MINUTES_PER_DAY;

const EPOCH_YEAR: i64 = 1970;

/// Fields assumed for anything missing at the end of a date string
const EPOCH_FIELDS: [i64; 5] = [EPOCH_YEAR, 1, 1, 0, 0];

const DAYS_OF_MONTH: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Parse a calendar string into a time point
///
/// # Errors
/// * [`TimeError::NoDigits`] if the string contains no digit at all
/// * [`TimeError::FieldOutOfRange`] if month, day, hour or minute is invalid
/// * [`TimeError::InvalidNumber`] if a field does not fit into an integer
pub fn parse_time_point(s: &str) -> TimeResult<TimePoint> {
    let mut fields = EPOCH_FIELDS;
    let mut found = 0;
    for (slot, field) in fields.iter_mut().zip(integer_fields(s)) {
        *slot = field?;
        found += 1;
    }
    if found == 0 {
        return Err(TimeError::NoDigits(s.to_string()));
    }

    let [year, month, day, hour, minute] = fields;
    let out_of_range = || TimeError::FieldOutOfRange(s.to_string());

    if !(1..=12).contains(&month) {
        return Err(out_of_range());
    }
    let month_index = (month - 1) as usize;
    if !(1..=DAYS_OF_MONTH[month_index]).contains(&day)
        || !(0..=23).contains(&hour)
        || !(0..=59).contains(&minute)
    {
        return Err(out_of_range());
    }

    let day_of_year = DAYS_BEFORE_MONTH[month_index] + day - 1;
    let minute_of_year = day_of_year * MINUTES_PER_DAY + hour * MINUTES_PER_HOUR + minute;
    (year - EPOCH_YEAR)
        .checked_mul(MINUTES_PER_YEAR)
        .and_then(|m| m.checked_add(minute_of_year))
        .map(TimePoint::from_minutes)
        .ok_or_else(out_of_range)
}

/// Format a time point as `Y-M-D_H:M` (no zero padding)
pub fn format_time_point(time_point: TimePoint) -> String {
    let minutes = time_point.minutes_since_epoch();
    let year = EPOCH_YEAR + minutes.div_euclid(MINUTES_PER_YEAR);
    let minute_of_year = minutes.rem_euclid(MINUTES_PER_YEAR);
    let day_of_year = minute_of_year / MINUTES_PER_DAY;
    let minute_of_day = minute_of_year % MINUTES_PER_DAY;

    let month_index = DAYS_BEFORE_MONTH
        .iter()
        .rposition(|&before| before <= day_of_year)
        .unwrap_or(0);
    let day = day_of_year - DAYS_BEFORE_MONTH[month_index] + 1;

    format!(
        "{}-{}-{}_{}:{}",
        year,
        month_index + 1,
        day,
        minute_of_day / MINUTES_PER_HOUR,
        minute_of_day % MINUTES_PER_HOUR
    )
}

/// Parse a duration string such as `1a`, `7d`, `1h` or `15min`
///
/// The unit marker is searched anywhere in the string, in the order
/// `a` (years), `d` (days), `h` (hours), `min` (minutes); the count is the
/// leading integer.
pub fn parse_duration(s: &str) -> TimeResult<Duration> {
    let unit_minutes = if s.contains('a') {
        MINUTES_PER_YEAR
    } else if s.contains('d') {
        MINUTES_PER_DAY
    } else if s.contains('h') {
        MINUTES_PER_HOUR
    } else if s.contains("min") {
        1
    } else {
        return Err(TimeError::UnknownDurationUnit(s.to_string()));
    };

    let count = leading_integer(s)?;
    count
        .checked_mul(unit_minutes)
        .and_then(Duration::try_minutes)
        .ok_or_else(|| TimeError::InvalidNumber(s.to_string()))
}

/// Format a duration in the largest unit that divides it exactly
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes();
    if minutes == 0 {
        return "0min".to_string();
    }
    if minutes % MINUTES_PER_YEAR == 0 {
        format!("{}a", minutes / MINUTES_PER_YEAR)
    } else if minutes % MINUTES_PER_DAY == 0 {
        format!("{}d", minutes / MINUTES_PER_DAY)
    } else if minutes % MINUTES_PER_HOUR == 0 {
        format!("{}h", minutes / MINUTES_PER_HOUR)
    } else {
        format!("{}min", minutes)
    }
}

fn integer_fields(s: &str) -> impl Iterator<Item = TimeResult<i64>> + '_ {
    s.split(|c: char| !c.is_ascii_digit())
        .filter(|field| !field.is_empty())
        .map(|field| {
            field
                .parse::<i64>()
                .map_err(|_| TimeError::InvalidNumber(field.to_string()))
        })
}

fn leading_integer(s: &str) -> TimeResult<i64> {
    let trimmed = s.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len() - sign_len);
    trimmed[..sign_len + digits_len]
        .parse::<i64>()
        .map_err(|_| TimeError::InvalidNumber(s.to_string()))
}
