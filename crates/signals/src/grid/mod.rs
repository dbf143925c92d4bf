//! Evenly spaced signals
//!
//! A [`Grid`] stores `values[k]` for the grid line `start + k * interval`.
//! The four variants differ only in how a query between, before or after
//! the grid lines is answered:
//!
//! | Variant | Before start | Inside | Past last line |
//! |---|---|---|---|
//! | [`ConstGrid`] | 0 | value of the cell | last value |
//! | [`LinearGrid`] | 0 | interpolated | last value |
//! | [`PeriodicConstGrid`] | 0 | value of the cell mod N | wraps |
//! | [`PeriodicLinearGrid`] | 0 | interpolated mod N | wraps |

mod constant;
mod linear;
mod periodic;

pub use constant::ConstGrid;
pub use linear::LinearGrid;
pub use periodic::{PeriodicConstGrid, PeriodicLinearGrid};

pub(crate) use constant::{step_mean, step_value};

/// Whether indices past the last value clamp or wrap around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extent {
    Bounded,
    Periodic,
}

use chrono::Duration;
use horizon_core::{TimePoint, format_duration, format_time_point};
use horizon_ports::{SignalError, SignalResult};

/// Values on an evenly spaced time grid
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    values: Vec<f64>,
    start: TimePoint,
    interval: Duration,
}

impl Grid {
    /// Create a grid
    ///
    /// # Errors
    /// * [`SignalError::EmptyValues`] if `values` is empty
    /// * [`SignalError::NonPositiveInterval`] if `interval` is shorter than one minute
    pub fn new(values: Vec<f64>, start: TimePoint, interval: Duration) -> SignalResult<Self> {
        if values.is_empty() {
            return Err(SignalError::EmptyValues);
        }
        if interval.num_minutes() <= 0 {
            return Err(SignalError::NonPositiveInterval(interval.num_minutes()));
        }
        Ok(Self {
            values,
            start,
            interval,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn start(&self) -> TimePoint {
        self.start
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Time of the last grid line
    pub fn end(&self) -> TimePoint {
        self.grid_line(self.last_index())
    }

    /// Last stored value
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Report-writer triple: start, interval and comma-terminated values
    pub fn to_xml_parts(&self) -> (String, String, String) {
        let data = self
            .values
            .iter()
            .map(|v| format!("{:.6},", v))
            .collect::<String>();
        (
            format_time_point(self.start),
            format_duration(self.interval),
            data,
        )
    }

    pub(crate) fn to_text(&self, tag: &str) -> String {
        let mut text = format!(
            "#type;{};#interval;{};#start;{};#data;",
            tag,
            format_duration(self.interval),
            format_time_point(self.start)
        );
        for value in &self.values {
            text.push_str(&format!("{:.6};", value));
        }
        text
    }

    pub(crate) fn interval_minutes(&self) -> i64 {
        self.interval.num_minutes()
    }

    pub(crate) fn last_index(&self) -> i64 {
        self.values.len() as i64 - 1
    }

    /// Time of grid line `index` (may lie past the stored values)
    pub(crate) fn grid_line(&self, index: i64) -> TimePoint {
        TimePoint::from_minutes(self.start.minutes_since_epoch() + index * self.interval_minutes())
    }

    /// Index of the cell containing `time_point`, rounded toward negative infinity
    pub(crate) fn cell(&self, time_point: TimePoint) -> i64 {
        (time_point - self.start)
            .num_minutes()
            .div_euclid(self.interval_minutes())
    }

    /// Cell index and the fractional position of `time_point` inside it
    pub(crate) fn cell_fraction(&self, time_point: TimePoint) -> (i64, f64) {
        let offset = (time_point - self.start).num_minutes();
        let interval = self.interval_minutes();
        (
            offset.div_euclid(interval),
            offset.rem_euclid(interval) as f64 / interval as f64,
        )
    }

    /// Stored value at a non-negative index inside the grid
    pub(crate) fn at(&self, index: i64) -> f64 {
        self.values[index as usize]
    }

    /// Stored value at `index` modulo the number of values
    pub(crate) fn wrapped(&self, index: i64) -> f64 {
        self.values[index.rem_euclid(self.values.len() as i64) as usize]
    }

    pub(crate) fn value_at(&self, index: i64, extent: Extent) -> f64 {
        match extent {
            Extent::Bounded => self.at(index),
            Extent::Periodic => self.wrapped(index),
        }
    }

    /// Highest cell a mean over `[.., to)` has to visit
    pub(crate) fn last_cell(&self, to: TimePoint, extent: Extent) -> i64 {
        match extent {
            Extent::Bounded => self.cell(to).min(self.last_index()),
            Extent::Periodic => self.cell(to),
        }
    }

    pub(crate) fn values_mut(&mut self) -> &mut Vec<f64> {
        &mut self.values
    }

    pub(crate) fn set_start(&mut self, start: TimePoint) {
        self.start = start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> TimePoint {
        "2030-01-01_00:00".parse().unwrap()
    }

    #[test]
    fn test_rejects_empty_and_non_positive_interval() {
        assert_eq!(
            Grid::new(vec![], start(), Duration::hours(1)),
            Err(SignalError::EmptyValues)
        );
        assert_eq!(
            Grid::new(vec![1.0], start(), Duration::zero()),
            Err(SignalError::NonPositiveInterval(0))
        );
        assert_eq!(
            Grid::new(vec![1.0], start(), Duration::hours(-1)),
            Err(SignalError::NonPositiveInterval(-60))
        );
    }

    #[test]
    fn test_cell_location() {
        let grid = Grid::new(vec![1.0, 2.0, 3.0], start(), Duration::hours(1)).unwrap();
        assert_eq!(grid.end(), start() + Duration::hours(2));
        assert_eq!(grid.cell(start()), 0);
        assert_eq!(grid.cell(start() + Duration::minutes(59)), 0);
        assert_eq!(grid.cell(start() + Duration::minutes(60)), 1);
        assert_eq!(grid.cell(start() - Duration::minutes(1)), -1);

        let (cell, fraction) = grid.cell_fraction(start() + Duration::minutes(75));
        assert_eq!(cell, 1);
        assert_eq!(fraction, 0.25);
    }

    #[test]
    fn test_wrapped_index() {
        let grid = Grid::new(vec![1.0, 2.0, 3.0], start(), Duration::hours(1)).unwrap();
        assert_eq!(grid.wrapped(4), 2.0);
        assert_eq!(grid.wrapped(-1), 3.0);
    }

    #[test]
    fn test_text_and_xml_parts() {
        let grid = Grid::new(vec![1.0, 2.5], start(), Duration::hours(1)).unwrap();
        assert_eq!(
            grid.to_text("TS_const"),
            "#type;TS_const;#interval;1h;#start;2030-1-1_0:0;#data;1.000000;2.500000;"
        );
        let (s, i, d) = grid.to_xml_parts();
        assert_eq!(s, "2030-1-1_0:0");
        assert_eq!(i, "1h");
        assert_eq!(d, "1.000000,2.500000,");
    }
}
