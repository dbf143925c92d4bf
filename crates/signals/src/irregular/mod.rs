//! Signals given as explicit time/value pairs
//!
//! Both variants read zero before the first time point and hold the last
//! value after the last one.

mod constant;
mod linear;

pub use constant::ConstPairs;
pub use linear::LinearPairs;

use horizon_core::{TimePoint, format_time_point};
use horizon_ports::{SignalError, SignalResult};

/// Strictly increasing time/value pairs, never empty
#[derive(Debug, Clone, PartialEq)]
pub struct Pairs {
    data: Vec<(TimePoint, f64)>,
}

impl Pairs {
    /// # Errors
    /// * [`SignalError::EmptyPairs`] if `data` is empty
    /// * [`SignalError::UnorderedPairs`] with the index of the first pair
    ///   whose time is not after its predecessor
    pub fn new(data: Vec<(TimePoint, f64)>) -> SignalResult<Self> {
        if data.is_empty() {
            return Err(SignalError::EmptyPairs);
        }
        if let Some(index) = data.windows(2).position(|w| w[1].0 <= w[0].0) {
            return Err(SignalError::UnorderedPairs(index + 1));
        }
        Ok(Self { data })
    }

    pub fn data(&self) -> &[(TimePoint, f64)] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn first_time(&self) -> TimePoint {
        self.data[0].0
    }

    pub fn last_time(&self) -> TimePoint {
        self.data[self.data.len() - 1].0
    }

    pub fn last_value(&self) -> f64 {
        self.data[self.data.len() - 1].1
    }

    pub(crate) fn time(&self, index: usize) -> TimePoint {
        self.data[index].0
    }

    pub(crate) fn value(&self, index: usize) -> f64 {
        self.data[index].1
    }

    /// Index `i` with `time(i) <= time_point < time(i + 1)`
    ///
    /// Times before the first pair map to 0, times after the last pair to
    /// the last index.
    pub fn locate(&self, time_point: TimePoint) -> usize {
        self.first_after(time_point).saturating_sub(1)
    }

    /// Like [`Pairs::locate`], plus the position of `time_point` inside the
    /// bracket as a fraction in `[0, 1)`
    ///
    /// The fraction is 0 when there is no following pair.
    pub fn locate_fraction(&self, time_point: TimePoint) -> (usize, f64) {
        let index = self.locate(time_point);
        if index + 1 >= self.data.len() {
            return (index, 0.0);
        }
        (index, self.fraction(index, time_point))
    }

    /// Index of the first pair strictly after `time_point`
    pub(crate) fn first_after(&self, time_point: TimePoint) -> usize {
        self.data.partition_point(|(time, _)| *time <= time_point)
    }

    /// Position of `time_point` between pair `index` and `index + 1`
    pub(crate) fn fraction(&self, index: usize, time_point: TimePoint) -> f64 {
        let offset = (time_point - self.time(index)).num_minutes() as f64;
        let span = (self.time(index + 1) - self.time(index)).num_minutes() as f64;
        offset / span
    }

    pub(crate) fn to_text(&self, tag: &str) -> String {
        let mut text = format!("#type;{};#data;", tag);
        for (time, value) in &self.data {
            text.push_str(&format!("{};{:.6};", format_time_point(*time), value));
        }
        text
    }
}
