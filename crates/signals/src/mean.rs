//! Incremental weighted averaging
//!
//! All interval means are accumulated segment by segment with
//!
//! ```text
//! total  += w
//! mean   += (w / total) * (v - mean)
//! ```
//!
//! instead of summing `w * v` and dividing at the end. Over multi-decade
//! hourly horizons the naive sum loses precision; the order in which segments
//! are included is part of the result and must not be rearranged.

use chrono::Duration;

/// Running time-weighted mean
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct RunningMean {
    mean: f64,
    weight: f64,
}

impl RunningMean {
    /// Fold a segment of weight `weight` and value `value` into the mean
    pub(crate) fn include(&mut self, weight: f64, value: f64) {
        self.weight += weight;
        if self.weight != 0.0 {
            self.mean += (weight / self.weight) * (value - self.mean);
        }
    }

    pub(crate) fn mean(&self) -> f64 {
        self.mean
    }

    pub(crate) fn weight(&self) -> f64 {
        self.weight
    }
}

/// Linear interpolation between `a` (fraction 0) and `b` (fraction 1)
#[inline]
pub(crate) fn interpolate_linear(a: f64, b: f64, fraction: f64) -> f64 {
    (1.0 - fraction) * a + fraction * b
}

/// Weight of a time span, in minutes
#[inline]
pub(crate) fn minutes(span: Duration) -> f64 {
    span.num_minutes() as f64
}
