use horizon_core::TimePoint;
use horizon_ports::{SignalResult, TimeBased};

use super::Pairs;
use crate::mean::{RunningMean, minutes};

/// Step function: each value holds until the next pair's time
#[derive(Debug, Clone, PartialEq)]
pub struct ConstPairs {
    pairs: Pairs,
}

impl ConstPairs {
    pub fn new(data: Vec<(TimePoint, f64)>) -> SignalResult<Self> {
        Ok(Self::from_pairs(Pairs::new(data)?))
    }

    pub fn from_pairs(pairs: Pairs) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &Pairs {
        &self.pairs
    }
}

impl TimeBased for ConstPairs {
    fn value(&self, time_point: TimePoint) -> SignalResult<f64> {
        if time_point < self.pairs.first_time() {
            return Ok(0.0);
        }
        Ok(self.pairs.value(self.pairs.locate(time_point)))
    }

    fn mean(&self, from: TimePoint, to: TimePoint) -> SignalResult<f64> {
        let pairs = &self.pairs;
        if to <= pairs.first_time() {
            return Ok(0.0);
        }
        if from >= pairs.last_time() {
            return Ok(pairs.last_value());
        }
        if to <= from {
            return self.value(from);
        }

        let mut acc = RunningMean::default();
        let mut index = if from > pairs.first_time() {
            let next = pairs.first_after(from);
            if pairs.time(next) >= to {
                return Ok(pairs.value(next - 1));
            }
            acc.include(minutes(pairs.time(next) - from), pairs.value(next - 1));
            next
        } else {
            acc.include(minutes(pairs.first_time() - from), 0.0);
            0
        };

        while index + 1 < pairs.len() && pairs.time(index + 1) < to {
            acc.include(
                minutes(pairs.time(index + 1) - pairs.time(index)),
                pairs.value(index),
            );
            index += 1;
        }
        acc.include(minutes(to - pairs.time(index)), pairs.value(index));
        Ok(acc.mean())
    }

    fn start(&self) -> TimePoint {
        self.pairs.first_time()
    }

    fn to_text(&self) -> String {
        self.pairs.to_text("DVP_const")
    }

    fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
