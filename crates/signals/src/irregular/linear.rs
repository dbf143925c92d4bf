use horizon_core::TimePoint;
use horizon_ports::{SignalResult, TimeBased};

use super::Pairs;
use crate::mean::{RunningMean, interpolate_linear, minutes};

/// Linear interpolation between consecutive pairs
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPairs {
    pairs: Pairs,
}

impl LinearPairs {
    pub fn new(data: Vec<(TimePoint, f64)>) -> SignalResult<Self> {
        Ok(Self::from_pairs(Pairs::new(data)?))
    }

    pub fn from_pairs(pairs: Pairs) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &Pairs {
        &self.pairs
    }

    /// Average of the value at pair `index` and the value `weight` minutes
    /// further along the segment towards pair `towards`
    fn partial_segment(&self, index: usize, towards: usize, weight: f64) -> f64 {
        let pairs = &self.pairs;
        let span = minutes(pairs.time(index.max(towards)) - pairs.time(index.min(towards)));
        let here = pairs.value(index);
        0.5 * (here + interpolate_linear(here, pairs.value(towards), weight / span))
    }
}

impl TimeBased for LinearPairs {
    fn value(&self, time_point: TimePoint) -> SignalResult<f64> {
        let pairs = &self.pairs;
        if time_point < pairs.first_time() {
            return Ok(0.0);
        }
        if time_point >= pairs.last_time() {
            return Ok(pairs.last_value());
        }
        let (index, fraction) = pairs.locate_fraction(time_point);
        Ok(interpolate_linear(
            pairs.value(index),
            pairs.value(index + 1),
            fraction,
        ))
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
                let left = pairs.value(next - 1);
                let right = pairs.value(next);
                return Ok(0.5
                    * (interpolate_linear(left, right, pairs.fraction(next - 1, from))
                        + interpolate_linear(left, right, pairs.fraction(next - 1, to))));
            }
            let weight = minutes(pairs.time(next) - from);
            acc.include(weight, self.partial_segment(next, next - 1, weight));
            next
        } else {
            acc.include(minutes(pairs.first_time() - from), 0.0);
            0
        };

        while index + 1 < pairs.len() && pairs.time(index + 1) < to {
            acc.include(
                minutes(pairs.time(index + 1) - pairs.time(index)),
                0.5 * (pairs.value(index) + pairs.value(index + 1)),
            );
            index += 1;
        }

        let weight = minutes(to - pairs.time(index));
        if index + 1 < pairs.len() {
            acc.include(weight, self.partial_segment(index, index + 1, weight));
        } else {
            acc.include(weight, pairs.value(index));
        }
        Ok(acc.mean())
    }

    fn start(&self) -> TimePoint {
        self.pairs.first_time()
    }

    fn to_text(&self) -> String {
        self.pairs.to_text("DVP_linear")
    }

    fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Duration;

    fn at(h: i64) -> TimePoint {
        "2030-01-01_00:00".parse::<TimePoint>().unwrap() + Duration::hours(h)
    }

    fn signal() -> LinearPairs {
        LinearPairs::new(vec![(at(0), 0.0), (at(2), 20.0), (at(6), 20.0)]).unwrap()
    }

    #[test]
    fn test_value() {
        let s = signal();
        assert_eq!(s.value(at(-1)).unwrap(), 0.0);
        assert_eq!(s.value(at(0)).unwrap(), 0.0);
        assert_relative_eq!(s.value(at(1)).unwrap(), 10.0);
        assert_eq!(s.value(at(4)).unwrap(), 20.0);
        assert_eq!(s.value(at(6)).unwrap(), 20.0);
        assert_eq!(s.value(at(60)).unwrap(), 20.0);
    }

    #[test]
    fn test_mean_within_one_bracket() {
        // ramp from 5 to 15
        assert_relative_eq!(
            signal()
                .mean(at(0) + Duration::minutes(30), at(1) + Duration::minutes(30))
                .unwrap(),
            10.0
        );
    }

    #[test]
    fn test_mean_over_all_pairs() {
        // triangle area 20 over [0h, 2h], then 20 for 6h
        assert_relative_eq!(
            signal().mean(at(0), at(8)).unwrap(),
            (20.0 + 120.0) / 8.0
        );
    }

    #[test]
    fn test_mean_with_partial_boundaries() {
        // [1h, 2h] averages 15, [2h, 3h] is flat at 20
        assert_relative_eq!(signal().mean(at(1), at(3)).unwrap(), 17.5);
    }

    #[test]
    fn test_mean_before_first_time_counts_as_zero() {
        assert_relative_eq!(signal().mean(at(-2), at(2)).unwrap(), 5.0);
    }

    #[test]
    fn test_mean_past_last_time() {
        assert_eq!(signal().mean(at(7), at(9)).unwrap(), 20.0);
    }
}
