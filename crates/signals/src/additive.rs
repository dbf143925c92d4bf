//! Accumulating step grid
//!
//! An [`AdditiveGrid`] collects constant grids from several sources (for
//! example installed capacities of plants commissioned in different years)
//! into one grid. After every merge the stored grid evaluates to the sum of
//! all merged grids, each read with step semantics: zero before its start,
//! its last value after its end.

use std::borrow::Cow;

use horizon_core::TimePoint;
use horizon_ports::{SignalError, SignalResult, TimeBased};
use log::debug;

use crate::grid::{ConstGrid, Extent, Grid, step_mean, step_value};

/// Mutable constant grid that other constant grids can be added into
///
/// A default-constructed value holds no grid yet; the first merge adopts the
/// merged grid unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdditiveGrid {
    grid: Option<Grid>,
}

impl AdditiveGrid {
    pub fn new(
        values: Vec<f64>,
        start: TimePoint,
        interval: chrono::Duration,
    ) -> SignalResult<Self> {
        Ok(Self {
            grid: Some(Grid::new(values, start, interval)?),
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    fn initialized(&self) -> SignalResult<&Grid> {
        self.grid.as_ref().ok_or(SignalError::Uninitialized)
    }

    /// Add another additive grid; merging an uninitialized one is a no-op
    pub fn merge(&mut self, other: &AdditiveGrid) -> SignalResult<()> {
        match &other.grid {
            Some(grid) => self.merge_in_place(grid),
            None => Ok(()),
        }
    }

    /// Add `other` into this grid
    ///
    /// Only the delta is touched: the overlap is added element-wise, a gap
    /// between the two ranges is filled with the earlier grid's last value,
    /// and a trailing range of the longer grid is extended with the other's
    /// last value.
    ///
    /// # Errors
    /// [`SignalError::IntervalMismatch`] if both grids are initialized with
    /// different intervals. The stored grid is unchanged in that case.
    pub fn merge_in_place(&mut self, other: &Grid) -> SignalResult<()> {
        let Some(base) = self.grid.as_mut() else {
            debug!(
                "Additive grid adopts {} values starting {}",
                other.len(),
                other.start()
            );
            self.grid = Some(other.clone());
            return Ok(());
        };
        if base.interval() != other.interval() {
            return Err(SignalError::interval_mismatch(
                base.interval(),
                other.interval(),
            ));
        }

        let interval = base.interval_minutes();
        let mut offset = ceil_div((other.start() - base.start()).num_minutes(), interval);
        let mut trailing = ceil_div((other.end() - base.end()).num_minutes(), interval);

        // Keep the earlier-starting grid as storage, add the other one into it
        let addend: Cow<'_, [f64]> = if offset > 0 {
            Cow::Borrowed(other.values())
        } else {
            offset = -offset;
            trailing = -trailing;
            let earlier = std::mem::replace(base.values_mut(), other.values().to_vec());
            base.set_start(other.start());
            Cow::Owned(earlier)
        };

        let base_len = base.len() as i64;
        let addend_len = addend.len() as i64;
        let overlap = if offset < base_len {
            (base_len - offset).min(addend_len)
        } else {
            base_len - offset
        };
        let base_last = base.last();
        let addend_last = addend[addend.len() - 1];
        debug!(
            "Merging {} values at offset {} (overlap {}, trailing {})",
            addend_len, offset, overlap, trailing
        );

        let values = base.values_mut();
        for _ in overlap..0 {
            values.push(base_last);
        }

        let overlap_len = overlap.max(0) as usize;
        let offset = offset as usize;
        for (index, value) in addend[..overlap_len].iter().enumerate() {
            values[index + offset] += value;
        }

        let covered = (offset + addend.len()).min(values.len());
        for value in &mut values[covered..] {
            *value += addend_last;
        }

        if trailing > 0 {
            let appended_end = (overlap + trailing).min(addend_len) as usize;
            for value in &addend[overlap_len..appended_end] {
                values.push(value + base_last);
            }
        }
        Ok(())
    }
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    -(-numerator).div_euclid(denominator)
}

impl From<ConstGrid> for AdditiveGrid {
    fn from(signal: ConstGrid) -> Self {
        Self {
            grid: Some(signal.into_grid()),
        }
    }
}

impl From<Grid> for AdditiveGrid {
    fn from(grid: Grid) -> Self {
        Self { grid: Some(grid) }
    }
}

impl TimeBased for AdditiveGrid {
    fn value(&self, time_point: TimePoint) -> SignalResult<f64> {
        Ok(step_value(self.initialized()?, time_point, Extent::Bounded))
    }

    fn mean(&self, from: TimePoint, to: TimePoint) -> SignalResult<f64> {
        Ok(step_mean(self.initialized()?, from, to, Extent::Bounded))
    }

    fn start(&self) -> TimePoint {
        self.grid
            .as_ref()
            .map_or(TimePoint::FAR_PAST, |grid| grid.start())
    }

    fn to_text(&self) -> String {
        match &self.grid {
            Some(grid) => grid.to_text("TS_const_addable"),
            None => "#type;TS_const_addable;#data;".to_string(),
        }
    }

    fn is_empty(&self) -> bool {
        self.grid.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(h: i64) -> TimePoint {
        "2030-01-01_00:00".parse::<TimePoint>().unwrap() + Duration::hours(h)
    }

    fn grid(values: &[f64], start_hour: i64) -> Grid {
        Grid::new(values.to_vec(), at(start_hour), Duration::hours(1)).unwrap()
    }

    fn merged(a: &[f64], a_start: i64, b: &[f64], b_start: i64) -> Grid {
        let mut sum = AdditiveGrid::from(grid(a, a_start));
        sum.merge_in_place(&grid(b, b_start)).unwrap();
        sum.grid().unwrap().clone()
    }

    #[test]
    fn test_placeholder_adopts_first_grid() {
        let mut sum = AdditiveGrid::default();
        assert!(!sum.is_initialized());
        assert_eq!(sum.value(at(0)), Err(SignalError::Uninitialized));
        assert_eq!(sum.mean(at(0), at(1)), Err(SignalError::Uninitialized));

        sum.merge_in_place(&grid(&[5.0, 5.0], 0)).unwrap();
        assert_eq!(sum.grid(), Some(&grid(&[5.0, 5.0], 0)));
    }

    #[test]
    fn test_merge_uninitialized_is_noop() {
        let mut sum = AdditiveGrid::from(grid(&[1.0], 0));
        sum.merge(&AdditiveGrid::default()).unwrap();
        assert_eq!(sum.grid(), Some(&grid(&[1.0], 0)));
    }

    #[test]
    fn test_interval_mismatch_leaves_grid_unchanged() {
        let mut sum = AdditiveGrid::from(grid(&[1.0, 2.0], 0));
        let daily = Grid::new(vec![1.0], at(0), Duration::days(1)).unwrap();
        assert_eq!(
            sum.merge_in_place(&daily),
            Err(SignalError::IntervalMismatch {
                this: 60,
                other: 1440
            })
        );
        assert_eq!(sum.grid(), Some(&grid(&[1.0, 2.0], 0)));
    }

    #[test]
    fn test_same_start_same_end() {
        assert_eq!(merged(&[1.0, 2.0], 0, &[3.0, 4.0], 0), grid(&[4.0, 6.0], 0));
    }

    #[test]
    fn test_later_start_same_end() {
        assert_eq!(
            merged(&[1.0, 2.0, 3.0], 0, &[10.0, 20.0], 1),
            grid(&[1.0, 12.0, 23.0], 0)
        );
    }

    #[test]
    fn test_later_start_later_end_extends_with_last_value() {
        assert_eq!(
            merged(&[1.0, 2.0, 3.0], 0, &[10.0, 20.0, 30.0], 2),
            grid(&[1.0, 2.0, 13.0, 23.0, 33.0], 0)
        );
    }

    #[test]
    fn test_gap_is_filled_with_last_value() {
        assert_eq!(
            merged(&[1.0, 2.0], 0, &[10.0, 20.0], 4),
            grid(&[1.0, 2.0, 2.0, 2.0, 12.0, 22.0], 0)
        );
    }

    #[test]
    fn test_adjacent_ranges() {
        assert_eq!(
            merged(&[1.0, 2.0], 0, &[10.0], 2),
            grid(&[1.0, 2.0, 12.0], 0)
        );
    }

    #[test]
    fn test_earlier_start_swaps_storage() {
        assert_eq!(
            merged(&[1.0, 2.0, 3.0], 2, &[10.0, 20.0], 0),
            grid(&[10.0, 20.0, 21.0, 22.0, 23.0], 0)
        );
    }

    #[test]
    fn test_contained_grid_keeps_its_last_value() {
        assert_eq!(
            merged(&[1.0, 2.0, 3.0], 0, &[10.0], 1),
            grid(&[1.0, 12.0, 13.0], 0)
        );
        assert_eq!(
            merged(&[1.0, 2.0], 1, &[10.0, 20.0, 30.0, 40.0], 0),
            grid(&[10.0, 21.0, 32.0, 42.0], 0)
        );
    }

    #[test]
    fn test_to_text_tag() {
        let sum = AdditiveGrid::from(grid(&[1.0], 0));
        assert!(sum.to_text().starts_with("#type;TS_const_addable;#interval;1h;"));
        assert_eq!(
            AdditiveGrid::default().to_text(),
            "#type;TS_const_addable;#data;"
        );
    }
}
