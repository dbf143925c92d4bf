use chrono::Duration;
use horizon_core::TimePoint;
use horizon_ports::{SignalResult, TimeBased};

use super::{Extent, Grid};
use crate::mean::{RunningMean, minutes};

/// Step function on a grid, holding the last value forever
#[derive(Debug, Clone, PartialEq)]
pub struct ConstGrid {
    grid: Grid,
}

impl ConstGrid {
    pub fn new(values: Vec<f64>, start: TimePoint, interval: Duration) -> SignalResult<Self> {
        Ok(Self::from_grid(Grid::new(values, start, interval)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl TimeBased for ConstGrid {
    fn value(&self, time_point: TimePoint) -> SignalResult<f64> {
        Ok(step_value(&self.grid, time_point, Extent::Bounded))
    }

    fn mean(&self, from: TimePoint, to: TimePoint) -> SignalResult<f64> {
        Ok(step_mean(&self.grid, from, to, Extent::Bounded))
    }

    fn start(&self) -> TimePoint {
        self.grid.start()
    }

    fn to_text(&self) -> String {
        self.grid.to_text("TS_const")
    }

    fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}

/// Value of the cell containing `time_point`; zero before the grid starts
pub(crate) fn step_value(grid: &Grid, time_point: TimePoint, extent: Extent) -> f64 {
    if time_point < grid.start() {
        return 0.0;
    }
    match extent {
        Extent::Bounded if time_point >= grid.end() => grid.last(),
        _ => grid.value_at(grid.cell(time_point), extent),
    }
}

/// Time-weighted mean of a step function over `[from, to)`
///
/// Segments are folded in this order: the part before the grid start (as
/// zero) or the partial first cell, then all interior cells as a single
/// block weighted by their count, then the partial last cell.
pub(crate) fn step_mean(grid: &Grid, from: TimePoint, to: TimePoint, extent: Extent) -> f64 {
    if to <= grid.start() {
        return 0.0;
    }
    if extent == Extent::Bounded && from >= grid.end() {
        return grid.last();
    }
    if to <= from {
        return step_value(grid, from, extent);
    }

    let last_cell = grid.last_cell(to, extent);
    let mut acc = RunningMean::default();
    let mut cell = if from >= grid.start() {
        let first = grid.cell(from);
        if first == last_cell {
            return grid.value_at(first, extent);
        }
        acc.include(
            minutes(grid.grid_line(first + 1) - from),
            grid.value_at(first, extent),
        );
        first + 1
    } else {
        acc.include(minutes(grid.start() - from), 0.0);
        0
    };

    let count = last_cell - cell;
    if count > 0 {
        let mut block_sum = 0.0;
        while cell < last_cell {
            block_sum += grid.value_at(cell, extent);
            cell += 1;
        }
        acc.include(
            minutes(grid.interval()) * count as f64,
            block_sum / count as f64,
        );
    }

    acc.include(
        minutes(to - grid.grid_line(last_cell)),
        grid.value_at(last_cell, extent),
    );
    acc.mean()
}
