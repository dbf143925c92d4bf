use chrono::Duration;
use horizon_core::TimePoint;
use horizon_ports::{SignalResult, TimeBased};

use super::{Extent, Grid};
use crate::mean::{RunningMean, interpolate_linear, minutes};

/// Piecewise linear function through the grid values
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGrid {
    grid: Grid,
}

impl LinearGrid {
    pub fn new(values: Vec<f64>, start: TimePoint, interval: Duration) -> SignalResult<Self> {
        Ok(Self::from_grid(Grid::new(values, start, interval)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl TimeBased for LinearGrid {
    fn value(&self, time_point: TimePoint) -> SignalResult<f64> {
        Ok(ramp_value(&self.grid, time_point, Extent::Bounded))
    }

    fn mean(&self, from: TimePoint, to: TimePoint) -> SignalResult<f64> {
        Ok(ramp_mean(&self.grid, from, to, Extent::Bounded))
    }

    fn start(&self) -> TimePoint {
        self.grid.start()
    }

    fn to_text(&self) -> String {
        self.grid.to_text("TS_linear")
    }

    fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}

pub(crate) fn ramp_value(grid: &Grid, time_point: TimePoint, extent: Extent) -> f64 {
    if time_point < grid.start() {
        return 0.0;
    }
    if extent == Extent::Bounded && time_point >= grid.end() {
        return grid.last();
    }
    let (cell, fraction) = grid.cell_fraction(time_point);
    interpolate_linear(
        grid.value_at(cell, extent),
        grid.value_at(cell + 1, extent),
        fraction,
    )
}

/// Time-weighted mean of the piecewise linear function over `[from, to)`
///
/// Partial boundary cells use the average of their two end values. Whole
/// cells are folded on a grid shifted by half an interval: the first and
/// last grid line values with half weight each, then all values strictly
/// between them as one block.
pub(crate) fn ramp_mean(grid: &Grid, from: TimePoint, to: TimePoint, extent: Extent) -> f64 {
    if to <= grid.start() {
        return 0.0;
    }
    if extent == Extent::Bounded && from >= grid.end() {
        return grid.last();
    }
    if to <= from {
        return ramp_value(grid, from, extent);
    }

    let interval = minutes(grid.interval());
    let last_cell = grid.last_cell(to, extent);
    let mut acc = RunningMean::default();
    let cell = if from >= grid.start() {
        let (first, from_fraction) = grid.cell_fraction(from);
        let left = grid.value_at(first, extent);
        let right = grid.value_at(first + 1, extent);
        if first == last_cell {
            let (_, to_fraction) = grid.cell_fraction(to);
            return 0.5
                * (interpolate_linear(left, right, from_fraction)
                    + interpolate_linear(left, right, to_fraction));
        }
        let weight = minutes(grid.grid_line(first + 1) - from);
        acc.include(
            weight,
            0.5 * (right + interpolate_linear(right, left, weight / interval)),
        );
        first + 1
    } else {
        acc.include(minutes(grid.start() - from), 0.0);
        0
    };

    if cell != last_cell {
        acc.include(0.5 * interval, grid.value_at(cell, extent));
        let count = last_cell - cell - 1;
        let mut block_sum = 0.0;
        for index in cell + 1..last_cell {
            block_sum += grid.value_at(index, extent);
        }
        acc.include(0.5 * interval, grid.value_at(last_cell, extent));
        let block_mean = if count != 0 {
            block_sum / count as f64
        } else {
            block_sum
        };
        acc.include(interval * count as f64, block_mean);
    }

    let weight = minutes(to - grid.grid_line(last_cell));
    let last_value = grid.value_at(last_cell, extent);
    if extent == Extent::Periodic || to < grid.end() {
        let next_value = grid.value_at(last_cell + 1, extent);
        acc.include(
            weight,
            0.5 * (last_value + interpolate_linear(last_value, next_value, weight / interval)),
        );
    } else {
        acc.include(weight, last_value);
    }
    acc.mean()
}
