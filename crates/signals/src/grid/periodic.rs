//! Grids that repeat their values forever
//!
//! Cell `k` past the stored values reads `values[k mod N]`, so a year of
//! hourly data describes every following year as well.

use chrono::Duration;
use horizon_core::TimePoint;
use horizon_ports::{SignalResult, TimeBased};

use super::constant::{step_mean, step_value};
use super::linear::{ramp_mean, ramp_value};
use super::{Extent, Grid};

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicConstGrid {
    grid: Grid,
}

impl PeriodicConstGrid {
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

impl TimeBased for PeriodicConstGrid {
    fn value(&self, time_point: TimePoint) -> SignalResult<f64> {
        Ok(step_value(&self.grid, time_point, Extent::Periodic))
    }

    fn mean(&self, from: TimePoint, to: TimePoint) -> SignalResult<f64> {
        Ok(step_mean(&self.grid, from, to, Extent::Periodic))
    }

    fn start(&self) -> TimePoint {
        self.grid.start()
    }

    fn to_text(&self) -> String {
        self.grid.to_text("TS_repeat_const")
    }

    fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}

/// Linear interpolation that wraps from the last value back to the first
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicLinearGrid {
    grid: Grid,
}

impl PeriodicLinearGrid {
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

impl TimeBased for PeriodicLinearGrid {
    fn value(&self, time_point: TimePoint) -> SignalResult<f64> {
        Ok(ramp_value(&self.grid, time_point, Extent::Periodic))
    }

    fn mean(&self, from: TimePoint, to: TimePoint) -> SignalResult<f64> {
        Ok(ramp_mean(&self.grid, from, to, Extent::Periodic))
    }

    fn start(&self) -> TimePoint {
        self.grid.start()
    }

    fn to_text(&self) -> String {
        self.grid.to_text("TS_repeat_linear")
    }

    fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}
