use std::fmt;
use std::str::FromStr;

use horizon_ports::SignalError;
use serde::{Deserialize, Serialize};

/// Type tag of a concrete signal representation
///
/// The tags are the ones input files and text dumps use. Builders pick the
/// constructor through this tag instead of inspecting signal types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    /// Step function on a grid
    #[serde(rename = "TS_const")]
    ConstGrid,
    /// Linear interpolation on a grid
    #[serde(rename = "TS_linear")]
    LinearGrid,
    /// Step function on a grid, repeating
    #[serde(rename = "TS_repeat_const", alias = "TS_repeatconst")]
    PeriodicConstGrid,
    /// Linear interpolation on a grid, repeating
    #[serde(rename = "TS_repeat_linear", alias = "TS_repeatlinear")]
    PeriodicLinearGrid,
    /// Step function through time/value pairs
    #[serde(rename = "DVP_const")]
    ConstPairs,
    /// Linear interpolation through time/value pairs
    #[serde(rename = "DVP_linear")]
    LinearPairs,
    /// Accumulating step grid; only produced by merging, never read from input
    #[serde(rename = "TS_const_addable")]
    AdditiveGrid,
}

impl SignalKind {
    pub fn tag(&self) -> &'static str {
        match self {
            SignalKind::ConstGrid => "TS_const",
            SignalKind::LinearGrid => "TS_linear",
            SignalKind::PeriodicConstGrid => "TS_repeat_const",
            SignalKind::PeriodicLinearGrid => "TS_repeat_linear",
            SignalKind::ConstPairs => "DVP_const",
            SignalKind::LinearPairs => "DVP_linear",
            SignalKind::AdditiveGrid => "TS_const_addable",
        }
    }

    /// True for the evenly spaced kinds
    pub fn is_grid(&self) -> bool {
        matches!(
            self,
            SignalKind::ConstGrid
                | SignalKind::LinearGrid
                | SignalKind::PeriodicConstGrid
                | SignalKind::PeriodicLinearGrid
                | SignalKind::AdditiveGrid
        )
    }

    pub fn is_periodic(&self) -> bool {
        matches!(
            self,
            SignalKind::PeriodicConstGrid | SignalKind::PeriodicLinearGrid
        )
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SignalKind {
    type Err = SignalError;

    /// Parse an input tag; the additive tag is rejected since additive grids
    /// are only built by merging
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "TS_const" => Ok(SignalKind::ConstGrid),
            "TS_linear" => Ok(SignalKind::LinearGrid),
            "TS_repeat_const" | "TS_repeatconst" => Ok(SignalKind::PeriodicConstGrid),
            "TS_repeat_linear" | "TS_repeatlinear" => Ok(SignalKind::PeriodicLinearGrid),
            "DVP_const" => Ok(SignalKind::ConstPairs),
            "DVP_linear" => Ok(SignalKind::LinearPairs),
            other => Err(SignalError::UnknownKind(other.to_string())),
        }
    }
}
