//! The closed set of signal representations
//!
//! [`Signal`] owns its payload; `clone` copies the whole tree, including
//! the operands of compositions. Every variant answers the [`TimeBased`]
//! contract, so model code holds a `Signal` without knowing which
//! representation is behind it.

use chrono::Duration;
use horizon_core::TimePoint;
use horizon_ports::{SignalError, SignalResult, TimeBased};

use crate::additive::AdditiveGrid;
use crate::composition::Composition;
use crate::grid::{ConstGrid, Grid, LinearGrid, PeriodicConstGrid, PeriodicLinearGrid};
use crate::irregular::{ConstPairs, LinearPairs, Pairs};
use crate::kind::SignalKind;
use crate::placeholder::Placeholder;

#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    ConstGrid(ConstGrid),
    LinearGrid(LinearGrid),
    PeriodicConstGrid(PeriodicConstGrid),
    PeriodicLinearGrid(PeriodicLinearGrid),
    ConstPairs(ConstPairs),
    LinearPairs(LinearPairs),
    Additive(AdditiveGrid),
    Composition(Composition),
    Placeholder(Placeholder),
}

impl Signal {
    /// Build an evenly spaced signal of the given kind
    ///
    /// # Errors
    /// * [`SignalError::UnknownKind`] if `kind` is not a grid kind
    /// * any construction error of [`Grid::new`]
    pub fn from_grid(
        kind: SignalKind,
        values: Vec<f64>,
        start: TimePoint,
        interval: Duration,
    ) -> SignalResult<Self> {
        let grid = Grid::new(values, start, interval)?;
        match kind {
            SignalKind::ConstGrid => Ok(Signal::ConstGrid(ConstGrid::from_grid(grid))),
            SignalKind::LinearGrid => Ok(Signal::LinearGrid(LinearGrid::from_grid(grid))),
            SignalKind::PeriodicConstGrid => Ok(Signal::PeriodicConstGrid(
                PeriodicConstGrid::from_grid(grid),
            )),
            SignalKind::PeriodicLinearGrid => Ok(Signal::PeriodicLinearGrid(
                PeriodicLinearGrid::from_grid(grid),
            )),
            other => Err(SignalError::UnknownKind(format!(
                "{} is not built from grid values",
                other
            ))),
        }
    }

    /// Build an irregular signal of the given kind
    ///
    /// # Errors
    /// * [`SignalError::UnknownKind`] if `kind` is not a pair kind
    /// * any construction error of [`Pairs::new`]
    pub fn from_pairs(kind: SignalKind, data: Vec<(TimePoint, f64)>) -> SignalResult<Self> {
        let pairs = Pairs::new(data)?;
        match kind {
            SignalKind::ConstPairs => Ok(Signal::ConstPairs(ConstPairs::from_pairs(pairs))),
            SignalKind::LinearPairs => Ok(Signal::LinearPairs(LinearPairs::from_pairs(pairs))),
            other => Err(SignalError::UnknownKind(format!(
                "{} is not built from time/value pairs",
                other
            ))),
        }
    }

    /// Type tag of the representation; `None` for compositions and placeholders
    pub fn kind(&self) -> Option<SignalKind> {
        match self {
            Signal::ConstGrid(_) => Some(SignalKind::ConstGrid),
            Signal::LinearGrid(_) => Some(SignalKind::LinearGrid),
            Signal::PeriodicConstGrid(_) => Some(SignalKind::PeriodicConstGrid),
            Signal::PeriodicLinearGrid(_) => Some(SignalKind::PeriodicLinearGrid),
            Signal::ConstPairs(_) => Some(SignalKind::ConstPairs),
            Signal::LinearPairs(_) => Some(SignalKind::LinearPairs),
            Signal::Additive(_) => Some(SignalKind::AdditiveGrid),
            Signal::Composition(_) | Signal::Placeholder(_) => None,
        }
    }

    /// Underlying grid of the evenly spaced variants
    pub fn grid(&self) -> Option<&Grid> {
        match self {
            Signal::ConstGrid(s) => Some(s.grid()),
            Signal::LinearGrid(s) => Some(s.grid()),
            Signal::PeriodicConstGrid(s) => Some(s.grid()),
            Signal::PeriodicLinearGrid(s) => Some(s.grid()),
            Signal::Additive(s) => s.grid(),
            _ => None,
        }
    }

    /// Report-writer triple `(start, interval, values)` of grid signals
    pub fn to_xml_parts(&self) -> Option<(String, String, String)> {
        self.grid().map(Grid::to_xml_parts)
    }

    fn as_time_based(&self) -> &dyn TimeBased {
        match self {
            Signal::ConstGrid(s) => s,
            Signal::LinearGrid(s) => s,
            Signal::PeriodicConstGrid(s) => s,
            Signal::PeriodicLinearGrid(s) => s,
            Signal::ConstPairs(s) => s,
            Signal::LinearPairs(s) => s,
            Signal::Additive(s) => s,
            Signal::Composition(s) => s,
            Signal::Placeholder(s) => s,
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Signal::Placeholder(Placeholder)
    }
}

impl TimeBased for Signal {
    fn value(&self, time_point: TimePoint) -> SignalResult<f64> {
        self.as_time_based().value(time_point)
    }

    fn mean(&self, from: TimePoint, to: TimePoint) -> SignalResult<f64> {
        self.as_time_based().mean(from, to)
    }

    fn start(&self) -> TimePoint {
        self.as_time_based().start()
    }

    fn to_text(&self) -> String {
        self.as_time_based().to_text()
    }

    fn is_empty(&self) -> bool {
        self.as_time_based().is_empty()
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Signal {
                fn from(signal: $ty) -> Self {
                    Signal::$variant(signal)
                }
            }
        )*
    };
}

impl_from_variant! {
    ConstGrid => ConstGrid,
    LinearGrid => LinearGrid,
    PeriodicConstGrid => PeriodicConstGrid,
    PeriodicLinearGrid => PeriodicLinearGrid,
    ConstPairs => ConstPairs,
    LinearPairs => LinearPairs,
    Additive => AdditiveGrid,
    Composition => Composition,
    Placeholder => Placeholder,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: i64) -> TimePoint {
        "2030-01-01_00:00".parse::<TimePoint>().unwrap() + Duration::hours(h)
    }

    #[test]
    fn test_from_grid_dispatches_on_kind() {
        let values = vec![1.0, 3.0];
        let linear =
            Signal::from_grid(SignalKind::LinearGrid, values.clone(), at(0), Duration::hours(2))
                .unwrap();
        assert_eq!(linear.kind(), Some(SignalKind::LinearGrid));
        assert_eq!(linear.value(at(1)).unwrap(), 2.0);

        let steps =
            Signal::from_grid(SignalKind::ConstGrid, values, at(0), Duration::hours(2)).unwrap();
        assert_eq!(steps.value(at(1)).unwrap(), 1.0);
    }

    #[test]
    fn test_kind_must_match_input_shape() {
        assert!(matches!(
            Signal::from_grid(SignalKind::ConstPairs, vec![1.0], at(0), Duration::hours(1)),
            Err(SignalError::UnknownKind(_))
        ));
        assert!(matches!(
            Signal::from_pairs(SignalKind::LinearGrid, vec![(at(0), 1.0)]),
            Err(SignalError::UnknownKind(_))
        ));
        assert!(matches!(
            Signal::from_grid(SignalKind::AdditiveGrid, vec![1.0], at(0), Duration::hours(1)),
            Err(SignalError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_construction_errors_pass_through() {
        assert_eq!(
            Signal::from_grid(SignalKind::ConstGrid, vec![], at(0), Duration::hours(1)),
            Err(SignalError::EmptyValues)
        );
        assert_eq!(
            Signal::from_pairs(SignalKind::ConstPairs, vec![]),
            Err(SignalError::EmptyPairs)
        );
    }

    #[test]
    fn test_clone_does_not_alias_additive_storage() {
        let mut original = AdditiveGrid::new(vec![1.0], at(0), Duration::hours(1)).unwrap();
        let copy = Signal::from(original.clone());
        original
            .merge_in_place(&Grid::new(vec![5.0], at(0), Duration::hours(1)).unwrap())
            .unwrap();
        assert_eq!(original.value(at(0)).unwrap(), 6.0);
        assert_eq!(copy.value(at(0)).unwrap(), 1.0);
    }

    #[test]
    fn test_xml_parts_only_for_grids() {
        let grid =
            Signal::from_grid(SignalKind::ConstGrid, vec![2.0], at(0), Duration::hours(1)).unwrap();
        assert_eq!(
            grid.to_xml_parts(),
            Some((
                "2030-1-1_0:0".to_string(),
                "1h".to_string(),
                "2.000000,".to_string()
            ))
        );
        let pairs = Signal::from_pairs(SignalKind::ConstPairs, vec![(at(0), 1.0)]).unwrap();
        assert_eq!(pairs.to_xml_parts(), None);
    }

    #[test]
    fn test_default_is_placeholder() {
        let signal = Signal::default();
        assert_eq!(signal.kind(), None);
        assert!(signal.is_empty());
        assert_eq!(signal.value(at(0)), Err(SignalError::Uninitialized));
    }
}
