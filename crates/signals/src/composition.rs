//! Lazy arithmetic over two signals
//!
//! A [`Composition`] is built only through `+`, `-` and `*` on [`Signal`]
//! values. Each query evaluates both operands again; nothing is cached.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use horizon_core::TimePoint;
use horizon_ports::{SignalError, SignalResult, TimeBased};

use crate::signal::Signal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
}

impl BinaryOp {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
        };
        f.write_str(symbol)
    }
}

/// Binary node owning both operands
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    lhs: Box<Signal>,
    rhs: Box<Signal>,
    op: BinaryOp,
}

impl Composition {
    fn new(lhs: Signal, rhs: Signal, op: BinaryOp) -> Self {
        Self {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            op,
        }
    }

    pub fn op(&self) -> BinaryOp {
        self.op
    }

    pub fn operands(&self) -> (&Signal, &Signal) {
        (&self.lhs, &self.rhs)
    }
}

impl TimeBased for Composition {
    fn value(&self, time_point: TimePoint) -> SignalResult<f64> {
        Ok(self
            .op
            .apply(self.lhs.value(time_point)?, self.rhs.value(time_point)?))
    }

    /// Sums and differences are linear, so their mean is the sum or
    /// difference of the operand means; products have no such shortcut.
    fn mean(&self, from: TimePoint, to: TimePoint) -> SignalResult<f64> {
        match self.op {
            BinaryOp::Add | BinaryOp::Subtract => Ok(self
                .op
                .apply(self.lhs.mean(from, to)?, self.rhs.mean(from, to)?)),
            BinaryOp::Multiply => Err(SignalError::Unsupported(
                "mean of a product of signals".to_string(),
            )),
        }
    }

    fn start(&self) -> TimePoint {
        self.lhs.start().min(self.rhs.start())
    }

    fn to_text(&self) -> String {
        "composition of signals is not printable".to_string()
    }

    fn is_empty(&self) -> bool {
        self.lhs.is_empty() || self.rhs.is_empty()
    }
}

impl Add for Signal {
    type Output = Signal;

    fn add(self, rhs: Signal) -> Signal {
        Signal::Composition(Composition::new(self, rhs, BinaryOp::Add))
    }
}

impl Sub for Signal {
    type Output = Signal;

    fn sub(self, rhs: Signal) -> Signal {
        Signal::Composition(Composition::new(self, rhs, BinaryOp::Subtract))
    }
}

impl Mul for Signal {
    type Output = Signal;

    fn mul(self, rhs: Signal) -> Signal {
        Signal::Composition(Composition::new(self, rhs, BinaryOp::Multiply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{ConstGrid, LinearGrid};
    use crate::placeholder::Placeholder;
    use approx::assert_relative_eq;
    use chrono::Duration;

    fn at(h: i64) -> TimePoint {
        "2030-01-01_00:00".parse::<TimePoint>().unwrap() + Duration::hours(h)
    }

    fn steps() -> Signal {
        ConstGrid::new(vec![1.0, 2.0, 3.0], at(0), Duration::hours(1))
            .unwrap()
            .into()
    }

    fn ramp() -> Signal {
        LinearGrid::new(vec![10.0, 20.0], at(-5), Duration::hours(10))
            .unwrap()
            .into()
    }

    #[test]
    fn test_value_applies_operator() {
        let t = at(1);
        let a = steps().value(t).unwrap();
        let b = ramp().value(t).unwrap();
        assert_eq!((steps() + ramp()).value(t).unwrap(), a + b);
        assert_eq!((steps() - ramp()).value(t).unwrap(), a - b);
        assert_eq!((steps() * ramp()).value(t).unwrap(), a * b);
    }

    #[test]
    fn test_start_is_earliest_operand_start() {
        assert_eq!((steps() + ramp()).start(), at(-5));
        assert_eq!((ramp() * steps()).start(), at(-5));
    }

    #[test]
    fn test_nested_tree_is_deep_copied() {
        let tree = (steps() + ramp()) * steps();
        let copy = tree.clone();
        assert_eq!(copy, tree);
        drop(tree);
        assert_relative_eq!(copy.value(at(2)).unwrap(), (3.0 + 17.0) * 3.0);
    }

    #[test]
    fn test_mean_of_sum_and_difference() {
        let sum = steps() + steps();
        assert_relative_eq!(sum.mean(at(0), at(3)).unwrap(), 4.0);
        let diff = steps() - steps();
        assert_eq!(diff.mean(at(0), at(3)).unwrap(), 0.0);
        assert!(matches!(
            (steps() * steps()).mean(at(0), at(3)),
            Err(SignalError::Unsupported(_))
        ));
    }

    #[test]
    fn test_placeholder_operand_propagates_error() {
        let signal = steps() + Signal::Placeholder(Placeholder);
        assert_eq!(signal.value(at(0)), Err(SignalError::Uninitialized));
        assert!(signal.is_empty());
        assert_eq!(signal.to_text(), "composition of signals is not printable");
    }
}
