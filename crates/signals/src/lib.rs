//! Horizon Signals
//!
//! Time-based data for the Horizon simulation: every load profile, capacity
//! curve or price is a [`Signal`], a function of simulated time that can be
//! evaluated at a point (`value`) or averaged over an interval (`mean`).
//!
//! Representations:
//! - grids (evenly spaced values): [`ConstGrid`], [`LinearGrid`],
//!   [`PeriodicConstGrid`], [`PeriodicLinearGrid`]
//! - irregular time/value pairs: [`ConstPairs`], [`LinearPairs`]
//! - [`AdditiveGrid`], which accumulates constant grids by merging
//! - [`Composition`], lazy `+`, `-`, `*` over two signals
//! - [`Placeholder`], a stand-in that refuses evaluation
//!
//! [`LookupTable`] stacks capacity/value signal pairs for merit-order style
//! queries.

mod additive;
mod composition;
mod grid;
mod irregular;
mod kind;
mod lookup;
mod mean;
mod placeholder;
mod signal;

pub use additive::AdditiveGrid;
pub use composition::{BinaryOp, Composition};
pub use grid::{ConstGrid, Grid, LinearGrid, PeriodicConstGrid, PeriodicLinearGrid};
pub use irregular::{ConstPairs, LinearPairs, Pairs};
pub use kind::SignalKind;
pub use lookup::{LookupTable, Segment};
pub use placeholder::Placeholder;
pub use signal::Signal;

// Re-export the contract from ports for convenience
pub use horizon_ports::{Clock, SignalError, SignalResult, TimeBased};
