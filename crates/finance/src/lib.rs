//! Horizon Finance
//!
//! Economic evaluation over time-based signals: interval sums, discounting
//! of future cash flows, annual compounding and annuity factors.
//!
//! Every function takes its signal as `&S where S: TimeBased + ?Sized`, so a
//! concrete signal, a `Signal` enum value or a `&dyn TimeBased` all work.
//!
//! ## Usage
//!
//! ```
//! use horizon_core::EngineConfig;
//! use horizon_finance::annuity_factor;
//!
//! let config = EngineConfig::default();
//! assert_eq!(annuity_factor(&config, 0.0, 4).unwrap(), 0.25);
//! ```

pub mod annuity;
pub mod discount;
pub mod error;
pub mod interval_sum;
pub mod numeric;

pub use annuity::annuity_factor;
pub use discount::{discount_future, timed_value_annual};
pub use error::{FinanceError, FinanceResult};
pub use interval_sum::{sum, sum_means, sum_positive_values};
pub use numeric::{approx_equal, pretty_duration, sorted_indices};
