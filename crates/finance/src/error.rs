use horizon_core::TimeError;
use horizon_ports::SignalError;
use thiserror::Error;

/// Errors raised by discounting, annuity and interval-sum functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    #[error("Interest rate must not be -1 (division by zero)")]
    InvalidInterestRate,

    #[error("Lifetime must be at least one period")]
    ZeroLifetime,

    #[error("Annuity divisor is zero for rate {rate} over {lifetime} periods")]
    DegenerateAnnuity { rate: f64, lifetime: u32 },

    #[error("Step length must be positive, got {0} minutes")]
    NonPositivePeriod(i64),

    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),

    #[error("Time error: {0}")]
    Time(#[from] TimeError),
}

pub type FinanceResult<T> = std::result::Result<T, FinanceError>;
