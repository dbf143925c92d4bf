use horizon_core::EngineConfig;

use crate::error::{FinanceError, FinanceResult};

/// Share of a principal repaid per period over `lifetime` periods
///
/// `1 / lifetime` for a zero rate, otherwise
/// `rate * (1 + rate)^lifetime / ((1 + rate)^lifetime - 1)`.
///
/// # Errors
/// * [`FinanceError::ZeroLifetime`] if `lifetime == 0`
/// * [`FinanceError::DegenerateAnnuity`] if the divisor is within epsilon of zero
pub fn annuity_factor(config: &EngineConfig, rate: f64, lifetime: u32) -> FinanceResult<f64> {
    if lifetime == 0 {
        return Err(FinanceError::ZeroLifetime);
    }
    if rate == 0.0 {
        return Ok(1.0 / lifetime as f64);
    }
    let compounded = (1.0 + rate).powf(lifetime as f64);
    let divisor = compounded - 1.0;
    if config.is_negligible(divisor) {
        return Err(FinanceError::DegenerateAnnuity { rate, lifetime });
    }
    Ok(compounded * rate / divisor)
}
