use horizon_core::TimePoint;
use horizon_ports::{SignalError, SignalResult, TimeBased};

/// Stand-in for a signal that has not been provided yet
///
/// Builders put a placeholder where a model element has no data; any
/// evaluation fails with [`SignalError::Uninitialized`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placeholder;

impl TimeBased for Placeholder {
    fn value(&self, _time_point: TimePoint) -> SignalResult<f64> {
        Err(SignalError::Uninitialized)
    }

    fn mean(&self, _from: TimePoint, _to: TimePoint) -> SignalResult<f64> {
        Err(SignalError::Uninitialized)
    }

    fn to_text(&self) -> String {
        "placeholder signal without data".to_string()
    }

    fn is_empty(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_fails_evaluation() {
        let placeholder = Placeholder;
        assert_eq!(placeholder.value(TimePoint::EPOCH), Err(SignalError::Uninitialized));
        assert_eq!(
            placeholder.mean(TimePoint::EPOCH, TimePoint::from_minutes(60)),
            Err(SignalError::Uninitialized)
        );
        assert_eq!(placeholder.start(), TimePoint::FAR_PAST);
        assert!(placeholder.is_empty());
    }
}
