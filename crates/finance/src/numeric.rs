//! Small numeric and reporting helpers

use std::cmp::Ordering;

/// True if `a` and `b` differ by less than `precision`
pub fn approx_equal(a: f64, b: f64, precision: f64) -> bool {
    (a - b).powi(2) < precision.powi(2)
}

/// Indices that visit `items` in ascending order
///
/// Ties and incomparable pairs (NaN) keep their input order.
pub fn sorted_indices<T: PartialOrd>(items: &[T]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| items[a].partial_cmp(&items[b]).unwrap_or(Ordering::Equal));
    indices
}

/// Human-readable wall-clock duration, e.g. `1 minutes, 5 seconds and 3 milliseconds`
///
/// The largest unit shows the full quotient; smaller units show remainders.
pub fn pretty_duration(millis: u64) -> String {
    const UNITS: [(&str, u64); 4] = [
        ("milliseconds", 1000),
        ("seconds", 60),
        ("minutes", 60),
        ("hours", 24),
    ];

    let mut parts = Vec::new();
    let mut quotient = millis;
    for (name, size) in UNITS {
        if quotient <= size {
            parts.push(format!("{} {}", quotient, name));
            quotient = 0;
            break;
        }
        parts.push(format!("{} {}", quotient % size, name));
        quotient /= size;
    }
    if quotient > 0 {
        parts.push(format!("{} days", quotient));
    }

    parts.reverse();
    match parts.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_approx_equal() {
        assert!(approx_equal(1.0, 1.0 + 1e-9, 1e-6));
        assert!(approx_equal(-3.0, -3.0, 1e-12));
        assert!(!approx_equal(1.0, 1.1, 1e-6));
    }

    #[test]
    fn test_sorted_indices() {
        assert_eq!(sorted_indices(&[3.0, 1.0, 2.0]), vec![1, 2, 0]);
        assert_eq!(sorted_indices(&[2, 1, 2, 1]), vec![1, 3, 0, 2]);
        assert!(sorted_indices::<f64>(&[]).is_empty());
    }

    #[rstest]
    #[case(0, "0 milliseconds")]
    #[case(999, "999 milliseconds")]
    #[case(1000, "1000 milliseconds")]
    #[case(1500, "1 seconds and 500 milliseconds")]
    #[case(65_003, "1 minutes, 5 seconds and 3 milliseconds")]
    #[case(3_723_004, "1 hours, 2 minutes, 3 seconds and 4 milliseconds")]
    #[case(90_000_000, "1 days, 1 hours, 0 minutes, 0 seconds and 0 milliseconds")]
    fn test_pretty_duration(#[case] millis: u64, #[case] expected: &str) {
        assert_eq!(pretty_duration(millis), expected);
    }
}
