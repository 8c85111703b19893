//! Display formatting and small numeric helpers.

use num_format::{Locale, ToFormattedString};

/// Rounds to 2 decimal places. Idempotent: re-rounding a rounded value
/// is a no-op.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats an integer count with thousands separators, e.g. `1,234`.
#[must_use]
pub fn thousands(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Arithmetic mean of a slice; zero for an empty slice to avoid NaNs.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;
    values.iter().sum::<f64>() / count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_idempotent() {
        let once = round2(1234.5678);
        assert!((once - 1234.57).abs() < f64::EPSILON);
        assert!((round2(once) - once).abs() < f64::EPSILON);
    }

    #[test]
    fn thousands_separates_groups() {
        assert_eq!(thousands(1_234_567), "1,234,567");
        assert_eq!(thousands(999), "999");
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert!(mean(&[]).abs() < f64::EPSILON);
        assert!((mean(&[5000.0, 5500.0]) - 5250.0).abs() < f64::EPSILON);
    }
}
