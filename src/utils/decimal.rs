//! Decimal rounding helpers for coordinate output

/// Number of fractional digits kept when formatting coordinates
pub const PRECISION: usize = 5;

/// Round `value` to `digits` fractional digits
///
/// The rounding is done on the exact decimal expansion of the binary value
/// (the same rounding `format!("{:.N}")` performs), so `8.699999999` turns
/// into `8.7` and not into `8.69999`.
pub fn round(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}

/// Format `value` with at most `digits` fractional digits
///
/// Trailing zeros and a dangling decimal point are trimmed, and a value that
/// rounds to zero is always printed as `0` (never `-0`).
///
/// ```
/// use gps_point::utils::decimal::to_trimmed_string;
///
/// assert_eq!(to_trimmed_string(41.9, 5), "41.9");
/// assert_eq!(to_trimmed_string(-22.952416666, 5), "-22.95242");
/// assert_eq!(to_trimmed_string(42.0, 5), "42");
/// assert_eq!(to_trimmed_string(-0.000001, 5), "0");
/// ```
pub fn to_trimmed_string(value: f64, digits: usize) -> String {
    let mut s = format!("{value:.digits$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }

    match s.as_str() {
        "-0" => "0".to_string(),
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_uses_decimal_expansion() {
        assert_eq!(round(29.800000800005364, PRECISION), 29.8);
        assert_eq!(round(59.999999999994884, PRECISION), 60.0);
        assert_eq!(round(0.858277778, PRECISION), 0.85828);
        assert_eq!(round(-22.952416666666664, PRECISION), -22.95242);
    }

    #[test]
    fn trimmed_string_keeps_integer_zeros() {
        assert_eq!(to_trimmed_string(10.0, PRECISION), "10");
        assert_eq!(to_trimmed_string(100.000001, PRECISION), "100");
        assert_eq!(to_trimmed_string(0.0, PRECISION), "0");
    }

    #[test]
    fn trimmed_string_strips_fraction_zeros() {
        assert_eq!(to_trimmed_string(0.5, PRECISION), "0.5");
        assert_eq!(to_trimmed_string(0.2945, PRECISION), "0.2945");
        assert_eq!(to_trimmed_string(8.699999999, PRECISION), "8.7");
        assert_eq!(to_trimmed_string(-43.211666666, PRECISION), "-43.21167");
    }

    #[test]
    fn trimmed_string_normalizes_negative_zero() {
        assert_eq!(to_trimmed_string(-0.0, PRECISION), "0");
        assert_eq!(to_trimmed_string(-0.000004, PRECISION), "0");
    }

    #[test]
    fn trimmed_string_respects_digits() {
        assert_eq!(to_trimmed_string(1109.0420147, 2), "1109.04");
        assert_eq!(to_trimmed_string(0.004, 2), "0");
    }
}
