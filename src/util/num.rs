/// Magnitude from which reals are printed in exponent notation.
pub const EXPONENT_UPPER: f64 = 1e16;
/// Magnitude below which non-zero reals are printed in exponent notation.
pub const EXPONENT_LOWER: f64 = 1e-4;

/// Converts an `i64` to the nearest `f64`.
///
/// Used when an integer meets a real in arithmetic or comparison. Integers
/// beyond `2^53` round to the nearest representable real.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates a real towards zero, saturating at the `i64` bounds.
///
/// `NaN` truncates to `0`.
///
/// ## Example
/// ```
/// use nexlang::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(2.9), 2);
/// assert_eq!(f64_to_i64_truncated(-2.9), -2);
/// assert_eq!(f64_to_i64_truncated(1e300), i64::MAX);
/// assert_eq!(f64_to_i64_truncated(f64::NAN), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn f64_to_i64_truncated(value: f64) -> i64 {
    value as i64
}

/// Formats a real the way the language prints it.
///
/// - Integral values keep a trailing `.0` (`3.0`), so reals never print like
///   integers.
/// - Very large or very small magnitudes use exponent notation with a signed,
///   at least two digit exponent (`1e+16`, `1.5e-05`).
/// - Non-finite values print as `inf`, `-inf` and `nan`.
///
/// ## Example
/// ```
/// use nexlang::util::num::format_real;
///
/// assert_eq!(format_real(3.0), "3.0");
/// assert_eq!(format_real(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_real(-0.0), "-0.0");
/// assert_eq!(format_real(1e16), "1e+16");
/// assert_eq!(format_real(0.000015), "1.5e-05");
/// assert_eq!(format_real(f64::INFINITY), "inf");
/// assert_eq!(format_real(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || (magnitude != 0.0 && magnitude < EXPONENT_LOWER) {
        return format_exponent(value);
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Rewrites Rust's `1.5e-5` exponent form as `1.5e-05`.
fn format_exponent(value: f64) -> String {
    let formatted = format!("{value:e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_reals_use_shortest_form() {
        assert_eq!(format_real(1.5), "1.5");
        assert_eq!(format_real(-42.25), "-42.25");
        assert_eq!(format_real(0.0001), "0.0001");
        assert_eq!(format_real(123_456_789.0), "123456789.0");
    }

    #[test]
    fn exponent_forms() {
        assert_eq!(format_real(1e300), "1e+300");
        assert_eq!(format_real(-2.5e20), "-2.5e+20");
        assert_eq!(format_real(1e-7), "1e-07");
    }

    #[test]
    fn negative_infinity() {
        assert_eq!(format_real(f64::NEG_INFINITY), "-inf");
    }
}
