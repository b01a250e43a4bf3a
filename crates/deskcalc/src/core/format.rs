//! General numeric formatting and permissive parsing
//!
//! The display only ever holds text. Every computed value enters it through
//! [`format_general`] and leaves it through [`parse_permissive`].

use tracing::trace;

/// Significant digits shown for computed results
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 10;

/// Formats a value with `precision` significant digits, `%g` style.
///
/// Picks fixed notation when the decimal exponent `X` of the rounded value
/// satisfies `-4 <= X < precision`, exponential notation (`1.5e+20`,
/// `1e-05`) otherwise. Trailing zeros and a dangling `.` are removed.
///
/// ```rust
/// use deskcalc::core::format::format_general;
///
/// assert_eq!(format_general(0.5, 10), "0.5");
/// assert_eq!(format_general(1.0 / 3.0, 10), "0.3333333333");
/// assert_eq!(format_general(1e30, 10), "1e+30");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to `precision` digits can carry into the next power of ten,
    // so the exponent is taken from the already-rounded scientific form.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits = precision as i32;

    if exponent < -4 || exponent >= digits {
        trace!(value, exponent, "formatting in exponential notation");
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Removes trailing fractional zeros and a trailing decimal point
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Parses the longest numeric prefix of `text`, yielding `0.0` when there is none.
///
/// Accepts leading whitespace, an optional sign, digits with at most one
/// decimal point and an optional exponent. Garbage such as `"Error"`, `"-"`
/// or `"."` parses as zero instead of failing.
#[must_use]
pub fn parse_permissive(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        end += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
