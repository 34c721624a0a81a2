/// Parses a numeral using its longest leading float prefix.
///
/// Numerals reach this function as runs of ASCII digits and `.` characters.
/// Only the prefix of the form `digits [ '.' digits ]` is considered, so
/// trailing garbage such as a second decimal point is dropped. A numeral
/// whose prefix holds no digit at all parses as `NaN`.
///
/// ## Parameters
/// - `numeral`: The accumulated numeral text.
///
/// ## Returns
/// The parsed value, or `NaN` when no digits lead the numeral.
///
/// ## Example
/// ```
/// use reckon::util::num::parse_numeral;
///
/// assert_eq!(parse_numeral("12"), 12.0);
/// assert_eq!(parse_numeral("1.2.3"), 1.2);
/// assert_eq!(parse_numeral(".5"), 0.5);
/// assert!(parse_numeral(".").is_nan());
/// ```
#[must_use]
pub fn parse_numeral(numeral: &str) -> f64 {
    let integral = leading_digits(numeral);
    let mut end = integral;

    if numeral[integral..].starts_with('.') {
        end += 1 + leading_digits(&numeral[integral + 1..]);
    }

    let prefix = &numeral[..end];
    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return f64::NAN;
    }

    prefix.parse().unwrap_or(f64::NAN)
}

fn leading_digits(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Magnitude from which results switch to exponent notation.
pub const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitude below which results switch to exponent notation.
pub const EXPONENT_BELOW: f64 = 1e-6;

/// Formats an evaluation result for display.
///
/// Integral values print without a fractional part, other finite values use
/// the shortest representation that round-trips. Magnitudes of at least
/// [`EXPONENT_ABOVE`] or below [`EXPONENT_BELOW`] use exponent notation with
/// an explicit sign, such as `1e+22` or `1e-7`. Infinities print as
/// `Infinity` and `-Infinity`, and `NaN` prints as `NaN`. Negative zero
/// prints as `0`.
///
/// ## Example
/// ```
/// use reckon::util::num::format_number;
///
/// assert_eq!(format_number(31.0), "31");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e22), "1e+22");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => formatted,
        };
    }

    value.to_string()
}
