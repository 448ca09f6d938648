//! Fixed, grouped, scientific and friendly renderings of floating point values

use super::culture::Culture;

/// Largest digit count for which scaling by a power of ten stays exact enough to round
const MAX_ROUND_DIGITS: u32 = 15;

/// Largest precision a numeric specifier accepts
pub const MAX_PRECISION: usize = 999_999_999;

/// Largest precision `format!` accepts as a width or precision argument
const MAX_FORMAT_PRECISION: usize = u16::MAX as usize;

/// `value` rendered with exactly `digits` fraction digits by its `Display` impl
///
/// Digits past the formatter's own limit are zero for every finite `f64` and
/// every `Decimal`, so they are appended by hand.
pub fn with_fraction_digits<T: std::fmt::Display>(value: T, digits: usize) -> String {
    let digits = digits.min(MAX_PRECISION);
    let shown = digits.min(MAX_FORMAT_PRECISION);
    let mut text = format!("{:.*}", shown, value);
    if digits > shown {
        text.push_str(&"0".repeat(digits - shown));
    }
    text
}

/// Left-pad a digit string with zeros to `width`
pub fn zero_pad(digits: &str, width: usize) -> String {
    let width = width.min(MAX_PRECISION);
    let mut out = "0".repeat(width.saturating_sub(digits.len()));
    out.push_str(digits);
    out
}

/// Round half away from zero at `digits` fraction digits
pub fn round_half_away(value: f64, digits: u32) -> f64 {
    if !value.is_finite() || digits > MAX_ROUND_DIGITS {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if scaled.abs() >= 9_007_199_254_740_992.0 {
        return value;
    }
    scaled.round() / factor
}

/// Drop everything past `digits` fraction digits
pub fn truncate_toward_zero(value: f64, digits: u32) -> f64 {
    if !value.is_finite() || digits > MAX_ROUND_DIGITS {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if scaled.abs() >= 9_007_199_254_740_992.0 {
        return value;
    }
    scaled.trunc() / factor
}

/// Widen an `f32` through its shortest decimal text so `0.1f32` becomes `0.1`
pub fn widen_f32(value: f32) -> f64 {
    value.to_string().parse::<f64>().unwrap_or(value as f64)
}

/// `value` with exactly `digits` fraction digits, rounded half away from zero
pub fn fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let digits = digits.min(MAX_PRECISION);
    let rounded = round_half_away(value, digits as u32);
    // avoid "-0.00"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    with_fraction_digits(rounded, digits)
}

/// Fixed rendering with thousands grouping
pub fn grouped(value: f64, digits: usize, group_separator: &str, decimal_separator: &str) -> String {
    let text = fixed(value.abs(), digits);
    let negative = value < 0.0 && text.chars().any(|c| c.is_ascii_digit() && c != '0');
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, group_separator));
    if let Some(frac) = frac_part {
        out.push_str(decimal_separator);
        out.push_str(frac);
    }
    out
}

/// Insert `separator` between every three digits of an unsigned integer string
pub fn group_digits(digits: &str, separator: &str) -> String {
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return digits.to_string();
    }
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// Add one to the last digit; `true` when the carry runs off the front
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

/// Scientific notation in the `1.23E+004` layout
///
/// The mantissa is rounded half away from zero on the shortest decimal
/// digits of `value`, so `1.25` at one digit is `1.3E+000`.
pub fn scientific(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let digits = digits.min(MAX_PRECISION);
    let shortest = format!("{:e}", value.abs());
    let (mantissa, exponent) = shortest.split_once('e').unwrap_or((shortest.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let mut significand: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let keep = digits + 1;
    if significand.len() > keep {
        let round_up = significand[keep] >= 5;
        significand.truncate(keep);
        if round_up && increment(&mut significand) {
            significand.insert(0, 1);
            significand.truncate(keep);
            exponent += 1;
        }
    }

    let negative = value < 0.0 && significand.iter().any(|&d| d != 0);
    let mut out = String::with_capacity(keep + 8);
    if negative {
        out.push('-');
    }
    out.push(char::from(b'0' + significand[0]));
    if digits > 0 {
        out.push('.');
        out.extend(significand[1..].iter().map(|&d| char::from(b'0' + d)));
        out.push_str(&"0".repeat(keep - significand.len()));
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    out.push_str(&format!("E{sign}{:03}", exponent.abs()));
    out
}

/// Currency rendering using the culture's symbol and separators
pub fn currency(value: f64, digits: usize, culture: &Culture) -> String {
    let body = grouped(
        value.abs(),
        digits,
        &culture.group_separator,
        &culture.decimal_separator,
    );
    let digits = digits.min(MAX_PRECISION);
    let negative = value < 0.0 && round_half_away(value, digits as u32) != 0.0;
    culture.place_symbol(&body, negative)
}

/// Percent rendering: `0.1234` at two digits is `12.34%`
pub fn percent(value: f64, digits: usize) -> String {
    format!("{}%", grouped(value * 100.0, digits, ",", "."))
}

/// Shorten large magnitudes with the culture's words (`1.23亿`, `12.35万`)
pub fn friendly(value: f64, digits: usize, culture: &Culture) -> String {
    for magnitude in &culture.magnitudes {
        if value.abs() >= magnitude.threshold {
            return format!(
                "{}{}",
                fixed(value / magnitude.threshold, digits),
                magnitude.suffix
            );
        }
    }
    fixed(value, digits)
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_half_away(2.5, 0), 3.0);
        assert_eq!(round_half_away(-2.5, 0), -3.0);
        assert_eq!(round_half_away(1.235, 1), 1.2);
        assert_eq!(round_half_away(0.125, 2), 0.13);
    }

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(truncate_toward_zero(3.789, 2), 3.78);
        assert_eq!(truncate_toward_zero(-3.789, 1), -3.7);
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(3.14159, 2), "3.14");
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(-0.001, 2), "0.00");
        assert_eq!(fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_widen_f32() {
        assert_eq!(widen_f32(0.1), 0.1);
        assert_eq!(widen_f32(123456.0), 123456.0);
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(1234567.891, 2, ",", "."), "1,234,567.89");
        assert_eq!(grouped(-1234.5, 1, ".", ","), "-1.234,5");
        assert_eq!(grouped(999.0, 0, ",", "."), "999");
    }

    #[test]
    fn test_scientific_layout() {
        assert_eq!(scientific(12345.0, 2), "1.23E+004");
        assert_eq!(scientific(0.00123, 3), "1.230E-003");
        assert_eq!(scientific(0.0, 2), "0.00E+000");
        assert_eq!(scientific(-5.0, 1), "-5.0E+000");
    }

    #[test]
    fn test_scientific_rounds_midpoints_away_from_zero() {
        assert_eq!(scientific(125.0, 1), "1.3E+002");
        assert_eq!(scientific(1.25, 1), "1.3E+000");
        assert_eq!(scientific(2.5, 0), "3E+000");
        assert_eq!(scientific(-0.125, 1), "-1.3E-001");
        assert_eq!(scientific(9.96, 1), "1.0E+001");
        assert_eq!(scientific(99999.0, 2), "1.00E+005");
    }

    #[test]
    fn test_large_precision_is_padded() {
        let text = fixed(1.5, 70_000);
        assert_eq!(text.len(), 2 + 70_000);
        assert!(text.starts_with("1.5000"));
        assert!(text[2..].chars().all(|c| c.is_ascii_digit()));

        let text = scientific(1.0, 70_000);
        assert!(text.starts_with("1.000"));
        assert!(text.ends_with("E+000"));
        assert_eq!(zero_pad("7", 70_000).len(), 70_000);
        assert_eq!(zero_pad("123", 2), "123");
    }

    #[test]
    fn test_currency_by_culture() {
        assert_eq!(currency(1234.5, 2, &Culture::zh_cn()), "¥1,234.50");
        assert_eq!(currency(-1234.5, 2, &Culture::en_us()), "-$1,234.50");
        let de = Culture::lookup("de-DE").unwrap();
        assert_eq!(currency(1234.56, 2, &de), "1.234,56\u{a0}€");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.1234, 2), "12.34%");
        assert_eq!(percent(0.5, 0), "50%");
    }

    #[test]
    fn test_friendly_magnitudes() {
        let zh = Culture::zh_cn();
        assert_eq!(friendly(123456789.0, 2, &zh), "1.23亿");
        assert_eq!(friendly(123456.0, 2, &zh), "12.35万");
        assert_eq!(friendly(123.0, 2, &zh), "123.00");
        assert_eq!(friendly(1_500_000.0, 1, &Culture::en_us()), "1.5M");
    }
}
