use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::format::{number, Culture};

/// Predicates, rounding and renderings for `f32` and `f64`
///
/// Rounding is half away from zero. `f32` values are widened through their
/// shortest decimal text first, so `0.1f32` behaves like `0.1`.
pub trait FloatExt: Sized + Copy {
    fn is_zero(self) -> bool;
    fn is_positive(self) -> bool;
    fn is_negative(self) -> bool;
    fn is_integral(self) -> bool;
    fn is_even(self) -> bool;
    fn is_odd(self) -> bool;

    fn round_to(self, digits: u32) -> Self;
    fn truncate_to(self, digits: u32) -> Self;

    fn to_fixed_string(self, digits: usize) -> String;
    fn to_currency_string(self, culture: &Culture) -> String;
    /// `0.1234` at two digits becomes `"12.34%"`
    fn to_percent_string(self, digits: usize) -> String;
    /// `12345.0` at two digits becomes `"1.23E+004"`
    fn to_scientific_string(self, digits: usize) -> String;
    /// `123456789.0` becomes `"1.23亿"` in the default culture
    fn to_friendly_string(self, digits: usize) -> String;
    fn to_friendly_string_in(self, digits: usize, culture: &Culture) -> String;

    fn is_between(self, min: Self, max: Self) -> bool;
    fn clamp_to(self, min: Self, max: Self) -> Self;
    fn to_i32_rounded(self) -> i32;
    fn to_i64_rounded(self) -> i64;
    /// Zero when the value is not representable
    fn to_decimal(self) -> Decimal;
    fn to_bool(self) -> bool;

    fn divide_safe(self, divisor: Self) -> Self;
    fn modulo_safe(self, divisor: Self) -> Self;
    fn abs_diff(self, other: Self) -> Self;

    /// Renderings of the value truncated to an integer
    fn to_hex_string(self) -> String;
    fn to_binary_string(self) -> String;
    fn to_octal_string(self) -> String;
}

macro_rules! impl_float_ext {
    ($ty:ty, $widen:expr) => {
        impl FloatExt for $ty {
            fn is_zero(self) -> bool {
                self == 0.0
            }

            fn is_positive(self) -> bool {
                self > 0.0
            }

            fn is_negative(self) -> bool {
                self < 0.0
            }

            fn is_integral(self) -> bool {
                self.is_finite() && self.fract() == 0.0
            }

            fn is_even(self) -> bool {
                self.is_integral() && self % 2.0 == 0.0
            }

            fn is_odd(self) -> bool {
                self.is_integral() && self % 2.0 != 0.0
            }

            fn round_to(self, digits: u32) -> Self {
                number::round_half_away($widen(self), digits) as $ty
            }

            fn truncate_to(self, digits: u32) -> Self {
                number::truncate_toward_zero($widen(self), digits) as $ty
            }

            fn to_fixed_string(self, digits: usize) -> String {
                number::fixed($widen(self), digits)
            }

            fn to_currency_string(self, culture: &Culture) -> String {
                number::currency($widen(self), culture.currency_decimals, culture)
            }

            fn to_percent_string(self, digits: usize) -> String {
                number::percent($widen(self), digits)
            }

            fn to_scientific_string(self, digits: usize) -> String {
                number::scientific($widen(self), digits)
            }

            fn to_friendly_string(self, digits: usize) -> String {
                self.to_friendly_string_in(digits, &Culture::default())
            }

            fn to_friendly_string_in(self, digits: usize, culture: &Culture) -> String {
                number::friendly($widen(self), digits, culture)
            }

            fn is_between(self, min: Self, max: Self) -> bool {
                min <= self && self <= max
            }

            fn clamp_to(self, min: Self, max: Self) -> Self {
                if self < min {
                    min
                } else if self > max {
                    max
                } else {
                    self
                }
            }

            fn to_i32_rounded(self) -> i32 {
                number::round_half_away($widen(self), 0) as i32
            }

            fn to_i64_rounded(self) -> i64 {
                number::round_half_away($widen(self), 0) as i64
            }

            fn to_decimal(self) -> Decimal {
                let wide = $widen(self);
                Decimal::from_str(&wide.to_string())
                    .ok()
                    .or_else(|| Decimal::from_f64(wide))
                    .unwrap_or_default()
            }

            fn to_bool(self) -> bool {
                self != 0.0
            }

            fn divide_safe(self, divisor: Self) -> Self {
                if divisor == 0.0 {
                    0.0
                } else {
                    self / divisor
                }
            }

            fn modulo_safe(self, divisor: Self) -> Self {
                if divisor == 0.0 {
                    0.0
                } else {
                    self % divisor
                }
            }

            fn abs_diff(self, other: Self) -> Self {
                (self - other).abs()
            }

            fn to_hex_string(self) -> String {
                format!("{:X}", self.trunc() as i64)
            }

            fn to_binary_string(self) -> String {
                format!("{:b}", self.trunc() as i64)
            }

            fn to_octal_string(self) -> String {
                format!("{:o}", self.trunc() as i64)
            }
        }
    };
}

impl_float_ext!(f64, std::convert::identity);
impl_float_ext!(f32, number::widen_f32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(0.0f64.is_zero());
        assert!(2.0f64.is_even());
        assert!(3.0f32.is_odd());
        assert!(!2.5f64.is_even());
        assert!(!2.5f64.is_odd());
        assert!(4.0f64.is_integral());
        assert!(!f64::NAN.is_integral());
        assert!((-1.0f64).is_negative());
        assert!(1.5f64.is_between(1.0, 2.0));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(2.5f64.round_to(0), 3.0);
        assert_eq!((-2.5f64).round_to(0), -3.0);
        assert_eq!(3.14159f64.round_to(2), 3.14);
        assert_eq!(3.789f64.truncate_to(1), 3.7);
        assert_eq!(2.5f64.to_i32_rounded(), 3);
        assert_eq!((-2.5f64).to_i64_rounded(), -3);
        assert_eq!(1e20f64.to_i32_rounded(), i32::MAX);
    }

    #[test]
    fn test_f32_widening() {
        assert_eq!(0.1f32.to_decimal().to_string(), "0.1");
        assert_eq!(0.125f32.to_fixed_string(2), "0.13");
        assert_eq!(123456.0f32.to_friendly_string(1), "12.3万");
    }

    #[test]
    fn test_renderings() {
        assert_eq!(12345.0f64.to_scientific_string(2), "1.23E+004");
        assert_eq!(0.1234f64.to_percent_string(2), "12.34%");
        assert_eq!(1234.5f64.to_currency_string(&Culture::zh_cn()), "¥1,234.50");
        assert_eq!(123456789.0f64.to_friendly_string(2), "1.23亿");
        assert_eq!(123.0f64.to_friendly_string(2), "123.00");
    }

    #[test]
    fn test_scientific_midpoints() {
        assert_eq!(1.25f64.to_scientific_string(1), "1.3E+000");
        assert_eq!(2.5f64.to_scientific_string(0), "3E+000");
        assert_eq!((-0.125f64).to_scientific_string(1), "-1.3E-001");
    }

    #[test]
    fn test_fixed_string_with_huge_precision() {
        let text = 1.5f64.to_fixed_string(70_000);
        assert_eq!(text.len(), 70_002);
        assert!(text.starts_with("1.50"));
        assert!(1.5f32.to_percent_string(70_000).ends_with("0%"));
    }

    #[test]
    fn test_safe_arithmetic() {
        assert_eq!(10.0f64.divide_safe(0.0), 0.0);
        assert_eq!(10.0f64.divide_safe(4.0), 2.5);
        assert_eq!(10.0f64.modulo_safe(0.0), 0.0);
        assert_eq!(3.0f64.abs_diff(5.5), 2.5);
        assert_eq!(15.0f64.clamp_to(0.0, 10.0), 10.0);
    }

    #[test]
    fn test_radix_of_truncated_value() {
        assert_eq!(255.9f64.to_hex_string(), "FF");
        assert_eq!(5.2f32.to_binary_string(), "101");
        assert_eq!(8.0f64.to_octal_string(), "10");
    }

    #[test]
    fn test_to_bool_and_decimal() {
        assert!(0.5f64.to_bool());
        assert!(!0.0f32.to_bool());
        assert_eq!(f64::NAN.to_decimal(), Decimal::ZERO);
    }
}
