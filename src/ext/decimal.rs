use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::format::{chinese, number, Culture};

/// Largest amount the Chinese currency formatter accepts
const CHINESE_UPPER_MAX: Decimal = Decimal::from_parts(1_569_325_055, 23_283_064, 0, false, 2);

/// Rounding, renderings and safe arithmetic for [`Decimal`]
///
/// `Decimal::is_zero` is inherent and not repeated here.
pub trait DecimalExt: Sized + Copy {
    fn is_positive(self) -> bool;
    fn is_negative(self) -> bool;
    fn is_integral(self) -> bool;
    fn is_even(self) -> bool;
    fn is_odd(self) -> bool;

    /// Half away from zero
    fn round_to(self, digits: u32) -> Self;
    /// Toward zero
    fn truncate_to(self, digits: u32) -> Self;

    fn to_fixed_string(self, digits: usize) -> String;
    fn to_currency_string(self, culture: &Culture) -> String;
    fn to_percent_string(self, digits: usize) -> String;
    fn to_scientific_string(self, digits: usize) -> String;
    fn to_friendly_string(self, digits: usize) -> String;
    fn to_friendly_string_in(self, digits: usize, culture: &Culture) -> String;
    /// `123.45` becomes `"壹佰贰拾叁元肆角伍分"`
    fn to_chinese_upper(self) -> String;

    fn is_between(self, min: Self, max: Self) -> bool;
    fn clamp_to(self, min: Self, max: Self) -> Self;
    fn to_i32_rounded(self) -> i32;
    fn to_i64_rounded(self) -> i64;
    fn to_f64_lossy(self) -> f64;
    fn to_bool(self) -> bool;

    fn divide_safe(self, divisor: Self) -> Self;
    fn modulo_safe(self, divisor: Self) -> Self;
    fn abs_diff(self, other: Self) -> Self;
    /// Zero on overflow
    fn pow_i(self, exponent: i64) -> Self;
    /// Zero for negative input
    fn sqrt_lossy(self) -> Self;
}

impl DecimalExt for Decimal {
    fn is_positive(self) -> bool {
        self > Decimal::ZERO
    }

    fn is_negative(self) -> bool {
        self < Decimal::ZERO
    }

    fn is_integral(self) -> bool {
        self.fract().is_zero()
    }

    fn is_even(self) -> bool {
        self.is_integral() && (self % Decimal::TWO).is_zero()
    }

    fn is_odd(self) -> bool {
        self.is_integral() && !(self % Decimal::TWO).is_zero()
    }

    fn round_to(self, digits: u32) -> Self {
        self.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
    }

    fn truncate_to(self, digits: u32) -> Self {
        self.round_dp_with_strategy(digits, RoundingStrategy::ToZero)
    }

    fn to_fixed_string(self, digits: usize) -> String {
        let digits = digits.min(number::MAX_PRECISION);
        let rounded = self.round_to(digits as u32);
        let rounded = if rounded.is_zero() {
            Decimal::ZERO
        } else {
            rounded
        };
        number::with_fraction_digits(rounded, digits)
    }

    fn to_currency_string(self, culture: &Culture) -> String {
        let digits = culture.currency_decimals;
        let text = self.abs().to_fixed_string(digits);
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text.as_str(), None),
        };
        let mut body = number::group_digits(int_part, &culture.group_separator);
        if let Some(frac) = frac_part {
            body.push_str(&culture.decimal_separator);
            body.push_str(frac);
        }
        let negative = self.is_sign_negative()
            && !self
                .round_to(digits.min(number::MAX_PRECISION) as u32)
                .is_zero();
        culture.place_symbol(&body, negative)
    }

    fn to_percent_string(self, digits: usize) -> String {
        format!("{}%", (self * Decimal::ONE_HUNDRED).to_fixed_string(digits))
    }

    fn to_scientific_string(self, digits: usize) -> String {
        number::scientific(self.to_f64_lossy(), digits)
    }

    fn to_friendly_string(self, digits: usize) -> String {
        self.to_friendly_string_in(digits, &Culture::default())
    }

    fn to_friendly_string_in(self, digits: usize, culture: &Culture) -> String {
        number::friendly(self.to_f64_lossy(), digits, culture)
    }

    fn to_chinese_upper(self) -> String {
        let amount = self.abs();
        if amount > CHINESE_UPPER_MAX {
            return chinese::OUT_OF_RANGE.to_string();
        }
        let whole = amount.trunc();
        let integer = whole.to_u64().unwrap_or(0);
        let cents = ((amount - whole) * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u32()
            .unwrap_or(0);
        let negative = self.is_sign_negative() && !(integer == 0 && cents == 0);
        chinese::money(integer, cents, negative)
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
        let rounded = self.round_to(0);
        rounded.to_i32().unwrap_or(if rounded.is_sign_negative() {
            i32::MIN
        } else {
            i32::MAX
        })
    }

    fn to_i64_rounded(self) -> i64 {
        let rounded = self.round_to(0);
        rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }

    fn to_bool(self) -> bool {
        !self.is_zero()
    }

    fn divide_safe(self, divisor: Self) -> Self {
        self.checked_div(divisor).unwrap_or(Decimal::ZERO)
    }

    fn modulo_safe(self, divisor: Self) -> Self {
        self.checked_rem(divisor).unwrap_or(Decimal::ZERO)
    }

    fn abs_diff(self, other: Self) -> Self {
        self.checked_sub(other)
            .map(|d| d.abs())
            .unwrap_or(Decimal::MAX)
    }

    fn pow_i(self, exponent: i64) -> Self {
        self.checked_powi(exponent).unwrap_or(Decimal::ZERO)
    }

    fn sqrt_lossy(self) -> Self {
        self.sqrt().unwrap_or(Decimal::ZERO)
    }
}
