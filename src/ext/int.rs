use crate::ext::enums::EnumMeta;
use crate::format::{chinese, dotnet, number, Culture};

const ROMAN: [(i32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

pub(crate) const CHINESE_WEEKDAYS: [&str; 7] = [
    "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
];

pub(crate) const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Predicates, conversions and renderings for `i32`
pub trait IntExt: Sized + Copy {
    fn is_zero(self) -> bool;
    fn is_even(self) -> bool;
    fn is_odd(self) -> bool;
    /// Inclusive on both ends
    fn is_between(self, min: i32, max: i32) -> bool;
    fn to_bool(self) -> bool;

    /// Render with a standard numeric specifier using the default culture
    fn to_format_string(self, spec: Option<&str>) -> String;
    fn to_format_string_in(self, spec: Option<&str>, culture: &Culture) -> String;
    /// Currency without fraction digits
    fn to_currency_string(self, culture: &Culture) -> String;
    /// `12` becomes `"12%"`
    fn to_percent_string(self) -> String;
    /// `1001` becomes `"壹仟零壹元"`
    fn to_chinese_upper(self) -> String;

    /// Zero when `divisor` is zero
    fn divide_safe(self, divisor: i32) -> i32;
    fn modulo_safe(self, divisor: i32) -> i32;
    fn pow_f64(self, exponent: f64) -> f64;
    fn abs_diff_i32(self, other: i32) -> i64;

    fn to_hex_string(self) -> String;
    fn to_binary_string(self) -> String;
    fn to_octal_string(self) -> String;
    /// Roman numerals for 1..=3999, decimal text otherwise
    fn to_roman_string(self) -> String;
    /// 0 is Sunday; anything outside 0..=6 renders as decimal text
    fn to_chinese_weekday(self) -> String;
    fn to_english_weekday(self) -> String;

    fn to_enum<E: EnumMeta>(self) -> Option<E>;

    /// Run `action` `self` times; nothing happens for zero or negative counts
    fn times<F: FnMut()>(self, action: F);
    fn times_indexed<F: FnMut(i32)>(self, action: F);
}

impl IntExt for i32 {
    fn is_zero(self) -> bool {
        self == 0
    }

    fn is_even(self) -> bool {
        self % 2 == 0
    }

    fn is_odd(self) -> bool {
        self % 2 != 0
    }

    fn is_between(self, min: i32, max: i32) -> bool {
        min <= self && self <= max
    }

    fn to_bool(self) -> bool {
        self != 0
    }

    fn to_format_string(self, spec: Option<&str>) -> String {
        self.to_format_string_in(spec, &Culture::default())
    }

    fn to_format_string_in(self, spec: Option<&str>, culture: &Culture) -> String {
        dotnet::format_i32(self, spec, culture)
    }

    fn to_currency_string(self, culture: &Culture) -> String {
        number::currency(self as f64, 0, culture)
    }

    fn to_percent_string(self) -> String {
        format!("{self}%")
    }

    fn to_chinese_upper(self) -> String {
        chinese::integer_money(self as i64)
    }

    fn divide_safe(self, divisor: i32) -> i32 {
        self.checked_div(divisor).unwrap_or(0)
    }

    fn modulo_safe(self, divisor: i32) -> i32 {
        self.checked_rem(divisor).unwrap_or(0)
    }

    fn pow_f64(self, exponent: f64) -> f64 {
        (self as f64).powf(exponent)
    }

    fn abs_diff_i32(self, other: i32) -> i64 {
        (self as i64 - other as i64).abs()
    }

    fn to_hex_string(self) -> String {
        format!("{self:X}")
    }

    fn to_binary_string(self) -> String {
        format!("{self:b}")
    }

    fn to_octal_string(self) -> String {
        format!("{self:o}")
    }

    fn to_roman_string(self) -> String {
        if !self.is_between(1, 3999) {
            return self.to_string();
        }
        let mut remaining = self;
        let mut out = String::new();
        for (value, symbol) in ROMAN {
            while remaining >= value {
                out.push_str(symbol);
                remaining -= value;
            }
        }
        out
    }

    fn to_chinese_weekday(self) -> String {
        usize::try_from(self)
            .ok()
            .and_then(|i| CHINESE_WEEKDAYS.get(i))
            .map(|s| s.to_string())
            .unwrap_or_else(|| self.to_string())
    }

    fn to_english_weekday(self) -> String {
        usize::try_from(self)
            .ok()
            .and_then(|i| ENGLISH_WEEKDAYS.get(i))
            .map(|s| s.to_string())
            .unwrap_or_else(|| self.to_string())
    }

    fn to_enum<E: EnumMeta>(self) -> Option<E> {
        E::from_discriminant(self as i64)
    }

    fn times<F: FnMut()>(self, mut action: F) {
        for _ in 0..self.max(0) {
            action();
        }
    }

    fn times_indexed<F: FnMut(i32)>(self, action: F) {
        (0..self.max(0)).for_each(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe_enum;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level {
        Low = 1,
        High = 2,
    }

    describe_enum!(Level {
        Low => "低",
        High => "高",
    });

    #[test]
    fn test_predicates() {
        assert!(0i32.is_zero());
        assert!(4i32.is_even());
        assert!((-3i32).is_odd());
        assert!(5i32.is_between(1, 5));
        assert!(!6i32.is_between(1, 5));
        assert!((-1i32).to_bool());
    }

    #[test]
    fn test_format_strings() {
        assert_eq!(5i32.to_format_string(Some("D4")), "0005");
        assert_eq!(255i32.to_format_string(Some("X")), "FF");
        assert_eq!(7i32.to_format_string(None), "7");
        assert_eq!(1234i32.to_currency_string(&Culture::en_us()), "$1,234");
        assert_eq!(12i32.to_percent_string(), "12%");
    }

    #[test]
    fn test_chinese_upper() {
        assert_eq!(0i32.to_chinese_upper(), "零元");
        assert_eq!(1i32.to_chinese_upper(), "壹元");
        assert_eq!(10i32.to_chinese_upper(), "壹拾元");
        assert_eq!(1001i32.to_chinese_upper(), "壹仟零壹元");
    }

    #[test]
    fn test_safe_arithmetic() {
        assert_eq!(10i32.divide_safe(0), 0);
        assert_eq!(10i32.divide_safe(3), 3);
        assert_eq!(i32::MIN.divide_safe(-1), 0);
        assert_eq!(10i32.modulo_safe(0), 0);
        assert_eq!(10i32.modulo_safe(4), 2);
        assert_eq!(2i32.pow_f64(10.0), 1024.0);
        assert_eq!(i32::MIN.abs_diff_i32(i32::MAX), 4_294_967_295);
    }

    #[test]
    fn test_radix_strings() {
        assert_eq!(255i32.to_hex_string(), "FF");
        assert_eq!(5i32.to_binary_string(), "101");
        assert_eq!(8i32.to_octal_string(), "10");
        assert_eq!((-1i32).to_hex_string(), "FFFFFFFF");
        assert_eq!((-8i32).to_octal_string(), "37777777770");
    }

    #[test]
    fn test_roman() {
        assert_eq!(1i32.to_roman_string(), "I");
        assert_eq!(1994i32.to_roman_string(), "MCMXCIV");
        assert_eq!(3999i32.to_roman_string(), "MMMCMXCIX");
        assert_eq!(0i32.to_roman_string(), "0");
        assert_eq!(4000i32.to_roman_string(), "4000");
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(0i32.to_chinese_weekday(), "星期日");
        assert_eq!(6i32.to_english_weekday(), "Saturday");
        assert_eq!(7i32.to_chinese_weekday(), "7");
        assert_eq!((-1i32).to_english_weekday(), "-1");
    }

    #[test]
    fn test_to_enum() {
        assert_eq!(2i32.to_enum::<Level>(), Some(Level::High));
        assert_eq!(9i32.to_enum::<Level>(), None);
    }

    #[test]
    fn test_times() {
        let mut count = 0;
        3i32.times(|| count += 1);
        assert_eq!(count, 3);

        let mut seen = Vec::new();
        3i32.times_indexed(|i| seen.push(i));
        assert_eq!(seen, vec![0, 1, 2]);

        (-2i32).times(|| panic!("must not run"));
    }
}
