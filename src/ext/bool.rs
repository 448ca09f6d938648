use rust_decimal::Decimal;

/// Conversions and labels for `bool`
pub trait BoolExt: Sized {
    fn to_int(self) -> i32;
    fn to_byte(self) -> u8;
    fn to_short(self) -> i16;
    fn to_long(self) -> i64;
    fn to_float(self) -> f32;
    fn to_double(self) -> f64;
    fn to_decimal(self) -> Decimal;

    /// `"True"` / `"False"`
    fn to_title_string(self) -> &'static str;
    /// The title label of the negated value
    fn to_reverse_string(self) -> &'static str;
    /// `"是"` / `"否"`
    fn to_chinese_string(self) -> &'static str;
    fn to_reverse_chinese_string(self) -> &'static str;
    fn to_custom_string<'a>(self, when_true: &'a str, when_false: &'a str) -> &'a str;
    fn to_yes_no(self) -> &'static str;
    fn to_on_off(self) -> &'static str;
    fn to_one_zero(self) -> &'static str;
    fn to_yn(self) -> &'static str;

    /// True when both sides agree
    fn xnor(self, other: bool) -> bool;
    /// Select one of two values
    fn pick<T>(self, when_true: T, when_false: T) -> T;
    /// `None` when `nullable` is set, otherwise the value itself
    fn to_nullable(self, nullable: bool) -> Option<bool>;
}

impl BoolExt for bool {
    fn to_int(self) -> i32 {
        self as i32
    }

    fn to_byte(self) -> u8 {
        self as u8
    }

    fn to_short(self) -> i16 {
        self as i16
    }

    fn to_long(self) -> i64 {
        self as i64
    }

    fn to_float(self) -> f32 {
        self.pick(1.0, 0.0)
    }

    fn to_double(self) -> f64 {
        self.pick(1.0, 0.0)
    }

    fn to_decimal(self) -> Decimal {
        self.pick(Decimal::ONE, Decimal::ZERO)
    }

    fn to_title_string(self) -> &'static str {
        self.pick("True", "False")
    }

    fn to_reverse_string(self) -> &'static str {
        (!self).to_title_string()
    }

    fn to_chinese_string(self) -> &'static str {
        self.pick("是", "否")
    }

    fn to_reverse_chinese_string(self) -> &'static str {
        (!self).to_chinese_string()
    }

    fn to_custom_string<'a>(self, when_true: &'a str, when_false: &'a str) -> &'a str {
        self.pick(when_true, when_false)
    }

    fn to_yes_no(self) -> &'static str {
        self.pick("Yes", "No")
    }

    fn to_on_off(self) -> &'static str {
        self.pick("On", "Off")
    }

    fn to_one_zero(self) -> &'static str {
        self.pick("1", "0")
    }

    fn to_yn(self) -> &'static str {
        self.pick("Y", "N")
    }

    fn xnor(self, other: bool) -> bool {
        self == other
    }

    fn pick<T>(self, when_true: T, when_false: T) -> T {
        if self {
            when_true
        } else {
            when_false
        }
    }

    fn to_nullable(self, nullable: bool) -> Option<bool> {
        (!nullable).then_some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_conversions() {
        assert_eq!(true.to_int(), 1);
        assert_eq!(false.to_long(), 0);
        assert_eq!(true.to_byte(), 1u8);
        assert_eq!(true.to_double(), 1.0);
        assert_eq!(false.to_decimal(), Decimal::ZERO);
    }

    #[test]
    fn test_labels() {
        assert_eq!(true.to_title_string(), "True");
        assert_eq!(true.to_reverse_string(), "False");
        assert_eq!(false.to_chinese_string(), "否");
        assert_eq!(false.to_reverse_chinese_string(), "是");
        assert_eq!(true.to_yes_no(), "Yes");
        assert_eq!(false.to_on_off(), "Off");
        assert_eq!(true.to_one_zero(), "1");
        assert_eq!(false.to_yn(), "N");
        assert_eq!(true.to_custom_string("启用", "禁用"), "启用");
    }

    #[test]
    fn test_xnor_and_pick() {
        assert!(true.xnor(true));
        assert!(false.xnor(false));
        assert!(!true.xnor(false));
        assert_eq!(false.pick(Some(1), None), None);
    }

    #[test]
    fn test_to_nullable() {
        assert_eq!(true.to_nullable(false), Some(true));
        assert_eq!(true.to_nullable(true), None);
    }
}
