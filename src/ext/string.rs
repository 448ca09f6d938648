//! Predicates, validators and fail-soft conversions for string slices

use std::str::FromStr;

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ext::datetime::{min_value, parse_datetime};
use crate::format::number;
use crate::pinyin;

/// Values treated as "no value" by [`StrExt::is_null_marker`]
pub const DEFAULT_NULL_MARKERS: &str = "null|{}|[]";

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        static $name: Lazy<Regex> =
            Lazy::new(|| Regex::new($pattern).expect("Invalid regex pattern"));
    };
}

static_regex!(CHINESE_ONLY, r"^[\x{4e00}-\x{9fa5}？，“”‘’。、；：]+$");
static_regex!(HAS_CHINESE, r"[\x{4e00}-\x{9fa5}]");
static_regex!(LETTERS, r"^[a-zA-Z]+$");
static_regex!(DIGITS, r"^\d+$");
static_regex!(NON_DIGITS, r"[^0-9]+");
static_regex!(FLOAT, r"^\d*[.]?\d*$");
static_regex!(EMAIL, r"\w+([-+.']\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*");
static_regex!(
    TELEPHONE,
    r"^[0-9]{3,4}-[0-9]{3,8}-[0-9]{1,4}$|^[0-9]{3,4}-[0-9]{3,8}$|^[0-9]{3,8}$|^\([0-9]{3,4}\)[0-9]{3,8}$"
);
static_regex!(MOBILE, r"^1[34578]\d{9}$");
static_regex!(URL, r"https?://([\w-]+\.)+[\w-]+(/[\w\- ./?%&=]*)?");
static_regex!(DATE, r"^(\d{2}|\d{4})-\d{1,2}-\d{1,2}$|^(\d{2}|\d{4})/\d{1,2}/\d{1,2}$");
static_regex!(TIME, r"^\d{1,2}:\d{1,2}:\d{1,2}$");
static_regex!(
    DATE_TIME,
    r"^(\d{2}|\d{4})-\d{1,2}-\d{1,2}\s\d{1,2}:\d{1,2}:\d{1,2}$|^(\d{2}|\d{4})/\d{1,2}/\d{1,2}\s\d{1,2}:\d{1,2}:\d{1,2}$"
);

/// Trim and drop thousands separators before a numeric parse
fn numeric_text(value: &str) -> String {
    value.trim().replace(',', "")
}

fn parse_f64(value: &str) -> Option<f64> {
    let text = numeric_text(value);
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}

fn parse_f32(value: &str) -> Option<f32> {
    let text = numeric_text(value);
    if text.is_empty() {
        return None;
    }
    text.parse::<f32>().ok()
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    let text = numeric_text(value);
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

pub trait StrExt {
    fn is_numeric(&self) -> bool;
    fn is_int(&self) -> bool;
    fn is_float(&self) -> bool;
    fn is_decimal(&self) -> bool;
    fn is_guid(&self) -> bool;
    fn equals_ignore_case(&self, other: &str) -> bool;
    /// Only CJK ideographs and full-width punctuation
    fn is_chinese(&self) -> bool;
    fn has_chinese(&self) -> bool;
    /// Empty, or one of the `|`-separated `markers` ignoring case
    fn is_null_marker(&self, markers: &str, trim: bool) -> bool;

    fn is_letters(&self) -> bool;
    fn is_digits(&self) -> bool;
    /// Keep only ASCII digits
    fn extract_digits(&self) -> String;
    fn is_float_text(&self) -> bool;
    fn is_email(&self) -> bool;
    fn is_telephone(&self) -> bool;
    fn is_mobile(&self) -> bool;
    fn is_url(&self) -> bool;
    fn is_date_text(&self) -> bool;
    fn is_time_text(&self) -> bool;
    fn is_date_time_text(&self) -> bool;

    fn to_int_or(&self, fallback: i32) -> i32;
    fn to_f32_or(&self, fallback: f32) -> f32;
    fn to_f64_or(&self, fallback: f64) -> f64;
    fn to_f64_round(&self, digits: u32, fallback: f64) -> f64;
    fn to_f64_truncate(&self, digits: u32, fallback: f64) -> f64;
    fn to_f32_round(&self, digits: u32, fallback: f32) -> f32;
    fn to_f32_truncate(&self, digits: u32, fallback: f32) -> f32;
    /// Numeric text re-rendered with `digits` fraction digits, anything else unchanged
    fn keep_decimal(&self, digits: usize) -> String;
    fn to_decimal_or(&self, fallback: Decimal) -> Decimal;
    fn to_bool_or(&self, fallback: bool) -> bool;
    /// Nil UUID when the text does not parse
    fn to_uuid(&self) -> Uuid;
    fn to_datetime_or(&self, fallback: NaiveDateTime) -> NaiveDateTime;
    /// The date-time minimum when the text does not parse
    fn to_datetime(&self) -> NaiveDateTime;

    fn remove_whitespace(&self) -> String;
    /// Character-based; out-of-range requests give an empty string or a shorter tail
    fn substring_safe(&self, start: usize, length: usize) -> String;
    fn left(&self, length: usize) -> String;
    fn right(&self, length: usize) -> String;
    fn reverse_chars(&self) -> String;
    /// Keep letters, digits and whitespace
    fn remove_special_chars(&self) -> String;
    fn to_camel_case(&self) -> String;
    fn to_pascal_case(&self) -> String;
    fn repeat_safe(&self, count: i32) -> String;
    fn replace_ignore_case(&self, from: &str, to: &str) -> String;
    /// Lower-case hex MD5 of the UTF-8 bytes, empty for empty input
    fn to_md5(&self) -> String;
    fn contains_ignore_case(&self, needle: &str) -> bool;
    /// Split on any of `separators`, dropping empty pieces
    fn split_safe(&self, separators: &[char]) -> Vec<String>;
    fn to_pinyin(&self) -> String;
}

impl StrExt for str {
    fn is_numeric(&self) -> bool {
        parse_f64(self).is_some()
    }

    fn is_int(&self) -> bool {
        self.trim().parse::<i32>().is_ok()
    }

    fn is_float(&self) -> bool {
        parse_f32(self).is_some()
    }

    fn is_decimal(&self) -> bool {
        parse_decimal(self).is_some()
    }

    fn is_guid(&self) -> bool {
        Uuid::parse_str(self.trim()).is_ok()
    }

    fn equals_ignore_case(&self, other: &str) -> bool {
        self.to_lowercase() == other.to_lowercase()
    }

    fn is_chinese(&self) -> bool {
        CHINESE_ONLY.is_match(self)
    }

    fn has_chinese(&self) -> bool {
        HAS_CHINESE.is_match(self)
    }

    fn is_null_marker(&self, markers: &str, trim: bool) -> bool {
        let value = if trim { self.trim() } else { self };
        if value.is_empty() {
            return true;
        }
        if markers.trim().is_empty() {
            return false;
        }
        let lowered = value.to_lowercase();
        markers.split('|').any(|marker| marker == lowered)
    }

    fn is_letters(&self) -> bool {
        LETTERS.is_match(self)
    }

    fn is_digits(&self) -> bool {
        DIGITS.is_match(self)
    }

    fn extract_digits(&self) -> String {
        NON_DIGITS.replace_all(self, "").into_owned()
    }

    fn is_float_text(&self) -> bool {
        FLOAT.is_match(self)
    }

    fn is_email(&self) -> bool {
        EMAIL.is_match(self)
    }

    fn is_telephone(&self) -> bool {
        TELEPHONE.is_match(self)
    }

    fn is_mobile(&self) -> bool {
        MOBILE.is_match(self)
    }

    fn is_url(&self) -> bool {
        URL.is_match(self)
    }

    fn is_date_text(&self) -> bool {
        DATE.is_match(self)
    }

    fn is_time_text(&self) -> bool {
        TIME.is_match(self)
    }

    fn is_date_time_text(&self) -> bool {
        DATE_TIME.is_match(self)
    }

    fn to_int_or(&self, fallback: i32) -> i32 {
        self.trim().parse().unwrap_or(fallback)
    }

    fn to_f32_or(&self, fallback: f32) -> f32 {
        parse_f32(self).unwrap_or(fallback)
    }

    fn to_f64_or(&self, fallback: f64) -> f64 {
        parse_f64(self).unwrap_or(fallback)
    }

    fn to_f64_round(&self, digits: u32, fallback: f64) -> f64 {
        parse_f64(self)
            .map(|v| number::round_half_away(v, digits))
            .unwrap_or(fallback)
    }

    fn to_f64_truncate(&self, digits: u32, fallback: f64) -> f64 {
        parse_f64(self)
            .map(|v| number::truncate_toward_zero(v, digits))
            .unwrap_or(fallback)
    }

    fn to_f32_round(&self, digits: u32, fallback: f32) -> f32 {
        parse_f32(self)
            .map(|v| number::round_half_away(number::widen_f32(v), digits) as f32)
            .unwrap_or(fallback)
    }

    fn to_f32_truncate(&self, digits: u32, fallback: f32) -> f32 {
        parse_f32(self)
            .map(|v| number::truncate_toward_zero(number::widen_f32(v), digits) as f32)
            .unwrap_or(fallback)
    }

    fn keep_decimal(&self, digits: usize) -> String {
        match parse_f64(self) {
            Some(v) => number::fixed(v, digits),
            None => self.to_string(),
        }
    }

    fn to_decimal_or(&self, fallback: Decimal) -> Decimal {
        parse_decimal(self).unwrap_or(fallback)
    }

    fn to_bool_or(&self, fallback: bool) -> bool {
        let text = self.trim();
        if text.eq_ignore_ascii_case("true") {
            true
        } else if text.eq_ignore_ascii_case("false") {
            false
        } else {
            fallback
        }
    }

    fn to_uuid(&self) -> Uuid {
        Uuid::parse_str(self.trim()).unwrap_or(Uuid::nil())
    }

    fn to_datetime_or(&self, fallback: NaiveDateTime) -> NaiveDateTime {
        parse_datetime(self).unwrap_or(fallback)
    }

    fn to_datetime(&self) -> NaiveDateTime {
        self.to_datetime_or(min_value())
    }

    fn remove_whitespace(&self) -> String {
        self.chars().filter(|c| !c.is_whitespace()).collect()
    }

    fn substring_safe(&self, start: usize, length: usize) -> String {
        if length == 0 {
            return String::new();
        }
        self.chars().skip(start).take(length).collect()
    }

    fn left(&self, length: usize) -> String {
        self.chars().take(length).collect()
    }

    fn right(&self, length: usize) -> String {
        let count = self.chars().count();
        self.chars().skip(count.saturating_sub(length)).collect()
    }

    fn reverse_chars(&self) -> String {
        self.chars().rev().collect()
    }

    fn remove_special_chars(&self) -> String {
        self.chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect()
    }

    fn to_camel_case(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn to_pascal_case(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn repeat_safe(&self, count: i32) -> String {
        if count <= 0 {
            return String::new();
        }
        self.repeat(count as usize)
    }

    fn replace_ignore_case(&self, from: &str, to: &str) -> String {
        if self.is_empty() || from.is_empty() {
            return self.to_string();
        }
        match Regex::new(&format!("(?i){}", regex::escape(from))) {
            Ok(re) => re.replace_all(self, regex::NoExpand(to)).into_owned(),
            Err(e) => {
                tracing::debug!("Case-insensitive replace fell back to original: {}", e);
                self.to_string()
            }
        }
    }

    fn to_md5(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("{:x}", md5::compute(self.as_bytes()))
    }

    fn contains_ignore_case(&self, needle: &str) -> bool {
        if self.is_empty() || needle.is_empty() {
            return false;
        }
        self.to_lowercase().contains(&needle.to_lowercase())
    }

    fn split_safe(&self, separators: &[char]) -> Vec<String> {
        self.split(separators)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn to_pinyin(&self) -> String {
        pinyin::to_pinyin(self)
    }
}

/// Null-safe helpers for optional strings
pub trait OptionStrExt {
    fn is_null_or_empty(&self) -> bool;
    fn is_null_or_whitespace(&self) -> bool;
    /// Trimmed text, empty for `None`
    fn trim_safe(&self) -> String;
    /// `None`, empty, or one of the default null markers
    fn is_null_value(&self) -> bool;
}

impl OptionStrExt for Option<&str> {
    fn is_null_or_empty(&self) -> bool {
        self.map_or(true, str::is_empty)
    }

    fn is_null_or_whitespace(&self) -> bool {
        self.map_or(true, |s| s.trim().is_empty())
    }

    fn trim_safe(&self) -> String {
        self.map(|s| s.trim().to_string()).unwrap_or_default()
    }

    fn is_null_value(&self) -> bool {
        self.map_or(true, |s| s.is_null_marker(DEFAULT_NULL_MARKERS, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_numeric_predicates() {
        assert!("123".is_numeric());
        assert!("12.3".is_numeric());
        assert!(!"abc".is_numeric());
        assert!(!"".is_numeric());

        assert!("-123".is_int());
        assert!(!"12.3".is_int());
        assert!("12.3".is_float());
        assert!("123".is_decimal());
        assert!(!"abc".is_decimal());
    }

    #[test]
    fn test_guid_and_case() {
        assert!("d3e1c2b2-4f2e-4c2a-9e2e-1e2e1e2e1e2e".is_guid());
        assert!(!"not-guid".is_guid());
        assert!("abc".equals_ignore_case("ABC"));
        assert!(!"abc".equals_ignore_case("def"));
    }

    #[test]
    fn test_chinese_detection() {
        assert!("你好".is_chinese());
        assert!("你好，世界。".is_chinese());
        assert!(!"abc".is_chinese());
        assert!("hello你好".has_chinese());
        assert!(!"hello".has_chinese());
    }

    #[test]
    fn test_null_markers() {
        assert!("".is_null_marker(DEFAULT_NULL_MARKERS, false));
        assert!("null".is_null_marker(DEFAULT_NULL_MARKERS, false));
        assert!("NULL".is_null_marker(DEFAULT_NULL_MARKERS, false));
        assert!("{}".is_null_marker(DEFAULT_NULL_MARKERS, false));
        assert!("[]".is_null_marker(DEFAULT_NULL_MARKERS, false));
        assert!(!" null ".is_null_marker(DEFAULT_NULL_MARKERS, false));
        assert!(" null ".is_null_marker(DEFAULT_NULL_MARKERS, true));
        assert!(!"abc".is_null_marker(DEFAULT_NULL_MARKERS, false));
        assert!(!"null".is_null_marker("", false));
    }

    #[test]
    fn test_regex_validators() {
        assert!("abc".is_letters());
        assert!(!"123".is_letters());
        assert!("123".is_digits());
        assert_eq!("abc123def".extract_digits(), "123");
        assert_eq!("no numbers".extract_digits(), "");
        assert!("12.3".is_float_text());
        assert!(!"abc".is_float_text());
        assert!("test@abc.com".is_email());
        assert!(!"not-an-email".is_email());
        assert!("010-12345678".is_telephone());
        assert!("12345678".is_telephone());
        assert!(!"not-tel".is_telephone());
        assert!("13812345678".is_mobile());
        assert!(!"23812345678".is_mobile());
        assert!("http://abc.com".is_url());
        assert!(!"not-url".is_url());
    }

    #[test]
    fn test_date_validators() {
        assert!("2024-09-30".is_date_text());
        assert!("2024/09/30".is_date_text());
        assert!(!"2024-09/30".is_date_text());
        assert!(!"not-date".is_date_text());
        assert!("12:34:56".is_time_text());
        assert!(!"not-time".is_time_text());
        assert!("2024-09-30 12:34:56".is_date_time_text());
        assert!(!"not-datetime".is_date_time_text());
    }

    #[test]
    fn test_numeric_conversions() {
        assert_eq!("123".to_int_or(0), 123);
        assert_eq!("abc".to_int_or(0), 0);
        assert_eq!("12.3".to_f32_or(0.0), 12.3f32);
        assert_eq!("12.3".to_f64_or(0.0), 12.3);
        assert_eq!("12.3456".to_f64_round(2, 0.0), 12.35);
        assert_eq!("abc".to_f64_round(2, 0.0), 0.0);
        assert_eq!("12.3456".to_f64_truncate(2, 0.0), 12.34);
        assert_eq!("12.3456".to_f32_round(2, 0.0), 12.35f32);
        assert_eq!("12.3456".to_f32_truncate(2, 0.0), 12.34f32);
        assert_eq!("12.3456".keep_decimal(2), "12.35");
        assert_eq!("abc".keep_decimal(2), "abc");
        assert_eq!("12.3".to_decimal_or(Decimal::ZERO), Decimal::new(123, 1));
        assert_eq!("abc".to_decimal_or(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_bool_uuid_datetime_conversions() {
        assert!("true".to_bool_or(false));
        assert!("TRUE".to_bool_or(false));
        assert!(!"false".to_bool_or(true));
        assert!(!"abc".to_bool_or(false));

        let id = Uuid::new_v4();
        assert_eq!(id.to_string().to_uuid(), id);
        assert_eq!("not-guid".to_uuid(), Uuid::nil());

        let parsed = "2024-09-30".to_datetime();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 9, 30).unwrap());
        assert_eq!("not-date".to_datetime().year(), 1);
    }

    #[test]
    fn test_slicing() {
        assert_eq!(" a b c ".remove_whitespace(), "abc");
        assert_eq!("abcdef".substring_safe(2, 3), "cde");
        assert_eq!("abc".substring_safe(10, 2), "");
        assert_eq!("abcdef".substring_safe(4, 10), "ef");
        assert_eq!("abcdef".left(3), "abc");
        assert_eq!("ab".left(5), "ab");
        assert_eq!("abcdef".right(3), "def");
        assert_eq!("ab".right(5), "ab");
        assert_eq!("你好世界".left(2), "你好");
        assert_eq!("abc".reverse_chars(), "cba");
    }

    #[test]
    fn test_transformations() {
        assert_eq!("abc!@#".remove_special_chars(), "abc");
        assert_eq!("123 456".remove_special_chars(), "123 456");
        assert_eq!("Abc".to_camel_case(), "abc");
        assert_eq!("A".to_camel_case(), "a");
        assert_eq!("abc".to_pascal_case(), "Abc");
        assert_eq!("ab".repeat_safe(3), "ababab");
        assert_eq!("ab".repeat_safe(0), "");
        assert_eq!("abcABCabc".replace_ignore_case("abc", "x"), "xxx");
        assert_eq!("abc".replace_ignore_case("def", "x"), "abc");
        assert_eq!("a.b".replace_ignore_case(".", "$1"), "a$1b");
    }

    #[test]
    fn test_md5_and_search() {
        let hash = "hello".to_md5();
        assert_eq!(hash, "5d41402abc4b2a76b9719d911017c592");
        assert_eq!("".to_md5(), "");
        assert!("abcDEF".contains_ignore_case("def"));
        assert!(!"abc".contains_ignore_case("xyz"));
        assert!(!"abc".contains_ignore_case(""));
    }

    #[test]
    fn test_split_safe() {
        assert_eq!("a,b,,c".split_safe(&[',']), vec!["a", "b", "c"]);
        assert_eq!("a;b c".split_safe(&[';', ' ']), vec!["a", "b", "c"]);
        assert!("".split_safe(&[',']).is_empty());
    }

    #[test]
    fn test_pinyin() {
        assert_eq!("中国".to_pinyin(), "zhongguo");
    }

    #[test]
    fn test_option_helpers() {
        let none: Option<&str> = None;
        assert!(none.is_null_or_empty());
        assert!(Some("").is_null_or_empty());
        assert!(!Some("abc").is_null_or_empty());
        assert!(Some("   ").is_null_or_whitespace());
        assert_eq!(Some(" abc ").trim_safe(), "abc");
        assert_eq!(none.trim_safe(), "");
        assert!(none.is_null_value());
        assert!(Some("[]").is_null_value());
        assert!(!Some("abc").is_null_value());
    }
}
