//! Helpers for [`NaiveDateTime`]
//!
//! Naive values carry no zone. Unix timestamps and zone conversions read them
//! as UTC; values built from timestamps come back in local time. The range
//! mirrors the usual business calendar: 0001-01-01 through the last tick of
//! 9999-12-31, and the arithmetic helpers saturate at those bounds.

use chrono::{
    DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Timelike, Utc, Weekday,
};

use crate::calendar::{self, zones, LunarDate};
use crate::ext::int::{CHINESE_WEEKDAYS, ENGLISH_WEEKDAYS};
use crate::format::dotnet;

/// Default pattern for [`DateTimeExt::to_format_string`]
pub const DEFAULT_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

/// Beyond this many milliseconds any offset leaves the supported range
const MAX_OFFSET_MS: f64 = 400_000_000_000_000.0;

const LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y%m%d%H%M%S",
    "%Y年%m月%d日 %H时%M分%S秒",
    "%Y年%m月%d日 %H时%M分",
    "%Y年%m月%d日 %H:%M:%S",
    "%a, %d %b %Y %H:%M:%S GMT",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%Y年%m月%d日", "%Y.%m.%d"];

/// 0001-01-01 00:00:00
pub fn min_value() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

/// 9999-12-31 23:59:59.9999999
pub fn max_value() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|d| d.and_hms_nano_opt(23, 59, 59, 999_999_900))
        .unwrap_or(NaiveDateTime::MAX)
}

fn clamp_range(value: NaiveDateTime) -> NaiveDateTime {
    value.clamp(min_value(), max_value())
}

/// Parse the common date and date-time layouts; offsets are converted to local time
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }
    for layout in LAYOUTS {
        if let Ok(value) = NaiveDateTime::parse_from_str(text, layout) {
            return Some(value);
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(text, layout) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Local time for a Unix timestamp in seconds; the minimum when out of range
pub fn from_unix_timestamp(seconds: i64) -> NaiveDateTime {
    DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.with_timezone(&Local).naive_local())
        .unwrap_or_else(min_value)
}

/// Local time for a Unix timestamp in milliseconds; the minimum when out of range
pub fn from_unix_timestamp_ms(millis: i64) -> NaiveDateTime {
    DateTime::from_timestamp_millis(millis)
        .map(|utc| utc.with_timezone(&Local).naive_local())
        .unwrap_or_else(min_value)
}

pub trait DateTimeExt: Sized {
    fn is_default(&self) -> bool;
    fn is_min_value(&self) -> bool;
    fn is_max_value(&self) -> bool;
    fn is_today(&self) -> bool;
    fn is_leap_year(&self) -> bool;
    fn is_weekend(&self) -> bool;
    fn is_weekday(&self) -> bool;
    /// Inclusive on both ends
    fn is_between(&self, start: &NaiveDateTime, end: &NaiveDateTime) -> bool;
    fn is_before(&self, other: &NaiveDateTime) -> bool;
    fn is_after(&self, other: &NaiveDateTime) -> bool;
    fn is_am(&self) -> bool;
    fn is_pm(&self) -> bool;

    fn to_unix_timestamp(&self) -> i64;
    fn to_unix_timestamp_ms(&self) -> i64;

    /// Render with a .NET custom pattern such as `yyyy-MM-dd HH:mm:ss`
    fn to_format_string(&self, pattern: &str) -> String;
    fn to_default_string(&self) -> String;
    /// Round-trip layout: `2025-09-30T14:30:00.0000000`
    fn to_iso8601_string(&self) -> String;
    /// `Tue, 30 Sep 2025 14:30:00 GMT`
    fn to_rfc1123_string(&self) -> String;
    fn to_chinese_date_string(&self) -> String;
    fn to_chinese_date_time_string(&self) -> String;
    /// `yyyyMMddHHmmss`
    fn to_timestamp_string(&self) -> String;
    /// `yyyyMMddHHmmssfff`
    fn to_custom_timestamp(&self) -> String;
    fn to_date_string(&self) -> String;
    fn to_time_string(&self) -> String;
    fn to_short_time_string(&self) -> String;
    fn to_chinese_weekday(&self) -> &'static str;
    fn to_english_weekday(&self) -> &'static str;
    /// 0 is Sunday
    fn to_weekday_number(&self) -> u32;
    /// `Q1`..`Q4`
    fn to_quarter(&self) -> String;
    fn to_lunar_date(&self) -> Option<LunarDate>;
    /// `正月初一`; empty outside 1900..=2100
    fn to_chinese_lunar_string(&self) -> String;
    /// `民国114年09月30日`
    fn to_minguo_string(&self) -> String;
    fn to_julian_day_number(&self) -> f64;

    fn add_days_safe(&self, days: f64) -> NaiveDateTime;
    fn add_hours_safe(&self, hours: f64) -> NaiveDateTime;
    fn add_minutes_safe(&self, minutes: f64) -> NaiveDateTime;
    fn add_seconds_safe(&self, seconds: f64) -> NaiveDateTime;
    /// Calendar months, clamping to the end of shorter months
    fn add_months_safe(&self, months: i32) -> NaiveDateTime;
    fn add_years_safe(&self, years: i32) -> NaiveDateTime;

    /// Whole days between the date parts
    fn days_between(&self, other: &NaiveDateTime) -> f64;
    fn hours_between(&self, other: &NaiveDateTime) -> f64;
    fn minutes_between(&self, other: &NaiveDateTime) -> f64;
    fn seconds_between(&self, other: &NaiveDateTime) -> f64;
    /// Absolute difference
    fn span_between(&self, other: &NaiveDateTime) -> Duration;

    /// Read as UTC, return local wall-clock time
    fn to_local_time(&self) -> NaiveDateTime;
    /// Read as local, return UTC wall-clock time
    fn to_utc_time(&self) -> NaiveDateTime;
    /// Read as UTC, return the wall-clock time in `zone_id`; unchanged for unknown zones
    fn to_time_zone(&self, zone_id: &str) -> NaiveDateTime;

    /// `刚刚`, `5分钟前`, `昨天`, ... relative to the local clock
    fn to_friendly_string(&self) -> String;
    fn to_friendly_string_at(&self, now: &NaiveDateTime) -> String;
    /// Completed years up to today, never negative
    fn to_age(&self) -> u32;
    fn to_age_at(&self, today: NaiveDate) -> u32;

    fn to_ymd(&self) -> (i32, u32, u32);
    fn to_hms(&self) -> (u32, u32, u32);
    fn to_date_only(&self) -> NaiveDate;
    fn to_time_only(&self) -> NaiveTime;
}

fn add_millis(value: &NaiveDateTime, millis: f64) -> NaiveDateTime {
    if millis.is_nan() {
        return *value;
    }
    if millis.abs() > MAX_OFFSET_MS {
        return if millis > 0.0 { max_value() } else { min_value() };
    }
    let delta = Duration::milliseconds(millis.round() as i64);
    match value.checked_add_signed(delta) {
        Some(result) => clamp_range(result),
        None if millis > 0.0 => max_value(),
        None => min_value(),
    }
}

fn add_months(value: &NaiveDateTime, months: i64) -> NaiveDateTime {
    let magnitude = Months::new(months.unsigned_abs().min(u32::MAX as u64) as u32);
    let result = if months >= 0 {
        value.checked_add_months(magnitude)
    } else {
        value.checked_sub_months(magnitude)
    };
    match result {
        Some(result) => clamp_range(result),
        None if months > 0 => max_value(),
        None => min_value(),
    }
}

fn total_seconds(delta: Duration) -> f64 {
    delta.num_milliseconds() as f64 / 1000.0
}

impl DateTimeExt for NaiveDateTime {
    fn is_default(&self) -> bool {
        self.is_min_value()
    }

    fn is_min_value(&self) -> bool {
        *self == min_value()
    }

    fn is_max_value(&self) -> bool {
        *self == max_value()
    }

    fn is_today(&self) -> bool {
        self.date() == Local::now().date_naive()
    }

    fn is_leap_year(&self) -> bool {
        self.date().leap_year()
    }

    fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    fn is_between(&self, start: &NaiveDateTime, end: &NaiveDateTime) -> bool {
        start <= self && self <= end
    }

    fn is_before(&self, other: &NaiveDateTime) -> bool {
        self < other
    }

    fn is_after(&self, other: &NaiveDateTime) -> bool {
        self > other
    }

    fn is_am(&self) -> bool {
        self.hour() < 12
    }

    fn is_pm(&self) -> bool {
        self.hour() >= 12
    }

    fn to_unix_timestamp(&self) -> i64 {
        self.and_utc().timestamp()
    }

    fn to_unix_timestamp_ms(&self) -> i64 {
        self.and_utc().timestamp_millis()
    }

    fn to_format_string(&self, pattern: &str) -> String {
        dotnet::format_datetime(self, pattern)
    }

    fn to_default_string(&self) -> String {
        self.to_format_string(DEFAULT_PATTERN)
    }

    fn to_iso8601_string(&self) -> String {
        self.to_format_string("o")
    }

    fn to_rfc1123_string(&self) -> String {
        self.to_format_string("R")
    }

    fn to_chinese_date_string(&self) -> String {
        self.to_format_string("yyyy年MM月dd日")
    }

    fn to_chinese_date_time_string(&self) -> String {
        self.to_format_string("yyyy年MM月dd日 HH时mm分")
    }

    fn to_timestamp_string(&self) -> String {
        self.to_format_string("yyyyMMddHHmmss")
    }

    fn to_custom_timestamp(&self) -> String {
        self.to_format_string("yyyyMMddHHmmssfff")
    }

    fn to_date_string(&self) -> String {
        self.to_format_string("yyyy-MM-dd")
    }

    fn to_time_string(&self) -> String {
        self.to_format_string("HH:mm:ss")
    }

    fn to_short_time_string(&self) -> String {
        self.to_format_string("HH:mm")
    }

    fn to_chinese_weekday(&self) -> &'static str {
        CHINESE_WEEKDAYS[self.to_weekday_number() as usize]
    }

    fn to_english_weekday(&self) -> &'static str {
        ENGLISH_WEEKDAYS[self.to_weekday_number() as usize]
    }

    fn to_weekday_number(&self) -> u32 {
        self.weekday().num_days_from_sunday()
    }

    fn to_quarter(&self) -> String {
        format!("Q{}", (self.month() - 1) / 3 + 1)
    }

    fn to_lunar_date(&self) -> Option<LunarDate> {
        LunarDate::from_solar(self.date())
    }

    fn to_chinese_lunar_string(&self) -> String {
        self.to_lunar_date()
            .map(|lunar| lunar.to_string())
            .unwrap_or_default()
    }

    fn to_minguo_string(&self) -> String {
        format!(
            "民国{}年{:02}月{:02}日",
            self.year() - 1911,
            self.month(),
            self.day()
        )
    }

    fn to_julian_day_number(&self) -> f64 {
        calendar::julian_day(self)
    }

    fn add_days_safe(&self, days: f64) -> NaiveDateTime {
        add_millis(self, days * 86_400_000.0)
    }

    fn add_hours_safe(&self, hours: f64) -> NaiveDateTime {
        add_millis(self, hours * 3_600_000.0)
    }

    fn add_minutes_safe(&self, minutes: f64) -> NaiveDateTime {
        add_millis(self, minutes * 60_000.0)
    }

    fn add_seconds_safe(&self, seconds: f64) -> NaiveDateTime {
        add_millis(self, seconds * 1000.0)
    }

    fn add_months_safe(&self, months: i32) -> NaiveDateTime {
        add_months(self, months as i64)
    }

    fn add_years_safe(&self, years: i32) -> NaiveDateTime {
        add_months(self, years as i64 * 12)
    }

    fn days_between(&self, other: &NaiveDateTime) -> f64 {
        (self.date() - other.date()).num_days().abs() as f64
    }

    fn hours_between(&self, other: &NaiveDateTime) -> f64 {
        self.seconds_between(other) / 3600.0
    }

    fn minutes_between(&self, other: &NaiveDateTime) -> f64 {
        self.seconds_between(other) / 60.0
    }

    fn seconds_between(&self, other: &NaiveDateTime) -> f64 {
        total_seconds(*self - *other).abs()
    }

    fn span_between(&self, other: &NaiveDateTime) -> Duration {
        let delta = *self - *other;
        if delta < Duration::zero() {
            -delta
        } else {
            delta
        }
    }

    fn to_local_time(&self) -> NaiveDateTime {
        self.and_utc().with_timezone(&Local).naive_local()
    }

    fn to_utc_time(&self) -> NaiveDateTime {
        Local
            .from_local_datetime(self)
            .earliest()
            .map(|local| local.with_timezone(&Utc).naive_utc())
            .unwrap_or(*self)
    }

    fn to_time_zone(&self, zone_id: &str) -> NaiveDateTime {
        match zones::resolve(zone_id) {
            Some(offset) => self.and_utc().with_timezone(&offset).naive_local(),
            None => {
                tracing::warn!("Unknown time zone '{}', value left unchanged", zone_id);
                *self
            }
        }
    }

    fn to_friendly_string(&self) -> String {
        self.to_friendly_string_at(&Local::now().naive_local())
    }

    fn to_friendly_string_at(&self, now: &NaiveDateTime) -> String {
        let seconds = total_seconds(*now - *self);
        let minutes = seconds / 60.0;
        let hours = minutes / 60.0;
        let days = hours / 24.0;

        if seconds < 60.0 {
            "刚刚".to_string()
        } else if minutes < 60.0 {
            format!("{}分钟前", minutes as i64)
        } else if hours < 24.0 {
            format!("{}小时前", hours as i64)
        } else if days < 2.0 {
            "昨天".to_string()
        } else if days < 30.0 {
            format!("{}天前", days as i64)
        } else if days < 365.0 {
            format!("{}个月前", (days / 30.0) as i64)
        } else {
            format!("{}年前", (days / 365.0) as i64)
        }
    }

    fn to_age(&self) -> u32 {
        self.to_age_at(Local::now().date_naive())
    }

    fn to_age_at(&self, today: NaiveDate) -> u32 {
        let mut age = today.year() - self.year();
        if (today.month(), today.day()) < (self.month(), self.day()) {
            age -= 1;
        }
        age.max(0) as u32
    }

    fn to_ymd(&self) -> (i32, u32, u32) {
        (self.year(), self.month(), self.day())
    }

    fn to_hms(&self) -> (u32, u32, u32) {
        (self.hour(), self.minute(), self.second())
    }

    fn to_date_only(&self) -> NaiveDate {
        self.date()
    }

    fn to_time_only(&self) -> NaiveTime {
        self.time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_range_predicates() {
        assert!(min_value().is_min_value());
        assert!(min_value().is_default());
        assert!(max_value().is_max_value());
        assert!(!at(2025, 9, 30, 0, 0, 0).is_default());
        assert!(at(2024, 1, 1, 0, 0, 0).is_leap_year());
        assert!(!at(2025, 1, 1, 0, 0, 0).is_leap_year());
    }

    #[test]
    fn test_weekend_and_halves() {
        let saturday = at(2025, 10, 4, 9, 0, 0);
        assert!(saturday.is_weekend());
        assert!(!saturday.is_weekday());
        assert!(saturday.is_am());
        assert!(at(2025, 9, 30, 12, 0, 0).is_pm());
        assert!(at(2025, 9, 30, 12, 0, 0).is_weekday());
    }

    #[test]
    fn test_comparisons() {
        let start = at(2025, 1, 1, 0, 0, 0);
        let end = at(2025, 12, 31, 0, 0, 0);
        assert!(start.is_between(&start, &end));
        assert!(end.is_between(&start, &end));
        assert!(start.is_before(&end));
        assert!(end.is_after(&start));
    }

    #[test]
    fn test_unix_timestamps() {
        let epoch = at(1970, 1, 1, 0, 0, 0);
        assert_eq!(epoch.to_unix_timestamp(), 0);
        assert_eq!(at(2000, 1, 1, 0, 0, 0).to_unix_timestamp(), 946_684_800);
        assert_eq!(at(1970, 1, 1, 0, 0, 1).to_unix_timestamp_ms(), 1000);

        let local = from_unix_timestamp(946_684_800);
        assert_eq!(local.to_utc_time(), at(2000, 1, 1, 0, 0, 0));
        assert_eq!(from_unix_timestamp_ms(946_684_800_000), local);
    }

    #[test]
    fn test_renderings() {
        let dt = at(2025, 9, 30, 14, 30, 0);
        assert_eq!(dt.to_default_string(), "2025-09-30 14:30:00");
        assert_eq!(dt.to_iso8601_string(), "2025-09-30T14:30:00.0000000");
        assert_eq!(dt.to_rfc1123_string(), "Tue, 30 Sep 2025 14:30:00 GMT");
        assert_eq!(dt.to_chinese_date_string(), "2025年09月30日");
        assert_eq!(dt.to_chinese_date_time_string(), "2025年09月30日 14时30分");
        assert_eq!(dt.to_timestamp_string(), "20250930143000");
        assert_eq!(dt.to_custom_timestamp(), "20250930143000000");
        assert_eq!(dt.to_date_string(), "2025-09-30");
        assert_eq!(dt.to_time_string(), "14:30:00");
        assert_eq!(dt.to_short_time_string(), "14:30");
        assert_eq!(dt.to_minguo_string(), "民国114年09月30日");
    }

    #[test]
    fn test_weekday_and_quarter() {
        let dt = at(2025, 9, 30, 14, 30, 0);
        assert_eq!(dt.to_chinese_weekday(), "星期二");
        assert_eq!(dt.to_english_weekday(), "Tuesday");
        assert_eq!(dt.to_weekday_number(), 2);
        assert_eq!(dt.to_quarter(), "Q3");
        assert_eq!(at(2025, 1, 5, 0, 0, 0).to_quarter(), "Q1");
        assert_eq!(at(2025, 12, 5, 0, 0, 0).to_quarter(), "Q4");
    }

    #[test]
    fn test_lunar_and_julian() {
        assert_eq!(at(2024, 2, 10, 8, 0, 0).to_chinese_lunar_string(), "正月初一");
        assert_eq!(at(1800, 1, 1, 0, 0, 0).to_chinese_lunar_string(), "");
        assert_eq!(at(2000, 1, 1, 12, 0, 0).to_julian_day_number(), 2_451_545.0);
    }

    #[test]
    fn test_fractional_arithmetic() {
        let dt = at(2025, 9, 30, 12, 0, 0);
        assert_eq!(dt.add_days_safe(1.5), at(2025, 10, 2, 0, 0, 0));
        assert_eq!(dt.add_hours_safe(-12.0), at(2025, 9, 30, 0, 0, 0));
        assert_eq!(dt.add_minutes_safe(90.0), at(2025, 9, 30, 13, 30, 0));
        assert_eq!(dt.add_seconds_safe(0.5).and_utc().timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_calendar_arithmetic_clamps_month_end() {
        let jan31 = at(2025, 1, 31, 10, 0, 0);
        assert_eq!(jan31.add_months_safe(1), at(2025, 2, 28, 10, 0, 0));
        assert_eq!(jan31.add_months_safe(-2), at(2024, 11, 30, 10, 0, 0));
        assert_eq!(at(2024, 2, 29, 0, 0, 0).add_years_safe(1), at(2025, 2, 28, 0, 0, 0));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let dt = at(9999, 12, 1, 0, 0, 0);
        assert_eq!(dt.add_days_safe(1e9), max_value());
        assert_eq!(dt.add_months_safe(5), max_value());
        assert_eq!(at(1, 1, 2, 0, 0, 0).add_days_safe(-10.0), min_value());
        assert_eq!(min_value().add_years_safe(-1), min_value());
    }

    #[test]
    fn test_differences() {
        let a = at(2025, 9, 30, 23, 0, 0);
        let b = at(2025, 10, 2, 1, 0, 0);
        assert_eq!(a.days_between(&b), 2.0);
        assert_eq!(b.hours_between(&a), 26.0);
        assert_eq!(a.minutes_between(&b), 1560.0);
        assert_eq!(a.seconds_between(&b), 93_600.0);
        assert_eq!(a.span_between(&b), Duration::hours(26));
    }

    #[test]
    fn test_zone_conversion() {
        let utc = at(2025, 9, 30, 6, 0, 0);
        assert_eq!(utc.to_time_zone("China Standard Time"), at(2025, 9, 30, 14, 0, 0));
        assert_eq!(utc.to_time_zone("America/New_York"), at(2025, 9, 30, 1, 0, 0));
        assert_eq!(utc.to_time_zone("Nowhere/Special"), utc);
        assert_eq!(utc.to_local_time().to_utc_time(), utc);
    }

    #[test]
    fn test_friendly_string() {
        let now = at(2025, 9, 30, 12, 0, 0);
        let cases = [
            (now.add_seconds_safe(-30.0), "刚刚"),
            (now.add_minutes_safe(-5.0), "5分钟前"),
            (now.add_hours_safe(-3.0), "3小时前"),
            (now.add_hours_safe(-30.0), "昨天"),
            (now.add_days_safe(-10.0), "10天前"),
            (now.add_days_safe(-65.0), "2个月前"),
            (now.add_days_safe(-800.0), "2年前"),
        ];
        for (value, expected) in cases {
            assert_eq!(value.to_friendly_string_at(&now), expected);
        }
    }

    #[test]
    fn test_age() {
        let birthday = at(2000, 10, 1, 0, 0, 0);
        assert_eq!(birthday.to_age_at(NaiveDate::from_ymd_opt(2025, 9, 30).unwrap()), 24);
        assert_eq!(birthday.to_age_at(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()), 25);
        assert_eq!(birthday.to_age_at(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()), 0);
    }

    #[test]
    fn test_tuples() {
        let dt = at(2025, 9, 30, 14, 30, 5);
        assert_eq!(dt.to_ymd(), (2025, 9, 30));
        assert_eq!(dt.to_hms(), (14, 30, 5));
        assert_eq!(dt.to_date_only(), NaiveDate::from_ymd_opt(2025, 9, 30).unwrap());
    }

    #[test]
    fn test_parse_layouts() {
        assert_eq!(parse_datetime("2025-09-30 14:30:00"), Some(at(2025, 9, 30, 14, 30, 0)));
        assert_eq!(parse_datetime("2025/09/30 14:30"), Some(at(2025, 9, 30, 14, 30, 0)));
        assert_eq!(parse_datetime("2025-09-30T14:30:00.5").map(|d| d.second()), Some(0));
        assert_eq!(parse_datetime("20250930143000"), Some(at(2025, 9, 30, 14, 30, 0)));
        assert_eq!(parse_datetime("2025年09月30日"), Some(at(2025, 9, 30, 0, 0, 0)));
        assert_eq!(parse_datetime("2025-09-30"), Some(at(2025, 9, 30, 0, 0, 0)));
        assert!(parse_datetime("2025-09-30T06:30:00Z").is_some());
        assert_eq!(parse_datetime("not-date"), None);
        assert_eq!(parse_datetime(""), None);
    }
}
