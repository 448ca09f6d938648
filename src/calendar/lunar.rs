//! Chinese lunisolar calendar, 1900-01-31 through 2100-12-31
//!
//! Each year is packed into one word: bits 15..4 flag the twelve regular
//! months as 30 days (set) or 29 days, bits 3..0 name the leap month (0 for
//! none) and bit 16 flags the leap month as 30 days.

use std::fmt;

use chrono::{Datelike, NaiveDate};

const FIRST_YEAR: i32 = 1900;
const LAST_YEAR: i32 = 2100;

#[rustfmt::skip]
static YEAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    0x0d520,
];

const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const ZODIAC: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

fn info(year: i32) -> u32 {
    YEAR_INFO[(year - FIRST_YEAR) as usize]
}

/// Leap month number of `year`, 0 when there is none
fn leap_month(year: i32) -> u32 {
    info(year) & 0xf
}

fn leap_month_days(year: i32) -> i64 {
    match (leap_month(year), info(year) & 0x10000) {
        (0, _) => 0,
        (_, 0) => 29,
        _ => 30,
    }
}

fn month_days(year: i32, month: u32) -> i64 {
    if info(year) & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

fn year_days(year: i32) -> i64 {
    let long_months = (0..12)
        .filter(|i| info(year) & (0x8000 >> i) != 0)
        .count() as i64;
    348 + long_months + leap_month_days(year)
}

/// A date in the Chinese lunisolar calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Convert a Gregorian date; `None` outside the supported range
    pub fn from_solar(date: NaiveDate) -> Option<Self> {
        let base = NaiveDate::from_ymd_opt(FIRST_YEAR, 1, 31)?;
        let mut offset = (date - base).num_days();
        if offset < 0 || date.year() > LAST_YEAR {
            return None;
        }

        let mut year = FIRST_YEAR;
        while year <= LAST_YEAR && offset >= year_days(year) {
            offset -= year_days(year);
            year += 1;
        }
        if year > LAST_YEAR {
            return None;
        }

        let leap = leap_month(year);
        for month in 1..=12 {
            let regular = month_days(year, month);
            if offset < regular {
                return Some(Self::new(year, month, offset, false));
            }
            offset -= regular;

            if month == leap {
                let leap_days = leap_month_days(year);
                if offset < leap_days {
                    return Some(Self::new(year, month, offset, true));
                }
                offset -= leap_days;
            }
        }
        None
    }

    fn new(year: i32, month: u32, offset: i64, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day: offset as u32 + 1,
            is_leap_month,
        }
    }

    /// `正月`..`腊月`, prefixed with `闰` for a leap month
    pub fn month_name(&self) -> String {
        let name = MONTH_NAMES[(self.month as usize - 1) % 12];
        if self.is_leap_month {
            format!("闰{name}")
        } else {
            name.to_string()
        }
    }

    pub fn day_name(&self) -> &'static str {
        DAY_NAMES[(self.day as usize - 1) % 30]
    }

    /// Sexagenary name of the lunar year, e.g. `甲辰`
    pub fn year_name(&self) -> String {
        let cycle = (self.year - 4).rem_euclid(60) as usize;
        format!("{}{}", STEMS[cycle % 10], BRANCHES[cycle % 12])
    }

    pub fn zodiac(&self) -> &'static str {
        ZODIAC[(self.year - 4).rem_euclid(12) as usize]
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.month_name(), self.day_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunar(y: i32, m: u32, d: u32) -> LunarDate {
        LunarDate::from_solar(NaiveDate::from_ymd_opt(y, m, d).unwrap()).unwrap()
    }

    #[test]
    fn test_new_year_days() {
        for (y, m, d) in [(2000, 2, 5), (2020, 1, 25), (2023, 1, 22), (2024, 2, 10), (2025, 1, 29)] {
            let date = lunar(y, m, d);
            assert_eq!((date.year, date.month, date.day), (y, 1, 1), "{y}-{m}-{d}");
            assert!(!date.is_leap_month);
        }
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(lunar(2025, 2, 1).to_string(), "正月初四");
        assert_eq!(lunar(2024, 9, 17).to_string(), "八月十五");
        assert_eq!(lunar(2025, 9, 30).to_string(), "八月初九");

        let eve = lunar(2000, 1, 1);
        assert_eq!((eve.year, eve.month, eve.day), (1999, 11, 25));
        assert_eq!(eve.to_string(), "冬月廿五");
    }

    #[test]
    fn test_leap_month() {
        let regular = lunar(2023, 2, 20);
        assert_eq!(regular.to_string(), "二月初一");
        let leap = lunar(2023, 3, 22);
        assert!(leap.is_leap_month);
        assert_eq!(leap.to_string(), "闰二月初一");
    }

    #[test]
    fn test_year_name_and_zodiac() {
        let date = lunar(2024, 2, 10);
        assert_eq!(date.year_name(), "甲辰");
        assert_eq!(date.zodiac(), "龙");
        assert_eq!(lunar(2025, 1, 29).year_name(), "乙巳");
    }

    #[test]
    fn test_range_limits() {
        assert_eq!(lunar(1900, 1, 31).to_string(), "正月初一");
        assert!(LunarDate::from_solar(NaiveDate::from_ymd_opt(1900, 1, 30).unwrap()).is_none());
        assert!(LunarDate::from_solar(NaiveDate::from_ymd_opt(2101, 1, 1).unwrap()).is_none());
    }
}
