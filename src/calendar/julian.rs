use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Julian Day Number with the time of day as a fraction
///
/// Noon on 2000-01-01 is 2451545.0. The Gregorian correction is applied to
/// every date, including those before the 1582 reform.
pub fn julian_day(value: &NaiveDateTime) -> f64 {
    let mut year = value.year() as i64;
    let mut month = value.month() as i64;
    if month <= 2 {
        year -= 1;
        month += 12;
    }
    let a = year / 100;
    let b = 2 - a + a / 4;
    let day_fraction = (value.hour() as f64
        + value.minute() as f64 / 60.0
        + value.second() as f64 / 3600.0)
        / 24.0;

    (365.25 * (year + 4716) as f64).floor()
        + (30.6001 * (month + 1) as f64).floor()
        + value.day() as f64
        + b as f64
        - 1524.5
        + day_fraction
}

/// Inverse of [`julian_day`], to the nearest second
pub fn from_julian_day(jd: f64) -> Option<NaiveDateTime> {
    if !jd.is_finite() || jd < 0.0 {
        return None;
    }
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let fraction = shifted - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = (b - d - (30.6001 * e).floor()) as u32;
    let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
    let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;

    let seconds = (fraction * 86_400.0).round() as i64;
    let midnight = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
    midnight.checked_add_signed(chrono::Duration::seconds(seconds))
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
    fn test_j2000_epoch() {
        assert_eq!(julian_day(&at(2000, 1, 1, 12, 0, 0)), 2_451_545.0);
    }

    #[test]
    fn test_midnight_is_half_day() {
        assert_eq!(julian_day(&at(1999, 1, 1, 0, 0, 0)), 2_451_179.5);
        assert_eq!(julian_day(&at(2025, 9, 30, 0, 0, 0)), 2_460_948.5);
    }

    #[test]
    fn test_january_and_february_use_previous_year() {
        let feb = julian_day(&at(2024, 2, 29, 0, 0, 0));
        let mar = julian_day(&at(2024, 3, 1, 0, 0, 0));
        assert_eq!(mar - feb, 1.0);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(from_julian_day(2_451_545.0), Some(at(2000, 1, 1, 12, 0, 0)));
        let value = at(2025, 9, 30, 14, 30, 0);
        assert_eq!(from_julian_day(julian_day(&value)), Some(value));
        assert_eq!(from_julian_day(f64::NAN), None);
    }
}
