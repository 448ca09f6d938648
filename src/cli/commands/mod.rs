//! Command implementation modules
//!
//! Each subcommand lives in its own module and prints its result to stdout.

pub mod calendar;
pub mod click;
pub mod group;
pub mod text;
pub mod time;

pub use calendar::{run_elapsed_command, run_julian_command, run_lunar_command};
pub use click::{run_click_command, ClickParams};
pub use group::{run_group_command, GroupParams};
pub use text::{run_pinyin_command, run_upper_command};
pub use time::{run_time_command, TimeParams};

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDateTime, NaiveTime};

use crate::ext::datetime::parse_datetime;

/// A full date-time, or a bare time of day on today's date
pub fn parse_when(text: &str) -> Result<NaiveDateTime> {
    if let Some(value) = parse_datetime(text) {
        return Ok(value);
    }
    ["%H:%M:%S%.f", "%H:%M"]
        .iter()
        .find_map(|layout| NaiveTime::parse_from_str(text.trim(), layout).ok())
        .map(|time| Local::now().date_naive().and_time(time))
        .ok_or_else(|| anyhow!("Unrecognised date-time '{}'", text))
}

/// Parse `text` when given, otherwise use the current local time
pub fn parse_when_or_now(text: Option<&str>) -> Result<NaiveDateTime> {
    match text {
        Some(text) => parse_when(text),
        None => Ok(Local::now().naive_local()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_when() {
        assert_eq!(
            parse_when("2024-01-02 03:04:05").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap()
        );

        let today = parse_when("08:30").unwrap();
        assert_eq!(today.date(), Local::now().date_naive());
        assert_eq!(today.time(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());

        assert!(parse_when("soon").is_err());
    }
}
