//! `chet lunar`, `chet julian` and `chet elapsed`

use anyhow::{anyhow, Result};
use chrono::{Duration, Local};

use super::{parse_when, parse_when_or_now};
use crate::ext::datetime::DateTimeExt;

pub fn run_lunar_command(date: Option<&str>) -> Result<()> {
    let when = parse_when_or_now(date)?;
    let lunar = when
        .to_lunar_date()
        .ok_or_else(|| anyhow!("{} is outside the lunar table (1900-2100)", when.to_date_string()))?;
    println!("{}{}年 {}", lunar.year_name(), lunar.zodiac(), lunar);
    Ok(())
}

pub fn run_julian_command(date: Option<&str>) -> Result<()> {
    let when = parse_when_or_now(date)?;
    println!("{}", when.to_julian_day_number());
    Ok(())
}

pub fn run_elapsed_command(from: Option<&str>, to: Option<&str>) -> Result<()> {
    let end = parse_when_or_now(to)?;
    let start = match from {
        Some(text) => parse_when(text)?,
        None => Local::now().naive_local() - Duration::days(1),
    };
    println!(
        "从 {} 到 {}，经过了{:.2}小时",
        start.to_default_string(),
        end.to_default_string(),
        start.hours_between(&end)
    );
    Ok(())
}
