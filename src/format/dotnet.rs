//! .NET-style format strings
//!
//! Numeric standard specifiers (`D4`, `X2`, `N2`, `F1`, `P0`, `E3`, `C`) and
//! custom date-time patterns (`yyyy-MM-dd HH:mm:ss.fff`). Unknown numeric
//! specifiers fall back to plain decimal text, unknown pattern letters are
//! copied through.

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::culture::Culture;
use super::number;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A parsed standard numeric specifier such as `N2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericSpec {
    pub kind: char,
    pub precision: Option<usize>,
}

impl NumericSpec {
    pub fn parse(spec: &str) -> Option<Self> {
        let mut chars = spec.chars();
        let kind = chars.next()?;
        if !kind.is_ascii_alphabetic() {
            return None;
        }
        let rest = chars.as_str();
        let precision = if rest.is_empty() {
            None
        } else {
            Some(rest.parse::<usize>().ok().filter(|&p| p <= number::MAX_PRECISION)?)
        };
        Some(Self { kind, precision })
    }
}

/// Format a 32-bit integer with a standard numeric specifier
pub fn format_i32(value: i32, spec: Option<&str>, culture: &Culture) -> String {
    let Some(parsed) = spec.and_then(NumericSpec::parse) else {
        return value.to_string();
    };
    let precision = parsed.precision;
    match parsed.kind {
        'D' | 'd' => {
            let sign = if value < 0 { "-" } else { "" };
            let digits = value.unsigned_abs().to_string();
            format!("{sign}{}", number::zero_pad(&digits, precision.unwrap_or(0)))
        }
        'X' => number::zero_pad(&format!("{:X}", value), precision.unwrap_or(0)),
        'x' => number::zero_pad(&format!("{:x}", value), precision.unwrap_or(0)),
        'N' | 'n' => number::grouped(
            value as f64,
            precision.unwrap_or(2),
            &culture.group_separator,
            &culture.decimal_separator,
        ),
        'F' | 'f' => number::fixed(value as f64, precision.unwrap_or(2)),
        'P' | 'p' => number::percent(value as f64, precision.unwrap_or(2)),
        'E' | 'e' => number::scientific(value as f64, precision.unwrap_or(6)),
        'C' | 'c' => number::currency(
            value as f64,
            precision.unwrap_or(culture.currency_decimals),
            culture,
        ),
        'G' | 'g' => value.to_string(),
        _ => value.to_string(),
    }
}

/// Render a date-time with a .NET custom pattern or one of the `o`, `R`, `s`, `u` standard patterns
pub fn format_datetime(value: &NaiveDateTime, pattern: &str) -> String {
    match pattern {
        "o" | "O" => render(value, "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffff"),
        "r" | "R" => render(value, "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'"),
        "s" => render(value, "yyyy'-'MM'-'dd'T'HH':'mm':'ss"),
        "u" => render(value, "yyyy'-'MM'-'dd HH':'mm':'ss'Z'"),
        _ => render(value, pattern),
    }
}

fn render(value: &NaiveDateTime, pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' => {
                i += 1;
                while i < chars.len() && chars[i] != c {
                    out.push(chars[i]);
                    i += 1;
                }
                i += 1;
                continue;
            }
            '\\' => {
                if let Some(&next) = chars.get(i + 1) {
                    out.push(next);
                }
                i += 2;
                continue;
            }
            _ => {}
        }

        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }
        i += run;

        match c {
            'y' => match run {
                1 => out.push_str(&(value.year() % 100).to_string()),
                2 => out.push_str(&format!("{:02}", value.year() % 100)),
                n => out.push_str(&format!("{:0n$}", value.year())),
            },
            'M' => match run {
                1 => out.push_str(&value.month().to_string()),
                2 => out.push_str(&format!("{:02}", value.month())),
                3 => out.push_str(&MONTH_NAMES[value.month0() as usize][..3]),
                _ => out.push_str(MONTH_NAMES[value.month0() as usize]),
            },
            'd' => {
                let weekday = value.weekday().num_days_from_sunday() as usize;
                match run {
                    1 => out.push_str(&value.day().to_string()),
                    2 => out.push_str(&format!("{:02}", value.day())),
                    3 => out.push_str(&DAY_NAMES[weekday][..3]),
                    _ => out.push_str(DAY_NAMES[weekday]),
                }
            }
            'H' => push_number(&mut out, value.hour(), run),
            'h' => {
                let hour = match value.hour() % 12 {
                    0 => 12,
                    h => h,
                };
                push_number(&mut out, hour, run);
            }
            'm' => push_number(&mut out, value.minute(), run),
            's' => push_number(&mut out, value.second(), run),
            'f' | 'F' => {
                let width = run.min(9);
                let nanos = value.nanosecond() % 1_000_000_000;
                let digits = format!("{:09}", nanos);
                let fraction = &digits[..width];
                if c == 'F' {
                    out.push_str(fraction.trim_end_matches('0'));
                } else {
                    out.push_str(fraction);
                }
            }
            't' => {
                let marker = if value.hour() < 12 { "AM" } else { "PM" };
                if run == 1 {
                    out.push_str(&marker[..1]);
                } else {
                    out.push_str(marker);
                }
            }
            'z' => match run {
                1 => out.push_str("+0"),
                2 => out.push_str("+00"),
                _ => out.push_str("+00:00"),
            },
            'K' => {}
            other => {
                for _ in 0..run {
                    out.push(other);
                }
            }
        }
    }

    out
}

fn push_number(out: &mut String, value: u32, run: usize) {
    if run == 1 {
        out.push_str(&value.to_string());
    } else {
        out.push_str(&format!("{:02}", value));
    }
}
