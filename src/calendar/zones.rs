//! Named time zones resolved to their standard offsets
//!
//! Both Windows ids ("China Standard Time") and IANA ids ("Asia/Shanghai")
//! are accepted, as are literal offsets ("UTC+08:00", "+0530"). Daylight
//! saving is not modelled.

use chrono::FixedOffset;

/// (ids, offset in minutes east of UTC)
const ZONES: &[(&[&str], i32)] = &[
    (&["UTC", "Coordinated Universal Time", "Etc/UTC", "GMT", "Etc/GMT"], 0),
    (&["GMT Standard Time", "Europe/London", "Europe/Dublin", "Europe/Lisbon"], 0),
    (
        &[
            "W. Europe Standard Time",
            "Central European Standard Time",
            "Romance Standard Time",
            "Europe/Berlin",
            "Europe/Paris",
            "Europe/Rome",
            "Europe/Madrid",
            "Europe/Amsterdam",
        ],
        60,
    ),
    (&["E. Europe Standard Time", "GTB Standard Time", "Europe/Athens", "Europe/Helsinki"], 120),
    (&["Russian Standard Time", "Europe/Moscow", "Arab Standard Time", "Asia/Riyadh"], 180),
    (&["Arabian Standard Time", "Asia/Dubai"], 240),
    (&["Pakistan Standard Time", "Asia/Karachi"], 300),
    (&["India Standard Time", "Asia/Kolkata", "Asia/Calcutta"], 330),
    (&["SE Asia Standard Time", "Asia/Bangkok", "Asia/Jakarta", "Asia/Ho_Chi_Minh"], 420),
    (
        &[
            "China Standard Time",
            "Asia/Shanghai",
            "Asia/Chongqing",
            "Asia/Hong_Kong",
            "Asia/Macau",
            "PRC",
            "Taipei Standard Time",
            "Asia/Taipei",
            "Singapore Standard Time",
            "Asia/Singapore",
            "W. Australia Standard Time",
            "Australia/Perth",
        ],
        480,
    ),
    (&["Tokyo Standard Time", "Asia/Tokyo", "Korea Standard Time", "Asia/Seoul"], 540),
    (&["AUS Eastern Standard Time", "Australia/Sydney", "Australia/Melbourne"], 600),
    (&["New Zealand Standard Time", "Pacific/Auckland"], 720),
    (&["Hawaiian Standard Time", "Pacific/Honolulu"], -600),
    (&["Alaskan Standard Time", "America/Anchorage"], -540),
    (&["Pacific Standard Time", "America/Los_Angeles", "America/Vancouver"], -480),
    (&["Mountain Standard Time", "America/Denver", "America/Phoenix"], -420),
    (&["Central Standard Time", "America/Chicago", "America/Mexico_City"], -360),
    (&["Eastern Standard Time", "America/New_York", "America/Toronto"], -300),
    (&["E. South America Standard Time", "America/Sao_Paulo"], -180),
];

/// Resolve a zone id or literal offset
pub fn resolve(id: &str) -> Option<FixedOffset> {
    let id = id.trim();
    let minutes = ZONES
        .iter()
        .find(|(names, _)| names.iter().any(|n| n.eq_ignore_ascii_case(id)))
        .map(|(_, minutes)| *minutes)
        .or_else(|| parse_literal_offset(id))?;
    FixedOffset::east_opt(minutes * 60)
}

/// `UTC+08:00`, `GMT-5`, `+0530`, `-03:30`
fn parse_literal_offset(id: &str) -> Option<i32> {
    let upper = id.to_ascii_uppercase();
    let rest = upper
        .strip_prefix("UTC")
        .or_else(|| upper.strip_prefix("GMT"))
        .unwrap_or(&upper);

    let (sign, digits) = match rest.chars().next()? {
        '+' => (1, &rest[1..]),
        '-' => (-1, &rest[1..]),
        _ => return None,
    };

    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?),
        None if digits.len() == 4 => (digits[..2].parse().ok()?, digits[2..].parse().ok()?),
        None => (digits.parse::<i32>().ok()?, 0),
    };
    if hours > 14 || minutes >= 60 {
        return None;
    }
    Some(sign * (hours * 60 + minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_and_iana_ids() {
        let china = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(resolve("China Standard Time"), Some(china));
        assert_eq!(resolve("asia/shanghai"), Some(china));
        assert_eq!(
            resolve("Eastern Standard Time"),
            FixedOffset::west_opt(5 * 3600)
        );
        assert_eq!(resolve("India Standard Time"), FixedOffset::east_opt(330 * 60));
    }

    #[test]
    fn test_literal_offsets() {
        assert_eq!(resolve("UTC+08:00"), FixedOffset::east_opt(8 * 3600));
        assert_eq!(resolve("GMT-5"), FixedOffset::west_opt(5 * 3600));
        assert_eq!(resolve("+0530"), FixedOffset::east_opt(330 * 60));
        assert_eq!(resolve("UTC"), FixedOffset::east_opt(0));
    }

    #[test]
    fn test_unknown_zone() {
        assert_eq!(resolve("Mars/Olympus_Mons"), None);
        assert_eq!(resolve("UTC+99"), None);
    }
}
