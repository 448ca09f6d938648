//! The fixed 48-byte SNTP exchange
//!
//! The request is all zeros apart from the first byte (leap indicator 0,
//! version 3, mode 3 = client). The reply's transmit timestamp sits at bytes
//! 40..48 as big-endian seconds and a 32-bit binary fraction, counted from
//! 1900-01-01 UTC.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::error::{ChetError, Result};

pub const PACKET_LEN: usize = 48;
pub const NTP_PORT: u16 = 123;

/// LI = 0, VN = 3, Mode = 3
const CLIENT_HEADER: u8 = 0x1B;
const TRANSMIT_OFFSET: usize = 40;

pub fn request_packet() -> [u8; PACKET_LEN] {
    let mut packet = [0u8; PACKET_LEN];
    packet[0] = CLIENT_HEADER;
    packet
}

/// 1900-01-01 00:00:00 UTC
pub fn ntp_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1900, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Milliseconds since the NTP epoch carried in the transmit timestamp
pub fn transmit_millis(response: &[u8]) -> Result<u64> {
    if response.len() < PACKET_LEN {
        return Err(ChetError::NtpResponse(format!(
            "expected {} bytes, got {}",
            PACKET_LEN,
            response.len()
        )));
    }

    let word = |at: usize| {
        u32::from_be_bytes([
            response[at],
            response[at + 1],
            response[at + 2],
            response[at + 3],
        ]) as u64
    };
    let seconds = word(TRANSMIT_OFFSET);
    let fraction = word(TRANSMIT_OFFSET + 4);
    if seconds == 0 {
        return Err(ChetError::NtpResponse("transmit timestamp is zero".to_string()));
    }

    Ok(seconds * 1000 + (fraction * 1000) / (1u64 << 32))
}

/// Transmit timestamp of a reply as a UTC wall-clock value
pub fn decode_response(response: &[u8]) -> Result<NaiveDateTime> {
    let millis = transmit_millis(response)?;
    let offset = i64::try_from(millis)
        .map(Duration::milliseconds)
        .map_err(|_| ChetError::NtpResponse("timestamp out of range".to_string()))?;
    ntp_epoch()
        .checked_add_signed(offset)
        .ok_or_else(|| ChetError::NtpResponse("timestamp out of range".to_string()))
}

/// Build a reply carrying `utc` as its transmit timestamp
pub fn encode_transmit(utc: NaiveDateTime) -> [u8; PACKET_LEN] {
    let since_epoch = utc.signed_duration_since(ntp_epoch());
    let seconds = since_epoch.num_seconds().clamp(0, u32::MAX as i64) as u32;
    let sub_millis = since_epoch.num_milliseconds() - since_epoch.num_seconds() * 1000;
    // Round up so decoding truncates back to the same millisecond
    let fraction = ((sub_millis.max(0) as u64) << 32).div_ceil(1000).min(u32::MAX as u64) as u32;

    let mut packet = [0u8; PACKET_LEN];
    packet[0] = 0x1C; // LI = 0, VN = 3, Mode = 4 (server)
    packet[TRANSMIT_OFFSET..TRANSMIT_OFFSET + 4].copy_from_slice(&seconds.to_be_bytes());
    packet[TRANSMIT_OFFSET + 4..].copy_from_slice(&fraction.to_be_bytes());
    packet
}
