//! CSV input for the grouping command

use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::ext::datetime::parse_datetime;

/// A record as read from CSV: `id,key,time` with an optional `key` column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedRecord {
    pub id: String,
    pub key: String,
    pub time: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    id: String,
    #[serde(default)]
    key: String,
    time: String,
}

/// Rows with an unreadable time are logged and skipped
pub fn read_records<R: Read>(reader: R) -> Result<Vec<TimedRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (line, row) in reader.deserialize::<RawRecord>().enumerate() {
        let row = row?;
        match parse_datetime(&row.time) {
            Some(time) => records.push(TimedRecord {
                id: row.id,
                key: row.key,
                time,
            }),
            None => warn!("Skipping record {} on row {}: bad time '{}'", row.id, line + 1, row.time),
        }
    }
    Ok(records)
}

pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<TimedRecord>> {
    let file = std::fs::File::open(path.as_ref())?;
    read_records(file)
}
