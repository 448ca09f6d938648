//! `chet group`

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Duration;
use serde_json::json;

use crate::config::Settings;
use crate::ext::datetime::DateTimeExt;
use crate::grouping::{group_by_key_and_time, group_by_time_proximity, load_records, TimeGroup, TimedRecord};

pub struct GroupParams {
    pub input: PathBuf,
    pub threshold_minutes: Option<i64>,
    pub by_key: bool,
    pub json: bool,
}

fn print_groups(groups: &[TimeGroup<TimedRecord>], indent: &str) {
    for group in groups {
        println!("{indent}Group {}:", group.index);
        for record in &group.items {
            println!(
                "{indent}  Record {}: {}",
                record.id,
                record.time.to_default_string()
            );
        }
    }
}

pub fn run_group_command(params: GroupParams, settings: &Settings) -> Result<()> {
    let records = load_records(&params.input)
        .with_context(|| format!("Failed to read records from {}", params.input.display()))?;
    let threshold = match params.threshold_minutes {
        Some(minutes) if minutes >= 0 => Duration::minutes(minutes),
        Some(minutes) => anyhow::bail!("Threshold must not be negative, got {}", minutes),
        None => settings.grouping.threshold(),
    };

    if params.by_key {
        let partitions =
            group_by_key_and_time(records, threshold, |r| r.key.clone(), |r| r.time);
        if params.json {
            let value: Vec<_> = partitions
                .iter()
                .map(|(key, groups)| json!({ "key": key, "groups": groups }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            for (key, groups) in &partitions {
                println!("Key {}:", key);
                print_groups(groups, "  ");
            }
        }
    } else {
        let groups = group_by_time_proximity(records, threshold, |r| r.time);
        if params.json {
            println!("{}", serde_json::to_string_pretty(&groups)?);
        } else {
            print_groups(&groups, "");
        }
    }
    Ok(())
}
