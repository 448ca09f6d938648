//! Time-proximity grouping
//!
//! Records are sorted by timestamp and walked once. Each record joins the
//! first group whose most recent member is no more than `threshold` earlier,
//! otherwise it opens a new group. Groups never merge or rebalance.

pub mod records;

pub use records::{load_records, read_records, TimedRecord};

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

/// One bucket of records; `index` is its creation order, starting at 0
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeGroup<T> {
    pub index: usize,
    pub items: Vec<T>,
}

impl<T> TimeGroup<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Group records whose timestamps chain together within `threshold` (inclusive)
pub fn group_by_time_proximity<T, I, F>(
    records: I,
    threshold: Duration,
    mut time_of: F,
) -> Vec<TimeGroup<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> NaiveDateTime,
{
    let mut ordered: Vec<(NaiveDateTime, T)> =
        records.into_iter().map(|r| (time_of(&r), r)).collect();
    ordered.sort_by_key(|(at, _)| *at);

    // (time of the last member, members)
    let mut groups: Vec<(NaiveDateTime, Vec<T>)> = Vec::new();
    for (at, record) in ordered {
        match groups
            .iter_mut()
            .find(|(last, _)| at.signed_duration_since(*last) <= threshold)
        {
            Some((last, members)) => {
                *last = at;
                members.push(record);
            }
            None => groups.push((at, vec![record])),
        }
    }

    debug!("Formed {} time groups", groups.len());
    groups
        .into_iter()
        .enumerate()
        .map(|(index, (_, items))| TimeGroup { index, items })
        .collect()
}

/// Partition by `key` first (keys in first-seen order), then group each
/// partition by time proximity
pub fn group_by_key_and_time<T, K, I, FK, FT>(
    records: I,
    threshold: Duration,
    mut key_of: FK,
    mut time_of: FT,
) -> Vec<(K, Vec<TimeGroup<T>>)>
where
    K: PartialEq,
    I: IntoIterator<Item = T>,
    FK: FnMut(&T) -> K,
    FT: FnMut(&T) -> NaiveDateTime,
{
    let mut partitions: Vec<(K, Vec<T>)> = Vec::new();
    for record in records {
        let key = key_of(&record);
        match partitions.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(record),
            None => partitions.push((key, vec![record])),
        }
    }

    partitions
        .into_iter()
        .map(|(key, members)| {
            let groups = group_by_time_proximity(members, threshold, &mut time_of);
            (key, groups)
        })
        .collect()
}
