//! Helpers for optional slices, iterators and vectors

use std::collections::HashSet;
use std::hash::Hash;

use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Result;
use crate::table::DataTable;

/// Null-safe queries over an optional slice
pub trait OptionSliceExt<T> {
    fn is_null_or_empty(&self) -> bool;
    fn is_not_empty(&self) -> bool;
    fn safe_count(&self) -> usize;
    fn first_or_default(&self) -> T
    where
        T: Clone + Default;
    fn last_or_default(&self) -> T
    where
        T: Clone + Default;
    fn contains_safe(&self, item: &T) -> bool
    where
        T: PartialEq;
    fn to_vec_safe(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T> OptionSliceExt<T> for Option<&[T]> {
    fn is_null_or_empty(&self) -> bool {
        self.map_or(true, <[T]>::is_empty)
    }

    fn is_not_empty(&self) -> bool {
        !self.is_null_or_empty()
    }

    fn safe_count(&self) -> usize {
        self.map_or(0, <[T]>::len)
    }

    fn first_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.and_then(<[T]>::first).cloned().unwrap_or_default()
    }

    fn last_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.and_then(<[T]>::last).cloned().unwrap_or_default()
    }

    fn contains_safe(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.is_some_and(|s| s.contains(item))
    }

    fn to_vec_safe(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.map(<[T]>::to_vec).unwrap_or_default()
    }
}

pub trait IterExt: Iterator + Sized {
    /// Zero-based page; empty for a zero page size
    fn page(self, page_index: usize, page_size: usize) -> Vec<Self::Item> {
        if page_size == 0 {
            return Vec::new();
        }
        self.skip(page_index.saturating_mul(page_size))
            .take(page_size)
            .collect()
    }

    /// Consecutive chunks of `size`; the last one may be shorter
    fn chunked(self, size: usize) -> Vec<Vec<Self::Item>> {
        if size == 0 {
            return Vec::new();
        }
        let mut chunks = Vec::new();
        let mut chunk = Vec::with_capacity(size);
        for item in self {
            chunk.push(item);
            if chunk.len() == size {
                chunks.push(std::mem::replace(&mut chunk, Vec::with_capacity(size)));
            }
        }
        if !chunk.is_empty() {
            chunks.push(chunk);
        }
        chunks
    }

    /// Drop repeats, keeping the first occurrence of each item
    fn distinct_stable(self) -> Vec<Self::Item>
    where
        Self::Item: Eq + Hash + Clone,
    {
        let mut seen = HashSet::new();
        self.filter(|item| seen.insert(item.clone())).collect()
    }

    /// Groups in the order their keys are first seen
    fn group_by_key<K, F>(self, mut key: F) -> Vec<(K, Vec<Self::Item>)>
    where
        K: PartialEq,
        F: FnMut(&Self::Item) -> K,
    {
        let mut groups: Vec<(K, Vec<Self::Item>)> = Vec::new();
        for item in self {
            let k = key(&item);
            match groups.iter_mut().find(|(existing, _)| *existing == k) {
                Some((_, members)) => members.push(item),
                None => groups.push((k, vec![item])),
            }
        }
        groups
    }

    /// Stable ascending sort by key
    fn order_by<K, F>(self, key: F) -> Vec<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let mut items: Vec<_> = self.collect();
        items.sort_by_key(key);
        items
    }

    /// Stable descending sort by key
    fn order_by_descending<K, F>(self, mut key: F) -> Vec<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let mut items: Vec<_> = self.collect();
        items.sort_by(|a, b| key(b).cmp(&key(a)));
        items
    }

    fn to_hash_set(self) -> HashSet<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        self.collect()
    }

    /// Concurrent map keyed by `key`; the first item wins on duplicate keys
    fn to_concurrent_map<K, V, FK, FV>(self, mut key: FK, mut value: FV) -> DashMap<K, V>
    where
        K: Eq + Hash,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
    {
        let map = DashMap::new();
        for item in self {
            map.entry(key(&item)).or_insert_with(|| value(item));
        }
        map
    }

    /// One row per item, one column per serialized field
    fn to_data_table(self, name: &str) -> Result<DataTable>
    where
        Self::Item: Serialize,
    {
        DataTable::from_serializable(name, self)
    }
}

impl<I: Iterator> IterExt for I {}

/// Aggregates that are zero for an empty input
pub trait NumericAggregate {
    type Value;
    type Average;

    fn sum_or_zero(&self) -> Self::Value;
    fn average_or_zero(&self) -> Self::Average;
    fn max_or_zero(&self) -> Self::Value;
    fn min_or_zero(&self) -> Self::Value;
}

macro_rules! impl_float_aggregate {
    ($t:ty) => {
        impl NumericAggregate for [$t] {
            type Value = $t;
            type Average = $t;

            fn sum_or_zero(&self) -> $t {
                self.iter().sum()
            }

            fn average_or_zero(&self) -> $t {
                if self.is_empty() {
                    0.0
                } else {
                    self.sum_or_zero() / self.len() as $t
                }
            }

            fn max_or_zero(&self) -> $t {
                self.iter().copied().reduce(<$t>::max).unwrap_or(0.0)
            }

            fn min_or_zero(&self) -> $t {
                self.iter().copied().reduce(<$t>::min).unwrap_or(0.0)
            }
        }
    };
}

impl_float_aggregate!(f32);
impl_float_aggregate!(f64);

impl NumericAggregate for [i32] {
    type Value = i64;
    type Average = f64;

    /// Widened so large inputs cannot overflow
    fn sum_or_zero(&self) -> i64 {
        self.iter().map(|&v| v as i64).sum()
    }

    fn average_or_zero(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.sum_or_zero() as f64 / self.len() as f64
        }
    }

    fn max_or_zero(&self) -> i64 {
        self.iter().max().map_or(0, |&v| v as i64)
    }

    fn min_or_zero(&self) -> i64 {
        self.iter().min().map_or(0, |&v| v as i64)
    }
}

impl NumericAggregate for [Decimal] {
    type Value = Decimal;
    type Average = Decimal;

    /// Saturates at `Decimal::MAX` or `Decimal::MIN` in the direction of the overflow
    fn sum_or_zero(&self) -> Decimal {
        let mut sum = Decimal::ZERO;
        for value in self {
            match sum.checked_add(*value) {
                Some(next) => sum = next,
                None if value.is_sign_negative() => return Decimal::MIN,
                None => return Decimal::MAX,
            }
        }
        sum
    }

    fn average_or_zero(&self) -> Decimal {
        if self.is_empty() {
            return Decimal::ZERO;
        }
        self.sum_or_zero()
            .checked_div(Decimal::from(self.len()))
            .unwrap_or(Decimal::ZERO)
    }

    fn max_or_zero(&self) -> Decimal {
        self.iter().max().copied().unwrap_or(Decimal::ZERO)
    }

    fn min_or_zero(&self) -> Decimal {
        self.iter().min().copied().unwrap_or(Decimal::ZERO)
    }
}

pub trait VecExt<T> {
    fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I);
    /// Remove the first equal item; false when absent
    fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq;
    /// Remove the first occurrence of each listed item
    fn remove_range<'a, I>(&mut self, items: I)
    where
        T: PartialEq + 'a,
        I: IntoIterator<Item = &'a T>;
}

impl<T> VecExt<T> for Vec<T> {
    fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.extend(items);
    }

    fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.iter().position(|x| x == item) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    fn remove_range<'a, I>(&mut self, items: I)
    where
        T: PartialEq + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for item in items {
            self.remove_item(item);
        }
    }
}
