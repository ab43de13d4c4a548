//! Derived aggregates over a record sequence.
//!
//! Every function recomputes from scratch; there is no caching. Datasets on
//! the dashboard stay well under a hundred records, so linear passes are fine.

use std::collections::HashMap;

/// Number of records satisfying `predicate`.
pub fn count_where<R>(records: &[R], predicate: impl Fn(&R) -> bool) -> usize {
    records.iter().filter(|r| predicate(r)).count()
}

/// Sum of `field` across all records.
pub fn sum<R>(records: &[R], field: impl Fn(&R) -> f64) -> f64 {
    records.iter().map(field).sum()
}

/// Mean of `field` across all records; 0.0 for an empty sequence.
///
/// The zero sentinel keeps NaN out of display code and matches how the
/// dashboard renders "no data yet" panels.
pub fn average<R>(records: &[R], field: impl Fn(&R) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    sum(records, field) / records.len() as f64
}

/// Count of records per distinct value of `key`.
pub fn group_count<R>(records: &[R], key: impl Fn(&R) -> String) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}
