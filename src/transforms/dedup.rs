use crate::domain::model::Record;
use std::collections::HashSet;

/// Keep the first occurrence of each distinct (name, phone) pair, preserving
/// input order. Matching is exact: no case folding or whitespace trimming
/// happens before comparison.
pub fn dedup(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert((r.name.clone(), r.phone.clone())))
        .collect()
}
