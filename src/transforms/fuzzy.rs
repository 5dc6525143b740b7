use crate::domain::model::{FuzzyGroup, Record};
use std::collections::HashSet;

/// Minimum normalized similarity for two names to be considered possible
/// duplicates.
pub const SIMILARITY_THRESHOLD: f64 = 0.85;

/// Upper bound on group size, anchor included.
pub const MAX_GROUP_SIZE: usize = 3;

/// Suggest groups of similar names. Read-only: produces a report, not a new
/// table.
///
/// For each distinct non-empty name (first-seen order) the group holds up to
/// [`MAX_GROUP_SIZE`] names scoring at or above the threshold, best match
/// first. Groups with only the anchor itself are not reported. Groups are
/// intentionally not deduplicated across anchors, so a similar pair shows up
/// once per anchor.
pub fn suggest_merges(records: &[Record]) -> Vec<FuzzyGroup> {
    let mut names: Vec<&str> = Vec::new();
    let mut seen = HashSet::new();
    for record in records {
        if record.name.is_empty() {
            continue;
        }
        if seen.insert(record.name.as_str()) {
            names.push(record.name.as_str());
        }
    }

    let mut groups = Vec::new();
    for anchor in &names {
        let mut scored: Vec<(f64, &str)> = names
            .iter()
            .map(|candidate| (strsim::normalized_levenshtein(anchor, candidate), *candidate))
            .filter(|(score, _)| *score >= SIMILARITY_THRESHOLD)
            .collect();
        // Stable sort: ties keep first-seen order.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let members: Vec<String> = scored
            .into_iter()
            .take(MAX_GROUP_SIZE)
            .map(|(_, name)| name.to_string())
            .collect();
        if members.len() > 1 {
            groups.push(FuzzyGroup { names: members });
        }
    }

    groups
}
