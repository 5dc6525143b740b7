use crate::domain::model::Record;

pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Normalize every phone number toward the given international prefix.
pub fn format_phones(records: Vec<Record>, country_code: &str) -> Vec<Record> {
    records
        .into_iter()
        .map(|mut r| {
            r.phone = format_phone(&r.phone, country_code);
            r
        })
        .collect()
}

/// Best-effort prefix heuristic, not validation. First matching rule wins:
/// already prefixed, leading zero replaced, bare 10-character national
/// number prefixed, otherwise the stripped value passes through unchanged.
pub fn format_phone(raw: &str, country_code: &str) -> String {
    let stripped: String = raw.chars().filter(|c| *c != ' ' && *c != '-').collect();

    if stripped.starts_with(country_code) {
        stripped
    } else if let Some(rest) = stripped.strip_prefix('0') {
        format!("{}{}", country_code, rest)
    } else if stripped.chars().count() == 10 {
        format!("{}{}", country_code, stripped)
    } else {
        stripped
    }
}
