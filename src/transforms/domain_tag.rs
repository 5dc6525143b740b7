use crate::domain::model::{EmailProvider, Record};

/// Tag every record with an email-provider classification. Pure annotation:
/// no rows are added, removed or reordered.
pub fn tag_domains(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .map(|mut r| {
            r.email_provider = Some(classify(&r.email));
            r
        })
        .collect()
}

/// Substring checks, not validated domain matches. The Gmail check runs
/// before the Yahoo check, so an address containing both tags as Gmail.
fn classify(email: &str) -> EmailProvider {
    if email.is_empty() {
        EmailProvider::Unknown
    } else if email.contains("gmail") {
        EmailProvider::Gmail
    } else if email.contains("yahoo") {
        EmailProvider::Yahoo
    } else {
        EmailProvider::Other
    }
}
