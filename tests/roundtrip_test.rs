use contact_cleaner::adapters::{tabular, vcard};
use contact_cleaner::domain::model::Record;
use contact_cleaner::transforms::{dedup, tag_domains};

fn record(name: &str, phone: &str, email: &str) -> Record {
    Record {
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_vcard_export_reimports_to_the_same_contacts() {
    let records = vec![
        record("John Smith", "+919876543210", "john@gmail.com"),
        // Empty email: the EMAIL line is omitted on export and must come
        // back as an empty field, not an error.
        record("Jon Smith", "9876543211", ""),
        record("", "", ""),
    ];

    let reparsed = vcard::parse(&vcard::serialize(&records)).unwrap();
    assert_eq!(records, reparsed);
}

#[test]
fn test_tabular_export_reimports_after_tagging() {
    let records = tag_domains(vec![
        record("Alice", "111", "alice@gmail.com"),
        record("Bob", "222", ""),
    ]);

    let bytes = tabular::serialize(&records).unwrap();
    let reparsed = tabular::parse(&bytes).unwrap();
    assert_eq!(records, reparsed);
}

#[test]
fn test_cross_format_conversion_keeps_contact_fields() {
    let raw = b"Name,Phone,Email\nAlice,111,alice@gmail.com\nBob,222,\n";
    let from_csv = tabular::parse(raw).unwrap();

    let via_vcard = vcard::parse(&vcard::serialize(&from_csv)).unwrap();
    assert_eq!(from_csv, via_vcard);
}

#[test]
fn test_dedup_survives_a_round_trip() {
    let records = vec![
        record("Alice", "111", "a@gmail.com"),
        record("Alice", "111", "a@gmail.com"),
        record("Bob", "222", ""),
    ];

    let deduped = dedup(records);
    let reparsed = vcard::parse(&vcard::serialize(&deduped)).unwrap();
    assert_eq!(deduped, reparsed);
    assert_eq!(dedup(reparsed.clone()), reparsed);
}
