use crate::domain::model::Record;
use crate::utils::error::Result;
use thiserror::Error;

const BEGIN_MARKER: &str = "BEGIN:VCARD";
const END_MARKER: &str = "END:VCARD";

/// Failure local to a single vCard block. Recovered by dropping the block;
/// never surfaced to the caller.
#[derive(Error, Debug)]
enum BlockError {
    #[error("missing {BEGIN_MARKER} marker")]
    MissingBegin,

    #[error("property line without ':' separator: {0}")]
    MalformedProperty(String),
}

/// Parse a document of concatenated vCard blocks.
///
/// The document is split on the end marker and each non-empty fragment is
/// parsed independently, so one malformed block never aborts its siblings.
/// A document where every block was dropped still parses to an empty table.
pub fn parse(raw: &[u8]) -> Result<Vec<Record>> {
    let text = String::from_utf8(raw.to_vec())?;

    let mut records = Vec::new();
    let mut blocks_seen = 0usize;
    for fragment in text.trim().split(END_MARKER) {
        if fragment.trim().is_empty() {
            continue;
        }
        blocks_seen += 1;
        match parse_block(fragment) {
            Ok(record) => records.push(record),
            Err(e) => tracing::debug!("Dropping malformed vCard block: {}", e),
        }
    }

    if blocks_seen > 0 && records.is_empty() {
        tracing::warn!(
            "All {} vCard blocks were malformed, parsed table is empty",
            blocks_seen
        );
    }

    Ok(records)
}

/// Parse one reconstituted block. Takes the first FN/TEL/EMAIL value each;
/// properties absent from the card become empty fields.
fn parse_block(fragment: &str) -> std::result::Result<Record, BlockError> {
    let mut in_card = false;
    let mut name: Option<String> = None;
    let mut phone: Option<String> = None;
    let mut email: Option<String> = None;

    for line in fragment.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case(BEGIN_MARKER) {
            in_card = true;
            continue;
        }
        if !in_card {
            continue;
        }

        let (property, value) = line
            .split_once(':')
            .ok_or_else(|| BlockError::MalformedProperty(line.to_string()))?;
        // Parameters (TEL;TYPE=CELL:...) are ignored, only the name matters.
        let property = property.split(';').next().unwrap_or(property);

        if property.eq_ignore_ascii_case("FN") && name.is_none() {
            name = Some(value.to_string());
        } else if property.eq_ignore_ascii_case("TEL") && phone.is_none() {
            phone = Some(value.to_string());
        } else if property.eq_ignore_ascii_case("EMAIL") && email.is_none() {
            email = Some(value.to_string());
        }
    }

    if !in_card {
        return Err(BlockError::MissingBegin);
    }

    Ok(Record {
        name: name.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        email: email.unwrap_or_default(),
        ..Default::default()
    })
}

/// Serialize records as a concatenated vCard 3.0 document.
///
/// The EMAIL line is omitted entirely for records without an email. Values
/// are inserted verbatim, no escaping is applied.
pub fn serialize(records: &[Record]) -> Vec<u8> {
    let mut out = String::new();
    for record in records {
        out.push_str(BEGIN_MARKER);
        out.push('\n');
        out.push_str("VERSION:3.0\n");
        out.push_str(&format!("FN:{}\n", record.name));
        out.push_str(&format!("TEL:{}\n", record.phone));
        if !record.email.is_empty() {
            out.push_str(&format!("EMAIL:{}\n", record.email));
        }
        out.push_str(END_MARKER);
        out.push('\n');
    }
    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiple_blocks_in_document_order() {
        let raw = b"BEGIN:VCARD\nVERSION:3.0\nFN:Alice\nTEL:123\nEMAIL:alice@gmail.com\nEND:VCARD\nBEGIN:VCARD\nVERSION:3.0\nFN:Bob\nTEL:456\nEND:VCARD\n";
        let records = parse(raw).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[0].email, "alice@gmail.com");
        assert_eq!(records[1].name, "Bob");
        assert_eq!(records[1].email, "");
    }

    #[test]
    fn test_parse_takes_first_of_repeated_properties() {
        let raw = b"BEGIN:VCARD\nFN:Alice\nTEL;TYPE=CELL:111\nTEL;TYPE=HOME:222\nEND:VCARD\n";
        let records = parse(raw).unwrap();
        assert_eq!(records[0].phone, "111");
    }

    #[test]
    fn test_malformed_block_does_not_abort_siblings() {
        // Middle block has a garbage property line, last block lacks BEGIN.
        let raw = b"BEGIN:VCARD\nFN:Alice\nEND:VCARD\nBEGIN:VCARD\nthis is not a property\nEND:VCARD\nFN:Orphan\nEND:VCARD\nBEGIN:VCARD\nFN:Bob\nEND:VCARD\n";
        let records = parse(raw).unwrap();

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_all_blocks_malformed_is_empty_success() {
        let raw = b"garbage line\nEND:VCARD\nmore garbage\nEND:VCARD\n";
        let records = parse(raw).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_document_parses_to_empty_table() {
        assert!(parse(b"").unwrap().is_empty());
        assert!(parse(b"   \n  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_utf8_document() {
        assert!(parse(b"\xff\xfeBEGIN:VCARD").is_err());
    }

    #[test]
    fn test_serialize_omits_email_line_when_empty() {
        let records = vec![
            Record {
                name: "Alice".to_string(),
                phone: "123".to_string(),
                email: "alice@gmail.com".to_string(),
                ..Default::default()
            },
            Record {
                name: "Bob".to_string(),
                phone: "456".to_string(),
                ..Default::default()
            },
        ];

        let text = String::from_utf8(serialize(&records)).unwrap();
        assert_eq!(
            text,
            "BEGIN:VCARD\nVERSION:3.0\nFN:Alice\nTEL:123\nEMAIL:alice@gmail.com\nEND:VCARD\nBEGIN:VCARD\nVERSION:3.0\nFN:Bob\nTEL:456\nEND:VCARD\n"
        );
    }

    #[test]
    fn test_round_trip_keeps_contact_fields() {
        let records = vec![
            Record {
                name: "Alice".to_string(),
                phone: "+919876543210".to_string(),
                email: "alice@gmail.com".to_string(),
                ..Default::default()
            },
            Record {
                name: "Bob".to_string(),
                phone: "456".to_string(),
                // Empty email: the line is omitted and must parse back as
                // empty, not as an error.
                ..Default::default()
            },
        ];

        let reparsed = parse(&serialize(&records)).unwrap();
        assert_eq!(records, reparsed);
    }
}
