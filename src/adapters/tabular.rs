use crate::domain::model::Record;
use crate::utils::error::Result;
use std::collections::BTreeSet;

const NAME_COLUMN: &str = "Name";
const PHONE_COLUMN: &str = "Phone";
const EMAIL_COLUMN: &str = "Email";
const PROVIDER_COLUMN: &str = "EmailProvider";

/// Parse a delimited table with a header row into contact records.
///
/// Field mapping is by exact header name. Missing columns leave the
/// corresponding fields empty; unrecognized columns are kept as extras.
/// Rows the reader cannot decode are skipped, not fatal.
pub fn parse(raw: &[u8]) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(raw);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                tracing::debug!("Skipping unreadable row: {}", e);
                continue;
            }
        };

        let mut record = Record::default();
        for (column, value) in headers.iter().zip(row.iter()) {
            match column {
                NAME_COLUMN => record.name = value.to_string(),
                PHONE_COLUMN => record.phone = value.to_string(),
                EMAIL_COLUMN => record.email = value.to_string(),
                PROVIDER_COLUMN => record.email_provider = value.parse().ok(),
                _ => {
                    record.extras.insert(column.to_string(), value.to_string());
                }
            }
        }
        records.push(record);
    }

    Ok(records)
}

/// Serialize records as CSV with a deterministic column order:
/// `Name,Phone,Email`, then `EmailProvider` when any record carries the tag,
/// then extra columns sorted by name.
pub fn serialize(records: &[Record]) -> Result<Vec<u8>> {
    let include_provider = records.iter().any(|r| r.email_provider.is_some());
    let extra_columns: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.extras.keys().map(String::as_str))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec![NAME_COLUMN, PHONE_COLUMN, EMAIL_COLUMN];
    if include_provider {
        header.push(PROVIDER_COLUMN);
    }
    header.extend(extra_columns.iter().copied());
    writer.write_record(&header)?;

    for record in records {
        let mut row = vec![
            record.name.clone(),
            record.phone.clone(),
            record.email.clone(),
        ];
        if include_provider {
            row.push(
                record
                    .email_provider
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default(),
            );
        }
        for column in &extra_columns {
            row.push(record.extras.get(*column).cloned().unwrap_or_default());
        }
        writer.write_record(&row)?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}
