// Adapters layer: the two contact wire formats (parse + serialize each).

pub mod tabular;
pub mod vcard;

use crate::domain::model::InputFormat;
use crate::utils::error::{CleanerError, Result};
use std::path::Path;

/// Resolve an `Auto` format hint against the input file extension.
pub fn resolve_format(declared: InputFormat, path: &str) -> Result<InputFormat> {
    if declared != InputFormat::Auto {
        return Ok(declared);
    }

    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(InputFormat::Csv),
        Some(ext) if ext.eq_ignore_ascii_case("vcf") => Ok(InputFormat::Vcf),
        _ => Err(CleanerError::FormatError {
            message: format!("cannot infer contact format from '{}'", path),
        }),
    }
}
