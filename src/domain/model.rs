use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One contact entry flowing through the pipeline.
///
/// Absent fields are empty strings, never parse failures. A contact has no
/// identity beyond its field values: dedup compares (name, phone), fuzzy
/// matching compares names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Set by the domain-tagging transform, absent until it runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_provider: Option<EmailProvider>,
    /// Columns from a tabular import that are not part of the contact model.
    /// Preserved on export, never interpreted.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
}

/// Closed set of email-provider tags produced by domain tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailProvider {
    Unknown,
    Gmail,
    Yahoo,
    Other,
}

impl EmailProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailProvider::Unknown => "Unknown",
            EmailProvider::Gmail => "Gmail",
            EmailProvider::Yahoo => "Yahoo",
            EmailProvider::Other => "Other",
        }
    }
}

impl fmt::Display for EmailProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("empty provider tag".to_string()),
            "Unknown" => Ok(EmailProvider::Unknown),
            "Gmail" => Ok(EmailProvider::Gmail),
            "Yahoo" => Ok(EmailProvider::Yahoo),
            _ => Ok(EmailProvider::Other),
        }
    }
}

/// The cleanup operations a caller can select, applied in the order given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    Dedup,
    TagDomains,
    FormatPhones,
    SuggestMerges,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transform::Dedup => "dedup",
            Transform::TagDomains => "tag-domains",
            Transform::FormatPhones => "format-phones",
            Transform::SuggestMerges => "suggest-merges",
        };
        f.write_str(name)
    }
}

impl FromStr for Transform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dedup" => Ok(Transform::Dedup),
            "tag-domains" => Ok(Transform::TagDomains),
            "format-phones" => Ok(Transform::FormatPhones),
            "suggest-merges" => Ok(Transform::SuggestMerges),
            other => Err(format!(
                "unknown transform '{}' (expected dedup, tag-domains, format-phones or suggest-merges)",
                other
            )),
        }
    }
}

/// Declared input format. `Auto` is resolved against the file extension
/// before parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    #[default]
    Auto,
    Csv,
    Vcf,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputFormat::Auto => "auto",
            InputFormat::Csv => "csv",
            InputFormat::Vcf => "vcf",
        };
        f.write_str(name)
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(InputFormat::Auto),
            "csv" => Ok(InputFormat::Csv),
            "vcf" => Ok(InputFormat::Vcf),
            other => Err(format!(
                "unknown input format '{}' (expected auto, csv or vcf)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    Csv,
    Vcf,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Vcf => "vcf",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "vcf" => Ok(ExportFormat::Vcf),
            other => Err(format!(
                "unknown export format '{}' (expected csv or vcf)",
                other
            )),
        }
    }
}

/// Names judged similar enough to be duplicates of one anchor name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyGroup {
    pub names: Vec<String>,
}

/// Per-transform outcomes, reported alongside the processed records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransformReport {
    pub dedup_remaining: Option<usize>,
    pub domains_tagged: bool,
    pub phones_formatted: bool,
    pub merge_suggestions: Option<Vec<FuzzyGroup>>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<Record>,
    pub report: TransformReport,
}
