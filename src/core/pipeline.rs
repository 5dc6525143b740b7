use crate::adapters::{self, tabular, vcard};
use crate::core::{ConfigProvider, Pipeline, Record, Storage, TransformReport, TransformResult};
use crate::domain::model::{ExportFormat, InputFormat, Transform};
use crate::transforms::{dedup, format_phones, suggest_merges, tag_domains};
use crate::utils::error::Result;

pub const CSV_OUTPUT_FILE: &str = "contacts_cleaned.csv";
pub const VCF_OUTPUT_FILE: &str = "contacts.vcf";
pub const SUGGESTIONS_FILE: &str = "merge_suggestions.json";

pub struct ContactPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ContactPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ContactPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading contact file: {}", input_path);
        let raw = self.storage.read_file(input_path).await?;

        let format = adapters::resolve_format(self.config.declared_format(), input_path)?;
        tracing::debug!("Parsing as {} ({} bytes)", format, raw.len());

        let records = match format {
            InputFormat::Csv => tabular::parse(&raw)?,
            InputFormat::Vcf => vcard::parse(&raw)?,
            // resolve_format never returns Auto.
            InputFormat::Auto => unreachable!("declared format was not resolved"),
        };

        tracing::info!("File loaded successfully, {} contacts", records.len());
        Ok(records)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let mut records = data;
        let mut report = TransformReport::default();

        for transform in self.config.transforms() {
            match transform {
                Transform::Dedup => {
                    records = dedup(records);
                    report.dedup_remaining = Some(records.len());
                    tracing::info!("Duplicate contacts removed. {} remaining.", records.len());
                }
                Transform::TagDomains => {
                    records = tag_domains(records);
                    report.domains_tagged = true;
                    tracing::info!("Tagged email domains.");
                }
                Transform::FormatPhones => {
                    records = format_phones(records, self.config.country_code());
                    report.phones_formatted = true;
                    tracing::info!("Phone numbers formatted.");
                }
                Transform::SuggestMerges => {
                    let groups = suggest_merges(&records);
                    if groups.is_empty() {
                        tracing::info!("No fuzzy duplicates found.");
                    }
                    for group in &groups {
                        tracing::warn!("Similar contacts: {}", group.names.join(", "));
                    }
                    report.merge_suggestions = Some(groups);
                }
            }
        }

        Ok(TransformResult { records, report })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        for format in self.config.export_formats() {
            match format {
                ExportFormat::Csv => {
                    let bytes = tabular::serialize(&result.records)?;
                    tracing::debug!("Writing {} ({} bytes)", CSV_OUTPUT_FILE, bytes.len());
                    self.storage.write_file(CSV_OUTPUT_FILE, &bytes).await?;
                }
                ExportFormat::Vcf => {
                    let bytes = vcard::serialize(&result.records);
                    tracing::debug!("Writing {} ({} bytes)", VCF_OUTPUT_FILE, bytes.len());
                    self.storage.write_file(VCF_OUTPUT_FILE, &bytes).await?;
                }
            }
        }

        if let Some(groups) = &result.report.merge_suggestions {
            if !groups.is_empty() {
                let json = serde_json::to_string_pretty(groups)?;
                tracing::debug!("Writing {} ({} groups)", SUGGESTIONS_FILE, groups.len());
                self.storage
                    .write_file(SUGGESTIONS_FILE, json.as_bytes())
                    .await?;
            }
        }

        Ok(self.config.output_path().to_string())
    }
}
