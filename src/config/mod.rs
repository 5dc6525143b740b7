pub mod cli;
pub mod toml_config;

use crate::domain::model::{ExportFormat, InputFormat, Transform};
use crate::domain::ports::ConfigProvider;
use crate::transforms::phone::DEFAULT_COUNTRY_CODE;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_country_code, validate_file_extension, validate_non_empty_string, Validate,
};
use clap::Parser;

pub use toml_config::TomlConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "contact-cleaner")]
#[command(about = "Import, clean and export contact lists (CSV / vCard)")]
pub struct CliConfig {
    /// Contact file to process (.csv or .vcf)
    #[arg(required_unless_present = "config")]
    pub input: Option<String>,

    /// Input format; `auto` infers it from the file extension
    #[arg(long, default_value = "auto")]
    pub format: InputFormat,

    /// Transforms to apply, in order: dedup, tag-domains, format-phones,
    /// suggest-merges
    #[arg(long, value_delimiter = ',')]
    pub transforms: Vec<Transform>,

    /// Export formats to write: csv, vcf
    #[arg(long, value_delimiter = ',', default_value = "csv")]
    pub export: Vec<ExportFormat>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// International prefix applied by the phone formatting transform
    #[arg(long, default_value = DEFAULT_COUNTRY_CODE)]
    pub country_code: String,

    /// TOML pipeline definition; replaces the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn declared_format(&self) -> InputFormat {
        self.format
    }

    fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    fn export_formats(&self) -> &[ExportFormat] {
        &self.export
    }

    fn country_code(&self) -> &str {
        &self.country_code
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input", self.input_path())?;
        if self.format == InputFormat::Auto {
            validate_file_extension("input", self.input_path(), &["csv", "vcf"])?;
        }
        validate_non_empty_string("output_path", &self.output_path)?;
        validate_country_code("country_code", &self.country_code)?;
        Ok(())
    }
}
