use crate::domain::model::{ExportFormat, InputFormat, Transform};
use crate::domain::ports::ConfigProvider;
use crate::transforms::phone::DEFAULT_COUNTRY_CODE;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_country_code, validate_file_extension, validate_non_empty_string, Validate,
};
use serde::{Deserialize, Serialize};

/// Pipeline definition loaded from a TOML file, as an alternative to CLI
/// flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub input: InputConfig,
    #[serde(default)]
    pub transform: TransformConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
    pub format: Option<InputFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformConfig {
    pub operations: Option<Vec<Transform>>,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: String,
    pub formats: Vec<ExportFormat>,
}

impl TomlConfig {
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> &str {
        &self.export.output_path
    }

    fn declared_format(&self) -> InputFormat {
        self.input.format.unwrap_or_default()
    }

    fn transforms(&self) -> &[Transform] {
        self.transform.operations.as_deref().unwrap_or(&[])
    }

    fn export_formats(&self) -> &[ExportFormat] {
        &self.export.formats
    }

    fn country_code(&self) -> &str {
        self.transform
            .country_code
            .as_deref()
            .unwrap_or(DEFAULT_COUNTRY_CODE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validate_non_empty_string("input.path", &self.input.path)?;
        if self.declared_format() == InputFormat::Auto {
            validate_file_extension("input.path", &self.input.path, &["csv", "vcf"])?;
        }
        validate_non_empty_string("export.output_path", &self.export.output_path)?;
        validate_country_code("transform.country_code", self.country_code())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
[pipeline]
name = "phone-cleanup"
description = "Dedup and normalize a phone export"

[input]
path = "contacts.vcf"
format = "vcf"

[transform]
operations = ["dedup", "format-phones"]
country_code = "+91"

[export]
output_path = "./cleaned"
formats = ["csv", "vcf"]
"#;

    #[test]
    fn test_full_config_parses() {
        let config = TomlConfig::from_str(FULL_CONFIG).unwrap();

        assert_eq!(config.pipeline.name, "phone-cleanup");
        assert_eq!(config.declared_format(), InputFormat::Vcf);
        assert_eq!(
            config.transforms(),
            &[Transform::Dedup, Transform::FormatPhones]
        );
        assert_eq!(
            config.export_formats(),
            &[ExportFormat::Csv, ExportFormat::Vcf]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_transform_table_is_optional() {
        let config = TomlConfig::from_str(
            r#"
[pipeline]
name = "passthrough"

[input]
path = "contacts.csv"

[export]
output_path = "./out"
formats = ["csv"]
"#,
        )
        .unwrap();

        assert!(config.transforms().is_empty());
        assert_eq!(config.country_code(), DEFAULT_COUNTRY_CODE);
        assert_eq!(config.declared_format(), InputFormat::Auto);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_transform_is_a_parse_error() {
        let result = TomlConfig::from_str(
            r#"
[pipeline]
name = "bad"

[input]
path = "contacts.csv"

[transform]
operations = ["merge-all"]

[export]
output_path = "./out"
formats = ["csv"]
"#,
        );

        assert!(result.is_err());
    }
}
