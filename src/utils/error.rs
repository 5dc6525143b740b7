use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML configuration error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Input is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("Format error: {message}")]
    FormatError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CleanerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CleanerError::CsvError(_)
            | CleanerError::EncodingError(_)
            | CleanerError::FormatError { .. } => ErrorCategory::Input,
            CleanerError::TomlError(_) | CleanerError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            CleanerError::IoError(_) | CleanerError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CleanerError::CsvError(_) | CleanerError::FormatError { .. } => {
                format!("The contact file could not be read: {}", self)
            }
            CleanerError::EncodingError(_) => {
                "The contact file is not valid UTF-8 text".to_string()
            }
            CleanerError::TomlError(_) => format!("The pipeline config file is invalid: {}", self),
            CleanerError::InvalidConfigValueError { .. } => self.to_string(),
            CleanerError::IoError(_) | CleanerError::SerializationError(_) => {
                format!("Could not write the output: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Check that the input file is a CSV with a header row or a vCard (.vcf) document"
            }
            ErrorCategory::Config => "Check the CLI flags or the TOML pipeline definition",
            ErrorCategory::Output => "Check that the output directory exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanerError>;
