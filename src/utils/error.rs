use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DigestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DigestError::ConfigError { .. }
            | DigestError::InvalidConfigValueError { .. }
            | DigestError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DigestError::TomlError(_)
            | DigestError::CsvError(_)
            | DigestError::ValidationError { .. } => ErrorCategory::Data,
            DigestError::IoError(_) | DigestError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DigestError::ValidationError { .. } => ErrorSeverity::Medium,
            DigestError::SerializationError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DigestError::IoError(_) => "Check that the catalog and output paths exist and are accessible",
            DigestError::SerializationError(_) => "Report this as a bug: the digest could not be serialized",
            DigestError::TomlError(_) => "Fix the TOML syntax in the catalog file",
            DigestError::CsvError(_) => "Make sure the CSV catalog has a 'name,city,price' header",
            DigestError::ConfigError { .. } | DigestError::InvalidConfigValueError { .. } => {
                "Review the command line arguments with --help"
            }
            DigestError::MissingConfigError { .. } => "Provide the missing value on the command line",
            DigestError::ValidationError { .. } => "Correct the offending catalog entry and retry",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DigestError::IoError(e) => format!("Could not access a file: {}", e),
            DigestError::TomlError(_) | DigestError::CsvError(_) => {
                format!("The catalog file could not be read: {}", self)
            }
            DigestError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;
