use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid numeric domain: {message}")]
    DomainError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

/// 錯誤分類，用於日誌與統計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    Processing,
    System,
}

/// 錯誤嚴重程度，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DomainError { .. } => ErrorCategory::Domain,
            Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::CsvError(_) | Self::SerializationError(_) | Self::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
            Self::IoError(_) | Self::ZipError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Domain | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::DomainError { .. } => {
                "Check that demand, order cost and holding cost are all positive numbers"
                    .to_string()
            }
            Self::ConfigValidationError { .. } => {
                "Review the configuration file or command line arguments".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the value supplied for '{}'", field)
            }
            Self::MissingConfigError { field } => {
                format!("Provide a value for the required field '{}'", field)
            }
            Self::CsvError(_) => {
                "Check that the policies file is well-formed CSV with the expected header"
                    .to_string()
            }
            Self::SerializationError(_) | Self::ProcessingError { .. } => {
                "Inspect the input data for malformed records".to_string()
            }
            Self::IoError(_) | Self::ZipError(_) => {
                "Check that the output path exists and is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DomainError { message } => format!("Invalid planning inputs: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad configuration value for '{}': {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Missing configuration field '{}'", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
