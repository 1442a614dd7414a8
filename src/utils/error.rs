use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML processing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Processing,
    Serialization,
    Rendering,
}

impl DiagramError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DiagramError::IoError(_) | DiagramError::ZipError(_) => ErrorSeverity::Critical,
            DiagramError::ConfigError { .. }
            | DiagramError::ConfigValidationError { .. }
            | DiagramError::InvalidConfigValueError { .. }
            | DiagramError::MissingConfigError { .. } => ErrorSeverity::Medium,
            DiagramError::ProcessingError { .. }
            | DiagramError::YamlError(_)
            | DiagramError::SerializationError(_)
            | DiagramError::CsvError(_)
            | DiagramError::RenderError { .. } => ErrorSeverity::High,
            DiagramError::ValidationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DiagramError::IoError(_) | DiagramError::ZipError(_) => ErrorCategory::Io,
            DiagramError::ConfigError { .. }
            | DiagramError::ConfigValidationError { .. }
            | DiagramError::InvalidConfigValueError { .. }
            | DiagramError::MissingConfigError { .. } => ErrorCategory::Config,
            DiagramError::ProcessingError { .. } | DiagramError::ValidationError { .. } => {
                ErrorCategory::Processing
            }
            DiagramError::YamlError(_)
            | DiagramError::SerializationError(_)
            | DiagramError::CsvError(_) => ErrorCategory::Serialization,
            DiagramError::RenderError { .. } => ErrorCategory::Rendering,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DiagramError::IoError(_) => {
                "Check that the scan directory and output path exist and are accessible".to_string()
            }
            DiagramError::ZipError(_) => {
                "Check disk space and permissions on the output path".to_string()
            }
            DiagramError::ConfigError { .. }
            | DiagramError::ConfigValidationError { .. }
            | DiagramError::InvalidConfigValueError { .. } => {
                "Review the command line arguments or TOML configuration file".to_string()
            }
            DiagramError::MissingConfigError { field } => {
                format!("Add the '{}' field to the configuration", field)
            }
            DiagramError::ProcessingError { .. } => {
                "Check that the Terraform files contain valid resource blocks".to_string()
            }
            DiagramError::ValidationError { .. } => {
                "Inspect the generated diagram document for missing nodes".to_string()
            }
            DiagramError::YamlError(_)
            | DiagramError::SerializationError(_)
            | DiagramError::CsvError(_) => {
                "The diagram document could not be serialized; re-run with --verbose for details"
                    .to_string()
            }
            DiagramError::RenderError { .. } => {
                "Check the diagram document for nodes without identifiers".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DiagramError::IoError(e) => format!("File system problem: {}", e),
            DiagramError::ZipError(e) => format!("Could not create the output archive: {}", e),
            DiagramError::ConfigError { message } => format!("Configuration problem: {}", message),
            DiagramError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            DiagramError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            DiagramError::MissingConfigError { field } => {
                format!("Configuration is missing the required field '{}'", field)
            }
            DiagramError::ProcessingError { message } => {
                format!("Could not process the Terraform sources: {}", message)
            }
            DiagramError::ValidationError { message } => format!("Diagram problem: {}", message),
            DiagramError::YamlError(e) => format!("Could not read or write YAML: {}", e),
            DiagramError::SerializationError(e) => format!("Could not write JSON: {}", e),
            DiagramError::CsvError(e) => format!("Could not write the inventory report: {}", e),
            DiagramError::RenderError { message } => {
                format!("Could not render the diagram: {}", message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DiagramError>;
