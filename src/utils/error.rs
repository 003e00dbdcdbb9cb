use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApprovalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("No mapping registered from {source_type} to {destination_type}")]
    MissingMapError {
        source_type: &'static str,
        destination_type: &'static str,
    },

    #[error("Mapping from {source_type} to {destination_type} registered more than once")]
    DuplicateMapError {
        source_type: &'static str,
        destination_type: &'static str,
    },

    #[error("Mapping {map} requires a nested mapping {requires} that is not registered")]
    UnsatisfiedDependencyError { map: String, requires: String },

    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    InvalidFieldValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Record {index} could not be mapped: {message}")]
    RecordError { index: usize, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Mapping,
    Data,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ApprovalError {
    pub fn missing_field(field: &str) -> Self {
        ApprovalError::InvalidFieldValueError {
            field: field.to_string(),
            value: String::new(),
            reason: "value is required".to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApprovalError::IoError(_) => ErrorCategory::Io,
            ApprovalError::SerializationError(_)
            | ApprovalError::CsvError(_)
            | ApprovalError::InvalidFieldValueError { .. }
            | ApprovalError::RecordError { .. } => ErrorCategory::Data,
            ApprovalError::MissingMapError { .. }
            | ApprovalError::DuplicateMapError { .. }
            | ApprovalError::UnsatisfiedDependencyError { .. } => ErrorCategory::Mapping,
            ApprovalError::ConfigValidationError { .. }
            | ApprovalError::MissingConfigError { .. }
            | ApprovalError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            // A broken mapping profile is a programming error, not bad input.
            ErrorCategory::Mapping => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApprovalError::IoError(_) => {
                "Check that the input file exists and the output directory is writable"
            }
            ApprovalError::SerializationError(_) => {
                "Check that the input file is valid JSON in the expected record shape"
            }
            ApprovalError::CsvError(_) => "Try the json output format instead",
            ApprovalError::MissingMapError { .. } => {
                "Register the missing type pair in the mapper profile"
            }
            ApprovalError::DuplicateMapError { .. } => {
                "Remove the duplicate registration from the mapper profile"
            }
            ApprovalError::UnsatisfiedDependencyError { .. } => {
                "Register the nested mapping in the same profile"
            }
            ApprovalError::InvalidFieldValueError { .. } | ApprovalError::RecordError { .. } => {
                "Fix the offending record in the source data and run again"
            }
            ApprovalError::ConfigValidationError { .. }
            | ApprovalError::MissingConfigError { .. }
            | ApprovalError::InvalidConfigValueError { .. } => {
                "Check the command line arguments or the TOML configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Mapping => format!("Mapper setup problem: {}", self),
            ErrorCategory::Data => format!("Source data problem: {}", self),
            ErrorCategory::Io => format!("File access problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApprovalError>;
