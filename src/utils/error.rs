use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required setting: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid answer '{input}': {reason}")]
    InvalidAnswer { input: String, reason: String },

    #[error("Session is already {state}")]
    SessionClosed { state: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GuideError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GuideError::IoError(_) => ErrorCategory::Io,
            GuideError::SerializationError(_)
            | GuideError::CsvError(_)
            | GuideError::ProcessingError { .. } => ErrorCategory::Data,
            GuideError::ConfigError { .. }
            | GuideError::ConfigValidationError { .. }
            | GuideError::InvalidConfigValueError { .. }
            | GuideError::MissingConfigError { .. } => ErrorCategory::Configuration,
            GuideError::ValidationError { .. }
            | GuideError::InvalidAnswer { .. }
            | GuideError::SessionClosed { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GuideError::IoError(_) => "Check that the file exists and is readable",
            GuideError::SerializationError(_) => "Make sure the document is valid JSON",
            GuideError::CsvError(_) => "Retry with --format json",
            GuideError::ConfigError { .. } | GuideError::ConfigValidationError { .. } => {
                "Fix the configuration file and try again"
            }
            GuideError::InvalidConfigValueError { .. } => {
                "Use a value within the documented range"
            }
            GuideError::MissingConfigError { .. } => "Provide the missing setting",
            GuideError::ValidationError { .. } => "Correct the profile values and try again",
            GuideError::InvalidAnswer { .. } => "Answer the current question again",
            GuideError::SessionClosed { .. } => "Start a new session",
            GuideError::ProcessingError { .. } => "Retry the request",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not access a required file ({})", self),
            ErrorCategory::Data => format!("Could not process the data ({})", self),
            ErrorCategory::Configuration => format!("The configuration is invalid ({})", self),
            ErrorCategory::Input => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GuideError>;
