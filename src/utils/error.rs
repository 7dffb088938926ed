use crate::domain::model::ServiceKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToonError {
    #[error("Unknown webtoon service: {name}")]
    UnknownService { name: String },

    #[error("Malformed extra '{key}': {reason}")]
    MalformedExtra { key: String, reason: String },

    #[error("No backend registered for service: {kind}")]
    BackendNotRegistered { kind: ServiceKind },

    #[error("Failed to construct {kind} backend: {reason}")]
    BackendConstruction { kind: ServiceKind, reason: String },

    #[error("Invalid rating '{value}': {reason}")]
    InvalidRating { value: String, reason: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Selection,
    Backend,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ToonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ToonError::UnknownService { .. } | ToonError::MalformedExtra { .. } => {
                ErrorCategory::Selection
            }
            ToonError::BackendNotRegistered { .. }
            | ToonError::BackendConstruction { .. }
            | ToonError::InvalidUrl(_) => ErrorCategory::Backend,
            ToonError::InvalidRating { .. } | ToonError::SerializationError(_) => {
                ErrorCategory::Input
            }
            ToonError::ConfigError { .. } | ToonError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ToonError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // Selection and backend failures are recovered by falling back to the default backend.
            ErrorCategory::Selection | ErrorCategory::Backend => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ToonError::UnknownService { .. } => format!(
                "Use one of: {}",
                ServiceKind::ALL
                    .iter()
                    .map(|kind| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            ToonError::MalformedExtra { key, .. } => {
                format!("Pass '{}' as a string naming a service", key)
            }
            ToonError::BackendNotRegistered { kind } => {
                format!("Register a backend for '{}' or pick another service", kind)
            }
            ToonError::BackendConstruction { kind, .. } => {
                format!("Check the [backends.{}] section of the configuration", kind)
            }
            ToonError::InvalidRating { .. } => {
                "Ratings must be decimal numbers such as 4.5, or NaN / Infinity".to_string()
            }
            ToonError::InvalidUrl(_) => "Use an absolute http or https URL".to_string(),
            ToonError::ConfigError { .. } | ToonError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again".to_string()
            }
            ToonError::IoError(_) => "Check that the file exists and is readable".to_string(),
            ToonError::SerializationError(_) => {
                "The selection request must be a JSON object".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ToonError::InvalidRating { value, .. } => {
                format!("'{}' is not a valid rating", value)
            }
            ToonError::UnknownService { name } => format!("'{}' is not a known service", name),
            ToonError::IoError(e) => format!("Could not read file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToonError>;
