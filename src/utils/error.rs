use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventStatusError {
    #[error("Failed to load last event for group '{group_id}': {message}")]
    LoaderError { group_id: String, message: String },

    #[error("Invalid event field '{field}': {reason}")]
    InvalidEvent { field: String, reason: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    DataSource,
    Data,
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

impl EventStatusError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LoaderError { .. } => ErrorCategory::DataSource,
            Self::InvalidEvent { .. } | Self::SerializationError(_) => ErrorCategory::Data,
            Self::ValidationError { .. } | Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LoaderError { .. } => ErrorSeverity::Medium,
            Self::InvalidEvent { .. } | Self::ValidationError { .. } => ErrorSeverity::High,
            Self::ConfigError { .. } | Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::DataSource => "Check that the event source is reachable and retry",
            ErrorCategory::Data => "Fix the event record: end_date must be RFC 3339 and the review duration non-negative",
            ErrorCategory::Configuration => "Review the command line flags and the TOML configuration file",
            ErrorCategory::System => "Check file permissions and that the referenced paths exist",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::LoaderError { group_id, .. } => {
                format!("Could not load the last event of group '{}'", group_id)
            }
            Self::InvalidEvent { field, reason } => format!("Event has an invalid {}: {}", field, reason),
            Self::ValidationError { field, reason, .. } => format!("{} is invalid: {}", field, reason),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Could not serialize output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, EventStatusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_errors_are_retryable_data_source_errors() {
        let err = EventStatusError::LoaderError {
            group_id: "g1".to_string(),
            message: "timeout".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::DataSource);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("g1"));
        assert!(err.user_friendly_message().contains("g1"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = EventStatusError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_serialization_errors_convert_from_serde_json() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = EventStatusError::from(source);
        assert!(matches!(err, EventStatusError::SerializationError(_)));
        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.user_friendly_message().starts_with("Could not serialize output"));
    }
}
