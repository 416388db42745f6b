use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Date error: {message}")]
    DateError { message: String },

    #[error("Entropy source failed: {message}")]
    EntropyError { message: String },

    #[error("Member '{key}' {reason}")]
    MemberError { key: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
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

impl TourError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::MemberError { .. } => ErrorCategory::Input,
            Self::SerializationError(_) | Self::RegexError(_) | Self::DateError { .. } => {
                ErrorCategory::Data
            }
            Self::TomlError(_)
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::EntropyError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 區塊內可被捕捉的錯誤
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Pass a non-negative value",
            Self::MemberError { .. } => "Check the member name and whether it holds a function",
            Self::SerializationError(_) => "Check that the JSON document is well formed",
            Self::RegexError(_) => "Check the pattern syntax",
            Self::DateError { .. } => "Use a calendar date the local time zone can represent",
            Self::TomlError(_) => "Make sure the config file is valid TOML",
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file or command line"
            }
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::EntropyError { .. } => "Check that the OS random source is available",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Data => format!("Could not process demo data: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_bare_message() {
        let err = TourError::invalid_input("Negative values not allowed");
        assert_eq!(err.to_string(), "Negative values not allowed");
        assert!(err.is_invalid_input());
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_severity_by_category() {
        let config_err = TourError::ConfigValidationError {
            field: "tour.sections".to_string(),
            message: "empty".to_string(),
        };
        assert_eq!(config_err.severity(), ErrorSeverity::High);

        let entropy_err = TourError::EntropyError {
            message: "unavailable".to_string(),
        };
        assert_eq!(entropy_err.severity(), ErrorSeverity::Critical);
        assert!(entropy_err.user_friendly_message().starts_with("System error"));
    }
}
