use thiserror::Error;

/// Message carried by a rejected post write.
pub const WRITE_FAILURE_MESSAGE: &str = "Error: Something went wrong";

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("{message}")]
    WriteFailure { message: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("No render within {waited_ms} ms")]
    RenderTimeout { waited_ms: u128 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    pub fn write_failure() -> Self {
        DemoError::WriteFailure {
            message: WRITE_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_write_failure(&self) -> bool {
        matches!(self, DemoError::WriteFailure { .. })
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failure_displays_fixed_message() {
        let err = DemoError::write_failure();
        assert!(err.is_write_failure());
        assert_eq!(err.to_string(), "Error: Something went wrong");
    }

    #[test]
    fn test_invalid_config_value_message() {
        let err = DemoError::InvalidConfigValueError {
            field: "users_endpoint".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'ftp://x' for users_endpoint: Unsupported URL scheme: ftp"
        );
        assert!(!err.is_write_failure());
    }
}
