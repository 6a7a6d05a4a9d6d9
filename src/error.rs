//! Error types and handling for the Tourism AI application

use thiserror::Error;

/// Main error type for the Tourism AI application
#[derive(Error, Debug)]
pub enum TourismAiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream API communication errors (transport, timeout, HTTP status)
    #[error("API error: {message}")]
    Api { message: String },

    /// Upstream payload could not be decoded
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TourismAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TourismAiError::Config { message } => {
                format!("Configuration error: {message}. Please check your config file.")
            }
            TourismAiError::Api { .. } | TourismAiError::Parse { .. } => {
                "Unable to reach the travel data services. Please check your internet connection."
                    .to_string()
            }
            TourismAiError::Validation { message } => format!("Invalid input: {message}"),
            TourismAiError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for TourismAiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::parse(err.to_string())
        } else if err.is_timeout() {
            Self::api(format!("request timed out: {err}"))
        } else {
            Self::api(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TourismAiError::config("missing base url");
        assert!(matches!(config_err, TourismAiError::Config { .. }));

        let api_err = TourismAiError::api("connection failed");
        assert!(matches!(api_err, TourismAiError::Api { .. }));

        let parse_err = TourismAiError::parse("bad json");
        assert!(matches!(parse_err, TourismAiError::Parse { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TourismAiError::config("timeout too large");
        assert!(config_err.user_message().contains("timeout too large"));

        let api_err = TourismAiError::api("test");
        assert!(api_err.user_message().contains("Unable to reach"));

        let validation_err = TourismAiError::validation("empty query");
        assert!(validation_err.user_message().contains("empty query"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TourismAiError = io_err.into();
        assert!(matches!(err, TourismAiError::Io { .. }));
    }
}
