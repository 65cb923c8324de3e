//! Error types for the weeknight client library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all client operations.
#[derive(Error, Debug)]
pub enum WeeknightError {
    /// Transport-level failures (connect, timeout, body decoding)
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    /// The backend answered 2xx but flagged the payload as not ok
    #[error("Backend rejected request to {endpoint}")]
    Rejected { endpoint: String },
    /// A recipe timeline without any steps cannot be cooked
    #[error("Recipe {recipe_id} has no steps")]
    EmptyTimeline { recipe_id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// An action was attempted in a state that does not accept it
    #[error("Cannot {action} while in {state} state")]
    InvalidTransition { state: String, action: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating HTTP errors with optional context.
pub struct HttpErrorBuilder {
    message: String,
}

impl HttpErrorBuilder {
    /// Create a new HTTP error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> WeeknightError {
        WeeknightError::Http {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WeeknightError {
        WeeknightError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WeeknightError {
    /// Creates a builder for HTTP transport errors.
    pub fn http(message: impl Into<String>) -> HttpErrorBuilder {
        HttpErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid transition error for a state machine.
    pub fn invalid_transition(state: impl fmt::Display, action: impl Into<String>) -> Self {
        Self::InvalidTransition {
            state: state.to_string(),
            action: action.into(),
        }
    }

    /// Whether the error came from the network boundary rather than local
    /// validation.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::Api { .. } | Self::Rejected { .. }
        )
    }
}

/// Specialized extension trait for HTTP-related Results.
pub trait HttpResultExt<T> {
    /// Map transport errors with a message.
    fn http_context(self, message: &str) -> Result<T>;
}

impl<T> HttpResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn http_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WeeknightError::http(message).with_source(e))
    }
}

/// Extension trait for Result to provide concise error mapping into
/// configuration errors.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to WeeknightError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| WeeknightError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, WeeknightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = WeeknightError::invalid_input("servings").with_reason("must be at most 10");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'servings': must be at most 10"
        );
        assert!(!err.is_remote());
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = WeeknightError::invalid_transition("done", "skip rating");
        assert_eq!(err.to_string(), "Cannot skip rating while in done state");
    }

    #[test]
    fn test_api_error_is_remote() {
        let err = WeeknightError::Api {
            status: 503,
            message: "Service unavailable".to_string(),
        };
        assert!(err.is_remote());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_with_context_wraps_message() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "boom",
        ));
        let err = io.with_context("reading identity").unwrap_err();
        assert!(matches!(err, WeeknightError::Configuration { .. }));
        assert!(err.to_string().contains("reading identity: boom"));
    }
}
