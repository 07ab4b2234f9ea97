//! Error types for the logger system
//!
//! Logging calls never fail. These errors only surface from the fallible
//! edges: opening a file sink, flushing, and parsing a level name.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unrecognised level name
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// Appender panicked while handling a record
    #[error("Appender '{appender}' panicked: {message}")]
    AppenderPanic { appender: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }

    pub fn appender_panic(appender: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::AppenderPanic {
            appender: appender.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
