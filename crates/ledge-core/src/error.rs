//! Error types for the ledge workspace.

use thiserror::Error;

/// A shared error type for the entire ledge workspace.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum LedgeError {
    /// An application process failed to start.
    #[error("Failed to launch '{app}': {message}")]
    Launch { app: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Operation not supported by the active backend
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LedgeError {
    /// Creates a Launch error
    pub fn launch(app: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Launch {
            app: app.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Launch error
    pub fn is_launch(&self) -> bool {
        matches!(self, Self::Launch { .. })
    }

    /// Check if this is an Unsupported error
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

impl From<std::io::Error> for LedgeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for LedgeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for LedgeError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, LedgeError>`.
pub type Result<T> = std::result::Result<T, LedgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_error_message() {
        let err = LedgeError::launch("editor", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "Failed to launch 'editor': No such file or directory"
        );
        assert!(err.is_launch());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LedgeError = io.into();
        assert!(matches!(err, LedgeError::Io { .. }));
    }
}
