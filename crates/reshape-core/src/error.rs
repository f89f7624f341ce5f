//! Error types for the reshape core library
//!
//! This module defines the error handling system for reshape, using
//! thiserror for ergonomic error definitions and anyhow for the opaque
//! payloads carried by user-supplied callables.

use thiserror::Error;

/// Main error type for reshape operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid definition detected while building it
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
    },

    /// A `Named` transform referenced a helper that is not registered
    #[error("Unknown helper '{name}': no helper with that name is registered on this definition")]
    UnknownHelper {
        name: String,
    },

    /// The conversion input does not behave as, and cannot be
    /// materialized into, a mapping
    #[error("Input is not a mapping: {message}")]
    NotAMapping {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A user-supplied transformation or default callable failed
    #[error("Transform failed: {message}")]
    Transform {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON serialization errors while coercing inputs
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Build a `Transform` error from a plain message.
    ///
    /// Intended for transformation closures and helpers that need to
    /// reject a value; the engine propagates these unmodified.
    pub fn transform(message: impl Into<String>) -> Self {
        Error::Transform {
            message: message.into(),
            source: None,
        }
    }
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Transform {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownHelper {
            name: "subtract".to_string(),
        };
        assert!(err.to_string().contains("subtract"));
    }

    #[test]
    fn test_transform_constructor() {
        let err = Error::transform("value out of range");
        assert_eq!(err.to_string(), "Transform failed: value out of range");
    }

    #[test]
    fn test_from_anyhow() {
        let err: Error = anyhow::anyhow!("helper blew up").into();
        assert!(matches!(err, Error::Transform { .. }));
        assert!(err.to_string().contains("helper blew up"));
    }
}
