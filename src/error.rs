//! Error types for the commons library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the expression engine and the helper modules.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A recognized directive was used without its `->argument` part.
    #[error("invalid expression `{token}`: directive requires `->argument`")]
    InvalidExpression {
        /// The offending token body.
        token: String,
    },

    /// A date/time pattern or numeric format could not be parsed.
    #[error("invalid format pattern `{pattern}`: {reason}")]
    InvalidFormatPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A composed identifier could not be converted to a number.
    #[error("cannot convert `{value}` to a number")]
    NumericConversion {
        /// The digit string that failed to parse.
        value: String,
    },

    /// A filesystem helper failed.
    #[error("filesystem operation failed for {}: {message}", path.display())]
    FileSystem {
        /// Path involved in the failing operation.
        path: PathBuf,
        /// Underlying failure description.
        message: String,
    },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read or parsed.
    #[error("invalid config {}: {message}", path.display())]
    Config {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying failure description.
        message: String,
    },

    /// A helper received an argument it cannot work with (blank name, etc.).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormatPattern { pattern: pattern.to_string(), reason: reason.into() }
    }

    pub(crate) fn fs(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::FileSystem { path: path.into(), message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = Error::InvalidExpression { token: "currentTimestamp".into() };
        assert!(err.to_string().contains("currentTimestamp"));

        let err = Error::pattern("yyyyQQ", "unsupported pattern letter 'Q'");
        assert_eq!(
            err.to_string(),
            "invalid format pattern `yyyyQQ`: unsupported pattern letter 'Q'"
        );

        let err = Error::fs("/tmp/x", "boom");
        assert_eq!(err.to_string(), "filesystem operation failed for /tmp/x: boom");
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
    }
}
