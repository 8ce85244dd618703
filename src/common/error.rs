//! Error handling module
//!
//! This module defines the error types and result type alias used by the gate.

use thiserror::Error;

/// Logging gate error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// Activation threshold is not a level of the `log` severity scale
    #[error("invalid library log activation level <{0}>")]
    InvalidActivationLevel(String),

    /// Verbosity threshold is not one of the five verbosity ranks
    #[error("invalid library verbosity level <{0}>")]
    InvalidVerbosityLevel(String),

    /// Name lookup for a value outside the verbosity enumeration
    #[error("unknown verbosity level {0}")]
    InvalidVerbosity(u32),

    /// Encoding label not known to the encoding machinery
    #[error("unsupported text encoding <{0}>")]
    UnsupportedEncoding(String),

    /// Settings could not be loaded
    #[error("settings error: {0}")]
    Settings(String),
}

/// Result type alias
///
/// This is a `Result` type alias that uses our custom `GateError`.
pub type Result<T> = std::result::Result<T, GateError>;

impl From<config::ConfigError> for GateError {
    fn from(err: config::ConfigError) -> Self {
        GateError::Settings(err.to_string())
    }
}

impl From<serde_json::Error> for GateError {
    fn from(err: serde_json::Error) -> Self {
        GateError::Settings(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GateError::InvalidActivationLevel("12345".to_string());
        assert_eq!(err.to_string(), "invalid library log activation level <12345>");

        let err = GateError::InvalidVerbosity(7);
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err: GateError = json_err.into();
        assert!(matches!(err, GateError::Settings(_)));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: GateError = config::ConfigError::Message("bad value".to_string()).into();
        match err {
            GateError::Settings(msg) => assert!(msg.contains("bad value")),
            _ => panic!("Should convert to settings error"),
        }
    }
}
