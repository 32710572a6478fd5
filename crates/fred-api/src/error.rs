//! Error types for the FRED API client.

use std::num::ParseFloatError;
use thiserror::Error;

/// Errors that can occur when using the FRED API.
#[derive(Debug, Error)]
pub enum FredError {
    /// Missing API key.
    #[error("FRED_API_KEY environment variable not set")]
    MissingApiKey,

    /// A parameter was outside its allowed set of codes.
    #[error("Invalid {field} '{value}'. Must be one of: {allowed}")]
    InvalidArgument {
        /// Name of the offending query parameter.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Comma-separated list of accepted codes.
        allowed: String,
    },

    /// HTTP request failed, including non-2xx responses.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// An observation value was not a number.
    #[error("Observation on {date} has non-numeric value '{value}'")]
    InvalidValue {
        /// Date of the observation.
        date: String,
        /// Raw value as sent by the API.
        value: String,
        /// Underlying conversion error.
        #[source]
        source: ParseFloatError,
    },

    /// Environment variable error.
    #[error("Environment error: {0}")]
    Env(#[from] dotenvy::Error),
}

impl FredError {
    pub(crate) fn invalid_argument(field: &'static str, value: &str, allowed: &[&str]) -> Self {
        Self::InvalidArgument {
            field,
            value: value.to_string(),
            allowed: allowed.join(", "),
        }
    }

    /// Whether this error was raised before any request was sent.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// The transport error, if the request itself failed.
    #[must_use]
    pub const fn as_request_error(&self) -> Option<&reqwest::Error> {
        match self {
            Self::Request(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = FredError::invalid_argument("units", "bogus", &["lin", "chg"]);
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Invalid units 'bogus'. Must be one of: lin, chg"
        );
    }

    #[test]
    fn test_invalid_value_keeps_source() {
        let source = "n/a".parse::<f64>().unwrap_err();
        let err = FredError::InvalidValue {
            date: "2020-01-01".to_string(),
            value: "n/a".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.as_request_error().is_none());
    }
}
