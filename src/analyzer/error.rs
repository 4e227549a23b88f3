// src/analyzer/error.rs
// =============================================================================
// Everything that can go wrong between "the user typed something" and
// "we have a report".
//
// None of these are fatal: each one ends up as a single line shown to the
// user, and (for network failures) an offer to try again.
// =============================================================================

use std::fmt;

pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";
pub const OFFLINE_MESSAGE: &str =
    "No internet connection. Please check your connection and try again.";
pub const CONNECTION_REFUSED_MESSAGE: &str =
    "Could not connect to the analysis server. Please ensure it's running.";
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL (e.g., https://example.com)";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong during analysis.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The deadline ran out before the service answered
    Timeout,
    /// This machine has no network connectivity
    NetworkUnavailable,
    /// We are online but the analysis server could not be reached
    ConnectionRefused,
    /// The service answered with a non-2xx status
    ServerError { status: u16, message: String },
    /// The input is not a URL; nothing was sent
    Validation(String),
    /// Anything else (unreadable response body, protocol errors, ...)
    Other(String),
}

impl AnalyzeError {
    /// The one line we show to the user for this failure.
    pub fn user_message(&self) -> &str {
        match self {
            AnalyzeError::Timeout => TIMEOUT_MESSAGE,
            AnalyzeError::NetworkUnavailable => OFFLINE_MESSAGE,
            AnalyzeError::ConnectionRefused => CONNECTION_REFUSED_MESSAGE,
            AnalyzeError::ServerError { message, .. } => message,
            AnalyzeError::Validation(_) => INVALID_URL_MESSAGE,
            AnalyzeError::Other(message) if message.trim().is_empty() => GENERIC_FAILURE_MESSAGE,
            AnalyzeError::Other(message) => message,
        }
    }
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::ServerError { status, message } => {
                write!(f, "server error (HTTP {status}): {message}")
            }
            AnalyzeError::Validation(input) => write!(f, "invalid URL: {input:?}"),
            other => f.write_str(other.user_message()),
        }
    }
}

impl std::error::Error for AnalyzeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(AnalyzeError::Timeout.user_message(), TIMEOUT_MESSAGE);
        assert_eq!(AnalyzeError::NetworkUnavailable.user_message(), OFFLINE_MESSAGE);
        assert_eq!(
            AnalyzeError::ConnectionRefused.user_message(),
            CONNECTION_REFUSED_MESSAGE
        );
        assert_eq!(
            AnalyzeError::Validation("nope".to_string()).user_message(),
            INVALID_URL_MESSAGE
        );

        let server = AnalyzeError::ServerError {
            status: 500,
            message: "Server error: 500".to_string(),
        };
        assert_eq!(server.user_message(), "Server error: 500");
    }

    #[test]
    fn test_other_falls_back_to_generic_message() {
        assert_eq!(
            AnalyzeError::Other(String::new()).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
        assert_eq!(AnalyzeError::Other("boom".to_string()).user_message(), "boom");
    }

    #[test]
    fn test_display() {
        let err = AnalyzeError::ServerError { status: 502, message: "Bad gateway".to_string() };
        assert_eq!(err.to_string(), "server error (HTTP 502): Bad gateway");
        assert_eq!(
            AnalyzeError::Validation("abc".to_string()).to_string(),
            "invalid URL: \"abc\""
        );
    }
}
