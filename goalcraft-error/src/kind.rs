//! Error kinds for goalcraft operations

use std::fmt;

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to decide how to report a failed run
/// (bad credentials vs. quota vs. a provider that returned nothing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid configuration (missing API key, bad base URL, ...)
    ConfigInvalid,

    /// Invalid argument passed to function
    InvalidArgument,

    // =========================================================================
    // Generator/provider errors
    // =========================================================================
    /// The provider rejected or failed the completion request
    InferenceFailed,

    /// The provider answered but returned no text
    EmptyResponse,

    /// Provider is down or overloaded (5xx)
    ProviderUnavailable,

    /// Rate limit or quota exceeded
    RateLimited,

    /// Credentials missing or rejected
    AuthenticationFailed,

    // =========================================================================
    // Transport errors
    // =========================================================================
    /// Network error
    NetworkFailed,

    /// Request did not complete before its deadline
    Timeout,

    // =========================================================================
    // Parse errors
    // =========================================================================
    /// Failed to decode a provider response
    ParseFailed,

    /// Failed to serialize output
    SerializationFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::ConfigInvalid => "ConfigInvalid",
            ErrorKind::InvalidArgument => "InvalidArgument",

            ErrorKind::InferenceFailed => "InferenceFailed",
            ErrorKind::EmptyResponse => "EmptyResponse",
            ErrorKind::ProviderUnavailable => "ProviderUnavailable",
            ErrorKind::RateLimited => "RateLimited",
            ErrorKind::AuthenticationFailed => "AuthenticationFailed",

            ErrorKind::NetworkFailed => "NetworkFailed",
            ErrorKind::Timeout => "Timeout",

            ErrorKind::ParseFailed => "ParseFailed",
            ErrorKind::SerializationFailed => "SerializationFailed",
        }
    }

    /// Check if this error kind is retryable by default
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::NetworkFailed
                | ErrorKind::Timeout
                | ErrorKind::RateLimited
                | ErrorKind::ProviderUnavailable
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
