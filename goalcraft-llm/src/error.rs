//! LLM layer error types
//!
//! Re-exports goalcraft-error and maps provider failures onto it.

pub use goalcraft_error::{Error, ErrorKind, ErrorStatus, Result};

use crate::provider::ProviderError;

impl From<ProviderError> for Error {
    fn from(err: ProviderError) -> Self {
        let message = err.to_string();
        let mapped = match &err {
            ProviderError::Network(_) => Error::new(ErrorKind::NetworkFailed, message),
            ProviderError::Timeout(_) => Error::new(ErrorKind::Timeout, message),
            ProviderError::Api { status, .. } if *status >= 500 => {
                Error::new(ErrorKind::ProviderUnavailable, message)
                    .with_context("status", status.to_string())
            }
            ProviderError::Api { status, .. } => Error::new(ErrorKind::InferenceFailed, message)
                .with_context("status", status.to_string()),
            ProviderError::Parse(_) => Error::new(ErrorKind::ParseFailed, message),
            ProviderError::RateLimited { retry_after } => {
                let err = Error::new(ErrorKind::RateLimited, message);
                match retry_after {
                    Some(secs) => err.with_context("retry_after_secs", secs.to_string()),
                    None => err,
                }
            }
            ProviderError::AuthenticationFailed => {
                Error::new(ErrorKind::AuthenticationFailed, message)
            }
            ProviderError::EmptyResponse(_) => Error::empty_response(message),
            ProviderError::Config(_) => Error::config_invalid(message),
        };
        mapped.with_operation("provider::complete")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        let err: Error = ProviderError::Api {
            status: 502,
            message: "bad gateway".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::ProviderUnavailable);
        assert!(err.is_retryable());
        assert_eq!(err.context_value("status"), Some("502"));
    }

    #[test]
    fn test_client_errors_are_permanent() {
        let err: Error = ProviderError::Api {
            status: 400,
            message: "bad request".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::InferenceFailed);
        assert!(!err.is_retryable());

        let err: Error = ProviderError::AuthenticationFailed.into();
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
        assert_eq!(err.operation(), "provider::complete");
    }

    #[test]
    fn test_rate_limit_keeps_retry_after() {
        let err: Error = ProviderError::RateLimited { retry_after: Some(30) }.into();
        assert_eq!(err.kind(), ErrorKind::RateLimited);
        assert_eq!(err.context_value("retry_after_secs"), Some("30"));
    }
}
