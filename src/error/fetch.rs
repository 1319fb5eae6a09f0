//! Errors raised by the retry fetcher.

use thiserror::Error;

use super::ErrorCategory;
use crate::traits::HttpError;

/// Failure of a single fetch, after any retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The final response was not 2xx.
    ///
    /// `attempts` counts every request made, including the first.
    #[error("Request failed: {status}")]
    RequestFailed { status: u16, attempts: u32 },

    /// No response was received at all.
    #[error(transparent)]
    Transport(#[from] HttpError),
}

impl FetchError {
    /// The HTTP status of the final response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::RequestFailed { status, .. } => Some(*status),
            FetchError::Transport(_) => None,
        }
    }

    /// Classify the failure.
    ///
    /// A server-busy status that escaped the fetcher has exhausted its
    /// retries, so it is reported as a plain request failure.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::RequestFailed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_display() {
        let err = FetchError::RequestFailed {
            status: 503,
            attempts: 4,
        };
        assert_eq!(err.to_string(), "Request failed: 503");
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.category(), ErrorCategory::RequestFailed);
    }

    #[test]
    fn test_transport_from_http_error() {
        let err: FetchError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert_eq!(err.to_string(), "Connection failed: refused");
        assert_eq!(err.status(), None);
    }
}
