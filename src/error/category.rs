//! Error category classification.
//!
//! Every failure a load cycle can hit falls into one of four buckets. Only
//! server-busy responses are recovered automatically, and only inside the
//! retry fetcher; everything else ends the load cycle.

use std::fmt;

/// High-level categorization of load failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// HTTP 429 / 503. Recovered by bounded exponential backoff.
    TransientServerBusy,

    /// Any other non-success status, exhausted retries, or a transport
    /// failure before a status was received.
    RequestFailed,

    /// The questions endpoint answered with a non-zero `response_code`.
    ApiLogic,

    /// Anything else, e.g. a body that is not the expected JSON.
    Unknown,
}

impl ErrorCategory {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            429 | 503 => ErrorCategory::TransientServerBusy,
            _ => ErrorCategory::RequestFailed,
        }
    }

    /// Returns true if the retry fetcher may retry errors in this category.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::TransientServerBusy)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::TransientServerBusy => "server_busy",
            ErrorCategory::RequestFailed => "request_failed",
            ErrorCategory::ApiLogic => "api_logic",
            ErrorCategory::Unknown => "unknown",
        }
    }

    /// Returns suggested recovery action for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::TransientServerBusy => "The trivia server is busy. Wait a moment, then press r to refetch",
            ErrorCategory::RequestFailed => "Check your connection, then press r to refetch",
            ErrorCategory::ApiLogic => "Try a smaller amount, then press r to refetch",
            ErrorCategory::Unknown => "Press r to refetch",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(
            ErrorCategory::from_status(429),
            ErrorCategory::TransientServerBusy
        );
        assert_eq!(
            ErrorCategory::from_status(503),
            ErrorCategory::TransientServerBusy
        );
        assert_eq!(ErrorCategory::from_status(500), ErrorCategory::RequestFailed);
        assert_eq!(ErrorCategory::from_status(404), ErrorCategory::RequestFailed);
        assert_eq!(ErrorCategory::from_status(502), ErrorCategory::RequestFailed);
    }

    #[test]
    fn test_only_server_busy_is_retryable() {
        assert!(ErrorCategory::TransientServerBusy.is_retryable());
        assert!(!ErrorCategory::RequestFailed.is_retryable());
        assert!(!ErrorCategory::ApiLogic.is_retryable());
        assert!(!ErrorCategory::Unknown.is_retryable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::ApiLogic.to_string(), "api_logic");
        assert_eq!(
            format!("{}", ErrorCategory::TransientServerBusy),
            "server_busy"
        );
    }

    #[test]
    fn test_recovery_hint_mentions_refetch() {
        assert!(ErrorCategory::RequestFailed.recovery_hint().contains("refetch"));
        assert!(ErrorCategory::Unknown.recovery_hint().contains("refetch"));
        assert!(ErrorCategory::TransientServerBusy
            .recovery_hint()
            .contains("refetch"));
    }
}
