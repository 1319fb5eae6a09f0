//! Unified error for a dashboard load cycle.

use thiserror::Error;

use super::{ErrorCategory, FetchError};
use crate::api::Endpoint;

/// Meaning of an Open Trivia DB `response_code`.
pub fn response_code_meaning(code: i64) -> &'static str {
    match code {
        0 => "success",
        1 => "not enough questions for the query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limited",
        _ => "unrecognised response code",
    }
}

fn meaning(code: &i64) -> &'static str {
    response_code_meaning(*code)
}

/// Any failure that aborts a load cycle.
///
/// Cloneable so it can travel through the app message channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriviaError {
    /// One of the two endpoints could not be fetched.
    #[error("{source}")]
    Fetch {
        endpoint: Endpoint,
        #[source]
        source: FetchError,
    },

    /// The questions endpoint signalled an API-level failure.
    #[error("Trivia API returned an error code ({code}: {})", meaning(.code))]
    ApiResponseCode { code: i64 },

    /// A body did not have the expected shape.
    #[error("Malformed {endpoint} response: {message}")]
    Decode { endpoint: Endpoint, message: String },
}

/// Result alias used throughout the API client.
pub type TriviaResult<T> = Result<T, TriviaError>;

impl TriviaError {
    /// Build a decode error from a serde failure.
    pub fn decode(endpoint: Endpoint, err: serde_json::Error) -> Self {
        TriviaError::Decode {
            endpoint,
            message: err.to_string(),
        }
    }

    /// Classify the error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            TriviaError::Fetch { source, .. } => source.category(),
            TriviaError::ApiResponseCode { .. } => ErrorCategory::ApiLogic,
            TriviaError::Decode { .. } => ErrorCategory::Unknown,
        }
    }

    /// Message shown in the dashboard's error state.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TriviaError::Fetch {
                source: FetchError::RequestFailed { .. },
                ..
            } => "E_FETCH_STATUS",
            TriviaError::Fetch {
                source: FetchError::Transport(_),
                ..
            } => "E_FETCH_TRANSPORT",
            TriviaError::ApiResponseCode { .. } => "E_API_CODE",
            TriviaError::Decode { .. } => "E_DECODE",
        }
    }
}
