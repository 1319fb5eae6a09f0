//! Dashboard configuration types.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::ReqwestHttpClient;
use crate::api::{TriviaClient, DEFAULT_BASE_URL};
use crate::cli::CliOptions;
use crate::fetch::RetryPolicy;
use crate::state::{DEFAULT_AMOUNT, MAX_AMOUNT};

/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "TRIVIA_BASE_URL";
/// Environment variable overriding the initial question amount.
pub const ENV_AMOUNT: &str = "TRIVIA_AMOUNT";
/// Environment variable setting a request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "TRIVIA_TIMEOUT_SECS";

/// Configuration for a dashboard session.
///
/// # Example
///
/// ```ignore
/// use trivia_dash::startup::DashboardConfig;
///
/// let config = DashboardConfig::default()
///     .with_base_url("http://localhost:8080")
///     .with_amount(10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// API base URL (default: https://opentdb.com)
    pub base_url: String,
    /// Questions fetched on startup, 1..=50 (default: 50)
    pub amount: u32,
    /// Per-request timeout; `None` keeps the transport default
    pub request_timeout: Option<Duration>,
    /// Backoff settings for server-busy responses
    pub retry: RetryPolicy,
    /// Category selected on startup
    pub initial_category: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            amount: DEFAULT_AMOUNT,
            request_timeout: None,
            retry: RetryPolicy::default(),
            initial_category: None,
        }
    }
}

/// Clamp a requested amount into what the API serves.
pub fn clamp_amount(amount: u32) -> u32 {
    amount.clamp(1, MAX_AMOUNT)
}

impl DashboardConfig {
    /// Set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the startup amount (clamped to 1..=50).
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = clamp_amount(amount);
        self
    }

    /// Set a per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the number of retries for busy responses.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.retry = self.retry.with_max_retries(max_retries);
        self
    }

    /// Set the first backoff delay.
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.retry = self.retry.with_base_delay(base_delay);
        self
    }

    /// Set the category selected on startup.
    pub fn with_initial_category(mut self, category: impl Into<String>) -> Self {
        self.initial_category = Some(category.into());
        self
    }

    /// Defaults overridden by `TRIVIA_*` environment variables.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(raw) = lookup(ENV_AMOUNT) {
            match raw.trim().parse::<u32>() {
                Ok(amount) => config = config.with_amount(amount),
                Err(_) => tracing::warn!("ignoring {}={:?}: not a number", ENV_AMOUNT, raw),
            }
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config = config.with_request_timeout(Duration::from_secs(secs))
                }
                _ => tracing::warn!("ignoring {}={:?}", ENV_TIMEOUT_SECS, raw),
            }
        }

        config
    }

    /// Apply command-line overrides on top of this config.
    pub fn apply_cli(mut self, options: &CliOptions) -> Self {
        if let Some(url) = &options.base_url {
            self = self.with_base_url(url.clone());
        }
        if let Some(amount) = options.amount {
            self = self.with_amount(amount);
        }
        if let Some(category) = &options.category {
            self = self.with_initial_category(category.clone());
        }
        self
    }

    /// Build the API client described by this config.
    pub fn build_client(&self) -> TriviaClient {
        let http = match self.request_timeout {
            Some(timeout) => ReqwestHttpClient::with_timeout(timeout),
            None => ReqwestHttpClient::new(),
        };

        TriviaClient::with_url(&self.base_url)
            .with_http(Arc::new(http))
            .with_policy(self.retry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = DashboardConfig::default();
        assert_eq!(config.base_url, "https://opentdb.com");
        assert_eq!(config.amount, 50);
        assert!(config.request_timeout.is_none());
        assert_eq!(config.retry, RetryPolicy::default());
        assert!(config.initial_category.is_none());
    }

    #[test]
    fn test_amount_is_clamped() {
        assert_eq!(DashboardConfig::default().with_amount(0).amount, 1);
        assert_eq!(DashboardConfig::default().with_amount(500).amount, 50);
        assert_eq!(DashboardConfig::default().with_amount(25).amount, 25);
    }

    #[test]
    fn test_from_lookup() {
        let config = DashboardConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "http://localhost:9000"),
            (ENV_AMOUNT, "20"),
            (ENV_TIMEOUT_SECS, "15"),
        ]));
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.amount, 20);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = DashboardConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "  "),
            (ENV_AMOUNT, "many"),
            (ENV_TIMEOUT_SECS, "0"),
        ]));
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_cli_overrides_env() {
        let options = CliOptions {
            amount: Some(5),
            base_url: Some("http://cli".to_string()),
            category: Some("Art".to_string()),
        };
        let config = DashboardConfig::from_lookup(lookup(&[(ENV_AMOUNT, "20")])).apply_cli(&options);
        assert_eq!(config.amount, 5);
        assert_eq!(config.base_url, "http://cli");
        assert_eq!(config.initial_category.as_deref(), Some("Art"));
    }

    #[test]
    fn test_build_client_uses_base_url_and_policy() {
        let config = DashboardConfig::default()
            .with_base_url("http://localhost:9000/")
            .with_max_retries(1)
            .with_base_delay(Duration::from_millis(5));
        let client = config.build_client();
        assert_eq!(client.categories_url(), "http://localhost:9000/api_category.php");
        assert_eq!(client.policy().max_retries, 1);
    }
}
