//! Backend connection settings

use std::time::Duration;

/// Base URL used when none is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Configuration for the booking backend client
///
/// # Example
///
/// ```rust
/// use infra_backend::BackendConfig;
/// use std::time::Duration;
///
/// let config = BackendConfig::new("https://bookings.example.com/api")
///     .timeout(Duration::from_secs(5));
/// assert_eq!(config.api_base, "https://bookings.example.com/api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL every endpoint path is appended to
    pub api_base: String,
    /// Upper bound on a whole request, connect included
    pub timeout: Duration,
}

impl BackendConfig {
    /// Creates a configuration for `api_base` with a 10 second timeout
    ///
    /// A trailing slash on `api_base` is dropped.
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL for an endpoint path such as `/bookings`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
