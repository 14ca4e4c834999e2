//! API configuration
//!
//! Settings come from `HILLSTAY_*` environment variables over the defaults
//! below. `API_BASE`, unprefixed, overrides the backend base URL.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use core_kernel::{CoreError, TemporalError, Timezone};
use domain_booking::GuestLimits;
use infra_backend::BackendConfig;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL of the booking backend
    pub api_base: String,
    pub backend_timeout_secs: u64,
    /// JWT secret for session tokens
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// Log level
    pub log_level: String,
    pub log_format: LogFormat,
    /// IANA name of the resort time zone
    pub timezone: String,
    pub max_nights: u32,
    pub max_adults_per_room_ui: u32,
    pub max_children_per_room_ui: u32,
    /// Listings per catalog page
    pub page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let limits = GuestLimits::default();
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_base: infra_backend::config::DEFAULT_API_BASE.to_string(),
            backend_timeout_secs: 10,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            timezone: "Asia/Kolkata".to_string(),
            max_nights: limits.max_nights,
            max_adults_per_room_ui: limits.max_adults_per_room,
            max_children_per_room_ui: limits.max_children_per_room,
            page_size: domain_catalog::DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&ApiConfig::default())?)
            .add_source(config::Environment::with_prefix("HILLSTAY"));

        if let Ok(api_base) = std::env::var("API_BASE") {
            builder = builder.set_override("api_base", api_base)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn backend(&self) -> BackendConfig {
        BackendConfig::new(self.api_base.clone())
            .timeout(Duration::from_secs(self.backend_timeout_secs))
    }

    /// Limits the booking form enforces
    pub fn guest_limits(&self) -> GuestLimits {
        GuestLimits {
            max_nights: self.max_nights,
            max_adults_per_room: self.max_adults_per_room_ui,
            max_children_per_room: self.max_children_per_room_ui,
        }
    }

    pub fn resort_timezone(&self) -> Result<Timezone, TemporalError> {
        Timezone::parse(&self.timezone)
    }

    /// Checks settings that deserialize fine but cannot be served
    pub fn validate(&self) -> Result<(), CoreError> {
        self.resort_timezone()?;

        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(CoreError::configuration(format!(
                "api_base must be an http(s) URL, got {:?}",
                self.api_base
            )));
        }
        if self.page_size == 0 {
            return Err(CoreError::configuration("page_size must be positive"));
        }
        if self.jwt_secret.is_empty() {
            return Err(CoreError::configuration("jwt_secret must not be empty"));
        }
        Ok(())
    }
}
