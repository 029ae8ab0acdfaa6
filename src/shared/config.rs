//! Application configuration. Service endpoint, timeouts, mock mode.

use crate::usecases::StaleResponsePolicy;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MOCK_DELAY_MS: u64 = 300;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Root URL of the business-data service. Read from BIZ_DASH_API_BASE_URL.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Per-request timeout in seconds; 0 disables it. Read from BIZ_DASH_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Serve data from the built-in mock instead of the service. Read from BIZ_DASH_USE_MOCK.
    #[serde(default)]
    pub use_mock: Option<bool>,

    /// Simulated latency of the mock in ms. Read from BIZ_DASH_MOCK_DELAY_MS.
    #[serde(default)]
    pub mock_delay_ms: Option<u64>,

    /// `last_write_wins` or `latest_dispatch_wins`. Read from BIZ_DASH_STALE_RESPONSE_POLICY.
    #[serde(default)]
    pub stale_response_policy: Option<StaleResponsePolicy>,
}

impl AppConfig {
    /// Load from `.env`, `BIZ_DASH_*` env vars and an optional file named by BIZ_DASH_CONFIG.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("BIZ_DASH_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // env overrides the file
        c = c.add_source(config::Environment::with_prefix("BIZ_DASH").try_parsing(true));
        c.build()?.try_deserialize()
    }

    pub fn api_base_url_or_default(&self) -> String {
        self.api_base_url
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Request timeout. `None` when explicitly disabled with 0.
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn use_mock(&self) -> bool {
        self.use_mock.unwrap_or(false)
    }

    pub fn mock_delay_ms_or_default(&self) -> u64 {
        self.mock_delay_ms.unwrap_or(DEFAULT_MOCK_DELAY_MS)
    }

    pub fn stale_response_policy(&self) -> StaleResponsePolicy {
        self.stale_response_policy.unwrap_or_default()
    }
}
