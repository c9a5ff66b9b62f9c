//! Client configuration stored in `config.yaml`.

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    /// IANA time zone used to display dates; the system zone when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Connection settings for the meetapp service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Session token sent as `Authorization: Bearer <token>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Apply command line overrides on top of the file values.
    pub fn with_overrides(mut self, base_url: Option<String>, token: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
        if token.is_some() {
            self.api.token = token;
        }
        self
    }

    /// Time zone for date display. Unknown names fall back to the system zone.
    pub fn resolve_time_zone(&self) -> TimeZone {
        match self.time_zone.as_deref() {
            Some(name) => TimeZone::get(name).unwrap_or_else(|err| {
                tracing::warn!(time_zone = name, "Unknown time zone, using system zone: {err}");
                TimeZone::system()
            }),
            None => TimeZone::system(),
        }
    }
}
