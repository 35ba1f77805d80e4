//! Build-time configuration
//!
//! A browser bundle has no config file or argv; values are baked in at
//! compile time through `REELS_API_BASE_URL` and `REELS_LOG_LEVEL`.

use std::str::FromStr;

use log::LevelFilter;

/// Where and how to reach the backend
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Absolute origin, e.g. `https://api.example.com`. Empty means "same origin".
    pub base_url: String,
    /// Send the session cookie with every request
    pub include_credentials: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            include_credentials: true,
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Fill an empty base URL with the page origin
    pub fn or_origin(mut self, origin: &str) -> Self {
        if self.base_url.trim().is_empty() {
            self.base_url = origin.to_string();
        }
        self
    }

    /// Join an absolute API path (`/api/...`) onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: GatewayConfig,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: GatewayConfig::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("REELS_API_BASE_URL"), option_env!("REELS_LOG_LEVEL"))
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api: base_url.map(GatewayConfig::new).unwrap_or(defaults.api),
            log_level: log_level
                .and_then(|level| LevelFilter::from_str(level.trim()).ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
