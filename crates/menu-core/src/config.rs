//! Client Configuration
//!
//! The frontend is a static bundle, so settings are baked in at build time
//! (`FOOD_API_URL`, `FOOD_LOG_LEVEL`, `FOOD_NOTICE_TIMEOUT_MS`) and fall back
//! to defaults.

use tracing::Level;

use crate::food::FoodId;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_LOG_LEVEL: Level = Level::DEBUG;
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Where the `/foods` resource lives and how the client reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    pub log_level: Level,
    /// 0 keeps failure notices up until dismissed
    pub notice_timeout_ms: u32,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            log_level: DEFAULT_LOG_LEVEL,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }

    /// Settings captured from the build environment
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("FOOD_API_URL"),
            option_env!("FOOD_LOG_LEVEL"),
            option_env!("FOOD_NOTICE_TIMEOUT_MS"),
        )
    }

    /// Build from raw optional values; blank or unparseable values use the default.
    pub fn from_values(
        base_url: Option<&str>,
        log_level: Option<&str>,
        notice_timeout_ms: Option<&str>,
    ) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);

        let log_level = log_level
            .and_then(|level| level.trim().parse::<Level>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        let notice_timeout_ms = notice_timeout_ms
            .and_then(|ms| ms.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_NOTICE_TIMEOUT_MS);

        Self {
            base_url: normalize_base_url(base_url),
            log_level,
            notice_timeout_ms,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection endpoint
    pub fn foods_url(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    /// Member endpoint
    pub fn food_url(&self, id: FoodId) -> String {
        format!("{}/foods/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
