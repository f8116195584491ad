//! Client configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use feed_core::SortOrder;
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub feed: FeedConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Remote API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Create an API config with default timeout and no token
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: None,
            request_timeout_secs: default_request_timeout(),
        }
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Feed behaviour configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub default_sort: SortOrder,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_sort: SortOrder::default(),
        }
    }
}

/// Maximum page size the API accepts
pub const MAX_PAGE_SIZE: u32 = 100;

// Default value functions
fn default_app_name() -> String {
    "community-feed".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_request_timeout() -> u64 {
    10
}

fn default_page_size() -> u32 {
    10
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `FEED_API_URL` is missing or a value cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw)
                .ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
            None => Environment::default(),
        };

        let base_url = lookup("FEED_API_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingVar("FEED_API_URL"))?;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("FEED_API_URL", base_url));
        }

        let request_timeout_secs = match lookup("FEED_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue("FEED_REQUEST_TIMEOUT_SECS", raw))?,
            None => default_request_timeout(),
        };

        let page_size = match lookup("FEED_PAGE_SIZE") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue("FEED_PAGE_SIZE", raw))?
                .clamp(1, MAX_PAGE_SIZE),
            None => default_page_size(),
        };

        let default_sort = match lookup("FEED_DEFAULT_SORT") {
            Some(raw) => SortOrder::parse(&raw)
                .ok_or(ConfigError::InvalidValue("FEED_DEFAULT_SORT", raw))?,
            None => SortOrder::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ApiConfig {
                base_url,
                access_token: lookup("FEED_ACCESS_TOKEN").filter(|s| !s.is_empty()),
                request_timeout_secs,
            },
            feed: FeedConfig {
                page_size,
                default_sort,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
