use crate::auth::Credential;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none, get_env_secret};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
/// Authentication credentials for the EdgeLink API
///
/// When both an API key and email/password are present the API key is used.
pub struct Credentials {
    /// Long-lived API key (`elk_...`)
    pub api_key: Option<String>,
    /// Account email for session login
    pub email: Option<String>,
    /// Account password for session login
    pub password: Option<String>,
}

impl Credentials {
    /// Credentials holding only an API key
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            ..Default::default()
        }
    }

    /// Credentials holding only email and password
    pub fn session(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            api_key: None,
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// No credentials at all
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The active credential, API key first
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        if let Some(key) = &self.api_key {
            return Some(Credential::api_key(key.clone()));
        }
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some(Credential::session(email, password)),
            _ => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration of the REST transport
pub struct RestApiConfig {
    /// Base URL of the service, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds; 0 disables the timeout
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Client-side throttle applied before each request
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Length of the period in seconds
    pub period_seconds: u64,
    /// Requests that may be sent back to back before throttling starts
    pub burst_size: u32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the EdgeLink client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST transport configuration
    pub rest_api: RestApiConfig,
    /// Optional client-side rate limiting; disabled when `None`
    pub rate_limiter: Option<RateLimiterConfig>,
    /// Page size used by listings when the caller does not pick one
    pub page_size: u32,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("credentials", &self.credentials)
            .field("rest_api", &self.rest_api)
            .field("rate_limiter", &self.rate_limiter)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment and an optional `.env` file
    ///
    /// Variables:
    /// - `EDGELINK_BASE_URL` (default `https://go.shortedbro.xyz`)
    /// - `EDGELINK_API_KEY`, `EDGELINK_EMAIL`, `EDGELINK_PASSWORD` (no defaults)
    /// - `EDGELINK_TIMEOUT_SECS` (default 30, 0 for no timeout)
    /// - `EDGELINK_PAGE_SIZE` (default 50)
    /// - `EDGELINK_RATE_LIMIT_MAX_REQUESTS`, `EDGELINK_RATE_LIMIT_PERIOD_SECONDS`,
    ///   `EDGELINK_RATE_LIMIT_BURST_SIZE`; limiting is enabled only when the
    ///   maximum is set
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = Credentials {
            api_key: get_env_secret("EDGELINK_API_KEY"),
            email: get_env_secret("EDGELINK_EMAIL"),
            password: get_env_secret("EDGELINK_PASSWORD"),
        };
        if credentials.credential().is_none() {
            warn!(
                "Neither EDGELINK_API_KEY nor EDGELINK_EMAIL/EDGELINK_PASSWORD are set, requests will be anonymous"
            );
        }

        let rate_limiter = get_env_or_none::<u32>("EDGELINK_RATE_LIMIT_MAX_REQUESTS").map(
            |max_requests| RateLimiterConfig {
                max_requests,
                period_seconds: get_env_or_default("EDGELINK_RATE_LIMIT_PERIOD_SECONDS", 60),
                burst_size: get_env_or_default("EDGELINK_RATE_LIMIT_BURST_SIZE", 10),
            },
        );

        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: get_env_or_default("EDGELINK_BASE_URL", DEFAULT_BASE_URL.to_string()),
                timeout: get_env_or_default("EDGELINK_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter,
            page_size: get_env_or_default("EDGELINK_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    /// Configuration for `base_url` with the given credentials and defaults
    /// for everything else; never reads the environment
    pub fn with_base_url(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            rate_limiter: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the request timeout in seconds; 0 disables it
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.rest_api.timeout = timeout_secs;
        self
    }

    /// Enables client-side rate limiting
    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiterConfig) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }

    /// Base URL with any trailing slash removed
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.rest_api.base_url.trim_end_matches('/')
    }
}
