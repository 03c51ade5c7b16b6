use crate::application::telemetry::{TransportEvent, TransportObserver};
use crate::constants::{
    ATLASSIAN_DOMAIN, DEFAULT_TIMEOUT_SECS, ENV_API_TOKEN, ENV_BASE_URL, ENV_DEBUG,
    ENV_SITE_NAME, ENV_TIMEOUT_SECS, ENV_USER_EMAIL,
};
use crate::utils::config::{get_env_non_empty, get_env_or_none, parse_flag};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Authentication credentials for an Atlassian cloud tenant
pub struct Credentials {
    /// Site name, the `<site>` part of `<site>.atlassian.net`
    pub site_name: String,
    /// Email of the Atlassian account
    pub user_email: String,
    /// API token of the Atlassian account
    #[serde(skip_serializing)]
    pub api_token: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(
        site_name: impl Into<String>,
        user_email: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            site_name: site_name.into(),
            user_email: user_email.into(),
            api_token: api_token.into(),
        }
    }

    /// Tenant base URL, `https://{site_name}.atlassian.net`
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}.{}", self.site_name, ATLASSIAN_DOMAIN)
    }

    /// Value of the `Authorization` header: `Basic base64(user_email:api_token)`
    #[must_use]
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.user_email, self.api_token);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Process configuration, loaded once at start and passed explicitly
pub struct Config {
    /// `ATLASSIAN_SITE_NAME`
    pub site_name: Option<String>,
    /// `ATLASSIAN_USER_EMAIL`
    pub user_email: Option<String>,
    /// `ATLASSIAN_API_TOKEN`
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    /// Overrides the tenant URL derived from the site name
    pub base_url: Option<String>,
    /// Timeout in seconds for REST API requests
    pub timeout_secs: u64,
    /// Debug logging requested through `DEBUG`
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the `.env` file, if any, and reads the configuration from the environment
    pub fn new() -> Self {
        match load_env_file() {
            Ok(path) => debug!("Successfully loaded .env file: {}", path.display()),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }
        Self::from_env()
    }

    /// Reads the configuration from the process environment only
    pub fn from_env() -> Self {
        Config {
            site_name: get_env_non_empty(ENV_SITE_NAME),
            user_email: get_env_non_empty(ENV_USER_EMAIL),
            api_token: get_env_non_empty(ENV_API_TOKEN),
            base_url: get_env_non_empty(ENV_BASE_URL),
            timeout_secs: timeout_or_default(get_env_or_none(ENV_TIMEOUT_SECS)),
            debug: get_env_non_empty(ENV_DEBUG)
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Configuration with explicit credentials and defaults for everything else
    pub fn with_credentials(
        site_name: impl Into<String>,
        user_email: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Config {
            site_name: Some(site_name.into()),
            user_email: Some(user_email.into()),
            api_token: Some(api_token.into()),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            debug: false,
        }
    }

    /// Overrides the tenant base URL
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Resolves the credentials triple
    ///
    /// Returns `None` and reports a single `MissingCredentials` event when any of
    /// the three values is absent or blank. Never fails.
    pub fn credentials(&self, observer: &dyn TransportObserver) -> Option<Credentials> {
        match (
            present(&self.site_name),
            present(&self.user_email),
            present(&self.api_token),
        ) {
            (Some(site_name), Some(user_email), Some(api_token)) => {
                Some(Credentials::new(site_name, user_email, api_token))
            }
            (site_name, user_email, api_token) => {
                let missing = [
                    (ENV_SITE_NAME, site_name.is_none()),
                    (ENV_USER_EMAIL, user_email.is_none()),
                    (ENV_API_TOKEN, api_token.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                observer.on_event(&TransportEvent::MissingCredentials { missing });
                None
            }
        }
    }
}

/// Loads the nearest `.env` file into the process environment
pub fn load_env_file() -> Result<PathBuf, dotenv::Error> {
    dotenv()
}

/// Request timeout in seconds; absent or zero falls back to the default
#[must_use]
pub fn timeout_or_default(timeout_secs: Option<u64>) -> u64 {
    match timeout_secs {
        Some(0) => {
            warn!("{ENV_TIMEOUT_SECS} must be positive, using {DEFAULT_TIMEOUT_SECS}s");
            DEFAULT_TIMEOUT_SECS
        }
        Some(secs) => secs,
        None => DEFAULT_TIMEOUT_SECS,
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
