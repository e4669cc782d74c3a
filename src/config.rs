use std::env;
use std::time::Duration;

use url::Url;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const STRIPE_API_BASE: &str = "https://api.stripe.com/";
const HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid(key, err) => write!(f, "{} is invalid: {}", key, err),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub cloud_api_url: Url,
    pub cloud_api_token: Option<String>,
    pub stripe_publishable_key: Option<String>,
    pub stripe_api_base: Url,
    /// Development mode: card setups are confirmed by the mock confirmer.
    pub mock_mode: bool,
    pub http_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let cloud_api_url = read_url("CLOUD_API_URL")?.ok_or(ConfigError::Missing("CLOUD_API_URL"))?;
        let stripe_api_base = match read_url("STRIPE_API_BASE")? {
            Some(url) => url,
            None => Url::parse(STRIPE_API_BASE)
                .map_err(|e| ConfigError::Invalid("STRIPE_API_BASE", e.to_string()))?,
        };

        let mock_mode = read_optional("CWS_MOCK_MODE")
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        let stripe_publishable_key = read_optional("STRIPE_PUBLISHABLE_KEY");
        if stripe_publishable_key.is_none() && !mock_mode {
            return Err(ConfigError::Missing("STRIPE_PUBLISHABLE_KEY"));
        }

        let port = match read_optional("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", value))?,
            None => PORT,
        };

        let http_timeout = match read_optional("HTTP_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::Invalid("HTTP_TIMEOUT_SECS", value))?,
            None => Duration::from_secs(HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            host: read_optional("HOST").unwrap_or_else(|| HOST.to_string()),
            port,
            cloud_api_url,
            cloud_api_token: read_optional("CLOUD_API_TOKEN"),
            stripe_publishable_key,
            stripe_api_base,
            mock_mode,
            http_timeout,
        })
    }
}

fn read_optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn read_url(key: &'static str) -> Result<Option<Url>, ConfigError> {
    read_optional(key)
        .map(|value| Url::parse(&value).map_err(|e| ConfigError::Invalid(key, e.to_string())))
        .transpose()
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
