use std::fmt;
use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://ws.api.video";

pub const ENV_BASE_URL: &str = "APIVIDEO_BASE_URL";
pub const ENV_BEARER_TOKEN: &str = "APIVIDEO_BEARER_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "APIVIDEO_TIMEOUT_SECS";

/// Runtime configuration shared by every tool invocation.
///
/// Built once at startup and only read afterwards. The HTTP client inside is
/// cheap to clone and pools connections across concurrent calls.
#[derive(Clone)]
pub struct ApiConfig {
    base_url: Url,
    bearer_token: Option<String>,
    client: reqwest::Client,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            bearer_token: None,
            client: reqwest::Client::new(),
        })
    }

    /// Read `APIVIDEO_BASE_URL`, `APIVIDEO_BEARER_TOKEN` and
    /// `APIVIDEO_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] with a pluggable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut config = Self::new(&base_url)?;
        if let Some(token) = lookup(ENV_BEARER_TOKEN) {
            config = config.with_bearer_token(token);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Timeout(raw.clone()))?;
            config = config.with_timeout(Duration::from_secs(secs))?;
        }
        Ok(config)
    }

    /// Set the bearer token. An empty token is treated as no token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.bearer_token = if token.trim().is_empty() {
            None
        } else {
            Some(token)
        };
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Replace the client with one that applies a total request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::BaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::BaseUrl {
            url: raw.to_string(),
            reason: "expected an http(s) URL".into(),
        });
    }
    Ok(url)
}
