use std::env;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub port: u16,
    pub github_token: Option<String>,
    pub github_graphql_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub upstream_timeout: Duration,
    pub cors_allowed_origin: Option<String>,
    pub access_token: Option<String>,
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Blank
    /// values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|err| AppError::Configuration(format!("invalid PORT '{raw}': {err}")))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match var("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|err| {
                AppError::Configuration(format!("invalid UPSTREAM_TIMEOUT_SECS '{raw}': {err}"))
            })?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(AppError::Configuration(
                "UPSTREAM_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
            github_token: var("GITHUB_TOKEN"),
            github_graphql_url: var("GITHUB_GRAPHQL_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_GRAPHQL_URL.to_string()),
            gemini_api_key: var("GEMINI_API_KEY"),
            gemini_api_base: var("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            upstream_timeout: Duration::from_secs(timeout_secs),
            cors_allowed_origin: var("CORS_ALLOWED_ORIGIN"),
            access_token: var("PROXY_ACCESS_TOKEN"),
        })
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
