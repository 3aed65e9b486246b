use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("missing or invalid access token")]
    Unauthorized,
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Which external API a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamApi {
    GitHub,
    Gemini,
}

impl UpstreamApi {
    /// Message shown to callers. Upstream detail never leaves the process.
    pub fn caller_message(&self) -> &'static str {
        match self {
            UpstreamApi::GitHub => "GitHub API request failed",
            UpstreamApi::Gemini => "Failed to generate summary",
        }
    }
}

impl fmt::Display for UpstreamApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamApi::GitHub => f.write_str("GitHub"),
            UpstreamApi::Gemini => f.write_str("Gemini"),
        }
    }
}

#[derive(Debug, Error)]
#[error("{api} request failed{}: {message}", .status.map(|code| format!(" with status {code}")).unwrap_or_default())]
pub struct UpstreamError {
    pub api: UpstreamApi,
    pub status: Option<u16>,
    pub message: String,
}

impl UpstreamError {
    pub fn new(api: UpstreamApi, message: impl Into<String>) -> Self {
        Self {
            api,
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(api: UpstreamApi, status: u16, message: impl Into<String>) -> Self {
        Self {
            api,
            status: Some(status),
            message: message.into(),
        }
    }
}
