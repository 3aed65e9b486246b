use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
};

use crate::domain::commit::{CommitHistoryQuery, HistoryPayload};
use crate::error::{AppError, AppResult, UpstreamApi, UpstreamError};
use crate::services::CommitHistoryService;

const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct GithubClient {
    http: Client,
    graphql_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(graphql_url: String, token: Option<String>, timeout: Duration) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Configuration(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            http,
            graphql_url,
            token,
        })
    }

    fn token(&self) -> AppResult<&str> {
        self.token.as_deref().ok_or_else(|| {
            AppError::ServiceUnavailable("GitHub token is not configured".to_string())
        })
    }

    fn auth_header(token: &str) -> String {
        format!("Bearer {token}")
    }
}

fn upstream(message: String) -> AppError {
    UpstreamError::new(UpstreamApi::GitHub, message).into()
}

#[async_trait]
impl CommitHistoryService for GithubClient {
    async fn fetch_history(&self, query: &CommitHistoryQuery) -> AppResult<HistoryPayload> {
        let token = self.token()?;

        let response = self
            .http
            .post(&self.graphql_url)
            .header(AUTHORIZATION, Self::auth_header(token))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .json(query)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    upstream(format!("request timed out: {err}"))
                } else {
                    upstream(format!("failed to call GitHub: {err}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(UpstreamError::with_status(UpstreamApi::GitHub, status.as_u16(), body).into());
        }

        let body = response
            .text()
            .await
            .map_err(|err| upstream(format!("failed to read GitHub response: {err}")))?;
        HistoryPayload::parse(body)
            .map_err(|err| upstream(format!("failed to parse GitHub response: {err}")))
    }
}
