use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};

use crate::domain::prompt::FinalPrompt;
use crate::error::{AppError, AppResult, UpstreamApi, UpstreamError};
use crate::services::LanguageModelService;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http: Client,
    api_base: String,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_base: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Configuration(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            http,
            api_base,
            api_key,
            model,
        })
    }

    fn generate_endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

fn upstream(message: String) -> AppError {
    UpstreamError::new(UpstreamApi::Gemini, message).into()
}

#[async_trait]
impl LanguageModelService for GeminiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn summarize(&self, prompt: &FinalPrompt) -> AppResult<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::ServiceUnavailable("Gemini API key is not configured".to_string())
        })?;

        let response = self
            .http
            .post(self.generate_endpoint())
            .header(API_KEY_HEADER, api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&GenerateContentRequest::from_prompt(prompt.as_str()))
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    upstream(format!("request timed out: {err}"))
                } else {
                    upstream(format!("failed to call Gemini: {err}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(UpstreamError::with_status(UpstreamApi::Gemini, status.as_u16(), body).into());
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| upstream(format!("failed to parse Gemini response: {err}")))?;

        payload
            .into_text()
            .ok_or_else(|| upstream("Gemini returned no text candidate".to_string()))
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text = candidate
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect::<String>();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
