use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::commit::{CommitHistoryQuery, HistoryPayload};
use crate::domain::prompt::FinalPrompt;
use crate::error::{AppError, AppResult, UpstreamApi, UpstreamError};
use crate::services::{CommitHistoryService, LanguageModelService};

pub enum FakeOutcome<T> {
    Ok(T),
    Status(u16, &'static str),
    Timeout,
}

impl<T: Clone> FakeOutcome<T> {
    fn resolve(&self, api: UpstreamApi) -> AppResult<T> {
        match self {
            FakeOutcome::Ok(value) => Ok(value.clone()),
            FakeOutcome::Status(status, body) => {
                Err(UpstreamError::with_status(api, *status, *body).into())
            }
            FakeOutcome::Timeout => Err(AppError::from(UpstreamError::new(
                api,
                "request timed out",
            ))),
        }
    }
}

pub struct FakeCommitHistory {
    outcome: FakeOutcome<String>,
    calls: AtomicUsize,
}

impl FakeCommitHistory {
    pub fn new(outcome: FakeOutcome<Value>) -> Self {
        let outcome = match outcome {
            FakeOutcome::Ok(value) => FakeOutcome::Ok(value.to_string()),
            FakeOutcome::Status(status, body) => FakeOutcome::Status(status, body),
            FakeOutcome::Timeout => FakeOutcome::Timeout,
        };
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    /// Answers with exactly this body text.
    pub fn raw(body: &str) -> Self {
        Self {
            outcome: FakeOutcome::Ok(body.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommitHistoryService for FakeCommitHistory {
    async fn fetch_history(&self, _query: &CommitHistoryQuery) -> AppResult<HistoryPayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let body = self.outcome.resolve(UpstreamApi::GitHub)?;
        HistoryPayload::parse(body)
            .map_err(|err| UpstreamError::new(UpstreamApi::GitHub, err.to_string()).into())
    }
}

pub struct FakeLanguageModel {
    configured: bool,
    outcome: FakeOutcome<String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeLanguageModel {
    pub fn new(outcome: FakeOutcome<String>) -> Self {
        Self {
            configured: true,
            outcome,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new(FakeOutcome::Ok("unused".to_string()))
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModelService for FakeLanguageModel {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn summarize(&self, prompt: &FinalPrompt) -> AppResult<String> {
        self.prompts.lock().unwrap().push(prompt.as_str().to_string());
        self.outcome.resolve(UpstreamApi::Gemini)
    }
}
