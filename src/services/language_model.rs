use async_trait::async_trait;

use crate::domain::prompt::FinalPrompt;
use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    /// Whether a credential is present. Checked before every request.
    fn is_configured(&self) -> bool;

    async fn summarize(&self, prompt: &FinalPrompt) -> AppResult<String>;
}
