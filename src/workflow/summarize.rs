use tracing::{debug, error, info, warn};

use crate::context::AppContext;
use crate::domain::prompt::SummarizationRequest;
use crate::error::{AppError, AppResult};

pub async fn summarize_commit(ctx: &AppContext, request: SummarizationRequest) -> AppResult<String> {
    if !ctx.language_model.is_configured() {
        warn!("summarization requested but no Gemini API key is configured");
        return Err(AppError::ServiceUnavailable(
            "Gemini API key is not configured".to_string(),
        ));
    }

    let prompt = request.into_prompt()?;
    info!(model = %ctx.config.gemini_model, "sending summarization request to Gemini");
    debug!(prompt = prompt.as_str(), "final prompt");

    match ctx.language_model.summarize(&prompt).await {
        Ok(summary) => {
            info!(chars = summary.len(), "Gemini summary received");
            Ok(summary)
        }
        Err(err) => {
            error!(error = %err, "Gemini summarization failed");
            Err(err)
        }
    }
}
