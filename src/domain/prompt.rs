use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const DEFAULT_INSTRUCTIONS: &str = "You are a helpful programming assistant.
Summarize the following GitHub commit message concisely.
Respond in 1-2 sentences.";

const MESSAGE_HEADER: &str = "\n\nHere is the Commit Message to summarize:\n\"\"\"\n";
const MESSAGE_FOOTER: &str = "\n\"\"\"";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizationRequest {
    #[serde(default)]
    pub commit_message: Option<String>,
    #[serde(default)]
    pub custom_prompt: Option<String>,
}

impl SummarizationRequest {
    pub fn into_prompt(self) -> AppResult<FinalPrompt> {
        let commit_message = self
            .commit_message
            .filter(|message| !message.trim().is_empty())
            .ok_or_else(|| AppError::InvalidRequest("No commit message provided".to_string()))?;
        let instructions = select_instructions(self.custom_prompt.as_deref());
        Ok(FinalPrompt::assemble(instructions, &commit_message))
    }
}

/// Picks the instruction block: the trimmed custom prompt when it has content,
/// otherwise [`DEFAULT_INSTRUCTIONS`].
pub fn select_instructions(custom_prompt: Option<&str>) -> &str {
    custom_prompt
        .map(str::trim)
        .filter(|prompt| !prompt.is_empty())
        .unwrap_or(DEFAULT_INSTRUCTIONS)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalPrompt(String);

impl FinalPrompt {
    /// The commit message is always appended, whatever the instructions are.
    pub fn assemble(instructions: &str, commit_message: &str) -> Self {
        let mut text = String::with_capacity(
            instructions.len() + MESSAGE_HEADER.len() + commit_message.len() + MESSAGE_FOOTER.len(),
        );
        text.push_str(instructions);
        text.push_str(MESSAGE_HEADER);
        text.push_str(commit_message);
        text.push_str(MESSAGE_FOOTER);
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
