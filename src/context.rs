use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{CommitHistoryService, LanguageModelService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub commit_history: Arc<dyn CommitHistoryService>,
    pub language_model: Arc<dyn LanguageModelService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        commit_history: Arc<dyn CommitHistoryService>,
        language_model: Arc<dyn LanguageModelService>,
    ) -> Self {
        Self {
            config,
            commit_history,
            language_model,
        }
    }
}
