use async_trait::async_trait;

use crate::domain::commit::{CommitHistoryQuery, HistoryPayload};
use crate::error::AppResult;

#[async_trait]
pub trait CommitHistoryService: Send + Sync {
    /// Runs the query upstream and returns the response body untouched.
    async fn fetch_history(&self, query: &CommitHistoryQuery) -> AppResult<HistoryPayload>;
}
