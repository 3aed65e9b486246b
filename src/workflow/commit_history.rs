use tracing::{debug, error, info, warn};

use crate::context::AppContext;
use crate::domain::commit::{
    CommitHistoryRequest, HISTORY_LIMIT, HistoryPayload, graphql_errors, history_edges,
};
use crate::error::{AppError, AppResult};

/// Validates the repository pair, forwards the fixed history query and hands
/// back the upstream body as received.
pub async fn fetch_commit_history(
    ctx: &AppContext,
    request: CommitHistoryRequest,
) -> AppResult<HistoryPayload> {
    let query = request.into_query()?;
    let slug = query.slug();
    info!(repository = %slug, "requesting commit history from GitHub");

    let payload = match ctx.commit_history.fetch_history(&query).await {
        Ok(payload) => payload,
        Err(AppError::Upstream(err)) => {
            error!(repository = %slug, status = ?err.status, detail = %err.message, "GitHub request failed");
            return Err(err.into());
        }
        Err(err) => {
            error!(repository = %slug, error = %err, "GitHub request not attempted");
            return Err(err);
        }
    };

    if let Some(errors) = graphql_errors(payload.value()) {
        warn!(repository = %slug, errors = %serde_json::Value::Array(errors.clone()), "GitHub returned GraphQL errors");
    }
    match history_edges(payload.value()) {
        Some(edges) => {
            info!(repository = %slug, commits = edges.len(), limit = HISTORY_LIMIT, "received GitHub response, relaying to client");
            if let Some(latest) = edges.first() {
                let author = latest
                    .node
                    .author
                    .as_ref()
                    .and_then(|author| author.name.as_deref().or(author.email.as_deref()))
                    .unwrap_or("unknown");
                debug!(
                    oid = %latest.node.oid,
                    headline = %latest.node.message_headline,
                    committed_at = %latest.node.committed_date,
                    author,
                    "latest commit"
                );
            }
        }
        None => info!(repository = %slug, "received GitHub response without commit history, relaying to client"),
    }

    Ok(payload)
}
