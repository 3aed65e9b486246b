use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::http;
use crate::infra::gemini::GeminiClient;
use crate::infra::github::GithubClient;

pub async fn run(config: AppConfig) -> AppResult<()> {
    if config.github_token.is_none() {
        warn!("GITHUB_TOKEN not configured; /api/github will be unavailable.");
    }
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not configured; /api/summarize will be unavailable.");
    }
    if config.access_token.is_none() {
        info!("PROXY_ACCESS_TOKEN not set; proxy routes accept unauthenticated callers.");
    }

    let github = GithubClient::new(
        config.github_graphql_url.clone(),
        config.github_token.clone(),
        config.upstream_timeout,
    )?;
    let gemini = GeminiClient::new(
        config.gemini_api_base.clone(),
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.upstream_timeout,
    )?;

    let addr = config.listen_address();
    let context = AppContext::new(config, Arc::new(github), Arc::new(gemini));
    let app = http::router(context)?;

    let listener = TcpListener::bind(&addr).await?;
    info!("gitbrief server listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("gitbrief server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
