use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::domain::commit::CommitHistoryRequest;
use crate::domain::prompt::SummarizationRequest;
use crate::error::{AppError, AppResult};
use crate::workflow::commit_history::fetch_commit_history;
use crate::workflow::summarize::summarize_commit;

type SharedContext = Arc<AppContext>;

// ── Error envelope ──

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::ServiceUnavailable(_)
            | AppError::Upstream(_)
            | AppError::Configuration(_)
            | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn caller_message(&self) -> String {
        match self {
            AppError::InvalidRequest(message) | AppError::ServiceUnavailable(message) => {
                message.clone()
            }
            AppError::Unauthorized => "Unauthorized".to_string(),
            AppError::Upstream(err) => err.api.caller_message().to_string(),
            AppError::Configuration(_) | AppError::Io(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.caller_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        debug!(error = %rejection.body_text(), "rejected request body");
        AppError::InvalidRequest("request body must be a JSON object".to_string())
    })
}

// ── Router ──

pub fn router(ctx: AppContext) -> AppResult<Router> {
    let cors = cors_layer(ctx.config.cors_allowed_origin.as_deref())?;
    let state = Arc::new(ctx);

    let api = Router::new()
        .route("/api/github", post(post_commit_history))
        .route("/api/summarize", post(post_summarize))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_access_token,
        ));

    Ok(Router::new()
        .route("/api/test", get(health))
        .merge(api)
        .layer(cors)
        .with_state(state))
}

fn cors_layer(allowed_origin: Option<&str>) -> AppResult<CorsLayer> {
    match allowed_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin).map_err(|err| {
                AppError::Configuration(format!("invalid CORS_ALLOWED_ORIGIN '{origin}': {err}"))
            })?;
            Ok(CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any))
        }
        None => Ok(CorsLayer::permissive()),
    }
}

async fn require_access_token(
    State(ctx): State<SharedContext>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = ctx.config.access_token.as_deref() else {
        return next.run(request).await;
    };

    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    if presented.is_some_and(|token| tokens_match(token, expected)) {
        next.run(request).await
    } else {
        warn!(path = %request.uri().path(), "rejected request without a valid access token");
        AppError::Unauthorized.into_response()
    }
}

/// Compares digests so the check takes the same time wherever the inputs differ.
fn tokens_match(presented: &str, expected: &str) -> bool {
    blake3::hash(presented.as_bytes()) == blake3::hash(expected.as_bytes())
}

// ── GET /api/test ──

async fn health() -> Json<Value> {
    Json(serde_json::json!({ "message": "gitbrief server is running" }))
}

// ── POST /api/github ──

async fn post_commit_history(
    State(ctx): State<SharedContext>,
    payload: Result<Json<CommitHistoryRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = json_body(payload)?;
    let body = fetch_commit_history(&ctx, request).await?;
    Ok(([(CONTENT_TYPE, "application/json")], body.into_raw()).into_response())
}

// ── POST /api/summarize ──

#[derive(Serialize)]
struct SummaryResponse {
    summary: String,
}

async fn post_summarize(
    State(ctx): State<SharedContext>,
    payload: Result<Json<SummarizationRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    let request = json_body(payload)?;
    let summary = summarize_commit(&ctx, request).await?;
    Ok(Json(SummaryResponse { summary }))
}

// ── Tests ──
