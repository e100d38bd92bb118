//! API endpoint handlers
//!
//! This module implements the HTTP endpoints for the analyze proxy: the
//! analyze call itself, CORS preflight, and a health check.

use crate::core::dispatcher::AnalyzeDispatcher;
use crate::core::error::AnalyzeError;
use crate::core::provider::ProviderKind;
use crate::models::analyze::AnalyzeRequest;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Instrument, error, info, info_span, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<AnalyzeDispatcher>,
}

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/analyze",
            post(analyze)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            warn!("Rejected analyze request: {}", self);
            StatusCode::BAD_REQUEST
        } else {
            error!("Analyze request failed: {}", self);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        error_response(status, self.to_string())
    }
}

/// POST /api/analyze - Analyze an image with the selected provider
async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let request_id = uuid::Uuid::new_v4();

    async move {
        let Json(request) = match payload {
            Ok(payload) => payload,
            Err(rejection) => {
                warn!("Malformed analyze body: {}", rejection.body_text());
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid request body: {}", rejection.body_text()),
                );
            }
        };

        match state.dispatcher.analyze(request).await {
            Ok(result) => {
                info!("Analyze request completed");
                Json(result).into_response()
            }
            Err(e) => e.into_response(),
        }
    }
    .instrument(info_span!("analyze", %request_id))
    .await
}

/// OPTIONS /api/analyze - Bare preflight without CORS request headers
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "claude_configured": state.dispatcher.is_configured(ProviderKind::Claude),
        "openai_configured": state.dispatcher.is_configured(ProviderKind::OpenAI),
    }))
}
