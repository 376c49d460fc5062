//! HTTP server implementation using Axum.

use std::net::SocketAddr;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ExecError;
use crate::executor::ExecuteRequest;
use crate::response::ExecuteResponse;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/execute", post(execute))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the HTTP server on the given port with the provided state.
pub async fn run_server(port: u16, state: AppState) {
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn health() -> &'static str {
    "OK"
}

async fn execute(
    State(state): State<AppState>,
    Json(req): Json<ExecuteRequest>,
) -> (StatusCode, Json<ExecuteResponse>) {
    info!(language = %req.language, "POST /execute");

    match state.executor.execute(&req).await {
        Ok(resp) => {
            let status = if resp.is_success() {
                StatusCode::OK
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, Json(resp))
        }
        Err(err) => {
            let status = match err {
                ExecError::Validation | ExecError::UnsupportedLanguage => StatusCode::BAD_REQUEST,
                ExecError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(failure_body(err)))
        }
    }
}

fn failure_body(err: ExecError) -> ExecuteResponse {
    match err {
        ExecError::Internal(io) => {
            ExecuteResponse::failure_with_details("Server error", json!(io.to_string()))
        }
        other => ExecuteResponse::failure(other.to_string()),
    }
}
