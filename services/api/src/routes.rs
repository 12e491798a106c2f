use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use rea_transmorgrifier::error::AppError;
use rea_transmorgrifier::{Listing, ParsedResult};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ParseRequest {
    pub(crate) xml: String,
    /// Listing from an earlier parse; the segment with the same identity is merged onto it.
    #[serde(default)]
    pub(crate) existing_listing: Option<Listing>,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/listings/parse", post(parse_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn parse_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ParseRequest>,
) -> Result<Json<ParsedResult>, AppError> {
    let ParseRequest {
        xml,
        existing_listing,
    } = payload;

    if xml.trim().is_empty() {
        return Err(AppError::BadRequest("xml must not be empty".to_string()));
    }

    let transmorgrifier = Arc::clone(&state.transmorgrifier);
    let result = tokio::task::spawn_blocking(move || {
        transmorgrifier.parse(&xml, existing_listing.as_ref())
    })
    .await
    .map_err(axum::Error::new)?;

    info!(
        listings = result.listings.len(),
        errors = result.errors.len(),
        unhandled = result.unhandled_data.len(),
        "parse request complete"
    );
    Ok(Json(result))
}
