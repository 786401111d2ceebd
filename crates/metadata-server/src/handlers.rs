//! HTTP handlers for the metadata API.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use metadata_core::{DirectoryError, MetadataDirectory, QueryFilter, Record};

use crate::decode;

/// Shared application state: one directory handle per process.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<MetadataDirectory>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            directory: Arc::new(MetadataDirectory::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Query parameters for GET /v1. Percent-decoding is handled by the
/// extractor.
#[derive(Debug, Deserialize)]
pub struct GetParams {
    source: Option<String>,
    company: Option<String>,
    title: Option<String>,
}

/// Error responses carry the taxonomy's status code and the bare message
/// string as the body.
type ErrorReply = (StatusCode, Json<String>);

fn error_reply(err: DirectoryError) -> ErrorReply {
    tracing::debug!(error = %err, "request rejected");
    let status = StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(err.to_string()))
}

/// POST /v1/metadata
pub async fn create_metadata(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Record>, ErrorReply> {
    let record = decode::decode_record(&body).map_err(error_reply)?;
    let stored = state.directory.upsert(record).await.map_err(error_reply)?;
    Ok(Json(stored))
}

/// GET /v1
pub async fn get_metadata(
    State(state): State<AppState>,
    Query(params): Query<GetParams>,
) -> Result<Json<Vec<Record>>, ErrorReply> {
    let filter = QueryFilter::from_params(
        params.source.as_deref(),
        params.company.as_deref(),
        params.title.as_deref(),
    )
    .map_err(error_reply)?;

    Ok(Json(state.directory.query(&filter).await))
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
