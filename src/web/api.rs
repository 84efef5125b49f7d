use axum::{body::Bytes, extract::State, Json};
use chrono::Utc;
use log::info;
use serde::Serialize;
use utoipa::ToSchema;

use crate::convert::driver;
use crate::ingest::UploadBatch;
use crate::web::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectResponse {
    pub status: String,
    /// Filesystem path of the stored raw submission.
    pub received: String,
    /// URL path of the generated map document.
    pub map: String,
    pub accepted: usize,
    pub rejected: usize,
}

#[utoipa::path(
    post,
    path = "/data_collector",
    tag = "collector",
    request_body(content = UploadBatch, content_type = "application/json"),
    responses(
        (status = 200, description = "Batch stored and map generated", body = CollectResponse),
        (status = 400, description = "Malformed batch, schema mismatch or no valid samples", body = ErrorResponse),
        (status = 500, description = "Storage or rendering failure", body = ErrorResponse)
    )
)]
pub async fn collect(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<CollectResponse>> {
    // The raw body is archived before parsing; even a malformed submission
    // leaves an inspectable artifact. Ids derive from receipt time.
    let paths = state.store.submission(Utc::now());
    state
        .store
        .save_raw(&paths, &body)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let batch: UploadBatch =
        serde_json::from_slice(&body).map_err(|e| ApiError::Validation(e.to_string()))?;

    state
        .store
        .save_csv(&paths, &batch)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let report = driver::convert_file(&paths.csv, &paths.map)?;

    info!(
        "submission {}: {} accepted, {} rejected",
        paths.id,
        report.accepted,
        report.rejections.len()
    );

    Ok(Json(CollectResponse {
        status: "ok".to_string(),
        received: paths.raw.display().to_string(),
        map: paths.map_url(),
        accepted: report.accepted,
        rejected: report.rejections.len(),
    }))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MapEntry {
    pub name: String,
    pub url: String,
}

#[utoipa::path(
    get,
    path = "/api/maps",
    tag = "maps",
    responses(
        (status = 200, description = "Generated map documents, oldest first", body = Vec<MapEntry>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_maps(State(state): State<AppState>) -> ApiResult<Json<Vec<MapEntry>>> {
    let names = state
        .store
        .list_maps()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(
        names
            .into_iter()
            .map(|name| MapEntry {
                url: format!("/maps/{}", name),
                name,
            })
            .collect(),
    ))
}
