use utoipa::OpenApi;

use crate::ingest::{UploadBatch, UploadRecord};

use super::api::{CollectResponse, MapEntry};
use super::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(super::api::collect, super::api::list_maps),
    components(
        schemas(
            UploadBatch,
            UploadRecord,
            CollectResponse,
            MapEntry,
            ErrorResponse,
        )
    ),
    info(
        title = "Inclimap Collector API",
        description = "Receives GPS + inclination sample batches and renders them as interactive maps",
        version = "0.1.0"
    ),
    tags(
        (name = "collector", description = "Sample batch ingestion"),
        (name = "maps", description = "Generated map documents")
    )
)]
pub struct ApiDoc;
