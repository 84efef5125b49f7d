use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::ingest::ArtifactStore;

use super::api;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::ui;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ArtifactStore>,
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let maps_dir = config.storage.maps_dir.clone();
    let store = ArtifactStore::new(
        config.storage.received_dir.clone(),
        config.storage.maps_dir.clone(),
    );

    let state = AppState {
        store: Arc::new(store),
    };

    // The collection page runs on phones against a self-signed origin, so
    // cross-origin requests stay wide open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // UI routes
        .route("/", get(ui::index))
        // Ingestion endpoint, path kept compatible with the collection page
        .route("/data_collector", post(api::collect))
        // Map listing and serving
        .route("/api/maps", get(api::list_maps))
        .nest_service("/maps", ServeDir::new(maps_dir))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
