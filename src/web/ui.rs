use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use super::error::{ApiError, ApiResult};
use super::server::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub maps: Vec<String>,
}

pub async fn index(State(state): State<AppState>) -> ApiResult<IndexTemplate> {
    let maps = state
        .store
        .list_maps()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(IndexTemplate { maps })
}
