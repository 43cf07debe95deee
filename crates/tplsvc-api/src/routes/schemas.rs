//! # Schemas
//!
//! - `GET /schema/{name}` — the schema's JSON document, or 404.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use super::json_response;
use crate::error::AppError;
use crate::state::AppState;

/// Build the schemas router.
pub fn router() -> Router<AppState> {
    Router::new().route("/schema/{name}", get(get_schema))
}

/// GET /schema/{name} — Return a schema document. Duplicate names resolve
/// to the last-loaded file.
#[utoipa::path(
    get,
    path = "/schema/{name}",
    params(("name" = String, Path, description = "Schema file base name")),
    responses(
        (status = 200, description = "Schema document", body = serde_json::Value, content_type = "application/json"),
        (status = 404, description = "No schema with this name"),
    ),
    tag = "schemas"
)]
pub(crate) async fn get_schema(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let schema = state
        .registry
        .find_schema(&name)
        .ok_or_else(|| AppError::NotFound(format!("schema {name}")))?;
    json_response(&schema.content)
}
