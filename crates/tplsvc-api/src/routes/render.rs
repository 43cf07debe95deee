//! # Render
//!
//! - `POST /render` — render a template against caller-supplied JSON.
//!
//! The data is handed to the engine as-is; it is not checked against the
//! template's schema.
//!
//! The body is parsed as JSON whatever its `Content-Type`, so browser
//! callers can post `text/plain` and skip the CORS preflight.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use super::TEXT_UTF8;
use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Request to render a template.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RenderRequest {
    /// Public template name.
    pub template: String,
    /// Render input. Absent means `null`.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Build the render router.
pub fn router() -> Router<AppState> {
    Router::new().route("/render", post(render))
}

/// POST /render — Render a template as plain text.
#[utoipa::path(
    post,
    path = "/render",
    request_body = RenderRequest,
    responses(
        (status = 200, description = "Rendered output", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorBody),
        (status = 404, description = "No template with this name"),
        (status = 500, description = "Template failed to render", body = crate::error::ErrorBody),
    ),
    tag = "render"
)]
pub(crate) async fn render(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let req: RenderRequest = extract_json(Json::from_bytes(&body))?;
    let output = state.registry.render(&req.template, &req.data)?;
    Ok(([(header::CONTENT_TYPE, TEXT_UTF8)], output).into_response())
}
