//! # API Route Modules
//!
//! - `schemas` — fetch a loaded JSON schema by name.
//! - `templates` — list renderable templates and their schemas.
//! - `render` — render a named template against caller-supplied JSON.

pub mod render;
pub mod schemas;
pub mod templates;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

pub(crate) const JSON_UTF8: &str = "application/json; charset=utf-8";
pub(crate) const TEXT_UTF8: &str = "text/plain; charset=utf-8";

/// Serialize `value` into a `200 OK` JSON response with an explicit charset.
pub(crate) fn json_response<T: Serialize>(value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_string(value)
        .map_err(|e| AppError::Internal(format!("response serialization failed: {e}")))?;
    Ok(([(header::CONTENT_TYPE, JSON_UTF8)], body).into_response())
}
