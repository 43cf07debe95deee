//! # Request Extraction
//!
//! Maps JSON body rejections onto [`AppError::BadRequest`] so every
//! malformed request gets the same structured error body.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// Handlers that accept any `Content-Type` take the raw body and parse it
/// with [`Json::from_bytes`]:
/// ```ignore
/// async fn handler(body: Bytes) -> Result<..., AppError> {
///     let req: T = extract_json(Json::from_bytes(&body))?;
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
