//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec served
//! at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "tplsvc",
        description = "Handlebars template rendering with JSON schema lookup."
    ),
    paths(
        crate::routes::schemas::get_schema,
        crate::routes::templates::list_templates,
        crate::routes::render::render,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::templates::TemplateEntry,
        crate::routes::render::RenderRequest,
    )),
    tags(
        (name = "schemas", description = "JSON schemas loaded from schemas/"),
        (name = "templates", description = "Templates loaded from templates/"),
        (name = "render", description = "Template rendering"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_every_endpoint() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&str> = spec.paths.paths.keys().map(String::as_str).collect();
        assert!(paths.contains(&"/schema/{name}"));
        assert!(paths.contains(&"/templates"));
        assert!(paths.contains(&"/render"));
    }
}
