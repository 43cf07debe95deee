//! # Templates
//!
//! - `GET /templates` — every renderable template with its schema name, in
//!   load order. Partials are not listed.
//!
//! [`TemplateEntry`] mirrors the registry's [`TemplateSummary`] field for
//! field. It exists only to carry the `ToSchema` derive, so the registry
//! crate stays free of `utoipa`. Both serialize to the same JSON.

use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tplsvc_registry::TemplateSummary;
use utoipa::ToSchema;

use super::json_response;
use crate::error::AppError;
use crate::state::AppState;

/// One entry of the template listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateEntry {
    /// Public template name.
    pub name: String,
    /// Name of the schema documenting the render input.
    pub schema: String,
}

impl From<TemplateSummary> for TemplateEntry {
    fn from(summary: TemplateSummary) -> Self {
        Self {
            name: summary.name,
            schema: summary.schema,
        }
    }
}

/// Build the templates router.
pub fn router() -> Router<AppState> {
    Router::new().route("/templates", get(list_templates))
}

/// GET /templates — List templates.
#[utoipa::path(
    get,
    path = "/templates",
    responses(
        (status = 200, description = "Templates in load order", body = Vec<TemplateEntry>),
    ),
    tag = "templates"
)]
pub(crate) async fn list_templates(State(state): State<AppState>) -> Result<Response, AppError> {
    let entries: Vec<TemplateEntry> = state
        .registry
        .list_templates()
        .into_iter()
        .map(TemplateEntry::from)
        .collect();
    json_response(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_like_summary() {
        let summary = TemplateSummary {
            name: "greeting".into(),
            schema: "person".into(),
        };
        let expected = serde_json::to_value(&summary).unwrap();
        let entry = TemplateEntry::from(summary);
        assert_eq!(serde_json::to_value(&entry).unwrap(), expected);
    }
}
