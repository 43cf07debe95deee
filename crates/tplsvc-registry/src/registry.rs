//! # Registry
//!
//! The loaded schemas and templates, together with the Handlebars engine
//! holding compiled bodies and partials.
//!
//! ## Lookup Semantics
//!
//! Names are not unique. Every lookup scans in load order and returns the
//! **last** match, so a file discovered later shadows an earlier one with the
//! same name.
//!
//! ## Thread Safety
//!
//! A `Registry` is never mutated after [`Registry::load`] returns. It is
//! `Send + Sync` and is shared between request handlers behind an `Arc`.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::{LoadError, RenderError};
use crate::schema::{load_schemas, Schema};
use crate::template::{load_templates, Template};
use crate::{SCHEMAS_DIR, TEMPLATES_DIR};

/// Public view of a template, as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub name: String,
    pub schema: String,
}

/// Immutable, in-memory template and schema registry.
#[derive(Debug, Default)]
pub struct Registry {
    schemas: Vec<Schema>,
    templates: Vec<Template>,
    engine: Handlebars<'static>,
}

impl Registry {
    /// Load `base_dir/schemas` and then `base_dir/templates`.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoadError`] hit by either loader. Nothing is kept
    /// from a failed load.
    pub fn load(base_dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let base_dir = base_dir.as_ref();
        Self::load_from(&base_dir.join(SCHEMAS_DIR), &base_dir.join(TEMPLATES_DIR))
    }

    /// Load from explicit schema and template directories.
    ///
    /// Schemas are loaded to completion first; templates are validated
    /// against them.
    pub fn load_from(schemas_dir: &Path, templates_dir: &Path) -> Result<Self, LoadError> {
        info!(dir = %schemas_dir.display(), "loading schemas");
        let schemas = load_schemas(schemas_dir)?;
        info!(count = schemas.len(), "schemas loaded");

        info!(dir = %templates_dir.display(), "loading templates");
        let mut engine = Handlebars::new();
        let templates = load_templates(templates_dir, &schemas, &mut engine)?;
        info!(count = templates.len(), "templates loaded");

        Ok(Self {
            schemas,
            templates,
            engine,
        })
    }

    /// All schemas in load order.
    pub fn schemas(&self) -> &[Schema] {
        &self.schemas
    }

    /// All renderable templates in load order. Partials are not included.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Find a schema by name. The last-loaded match wins.
    pub fn find_schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.iter().rev().find(|s| s.name == name)
    }

    /// Find a template by name. The last-loaded match wins.
    pub fn find_template(&self, name: &str) -> Option<&Template> {
        self.templates.iter().rev().find(|t| t.name == name)
    }

    /// `{name, schema}` for every template, in load order.
    pub fn list_templates(&self) -> Vec<TemplateSummary> {
        self.templates
            .iter()
            .map(|t| TemplateSummary {
                name: t.name.clone(),
                schema: t.schema_name.clone(),
            })
            .collect()
    }

    /// Render the named template against `data`.
    ///
    /// `data` is not checked against the template's schema.
    ///
    /// # Errors
    ///
    /// [`RenderError::TemplateNotFound`] if no template has this name,
    /// [`RenderError::Engine`] if Handlebars fails while rendering.
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, RenderError> {
        let template = self
            .find_template(template_name)
            .ok_or_else(|| RenderError::TemplateNotFound(template_name.to_string()))?;
        self.engine
            .render(template.engine_key(), data)
            .map_err(|source| RenderError::Engine {
                template: template_name.to_string(),
                source: Box::new(source),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn schema(name: &str, content: Value) -> Schema {
        Schema {
            name: name.to_string(),
            content,
        }
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }

    #[test]
    fn empty_registry_has_no_entries() {
        let registry = Registry::default();
        assert!(registry.find_schema("person").is_none());
        assert!(registry.find_template("greeting").is_none());
        assert!(registry.list_templates().is_empty());
    }

    #[test]
    fn render_unknown_template_is_not_found() {
        let registry = Registry::default();
        let err = registry.render("missing", &json!({})).unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound(name) if name == "missing"));
    }

    #[test]
    fn find_schema_prefers_last_duplicate() {
        let registry = Registry {
            schemas: vec![
                schema("person", json!({"v": 1})),
                schema("other", json!({})),
                schema("person", json!({"v": 2})),
            ],
            ..Default::default()
        };
        assert_eq!(registry.find_schema("person").unwrap().content, json!({"v": 2}));
    }

    proptest! {
        #[test]
        fn find_schema_returns_last_match(names in proptest::collection::vec("[abc]", 0..12), probe in "[abcd]") {
            let schemas: Vec<Schema> = names
                .iter()
                .enumerate()
                .map(|(i, n)| schema(n, json!(i)))
                .collect();
            let expected = names.iter().rposition(|n| *n == probe).map(|i| json!(i));
            let registry = Registry { schemas, ..Default::default() };
            let found = registry.find_schema(&probe).map(|s| s.content.clone());
            prop_assert_eq!(found, expected);
        }
    }
}
