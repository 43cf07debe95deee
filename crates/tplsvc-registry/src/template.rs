//! # Template Loader
//!
//! Walks a templates directory and turns each `*.hbs` / `*.handlebars` file
//! into either a partial or a renderable [`Template`].
//!
//! Files are processed one at a time in walk order. For each file:
//!
//! 1. split front matter from body;
//! 2. resolve the public name (`name` key, else the file base name);
//! 3. register the body as a partial if `partial` is set;
//! 4. require a `schema` key naming an already-loaded schema;
//! 5. compile non-partial bodies into the engine.
//!
//! Partials are registered before the schema check, so they must declare a
//! schema like any other file.

use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use tracing::debug;

use crate::error::LoadError;
use crate::frontmatter::FrontMatter;
use crate::schema::Schema;
use crate::walk;

const TEMPLATE_EXTENSIONS: &[&str] = &["handlebars", "hbs"];

/// Engine registration keys for templates live under this prefix so they
/// cannot be reached with `{{> name}}` by accident.
const ENGINE_KEY_PREFIX: &str = "@template/";

/// A compiled, renderable template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Public name used for lookups.
    pub name: String,
    /// Name of the schema this template's input is documented by.
    pub schema_name: String,
    /// Source file.
    pub path: PathBuf,
    /// Key the compiled body is registered under in the engine.
    engine_key: String,
}

impl Template {
    pub(crate) fn engine_key(&self) -> &str {
        &self.engine_key
    }
}

/// Load every template under `dir`, registering partials and compiled
/// bodies into `engine`.
///
/// `schemas` must already be fully loaded; every template's `schema` key is
/// checked against it.
///
/// # Errors
///
/// Stops at the first file that cannot be read or parsed, lacks a `schema`
/// key, names an unknown schema, or fails to compile.
pub fn load_templates(
    dir: &Path,
    schemas: &[Schema],
    engine: &mut Handlebars<'static>,
) -> Result<Vec<Template>, LoadError> {
    let mut templates = Vec::new();
    for path in walk::discover(dir, TEMPLATE_EXTENSIONS)? {
        if let Some(template) = load_one(dir, &path, schemas, engine)? {
            templates.push(template);
        }
    }
    Ok(templates)
}

fn load_one(
    dir: &Path,
    path: &Path,
    schemas: &[Schema],
    engine: &mut Handlebars<'static>,
) -> Result<Option<Template>, LoadError> {
    let text = walk::read_text(path)?;
    let FrontMatter { metadata, body } =
        FrontMatter::parse(&text).map_err(|source| LoadError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?;

    let name = metadata
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| walk::base_name(path));

    let partial = metadata.partial();
    if let Some(partial) = partial {
        engine
            .register_partial(partial, &body)
            .map_err(|e| compile_error(path, e))?;
        debug!(partial, path = %path.display(), "registered partial");
    }

    let schema_name = metadata.schema().ok_or_else(|| LoadError::MissingSchema {
        path: path.to_path_buf(),
    })?;
    if !schemas.iter().any(|s| s.name == schema_name) {
        return Err(LoadError::UnknownSchema {
            path: path.to_path_buf(),
            schema: schema_name.to_string(),
        });
    }

    if partial.is_some() {
        return Ok(None);
    }

    let relative = path.strip_prefix(dir).unwrap_or(path);
    let engine_key = format!("{ENGINE_KEY_PREFIX}{}", relative.display());
    engine
        .register_template_string(&engine_key, &body)
        .map_err(|e| compile_error(path, e))?;
    debug!(template = %name, schema = schema_name, path = %path.display(), "compiled template");

    Ok(Some(Template {
        name,
        schema_name: schema_name.to_string(),
        path: path.to_path_buf(),
        engine_key,
    }))
}

fn compile_error(path: &Path, err: handlebars::TemplateError) -> LoadError {
    LoadError::Compile {
        path: path.to_path_buf(),
        source: Box::new(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person_schema() -> Vec<Schema> {
        vec![Schema {
            name: "person".into(),
            content: json!({"type": "object"}),
        }]
    }

    fn write(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn name_defaults_to_file_base_name() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "greeting.hbs", "---\nschema: person\n---\nHello");
        let mut engine = Handlebars::new();
        let templates = load_templates(tmp.path(), &person_schema(), &mut engine).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "greeting");
        assert_eq!(templates[0].schema_name, "person");
    }

    #[test]
    fn name_key_overrides_base_name() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "greeting.handlebars",
            "---\nname: welcome\nschema: person\n---\nHello",
        );
        let mut engine = Handlebars::new();
        let templates = load_templates(tmp.path(), &person_schema(), &mut engine).unwrap();
        assert_eq!(templates[0].name, "welcome");
    }

    #[test]
    fn compiled_body_renders_through_engine() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "greeting.hbs", "---\nschema: person\n---\nHello, {{name}}!");
        let mut engine = Handlebars::new();
        let templates = load_templates(tmp.path(), &person_schema(), &mut engine).unwrap();
        let out = engine
            .render(templates[0].engine_key(), &json!({"name": "Ada"}))
            .unwrap();
        assert_eq!(out, "Hello, Ada!");
    }

    #[test]
    fn partials_are_registered_but_not_listed() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "a_signature.hbs",
            "---\npartial: signature\nschema: person\n---\n-- {{name}}",
        );
        write(
            tmp.path(),
            "letter.hbs",
            "---\nschema: person\n---\nDear {{name}}\n{{> signature}}",
        );
        let mut engine = Handlebars::new();
        let templates = load_templates(tmp.path(), &person_schema(), &mut engine).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "letter");
        assert!(engine.has_template("signature"));
    }

    #[test]
    fn missing_schema_key_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "bare.hbs", "Hello");
        let mut engine = Handlebars::new();
        let err = load_templates(tmp.path(), &person_schema(), &mut engine).unwrap_err();
        match err {
            LoadError::MissingSchema { path } => assert!(path.ends_with("bare.hbs")),
            other => panic!("expected MissingSchema, got: {other}"),
        }
    }

    #[test]
    fn partial_without_schema_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "footer.hbs", "---\npartial: footer\n---\nbye");
        let mut engine = Handlebars::new();
        let err = load_templates(tmp.path(), &person_schema(), &mut engine).unwrap_err();
        assert!(matches!(err, LoadError::MissingSchema { .. }));
    }

    #[test]
    fn unknown_schema_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "invoice.hbs", "---\nschema: invoice\n---\nTotal");
        let mut engine = Handlebars::new();
        match load_templates(tmp.path(), &person_schema(), &mut engine).unwrap_err() {
            LoadError::UnknownSchema { path, schema } => {
                assert!(path.ends_with("invoice.hbs"));
                assert_eq!(schema, "invoice");
            }
            other => panic!("expected UnknownSchema, got: {other}"),
        }
    }

    #[test]
    fn malformed_body_is_a_compile_error() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "broken.hbs", "---\nschema: person\n---\n{{#if name}}open");
        let mut engine = Handlebars::new();
        let err = load_templates(tmp.path(), &person_schema(), &mut engine).unwrap_err();
        assert!(matches!(err, LoadError::Compile { .. }));
    }

    #[test]
    fn unterminated_front_matter_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "open.hbs", "---\nschema: person\nHello");
        let mut engine = Handlebars::new();
        let err = load_templates(tmp.path(), &person_schema(), &mut engine).unwrap_err();
        assert!(matches!(err, LoadError::FrontMatter { .. }));
    }

    #[test]
    fn other_extensions_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "notes.txt", "no front matter here");
        write(tmp.path(), "nested/deep.hbs", "---\nschema: person\n---\nx");
        let mut engine = Handlebars::new();
        let templates = load_templates(tmp.path(), &person_schema(), &mut engine).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "deep");
    }
}
