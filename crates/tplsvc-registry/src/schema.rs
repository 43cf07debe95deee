//! # Schema Loader
//!
//! Walks a schemas directory and parses every `*.json` file. Schema content
//! is opaque: any valid JSON document is accepted and served back as-is.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::LoadError;
use crate::walk;

const SCHEMA_EXTENSIONS: &[&str] = &["json"];

/// A JSON document addressable by the base name of the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// File base name without its extension.
    pub name: String,
    /// Parsed JSON document.
    pub content: Value,
}

/// Load every schema under `dir`, in walk order.
///
/// # Errors
///
/// Stops at the first file that cannot be read, is not UTF-8, or is not
/// valid JSON, returning a [`LoadError`] naming that file.
pub fn load_schemas(dir: &Path) -> Result<Vec<Schema>, LoadError> {
    let mut schemas = Vec::new();
    for path in walk::discover(dir, SCHEMA_EXTENSIONS)? {
        let text = walk::read_text(&path)?;
        let content: Value =
            serde_json::from_str(&text).map_err(|source| LoadError::InvalidSchema {
                path: path.clone(),
                source,
            })?;
        let name = walk::base_name(&path);
        debug!(schema = %name, path = %path.display(), "loaded schema");
        schemas.push(Schema { name, content });
    }
    Ok(schemas)
}
