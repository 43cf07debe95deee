//! # tplsvc-registry — Template & Schema Registry
//!
//! Builds the in-memory registry served by `tplsvc-api`. Loading is a single
//! sequential pass over a base directory:
//!
//! 1. [`schema`] walks `schemas/` and parses every `*.json` file.
//! 2. [`template`] walks `templates/`, splits each `*.hbs` / `*.handlebars`
//!    file into [`frontmatter`] metadata and body, registers partials, checks
//!    that the declared schema exists, and compiles the body.
//!
//! The result is an immutable [`Registry`] that answers name lookups with
//! last-match-wins semantics and renders templates against arbitrary JSON.
//!
//! ## Crate Policy
//!
//! - Loading never terminates the process. Every failure is a [`LoadError`]
//!   naming the offending file; the binary decides what to do with it.
//! - Schemas are always loaded before templates.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod frontmatter;
pub mod registry;
pub mod schema;
pub mod template;
mod walk;

pub use error::{FrontMatterError, LoadError, RenderError};
pub use frontmatter::{FrontMatter, Metadata};
pub use registry::{Registry, TemplateSummary};
pub use schema::Schema;
pub use template::Template;

/// Subdirectory of the base directory holding JSON schemas.
pub const SCHEMAS_DIR: &str = "schemas";

/// Subdirectory of the base directory holding Handlebars templates.
pub const TEMPLATES_DIR: &str = "templates";
