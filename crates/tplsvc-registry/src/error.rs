//! # Error Types
//!
//! Load-time and render-time errors for the registry. All load errors carry
//! the path of the file that caused them so the operator can fix the input
//! tree without guessing.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal error raised while building the registry.
///
/// Any of these aborts loading; the service must not start with a partial
/// registry.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The directory walk could not read an entry.
    #[error("cannot walk {}: {source}", dir.display())]
    Walk {
        /// Directory being walked.
        dir: PathBuf,
        /// Underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// A file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file is not valid UTF-8 text.
    #[error("{} is not valid UTF-8", path.display())]
    InvalidUtf8 {
        /// Offending file.
        path: PathBuf,
    },

    /// A schema file is not valid JSON.
    #[error("error parsing schema {}: {source}", path.display())]
    InvalidSchema {
        /// Offending schema file.
        path: PathBuf,
        /// JSON parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A template's front matter could not be parsed.
    #[error("invalid front matter in {}: {source}", path.display())]
    FrontMatter {
        /// Offending template file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: FrontMatterError,
    },

    /// A template declares no `schema` in its front matter.
    #[error("file {} does not have a schema", path.display())]
    MissingSchema {
        /// Offending template file.
        path: PathBuf,
    },

    /// A template names a schema that was not loaded.
    #[error("file {}'s schema {schema} not found", path.display())]
    UnknownSchema {
        /// Offending template file.
        path: PathBuf,
        /// Schema name declared in the front matter.
        schema: String,
    },

    /// The template body is not valid Handlebars.
    #[error("cannot compile template {}: {source}", path.display())]
    Compile {
        /// Offending template file.
        path: PathBuf,
        /// Engine error.
        #[source]
        source: Box<handlebars::TemplateError>,
    },
}

/// Failure splitting or decoding a front-matter block.
#[derive(Error, Debug)]
pub enum FrontMatterError {
    /// An opening `---` line has no matching closing line.
    #[error("front matter opened on line 1 is never closed")]
    Unterminated,

    /// The block is not a YAML mapping with string-valued known keys.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Failure rendering a template at request time.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No template with this name was loaded.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// The engine failed while rendering.
    #[error("cannot render template {template}: {source}")]
    Engine {
        /// Public template name.
        template: String,
        /// Engine error.
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_schema_message_names_file() {
        let err = LoadError::MissingSchema {
            path: PathBuf::from("templates/greeting.hbs"),
        };
        assert_eq!(
            err.to_string(),
            "file templates/greeting.hbs does not have a schema"
        );
    }

    #[test]
    fn unknown_schema_message_names_file_and_schema() {
        let err = LoadError::UnknownSchema {
            path: PathBuf::from("templates/greeting.hbs"),
            schema: "person".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("greeting.hbs"));
        assert!(msg.contains("person"));
    }

    #[test]
    fn front_matter_error_converts_from_yaml() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Mapping>("- a\n- b").unwrap_err();
        let err: FrontMatterError = yaml_err.into();
        assert!(err.to_string().starts_with("invalid YAML"));
    }

    #[test]
    fn template_not_found_message() {
        let err = RenderError::TemplateNotFound("missing".into());
        assert_eq!(err.to_string(), "template not found: missing");
    }
}
