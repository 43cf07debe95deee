//! # Front Matter
//!
//! Splits a template file into a YAML metadata block and a Handlebars body.
//!
//! ```text
//! ---
//! name: greeting
//! schema: person
//! ---
//! Hello, {{name}}!
//! ```
//!
//! The block is recognised only when the very first line is `---`. It runs
//! until the next line that is exactly `---` (trailing whitespace and `\r`
//! are ignored on both delimiter lines). Everything after the closing line
//! is the body, byte for byte.
//!
//! `name`, `schema` and `partial` accept any YAML scalar: `name: 404` is the
//! name `"404"`. `false` and `null` count as absent.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::error::FrontMatterError;

const DELIMITER: &str = "---";

/// Known front-matter keys plus whatever else the author wrote.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metadata {
    /// Public template name override.
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: Option<String>,
    /// Name of the schema describing the render input.
    #[serde(default, deserialize_with = "scalar_string")]
    pub schema: Option<String>,
    /// Partial name; when set the body is registered as a partial.
    #[serde(default, deserialize_with = "scalar_string")]
    pub partial: Option<String>,
    /// Any other keys, kept for completeness.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Metadata {
    /// The `name` override, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    /// The declared schema name, if present and non-empty.
    pub fn schema(&self) -> Option<&str> {
        non_empty(&self.schema)
    }

    /// The partial name, if present and non-empty.
    pub fn partial(&self) -> Option<&str> {
        non_empty(&self.partial)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_yaml::Value;

    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some("true".to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s)),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
            Err(D::Error::custom("expected a scalar value"))
        }
    }
}

/// A template file split into metadata and body.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub metadata: Metadata,
    pub body: String,
}

impl FrontMatter {
    /// Parse template text into metadata and body.
    ///
    /// Text without a leading `---` line has empty metadata and is returned
    /// unchanged as the body.
    ///
    /// # Errors
    ///
    /// [`FrontMatterError::Unterminated`] if the opening delimiter is never
    /// closed, [`FrontMatterError::Yaml`] if the block is not a mapping or a
    /// known key holds a sequence or mapping.
    pub fn parse(text: &str) -> Result<Self, FrontMatterError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        match split(text)? {
            Some((block, body)) => Ok(Self {
                metadata: parse_metadata(block)?,
                body: body.to_string(),
            }),
            None => Ok(Self {
                metadata: Metadata::default(),
                body: text.to_string(),
            }),
        }
    }
}

/// Returns `(block, body)` when the text opens with a delimiter line.
fn split(text: &str) -> Result<Option<(&str, &str)>, FrontMatterError> {
    let mut lines = Lines::new(text);
    match lines.next() {
        Some((_, line)) if is_delimiter(line) => {}
        _ => return Ok(None),
    }
    let block_start = lines.offset();
    while let Some((start, line)) = lines.next() {
        if is_delimiter(line) {
            return Ok(Some((&text[block_start..start], &text[lines.offset()..])));
        }
    }
    Err(FrontMatterError::Unterminated)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn parse_metadata(block: &str) -> Result<Metadata, FrontMatterError> {
    if block.trim().is_empty() {
        return Ok(Metadata::default());
    }
    let value: serde_yaml::Value = serde_yaml::from_str(block)?;
    if value.is_null() {
        // Comment-only block.
        return Ok(Metadata::default());
    }
    Ok(serde_yaml::from_value(value)?)
}

/// Line iterator that also reports byte offsets, so the body can be sliced
/// out of the original text without re-joining lines.
struct Lines<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Byte offset of the next unread line.
    fn offset(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for Lines<'a> {
    /// `(start offset, line without its '\n')`
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }
        let start = self.pos;
        let rest = &self.text[start..];
        let (line, advance) = match rest.find('\n') {
            Some(i) => (&rest[..i], i + 1),
            None => (rest, rest.len()),
        };
        self.pos += advance;
        Some((start, line))
    }
}
