//! Level document loading and record parsing

pub mod level;
pub mod validation;

pub use level::{CarKind, CarRecord, LevelRecord};

use crate::error::{
    ConversionError, ConversionErrorKind, ConversionResult, ParseError, ParseResult,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where a levels document comes from
#[derive(Debug, Clone)]
pub enum LevelSource {
    /// Raw JSON string input
    String(String),
    /// Path to a levels JSON file
    File(PathBuf),
}

impl LevelSource {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            LevelSource::String(_) => "string input".to_string(),
            LevelSource::File(path) => format!("file: {}", path.display()),
        }
    }

    /// Parse JSON from this source
    pub fn parse(&self) -> ParseResult<Value> {
        match self {
            LevelSource::String(content) => parse_from_string(content),
            LevelSource::File(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    ParseError::new(
                        format!("Failed to read file {}: {}", path.display(), e),
                        None,
                    )
                })?;
                parse_from_string(&content)
            }
        }
    }

    /// Load the levels document. A missing file is reported as
    /// [`ConversionErrorKind::InputNotFound`].
    pub fn load(&self) -> ConversionResult<LevelDocument> {
        if let LevelSource::File(path) = self {
            if !path.exists() {
                return Err(ConversionError::conversion(
                    ConversionErrorKind::InputNotFound { path: path.clone() },
                ));
            }
        }

        let value = self.parse()?;
        LevelDocument::from_value(value).map_err(ConversionError::ParseError)
    }
}

fn parse_from_string(content: &str) -> ParseResult<Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("Empty JSON document".to_string(), None));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        let preview = error_preview(trimmed, e.line(), e.column());
        ParseError::from(e).with_preview(preview)
    })
}

/// Show the offending line with a caret under the reported column
fn error_preview(content: &str, line: usize, column: usize) -> String {
    match content.lines().nth(line.saturating_sub(1)) {
        Some(text) if line > 0 => {
            format!("{}\n{}^", text, " ".repeat(column.saturating_sub(1)))
        }
        _ => "Context not available".to_string(),
    }
}

/// All entries of a levels document, keyed and ordered by level name.
///
/// Entries stay as raw JSON until they are converted, so one malformed
/// level (or a disabled `#` entry holding arbitrary data) does not
/// prevent the rest of the document from loading.
#[derive(Debug, Clone, Default)]
pub struct LevelDocument {
    entries: BTreeMap<String, Value>,
}

impl LevelDocument {
    pub fn from_value(value: Value) -> ParseResult<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                entries: map.into_iter().collect(),
            }),
            other => Err(ParseError::new(
                format!(
                    "Levels document must be a JSON object keyed by level name, found {}",
                    json_type_name(&other)
                ),
                None,
            )),
        }
    }

    /// Iterate entries in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
