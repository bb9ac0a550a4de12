//! Legacy level to MiniZinc data converter
//!
//! Converts puzzle levels stored in the legacy `levels.json` format into the
//! `.dzn` data files consumed by the constraint model, one file per level.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;

// Re-export commonly used types
pub use conversion::{
    convert_level, BatchConverter, BatchSummary, ConversionConfig, LevelConverter, LevelData,
};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult, ParseError};
pub use formatter::DznFormatter;
pub use parser::{LevelDocument, LevelRecord, LevelSource};

/// Convert one level, given as raw JSON, to `.dzn` text
pub fn convert_level_json(name: &str, json: &serde_json::Value) -> ConversionResult<String> {
    conversion::convert_level_value(name, json)
}

/// Convert one level, given as a JSON string, to `.dzn` text
pub fn convert_level_str(name: &str, json_str: &str) -> ConversionResult<String> {
    let value = LevelSource::String(json_str.to_string()).parse()?;
    convert_level_json(name, &value)
}
