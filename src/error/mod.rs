//! Error types and handling infrastructure for level conversion

use std::fmt;
use std::path::PathBuf;

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("No target found for level {level}")]
    MissingTarget { level: String },

    #[error("Unknown car direction '{direction}' in level {level}")]
    UnknownDirection { level: String, direction: String },

    #[error("Grid shape mismatch in level {level}: {message}")]
    ShapeMismatch { level: String, message: String },

    #[error("Invalid level record {level}: {message}")]
    InvalidRecord { level: String, message: String },

    #[error("Input JSON file not found at '{}'", path.display())]
    InputNotFound { path: PathBuf },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionErrorKind {
    pub fn missing_target(level: &str) -> Self {
        Self::MissingTarget {
            level: level.to_string(),
        }
    }

    pub fn shape_mismatch(level: &str, message: String) -> Self {
        Self::ShapeMismatch {
            level: level.to_string(),
            message,
        }
    }

    pub fn invalid_record(level: &str, message: String) -> Self {
        Self::InvalidRecord {
            level: level.to_string(),
            message,
        }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        source: Option<anyhow::Error>,
    },
}

impl ConversionError {
    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn conversion_with_source(kind: ConversionErrorKind, source: anyhow::Error) -> Self {
        Self::Conversion {
            kind,
            source: Some(source),
        }
    }

    /// Wrap an IO failure on `path`
    pub fn io(err: std::io::Error, path: &std::path::Path) -> Self {
        Self::conversion_with_source(
            ConversionErrorKind::io(
                format!("{}: {}", path.display(), err),
                Some(path.to_path_buf()),
            ),
            err.into(),
        )
    }

    /// The error kind, if this is a conversion failure
    pub fn kind(&self) -> Option<&ConversionErrorKind> {
        match self {
            Self::Conversion { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Caret preview of the offending input, for JSON parse failures
    pub fn input_preview(&self) -> Option<&str> {
        match self {
            Self::ParseError(err) => err.input_preview.as_deref(),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                }
            }
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::InputNotFound { path } => {
                    format!("Input JSON file not found at '{}'", path.display())
                }
                ConversionErrorKind::Io { message, .. } => message.clone(),
                _ => self.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        let location = if err.line() > 0 {
            Some((err.line(), err.column()))
        } else {
            None
        };
        ParseError::new(err.to_string(), location)
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
