//! Level conversion module
//!
//! This module contains the lookup tables, the single-level converter, batch
//! processing, configuration and run statistics.

pub mod batch;
pub mod config;
pub mod engine;
pub mod path_mapping;
pub mod stats;
pub mod tables;

pub use batch::BatchConverter;
pub use config::ConversionConfig;
pub use engine::{convert_level, convert_level_value, LevelConverter, LevelData};
pub use stats::{BatchSummary, LevelOutcome};

/// Result type for conversion operations
pub use crate::error::ConversionResult;
