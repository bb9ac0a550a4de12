//! Outcome tallies for a batch conversion run

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to a single level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LevelOutcome {
    Converted { path: PathBuf },
    SkippedExisting { path: PathBuf },
    SkippedPrefix,
    Disabled,
    Failed { message: String },
}

/// A level that could not be converted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelFailure {
    pub level: String,
    pub message: String,
}

/// Summary of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped_existing: usize,
    pub skipped_prefix: usize,
    pub disabled: usize,
    pub failures: Vec<LevelFailure>,
    pub force: bool,
    pub processing_time_ms: u64,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl BatchSummary {
    pub fn new(force: bool) -> Self {
        Self {
            converted: 0,
            skipped_existing: 0,
            skipped_prefix: 0,
            disabled: 0,
            failures: Vec::new(),
            force,
            processing_time_ms: 0,
            started_at: chrono::Utc::now(),
            finished_at: None,
        }
    }

    /// Tally one level outcome
    pub fn record(&mut self, level: &str, outcome: &LevelOutcome) {
        match outcome {
            LevelOutcome::Converted { .. } => self.converted += 1,
            LevelOutcome::SkippedExisting { .. } => self.skipped_existing += 1,
            LevelOutcome::SkippedPrefix => self.skipped_prefix += 1,
            LevelOutcome::Disabled => self.disabled += 1,
            LevelOutcome::Failed { message } => self.failures.push(LevelFailure {
                level: level.to_string(),
                message: message.clone(),
            }),
        }
    }

    /// Stamp the end of the run
    pub fn finish(&mut self) {
        let now = chrono::Utc::now();
        self.processing_time_ms = (now - self.started_at).num_milliseconds().max(0) as u64;
        self.finished_at = Some(now);
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Summary lines printed at the end of a run
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "Conversion complete!".to_string(),
            format!("  Converted: {} levels", self.converted),
        ];
        if !self.force && self.skipped_existing > 0 {
            lines.push(format!(
                "  Skipped (already exist): {} levels",
                self.skipped_existing
            ));
        }
        if self.skipped_prefix > 0 {
            lines.push(format!(
                "  Skipped (prefix mismatch): {} levels",
                self.skipped_prefix
            ));
        }
        if self.failed() > 0 {
            lines.push(format!("  Failed: {} levels", self.failed()));
        }
        lines
    }

    /// Export as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
