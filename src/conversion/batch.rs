use crate::conversion::engine::convert_level_value;
use crate::conversion::path_mapping::map_level_to_output;
use crate::conversion::stats::{BatchSummary, LevelOutcome};
use crate::conversion::ConversionConfig;
use crate::error::ConversionError;
use crate::parser::LevelDocument;
use indicatif::ProgressBar;
use serde_json::Value;
use std::fs;

/// Report progress every this many converted levels
const PROGRESS_EVERY: usize = 10;

/// Converts every level of a document to its own output file.
///
/// Levels are handled one at a time in name order. A level that fails is
/// reported and counted; it never stops the run.
pub struct BatchConverter {
    config: ConversionConfig,
    progress: ProgressBar,
    quiet: bool,
    verbose: bool,
}

impl BatchConverter {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            config,
            progress: ProgressBar::hidden(),
            quiet: false,
            verbose: false,
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Convert all levels of `document`
    pub fn run(&self, document: &LevelDocument) -> BatchSummary {
        let mut summary = BatchSummary::new(self.config.force);
        self.progress.set_length(document.len() as u64);

        for (name, value) in document.iter() {
            let outcome = self.convert_entry(name, value);
            self.report(name, &outcome);
            summary.record(name, &outcome);

            if matches!(outcome, LevelOutcome::Converted { .. })
                && summary.converted % PROGRESS_EVERY == 0
                && !self.quiet
            {
                self.progress
                    .suspend(|| println!("  Converted {} levels...", summary.converted));
            }
            self.progress.inc(1);
        }

        self.progress.finish_and_clear();
        summary.finish();
        summary
    }

    /// Convert one document entry and write its output file
    pub fn convert_entry(&self, name: &str, value: &Value) -> LevelOutcome {
        if self.config.is_disabled(name) {
            return LevelOutcome::Disabled;
        }
        if !self.config.matches_prefix(name) {
            return LevelOutcome::SkippedPrefix;
        }

        match self.write_level(name, value) {
            Ok(outcome) => outcome,
            Err(e) => LevelOutcome::Failed {
                message: e.user_message(),
            },
        }
    }

    fn write_level(&self, name: &str, value: &Value) -> Result<LevelOutcome, ConversionError> {
        let path = map_level_to_output(
            &self.config.output_dir,
            name,
            self.config.world_separator,
            &self.config.extension,
        );

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConversionError::io(e, parent))?;
        }

        if !self.config.force && path.exists() {
            return Ok(LevelOutcome::SkippedExisting { path });
        }

        let content = convert_level_value(name, value)?;
        fs::write(&path, content).map_err(|e| ConversionError::io(e, &path))?;

        Ok(LevelOutcome::Converted { path })
    }

    fn report(&self, name: &str, outcome: &LevelOutcome) {
        if let LevelOutcome::Failed { message } = outcome {
            self.progress.suspend(|| eprintln!("{}", failure_line(name, message)));
            return;
        }
        if !self.verbose || self.quiet {
            return;
        }

        let line = match outcome {
            LevelOutcome::Converted { path } => format!("{} -> {}", name, path.display()),
            LevelOutcome::SkippedExisting { path } => {
                format!("{} skipped, {} exists", name, path.display())
            }
            LevelOutcome::SkippedPrefix => format!("{} skipped, prefix mismatch", name),
            _ => return,
        };
        self.progress.suspend(|| println!("{}", line));
    }
}

/// The stderr line reported for a level that could not be converted
pub fn failure_line(name: &str, message: &str) -> String {
    format!("Error converting {}: {}", name, message)
}
