//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::{ConversionError, ConversionErrorKind};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "levelconv")]
#[command(about = "Convert levels from levels.json to MiniZinc .dzn format")]
#[command(version)]
#[command(after_help = "Examples:
  levelconv                      # Convert only missing levels
  levelconv --force              # Force convert all levels
  levelconv --level-prefix 6-    # Only levels of world 6")]
pub struct Args {
    /// Force conversion, overwriting existing .dzn files
    #[arg(long)]
    pub force: bool,

    /// Path to the input levels.json file
    #[arg(long, default_value = "levels.json")]
    pub json_path: PathBuf,

    /// Directory to save the output .dzn files
    #[arg(long, default_value = "data")]
    pub output_dir: PathBuf,

    /// Only convert levels with names starting with this prefix (e.g. '6-', '7-1')
    #[arg(long)]
    pub level_prefix: Option<String>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub stats: bool,

    /// Report every converted and skipped level
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let config = ConversionConfig::new()
            .with_input_path(&args.json_path)
            .with_output_dir(&args.output_dir)
            .with_force(args.force)
            .with_level_prefix(args.level_prefix.clone());

        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        Ok(config)
    }

    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    pub fn want_stats(&self) -> bool {
        self.args.stats
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Progress bar for a batch of `total` levels; hidden when quiet or
    /// when stderr is not a terminal
    pub fn create_progress_bar(total: u64, quiet: bool) -> indicatif::ProgressBar {
        if quiet || !atty::is(atty::Stream::Stderr) {
            return indicatif::ProgressBar::hidden();
        }

        let pb = indicatif::ProgressBar::new(total);
        if let Ok(style) = indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }

    /// Enable or disable coloured output for the whole process
    pub fn configure_colors() {
        console::set_colors_enabled(Self::should_use_color());
        console::set_colors_enabled_stderr(Self::should_use_color_stderr());
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", console::style("✗").red().for_stderr(), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", console::style("⚠").yellow().for_stderr(), message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    fn should_use_color_stderr() -> bool {
        atty::is(atty::Stream::Stderr) && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    if let Some(preview) = error.input_preview() {
        eprintln!("\n{}", preview);
    }

    match error.kind() {
        Some(ConversionErrorKind::InputNotFound { .. }) => {
            eprintln!("\nTip: Use --json-path to point at the levels document");
        }
        Some(ConversionErrorKind::Configuration { .. }) => {
            eprintln!("\nTry 'levelconv --help' for usage information.");
        }
        _ => {}
    }
}
