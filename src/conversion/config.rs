//! Configuration options for a batch conversion run

use std::path::PathBuf;

/// Batch conversion configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Levels document to read
    pub input_path: PathBuf,
    /// Root of the per-world output directories
    pub output_dir: PathBuf,
    /// Overwrite outputs that already exist
    pub force: bool,
    /// Only convert levels whose name starts with this prefix
    pub level_prefix: Option<String>,
    /// Output file extension, without the dot
    pub extension: String,
    /// Level names starting with this marker are disabled
    pub disabled_marker: char,
    /// The world directory is the level name up to this separator
    pub world_separator: char,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("levels.json"),
            output_dir: PathBuf::from("data"),
            force: false,
            level_prefix: None,
            extension: "dzn".to_string(),
            disabled_marker: '#',
            world_separator: '-',
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Set the level name prefix filter. An empty prefix disables filtering.
    pub fn with_level_prefix(mut self, prefix: Option<String>) -> Self {
        self.level_prefix = prefix.filter(|p| !p.is_empty());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Whether a level name is a disabled entry
    pub fn is_disabled(&self, name: &str) -> bool {
        name.starts_with(self.disabled_marker)
    }

    /// Whether a level name passes the prefix filter
    pub fn matches_prefix(&self, name: &str) -> bool {
        self.level_prefix
            .as_deref()
            .map_or(true, |prefix| name.starts_with(prefix))
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.extension.is_empty() {
            return Err("Output extension must not be empty".to_string());
        }

        if self.extension.starts_with('.') {
            return Err(format!(
                "Output extension '{}' must not start with a dot",
                self.extension
            ));
        }

        if self.input_path.as_os_str().is_empty() {
            return Err("Input path must not be empty".to_string());
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err("Output directory must not be empty".to_string());
        }

        Ok(())
    }

    /// Short description of what the run will do
    pub fn describe(&self) -> String {
        let mode = if self.force {
            "Force converting"
        } else {
            "Converting missing"
        };

        match &self.level_prefix {
            Some(prefix) => format!("{} levels with prefix '{}'...", mode, prefix),
            None => format!("{} all levels...", mode),
        }
    }
}
