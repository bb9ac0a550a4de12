use std::path::{Path, PathBuf};

/// World a level belongs to: its name up to the first `separator`.
pub fn world_of(level_name: &str, separator: char) -> &str {
    level_name
        .split(separator)
        .next()
        .unwrap_or(level_name)
}

/// Map a level name to its output file, `<output_dir>/<world>/<level>.<extension>`.
pub fn map_level_to_output(
    output_dir: &Path,
    level_name: &str,
    separator: char,
    extension: &str,
) -> PathBuf {
    output_dir
        .join(world_of(level_name, separator))
        .join(format!("{}.{}", level_name, extension))
}
