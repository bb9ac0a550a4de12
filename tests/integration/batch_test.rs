//! Integration tests for batch conversion of a levels document

use levelconv::conversion::{BatchConverter, ConversionConfig};
use levelconv::parser::LevelSource;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const LEVELS: &str = r##"{
    "#notes": "disabled entries may hold anything",
    "1-1": {
        "board": [[1, 3]], "mods": [[0, 0]], "mod_nums": [[0, 0]],
        "cars": [{"type": "NORMAL", "pos": [0, 0], "direction": "RIGHT"}],
        "tracks": 2
    },
    "1-2": {
        "board": [[1, 1]], "mods": [[0, 0]], "mod_nums": [[0, 0]],
        "cars": [], "tracks": 2
    },
    "2-1": {
        "board": [[3], [2]], "mods": [[0], [6]], "mod_nums": [[0], [1]],
        "cars": [], "tracks": 1
    }
}"##;

fn load(dir: &Path) -> levelconv::LevelDocument {
    let path = dir.join("levels.json");
    fs::write(&path, LEVELS).unwrap();
    LevelSource::File(path).load().unwrap()
}

#[test]
fn test_batch_writes_one_file_per_level() {
    let input_dir = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    let document = load(input_dir.path());

    let converter = BatchConverter::new(ConversionConfig::default().with_output_dir(output_dir.path()))
        .with_quiet(true);
    let summary = converter.run(&document);

    assert_eq!(summary.converted, 2);
    assert_eq!(summary.disabled, 1);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.failures[0].level, "1-2");

    let level_1_1 = fs::read_to_string(output_dir.path().join("1/1-1.dzn")).unwrap();
    assert!(level_1_1.contains("TRAINS=[(1,1,RIGHT)];"));
    assert!(level_1_1.contains("TARGET=(1,2);"));

    let level_2_1 = fs::read_to_string(output_dir.path().join("2/2-1.dzn")).unwrap();
    assert!(level_2_1.contains("STATIONS=[\n  (2,1,2),\n];"));

    // failed level leaves no output behind
    assert!(!output_dir.path().join("1/1-2.dzn").exists());
}

#[test]
fn test_second_run_skips_existing() {
    let input_dir = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    let document = load(input_dir.path());
    let config = ConversionConfig::default().with_output_dir(output_dir.path());

    let first = BatchConverter::new(config.clone()).with_quiet(true).run(&document);
    assert_eq!(first.converted, 2);

    let second = BatchConverter::new(config).with_quiet(true).run(&document);
    assert_eq!(second.converted, 0);
    assert_eq!(second.skipped_existing, 2);
}

#[test]
fn test_force_overwrites_existing() {
    let input_dir = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    let document = load(input_dir.path());

    let stale = output_dir.path().join("1/1-1.dzn");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "stale").unwrap();

    let config = ConversionConfig::default()
        .with_output_dir(output_dir.path())
        .with_force(true);
    let summary = BatchConverter::new(config).with_quiet(true).run(&document);

    assert_eq!(summary.converted, 2);
    assert_eq!(summary.skipped_existing, 0);
    assert!(fs::read_to_string(&stale).unwrap().starts_with("W=2;"));
}

#[test]
fn test_prefix_filter_counts_mismatches() {
    let input_dir = tempdir().unwrap();
    let output_dir = tempdir().unwrap();
    let document = load(input_dir.path());

    let config = ConversionConfig::default()
        .with_output_dir(output_dir.path())
        .with_level_prefix(Some("2-".to_string()));
    let summary = BatchConverter::new(config).with_quiet(true).run(&document);

    assert_eq!(summary.converted, 1);
    assert_eq!(summary.skipped_prefix, 2);
    assert_eq!(summary.disabled, 1);
    assert!(!output_dir.path().join("1").exists());
}
