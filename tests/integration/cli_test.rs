//! End-to-end tests of the levelconv binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_levelconv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_levelconv"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute levelconv")
}

fn write_levels(dir: &Path) -> String {
    let path = dir.join("levels.json");
    fs::write(
        &path,
        r#"{
            "1-1": {"board": [[3]], "mods": [[0]], "mod_nums": [[0]], "cars": [], "tracks": 1},
            "1-2": {"board": [[0]], "mods": [[0]], "mod_nums": [[0]], "cars": [], "tracks": 1},
            "3-1": {"board": [[1, 3]], "mods": [[0, 0]], "mod_nums": [[0, 0]], "cars": [], "tracks": 2}
        }"#,
    )
    .unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_missing_input_exits_nonzero() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.json");
    let output_dir = tmp.path().join("data");

    let output = run_levelconv(&[
        "--json-path",
        missing.to_str().unwrap(),
        "--output-dir",
        output_dir.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input JSON file not found"), "stderr: {}", stderr);
    assert!(!output_dir.exists());
}

#[test]
fn test_malformed_json_shows_caret_preview() {
    let tmp = tempdir().unwrap();
    let json_path = tmp.path().join("levels.json");
    fs::write(&json_path, "{\n  \"1-1\": ,\n}").unwrap();

    let output = run_levelconv(&["--json-path", json_path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JSON parse error at line 2"), "stderr: {}", stderr);
    assert!(stderr.contains("  \"1-1\": ,\n"), "stderr: {}", stderr);
    assert!(stderr.lines().any(|line| line.trim_end().ends_with('^')));
}

#[test]
fn test_level_failure_keeps_exit_status() {
    let tmp = tempdir().unwrap();
    let json_path = write_levels(tmp.path());
    let output_dir = tmp.path().join("data");

    let output = run_levelconv(&[
        "--json-path",
        &json_path,
        "--output-dir",
        output_dir.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Converting missing all levels..."), "stdout: {}", stdout);
    assert!(stdout.contains("Converted: 2 levels"), "stdout: {}", stdout);
    assert!(
        stderr
            .lines()
            .any(|line| line == "Error converting 1-2: No target found for level 1-2"),
        "stderr: {}",
        stderr
    );

    assert!(output_dir.join("1/1-1.dzn").exists());
    assert!(output_dir.join("3/3-1.dzn").exists());
    assert!(!output_dir.join("1/1-2.dzn").exists());
}

#[test]
fn test_existing_outputs_skipped_without_force() {
    let tmp = tempdir().unwrap();
    let json_path = write_levels(tmp.path());
    let output_dir = tmp.path().join("data");
    let existing = output_dir.join("1/1-1.dzn");
    fs::create_dir_all(existing.parent().unwrap()).unwrap();
    fs::write(&existing, "keep me").unwrap();

    let args = ["--json-path", &json_path, "--output-dir", output_dir.to_str().unwrap()];
    let output = run_levelconv(&args);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Skipped (already exist): 1 levels"), "stdout: {}", stdout);
    assert_eq!(fs::read_to_string(&existing).unwrap(), "keep me");

    let mut forced = args.to_vec();
    forced.push("--force");
    let output = run_levelconv(&forced);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Force converting all levels..."), "stdout: {}", stdout);
    assert!(fs::read_to_string(&existing).unwrap().starts_with("W=1;"));
}

#[test]
fn test_level_prefix_and_stats() {
    let tmp = tempdir().unwrap();
    let json_path = write_levels(tmp.path());
    let output_dir = tmp.path().join("data");

    let output = run_levelconv(&[
        "--json-path",
        &json_path,
        "--output-dir",
        output_dir.to_str().unwrap(),
        "--level-prefix",
        "3-",
        "--quiet",
        "--stats",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stats: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(stats["converted"], 1);
    assert_eq!(stats["skipped_prefix"], 2);
    assert!(!output_dir.join("1").exists());
}
