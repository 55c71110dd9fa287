//! End-to-end tests for `colorwheel --print`.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Runs the binary with an isolated config directory.
fn run(args: &[&str], config_home: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_colorwheel"))
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn write_palette(dir: &Path) -> String {
    let path = dir.join("palette.json");
    fs::write(
        &path,
        r##"{"colors": [
            {"id": 1, "name": "Red", "hex": "#f00"},
            {"id": 2, "name": "Green", "hex": "#0f0", "locked": true},
            {"id": 3, "name": "Blue", "hex": "#00f"}
        ]}"##,
    )
    .unwrap();
    path.display().to_string()
}

#[test]
fn test_print_placements() {
    let temp = TempDir::new().unwrap();
    let palette = write_palette(temp.path());

    let output = run(&["--print", "--palette", &palette, "--radius", "100"], temp.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "wheel: rotate(0deg)");
    assert_eq!(lines.len(), 4);

    assert!(lines[1].contains("Red"));
    assert!(lines[1].contains("#FF0000"));
    assert!(lines[1].contains("x=   100.0"));
    assert!(lines[1].contains("rotate(0deg) translate(100px) rotate(0deg)"));

    assert!(lines[2].contains("rotate(120deg) translate(100px) rotate(-120deg)"));
    assert!(lines[2].ends_with("[locked]"));
    assert!(lines[3].contains("Blue"));
}

#[test]
fn test_print_with_builtin_palette() {
    let temp = TempDir::new().unwrap();

    let output = run(&["--print"], temp.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 13);
    assert!(stdout.contains("translate(400px)"));
}

#[test]
fn test_empty_palette_reports_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.json");
    fs::write(&path, r#"{"colors": []}"#).unwrap();

    let output = run(&["--print", "--palette", path.to_str().unwrap()], temp.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Palette is empty"));
}

#[test]
fn test_missing_palette_file() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.json");

    let output = run(&["--print", "--palette", missing.to_str().unwrap()], temp.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Palette file does not exist"));
}

#[test]
fn test_invalid_threshold_flag() {
    let temp = TempDir::new().unwrap();

    let output = run(&["--print", "--drag-threshold", "0"], temp.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("drag_threshold"));
}

#[test]
fn test_drag_release_flag_accepted() {
    let temp = TempDir::new().unwrap();

    let output = run(&["--print", "--drag-release", "preview"], temp.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let output = run(&["--print", "--drag-release", "spin"], temp.path());
    assert!(!output.status.success());
}
