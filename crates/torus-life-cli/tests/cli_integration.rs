//! Integration tests for the torus-life CLI.
//!
//! Run with: `cargo test --package torus-life-cli --test cli_integration`

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the CLI inside `dir` with an isolated home and no `TORUS_LIFE_*` overrides.
fn run_in_dir(dir: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_torus-life"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .args(args);
    for key in [
        "TORUS_LIFE_WIDTH",
        "TORUS_LIFE_HEIGHT",
        "TORUS_LIFE_GENERATIONS",
        "TORUS_LIFE_DELAY_MS",
        "TORUS_LIFE_RULE",
    ] {
        cmd.env_remove(key);
    }
    cmd.output().expect("Failed to execute torus-life")
}

fn run(args: &[&str]) -> (TempDir, Output) {
    let dir = TempDir::new().unwrap();
    let output = run_in_dir(dir.path(), args);
    (dir, output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// =============================================================================
// Help / listing
// =============================================================================

#[test]
fn test_help() {
    let (_dir, output) = run(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("run"));
    assert!(text.contains("list"));
}

#[test]
fn test_list_shows_patterns_and_scenarios() {
    let (_dir, output) = run(&["list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("gosper-glider-gun"));
    assert!(text.contains("glider-vs-block"));
    assert!(text.contains("  block "));
}

#[test]
fn test_show_applies_modifiers() {
    let (_dir, output) = run(&["show", "glider", "--modifiers", "H"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), " . # .\n . # #\n # . #\n");
}

// =============================================================================
// Playback
// =============================================================================

#[test]
fn test_still_life_reaches_tranquility() {
    let (_dir, output) = run(&["run", "--place", "block@3,3", "--delay-ms", "0"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Pattern at (3, 3):"));
    assert!(text.contains("======GENERATION 0000======"));
    assert!(!text.contains("GENERATION 0001"));
    assert!(text.contains("reached tranquility after 0 generations"));
}

#[test]
fn test_scenario_runs_to_budget() {
    let (_dir, output) = run(&[
        "run",
        "--scenario",
        "glider-vs-block",
        "--width",
        "40",
        "--height",
        "40",
        "--generations",
        "3",
        "--delay-ms",
        "0",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Glider crashes into block"));
    assert!(text.contains("======GENERATION 0003======"));
    assert!(text.contains("budget exhausted after 3 generations"));
}

#[test]
fn test_small_sizes_are_clamped() {
    let (_dir, output) = run(&[
        "run",
        "--place",
        "blinker@0,0",
        "--width",
        "3",
        "--height",
        "3",
        "--generations",
        "0",
        "--delay-ms",
        "0",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("12x12 torus"));
    assert!(text.contains("up to 2 generations"));
    assert!(text.contains("======GENERATION 0002======"));
}

#[test]
fn test_invalid_rule_fails() {
    let (_dir, output) = run(&["run", "--rule", "23", "--delay-ms", "0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid rule"));
}

#[test]
fn test_unknown_pattern_fails() {
    let (_dir, output) = run(&["run", "--place", "unicorn@1,1", "--delay-ms", "0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown pattern 'unicorn'"));
}

#[test]
fn test_unknown_scenario_fails() {
    let (_dir, output) = run(&["run", "--scenario", "nope", "--delay-ms", "0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown scenario 'nope'"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_file_settings_apply() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("life.json");
    fs::write(
        &config_path,
        r#"{ "width": 20, "height": 16, "generations": 4, "delay_ms": 0, "rule": "23.36" }"#,
    )
    .unwrap();

    let output = run_in_dir(
        dir.path(),
        &[
            "run",
            "--place",
            "blinker@5,5",
            "--config",
            config_path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("20x16 torus, rule 23.36, up to 4 generations"));
    assert!(text.contains("======GENERATION 0004======"));
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("life.json");
    fs::write(&config_path, r#"{ "width": 20, "delay_ms": 0 }"#).unwrap();

    let output = run_in_dir(
        dir.path(),
        &[
            "run",
            "--place",
            "block@1,1",
            "--width",
            "25",
            "--config",
            config_path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("25x64 torus"));
}

#[test]
fn test_env_file_is_honored() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "TORUS_LIFE_WIDTH=30\nTORUS_LIFE_DELAY_MS=0\n",
    )
    .unwrap();

    let output = run_in_dir(dir.path(), &["run", "--place", "block@1,1"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("30x64 torus"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_in_dir(
        dir.path(),
        &["run", "--config", "does-not-exist.json", "--delay-ms", "0"],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read config"));
}
