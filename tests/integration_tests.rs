//! Integration tests for the weathercast CLI

use std::process::{Command, Output};

fn weathercast(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_weathercast"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute command")
}

const SAMPLE: [&str; 8] = [
    "--previous",
    "25,26,27",
    "--current",
    "28,29,30",
    "--previous-weather",
    "sunny,cloudy,rainy",
    "--current-weather",
    "sunny,rainy,cloudy",
];

fn predict(extra: &[&str]) -> Output {
    let mut args = vec!["predict"];
    args.extend(SAMPLE);
    args.extend(extra);
    args.push("--no-animation");
    weathercast(&args)
}

/// Test that the CLI shows help with explicit help flag
#[test]
fn test_cli_help() {
    let output = weathercast(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("weathercast"));
    assert!(stdout.contains("predict"));
    assert!(stdout.contains("interactive"));
}

/// Test the night example prints the expected text output
#[test]
fn test_predict_night_text() {
    let output = predict(&["--horizon", "1", "--time-of-day", "night"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Time 1: 27.00 °C"));
    assert!(stdout.contains("Time 1: ❓ Clear"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("100% Complete"));
}

/// Test JSON output is machine-readable and seeded runs repeat
#[test]
fn test_predict_json_with_seed() {
    let args = ["--horizon", "3", "--time-of-day", "afternoon", "--format", "json", "--seed", "9"];
    let first = predict(&args);
    let second = predict(&args);

    assert!(first.status.success());
    let a: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();
    assert_eq!(a["horizon"], 3);
    assert_eq!(a["time_of_day"], "afternoon");
    assert_eq!(a["predicted_weather"], b["predicted_weather"]);
    assert_eq!(a["predicted_weather"].as_array().unwrap().len(), 3);
}

/// Test mismatched temperature lists are rejected
#[test]
fn test_predict_mismatched_lengths() {
    let output = weathercast(&[
        "predict",
        "--previous",
        "25,26",
        "--current",
        "28,29,30",
        "--time-of-day",
        "night",
        "--no-animation",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input"));
    assert!(stderr.contains("same length"));
}

/// Test an unknown time of day is rejected
#[test]
fn test_predict_invalid_time_of_day() {
    let output = predict(&["--time-of-day", "noon"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid time of day"));
}

/// Test integer-only parsing rejects fractional readings
#[test]
fn test_predict_integers_only() {
    let output = weathercast(&[
        "predict",
        "--previous",
        "25.5",
        "--current",
        "28",
        "--time-of-day",
        "night",
        "--integers",
        "--no-animation",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("integers"));
}

/// Test the horizon limit from configuration is enforced
#[test]
fn test_predict_horizon_over_limit() {
    let output = predict(&["--horizon", "11", "--time-of-day", "morning"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("between 1 and 10"));
}

/// Test readings too large to average are rejected instead of printing NaN
#[test]
fn test_predict_rejects_overflowing_readings() {
    let output = weathercast(&[
        "predict",
        "--previous",
        "1e308,1e308",
        "--current",
        "1e308,1e308",
        "--time-of-day",
        "night",
        "--format",
        "json",
        "--no-animation",
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input"));
}

/// Test the config command reports defaults when no config file exists
#[cfg(target_os = "linux")]
#[test]
fn test_config_without_file_reports_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_weathercast"))
        .arg("config")
        .env("RUST_LOG", "error")
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using config from: defaults"));
}

/// Test custom config file option
#[test]
fn test_custom_config_option() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weathercast.toml");
    std::fs::write(&path, "[limits]\nmax_horizon = 4\n").unwrap();
    let path = path.to_string_lossy().to_string();

    let output = weathercast(&["--config", &path, "config"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Using config from: {path}")));
    assert!(stdout.contains("\"max_horizon\": 4"));

    let mut args = vec!["--config", path.as_str(), "predict"];
    args.extend(SAMPLE);
    args.extend(["--horizon", "5", "--no-animation"]);
    let output = weathercast(&args);
    assert!(!output.status.success());
}
