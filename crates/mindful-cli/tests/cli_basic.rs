//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with HOME pointed at a temporary directory
//! so config reads and writes never touch the real user config.

use std::path::Path;
use std::process::Command;

const SESSIONS: &str = r#"[
    {
        "duration": 15, "focusScore": 85, "calmScore": 78,
        "emotionalState": "peaceful", "timeOfDay": "morning", "soundscape": "forest",
        "breathingRate": [12, 12], "environmentNoise": 35, "lightLevel": 60, "temperature": 22,
        "flowStates": [{"startTime": 1744268400000, "duration": 9}]
    },
    {
        "duration": 20, "focusScore": 92, "calmScore": 88,
        "emotionalState": "focused", "timeOfDay": "morning", "soundscape": "waves",
        "breathingRate": [12], "environmentNoise": 30, "lightLevel": 70, "temperature": 21
    },
    {
        "duration": 10, "focusScore": 75, "calmScore": 82,
        "emotionalState": "relaxed", "timeOfDay": "evening", "soundscape": "rain",
        "breathingRate": [12], "environmentNoise": 40, "lightLevel": 50, "temperature": 23
    }
]"#;

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_mindful-cli"))
        .args(args)
        .env("HOME", home)
        .env_remove("MINDFUL_INSIGHTS_ENV")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn write_fixture(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_analyze_prints_seven_insights() {
    let home = tempfile::tempdir().unwrap();
    let input = write_fixture(home.path(), "sessions.json", SESSIONS);

    let (code, stdout, stderr) = run_cli(home.path(), &["analyze", "--input", &input]);
    assert_eq!(code, 0, "analyze failed: {stderr}");

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let insights = json["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 7);
    assert_eq!(
        insights[3]["description"],
        "Your mindfulness scores peak during 20-minute sessions"
    );
    assert!(json.get("recommendations").is_none());
}

#[test]
fn test_analyze_with_recommendations() {
    let home = tempfile::tempdir().unwrap();
    let input = write_fixture(home.path(), "sessions.json", SESSIONS);

    let (code, stdout, _) = run_cli(
        home.path(),
        &["analyze", "--input", &input, "--with-recommendations"],
    );
    assert_eq!(code, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["recommendations"].as_array().unwrap().len(), 4);
}

#[test]
fn test_analyze_strict_fails_without_flow_states() {
    let home = tempfile::tempdir().unwrap();
    let no_flow = SESSIONS.replace(
        r#""flowStates": [{"startTime": 1744268400000, "duration": 9}]"#,
        r#""flowStates": []"#,
    );
    let input = write_fixture(home.path(), "sessions.json", &no_flow);

    let (code, stdout, _) = run_cli(home.path(), &["analyze", "--input", &input]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["skipped"][0]["dimension"], "flow-state");

    let (code, _, stderr) = run_cli(home.path(), &["analyze", "--input", &input, "--strict"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Insufficient data for flow-state"));
}

#[test]
fn test_validate_reports_malformed_record() {
    let home = tempfile::tempdir().unwrap();
    let good = write_fixture(home.path(), "good.json", SESSIONS);
    let bad = write_fixture(
        home.path(),
        "bad.json",
        &SESSIONS.replacen(r#""duration": 20"#, r#""duration": 0"#, 1),
    );

    let (code, stdout, _) = run_cli(home.path(), &["validate", "--input", &good]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok (3 sessions)");

    let (code, _, stderr) = run_cli(home.path(), &["validate", "--input", &bad]);
    assert_ne!(code, 0);
    assert!(stderr.contains("index 1"));
}

#[test]
fn test_validate_names_record_for_negative_duration() {
    let home = tempfile::tempdir().unwrap();
    let bad = write_fixture(
        home.path(),
        "negative.json",
        &SESSIONS.replacen(r#""duration": 20"#, r#""duration": -5"#, 1),
    );

    let (code, _, stderr) = run_cli(home.path(), &["validate", "--input", &bad]);
    assert_ne!(code, 0);
    assert!(
        stderr.contains("Malformed session record at index 1"),
        "unexpected stderr: {stderr}"
    );
    assert!(stderr.contains("'duration'"));
}

#[test]
fn test_validate_names_field_for_non_numeric_score() {
    let home = tempfile::tempdir().unwrap();
    let bad = write_fixture(
        home.path(),
        "wordy.json",
        &SESSIONS.replacen(r#""focusScore": 92"#, r#""focusScore": "high""#, 1),
    );

    let (code, _, stderr) = run_cli(home.path(), &["validate", "--input", &bad]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Malformed session record at index 1: field 'focusScore'"));
}

#[test]
fn test_analyze_rejects_negative_duration_with_record_index() {
    let home = tempfile::tempdir().unwrap();
    let bad = write_fixture(
        home.path(),
        "negative.json",
        &SESSIONS.replacen(r#""duration": 20"#, r#""duration": -5"#, 1),
    );

    let (code, stdout, stderr) = run_cli(home.path(), &["analyze", "--input", &bad]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Malformed session record at index 1"));
}

#[test]
fn test_recommend_without_input() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["recommend"]);
    assert_eq!(code, 0);

    let recs: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(recs.len(), 4);
}

#[test]
fn test_config_set_then_get() {
    let home = tempfile::tempdir().unwrap();

    let (code, _, _) = run_cli(home.path(), &["config", "set", "engine.failure_policy", "strict"]);
    assert_eq!(code, 0);

    let (code, stdout, _) = run_cli(home.path(), &["config", "get", "engine.failure_policy"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "strict");

    let (code, _, _) = run_cli(home.path(), &["config", "get", "no.such.key"]);
    assert_ne!(code, 0);
}

#[test]
fn test_missing_input_file_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["analyze", "--input", "/nonexistent/sessions.json"]);
    assert_ne!(code, 0);
    assert!(stderr.starts_with("error:"));
}
