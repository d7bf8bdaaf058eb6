//! Integration tests for the `riskrating` binary.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const REFERENCE_VECTOR: &str =
    "SL:1/M:1/O:0/S:2/ED:1/EE:1/A:1/ID:1/LC:2/LI:1/LAV:1/LAC:1/FD:1/RD:1/NC:2/PV:3";

/// Binary run from an empty directory so no stray config is picked up
fn riskrating(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_riskrating"));
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_score_terminal_output() {
    let dir = TempDir::new().unwrap();
    let output = riskrating(&dir)
        .args(["score", REFERENCE_VECTOR])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("OWASP Risk Rating"));
    assert!(stdout.contains(REFERENCE_VECTOR));
    assert!(stdout.contains("NO_TECHNICAL_SKILLS"));
    assert!(stdout.contains("1.250  LOW"));
}

#[test]
fn test_score_json_output() {
    let dir = TempDir::new().unwrap();
    let output = riskrating(&dir)
        .args(["score", "--format", "json", REFERENCE_VECTOR])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["vector"], REFERENCE_VECTOR);
    assert_eq!(json["scores"]["likelihood"]["score"], 1.0);
    assert_eq!(json["scores"]["business_impact"]["score"], 1.75);
    assert_eq!(json["factors"].as_array().unwrap().len(), 16);
}

#[test]
fn test_score_reads_vector_from_stdin() {
    let dir = TempDir::new().unwrap();
    let output = riskrating(&dir)
        .args(["score", "-", "--format", "yaml"])
        .write_stdin(format!("{REFERENCE_VECTOR}\n"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let yaml: serde_yaml::Value = serde_yaml::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(yaml["scores"]["technical_impact"]["level"].as_str(), Some("LOW"));
}

#[test]
fn test_score_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.md");
    riskrating(&dir)
        .args(["score", "--format", "markdown", "--no-factors", "--output"])
        .arg(&path)
        .arg(REFERENCE_VECTOR)
        .assert()
        .success();

    let report = fs::read_to_string(&path).unwrap();
    assert!(report.starts_with("# OWASP Risk Rating"));
    assert!(report.contains("| Business Impact | 1.750 | LOW |"));
    assert!(!report.contains("## Factors"));
}

#[test]
fn test_invalid_vector_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = riskrating(&dir)
        .args(["score", "SL:1/M:1/O:0/S:2/ED:1/EE:null"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid vector"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_factors_for_one_category() {
    let dir = TempDir::new().unwrap();
    let output = riskrating(&dir)
        .args(["factors", "--category", "M"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Motive (M)\n  1  LOW_OR_NO_REWARD\n  4  POSSIBLE_REWARD\n  9  HIGH_REWARD\n"
    );
}

#[test]
fn test_init_then_configured_format_applies() {
    let dir = TempDir::new().unwrap();
    riskrating(&dir).arg("init").assert().success();
    riskrating(&dir).arg("init").assert().failure();

    fs::write(
        dir.path().join(".riskrating.toml"),
        "[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();

    let output = riskrating(&dir)
        .args(["score", REFERENCE_VECTOR])
        .output()
        .unwrap();
    let json: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["scores"]["technical_impact"]["score"], 1.25);
}
