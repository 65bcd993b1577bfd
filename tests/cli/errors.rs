use crate::cli::support::{hydroroute, stderr_json, write_network};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Error reporting and exit code tests
// ============================================================================

#[test]
fn test_disabling_unknown_pipe_is_data_error() {
    hydroroute()
        .args(["--disable", "2:0", "pipes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: pipe 2 -> 0 does not exist"));
}

#[test]
fn test_json_error_envelope() {
    let output = hydroroute()
        .args(["--format", "json", "--enable", "2:0", "pipes"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "edge_not_found");
}

#[test]
fn test_malformed_pipe_is_usage_error() {
    hydroroute()
        .args(["--add", "1:2", "pipes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("FROM:TO:MINUTES"));
}

#[test]
fn test_negative_minutes_rejected() {
    hydroroute()
        .args(["--add", "1:2:-5", "pipes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid minutes"));
}

#[test]
fn test_usage_error_as_json() {
    let output = hydroroute()
        .args(["--format", "json", "--queue", "fibonacci", "pipes"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_usage_error_as_json_with_uppercase_format() {
    let output = hydroroute()
        .args(["--format", "JSON", "--add", "1:2", "pipes"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "usage_error");
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_adding_pipe_to_unknown_center() {
    hydroroute()
        .args(["--add", "0:7:1", "pipes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("center 7 out of range"));
}

#[test]
fn test_invalid_network_file() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), "centers = 0\n");

    hydroroute()
        .arg("--network")
        .arg(&network)
        .arg("pipes")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid network"))
        .stderr(predicate::str::contains("at least one center"));
}

#[test]
fn test_pipe_to_missing_center_in_file() {
    let dir = tempdir().unwrap();
    let network = write_network(
        dir.path(),
        "centers = 2\n[[pipes]]\nfrom = 0\nto = 4\nminutes = 1\n",
    );

    hydroroute()
        .arg("--network")
        .arg(&network)
        .arg("pipes")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("references center 4"));
}

#[test]
fn test_unsupported_network_version() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), "version = 2\ncenters = 2\n");

    hydroroute()
        .arg("--network")
        .arg(&network)
        .arg("pipes")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported network format version"));
}

#[test]
fn test_missing_network_file() {
    let dir = tempdir().unwrap();

    hydroroute()
        .arg("--network")
        .arg(dir.path().join("absent.toml"))
        .arg("pipes")
        .assert()
        .code(1);
}

#[test]
fn test_quiet_suppresses_error_message() {
    hydroroute()
        .args(["--quiet", "--disable", "2:0", "pipes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:").not());
}
