use crate::cli::support::hydroroute;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_writes_sample_network() {
    let dir = tempdir().unwrap();

    hydroroute()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote sample network to network.toml"));

    let content = fs::read_to_string(dir.path().join("network.toml")).unwrap();
    let table: toml::Table = toml::from_str(&content).unwrap();
    assert_eq!(table["version"].as_integer(), Some(1));
    assert_eq!(table["centers"].as_integer(), Some(5));
    assert_eq!(table["pipes"].as_array().unwrap().len(), 10);
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("net.toml");
    fs::write(&path, "keep me").unwrap();

    hydroroute()
        .arg("init")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

    hydroroute()
        .arg("init")
        .arg(&path)
        .arg("--force")
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[[pipes]]"));
}

#[test]
fn test_written_network_is_loadable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("net.toml");

    hydroroute().arg("init").arg(&path).assert().success();

    hydroroute()
        .arg("--network")
        .arg(&path)
        .args(["route", "0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 3 -> 1 -> 2 (9 min)"));
}

#[test]
fn test_runtime_changes_are_not_written_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("net.toml");
    hydroroute().arg("init").arg(&path).assert().success();
    let before = fs::read_to_string(&path).unwrap();

    hydroroute()
        .arg("--network")
        .arg(&path)
        .args(["--disable", "3:1", "--add", "2:0:1", "pipes"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_init_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("net.toml");

    hydroroute()
        .args(["--format", "json", "init"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""))
        .stdout(predicate::str::contains("\"pipes\": 10"));
}
