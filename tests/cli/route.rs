use crate::cli::support::{hydroroute, stdout_json, write_network, SPLIT_NETWORK};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Route command tests
// ============================================================================

#[test]
fn test_route_on_sample_network() {
    hydroroute()
        .args(["route", "0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route from 0 to 2: 0 -> 3 -> 1 -> 2 (9 min)",
        ));
}

#[test]
fn test_route_avoids_disabled_pipe() {
    hydroroute()
        .args(["--disable", "3:1", "route", "0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 2 (11 min)"));
}

#[test]
fn test_route_uses_added_pipe() {
    hydroroute()
        .args(["--add", "4:3:1", "route", "4", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 -> 3 (1 min)"));
}

#[test]
fn test_route_json() {
    let output = hydroroute()
        .args(["--format", "json", "route", "0", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["reachable"], true);
    assert_eq!(json["minutes"], 9);
    assert_eq!(json["route"], serde_json::json!([0, 3, 1, 2]));
}

#[test]
fn test_route_to_self() {
    hydroroute()
        .args(["route", "4", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route from 4 to 4: 4 (0 min)"));
}

#[test]
fn test_unreachable_destination_is_not_an_error() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), SPLIT_NETWORK);

    hydroroute()
        .arg("--network")
        .arg(&network)
        .args(["route", "0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No route from 0 to 2"));

    let output = hydroroute()
        .arg("--network")
        .arg(&network)
        .args(["--format", "json", "route", "0", "2"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["reachable"], false);
    assert!(json["route"].is_null());
    assert!(json["minutes"].is_null());
}

#[test]
fn test_enable_restores_pipe_from_file() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path(), SPLIT_NETWORK);

    hydroroute()
        .arg("--network")
        .arg(&network)
        .args(["--enable", "1:2", "route", "0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 2 (10 min)"));
}

#[test]
fn test_scan_queue_gives_same_route() {
    hydroroute()
        .args(["--queue", "scan", "route", "0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 3 -> 1 -> 2 (9 min)"));
}

#[test]
fn test_route_out_of_range() {
    hydroroute()
        .args(["route", "0", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "error: center 9 out of range (network has 5 centers)",
        ));
}
