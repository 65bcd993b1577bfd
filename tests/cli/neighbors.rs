use crate::cli::support::{hydroroute, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Neighbors command tests
// ============================================================================

#[test]
fn test_neighbors_of_sample_center() {
    hydroroute()
        .args(["neighbors", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 -> 1  3 min  enabled"))
        .stdout(predicate::str::contains("3 -> 2  9 min  enabled"))
        .stdout(predicate::str::contains("3 -> 4  2 min  enabled"));
}

#[test]
fn test_neighbors_shows_disabled_pipes() {
    hydroroute()
        .args(["--disable", "3:1", "neighbors", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 -> 1  3 min  disabled"));
}

#[test]
fn test_readded_pipe_adds_neighbor_slot() {
    let output = hydroroute()
        .args(["--format", "json", "--add", "3:1:3", "neighbors", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["neighbors"], serde_json::json!([1, 2, 4, 1]));
    assert_eq!(json["pipes"].as_array().unwrap().len(), 4);
}

#[test]
fn test_neighbors_out_of_range() {
    hydroroute()
        .args(["neighbors", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}
