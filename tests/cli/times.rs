use crate::cli::support::{hydroroute, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Times command tests
// ============================================================================

#[test]
fn test_times_from_sample_source() {
    hydroroute()
        .args(["times", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Travel times from center 0 (built-in sample):"))
        .stdout(predicate::str::contains("9 min"))
        .stdout(predicate::str::contains("0 -> 3 -> 1 -> 2"));
}

#[test]
fn test_times_json() {
    let output = hydroroute()
        .args(["--format", "json", "times", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let minutes: Vec<u64> = json["times"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["minutes"].as_u64().unwrap())
        .collect();
    assert_eq!(minutes, vec![0, 8, 9, 5, 7]);
    assert_eq!(json["queue"], "indexed");
    assert_eq!(json["stats"]["settled"], 5);
}

#[test]
fn test_times_with_isolated_center() {
    let output = hydroroute()
        .args([
            "--format", "json", "--disable", "1:2", "--disable", "3:2", "--disable", "4:2",
            "times", "0",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert!(json["times"][2]["minutes"].is_null());
    assert!(json["times"][2]["route"].is_null());
    assert_eq!(json["times"][4]["minutes"], 7);
}

#[test]
fn test_times_human_marks_unreachable() {
    hydroroute()
        .args([
            "--disable", "1:2", "--disable", "3:2", "--disable", "4:2", "times", "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("unreachable"));
}

#[test]
fn test_times_quiet_drops_header() {
    hydroroute()
        .args(["--quiet", "times", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Travel times").not());
}
