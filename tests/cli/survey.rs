use crate::cli::support::{hydroroute, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Survey command tests
// ============================================================================

#[test]
fn test_survey_names_optimal_source() {
    hydroroute()
        .arg("survey")
        .assert()
        .success()
        .stdout(predicate::str::contains("center 0: total 29 min, 0 unreachable"))
        .stdout(predicate::str::contains(
            "Optimal source: center 1 (18 min total, 0 unreachable)",
        ));
}

#[test]
fn test_survey_json() {
    let output = hydroroute()
        .args(["--format", "json", "survey"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["optimal"], 1);
    let totals: Vec<u64> = json["sources"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["total_minutes"].as_u64().unwrap())
        .collect();
    assert_eq!(totals, vec![29, 18, 50, 18, 40]);
}

#[test]
fn test_survey_follows_disabled_pipe() {
    hydroroute()
        .args(["--disable", "1:3", "survey"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Optimal source: center 3"));
}
