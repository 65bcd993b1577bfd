use crate::cli::support::hydroroute;
use predicates::prelude::*;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    hydroroute()
        .args(["--log-level", "debug", "pipes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    hydroroute()
        .arg("pipes")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_logs_solver_stats() {
    hydroroute()
        .args(["--verbose", "route", "0", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("solver_stats"))
        .stderr(predicate::str::contains("settled=5"));
}

#[test]
fn test_pipe_changes_are_logged_at_info() {
    hydroroute()
        .args(["--log-level", "info", "--disable", "3:1", "pipes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("pipe_availability_changed"));
}

#[test]
fn test_log_json_emits_json_lines() {
    hydroroute()
        .args(["--log-json", "--log-level", "debug", "pipes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}

#[test]
fn test_env_filter_overrides_flags() {
    hydroroute()
        .env("HYDROROUTE_LOG", "hydroroute=debug")
        .arg("pipes")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_logs_stay_off_stdout() {
    hydroroute()
        .args(["--log-level", "trace", "--format", "json", "pipes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parse_args").not());
}
