//! CLI Integration Tests
//!
//! Tests the command-line interface end-to-end. Nothing here talks to the
//! real starter service; network-dependent behavior is covered by the
//! wizard unit tests against fakes.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get the binary to test.
fn mpstart() -> Command {
    Command::cargo_bin("mpstart").unwrap()
}

// ============================================================================
// Help & Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    mpstart()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MicroProfile Starter"));
}

#[test]
fn test_short_help_flag() {
    mpstart().arg("-h").assert().success().stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_flag() {
    mpstart()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Subcommand Help Tests
// ============================================================================

#[test]
fn test_new_command_help() {
    mpstart()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--group-id"))
        .stdout(predicate::str::contains("--artifact-id"))
        .stdout(predicate::str::contains("--no-open"));
}

#[test]
fn test_matrix_command_help() {
    mpstart()
        .args(["matrix", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("support matrix"));
}

#[test]
fn test_specs_command_help() {
    mpstart()
        .args(["specs", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--version"));
}

#[test]
fn test_unknown_subcommand_fails() {
    mpstart().arg("frobnicate").assert().failure();
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn test_completions_bash() {
    mpstart()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mpstart"));
}

#[test]
fn test_completions_invalid_shell() {
    mpstart().args(["completions", "nosuchshell"]).assert().failure();
}

// ============================================================================
// Offline Behavior Tests
// ============================================================================

// The wizard reports failures itself and exits zero; the matrix fetch is the
// first thing it does, so pointing it at a closed port exercises the
// connectivity message without prompting for anything.
#[test]
fn test_wizard_reports_connectivity_failure() {
    mpstart()
        .args(["--url", "http://127.0.0.1:1", "new", "--no-open"])
        .assert()
        .success()
        .stderr(predicate::str::contains("network connection"));
}

// `matrix` is a plain query command, so there a dead service is a real error.
#[test]
fn test_matrix_fails_against_dead_service() {
    mpstart().args(["--url", "http://127.0.0.1:1", "matrix"]).assert().failure();
}
