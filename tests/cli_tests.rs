//! CLI integration tests using the REAL pwakit binary

mod common;

use common::{TestProject, pwakit_cmd};
use predicates::prelude::*;

#[test]
fn test_help_output() {
    pwakit_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installable web app toolkit"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("icons"))
        .stdout(predicate::str::contains("locate"))
        .stdout(predicate::str::contains("link"));
}

#[test]
fn test_version_output() {
    pwakit_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pwakit"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_unknown_subcommand_fails() {
    pwakit_cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_completions_bash() {
    pwakit_cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pwakit"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    pwakit_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_project_flag_from_environment() {
    let project = TestProject::installable();

    pwakit_cmd()
        .env("PWAKIT_PROJECT_DIR", &project.path)
        .arg("locate")
        .assert()
        .success()
        .stdout(predicate::str::contains("public/manifest.json"));
}

#[test]
fn test_missing_project_dir_fails() {
    pwakit_cmd()
        .args(["-p", "/nonexistent/project/dir", "locate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
