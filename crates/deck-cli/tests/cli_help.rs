use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("deck")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("present"))
        .stdout(predicate::str::contains("outline"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_present_help_shows_start_flag() {
    cargo_bin_cmd!("deck")
        .args(["present", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--start"))
        .stdout(predicate::str::contains("1-based"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("deck")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("deck"));
}

#[test]
fn test_missing_subcommand_fails() {
    cargo_bin_cmd!("deck")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
