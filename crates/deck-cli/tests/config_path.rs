use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("deck")
        .env("DECK_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("deck")
        .env("DECK_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("threshold = 50.0"));
    assert!(contents.contains("[ui]"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "# existing config").unwrap();

    cargo_bin_cmd!("deck")
        .env("DECK_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(&config_path).unwrap(),
        "# existing config"
    );
}

#[test]
fn test_config_path_works_with_broken_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[gesture\nthreshold =").unwrap();

    cargo_bin_cmd!("deck")
        .env("DECK_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success();
}

#[test]
fn test_broken_config_reports_parse_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[gesture]\nthreshold = \"far\"").unwrap();
    let deck = dir.path().join("talk.md");
    fs::write(&deck, "# One").unwrap();

    cargo_bin_cmd!("deck")
        .env("DECK_HOME", dir.path())
        .arg("outline")
        .arg(&deck)
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"))
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_negative_threshold_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[gesture]\nthreshold = -1.0\n").unwrap();
    let deck = dir.path().join("talk.md");
    fs::write(&deck, "# One").unwrap();

    cargo_bin_cmd!("deck")
        .env("DECK_HOME", dir.path())
        .arg("outline")
        .arg(&deck)
        .assert()
        .failure()
        .stderr(predicate::str::contains("gesture.threshold"));
}
