use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_config(dir: &Path, names: &[&str]) -> PathBuf {
    let mut yaml = String::from("people:\n");
    for (i, name) in names.iter().enumerate() {
        yaml.push_str(&format!("  - name: {name}\n    phone: '+3460000000{i}'\n"));
    }
    yaml.push_str("skip_sms: true\n");
    let path = dir.join("config.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

fn amic(root: &Path, config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("amic").unwrap();
    cmd.arg("--root")
        .arg(root)
        .arg("--config")
        .arg(config);
    cmd
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_accepts_a_valid_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &["Maria", "Joan", "Pere"]);

    amic(dir.path(), &config)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 participants"));
}

#[test]
fn check_rejects_a_single_participant() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &["Sola"]);

    amic(dir.path(), &config)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 participants"));
}

#[test]
fn check_rejects_duplicate_names() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &["Maria", "Joan", "Maria"]);

    amic(dir.path(), &config)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate participant name"));
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_writes_records_once() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &["Maria", "Joan", "Pere"]);

    amic(dir.path(), &config)
        .arg("draw")
        .assert()
        .success()
        .stdout(predicate::str::contains("Links: creat"));

    assert!(dir.path().join("data/links.json").exists());
    assert!(dir.path().join("data/assignments.json").exists());

    // Second run leaves the records alone.
    let before = std::fs::read(dir.path().join("data/links.json")).unwrap();
    amic(dir.path(), &config)
        .arg("draw")
        .assert()
        .success()
        .stdout(predicate::str::contains("Links: ja existia"));
    let after = std::fs::read(dir.path().join("data/links.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn draw_json_reports_the_outcome() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &["Maria", "Joan"]);

    let output = amic(dir.path(), &config)
        .args(["--json", "draw"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["links_written"], true);
    assert_eq!(json["assignments_written"], true);
    assert_eq!(json["participants"], 2);
}

#[test]
fn draw_rejects_invalid_config_without_writing() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &["Sola"]);

    amic(dir.path(), &config).arg("draw").assert().failure();
    assert!(!dir.path().join("data").exists());
}

// ---------------------------------------------------------------------------
// links
// ---------------------------------------------------------------------------

#[test]
fn links_before_draw_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &["Maria", "Joan"]);

    amic(dir.path(), &config)
        .arg("links")
        .assert()
        .failure()
        .stderr(predicate::str::contains("draw has not been run"));
}

#[test]
fn links_lists_every_participant() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &["Maria", "Joan", "Pere"]);

    amic(dir.path(), &config).arg("draw").assert().success();

    amic(dir.path(), &config)
        .args(["links", "--public-url", "https://amic.example.com"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Maria")
                .and(predicate::str::contains("Joan"))
                .and(predicate::str::contains("Pere"))
                .and(predicate::str::contains(
                    "https://amic.example.com/qui-hem-toca-a-mi/",
                ))
                .and(predicate::str::contains("Total: 3 participants")),
        );
}

// ---------------------------------------------------------------------------
// notify
// ---------------------------------------------------------------------------

#[test]
fn notify_in_test_mode_skips_every_send() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &["Maria", "Joan"]);

    amic(dir.path(), &config).arg("draw").assert().success();

    amic(dir.path(), &config)
        .arg("notify")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Mode proves")
                .and(predicate::str::contains("2 omesos"))
                .and(predicate::str::contains("0 errors")),
        );
}
