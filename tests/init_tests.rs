//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_songbook, songbook_cmd, songbook_in};

#[test]
fn test_init_creates_layout() {
    let temp = TempDir::new().unwrap();

    songbook_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized songbook"));

    assert!(temp.path().join(".songbook").is_dir());
    assert!(temp.path().join(".songbook/store").is_dir());

    let content = fs::read_to_string(temp.path().join(".songbook/config.toml")).unwrap();
    assert!(content.contains("recipient = \"\""));
    assert!(content.contains("created"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());

    songbook_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_command_outside_songbook_exits_2() {
    let temp = TempDir::new().unwrap();

    songbook_in(temp.path())
        .arg("show")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("songbook init"));
}

#[test]
fn test_songbook_root_env_override() {
    let book = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_songbook(book.path());

    songbook_cmd()
        .current_dir(elsewhere.path())
        .env("SONGBOOK_ROOT", book.path())
        .args(["set", "title", "Remote"])
        .assert()
        .success();

    songbook_in(book.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remote"));
}

#[test]
fn test_discovery_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    let nested = temp.path().join("drafts/old");
    fs::create_dir_all(&nested).unwrap();

    songbook_in(&nested).arg("prefs").assert().success();
}

#[test]
fn test_config_set_and_get_recipient() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());

    songbook_in(temp.path())
        .args(["config", "recipient", "band@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set recipient = band@example.com"));

    songbook_in(temp.path())
        .args(["config", "recipient"])
        .assert()
        .success()
        .stdout("band@example.com\n");
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());

    songbook_in(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recipient = "))
        .stdout(predicate::str::contains("export_dir = "))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());

    songbook_in(temp.path())
        .args(["config", "editor", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());

    songbook_in(temp.path())
        .args(["config", "created", "2020-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}
