//! Integration tests for editing, showing and clearing notes

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_songbook, songbook_in, switch_to_pro};

#[test]
fn test_set_and_show_simple_note() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());

    songbook_in(temp.path())
        .args(["set", "title", "Midnight"])
        .assert()
        .success();
    songbook_in(temp.path())
        .args(["set", "author", "June"])
        .assert()
        .success();

    songbook_in(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("▌ Midnight\n"))
        .stdout(predicate::str::contains("Author: June"));
}

#[test]
fn test_edit_written_to_store_slot() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());

    songbook_in(temp.path())
        .args(["set", "body", "first line"])
        .assert()
        .success();

    let raw = fs::read_to_string(temp.path().join(".songbook/store/simpleData.json")).unwrap();
    assert!(raw.contains("\"body\":\"first line\""));
}

#[test]
fn test_set_body_from_stdin() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());

    songbook_in(temp.path())
        .args(["set", "body", "-"])
        .write_stdin("line one\nline two\n")
        .assert()
        .success();

    songbook_in(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\nline one\nline two\n"));
}

#[test]
fn test_invalid_field_exits_3() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());

    songbook_in(temp.path())
        .args(["set", "colour", "red"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("font-size"));
}

#[test]
fn test_invalid_datetime_exits_3() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());

    songbook_in(temp.path())
        .args(["set", "datetime", "tomorrow"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("YYYY-MM-DDTHH:MM"));
}

#[test]
fn test_pro_tempo_is_truncated() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    switch_to_pro(temp.path());

    songbook_in(temp.path())
        .args(["set", "tempo", "92.7"])
        .assert()
        .success();
    songbook_in(temp.path())
        .args(["set", "key", "Ebm"])
        .assert()
        .success();

    songbook_in(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("BPM 92 • 4/4 • Key Ebm"));
}

#[test]
fn test_modes_keep_separate_notes() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());

    songbook_in(temp.path())
        .args(["set", "title", "Lyrics draft"])
        .assert()
        .success();
    switch_to_pro(temp.path());

    songbook_in(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Untitled"))
        .stdout(predicate::str::contains("Lyrics draft").not());
}

#[test]
fn test_image_attach_and_remove() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    let cover = temp.path().join("cover.png");
    fs::write(&cover, b"not really a png").unwrap();

    songbook_in(temp.path())
        .arg("image")
        .arg(&cover)
        .assert()
        .success();
    songbook_in(temp.path())
        .arg("show")
        .assert()
        .stdout(predicate::str::contains("Image: attached"));

    songbook_in(temp.path())
        .args(["image", "--remove"])
        .assert()
        .success();
    songbook_in(temp.path())
        .arg("show")
        .assert()
        .stdout(predicate::str::contains("Image: none"));
}

#[test]
fn test_image_rejects_non_image_file() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    let notes = temp.path().join("notes.txt");
    fs::write(&notes, "hello").unwrap();

    songbook_in(temp.path())
        .arg("image")
        .arg(&notes)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image error"));
}

#[test]
fn test_clear_resets_current_note_only() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    switch_to_pro(temp.path());

    songbook_in(temp.path())
        .args(["set", "title", "Rain"])
        .assert()
        .success();
    songbook_in(temp.path()).arg("clear").assert().success();

    songbook_in(temp.path())
        .arg("show")
        .assert()
        .stdout(predicate::str::contains("Untitled"));
    songbook_in(temp.path())
        .arg("prefs")
        .assert()
        .stdout(predicate::str::contains("mode = pro"));
}

#[test]
fn test_corrupt_slot_shows_defaults() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    fs::write(temp.path().join(".songbook/store/simpleData.json"), "{oops").unwrap();

    songbook_in(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Untitled"));
}
