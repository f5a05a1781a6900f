//! Integration tests for pro-mode section editing

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_songbook, songbook_in, switch_to_pro};

#[test]
fn test_sections_require_pro_mode() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());

    songbook_in(temp.path())
        .args(["section", "add", "verse"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("toggle mode"));
}

#[test]
fn test_add_verse_chorus_then_remove_first() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    switch_to_pro(temp.path());

    songbook_in(temp.path())
        .args(["section", "add", "verse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Verse at index 0"));
    songbook_in(temp.path())
        .args(["section", "add", "chorus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Chorus at index 1"));
    songbook_in(temp.path())
        .args(["section", "remove", "0"])
        .assert()
        .success();

    songbook_in(temp.path())
        .args(["section", "list"])
        .assert()
        .success()
        .stdout("0  Chorus\n");

    songbook_in(temp.path())
        .arg("show")
        .assert()
        .stdout(predicate::str::contains("[Chorus]\nใจความหลัก / ฮุค / ท่อนจำ"));
}

#[test]
fn test_pre_chorus_spellings() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    switch_to_pro(temp.path());

    songbook_in(temp.path())
        .args(["section", "add", "prechorus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pre-Chorus"));
}

#[test]
fn test_unknown_kind_added_empty() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    switch_to_pro(temp.path());

    songbook_in(temp.path())
        .args(["section", "add", "Interlude"])
        .assert()
        .success();

    songbook_in(temp.path())
        .args(["section", "list"])
        .assert()
        .stdout("0  Interlude\n");
}

#[test]
fn test_edit_section_from_stdin() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    switch_to_pro(temp.path());

    songbook_in(temp.path())
        .args(["section", "add", "bridge"])
        .assert()
        .success();
    songbook_in(temp.path())
        .args(["section", "edit", "0", "-"])
        .write_stdin("up a fourth\nhold the IV\n")
        .assert()
        .success();

    songbook_in(temp.path())
        .arg("show")
        .assert()
        .stdout(predicate::str::contains("[0] Bridge\nup a fourth\nhold the IV\n"));
}

#[test]
fn test_out_of_range_exits_4() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    switch_to_pro(temp.path());

    songbook_in(temp.path())
        .args(["section", "remove", "0"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("no sections yet"));

    songbook_in(temp.path())
        .args(["section", "add", "solo"])
        .assert()
        .success();
    songbook_in(temp.path())
        .args(["section", "edit", "3", "x"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("0 to 0"));
}

#[test]
fn test_fractional_tempo_in_store_keeps_sections() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    switch_to_pro(temp.path());
    fs::write(
        temp.path().join(".songbook/store/proData.json"),
        r#"{"title":"Rain","tempo":87.5,"sections":[{"type":"Verse","content":"v"},{"type":"Chorus","content":"c"}]}"#,
    )
    .unwrap();

    songbook_in(temp.path())
        .args(["set", "notes", "half-time"])
        .assert()
        .success();

    songbook_in(temp.path())
        .args(["section", "list"])
        .assert()
        .success()
        .stdout("0  Verse\n1  Chorus\n");
    songbook_in(temp.path())
        .arg("show")
        .assert()
        .stdout(predicate::str::contains("Rain"))
        .stdout(predicate::str::contains("BPM 87"));
}

#[test]
fn test_empty_list_ends_with_newline() {
    let temp = TempDir::new().unwrap();
    init_songbook(temp.path());
    switch_to_pro(temp.path());

    songbook_in(temp.path())
        .args(["section", "list"])
        .assert()
        .success()
        .stdout("No sections yet\n");
}
