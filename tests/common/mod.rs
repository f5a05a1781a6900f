#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn songbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("songbook").unwrap();
    cmd.env_remove("SONGBOOK_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized songbook at `root`
pub fn songbook_in(root: &Path) -> Command {
    let mut cmd = songbook_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn init_songbook(root: &Path) {
    songbook_cmd().arg("init").arg(root).assert().success();
}

pub fn switch_to_pro(root: &Path) {
    songbook_in(root)
        .args(["toggle", "mode"])
        .assert()
        .success();
}
