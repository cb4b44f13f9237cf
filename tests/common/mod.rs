#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// `remind` isolated from the caller's environment, with `home` as both
/// working directory and home directory
pub fn remind_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("remind").unwrap();
    cmd.current_dir(home);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));
    cmd.env_remove("REMIND_JOURNAL_DIR");
    cmd.env_remove("REMIND_DAYS_BACK");
    cmd.env_remove("REMIND_CUSTOM_STOPWORDS");
    cmd.env_remove("REMIND_OLLAMA_URL");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn write_entry(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}
