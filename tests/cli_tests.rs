//! Integration tests for the remind binary

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::{remind_cmd, write_entry};

fn sample_journal(home: &Path) {
    let journal = home.join("journal");
    write_entry(
        &journal,
        "2025/04 Apr/Apr 17.md",
        "---\nmood: ok\n---\n# Apr 17 🟢\n# Journal\nA wonderful, peaceful morning in the #garden.\nWhy is stillness so rare?\n# Tasks\n- water plants",
    );
    write_entry(
        &journal,
        "2025/04 Apr/Apr 18.md",
        "# Journal\nStillness again. The #garden was quiet and I felt grateful.",
    );
    write_entry(&journal, "2025/Ideas.md", "Not a dated entry #ignored");
}

#[test]
fn test_pulse_offline_summary() {
    let temp = TempDir::new().unwrap();
    sample_journal(temp.path());

    remind_cmd(temp.path())
        .args(["pulse", "--journal-dir", "journal", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ReMind Pulse"))
        .stdout(predicate::str::contains("Most used words: garden, stillness, wonderful"))
        .stdout(predicate::str::contains("Questions asked: 1"))
        .stdout(predicate::str::contains("Tags: #garden"))
        .stdout(predicate::str::contains("What does \"garden\" mean"))
        .stdout(predicate::str::contains("(Insight unavailable)"))
        .stdout(predicate::str::contains("ignored").not());
}

#[test]
fn test_pulse_no_insight() {
    let temp = TempDir::new().unwrap();
    sample_journal(temp.path());

    remind_cmd(temp.path())
        .args(["pulse", "--journal-dir", "journal", "--offline", "--no-insight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotional Insight").not());
}

#[test]
fn test_pulse_json() {
    let temp = TempDir::new().unwrap();
    sample_journal(temp.path());

    let output = remind_cmd(temp.path())
        .args(["pulse", "--journal-dir", "journal", "--offline", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["entry_count"], 2);
    assert_eq!(report["summary"]["questions_count"], 1);
    assert_eq!(report["summary"]["tags"][0][0], "garden");
    assert_eq!(report["summary"]["tags"][0][1], 2);
    assert_eq!(report["insight"], "(Insight unavailable)");
}

#[test]
fn test_pulse_journal_dir_from_env() {
    let temp = TempDir::new().unwrap();
    sample_journal(temp.path());

    remind_cmd(temp.path())
        .env("REMIND_JOURNAL_DIR", temp.path().join("journal"))
        .args(["pulse", "--offline", "--no-insight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags: #garden"));
}

#[test]
fn test_pulse_journal_dir_from_config_file() {
    let temp = TempDir::new().unwrap();
    sample_journal(temp.path());
    fs::write(
        temp.path().join("remind.toml"),
        "journal_dir = \"journal\"\ncustom_stopwords = [\"stillness\"]\n",
    )
    .unwrap();

    remind_cmd(temp.path())
        .args(["pulse", "--offline", "--no-insight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Most used words: garden, wonderful"))
        .stdout(predicate::str::contains("Tags: #garden"));
}

#[test]
fn test_pulse_missing_journal_dir() {
    let temp = TempDir::new().unwrap();

    remind_cmd(temp.path())
        .args(["pulse", "--journal-dir", "nowhere", "--offline"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Journal directory not found"))
        .stderr(predicate::str::contains("REMIND_JOURNAL_DIR"));
}

#[test]
fn test_pulse_without_recent_entries() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("journal").join("04 Apr")).unwrap();

    remind_cmd(temp.path())
        .args(["pulse", "--journal-dir", "journal", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recent journal entries found."));
}

#[test]
fn test_clean_prints_prose() {
    let temp = TempDir::new().unwrap();
    let path = write_entry(
        temp.path(),
        "Apr 17.md",
        "---\ntitle: x\n---\n# Journal\nSlow rain ![pic](rain.png)today. [[Weather]]\n# Tasks\n- none",
    );

    remind_cmd(temp.path())
        .arg("clean")
        .arg(&path)
        .assert()
        .success()
        .stdout("Slow rain today. Weather\n");
}

#[test]
fn test_clean_missing_file() {
    let temp = TempDir::new().unwrap();

    remind_cmd(temp.path())
        .args(["clean", "missing.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_ingest_writes_dated_files() {
    let temp = TempDir::new().unwrap();
    sample_journal(temp.path());

    remind_cmd(temp.path())
        .args(["ingest", "--journal-dir", "journal", "--output", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 cleaned entries"))
        .stdout(predicate::str::contains("Skipped 1 files"));

    let cleaned = fs::read_to_string(temp.path().join("out").join("2025-04-18.md")).unwrap();
    assert_eq!(
        cleaned,
        "Stillness again. The #garden was quiet and I felt grateful."
    );
    assert!(temp.path().join("out").join("2025-04-17.md").exists());
}

#[test]
fn test_entries_lists_recent_files() {
    let temp = TempDir::new().unwrap();
    sample_journal(temp.path());

    remind_cmd(temp.path())
        .args(["entries", "--journal-dir", "journal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 entries:"))
        .stdout(predicate::str::contains("Apr 17.md"))
        .stdout(predicate::str::contains("Ideas.md").not());
}

#[test]
fn test_config_init_and_show() {
    let temp = TempDir::new().unwrap();

    remind_cmd(temp.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created remind.toml"));
    assert!(temp.path().join("remind.toml").exists());

    remind_cmd(temp.path())
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    remind_cmd(temp.path())
        .env("REMIND_DAYS_BACK", "14")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("days_back = 14"))
        .stdout(predicate::str::contains("sentiment_model = \"phi4\""));
}

#[test]
fn test_invalid_days_back_env() {
    let temp = TempDir::new().unwrap();

    remind_cmd(temp.path())
        .env("REMIND_DAYS_BACK", "soon")
        .arg("config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("REMIND_DAYS_BACK=14"));
}

#[test]
fn test_explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();

    remind_cmd(temp.path())
        .args(["--config", "missing.toml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_pulse_days_beyond_calendar() {
    let temp = TempDir::new().unwrap();
    sample_journal(temp.path());

    remind_cmd(temp.path())
        .args(["pulse", "--journal-dir", "journal", "--offline", "--days", "200000000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("days_back"))
        .stderr(predicate::str::contains("panicked").not());
}
