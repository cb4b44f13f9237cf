//! File system access to the journal tree

use crate::domain::RawEntry;
use crate::error::{RemindError, Result};
use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};
use walkdir::WalkDir;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Month folder, e.g. `04 Apr`
fn month_dir_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([0-1][0-9]) [A-Za-z]{3}$").unwrap())
}

/// Day file, e.g. `Apr 17.md`
fn day_file_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z]{3} [0-3][0-9]\.md$").unwrap())
}

/// Abstract read access to a journal
pub trait JournalRepository {
    /// Root directory of the journal
    fn root(&self) -> &Path;

    /// Dated entries modified at or after `since`, sorted by path
    fn load_recent_entries(&self, since: DateTime<Local>) -> Result<Vec<RawEntry>>;

    /// Every markdown file under the root, sorted
    fn all_markdown_files(&self) -> Result<Vec<PathBuf>>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Read one file as a raw entry
    pub fn read_entry(path: &Path) -> Result<RawEntry> {
        let content = fs::read_to_string(path)?;
        let modified = Self::modified_time(path);
        Ok(RawEntry::new(content, path.to_path_buf(), modified))
    }

    fn modified_time(path: &Path) -> Option<DateTime<Local>> {
        fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Local>::from)
    }

    fn ensure_root(&self) -> Result<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(RemindError::JournalDirNotFound(self.root.clone()))
        }
    }

    /// Files below the root, skipping hidden directories
    fn walk_files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.'))
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_recent_entries(&self, since: DateTime<Local>) -> Result<Vec<RawEntry>> {
        self.ensure_root()?;

        let mut paths: Vec<PathBuf> = self.walk_files().filter(|p| is_dated_entry(p)).collect();
        paths.sort();

        let mut entries = Vec::new();
        for path in paths {
            let Some(modified) = Self::modified_time(&path) else {
                warn!("Skipping {}: modification time unavailable", path.display());
                continue;
            };
            if modified < since {
                debug!("Skipping {}: last modified {}", path.display(), modified);
                continue;
            }

            match fs::read_to_string(&path) {
                Ok(content) => entries.push(RawEntry::new(content, path, Some(modified))),
                Err(e) => warn!("Skipping unreadable entry {}: {}", path.display(), e),
            }
        }

        debug!("Loaded {} entries since {}", entries.len(), since);
        Ok(entries)
    }

    fn all_markdown_files(&self) -> Result<Vec<PathBuf>> {
        self.ensure_root()?;

        let mut files: Vec<PathBuf> = self
            .walk_files()
            .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
            .collect();
        files.sort();
        Ok(files)
    }
}

/// True for `.../<NN Mon>/<Mon NN>.md`
pub fn is_dated_entry(path: &Path) -> bool {
    let file_ok = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| day_file_regex().is_match(n));
    let dir_ok = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .is_some_and(|n| month_dir_regex().is_match(n));
    file_ok && dir_ok
}

/// Date of an entry laid out as `[<YYYY>/]<NN Mon>/<Mon NN>.md`.
///
/// The file stem may also read `NN Mon`. The year comes from the folder
/// above the month folder when it is a four-digit number, otherwise from
/// `fallback_year`.
pub fn entry_date_from_path(path: &Path, fallback_year: i32) -> Option<NaiveDate> {
    let month_dir = path.parent()?;
    let month_name = month_dir.file_name()?.to_str()?;
    let month: u32 = month_dir_regex().captures(month_name)?[1].parse().ok()?;

    let stem = path.file_stem()?.to_str()?;
    let day = day_from_stem(stem)?;

    let year = month_dir
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .filter(|n| n.len() == 4)
        .and_then(|n| n.parse::<i32>().ok())
        .unwrap_or(fallback_year);

    NaiveDate::from_ymd_opt(year, month, day)
}

/// `Apr 17` or `17 Apr` to 17
fn day_from_stem(stem: &str) -> Option<u32> {
    let mut parts = stem.split_whitespace();
    let (first, second) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let (month, day) = if first.chars().all(|c| c.is_ascii_digit()) {
        (second, first)
    } else {
        (first, second)
    };

    if !MONTH_ABBREVIATIONS.contains(&month.to_lowercase().as_str()) {
        return None;
    }
    if day.len() > 2 {
        return None;
    }
    day.parse().ok()
}
