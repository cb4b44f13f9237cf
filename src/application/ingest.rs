//! Ingest use case
//!
//! Cleans every dated journal file and writes the result as
//! `<output>/<YYYY-MM-DD>.md`.

use crate::domain::TextCleaner;
use crate::error::Result;
use crate::infrastructure::{entry_date_from_path, FileSystemRepository, JournalRepository};
use chrono::{Datelike, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of an ingest run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Cleaned files written
    pub written: Vec<PathBuf>,

    /// Source files without a recognizable date
    pub skipped: Vec<PathBuf>,
}

/// Service writing cleaned copies of the journal
pub struct IngestService {
    repository: FileSystemRepository,
}

impl IngestService {
    pub fn new(repository: FileSystemRepository) -> Self {
        IngestService { repository }
    }

    /// Clean every markdown file under the journal into `output_dir`.
    /// Two sources resolving to the same date: the later path wins.
    /// A file that cannot be written is skipped like an unreadable source.
    pub fn execute(&self, output_dir: &Path) -> Result<IngestReport> {
        let files = self.repository.all_markdown_files()?;
        info!("Found {} markdown files to ingest", files.len());

        let mut report = IngestReport::default();
        for path in files {
            let entry = match FileSystemRepository::read_entry(&path) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable file {}: {}", path.display(), e);
                    report.skipped.push(path);
                    continue;
                }
            };

            let fallback_year = entry
                .metadata
                .modified
                .map(|m| m.year())
                .unwrap_or_else(|| Local::now().year());

            let Some(date) = entry_date_from_path(&path, fallback_year) else {
                warn!("Skipping {}: no date in path", path.display());
                report.skipped.push(path);
                continue;
            };

            let cleaned = TextCleaner::clean(&entry.content);
            if !output_dir.exists() {
                fs::create_dir_all(output_dir)?;
            }
            let out_path = output_dir.join(format!("{}.md", date.format("%Y-%m-%d")));
            if let Err(e) = fs::write(&out_path, cleaned) {
                warn!("Skipping {}: cannot write {}: {}", path.display(), out_path.display(), e);
                report.skipped.push(path);
                continue;
            }
            info!("Wrote {}", out_path.display());
            report.written.push(out_path);
        }

        Ok(report)
    }
}
