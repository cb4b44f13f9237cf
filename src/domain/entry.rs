//! Raw journal entry as handed to the cleaning pipeline

use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Where an entry came from. Carried along but never interpreted by the
/// cleaning or aggregation passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub path: PathBuf,
    pub modified: Option<DateTime<Local>>,
}

/// A journal entry exactly as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub content: String,
    pub metadata: EntryMetadata,
}

impl RawEntry {
    pub fn new(content: String, path: PathBuf, modified: Option<DateTime<Local>>) -> Self {
        RawEntry {
            content,
            metadata: EntryMetadata { path, modified },
        }
    }

    /// Build an entry with no meaningful source, mostly for tests and piping.
    pub fn from_text(content: impl Into<String>) -> Self {
        RawEntry::new(content.into(), PathBuf::new(), None)
    }
}
