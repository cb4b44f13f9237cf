//! Clean a single note

use crate::domain::TextCleaner;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use std::path::Path;

/// Read `path` and return its cleaned content
pub fn clean_note(path: &Path) -> Result<String> {
    let entry = FileSystemRepository::read_entry(path)?;
    Ok(TextCleaner::clean(&entry.content))
}
