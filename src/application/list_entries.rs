//! List recent entries use case

use super::pulse::window_start;
use crate::domain::RawEntry;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{DateTime, Local};

/// Entries modified within `days_back` days of `now`
pub fn list_recent_entries(
    repository: &FileSystemRepository,
    days_back: u32,
    now: DateTime<Local>,
) -> Result<Vec<RawEntry>> {
    repository.load_recent_entries(window_start(now, days_back)?)
}
