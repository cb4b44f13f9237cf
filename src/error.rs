//! Error types for remind

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the remind application
#[derive(Debug, Error)]
pub enum RemindError {
    #[error("Journal directory not found: {0}")]
    JournalDirNotFound(PathBuf),

    #[error("No recent journal entries found in {0}")]
    NoEntries(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Text analysis service error: {0}")]
    Sentiment(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl From<reqwest::Error> for RemindError {
    fn from(err: reqwest::Error) -> Self {
        RemindError::Sentiment(err.to_string())
    }
}

impl RemindError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RemindError::JournalDirNotFound(_) => 2,
            RemindError::NoEntries(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RemindError::JournalDirNotFound(path) => {
                format!(
                    "Journal directory not found: {}\n\n\
                    Suggestions:\n\
                    • Pass the directory explicitly: remind pulse --journal-dir <DIR>\n\
                    • Set journal_dir in remind.toml (create one with 'remind config --init')\n\
                    • Set REMIND_JOURNAL_DIR environment variable to your journal path",
                    path.display()
                )
            }
            RemindError::NoEntries(path) => {
                format!(
                    "No recent journal entries found in {}\n\n\
                    Suggestions:\n\
                    • Entries are expected at '<NN Mon>/<Mon NN>.md' (e.g., '04 Apr/Apr 17.md')\n\
                    • Widen the window: remind pulse --days 30",
                    path.display()
                )
            }
            RemindError::Config(msg) => {
                if msg.contains("days_back") {
                    format!(
                        "{}\n\n\
                        Expected a whole number of days\n\
                        Example: REMIND_DAYS_BACK=14",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RemindError
pub type Result<T> = std::result::Result<T, RemindError>;
