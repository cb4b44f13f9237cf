//! Infrastructure layer - External I/O and services

pub mod config;
pub mod repository;
pub mod sentiment;

pub use config::{Config, OllamaConfig, LOCAL_CONFIG_FILE};
pub use repository::{entry_date_from_path, FileSystemRepository, JournalRepository};
pub use sentiment::{
    LexiconAnalyzer, OllamaClient, ResilientAnalyzer, TextAnalysisService, INSIGHT_UNAVAILABLE,
};
