//! Application layer - Use cases and orchestration

pub mod clean_note;
pub mod ingest;
pub mod list_entries;
pub mod manage_config;
pub mod pulse;

pub use clean_note::clean_note;
pub use ingest::{IngestReport, IngestService};
pub use list_entries::list_recent_entries;
pub use manage_config::ConfigService;
pub use pulse::{window_start, PulseOptions, PulseReport, PulseService};
