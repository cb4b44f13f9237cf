//! Domain layer - Cleaning and analysis of journal text

pub mod analysis;
pub mod cleaning;
pub mod entry;
pub mod tokens;
pub mod tone;

pub use analysis::{analyze_entries, summarize, AnalysisConfig, EntryAggregator, SummaryRecord};
pub use cleaning::TextCleaner;
pub use entry::{EntryMetadata, RawEntry};
pub use tokens::{tokenize, StopwordSet};
pub use tone::{ToneClassifier, ToneLabel};
