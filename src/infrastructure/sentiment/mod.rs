//! Sentiment and weekly insight providers
//!
//! The analysis core only sees a [`ToneClassifier`]. This module supplies
//! the fallible services behind it and the composition that keeps their
//! failures away from the core.

pub mod lexicon;
pub mod ollama;

pub use lexicon::LexiconAnalyzer;
pub use ollama::OllamaClient;

use crate::domain::{ToneClassifier, ToneLabel};
use crate::error::Result;
use crate::infrastructure::config::OllamaConfig;
use tracing::warn;

/// Shown in place of the weekly insight when no service could produce one
pub const INSIGHT_UNAVAILABLE: &str = "(Insight unavailable)";

/// An external text-analysis service that may fail
pub trait TextAnalysisService {
    /// Tone of a single entry
    fn sentiment(&self, text: &str) -> Result<ToneLabel>;

    /// First-person reflection on a week of entries
    fn weekly_insight(&self, text: &str) -> Result<String>;
}

/// Tries the primary service and falls back on any error
pub struct ResilientAnalyzer {
    primary: Option<Box<dyn TextAnalysisService>>,
    fallback: Box<dyn ToneClassifier>,
}

impl ResilientAnalyzer {
    pub fn new(
        primary: Option<Box<dyn TextAnalysisService>>,
        fallback: Box<dyn ToneClassifier>,
    ) -> Self {
        ResilientAnalyzer { primary, fallback }
    }

    /// Only the offline lexicon
    pub fn offline() -> Self {
        ResilientAnalyzer::new(None, Box::new(LexiconAnalyzer::new()))
    }

    /// Ollama backed by the lexicon, unless disabled or running offline
    pub fn from_config(config: &OllamaConfig, offline: bool) -> Self {
        if offline || !config.enabled {
            return ResilientAnalyzer::offline();
        }
        ResilientAnalyzer::new(
            Some(Box::new(OllamaClient::new(config.clone()))),
            Box::new(LexiconAnalyzer::new()),
        )
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Weekly insight, or [`INSIGHT_UNAVAILABLE`] when it cannot be produced
    pub fn insight(&self, text: &str) -> String {
        let Some(primary) = &self.primary else {
            return INSIGHT_UNAVAILABLE.to_string();
        };

        match primary.weekly_insight(text) {
            Ok(insight) => insight,
            Err(e) => {
                warn!("Weekly insight failed: {}", e);
                INSIGHT_UNAVAILABLE.to_string()
            }
        }
    }
}

impl ToneClassifier for ResilientAnalyzer {
    fn classify(&self, text: &str) -> ToneLabel {
        if let Some(primary) = &self.primary {
            match primary.sentiment(text) {
                Ok(label) => return label,
                Err(e) => warn!("Sentiment service failed, using lexicon fallback: {}", e),
            }
        }
        self.fallback.classify(text)
    }
}
