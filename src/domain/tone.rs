//! Emotional tone labels and the classification seam

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment category assigned to one entry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ToneLabel {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl ToneLabel {
    /// All labels in display order
    pub const ALL: [ToneLabel; 3] = [ToneLabel::Positive, ToneLabel::Neutral, ToneLabel::Negative];

    /// Interpret free text from a classifier. Anything that is not exactly one
    /// of the three labels (after trimming and lower-casing) is neutral.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "positive" => ToneLabel::Positive,
            "negative" => ToneLabel::Negative,
            _ => ToneLabel::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToneLabel::Positive => "positive",
            ToneLabel::Neutral => "neutral",
            ToneLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assigns a tone to a cleaned entry.
///
/// Implementations must not fail: anything that goes wrong is reported as
/// [`ToneLabel::Neutral`] or handled by a fallback before returning.
pub trait ToneClassifier {
    fn classify(&self, text: &str) -> ToneLabel;
}

impl<F> ToneClassifier for F
where
    F: Fn(&str) -> ToneLabel,
{
    fn classify(&self, text: &str) -> ToneLabel {
        self(text)
    }
}
