//! Offline sentiment from a small word lexicon

use super::TextAnalysisService;
use crate::domain::{tokenize, ToneClassifier, ToneLabel};
use crate::error::{RemindError, Result};

/// Phrases that settle the matter regardless of anything else in the entry
const STRONG_NEGATIVE_PHRASES: &[&str] = &["terrible day", "worst day", "hate", "awful"];

const POSITIVE_THRESHOLD: f64 = 0.2;
const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Word polarities in [-1, 1]
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 0.6),
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("anxious", -0.4),
    ("awesome", 1.0),
    ("bad", -0.7),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("bored", -0.5),
    ("calm", 0.3),
    ("cheerful", 0.6),
    ("content", 0.4),
    ("depressed", -0.6),
    ("disappointed", -0.6),
    ("excited", 0.4),
    ("exhausted", -0.4),
    ("fantastic", 0.4),
    ("fine", 0.4),
    ("frustrated", -0.4),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("grateful", 0.6),
    ("great", 0.8),
    ("happy", 0.8),
    ("hard", -0.3),
    ("hopeful", 0.5),
    ("horrible", -1.0),
    ("hurt", -0.5),
    ("joy", 0.8),
    ("lonely", -0.5),
    ("love", 0.5),
    ("lovely", 0.5),
    ("miserable", -1.0),
    ("nice", 0.6),
    ("overwhelmed", -0.5),
    ("peaceful", 0.5),
    ("proud", 0.8),
    ("relaxed", 0.4),
    ("sad", -0.5),
    ("scared", -0.5),
    ("stressed", -0.5),
    ("terrible", -1.0),
    ("tired", -0.4),
    ("upset", -0.5),
    ("well", 0.2),
    ("wonderful", 1.0),
    ("worried", -0.4),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Words that flip and soften the next sentiment-bearing word
const NEGATORS: &[&str] = &["not", "never", "no", "n't"];

/// Words that strengthen the next sentiment-bearing word
const INTENSIFIERS: &[(&str, f64)] = &[
    ("really", 1.3),
    ("very", 1.3),
    ("so", 1.2),
    ("extremely", 1.5),
    ("super", 1.3),
];

/// Polarity scoring over a fixed lexicon. Needs no network.
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        LexiconAnalyzer
    }

    /// Mean polarity of the sentiment-bearing words, 0.0 when there are none
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut scores = Vec::new();
        let mut modifier = 1.0;

        for token in tokens.iter().map(String::as_str) {
            if NEGATORS.contains(&token) {
                modifier *= -0.5;
                continue;
            }
            if let Some((_, boost)) = INTENSIFIERS.iter().find(|(w, _)| *w == token) {
                modifier *= boost;
                continue;
            }
            if let Some((_, score)) = LEXICON.iter().find(|(w, _)| *w == token) {
                scores.push((score * modifier).clamp(-1.0, 1.0));
                modifier = 1.0;
            } else if !token.chars().any(char::is_alphanumeric) {
                // punctuation ends the reach of a pending negation
                modifier = 1.0;
            }
        }

        if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        }
    }

    pub fn label(&self, text: &str) -> ToneLabel {
        let lowered = text.to_lowercase();
        if STRONG_NEGATIVE_PHRASES.iter().any(|p| lowered.contains(p)) {
            return ToneLabel::Negative;
        }

        let polarity = self.polarity(text);
        if polarity > POSITIVE_THRESHOLD {
            ToneLabel::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            ToneLabel::Negative
        } else {
            ToneLabel::Neutral
        }
    }
}

impl ToneClassifier for LexiconAnalyzer {
    fn classify(&self, text: &str) -> ToneLabel {
        self.label(text)
    }
}

impl TextAnalysisService for LexiconAnalyzer {
    fn sentiment(&self, text: &str) -> Result<ToneLabel> {
        Ok(self.label(text))
    }

    fn weekly_insight(&self, _text: &str) -> Result<String> {
        Err(RemindError::Sentiment(
            "the offline lexicon cannot write insights".to_string(),
        ))
    }
}
