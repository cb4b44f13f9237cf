//! Aggregation of cleaned entries into a weekly summary

use super::cleaning::TextCleaner;
use super::entry::RawEntry;
use super::tokens::{tokenize, StopwordSet};
use super::tone::{ToneClassifier, ToneLabel};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Number of words reported in [`SummaryRecord::most_common_words`]
pub const MOST_COMMON_LIMIT: usize = 5;

/// Prompt word used when nothing repeats across the batch
pub const DEFAULT_PROMPT_WORD: &str = "stillness";

fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#(\w+)").unwrap())
}

/// Everything the analysis needs from configuration
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub stopwords: StopwordSet,
}

impl AnalysisConfig {
    pub fn new(stopwords: StopwordSet) -> Self {
        AnalysisConfig { stopwords }
    }

    /// English stopwords plus the given custom ones
    pub fn with_custom_stopwords<I, S>(custom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        AnalysisConfig::new(StopwordSet::english_with(custom))
    }
}

/// Statistics over one batch of entries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Highest-count words, at most [`MOST_COMMON_LIMIT`]
    pub most_common_words: Vec<(String, usize)>,
    /// Number of `?` characters
    pub questions_count: usize,
    /// Every tag, most used first
    pub tags: Vec<(String, usize)>,
    /// Mean raw token count per entry
    pub average_length: f64,
    /// Words seen more than once, in first-seen order
    pub repeated_words: Vec<String>,
    /// Only labels that occurred
    pub tone_summary: BTreeMap<ToneLabel, usize>,
}

impl SummaryRecord {
    /// Word for the reflection prompt: the first repeated word, if any
    pub fn prompt_word(&self) -> &str {
        self.repeated_words
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_PROMPT_WORD)
    }
}

/// Counter that remembers the order keys were first seen in
#[derive(Debug, Default)]
struct OrderedCounter {
    index: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl OrderedCounter {
    fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.counts.len());
                self.counts.push((key.to_string(), 1));
            }
        }
    }

    /// Descending by count; the sort is stable so ties keep first-seen order
    fn most_common(&self, limit: Option<usize>) -> Vec<(String, usize)> {
        let mut sorted = self.counts.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(n) = limit {
            sorted.truncate(n);
        }
        sorted
    }

    fn repeated(&self) -> Vec<String> {
        self.counts
            .iter()
            .filter(|(_, count)| *count > 1)
            .map(|(word, _)| word.clone())
            .collect()
    }
}

/// Folds cleaned entries into a [`SummaryRecord`]
#[derive(Debug)]
pub struct EntryAggregator<'a> {
    stopwords: &'a StopwordSet,
    words: OrderedCounter,
    tags: OrderedCounter,
    questions: usize,
    total_tokens: usize,
    entries: usize,
    tones: BTreeMap<ToneLabel, usize>,
}

impl<'a> EntryAggregator<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        EntryAggregator {
            stopwords: &config.stopwords,
            words: OrderedCounter::default(),
            tags: OrderedCounter::default(),
            questions: 0,
            total_tokens: 0,
            entries: 0,
            tones: BTreeMap::new(),
        }
    }

    /// Account for one cleaned entry and its tone
    pub fn add(&mut self, cleaned: &str, tone: ToneLabel) {
        let tokens = tokenize(cleaned);
        for word in self.stopwords.filter(&tokens) {
            self.words.add(word);
        }

        self.questions += cleaned.matches('?').count();

        for cap in tag_regex().captures_iter(cleaned) {
            self.tags.add(&cap[1]);
        }

        self.total_tokens += tokens.len();
        self.entries += 1;
        *self.tones.entry(tone).or_insert(0) += 1;
    }

    pub fn entry_count(&self) -> usize {
        self.entries
    }

    pub fn finish(self) -> SummaryRecord {
        let average_length = if self.entries == 0 {
            0.0
        } else {
            self.total_tokens as f64 / self.entries as f64
        };

        SummaryRecord {
            most_common_words: self.words.most_common(Some(MOST_COMMON_LIMIT)),
            questions_count: self.questions,
            tags: self.tags.most_common(None),
            average_length,
            repeated_words: self.words.repeated(),
            tone_summary: self.tones,
        }
    }
}

/// Summarize already cleaned entries paired with their tones
pub fn summarize<'t, I>(entries: I, config: &AnalysisConfig) -> SummaryRecord
where
    I: IntoIterator<Item = (&'t str, ToneLabel)>,
{
    let mut aggregator = EntryAggregator::new(config);
    for (cleaned, tone) in entries {
        aggregator.add(cleaned, tone);
    }
    aggregator.finish()
}

/// Clean, classify and aggregate a batch of raw entries
pub fn analyze_entries(
    entries: &[RawEntry],
    config: &AnalysisConfig,
    classifier: &dyn ToneClassifier,
) -> SummaryRecord {
    let mut aggregator = EntryAggregator::new(config);
    for entry in entries {
        let cleaned = TextCleaner::clean(&entry.content);
        let tone = classifier.classify(&cleaned);
        aggregator.add(&cleaned, tone);
    }
    aggregator.finish()
}
