//! Word tokenization and stopword filtering

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// English stopwords (the usual NLTK list)
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Negative contraction suffix, kept as its own token
const NEGATION_CLITIC: &str = "n't";

/// A negative contraction (`don't`), an English clitic (`'s`, `'ll`), a run
/// of word characters, or any single other non-space character.
/// Punctuation counts as a token, which matters for entry length.
fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"\w+n't\b|'(?:s|m|d|ll|re|ve)\b|\w+|[^\w\s]").unwrap()
    })
}

/// Lower-case `text` and split it into raw tokens.
///
/// Contractions split the usual English way: `don't` gives `do` and `n't`,
/// `it's` gives `it` and `'s`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    for m in token_regex().find_iter(&lowered) {
        match m.as_str().strip_suffix(NEGATION_CLITIC) {
            Some(stem) if !stem.is_empty() => {
                tokens.push(stem.to_string());
                tokens.push(NEGATION_CLITIC.to_string());
            }
            _ => tokens.push(m.as_str().to_string()),
        }
    }
    tokens
}

/// Base language stopwords plus the user's own additions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// English stopwords extended with `custom` (matched case-insensitively)
    pub fn english_with<I, S>(custom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: HashSet<String> =
            ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect();
        words.extend(
            custom
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        StopwordSet { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Keep tokens that are purely alphabetic and not stopwords
    pub fn filter<'a>(&'a self, tokens: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
        tokens
            .iter()
            .map(String::as_str)
            .filter(|t| t.chars().all(char::is_alphabetic) && !self.contains(t))
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        StopwordSet::english_with(std::iter::empty::<&str>())
    }
}
