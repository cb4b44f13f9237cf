//! Journal entry cleaning pipeline
//!
//! Reduces a raw entry to the prose worth analysing. Stages run in a fixed
//! order, each feeding the next:
//!
//! 1. front matter stripping
//! 2. image removal
//! 3. internal link simplification
//! 4. `# Journal` section extraction
//! 5. decorative date header removal
//!
//! Every stage is total: any string goes in, a string comes out.

use regex::Regex;
use std::sync::OnceLock;

const FRONT_MATTER_DELIMITER: &str = "---";

/// `![alt](path)` with possibly empty alt text
fn image_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap())
}

/// `[[target]]` wiki-style links
fn internal_link_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap())
}

fn journal_heading_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^# Journal[ \t\r]*$").unwrap())
}

fn line_heading_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^#").unwrap())
}

/// Matches a header body once every `#` and whitespace has been squeezed out.
///
/// Accepted shapes: `[<month>]<day>[<symbols>]` and `[<month>]<symbols>`.
/// A month needs a day or a symbol after it; on its own it is a section title.
fn decorative_header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)^(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)?[0-9]{1,2}[🟢🔴x]*|(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)?[🟢🔴x]+)$",
        )
        .unwrap()
    })
}

/// Text cleaning stages for journal entries
pub struct TextCleaner;

impl TextCleaner {
    /// Run the full pipeline
    ///
    /// # Examples
    ///
    /// ```
    /// use remind::domain::TextCleaner;
    ///
    /// let raw = "---\ntitle: Entry\n---\n# Todo\nLaundry\n# Journal\nQuiet morning. [[Coffee]]\n# Links\n- x";
    /// assert_eq!(TextCleaner::clean(raw), "Quiet morning. Coffee");
    /// ```
    pub fn clean(text: &str) -> String {
        let text = Self::strip_front_matter(text);
        let text = Self::remove_images(&text);
        let text = Self::simplify_links(&text);
        let text = Self::extract_journal_section(&text);
        Self::remove_date_headers(&text)
    }

    /// Drop a leading `---` block together with its closing delimiter and the
    /// newline right after it. Unterminated front matter leaves nothing.
    pub fn strip_front_matter(text: &str) -> String {
        if !text.starts_with(FRONT_MATTER_DELIMITER) {
            return text.to_string();
        }

        let search_from = FRONT_MATTER_DELIMITER.len();
        match text[search_from..].find(FRONT_MATTER_DELIMITER) {
            Some(offset) => {
                let rest = &text[search_from + offset + FRONT_MATTER_DELIMITER.len()..];
                rest.strip_prefix("\r\n")
                    .or_else(|| rest.strip_prefix('\n'))
                    .unwrap_or(rest)
                    .to_string()
            }
            None => String::new(),
        }
    }

    /// Remove markdown image references
    pub fn remove_images(text: &str) -> String {
        image_regex().replace_all(text, "").into_owned()
    }

    /// Rewrite `[[target]]` to `target`
    pub fn simplify_links(text: &str) -> String {
        internal_link_regex().replace_all(text, "$1").into_owned()
    }

    /// Keep only the body of the `# Journal` section, up to the next line that
    /// starts with `#`. Without the heading the text passes through untouched.
    pub fn extract_journal_section(text: &str) -> String {
        let Some(heading) = journal_heading_regex().find(text) else {
            return text.to_string();
        };

        let body = &text[heading.end()..];
        let end = line_heading_regex()
            .find(body)
            .map(|m| m.start())
            .unwrap_or(body.len());

        body[..end].trim().to_string()
    }

    /// Drop decorative date headers such as `# Dec 30 🟢🔴` or `# 1 x`
    pub fn remove_date_headers(text: &str) -> String {
        text.lines()
            .filter(|line| !is_decorative_header(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// True when `line` is a heading made only of month/day/marker tokens.
///
/// Stray `#` inside the line are ignored, which also catches headers that
/// came out of an export split into fragments (`# De# c#  # 30# x#`).
fn is_decorative_header(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('#') else {
        return false;
    };

    let compact: String = rest
        .chars()
        .filter(|c| *c != '#' && !c.is_whitespace())
        .collect();

    !compact.is_empty() && decorative_header_regex().is_match(&compact)
}
