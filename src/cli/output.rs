//! Output formatting utilities

use crate::application::PulseReport;
use crate::domain::RawEntry;

/// Format a pulse report for the terminal
pub fn render_summary(report: &PulseReport) -> String {
    let summary = &report.summary;

    let tone = summary
        .tone_summary
        .iter()
        .map(|(label, count)| format!("{}: {}", label, count))
        .collect::<Vec<_>>()
        .join(", ");
    let words = summary
        .most_common_words
        .iter()
        .map(|(word, _)| word.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let tags = summary
        .tags
        .iter()
        .map(|(tag, _)| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(", ");

    let mut output = format!(
        "🧠 ReMind Pulse — {} to {}\n\n\
        Tone: {}\n\
        Most used words: {}\n\
        Questions asked: {}\n\
        Tags: {}\n\
        Average entry length: {:.0} words\n\n\
        📌 Gentle prompt: What does \"{}\" mean to you this week?\n",
        report.since.format("%b %d"),
        report.until.format("%b %d"),
        tone,
        words,
        summary.questions_count,
        tags,
        summary.average_length,
        summary.prompt_word(),
    );

    if let Some(insight) = &report.insight {
        output.push_str("\n🧠 Emotional Insight:\n");
        output.push_str(insight);
        output.push('\n');
    }

    output
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[RawEntry]) -> String {
    if entries.is_empty() {
        return "No recent journal entries found.".to_string();
    }

    let mut output = format!("Found {} entries:\n", entries.len());
    for entry in entries {
        match entry.metadata.modified {
            Some(modified) => output.push_str(&format!(
                "- {} (modified: {})\n",
                entry.metadata.path.display(),
                modified.format("%Y-%m-%d %H:%M")
            )),
            None => output.push_str(&format!("- {}\n", entry.metadata.path.display())),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SummaryRecord, ToneLabel};
    use chrono::{Local, TimeZone};
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn report(insight: Option<&str>) -> PulseReport {
        let mut tone_summary = BTreeMap::new();
        tone_summary.insert(ToneLabel::Negative, 1);
        tone_summary.insert(ToneLabel::Positive, 2);

        PulseReport {
            summary: SummaryRecord {
                most_common_words: vec![("day".to_string(), 4), ("calm".to_string(), 2)],
                questions_count: 3,
                tags: vec![("garden".to_string(), 2), ("joy".to_string(), 1)],
                average_length: 21.6,
                repeated_words: vec!["day".to_string(), "calm".to_string()],
                tone_summary,
            },
            insight: insight.map(str::to_string),
            entry_count: 3,
            since: Local.with_ymd_and_hms(2025, 4, 10, 9, 0, 0).unwrap(),
            until: Local.with_ymd_and_hms(2025, 4, 17, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_render_summary() {
        let output = render_summary(&report(None));
        assert!(output.contains("ReMind Pulse — Apr 10 to Apr 17"));
        assert!(output.contains("Tone: positive: 2, negative: 1"));
        assert!(output.contains("Most used words: day, calm"));
        assert!(output.contains("Questions asked: 3"));
        assert!(output.contains("Tags: #garden, #joy"));
        assert!(output.contains("Average entry length: 22 words"));
        assert!(output.contains("What does \"day\" mean to you this week?"));
        assert!(!output.contains("Emotional Insight"));
    }

    #[test]
    fn test_render_summary_with_insight() {
        let output = render_summary(&report(Some("I noticed I slept better.")));
        assert!(output.contains("Emotional Insight"));
        assert!(output.ends_with("I noticed I slept better.\n"));
    }

    #[test]
    fn test_render_empty_summary_uses_default_prompt() {
        let mut report = report(None);
        report.summary = SummaryRecord::default();
        let output = render_summary(&report);
        assert!(output.contains("What does \"stillness\" mean"));
        assert!(output.contains("Average entry length: 0 words"));
    }

    #[test]
    fn test_format_empty_entry_list() {
        assert_eq!(format_entry_list(&[]), "No recent journal entries found.");
    }

    #[test]
    fn test_format_entry_list() {
        let modified = Local.with_ymd_and_hms(2025, 4, 17, 21, 5, 0).unwrap();
        let entries = vec![
            RawEntry::new(
                String::new(),
                PathBuf::from("04 Apr/Apr 17.md"),
                Some(modified),
            ),
            RawEntry::new(String::new(), PathBuf::from("04 Apr/Apr 16.md"), None),
        ];
        let output = format_entry_list(&entries);
        assert!(output.starts_with("Found 2 entries:"));
        assert!(output.contains("- 04 Apr/Apr 17.md (modified: 2025-04-17 21:05)"));
        assert!(output.contains("- 04 Apr/Apr 16.md\n"));
    }
}
