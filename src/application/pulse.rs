//! Weekly pulse use case
//!
//! Loads the week's entries, cleans and classifies them, aggregates the
//! statistics and asks for a reflection on the week as a whole.

use crate::domain::{analyze_entries, AnalysisConfig, SummaryRecord};
use crate::error::{RemindError, Result};
use crate::infrastructure::{FileSystemRepository, JournalRepository, ResilientAnalyzer};
use chrono::{DateTime, Duration, Local};
use serde::Serialize;
use tracing::info;

/// Options for one pulse run
#[derive(Debug, Clone)]
pub struct PulseOptions {
    /// How far back to look
    pub days_back: u32,

    /// Ask the text-analysis service for a weekly insight
    pub include_insight: bool,

    /// End of the window (normally now)
    pub until: DateTime<Local>,
}

impl PulseOptions {
    pub fn new(days_back: u32) -> Self {
        PulseOptions {
            days_back,
            include_insight: true,
            until: Local::now(),
        }
    }

    /// Start of the window
    ///
    /// # Errors
    ///
    /// Returns a config error when `days_back` reaches past the earliest
    /// representable date.
    pub fn since(&self) -> Result<DateTime<Local>> {
        window_start(self.until, self.days_back)
    }
}

/// Start of a window of `days_back` days ending at `until`
pub fn window_start(until: DateTime<Local>, days_back: u32) -> Result<DateTime<Local>> {
    Duration::try_days(i64::from(days_back))
        .and_then(|span| until.checked_sub_signed(span))
        .ok_or_else(|| {
            RemindError::Config(format!(
                "Invalid days_back: {} reaches past the earliest supported date",
                days_back
            ))
        })
}

/// Result of a pulse run, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct PulseReport {
    pub summary: SummaryRecord,
    pub insight: Option<String>,
    pub entry_count: usize,
    pub since: DateTime<Local>,
    pub until: DateTime<Local>,
}

/// Service producing the weekly pulse
pub struct PulseService {
    repository: FileSystemRepository,
    analysis: AnalysisConfig,
    analyzer: ResilientAnalyzer,
}

impl PulseService {
    pub fn new(
        repository: FileSystemRepository,
        analysis: AnalysisConfig,
        analyzer: ResilientAnalyzer,
    ) -> Self {
        PulseService {
            repository,
            analysis,
            analyzer,
        }
    }

    /// Execute the pulse
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The journal directory does not exist
    /// - No entries were modified inside the window
    pub fn execute(&self, options: &PulseOptions) -> Result<PulseReport> {
        let since = options.since()?;
        info!(
            "Scanning {} for the past {} days",
            self.repository.root().display(),
            options.days_back
        );

        let entries = self.repository.load_recent_entries(since)?;
        if entries.is_empty() {
            return Err(RemindError::NoEntries(self.repository.root().to_path_buf()));
        }

        info!("Found {} entries. Analyzing...", entries.len());
        let summary = analyze_entries(&entries, &self.analysis, &self.analyzer);

        let insight = if options.include_insight {
            let week = entries
                .iter()
                .map(|e| e.content.as_str())
                .collect::<Vec<_>>()
                .join("\n\n");
            Some(self.analyzer.insight(&week))
        } else {
            None
        };

        Ok(PulseReport {
            summary,
            insight,
            entry_count: entries.len(),
            since,
            until: options.until,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToneLabel;
    use crate::infrastructure::INSIGHT_UNAVAILABLE;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_entry(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn service(root: &Path) -> PulseService {
        PulseService::new(
            FileSystemRepository::new(root.to_path_buf()),
            AnalysisConfig::default(),
            ResilientAnalyzer::offline(),
        )
    }

    #[test]
    fn test_pulse_over_journal_sections() {
        let temp = TempDir::new().unwrap();
        write_entry(
            temp.path(),
            "2025/04 Apr/Apr 17.md",
            "---\nmood: ok\n---\n# What I want today\nRun\n# Journal\nA wonderful, peaceful morning. #garden\nWhy is stillness so rare?\n# New Resources\n- link",
        );
        write_entry(
            temp.path(),
            "2025/04 Apr/Apr 18.md",
            "# Apr 18 🟢\n# Journal\nStillness again in the #garden. I hate traffic though.",
        );

        let mut options = PulseOptions::new(7);
        options.include_insight = false;
        let report = service(temp.path()).execute(&options).unwrap();

        assert_eq!(report.entry_count, 2);
        assert_eq!(report.summary.questions_count, 1);
        assert_eq!(report.summary.tags, vec![("garden".to_string(), 2)]);
        assert!(report.summary.repeated_words.contains(&"stillness".to_string()));
        assert_eq!(report.summary.tone_summary.get(&ToneLabel::Positive), Some(&1));
        assert!(report.insight.is_none());
    }

    #[test]
    fn test_pulse_offline_insight_placeholder() {
        let temp = TempDir::new().unwrap();
        write_entry(temp.path(), "04 Apr/Apr 17.md", "Quiet day.");

        let report = service(temp.path())
            .execute(&PulseOptions::new(7))
            .unwrap();
        assert_eq!(report.insight.as_deref(), Some(INSIGHT_UNAVAILABLE));
    }

    #[test]
    fn test_pulse_no_entries() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("04 Apr")).unwrap();

        match service(temp.path()).execute(&PulseOptions::new(7)).unwrap_err() {
            RemindError::NoEntries(_) => {}
            other => panic!("Expected NoEntries, got {other:?}"),
        }
    }

    #[test]
    fn test_window_bounds() {
        let options = PulseOptions::new(7);
        assert_eq!(options.until - options.since().unwrap(), Duration::days(7));
    }

    #[test]
    fn test_window_too_large() {
        let options = PulseOptions::new(200_000_000);
        match options.since().unwrap_err() {
            RemindError::Config(msg) => assert!(msg.contains("days_back")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_pulse_rejects_huge_window() {
        let temp = TempDir::new().unwrap();
        write_entry(temp.path(), "04 Apr/Apr 17.md", "Quiet day.");

        let result = service(temp.path()).execute(&PulseOptions::new(u32::MAX));
        assert!(matches!(result, Err(RemindError::Config(_))));
    }
}
