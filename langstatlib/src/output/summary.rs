//! One-line workspace summary: total lines and the leading languages.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::stats::LanguageStats;
use crate::error::LangstatError;
use crate::output::format::{format_count, format_percentage};
use crate::Result;

/// How many languages a summary lists by default.
pub const DEFAULT_TOP_LANGUAGES: usize = 5;

/// A language and its share in a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopLanguage {
    pub language: String,
    pub percentage: f64,
}

/// Summary of a [`LanguageStats`] mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Lines across all languages
    pub total_lines: u64,
    /// Leading languages by descending percentage
    pub top: Vec<TopLanguage>,
}

impl Summary {
    /// Summarize with the default number of top languages.
    pub fn from_stats(stats: &LanguageStats) -> Result<Self> {
        Self::from_stats_top(stats, DEFAULT_TOP_LANGUAGES)
    }

    /// Summarize listing at most `limit` languages.
    ///
    /// Fails with [`LangstatError::NoStatistics`] when `stats` is empty.
    pub fn from_stats_top(stats: &LanguageStats, limit: usize) -> Result<Self> {
        if stats.is_empty() {
            return Err(LangstatError::NoStatistics);
        }

        let top = stats
            .ranked()
            .into_iter()
            .take(limit)
            .map(|s| TopLanguage {
                language: s.language.clone(),
                percentage: s.percentage,
            })
            .collect();

        Ok(Self {
            total_lines: stats.total_lines(),
            top,
        })
    }

    /// `"<language>: <pct>%"` entries joined by `", "`.
    pub fn top_languages(&self) -> String {
        self.top
            .iter()
            .map(|t| format!("{}: {}", t.language, format_percentage(t.percentage, 1)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workspace Summary: {} total lines | Top languages: {}",
            format_count(self.total_lines),
            self.top_languages()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::aggregate;
    use crate::data::stats::{ExtensionIndex, FileRecord};

    fn stats(records: &[(&str, u64)]) -> LanguageStats {
        let mut index = ExtensionIndex::new();
        for (ext, lines) in records {
            index.insert(FileRecord::new(*ext, *lines, 0));
        }
        aggregate(index)
    }

    #[test]
    fn test_empty_stats_have_no_summary() {
        let result = Summary::from_stats(&LanguageStats::new());

        assert!(matches!(result, Err(LangstatError::NoStatistics)));
    }

    #[test]
    fn test_summary_line() {
        let summary = Summary::from_stats(&stats(&[(".js", 8000), (".ts", 2000)])).unwrap();

        assert_eq!(
            summary.to_string(),
            "Workspace Summary: 10,000 total lines | Top languages: JavaScript: 80.0%, TypeScript: 20.0%"
        );
    }

    #[test]
    fn test_summary_keeps_top_five() {
        let summary = Summary::from_stats(&stats(&[
            (".py", 60),
            (".rs", 50),
            (".go", 40),
            (".rb", 30),
            (".c", 20),
            (".lua", 10),
        ]))
        .unwrap();

        let names: Vec<&str> = summary.top.iter().map(|t| t.language.as_str()).collect();
        assert_eq!(names, vec!["Python", "Rust", "Go", "Ruby", "C"]);
        assert_eq!(summary.total_lines, 210);
    }

    #[test]
    fn test_summary_custom_limit() {
        let summary = Summary::from_stats_top(&stats(&[(".py", 3), (".rs", 1)]), 1).unwrap();

        assert_eq!(summary.top_languages(), "Python: 75.0%");
    }

    #[test]
    fn test_summary_with_zero_lines() {
        let summary = Summary::from_stats(&stats(&[(".rs", 0)])).unwrap();

        assert_eq!(summary.total_lines, 0);
        assert_eq!(summary.top_languages(), "Rust: 0.0%");
    }
}
