//! Table-ready data structures for language statistics.
//!
//! `LanguageTable` only formats: ranking comes from
//! [`LanguageStats::ranked`], numbers from [`crate::output::format`].

use serde::{Deserialize, Serialize};

use crate::data::stats::{LanguageStat, LanguageStats};
use crate::output::format::{format_bytes, format_count, format_percentage};

/// Shown in place of a table when nothing has been analyzed.
pub const NO_STATISTICS_MESSAGE: &str =
    "No statistics available. Run an analysis to generate stats.";

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Language label or footer label
    pub label: String,
    /// Files, lines, size and share, ready for display
    pub values: Vec<String>,
    /// Expanded per-language lines (`Files: 3`, `Size: 1.5 KB`, ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

/// Table-ready language statistics, ranked by share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTable {
    /// Column headers: [Language, Files, Lines, Size, Share]
    pub headers: Vec<String>,
    /// One row per language, highest share first
    pub rows: Vec<TableRow>,
    /// Totals row
    pub footer: TableRow,
    /// Set instead of rows when there is nothing to show
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LanguageTable {
    /// Build a table from statistics.
    pub fn from_stats(stats: &LanguageStats) -> Self {
        let headers = ["Language", "Files", "Lines", "Size", "Share"]
            .iter()
            .map(|h| h.to_string())
            .collect();

        let rows = stats
            .ranked()
            .into_iter()
            .map(|s| TableRow {
                label: s.language.clone(),
                values: row_values(s.file_count, s.total_lines, s.total_bytes, s.percentage),
                details: Vec::new(),
            })
            .collect();

        let share = if stats.total_lines() > 0 { 100.0 } else { 0.0 };
        let footer = TableRow {
            label: format!("Total ({} files)", stats.total_files()),
            values: row_values(
                stats.total_files(),
                stats.total_lines(),
                stats.total_bytes(),
                share,
            ),
            details: Vec::new(),
        };

        let message = stats
            .is_empty()
            .then(|| NO_STATISTICS_MESSAGE.to_string());

        LanguageTable {
            headers,
            rows,
            footer,
            message,
        }
    }

    /// Attach per-language detail lines to every row.
    pub fn with_details(mut self, stats: &LanguageStats) -> Self {
        for row in &mut self.rows {
            if let Some(stat) = stats.get(&row.label) {
                row.details = language_details(stat);
            }
        }
        self
    }
}

fn row_values(files: u64, lines: u64, bytes: u64, percentage: f64) -> Vec<String> {
    vec![
        files.to_string(),
        format_count(lines),
        format_bytes(bytes),
        format_percentage(percentage, 1),
    ]
}

/// Expanded view of one language.
pub fn language_details(stat: &LanguageStat) -> Vec<String> {
    vec![
        format!("Files: {}", stat.file_count),
        format!("Lines: {}", format_count(stat.total_lines)),
        format!("Size: {}", format_bytes(stat.total_bytes)),
        format!("Percentage: {}", format_percentage(stat.percentage, 2)),
    ]
}
