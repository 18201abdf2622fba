//! Core data structures for language statistics

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One qualifying file found by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Lowercased extension including the leading dot (e.g. `.py`)
    pub extension: String,
    /// Number of `\n`-delimited segments in the file's text
    pub line_count: u64,
    /// On-disk size reported by the filesystem
    pub byte_size: u64,
}

impl FileRecord {
    pub fn new(extension: impl Into<String>, line_count: u64, byte_size: u64) -> Self {
        Self {
            extension: extension.into(),
            line_count,
            byte_size,
        }
    }
}

/// Scanner output: file records grouped by extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionIndex {
    records: BTreeMap<String, Vec<FileRecord>>,
}

impl ExtensionIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record under its own extension.
    pub fn insert(&mut self, record: FileRecord) {
        self.records
            .entry(record.extension.clone())
            .or_default()
            .push(record);
    }

    /// Records for a single extension.
    pub fn get(&self, extension: &str) -> Option<&[FileRecord]> {
        self.records.get(extension).map(Vec::as_slice)
    }

    /// Iterate over `(extension, records)` pairs in extension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FileRecord])> {
        self.records
            .iter()
            .map(|(ext, records)| (ext.as_str(), records.as_slice()))
    }

    /// Number of distinct extensions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of records across all extensions.
    pub fn file_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    /// Sum of line counts across all records.
    pub fn total_lines(&self) -> u64 {
        self.records
            .values()
            .flatten()
            .map(|r| r.line_count)
            .sum()
    }
}

impl IntoIterator for ExtensionIndex {
    type Item = (String, Vec<FileRecord>);
    type IntoIter = btree_map::IntoIter<String, Vec<FileRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Totals for one language label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageStat {
    /// Language label (e.g. `Python`, `C/C++`, `ZIG`)
    pub language: String,
    /// Number of files attributed to this language
    pub file_count: u64,
    /// Sum of line counts
    pub total_lines: u64,
    /// Sum of on-disk sizes
    pub total_bytes: u64,
    /// Share of all counted lines, in `[0, 100]`
    pub percentage: f64,
}

impl LanguageStat {
    /// Create an empty stat for a language.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    /// Fold one file into the totals. Does not touch `percentage`.
    pub fn add_record(&mut self, record: &FileRecord) {
        self.file_count += 1;
        self.total_lines += record.line_count;
        self.total_bytes += record.byte_size;
    }
}

/// Language label to statistics, the result of one analysis.
///
/// Keys are kept in label order so two analyses of the same tree serialize
/// identically. Use [`LanguageStats::ranked`] for a view by share.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageStats {
    languages: BTreeMap<String, LanguageStat>,
}

impl LanguageStats {
    /// Create a new empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_map(languages: BTreeMap<String, LanguageStat>) -> Self {
        Self { languages }
    }

    /// Statistics for a single language.
    pub fn get(&self, language: &str) -> Option<&LanguageStat> {
        self.languages.get(language)
    }

    /// Iterate over all languages in label order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageStat> {
        self.languages.values()
    }

    /// Language labels in label order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Number of distinct languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Files across all languages.
    pub fn total_files(&self) -> u64 {
        self.iter().map(|s| s.file_count).sum()
    }

    /// Lines across all languages.
    pub fn total_lines(&self) -> u64 {
        self.iter().map(|s| s.total_lines).sum()
    }

    /// Bytes across all languages.
    pub fn total_bytes(&self) -> u64 {
        self.iter().map(|s| s.total_bytes).sum()
    }

    /// Languages sorted by descending percentage, ties by label.
    pub fn ranked(&self) -> Vec<&LanguageStat> {
        let mut ranked: Vec<&LanguageStat> = self.iter().collect();
        ranked.sort_by(|a, b| {
            b.percentage
                .total_cmp(&a.percentage)
                .then_with(|| a.language.cmp(&b.language))
        });
        ranked
    }
}

impl<'a> IntoIterator for &'a LanguageStats {
    type Item = &'a LanguageStat;
    type IntoIter = btree_map::Values<'a, String, LanguageStat>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.values()
    }
}
