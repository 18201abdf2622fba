//! Data collection: count files and aggregate them by language.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Counting**: line and byte counts per file (`count_file`)
//! - **Statistics**: `FileRecord`, `ExtensionIndex`, `LanguageStat`, `LanguageStats`
//! - **Aggregation**: extension records to per-language totals (`aggregate`)

pub mod aggregate;
pub mod counter;
pub mod stats;

pub use aggregate::aggregate;
pub use counter::{count_file, count_lines, read_line_count};
pub use stats::{ExtensionIndex, FileRecord, LanguageStat, LanguageStats};
