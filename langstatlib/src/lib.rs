//! # langstatlib
//!
//! Per-language file, line and byte statistics for source trees.
//!
//! ## Overview
//!
//! An analysis runs in two stages:
//!
//! - **Scan**: walk root directories depth-first, skip hidden entries and
//!   dependency caches (`node_modules`, `__pycache__`), and record the
//!   extension, line count and size of every file with a known code
//!   extension.
//! - **Aggregate**: group those records by language label, sum files, lines
//!   and bytes, and compute each language's share of all lines.
//!
//! Failures inside a scan never abort it. An unreadable directory is
//! skipped, and an unreadable file counts zero lines but keeps its size.
//!
//! ## Example
//!
//! ```rust
//! use langstatlib::{analyze, ScanOptions, Summary};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.py"), "import os\nprint(os.name)").unwrap();
//! fs::write(dir.path().join("b.js"), "let x = 1;\nlet y = 2;").unwrap();
//! fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
//!
//! let stats = analyze(&[dir.path()], &ScanOptions::new()).unwrap();
//! assert_eq!(stats.get("Python").unwrap().total_lines, 2);
//! assert_eq!(stats.get("JavaScript").unwrap().percentage, 50.0);
//!
//! let summary = Summary::from_stats(&stats).unwrap();
//! assert_eq!(summary.top_languages(), "JavaScript: 50.0%, Python: 50.0%");
//! ```

pub mod analysis;
pub mod data;
pub mod error;
pub mod languages;
pub mod options;
pub mod output;
pub mod source;

pub use analysis::{analyze, Analyzer};
pub use data::{
    aggregate, count_file, count_lines, ExtensionIndex, FileRecord, LanguageStat, LanguageStats,
};
pub use error::LangstatError;
pub use languages::{is_code_extension, language_for_extension};
pub use options::ScanOptions;
pub use output::{LanguageTable, Summary, TableRow, DEFAULT_TOP_LANGUAGES};
pub use source::scan;

/// Result type for langstatlib operations
pub type Result<T> = std::result::Result<T, LangstatError>;
