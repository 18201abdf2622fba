//! High-level analysis API.
//!
//! [`analyze`] runs one scan and aggregation. [`Analyzer`] additionally keeps
//! the last result so it can be queried or summarized between analyses.

use std::path::Path;

use tracing::{info, warn};

use crate::data::aggregate::aggregate;
use crate::data::stats::LanguageStats;
use crate::error::LangstatError;
use crate::options::ScanOptions;
use crate::output::summary::Summary;
use crate::source::scanner::scan;
use crate::Result;

/// Scan `roots` and aggregate the files found into per-language statistics.
///
/// Fails only with [`LangstatError::NoRoots`] when `roots` is empty.
///
/// # Example
///
/// ```rust,ignore
/// use langstatlib::{analyze, ScanOptions};
///
/// let stats = analyze(&["."], &ScanOptions::new())?;
/// for lang in stats.ranked() {
///     println!("{}: {:.1}%", lang.language, lang.percentage);
/// }
/// ```
pub fn analyze<P: AsRef<Path>>(roots: &[P], options: &ScanOptions) -> Result<LanguageStats> {
    if roots.is_empty() {
        return Err(LangstatError::NoRoots);
    }

    let stats = aggregate(scan(roots, options));
    info!(
        languages = stats.len(),
        files = stats.total_files(),
        lines = stats.total_lines(),
        "analysis complete"
    );
    Ok(stats)
}

/// Holds the statistics of the most recent analysis.
///
/// Each successful [`Analyzer::analyze`] replaces the previous result as a
/// whole. A failed one leaves it as it was. Calls must be serialized by the
/// owner; there is no internal locking.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: ScanOptions,
    stats: LanguageStats,
}

impl Analyzer {
    /// Create an analyzer with default options and no statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with the given scan options.
    pub fn with_options(options: ScanOptions) -> Self {
        Self {
            options,
            stats: LanguageStats::new(),
        }
    }

    /// Scan options used by [`Analyzer::analyze`].
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// The last computed statistics, empty if nothing was analyzed yet.
    pub fn stats(&self) -> &LanguageStats {
        &self.stats
    }

    /// Re-analyze `roots`, replacing the held statistics.
    pub fn analyze<P: AsRef<Path>>(&mut self, roots: &[P]) -> Result<&LanguageStats> {
        match analyze(roots, &self.options) {
            Ok(stats) => {
                self.stats = stats;
                Ok(&self.stats)
            }
            Err(e) => {
                warn!(error = %e, "analysis skipped, keeping previous statistics");
                Err(e)
            }
        }
    }

    /// Summarize the held statistics.
    pub fn summary(&self) -> Result<Summary> {
        Summary::from_stats(&self.stats)
    }

    /// Take the held statistics out of the analyzer.
    pub fn into_stats(self) -> LanguageStats {
        self.stats
    }
}
