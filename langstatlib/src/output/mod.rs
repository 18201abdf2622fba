//! Output formatting: present statistics for display.
//!
//! - **Summary**: total lines and the top languages on one line
//! - **LanguageTable**: ranked rows with formatted values
//! - **format**: byte, count and percentage formatting

pub mod format;
pub mod summary;
pub mod table;

pub use format::{format_bytes, format_count, format_percentage};
pub use summary::{Summary, TopLanguage, DEFAULT_TOP_LANGUAGES};
pub use table::{language_details, LanguageTable, TableRow, NO_STATISTICS_MESSAGE};
