//! Fixed exclusion rules and extension extraction.
//!
//! There is no pattern engine here: an entry is excluded by its name alone,
//! and a file qualifies by its extension alone.

use std::path::Path;

use crate::languages::is_code_extension;

/// Prefix that marks hidden entries (`.git`, `.venv`, `.env`, ...).
pub const HIDDEN_PREFIX: char = '.';

/// Dependency and bytecode cache directories that are never descended into.
pub const EXCLUDED_NAMES: &[&str] = &["node_modules", "__pycache__"];

/// Check if a directory entry should be skipped during traversal.
///
/// Applies to files and directories alike; a skipped directory is not
/// descended into.
pub fn is_excluded_name(name: &str) -> bool {
    name.starts_with(HIDDEN_PREFIX) || EXCLUDED_NAMES.contains(&name)
}

/// Extract the lowercased, dot-prefixed extension of a file.
///
/// Returns `None` when the file has no extension or the extension is not
/// valid UTF-8.
pub fn extension_of(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

/// The extension of `path` if it is on the allow-list, else `None`.
pub fn code_extension(path: &Path) -> Option<String> {
    extension_of(path).filter(|ext| is_code_extension(ext))
}
