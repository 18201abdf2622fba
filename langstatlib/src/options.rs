//! Input options for scanning.

use serde::{Deserialize, Serialize};

/// Options that control directory traversal.
///
/// The exclusion list and extension allow-list are fixed; only link
/// handling is configurable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Follow symbolic links to files and directories.
    ///
    /// Off by default so every scan terminates. When on, link cycles are
    /// detected and the looping subtree is skipped.
    pub follow_links: bool,
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set symlink following.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}
