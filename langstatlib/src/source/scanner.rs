//! Directory traversal that turns root directories into file records.

use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::data::counter::record_for;
use crate::data::stats::ExtensionIndex;
use crate::options::ScanOptions;
use crate::source::filter::{code_extension, is_excluded_name};

/// Scan every root and collect qualifying files by extension.
///
/// Roots are walked depth-first in the order given and their records are
/// merged into one index; a directory listed twice is counted twice.
/// Nothing here fails: roots that are missing or not directories, and
/// subdirectories that cannot be listed, are logged and skipped.
pub fn scan<P: AsRef<Path>>(roots: &[P], options: &ScanOptions) -> ExtensionIndex {
    let mut index = ExtensionIndex::new();
    for root in roots {
        scan_root(root.as_ref(), options, &mut index);
    }
    info!(
        roots = roots.len(),
        extensions = index.len(),
        files = index.file_count(),
        "scan complete"
    );
    index
}

/// Walk a single root into `index`.
fn scan_root(root: &Path, options: &ScanOptions, index: &mut ExtensionIndex) {
    if !root.is_dir() {
        warn!(root = %root.display(), "skipping root that is not a readable directory");
        return;
    }

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name()
        .into_iter();

    for entry in walker.filter_entry(keep_entry) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                // walkdir moves on to the next sibling after this
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(extension) = code_extension(path) else {
            continue;
        };

        let byte_size = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping file without metadata");
                continue;
            }
        };

        let record = record_for(path, extension, byte_size);
        debug!(
            path = %path.display(),
            lines = record.line_count,
            bytes = record.byte_size,
            "recorded file"
        );
        index.insert(record);
    }
}

/// Traversal predicate; the root itself is always walked.
fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    if is_excluded_name(&name) {
        debug!(path = %entry.path().display(), "excluded");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn create_test_tree(root: &Path) {
        write(root, "src/main.py", "import os\nprint(os.name)");
        write(root, "src/util/helpers.py", "def f():\n    pass");
        write(root, "web/app.JS", "let a = 1;");
        write(root, "notes.txt", "not code");
        write(root, "Makefile", "all:\n\techo hi");
        write(root, "node_modules/pkg/index.js", "module.exports = {};");
        write(root, "lib/__pycache__/mod.py", "cached");
        write(root, ".git/hooks/pre-commit.sh", "#!/bin/sh");
        write(root, "src/.secret.py", "hidden");
    }

    #[test]
    fn test_scan_collects_allowed_extensions() {
        let temp = tempdir().unwrap();
        create_test_tree(temp.path());

        let index = scan(&[temp.path()], &ScanOptions::new());

        assert_eq!(index.get(".py").map(<[_]>::len), Some(2));
        assert_eq!(index.get(".js").map(<[_]>::len), Some(1));
        assert!(index.get(".txt").is_none());
        assert!(index.get(".sh").is_none());
        assert_eq!(index.file_count(), 3);
    }

    #[test]
    fn test_scan_records_lines_and_bytes() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a.rs", "fn main() {}\n");

        let index = scan(&[temp.path()], &ScanOptions::new());
        let records = index.get(".rs").unwrap();

        assert_eq!(records[0].line_count, 2);
        assert_eq!(records[0].byte_size, 13);
    }

    #[test]
    fn test_scan_skips_excluded_directories_at_any_depth() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a/b/c/node_modules/x.js", "1");
        write(temp.path(), "a/b/__pycache__/y.py", "1");
        write(temp.path(), "a/.cache/z.ts", "1");
        write(temp.path(), "a/b/c/keep.js", "1");

        let index = scan(&[temp.path()], &ScanOptions::new());

        assert_eq!(index.file_count(), 1);
        assert_eq!(index.get(".js").map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_scan_multiple_roots_merge() {
        let one = tempdir().unwrap();
        let two = tempdir().unwrap();
        write(one.path(), "a.go", "package a");
        write(two.path(), "b.go", "package b");

        let roots: Vec<PathBuf> = vec![one.path().into(), two.path().into()];
        let index = scan(&roots, &ScanOptions::new());

        assert_eq!(index.get(".go").map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_scan_missing_root_is_skipped() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a.rb", "puts 1");
        let missing = temp.path().join("missing");

        let index = scan(&[missing.as_path(), temp.path()], &ScanOptions::new());

        assert_eq!(index.file_count(), 1);
    }

    #[test]
    fn test_scan_file_root_is_skipped() {
        let temp = tempdir().unwrap();
        write(temp.path(), "a.rb", "puts 1");

        let index = scan(&[temp.path().join("a.rb")], &ScanOptions::new());

        assert!(index.is_empty());
    }

    #[test]
    fn test_scan_hidden_root_is_still_walked() {
        let temp = tempdir().unwrap();
        write(temp.path(), ".config/app/init.lua", "print(1)");

        let index = scan(&[temp.path().join(".config")], &ScanOptions::new());

        assert_eq!(index.get(".lua").map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_scan_empty_root() {
        let temp = tempdir().unwrap();

        let index = scan(&[temp.path()], &ScanOptions::new());

        assert!(index.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_does_not_follow_symlinks_by_default() {
        let temp = tempdir().unwrap();
        write(temp.path(), "real/a.py", "x = 1");
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();
        std::os::unix::fs::symlink(temp.path(), temp.path().join("real/loop")).unwrap();

        let index = scan(&[temp.path()], &ScanOptions::new());

        assert_eq!(index.get(".py").map(<[_]>::len), Some(1));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follow_links_terminates_on_cycle() {
        let temp = tempdir().unwrap();
        write(temp.path(), "real/a.py", "x = 1");
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();
        std::os::unix::fs::symlink(temp.path(), temp.path().join("real/loop")).unwrap();

        let index = scan(&[temp.path()], &ScanOptions::new().follow_links(true));

        // real/a.py and link/a.py; the loop back to the root is cut
        assert_eq!(index.get(".py").map(<[_]>::len), Some(2));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unreadable_directory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        write(temp.path(), "open/a.c", "int a;");
        write(temp.path(), "locked/b.c", "int b;");
        let locked = temp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let index = scan(&[temp.path()], &ScanOptions::new());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // root ignores permission bits, so allow either outcome for b.c
        let count = index.get(".c").map(<[_]>::len).unwrap_or(0);
        assert!(count == 1 || count == 2);
    }
}
