//! Source discovery: find files to count.
//!
//! This module handles the first stage of the pipeline - walking root
//! directories and turning qualifying files into records. It provides:
//!
//! - **Exclusion rules**: hidden entries and dependency/bytecode caches
//! - **Scanning**: depth-first traversal producing an [`ExtensionIndex`](crate::data::ExtensionIndex)
//!
//! ## Example
//!
//! ```rust,ignore
//! use langstatlib::source::scan;
//! use langstatlib::ScanOptions;
//!
//! let index = scan(&["."], &ScanOptions::new());
//! println!("{} files", index.file_count());
//! ```

pub mod filter;
pub mod scanner;

pub use filter::{code_extension, extension_of, is_excluded_name};
pub use scanner::scan;
