//! Extension classification tables.
//!
//! Both tables are compile-time constant maps. Extensions are stored
//! lowercased and include the leading dot, the same form the scanner
//! records in a [`FileRecord`](crate::data::FileRecord).

use std::borrow::Cow;

use phf::{phf_map, phf_set};

/// Extensions that are counted at all. Anything else is ignored by the scanner.
pub static CODE_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    ".js", ".ts", ".jsx", ".tsx", ".vue", ".svelte",
    ".py", ".pyx", ".pyi",
    ".java", ".kt", ".scala",
    ".cpp", ".cc", ".cxx", ".c", ".h", ".hpp",
    ".cs", ".fs", ".vb",
    ".rb", ".php", ".swift", ".go", ".rs",
    ".html", ".htm", ".xml", ".xhtml",
    ".css", ".scss", ".sass", ".less", ".styl",
    ".json", ".yaml", ".yml", ".toml",
    ".sql", ".sh", ".bash", ".zsh", ".fish",
    ".r", ".m", ".pl", ".lua", ".dart", ".elm",
    ".clj", ".cljs", ".ex", ".exs", ".erl", ".hrl",
    ".hs", ".lhs", ".ml", ".mli", ".ocaml",
    ".nim", ".cr", ".jl", ".zig", ".odin",
};

/// Display names for extensions with a well-known language.
///
/// Allow-listed extensions missing from this table are labelled by
/// [`language_for_extension`]'s fallback. `.h` is deliberately `C/C++`:
/// a header alone does not tell the two apart.
pub static LANGUAGE_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    ".js" => "JavaScript",
    ".ts" => "TypeScript",
    ".jsx" => "JavaScript",
    ".tsx" => "TypeScript",
    ".vue" => "Vue",
    ".svelte" => "Svelte",
    ".py" => "Python",
    ".pyx" => "Python",
    ".pyi" => "Python",
    ".java" => "Java",
    ".kt" => "Kotlin",
    ".scala" => "Scala",
    ".cpp" => "C++",
    ".cc" => "C++",
    ".cxx" => "C++",
    ".c" => "C",
    ".h" => "C/C++",
    ".hpp" => "C++",
    ".cs" => "C#",
    ".fs" => "F#",
    ".vb" => "Visual Basic",
    ".rb" => "Ruby",
    ".php" => "PHP",
    ".swift" => "Swift",
    ".go" => "Go",
    ".rs" => "Rust",
    ".html" => "HTML",
    ".htm" => "HTML",
    ".xml" => "XML",
    ".xhtml" => "XHTML",
    ".css" => "CSS",
    ".scss" => "SCSS",
    ".sass" => "Sass",
    ".less" => "Less",
    ".styl" => "Stylus",
    ".json" => "JSON",
    ".yaml" => "YAML",
    ".yml" => "YAML",
    ".toml" => "TOML",
    ".sql" => "SQL",
    ".sh" => "Shell",
    ".bash" => "Bash",
    ".zsh" => "Zsh",
    ".fish" => "Fish",
    ".r" => "R",
    ".m" => "MATLAB",
    ".pl" => "Perl",
    ".lua" => "Lua",
    ".dart" => "Dart",
    ".elm" => "Elm",
};

/// Check whether a lowercased, dot-prefixed extension is on the allow-list.
pub fn is_code_extension(extension: &str) -> bool {
    CODE_EXTENSIONS.contains(extension)
}

/// Resolve the language label for a lowercased, dot-prefixed extension.
///
/// Unmapped extensions fall back to their text after the dot, uppercased:
/// `.foo` becomes `FOO`.
pub fn language_for_extension(extension: &str) -> Cow<'static, str> {
    match LANGUAGE_NAMES.get(extension) {
        Some(name) => Cow::Borrowed(*name),
        None => {
            let bare = extension.strip_prefix('.').unwrap_or(extension);
            Cow::Owned(bare.to_uppercase())
        }
    }
}
