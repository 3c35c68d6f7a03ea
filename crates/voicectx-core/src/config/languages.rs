//! File extension to language identifier mapping.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Language id reported when no mapping matches.
pub const FALLBACK_LANGUAGE: &str = "plaintext";

/// Built-in `(language_id, extensions)` table.
const BUILTIN_LANGUAGES: &[(&str, &[&str])] = &[
    ("rust", &["rs"]),
    ("python", &["py", "pyw", "pyi"]),
    ("javascript", &["js", "mjs", "cjs"]),
    ("typescript", &["ts", "mts", "cts"]),
    ("typescriptreact", &["tsx"]),
    ("javascriptreact", &["jsx"]),
    ("go", &["go"]),
    ("c", &["c", "h"]),
    ("cpp", &["cpp", "cc", "cxx", "hpp", "hh", "hxx"]),
    ("java", &["java"]),
    ("ruby", &["rb"]),
    ("shellscript", &["sh", "bash", "zsh"]),
    ("json", &["json"]),
    ("toml", &["toml"]),
    ("yaml", &["yaml", "yml"]),
    ("html", &["html", "htm"]),
    ("css", &["css"]),
    ("markdown", &["md", "markdown"]),
    ("talon", &["talon"]),
];

/// Maps a set of file extensions to one language id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageExtensionMapping {
    /// Extensions without the leading dot.
    pub extensions: Vec<String>,
    /// Language id reported for matching files.
    pub language_id: String,
}

/// Built-in mappings used when the configuration provides none.
#[must_use]
pub fn default_language_extensions() -> Vec<LanguageExtensionMapping> {
    BUILTIN_LANGUAGES
        .iter()
        .map(|(language_id, extensions)| LanguageExtensionMapping {
            extensions: extensions.iter().map(ToString::to_string).collect(),
            language_id: (*language_id).to_string(),
        })
        .collect()
}

/// Detect the language id of `path` from its extension.
///
/// Later mappings override earlier ones for the same extension.
#[must_use]
pub fn detect_language(path: &Path, mappings: &[LanguageExtensionMapping]) -> String {
    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        return FALLBACK_LANGUAGE.to_string();
    };
    mappings
        .iter()
        .rev()
        .find(|mapping| mapping.extensions.iter().any(|ext| ext == extension))
        .map_or_else(
            || FALLBACK_LANGUAGE.to_string(),
            |mapping| mapping.language_id.clone(),
        )
}
