//! Position encodings.
//!
//! Columns and offsets are measured in units of the configured encoding.
//! `utf-32` counts Unicode scalar values, which is what "character" means
//! everywhere else in this crate.

use serde::{Deserialize, Serialize};

/// Unit in which columns and offsets are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PositionEncoding {
    /// UTF-8 code units (bytes).
    #[serde(rename = "utf-8")]
    Utf8,
    /// UTF-16 code units.
    #[serde(rename = "utf-16")]
    Utf16,
    /// UTF-32 code units (Unicode scalar values).
    #[default]
    #[serde(rename = "utf-32")]
    Utf32,
}

impl PositionEncoding {
    /// Name of the encoding as used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
            Self::Utf32 => "utf-32",
        }
    }

    /// Number of units `ch` occupies.
    #[must_use]
    pub const fn len_of(self, ch: char) -> usize {
        match self {
            Self::Utf8 => ch.len_utf8(),
            Self::Utf16 => ch.len_utf16(),
            Self::Utf32 => 1,
        }
    }
}

impl std::fmt::Display for PositionEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
