//! Leading-whitespace analysis.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Indentation of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Indentation {
    /// Indentation level, `spaces / tab_size` rounded down.
    pub level: usize,
    /// Total indentation width in spaces, tabs expanded.
    pub spaces: usize,
    /// Number of leading tab characters.
    pub tabs: usize,
    /// Whether any leading tab was found.
    pub uses_tabs: bool,
}

/// Measure the indentation of `line_text`.
///
/// Leading spaces and tabs are scanned up to the first other character; each
/// tab counts as `tab_size` spaces. A `tab_size` of zero is treated as one.
#[must_use]
pub fn indentation_level(line_text: &str, tab_size: usize) -> Indentation {
    let tab_size = tab_size.max(1);
    let mut spaces = 0;
    let mut tabs = 0;

    for ch in line_text.chars() {
        match ch {
            ' ' => spaces += 1,
            '\t' => {
                tabs += 1;
                spaces += tab_size;
            }
            _ => break,
        }
    }

    Indentation {
        level: spaces / tab_size,
        spaces,
        tabs,
        uses_tabs: tabs > 0,
    }
}
