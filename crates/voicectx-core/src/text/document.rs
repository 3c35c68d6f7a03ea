//! Immutable document snapshots and the position/offset translator.
//!
//! A [`Document`] indexes its line breaks once at construction; every query
//! afterwards reads the index and the text without mutating anything.
//!
//! Two families of queries live here and are kept apart on purpose:
//! indexed lookups ([`Document::offset_at`], [`Document::position_at`],
//! [`Document::line_bounds`], [`Document::text_in_range`]) reject anything
//! outside the document, while [`Document::clamped_window`] clamps.

use super::encoding::PositionEncoding;
use super::position::{Position, Range};
use crate::error::{Error, Result};

/// Byte and unit extents of one line, terminator excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineSpan {
    byte_start: usize,
    byte_end: usize,
    unit_start: usize,
    unit_len: usize,
}

/// An immutable snapshot of a document's text with a line index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    encoding: PositionEncoding,
    lines: Vec<LineSpan>,
    len: usize,
}

impl Document {
    /// Build a snapshot counting positions in Unicode scalar values.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_encoding(text, PositionEncoding::default())
    }

    /// Build a snapshot counting positions in the given encoding.
    #[must_use]
    pub fn with_encoding(text: impl Into<String>, encoding: PositionEncoding) -> Self {
        let text = text.into();
        let (lines, len) = index_lines(&text, encoding);
        Self {
            text,
            encoding,
            lines,
            len,
        }
    }

    /// Full document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Encoding used for columns and offsets.
    #[must_use]
    pub const fn encoding(&self) -> PositionEncoding {
        self.encoding
    }

    /// Document length in position units.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the document has no text.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of lines; never zero.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Offset of `(line, column)`.
    ///
    /// The column is clamped to the line's length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `line` is not a line of the document.
    pub fn offset_at(&self, line: usize, column: usize) -> Result<usize> {
        let span = self.line_span(line)?;
        Ok(span.unit_start + column.min(span.unit_len))
    }

    /// Position for `(line, column)`, with the column clamped to the line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `line` is not a line of the document.
    pub fn position_of(&self, line: usize, column: usize) -> Result<Position> {
        let span = self.line_span(line)?;
        let column = column.min(span.unit_len);
        Ok(Position {
            line,
            column,
            offset: span.unit_start + column,
        })
    }

    /// Position of an absolute offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `offset` exceeds the document length.
    pub fn position_at(&self, offset: usize) -> Result<Position> {
        self.check_offset(offset)?;
        Ok(self.locate(offset))
    }

    /// Text between two positions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `range.start` lies after `range.end`,
    /// or [`Error::OutOfBounds`] if either end lies outside the document.
    pub fn text_in_range(&self, range: &Range) -> Result<&str> {
        self.text_between(range.start.offset, range.end.offset)
    }

    /// Text between two absolute offsets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if either offset lies outside the
    /// document, otherwise [`Error::InvalidRange`] if `start > end`.
    pub fn text_between(&self, start: usize, end: usize) -> Result<&str> {
        self.check_offset(start)?;
        self.check_offset(end)?;
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(&self.text[self.byte_offset(start)..self.byte_offset(end)])
    }

    /// Range between two absolute offsets.
    ///
    /// # Errors
    ///
    /// Same as [`Document::text_between`].
    pub fn range(&self, start: usize, end: usize) -> Result<Range> {
        self.check_offset(start)?;
        self.check_offset(end)?;
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Range {
            start: self.locate(start),
            end: self.locate(end),
        })
    }

    /// Window of `radius` units on each side of `center`, clipped to the document.
    ///
    /// Never fails: a negative radius yields a zero-width window and a center
    /// outside the document is clamped into it first.
    #[must_use]
    pub fn clamped_window(&self, center: i64, radius: i64) -> Range {
        let len = i64::try_from(self.len).unwrap_or(i64::MAX);
        let center = center.clamp(0, len);
        let radius = radius.max(0);
        let start = center.saturating_sub(radius).max(0);
        let end = center.saturating_add(radius).min(len);
        Range {
            start: self.locate(clamp_to_index(start)),
            end: self.locate(clamp_to_index(end)),
        }
    }

    /// Full span of `line`, terminator excluded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `line` is not a line of the document.
    pub fn line_bounds(&self, line: usize) -> Result<Range> {
        let span = self.line_span(line)?;
        Ok(Range {
            start: Position {
                line,
                column: 0,
                offset: span.unit_start,
            },
            end: Position {
                line,
                column: span.unit_len,
                offset: span.unit_start + span.unit_len,
            },
        })
    }

    /// Text of `line`, terminator excluded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `line` is not a line of the document.
    pub fn line_text(&self, line: usize) -> Result<&str> {
        let span = self.line_span(line)?;
        Ok(&self.text[span.byte_start..span.byte_end])
    }

    /// Span from the start of the document to the end of its last line.
    #[must_use]
    pub fn bounds(&self) -> Range {
        Range {
            start: Position::ZERO,
            end: self.locate(self.len),
        }
    }

    fn line_span(&self, line: usize) -> Result<&LineSpan> {
        self.lines.get(line).ok_or_else(|| Error::OutOfBounds {
            what: "line",
            value: to_signed(line),
            max: self.lines.len() - 1,
        })
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        if offset > self.len {
            return Err(Error::OutOfBounds {
                what: "offset",
                value: to_signed(offset),
                max: self.len,
            });
        }
        Ok(())
    }

    /// Index of the line containing `offset`; `offset` must be in bounds.
    fn line_of(&self, offset: usize) -> usize {
        // lines[0] starts at 0, so the partition point is at least 1.
        self.lines.partition_point(|span| span.unit_start <= offset) - 1
    }

    /// Position of an in-bounds offset. Offsets inside a line terminator
    /// resolve to the end of that line.
    fn locate(&self, offset: usize) -> Position {
        let line = self.line_of(offset);
        let span = &self.lines[line];
        let column = (offset - span.unit_start).min(span.unit_len);
        Position {
            line,
            column,
            offset: span.unit_start + column,
        }
    }

    /// Byte index of an in-bounds unit offset, rounded down to a char boundary.
    fn byte_offset(&self, offset: usize) -> usize {
        let span = &self.lines[self.line_of(offset)];
        let column = offset - span.unit_start;
        if column >= span.unit_len {
            return span.byte_end;
        }
        let mut units = 0;
        for (idx, ch) in self.text[span.byte_start..span.byte_end].char_indices() {
            let next = units + self.encoding.len_of(ch);
            if next > column {
                return span.byte_start + idx;
            }
            units = next;
        }
        span.byte_end
    }
}

/// Convert a caller-supplied signed index into `0..=max`.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] for negative values and values above `max`.
pub fn checked_index(what: &'static str, value: i64, max: usize) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|index| *index <= max)
        .ok_or(Error::OutOfBounds { what, value, max })
}

fn to_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn clamp_to_index(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// Split `text` into lines on `\n`, `\r\n` and lone `\r`.
fn index_lines(text: &str, encoding: PositionEncoding) -> (Vec<LineSpan>, usize) {
    let mut lines = Vec::new();
    let mut byte_start = 0;
    let mut unit_start = 0;
    let mut units = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch != '\n' && ch != '\r' {
            units += encoding.len_of(ch);
            continue;
        }

        lines.push(LineSpan {
            byte_start,
            byte_end: idx,
            unit_start,
            unit_len: units - unit_start,
        });

        let mut next = idx + 1;
        units += 1;
        if ch == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            next += 1;
            units += 1;
        }
        byte_start = next;
        unit_start = units;
    }

    lines.push(LineSpan {
        byte_start,
        byte_end: text.len(),
        unit_start,
        unit_len: units - unit_start,
    });
    (lines, units)
}
