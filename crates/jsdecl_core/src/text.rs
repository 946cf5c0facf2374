//! Source locations.
//!
//! Every token, declaration and diagnostic carries a [`TextSpan`] measured in
//! UTF-8 byte offsets from the start of the source text. Reports turn those
//! offsets into 1-based `line:column` pairs through a [`LineMap`].

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// A byte offset into source text.
pub type TextPos = u32;

/// A half-open byte range of source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextSpan {
    pub start: TextPos,
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// A zero-length span, used while a scope's closing brace is still unknown
    /// and for errors that point at a single offset.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self { start: pos, length: 0 }
    }

    /// The end offset (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// Spans are reported as `{ "start": .., "end": .. }` offset pairs.
impl Serialize for TextSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TextSpan", 2)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end())?;
        state.end()
    }
}

/// A 0-based line and byte column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct LineAndColumn {
    pub line: u32,
    pub character: u32,
}

impl fmt::Display for LineAndColumn {
    /// Formats as the 1-based `line:column` pair editors expect.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// Offsets of every line start in one source text.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<TextPos>,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                text.bytes()
                    .enumerate()
                    .filter(|&(_, byte)| byte == b'\n')
                    .map(|(i, _)| (i + 1) as TextPos),
            )
            .collect();
        Self { line_starts }
    }

    /// Locate a byte offset. Offsets past the end land on the last line.
    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        // The first entry is always 0, so the partition point is at least 1.
        let line = self.line_starts.partition_point(|&start| start <= pos) - 1;
        LineAndColumn {
            line: line as u32,
            character: pos - self.line_starts[line],
        }
    }
}
