//! Byte offset ↔ line/column conversion.

pub use text_size::{TextRange, TextSize};

use super::{FileId, Location, Position};

/// A 0-indexed line and byte column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Line start table for one source text.
///
/// Columns are byte offsets from the start of the line. A line ends at `\n`;
/// a preceding `\r` is counted as part of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(offset, _)| TextSize::new(offset as u32 + 1)),
        );
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a 0-indexed line/column. Offsets past the end
    /// of the text clamp to the end.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        LineCol {
            line: line as u32,
            col: u32::from(offset - self.line_starts[line]),
        }
    }

    /// Convert a 0-indexed line/column back to a byte offset.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let start = *self.line_starts.get(line_col.line as usize)?;
        let line_end = self
            .line_starts
            .get(line_col.line as usize + 1)
            .copied()
            .unwrap_or(self.len);
        let offset = start + TextSize::new(line_col.col);
        (offset <= line_end).then_some(offset)
    }

    /// The 1-based location of a byte offset.
    pub fn location(&self, file: FileId, offset: TextSize) -> Location {
        let LineCol { line, col } = self.line_col(offset);
        Location::new(line + 1, col + 1, file)
    }

    /// The byte offset of a 1-based position, if it lies within the text.
    pub fn position_offset(&self, position: Position) -> Option<TextSize> {
        if position.line == 0 || position.column == 0 {
            return None;
        }
        self.offset(LineCol {
            line: position.line - 1,
            col: position.column - 1,
        })
    }
}
