//! Position tracking for semantic tokens
//!
//! Lines and columns are 1-based. Columns count bytes within the line, the
//! same convention the front end uses, so a multi-byte UTF-8 character
//! advances the column by its encoded length.

use std::cmp::Ordering;
use std::fmt;

use super::FileId;

/// A file-free position in source code (1-indexed line and byte column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A position qualified by the file it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
    pub file: FileId,
}

impl Location {
    pub fn new(line: u32, column: u32, file: FileId) -> Self {
        Self { line, column, file }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Compare by (line, column). The file is not consulted.
    pub fn compare(&self, other: &Location) -> Ordering {
        self.position().cmp(&other.position())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Reasons a [`Range`] can be malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("line and column are 1-based, got {0}")]
    ZeroPosition(Position),
    #[error("range start {start} is after its end {end}")]
    Inverted { start: Position, end: Position },
    #[error("range spans two files ({start} and {end})")]
    CrossFile { start: FileId, end: FileId },
    #[error("range belongs to {found}, expected {expected}")]
    WrongFile { expected: FileId, found: FileId },
}

/// A span between two locations in the same file.
///
/// `end` is exclusive for token ranges. A zero-width range (`start == end`)
/// denotes a cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Location,
    pub end: Location,
}

impl Range {
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Create a range from line/column coordinates
    pub fn from_coords(
        file: FileId,
        start_line: u32,
        start_col: u32,
        end_line: u32,
        end_col: u32,
    ) -> Self {
        Self {
            start: Location::new(start_line, start_col, file),
            end: Location::new(end_line, end_col, file),
        }
    }

    /// A zero-width range at a single location
    pub fn point(location: Location) -> Self {
        Self::new(location, location)
    }

    pub fn file(&self) -> FileId {
        self.start.file
    }

    pub fn is_empty(&self) -> bool {
        self.start.position() == self.end.position()
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Check if a position falls within this span (end inclusive)
    pub fn contains(&self, position: Position) -> bool {
        self.start.position() <= position && position <= self.end.position()
    }

    /// Whether this token range should be reported for the `query` range.
    ///
    /// The query end is an inclusive cursor position: a token starting
    /// exactly at `query.end` overlaps it. A zero-width token at `P` overlaps
    /// iff `query.start <= P <= query.end`.
    pub fn overlaps(&self, query: &Range) -> bool {
        let (start, end) = (self.start.position(), self.end.position());
        let (q_start, q_end) = (query.start.position(), query.end.position());
        if start == end {
            return q_start <= start && start <= q_end;
        }
        start <= q_end && q_start < end
    }

    /// Check the range invariants: 1-based coordinates, a single file, and
    /// `start <= end`.
    pub fn validate(&self) -> Result<(), RangeError> {
        if self.start.file != self.end.file {
            return Err(RangeError::CrossFile {
                start: self.start.file,
                end: self.end.file,
            });
        }
        for location in [self.start, self.end] {
            if location.line == 0 || location.column == 0 {
                return Err(RangeError::ZeroPosition(location.position()));
            }
        }
        if self.start.compare(&self.end) == Ordering::Greater {
            return Err(RangeError::Inverted {
                start: self.start.position(),
                end: self.end.position(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}",
            self.start.file,
            self.start.position(),
            self.end.position()
        )
    }
}
