//! Reference [`TranslationUnit`] over in-memory source text.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{CursorInfo, FrontendError, RawToken, TranslationUnit};
use crate::base::{FileId, LineIndex, Location, Position, Range, TextRange};
use crate::parser::{self, SyntaxKind};

/// A translation unit backed by source text and a cursor table.
///
/// Tokens and directive extents come from the crate's own lexer. Cursors
/// come from a table keyed by token start position, filled in by whoever
/// builds the unit (typically an adapter over a real compiler AST, or a test).
#[derive(Debug, Clone)]
pub struct SourceUnit {
    file: FileId,
    text: Arc<str>,
    line_index: LineIndex,
    directives: Vec<TextRange>,
    cursors: FxHashMap<Position, CursorInfo>,
}

impl SourceUnit {
    pub fn new(file: FileId, text: impl Into<Arc<str>>) -> Self {
        let text: Arc<str> = text.into();
        let line_index = LineIndex::new(&text);
        let directives = parser::directive_ranges(&parser::tokenize(&text));
        Self {
            file,
            text,
            line_index,
            directives,
            cursors: FxHashMap::default(),
        }
    }

    /// Register the cursor for the token starting at `line:column`.
    pub fn declare(&mut self, line: u32, column: u32, cursor: CursorInfo) {
        self.cursors.insert(Position::new(line, column), cursor);
    }

    pub fn with_cursor(mut self, line: u32, column: u32, cursor: CursorInfo) -> Self {
        self.declare(line, column, cursor);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    pub fn cursor_count(&self) -> usize {
        self.cursors.len()
    }

    fn check_file(&self, location: &Location) -> Result<(), FrontendError> {
        if location.file == self.file {
            Ok(())
        } else {
            Err(FrontendError::ForeignLocation {
                location: *location,
                expected: self.file,
            })
        }
    }

    fn range_of(&self, range: TextRange) -> Range {
        Range::new(
            self.line_index.location(self.file, range.start()),
            self.line_index.location(self.file, range.end()),
        )
    }
}

impl TranslationUnit for SourceUnit {
    fn file(&self) -> FileId {
        self.file
    }

    fn tokenize(&self) -> Result<Vec<RawToken>, FrontendError> {
        let mut tokens = Vec::new();
        for token in parser::Lexer::new(&self.text) {
            if token.kind == SyntaxKind::ERROR {
                return Err(FrontendError::Lex {
                    location: self.line_index.location(self.file, token.offset),
                    text: token.text.to_string(),
                });
            }
            if let Some(kind) = token.kind.raw_kind() {
                tokens.push(RawToken::new(kind, token.text, self.range_of(token.range())));
            }
        }
        Ok(tokens)
    }

    fn resolve_cursor(&self, location: &Location) -> Result<Option<CursorInfo>, FrontendError> {
        self.check_file(location)?;
        Ok(self.cursors.get(&location.position()).cloned())
    }

    fn preprocessing_directive_at(&self, location: &Location) -> Option<Range> {
        if location.file != self.file {
            return None;
        }
        let offset = self.line_index.position_offset(location.position())?;
        parser::directive_at(&self.directives, offset).map(|range| self.range_of(range))
    }
}
