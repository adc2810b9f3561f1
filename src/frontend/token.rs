//! Raw lexical tokens as delivered by a front end.

use smol_str::SmolStr;

use crate::base::Range;

/// Literal subtype, as far as the lexer can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Integer,
    Floating,
    Imaginary,
    Character,
    String,
}

/// Lexical category of a raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawTokenKind {
    Punctuation,
    Identifier,
    Keyword,
    Comment,
    Literal(LiteralKind),
}

/// A single token of a translation unit, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub kind: RawTokenKind,
    pub spelling: SmolStr,
    pub range: Range,
}

impl RawToken {
    pub fn new(kind: RawTokenKind, spelling: impl Into<SmolStr>, range: Range) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            range,
        }
    }

    /// `#` or its digraph, the token that opens a directive.
    pub fn is_hash(&self) -> bool {
        self.kind == RawTokenKind::Punctuation && matches!(self.spelling.as_str(), "#" | "%:")
    }
}
