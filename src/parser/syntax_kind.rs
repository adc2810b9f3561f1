//! Syntax kinds produced by the C-family lexer

use crate::frontend::{LiteralKind, RawTokenKind};

/// All token kinds the lexer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // NAMES
    // =========================================================================
    IDENT,
    KEYWORD,

    // =========================================================================
    // LITERALS
    // =========================================================================
    INTEGER,   // 42, 0x2a, 1'000u
    FLOATING,  // 3.14f, 1e9
    IMAGINARY, // 2.0i
    CHARACTER, // 'c', u8'c'
    STRING,    // "str", L"str"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,             // {
    R_BRACE,             // }
    L_BRACKET,           // [
    R_BRACKET,           // ]
    L_PAREN,             // (
    R_PAREN,             // )
    SEMICOLON,           // ;
    COLON,               // :
    COLON_COLON,         // ::
    COMMA,               // ,
    DOT,                 // .
    DOT_STAR,            // .*
    ELLIPSIS,            // ...
    ARROW,               // ->
    ARROW_STAR,          // ->*
    QUESTION,            // ?
    PLUS,                // +
    PLUS_PLUS,           // ++
    PLUS_EQ,             // +=
    MINUS,               // -
    MINUS_MINUS,         // --
    MINUS_EQ,            // -=
    STAR,                // *
    STAR_EQ,             // *=
    SLASH,               // /
    SLASH_EQ,            // /=
    PERCENT,             // %
    PERCENT_EQ,          // %=
    CARET,               // ^
    CARET_EQ,            // ^=
    AMP,                 // &
    AMP_AMP,             // &&
    AMP_EQ,              // &=
    PIPE,                // |
    PIPE_PIPE,           // ||
    PIPE_EQ,             // |=
    TILDE,               // ~
    BANG,                // !
    BANG_EQ,             // !=
    EQ,                  // =
    EQ_EQ,               // ==
    LT,                  // <
    LT_EQ,               // <=
    LT_LT,               // <<
    LT_LT_EQ,            // <<=
    SPACESHIP,           // <=>
    GT,                  // >
    GT_EQ,               // >=
    GT_GT,               // >>
    GT_GT_EQ,            // >>=
    HASH,                // #
    HASH_HASH,           // ##
    BACKSLASH,           // \ (not followed by a newline)

    // Unlexable input
    ERROR,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE)
    }

    pub fn is_comment(self) -> bool {
        matches!(self, Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    pub fn is_literal(self) -> bool {
        self.literal_kind().is_some()
    }

    pub fn literal_kind(self) -> Option<LiteralKind> {
        match self {
            Self::INTEGER => Some(LiteralKind::Integer),
            Self::FLOATING => Some(LiteralKind::Floating),
            Self::IMAGINARY => Some(LiteralKind::Imaginary),
            Self::CHARACTER => Some(LiteralKind::Character),
            Self::STRING => Some(LiteralKind::String),
            _ => None,
        }
    }

    pub fn is_punctuation(self) -> bool {
        (Self::L_BRACE as u16..=Self::BACKSLASH as u16).contains(&(self as u16))
    }

    /// The lexical category reported to the token stream builder, or `None`
    /// for whitespace and error tokens.
    pub fn raw_kind(self) -> Option<RawTokenKind> {
        match self {
            Self::WHITESPACE | Self::ERROR => None,
            Self::LINE_COMMENT | Self::BLOCK_COMMENT => Some(RawTokenKind::Comment),
            Self::IDENT => Some(RawTokenKind::Identifier),
            Self::KEYWORD => Some(RawTokenKind::Keyword),
            kind => match kind.literal_kind() {
                Some(literal) => Some(RawTokenKind::Literal(literal)),
                None => Some(RawTokenKind::Punctuation),
            },
        }
    }
}
