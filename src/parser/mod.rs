//! Lexing for C-family source text
//!
//! This module is the lexical half of the reference front end:
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind (lossless, byte offsets)
//!     ↓
//! Directive scanner → byte ranges of preprocessing directives
//!     ↓
//! frontend::SourceUnit → RawTokens with 1-based locations
//! ```

mod directives;
pub mod keywords;
mod lexer;
mod syntax_kind;

pub use directives::{directive_at, directive_ranges};
pub use lexer::{Lexer, Token, tokenize};
pub use syntax_kind::SyntaxKind;

/// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
