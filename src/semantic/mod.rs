//! # Semantic classification
//!
//! Turns the raw tokens of a [`TranslationUnit`](crate::frontend::TranslationUnit)
//! into a [`TokenStream`] of [`SemanticToken`]s and answers range queries
//! over it.
//!
//! ```text
//! RawToken + CursorInfo + DirectiveRole
//!     ↓ classify
//! SemanticToken
//!     ↓ TokenStreamBuilder (sort, dedup)
//! TokenStream
//!     ↓ filter_tokens
//! tokens overlapping a query Range
//! ```

mod classify;
mod filter;
mod stream;
mod token_type;

pub use classify::{DirectiveRole, classify, classify_cursor};
pub use filter::filter_tokens;
pub use stream::{TokenStream, TokenStreamBuilder};
pub use token_type::{LexicalKind, SemanticToken, SemanticType};
