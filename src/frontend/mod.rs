//! Front-end capability boundary.
//!
//! The engine never looks at source text or an AST directly. Everything it
//! needs from a compiler front end goes through [`TranslationUnit`]:
//!
//! - `tokenize` - the raw lexical tokens of the unit, in source order
//! - `resolve_cursor` - the semantic entity anchored at a location
//! - `preprocessing_directive_at` - the directive enclosing a location
//!
//! [`SourceUnit`] is the reference implementation: a logos lexer plus a
//! cursor table supplied by whoever builds the unit.

mod cursor;
mod error;
mod source_unit;
mod token;

pub use cursor::{CursorInfo, CursorKind, Scope};
pub use error::FrontendError;
pub use source_unit::SourceUnit;
pub use token::{LiteralKind, RawToken, RawTokenKind};

use crate::base::{FileId, Location, Range};

/// One parsed compilation input, as seen by the token engine.
///
/// Implementations must be immutable once published: every method takes
/// `&self` and may be called from several threads at once.
pub trait TranslationUnit: Send + Sync {
    /// The file every token and cursor of this unit belongs to.
    fn file(&self) -> FileId;

    /// All lexical tokens of the unit, ordered by start location. Whitespace
    /// is not reported.
    fn tokenize(&self) -> Result<Vec<RawToken>, FrontendError>;

    /// The cursor the front end resolves at `location`, if any.
    fn resolve_cursor(&self, location: &Location) -> Result<Option<CursorInfo>, FrontendError>;

    /// The full extent of the preprocessing directive containing `location`.
    fn preprocessing_directive_at(&self, location: &Location) -> Option<Range>;

    fn is_inside_preprocessing_directive(&self, location: &Location) -> bool {
        self.preprocessing_directive_at(location).is_some()
    }
}
