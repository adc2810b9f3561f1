//! # hilite-base
//!
//! Semantic token extraction and range queries for C-family translation
//! units, for editor syntax highlighting.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → AnalysisHost, range queries, wire protocol
//!   ↓
//! semantic  → Classifier, TokenStream builder, range filter
//!   ↓
//! frontend  → TranslationUnit boundary, cursors, reference SourceUnit
//!   ↓
//! parser    → Logos lexer, preprocessing directive scanner
//!   ↓
//! base      → Primitives (FileId, Location, Range, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → frontend → semantic → ide)
// ============================================================================

/// Foundation types: FileId, Location/Range, LineIndex
pub mod base;

/// Lexer and directive scanner for the reference front end
pub mod parser;

/// Front-end boundary: TranslationUnit, RawToken, CursorInfo
pub mod frontend;

/// Token classification, stream building, range filtering
pub mod semantic;

/// Query service: AnalysisHost/Analysis, errors, options, protocol
pub mod ide;

// Re-export foundation types
pub use base::{FileId, FileTable, LineCol, LineIndex, Location, Position, Range, RangeError};

// Re-export the query surface
pub use frontend::{CursorInfo, CursorKind, FrontendError, Scope, SourceUnit, TranslationUnit};
pub use ide::{Analysis, AnalysisHost, AnalysisOptions, SemanticTokensError};
pub use semantic::{LexicalKind, SemanticToken, SemanticType, TokenStream};
