//! Foundation types for the hilite engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`], [`FileTable`] - Interned file identifiers
//! - [`Location`], [`Range`], [`Position`] - 1-based, file-qualified source positions
//! - [`LineIndex`], [`LineCol`] - Byte offset to line/column conversion
//!
//! This module has NO dependencies on other hilite modules.

mod file_id;
mod position;
mod span;

pub use file_id::{FileId, FileTable};
pub use position::{Location, Position, Range, RangeError};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
