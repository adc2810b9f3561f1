//! Error types for front-end failures.

use thiserror::Error;

use crate::base::{FileId, Location};

/// Failures reported by a [`TranslationUnit`](super::TranslationUnit).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontendError {
    /// Input the lexer could not turn into a token.
    #[error("unrecognized input {text:?} at {location}")]
    Lex { location: Location, text: String },

    /// Cursor resolution failed at a location.
    #[error("failed to resolve cursor at {location}: {message}")]
    Cursor { location: Location, message: String },

    /// A location from another file was passed to this unit.
    #[error("location {location} does not belong to {expected}")]
    ForeignLocation { location: Location, expected: FileId },
}

impl FrontendError {
    pub fn cursor(location: Location, message: impl Into<String>) -> Self {
        Self::Cursor {
            location,
            message: message.into(),
        }
    }
}
