//! Error types for semantic token queries.

use thiserror::Error;

use crate::base::RangeError;
use crate::frontend::FrontendError;

/// Errors that abort a semantic token query.
///
/// An identifier the front end cannot resolve is not an error; it is
/// reported as [`SemanticType::Identifier`](crate::semantic::SemanticType::Identifier).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticTokensError {
    /// No live translation unit is published for the file.
    #[error("no translation unit for file {0:?}")]
    UnknownFile(String),

    /// The query range is malformed or belongs to another file.
    #[error("invalid range: {0}")]
    InvalidRange(#[from] RangeError),

    /// The front end failed while tokenizing or resolving cursors.
    #[error("front end failure: {0}")]
    Parse(#[from] FrontendError),
}

impl SemanticTokensError {
    pub fn unknown_file(file: impl Into<String>) -> Self {
        Self::UnknownFile(file.into())
    }

    /// Stable machine-readable code for the transport boundary.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownFile(_) => "unknown_file",
            Self::InvalidRange(_) => "invalid_range",
            Self::Parse(_) => "parse_error",
        }
    }

    /// Status the transport should answer with. Never a success code.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidRange(_) => 400,
            Self::UnknownFile(_) | Self::Parse(_) => 500,
        }
    }
}

pub type Result<T, E = SemanticTokensError> = std::result::Result<T, E>;
