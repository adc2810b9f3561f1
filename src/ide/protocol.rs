//! Wire types for the semantic tokens request.
//!
//! ```json
//! { "filepath": "/src/main.cc",
//!   "range": { "start": { "line": 1, "column": 1 }, "end": { "line": 4, "column": 22 } } }
//! ```
//!
//! answers either
//!
//! ```json
//! { "tokens": [ { "kind": "Punctuation", "type": "Punctuation",
//!                 "range": { "start": { "line": 1, "column": 1 }, "end": { "line": 1, "column": 2 } } } ] }
//! ```
//!
//! or an [`ErrorResponse`] whose code tells unknown files, bad ranges and
//! front-end failures apart.

use serde::{Deserialize, Serialize};

use super::{Analysis, SemanticTokensError};
use crate::base::{FileId, Location, Position, Range};
use crate::semantic::{LexicalKind, SemanticToken, SemanticType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineColumn {
    pub line: u32,
    pub column: u32,
}

impl From<Position> for LineColumn {
    fn from(position: Position) -> Self {
        Self {
            line: position.line,
            column: position.column,
        }
    }
}

impl LineColumn {
    fn located(self, file: FileId) -> Location {
        Location::new(self.line, self.column, file)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeData {
    pub start: LineColumn,
    pub end: LineColumn,
}

impl From<Range> for RangeData {
    fn from(range: Range) -> Self {
        Self {
            start: range.start.position().into(),
            end: range.end.position().into(),
        }
    }
}

impl RangeData {
    pub fn in_file(self, file: FileId) -> Range {
        Range::new(self.start.located(file), self.end.located(file))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticTokensRequest {
    pub filepath: String,
    pub range: RangeData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticTokenData {
    pub kind: LexicalKind,
    #[serde(rename = "type")]
    pub token_type: SemanticType,
    pub range: RangeData,
}

impl From<&SemanticToken> for SemanticTokenData {
    fn from(token: &SemanticToken) -> Self {
        Self {
            kind: token.kind,
            token_type: token.token_type,
            range: token.range.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SemanticTokensResponse {
    pub tokens: Vec<SemanticTokenData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Transport status, not serialized.
    #[serde(skip)]
    pub status: u16,
}

impl From<&SemanticTokensError> for ErrorResponse {
    fn from(error: &SemanticTokensError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            status: error.status(),
        }
    }
}

impl From<SemanticTokensError> for ErrorResponse {
    fn from(error: SemanticTokensError) -> Self {
        Self::from(&error)
    }
}

/// Answer a semantic tokens request against `analysis`.
pub fn handle_semantic_tokens(
    analysis: &Analysis,
    request: &SemanticTokensRequest,
) -> Result<SemanticTokensResponse, ErrorResponse> {
    let file = analysis
        .file_id(&request.filepath)
        .ok_or_else(|| SemanticTokensError::unknown_file(&request.filepath))?;
    let tokens = analysis.semantic_tokens_for(file, request.range.in_file(file))?;
    Ok(SemanticTokensResponse {
        tokens: tokens.iter().map(SemanticTokenData::from).collect(),
    })
}
