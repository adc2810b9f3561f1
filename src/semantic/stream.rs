//! Token stream construction.
//!
//! [`TokenStreamBuilder`] is the only place that talks to a front end's raw
//! token and cursor interfaces. It walks the unit's tokens in source order,
//! classifies each one, and merges the results into a [`TokenStream`]: sorted
//! by start, with no two tokens sharing a range.

use std::slice;

use tracing::{debug, trace, warn};

use super::classify::{DirectiveRole, classify};
use super::filter::filter_tokens;
use super::{LexicalKind, SemanticToken, SemanticType};
use crate::base::{FileId, Position, Range, RangeError};
use crate::frontend::{FrontendError, RawToken, RawTokenKind, TranslationUnit};

/// The classified tokens of one translation-unit snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    file: FileId,
    tokens: Vec<SemanticToken>,
    /// `max_end[i]` is the furthest end among `tokens[..=i]`.
    max_end: Vec<Position>,
}

impl TokenStream {
    /// Build the stream for `unit` with default settings.
    pub fn build(unit: &dyn TranslationUnit) -> Result<Self, FrontendError> {
        TokenStreamBuilder::new(unit).build()
    }

    /// Assemble a stream from already classified tokens, restoring the
    /// ordering and uniqueness invariants.
    pub fn from_tokens(file: FileId, tokens: Vec<SemanticToken>) -> Self {
        let tokens = dedup(sort_if_needed(file, tokens));
        let max_end = running_max_end(&tokens);
        Self {
            file,
            tokens,
            max_end,
        }
    }

    pub fn file(&self) -> FileId {
        self.file
    }

    pub fn tokens(&self) -> &[SemanticToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, SemanticToken> {
        self.tokens.iter()
    }

    /// Tokens overlapping `query`, in source order.
    pub fn in_range(&self, query: &Range) -> Result<Vec<SemanticToken>, RangeError> {
        filter_tokens(self, query)
    }

    pub(super) fn max_end(&self) -> &[Position] {
        &self.max_end
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a SemanticToken;
    type IntoIter = slice::Iter<'a, SemanticToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Builds a [`TokenStream`] from a [`TranslationUnit`].
pub struct TokenStreamBuilder<'u> {
    unit: &'u dyn TranslationUnit,
    include_keywords: bool,
}

impl<'u> TokenStreamBuilder<'u> {
    pub fn new(unit: &'u dyn TranslationUnit) -> Self {
        Self {
            unit,
            include_keywords: true,
        }
    }

    /// Report `Keyword` tokens. Directive names are reported either way.
    pub fn include_keywords(mut self, include: bool) -> Self {
        self.include_keywords = include;
        self
    }

    pub fn build(self) -> Result<TokenStream, FrontendError> {
        let file = self.unit.file();
        let raw = self.unit.tokenize()?;

        let mut directives = DirectiveTracker::default();
        let mut classified = Vec::with_capacity(raw.len());
        let mut gaps = 0usize;

        for token in &raw {
            let role = directives.role_of(self.unit, token);
            let cursor = match (token.kind, role) {
                (RawTokenKind::Identifier, DirectiveRole::Outside) => {
                    self.unit.resolve_cursor(&token.range.start)?
                }
                _ => None,
            };

            let token_type = classify(token.kind, cursor.as_ref(), role);
            if token_type == SemanticType::Keyword && !self.include_keywords {
                continue;
            }
            if !token_type.is_resolved() {
                gaps += 1;
                trace!(
                    "unresolved identifier {:?} at {}",
                    token.spelling, token.range.start
                );
            }

            let kind = LexicalKind::from(token.kind);
            debug_assert!(token_type.is_valid_for(kind));
            classified.push(SemanticToken::new(kind, token_type, token.range));
        }

        let stream = TokenStream::from_tokens(file, classified);
        debug!(
            "built token stream for {}: {} raw, {} classified, {} unresolved",
            file,
            raw.len(),
            stream.len(),
            gaps
        );
        Ok(stream)
    }
}

/// Tracks which directive the walk is in and whether its name has been seen.
#[derive(Default)]
struct DirectiveTracker {
    current: Option<Range>,
    expect_name: bool,
}

impl DirectiveTracker {
    fn role_of(&mut self, unit: &dyn TranslationUnit, token: &RawToken) -> DirectiveRole {
        let Some(extent) = unit.preprocessing_directive_at(&token.range.start) else {
            self.current = None;
            self.expect_name = false;
            return DirectiveRole::Outside;
        };

        if token.kind == RawTokenKind::Comment {
            return DirectiveRole::Body;
        }

        if self.current != Some(extent) {
            // First token of a new directive; the name follows the `#`.
            self.current = Some(extent);
            self.expect_name = token.is_hash();
            return DirectiveRole::Body;
        }

        let is_word = matches!(token.kind, RawTokenKind::Identifier | RawTokenKind::Keyword);
        if std::mem::take(&mut self.expect_name) && is_word {
            DirectiveRole::Name
        } else {
            DirectiveRole::Body
        }
    }
}

fn sort_if_needed(file: FileId, mut tokens: Vec<SemanticToken>) -> Vec<SemanticToken> {
    let ordered = tokens
        .windows(2)
        .all(|pair| key(&pair[0]) <= key(&pair[1]));
    if !ordered {
        warn!("front end returned out-of-order tokens for {}, sorting", file);
        tokens.sort_by_key(key);
    }
    tokens
}

fn key(token: &SemanticToken) -> (Position, Position) {
    (token.range.start.position(), token.range.end.position())
}

/// Drop tokens whose range equals the previous one. A plain `Identifier` is
/// replaced by a more specific classification of the same range.
fn dedup(tokens: Vec<SemanticToken>) -> Vec<SemanticToken> {
    let mut out: Vec<SemanticToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match out.last_mut() {
            Some(last) if last.range == token.range => {
                if !last.token_type.is_resolved() && token.token_type.is_resolved() {
                    *last = token;
                }
            }
            _ => out.push(token),
        }
    }
    out
}

fn running_max_end(tokens: &[SemanticToken]) -> Vec<Position> {
    let mut max: Option<Position> = None;
    tokens
        .iter()
        .map(|token| {
            let end = token.range.end.position();
            let next = max.map_or(end, |m| m.max(end));
            max = Some(next);
            next
        })
        .collect()
}
