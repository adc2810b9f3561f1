//! Semantic tokens for a single range query, without caching.

use tracing::debug;

use super::{AnalysisOptions, Result};
use crate::base::Range;
use crate::frontend::TranslationUnit;
use crate::semantic::{SemanticToken, TokenStream, TokenStreamBuilder};

/// Build the token stream for `unit` under `options`.
pub fn token_stream(unit: &dyn TranslationUnit, options: &AnalysisOptions) -> Result<TokenStream> {
    Ok(TokenStreamBuilder::new(unit)
        .include_keywords(options.include_keywords)
        .build()?)
}

/// Classify `unit` and return the tokens overlapping `range`.
///
/// The range is checked before the unit is tokenized, so a malformed query
/// never pays for a build.
pub fn semantic_tokens(
    unit: &dyn TranslationUnit,
    range: &Range,
    options: &AnalysisOptions,
) -> Result<Vec<SemanticToken>> {
    range.validate()?;
    let stream = token_stream(unit, options)?;
    let tokens = stream.in_range(range)?;
    debug!("{} tokens in {}", tokens.len(), range);
    Ok(tokens)
}
