//! Range filtering over a [`TokenStream`].

use super::{SemanticToken, TokenStream};
use crate::base::{Range, RangeError};

/// Select the tokens of `stream` that overlap `query`, in source order.
///
/// Binary-searches the running maximum of token ends for the first token
/// that can reach the query, then scans until a token starts past the
/// query end.
pub fn filter_tokens(stream: &TokenStream, query: &Range) -> Result<Vec<SemanticToken>, RangeError> {
    query.validate()?;
    if query.file() != stream.file() {
        return Err(RangeError::WrongFile {
            expected: stream.file(),
            found: query.file(),
        });
    }

    let q_start = query.start.position();
    let q_end = query.end.position();
    let first = stream.max_end().partition_point(|end| *end < q_start);

    Ok(stream.tokens()[first..]
        .iter()
        .take_while(|token| token.range.start.position() <= q_end)
        .filter(|token| token.range.overlaps(query))
        .copied()
        .collect())
}
