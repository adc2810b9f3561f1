//! Preprocessing directive extents.
//!
//! A directive starts at a `#` that is the first token on its line and runs
//! to the first newline not escaped by a trailing backslash. Comments count
//! as whitespace: one before the `#` does not stop it opening a directive,
//! and one inside a directive does not end it.

use text_size::{TextRange, TextSize};

use super::lexer::Token;
use super::syntax_kind::SyntaxKind;

/// Compute the byte ranges of every preprocessing directive, in source order.
///
/// Each range starts at the introducing `#` and ends before the terminating
/// newline (or at the end of input).
pub fn directive_ranges(tokens: &[Token<'_>]) -> Vec<TextRange> {
    let mut ranges = Vec::new();
    let mut at_line_start = true;
    let mut open: Option<TextSize> = None;

    for token in tokens {
        if token.kind == SyntaxKind::WHITESPACE {
            if let Some(newline) = unescaped_newline(token.text) {
                if let Some(start) = open.take() {
                    let end = token.offset + TextSize::new(newline as u32);
                    ranges.push(TextRange::new(start, end));
                }
                at_line_start = true;
            }
            continue;
        }
        if token.kind.is_comment() {
            continue;
        }

        if open.is_none() && at_line_start && token.kind == SyntaxKind::HASH {
            open = Some(token.offset);
        }
        at_line_start = false;
    }

    if let (Some(start), Some(last)) = (open, tokens.last()) {
        ranges.push(TextRange::new(start, last.range().end()));
    }

    ranges
}

/// Byte offset of the first `\n` in a whitespace run that is not part of a
/// backslash-newline continuation.
fn unescaped_newline(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    bytes.iter().enumerate().find_map(|(i, &b)| {
        if b != b'\n' {
            return None;
        }
        let escaped = match i {
            0 => false,
            1 => bytes[0] == b'\\',
            _ => bytes[i - 1] == b'\\' || (bytes[i - 1] == b'\r' && bytes[i - 2] == b'\\'),
        };
        (!escaped).then_some(i)
    })
}

/// Find the directive containing `offset`, if any.
pub fn directive_at(ranges: &[TextRange], offset: TextSize) -> Option<TextRange> {
    let index = ranges.partition_point(|range| range.end() <= offset);
    ranges
        .get(index)
        .copied()
        .filter(|range| range.start() <= offset)
}
