//! Semantic tokens tests for the IDE layer, against the C++ token fixture.

use crate::helpers::analysis_helpers::*;
use crate::helpers::source_fixtures::*;
use hilite::{LexicalKind, Range, SemanticTokensError, SemanticType};

use LexicalKind::{Comment as C, Identifier as I, Literal as L, Punctuation as P};

// =============================================================================
// FIXTURE QUERIES
// =============================================================================

#[test]
fn test_preprocessing_tokens() {
    let (host, f) = fixture_host();
    let tokens = query(&host, f, (1, 1), (4, 22));
    assert_has_items(
        &tokens,
        &[
            tok(f, P, SemanticType::Punctuation, (1, 1), (1, 2)),
            tok(f, I, SemanticType::PreprocessingDirective, (1, 2), (1, 8)),
            tok(f, I, SemanticType::Macro, (1, 9), (1, 11)),
            // Literals inside a directive are reported as part of the macro.
            tok(f, L, SemanticType::Macro, (1, 12), (1, 17)),
            tok(f, I, SemanticType::Macro, (2, 9), (2, 15)),
            tok(f, I, SemanticType::Macro, (3, 9), (3, 13)),
            tok(f, I, SemanticType::Macro, (3, 20), (3, 22)),
            tok(f, I, SemanticType::Macro, (3, 25), (3, 31)),
            tok(f, I, SemanticType::Macro, (4, 20), (4, 24)),
        ],
    );
}

#[test]
fn test_declaration_tokens() {
    let (host, f) = fixture_host();
    let tokens = query(&host, f, (6, 1), (42, 17));
    assert_has_items(
        &tokens,
        &[
            tok(f, I, SemanticType::Function, (6, 6), (6, 20)),
            tok(f, I, SemanticType::Namespace, (7, 11), (7, 13)),
            tok(f, C, SemanticType::Comment, (8, 1), (11, 4)),
            tok(f, I, SemanticType::TemplateParameter, (12, 17), (12, 18)),
            tok(f, I, SemanticType::TemplateNonTypeParameter, (12, 24), (12, 28)),
            tok(f, I, SemanticType::Class, (13, 7), (13, 10)),
            tok(f, I, SemanticType::MemberFunction, (16, 3), (16, 6)),
            tok(f, I, SemanticType::TemplateParameter, (16, 7), (16, 8)),
            tok(f, I, SemanticType::MemberVariable, (16, 12), (16, 13)),
            tok(f, I, SemanticType::TemplateNonTypeParameter, (16, 16), (16, 20)),
            tok(f, I, SemanticType::MemberFunction, (17, 4), (17, 7)),
            tok(f, I, SemanticType::MemberFunction, (19, 8), (19, 17)),
            tok(f, I, SemanticType::TemplateParameter, (19, 18), (19, 19)),
            tok(f, I, SemanticType::FunctionParameter, (19, 20), (19, 23)),
            tok(f, I, SemanticType::MemberVariable, (20, 5), (20, 6)),
            tok(f, I, SemanticType::FunctionParameter, (20, 9), (20, 12)),
            tok(f, I, SemanticType::TemplateParameter, (24, 3), (24, 4)),
            tok(f, I, SemanticType::MemberVariable, (24, 5), (24, 6)),
            tok(f, I, SemanticType::Class, (27, 9), (27, 12)),
            tok(f, I, SemanticType::TypeAlias, (27, 21), (27, 27)),
            tok(f, I, SemanticType::Structure, (29, 8), (29, 10)),
            tok(f, I, SemanticType::Enumeration, (31, 6), (31, 8)),
            tok(f, I, SemanticType::Enumerator, (32, 3), (32, 13)),
            tok(f, I, SemanticType::Enumerator, (33, 3), (33, 13)),
            tok(f, I, SemanticType::Union, (36, 7), (36, 9)),
            tok(f, C, SemanticType::Comment, (36, 10), (36, 25)),
        ],
    );
}

#[test]
fn test_literal_tokens() {
    let (host, f) = fixture_host();
    let tokens = query(&host, f, (48, 1), (51, 24));
    assert_has_items(
        &tokens,
        &[
            tok(f, L, SemanticType::Integer, (48, 11), (48, 14)),
            tok(f, L, SemanticType::Floating, (49, 13), (49, 18)),
            tok(f, L, SemanticType::Character, (50, 12), (50, 15)),
            tok(f, L, SemanticType::String, (51, 19), (51, 24)),
        ],
    );
}

#[test]
fn test_detailed_usage_tokens() {
    let (host, f) = fixture_host();
    let tokens = query(&host, f, (53, 1), (54, 28));
    // The query end is inclusive: the `;` starting at 54:28 is reported.
    assert_eq!(
        tokens,
        vec![
            tok(f, I, SemanticType::Namespace, (53, 3), (53, 5)),
            tok(f, P, SemanticType::Punctuation, (53, 5), (53, 7)),
            tok(f, I, SemanticType::TypeAlias, (53, 7), (53, 13)),
            tok(f, I, SemanticType::Variable, (53, 14), (53, 17)),
            tok(f, P, SemanticType::Punctuation, (53, 18), (53, 19)),
            tok(f, I, SemanticType::Namespace, (53, 20), (53, 22)),
            tok(f, P, SemanticType::Punctuation, (53, 22), (53, 24)),
            tok(f, I, SemanticType::TypeAlias, (53, 24), (53, 30)),
            tok(f, P, SemanticType::Punctuation, (53, 30), (53, 31)),
            tok(f, I, SemanticType::FunctionParameter, (53, 31), (53, 35)),
            tok(f, P, SemanticType::Punctuation, (53, 35), (53, 36)),
            tok(f, P, SemanticType::Punctuation, (53, 36), (53, 37)),
            tok(f, I, SemanticType::Namespace, (54, 3), (54, 5)),
            tok(f, P, SemanticType::Punctuation, (54, 5), (54, 7)),
            tok(f, I, SemanticType::Enumeration, (54, 7), (54, 9)),
            tok(f, I, SemanticType::Variable, (54, 10), (54, 11)),
            tok(f, P, SemanticType::Punctuation, (54, 12), (54, 13)),
            tok(f, I, SemanticType::Namespace, (54, 14), (54, 16)),
            tok(f, P, SemanticType::Punctuation, (54, 16), (54, 18)),
            tok(f, I, SemanticType::Enumerator, (54, 18), (54, 28)),
            tok(f, P, SemanticType::Punctuation, (54, 28), (54, 29)),
        ]
    );
}

#[test]
fn test_unicode_tokens() {
    let (host, f) = fixture_host();
    let tokens = query(&host, f, (56, 1), (59, 10));
    assert_has_items(
        &tokens,
        &[
            tok(f, C, SemanticType::Comment, (56, 3), (56, 22)),
            tok(f, I, SemanticType::TypeAlias, (57, 18), (57, 24)),
            tok(f, I, SemanticType::TypeAlias, (58, 3), (58, 9)),
            tok(f, I, SemanticType::Variable, (58, 10), (58, 12)),
            tok(f, I, SemanticType::MemberVariable, (59, 6), (59, 7)),
        ],
    );
}

#[test]
fn test_static_member_tokens() {
    let (host, f) = fixture_host();
    let tokens = query(&host, f, (63, 1), (75, 15));
    assert_has_items(
        &tokens,
        &[
            tok(f, I, SemanticType::GlobalVariable, (63, 12), (63, 29)),
            tok(f, I, SemanticType::Function, (64, 12), (64, 30)),
            tok(f, I, SemanticType::MemberVariable, (68, 13), (68, 14)),
            tok(f, I, SemanticType::StaticMemberVariable, (69, 20), (69, 21)),
            tok(f, I, SemanticType::MemberFunction, (71, 14), (71, 17)),
            tok(f, I, SemanticType::StaticMemberFunction, (72, 21), (72, 24)),
            tok(f, I, SemanticType::StaticMemberVariable, (75, 10), (75, 11)),
        ],
    );
}

#[test]
fn test_point_query_on_static_member() {
    let (host, f) = fixture_host();
    let tokens = query(&host, f, (75, 10), (75, 10));
    assert_eq!(
        tokens,
        vec![tok(f, I, SemanticType::StaticMemberVariable, (75, 10), (75, 11))]
    );
}

#[test]
fn test_multiline_expression_range() {
    let (host, f) = fixture_host();
    // `int c = a\n + b;` spans two lines; a query on the second line only
    // must not pull in the first.
    let tokens = query(&host, f, (82, 1), (82, 40));
    assert_eq!(
        tokens,
        vec![
            tok(f, P, SemanticType::Punctuation, (82, 17), (82, 18)),
            tok(f, I, SemanticType::Variable, (82, 19), (82, 20)),
            tok(f, P, SemanticType::Punctuation, (82, 20), (82, 21)),
        ]
    );
}

#[test]
fn test_query_inside_block_comment() {
    let (host, f) = fixture_host();
    let tokens = query(&host, f, (10, 2), (10, 3));
    assert_eq!(
        tokens,
        vec![tok(f, C, SemanticType::Comment, (8, 1), (11, 4))]
    );
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_invalid_file() {
    let (host, f) = fixture_host();
    let err = host
        .analysis()
        .semantic_tokens("", Range::from_coords(f, 1, 1, 1, 1))
        .unwrap_err();
    assert!(matches!(err, SemanticTokensError::UnknownFile(ref path) if path.is_empty()));
    assert_eq!(err.status(), 500);
}

#[test]
fn test_invalid_range() {
    let (host, f) = fixture_host();
    let analysis = host.analysis();
    for range in [
        Range::from_coords(f, 5, 1, 4, 1),
        Range::from_coords(f, 0, 1, 4, 1),
        Range::from_coords(f, 1, 0, 4, 1),
    ] {
        let err = analysis.semantic_tokens(TOKEN_TEST_PATH, range).unwrap_err();
        assert!(
            matches!(err, SemanticTokensError::InvalidRange(_)),
            "{} gave {:?}",
            range,
            err
        );
    }
}

#[test]
fn test_no_partial_results_on_front_end_failure() {
    let source = format!("{}int `broken;\n", TOKEN_TEST_SOURCE);
    let (host, f) = host_with("broken.cc", |file| hilite::SourceUnit::new(file, source));
    let err = host
        .analysis()
        .semantic_tokens_for(f, Range::from_coords(f, 1, 1, 1, 40))
        .unwrap_err();
    assert!(matches!(err, SemanticTokensError::Parse(_)));
}

// =============================================================================
// STREAM PROPERTIES
// =============================================================================

#[test]
fn test_whole_file_is_ordered_and_unique() {
    let (host, f) = fixture_host();
    let tokens = query(&host, f, (1, 1), (83, 1));
    assert!(!tokens.is_empty());
    assert_ordered_unique(&tokens);
    for token in &tokens {
        assert!(token.token_type.is_valid_for(token.kind));
    }
}

#[test]
fn test_every_identifier_resolves() {
    let (host, f) = fixture_host();
    let stream = host.analysis().token_stream(f).unwrap();
    let unresolved: Vec<_> = stream
        .iter()
        .filter(|t| t.token_type == SemanticType::Identifier)
        .map(|t| t.range.to_string())
        .collect();
    assert!(unresolved.is_empty(), "unresolved: {:?}", unresolved);
}

#[test]
fn test_unresolved_identifiers_degrade() {
    let (host, f) = host_with("plain.cc", |file| {
        hilite::SourceUnit::new(file, TOKEN_TEST_SOURCE)
    });
    let tokens = query(&host, f, (53, 1), (53, 40));
    assert_eq!(tokens.len(), 12);
    assert_eq!(tokens[0].token_type, SemanticType::Identifier);
    assert_eq!(tokens[0].kind, LexicalKind::Identifier);
}

#[test]
fn test_filter_matches_linear_scan() {
    let (host, f) = fixture_host();
    let analysis = host.analysis();
    let stream = analysis.token_stream(f).unwrap();
    for (start, end) in [((1, 1), (1, 1)), ((3, 14), (3, 16)), ((9, 1), (9, 1)), ((44, 1), (46, 1))] {
        let range = Range::from_coords(f, start.0, start.1, end.0, end.1);
        let expected: Vec<_> = stream
            .iter()
            .filter(|t| t.range.overlaps(&range))
            .copied()
            .collect();
        assert_eq!(analysis.semantic_tokens_for(f, range).unwrap(), expected);
    }
}

#[test]
fn test_static_members_fixture() {
    let (host, f) = host_with("static.cc", static_members_unit);
    let tokens = query(&host, f, (1, 1), (5, 20));
    let identifiers: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == LexicalKind::Identifier)
        .map(|t| t.token_type)
        .collect();
    assert_eq!(
        identifiers,
        vec![
            SemanticType::Structure,
            SemanticType::StaticMemberVariable,
            SemanticType::MemberVariable,
            SemanticType::Structure,
            SemanticType::StaticMemberVariable,
        ]
    );
}

#[test]
fn test_point_query_at_directive_hash() {
    let (host, f) = host_with("define.cc", |file| {
        hilite::SourceUnit::new(file, DEFINE_ONLY)
    });
    let types: Vec<_> = query(&host, f, (1, 1), (1, 1))
        .iter()
        .map(|t| t.token_type)
        .collect();
    assert_eq!(types, vec![SemanticType::Punctuation]);
}
