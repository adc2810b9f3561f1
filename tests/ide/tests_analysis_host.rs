//! AnalysisHost lifecycle and concurrency tests.

use std::sync::Arc;
use std::thread;

use crate::helpers::analysis_helpers::*;
use crate::helpers::source_fixtures::*;
use hilite::{AnalysisHost, AnalysisOptions, Range, SemanticType, SourceUnit};

#[test]
fn test_concurrent_queries_share_one_stream() {
    let (host, f) = fixture_host();
    let analysis = host.analysis();
    let streams: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let analysis = analysis.clone();
                scope.spawn(move || {
                    let line = 1 + i * 10;
                    analysis
                        .semantic_tokens_for(f, Range::from_coords(f, line, 1, line + 5, 1))
                        .unwrap();
                    analysis.token_stream(f).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for stream in &streams[1..] {
        assert!(Arc::ptr_eq(&streams[0], stream));
    }
}

#[test]
fn test_readers_keep_their_snapshot_across_publish() {
    let host = AnalysisHost::new();
    let file = host.register_file(TOKEN_TEST_PATH);
    host.publish(SourceUnit::new(file, TOKEN_TEST_SOURCE));
    let old = host.analysis();

    host.publish(token_test_unit(file));
    let new = host.analysis();

    let point = Range::from_coords(file, 75, 10, 75, 10);
    assert_eq!(
        old.semantic_tokens_for(file, point).unwrap()[0].token_type,
        SemanticType::Identifier
    );
    assert_eq!(
        new.semantic_tokens_for(file, point).unwrap()[0].token_type,
        SemanticType::StaticMemberVariable
    );
    assert!(new.version(file) > old.version(file));
}

#[test]
fn test_publish_while_querying() {
    let host = AnalysisHost::new();
    let file = host.register_file(TOKEN_TEST_PATH);
    host.publish(token_test_unit(file));

    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..20 {
                host.publish(token_test_unit(file));
            }
        });
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..20 {
                    let tokens = host
                        .analysis()
                        .semantic_tokens_for(file, Range::from_coords(file, 75, 10, 75, 10))
                        .unwrap();
                    assert_eq!(tokens.len(), 1);
                }
            });
        }
    });
}

#[test]
fn test_keywords_option() {
    let host = AnalysisHost::with_options(AnalysisOptions {
        include_keywords: false,
        ..AnalysisOptions::default()
    });
    let file = host.register_file(TOKEN_TEST_PATH);
    host.publish(token_test_unit(file));
    let tokens = host
        .analysis()
        .semantic_tokens_for(file, Range::from_coords(file, 63, 1, 63, 40))
        .unwrap();
    let types: Vec<_> = tokens.iter().map(|t| t.token_type).collect();
    assert_eq!(
        types,
        vec![SemanticType::GlobalVariable, SemanticType::Punctuation]
    );
}

#[test]
fn test_remove_then_query_is_unknown() {
    let (host, f) = fixture_host();
    assert!(host.remove_file(TOKEN_TEST_PATH));
    assert_eq!(host.file_count(), 0);
    let err = host
        .analysis()
        .semantic_tokens(TOKEN_TEST_PATH, Range::from_coords(f, 1, 1, 1, 1))
        .unwrap_err();
    assert_eq!(err.code(), "unknown_file");
}
