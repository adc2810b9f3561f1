//! Wire protocol tests.

use crate::helpers::analysis_helpers::*;
use crate::helpers::source_fixtures::*;
use hilite::ide::{SemanticTokensRequest, SemanticTokensResponse, handle_semantic_tokens};
use serde_json::{Value, json};

fn request(filepath: &str, start: (u32, u32), end: (u32, u32)) -> SemanticTokensRequest {
    serde_json::from_value(json!({
        "filepath": filepath,
        "range": {
            "start": { "line": start.0, "column": start.1 },
            "end": { "line": end.0, "column": end.1 }
        }
    }))
    .unwrap()
}

fn token_json(kind: &str, ty: &str, sl: u32, sc: u32, el: u32, ec: u32) -> Value {
    json!({
        "kind": kind,
        "type": ty,
        "range": {
            "start": { "line": sl, "column": sc },
            "end": { "line": el, "column": ec }
        }
    })
}

#[test]
fn test_preprocessing_tokens_over_the_wire() {
    let (host, _) = fixture_host();
    let response = handle_semantic_tokens(&host.analysis(), &request(TOKEN_TEST_PATH, (1, 1), (1, 17)))
        .unwrap();
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "tokens": [
                token_json("Punctuation", "Punctuation", 1, 1, 1, 2),
                token_json("Identifier", "PreprocessingDirective", 1, 2, 1, 8),
                token_json("Identifier", "Macro", 1, 9, 1, 11),
                token_json("Literal", "Macro", 1, 12, 1, 17),
            ]
        })
    );
}

#[test]
fn test_response_round_trips_for_clients() {
    let (host, _) = fixture_host();
    let response =
        handle_semantic_tokens(&host.analysis(), &request(TOKEN_TEST_PATH, (56, 1), (59, 10)))
            .unwrap();
    let text = serde_json::to_string(&response).unwrap();
    let decoded: SemanticTokensResponse = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, response);
    assert!(text.contains(r#""type":"MemberVariable""#));
}

#[test]
fn test_unknown_file_is_a_server_error() {
    let (host, _) = fixture_host();
    let error = handle_semantic_tokens(&host.analysis(), &request("", (1, 1), (1, 1))).unwrap_err();
    assert_eq!(error.status, 500);
    assert_eq!(error.code, "unknown_file");
    assert_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({ "code": "unknown_file", "message": "no translation unit for file \"\"" })
    );
}

#[test]
fn test_malformed_range_is_a_client_error() {
    let (host, _) = fixture_host();
    let error =
        handle_semantic_tokens(&host.analysis(), &request(TOKEN_TEST_PATH, (0, 0), (1, 1)))
            .unwrap_err();
    assert_eq!((error.code.as_str(), error.status), ("invalid_range", 400));
}

#[test]
fn test_request_rejects_missing_range() {
    let result: Result<SemanticTokensRequest, _> =
        serde_json::from_value(json!({ "filepath": TOKEN_TEST_PATH }));
    assert!(result.is_err());
}
