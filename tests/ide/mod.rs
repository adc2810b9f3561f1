//! IDE feature tests
//!
//! Tests for:
//! - Semantic tokens over the C++ token fixture
//! - The JSON request/response protocol
//! - AnalysisHost publishing and concurrent queries

pub mod tests_analysis_host;
pub mod tests_protocol;
pub mod tests_semantic_tokens;
