//! IDE features: the semantic tokens query service.
//!
//! This is the entry point for a transport layer: publish translation units
//! into an [`AnalysisHost`], take an [`Analysis`] view, and ask it for the
//! semantic tokens overlapping a range.
//!
//! ## Usage
//!
//! ```ignore
//! use hilite::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new();
//! let file = host.set_file_content("main.cc", "int x;");
//!
//! let analysis = host.analysis();
//! let tokens = analysis.semantic_tokens_for(file, range)?;
//! ```

mod analysis;
mod error;
mod options;
pub mod protocol;
mod semantic_tokens;

pub use analysis::{Analysis, AnalysisHost};
pub use error::{Result, SemanticTokensError};
pub use options::AnalysisOptions;
pub use protocol::{
    ErrorResponse, SemanticTokenData, SemanticTokensRequest, SemanticTokensResponse,
    handle_semantic_tokens,
};
pub use semantic_tokens::{semantic_tokens, token_stream};
