//! Analysis options

use serde::Deserialize;

/// Settings for an [`AnalysisHost`](super::AnalysisHost)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisOptions {
    /// Keep one built token stream per published snapshot
    pub cache_token_streams: bool,
    /// Report `Keyword` tokens (directive names are always reported)
    pub include_keywords: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            cache_token_streams: true,
            include_keywords: true,
        }
    }
}
