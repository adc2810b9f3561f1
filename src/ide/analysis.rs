//! AnalysisHost and Analysis: published translation units and queries over them.
//!
//! The `AnalysisHost` owns the registry of published snapshots and hands out
//! `Analysis` views for querying. Publishing never mutates a snapshot in
//! place: the host swaps in a new map, and views taken earlier keep reading
//! the units they were created with.
//!
//! ## Usage
//!
//! ```ignore
//! let host = AnalysisHost::new();
//! let file = host.register_file("main.cc");
//! host.publish(SourceUnit::new(file, text));
//!
//! let analysis = host.analysis();
//! let tokens = analysis.semantic_tokens("main.cc", range)?;
//! ```

use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use super::{AnalysisOptions, Result, SemanticTokensError, token_stream};
use crate::base::{FileId, FileTable, Range, RangeError};
use crate::frontend::{SourceUnit, TranslationUnit};
use crate::semantic::{SemanticToken, TokenStream};

/// One published translation unit and its lazily built token stream.
struct UnitSnapshot {
    version: u64,
    unit: Arc<dyn TranslationUnit>,
    stream: OnceCell<Arc<TokenStream>>,
}

impl UnitSnapshot {
    fn token_stream(&self, options: &AnalysisOptions) -> Result<Arc<TokenStream>> {
        let build = || token_stream(self.unit.as_ref(), options).map(Arc::new);

        if !options.cache_token_streams {
            return build();
        }
        if let Some(stream) = self.stream.get() {
            trace!("token stream cache hit for {} v{}", self.unit.file(), self.version);
            return Ok(Arc::clone(stream));
        }
        // Concurrent callers for the same snapshot block here until the first
        // build finishes. A failed build leaves the cell empty.
        self.stream.get_or_try_init(build).map(Arc::clone)
    }
}

#[derive(Clone, Default)]
struct HostState {
    files: FileTable,
    units: FxHashMap<FileId, Arc<UnitSnapshot>>,
    next_version: u64,
}

/// Registry of published translation units.
///
/// Shared across threads by reference; every method takes `&self`.
pub struct AnalysisHost {
    options: AnalysisOptions,
    state: RwLock<Arc<HostState>>,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    pub fn new() -> Self {
        Self::with_options(AnalysisOptions::default())
    }

    pub fn with_options(options: AnalysisOptions) -> Self {
        Self {
            options,
            state: RwLock::new(Arc::new(HostState::default())),
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Intern a path. Registering the same path twice returns the same id.
    pub fn register_file(&self, path: &str) -> FileId {
        if let Some(file) = self.state.read().files.get(path) {
            return file;
        }
        let mut state = self.state.write();
        Arc::make_mut(&mut state).files.intern(path)
    }

    pub fn file_id(&self, path: &str) -> Option<FileId> {
        self.state.read().files.get(path)
    }

    /// Publish a translation unit, replacing any earlier snapshot of its
    /// file. Returns the new snapshot's version.
    pub fn publish(&self, unit: impl TranslationUnit + 'static) -> u64 {
        self.publish_arc(Arc::new(unit))
    }

    pub fn publish_arc(&self, unit: Arc<dyn TranslationUnit>) -> u64 {
        let file = unit.file();
        let mut guard = self.state.write();
        let state = Arc::make_mut(&mut guard);
        state.next_version += 1;
        let version = state.next_version;
        let replaced = state
            .units
            .insert(
                file,
                Arc::new(UnitSnapshot {
                    version,
                    unit,
                    stream: OnceCell::new(),
                }),
            )
            .map(|old| old.version);
        debug!("published {} v{} (replaced {:?})", file, version, replaced);
        version
    }

    /// Register `path` and publish its text as a [`SourceUnit`] with no
    /// cursors. Identifiers then classify as plain `Identifier`.
    pub fn set_file_content(&self, path: &str, content: &str) -> FileId {
        let file = self.register_file(path);
        self.publish(SourceUnit::new(file, content));
        file
    }

    /// Drop the published unit for `path`. The path keeps its id.
    pub fn remove_file(&self, path: &str) -> bool {
        let mut guard = self.state.write();
        let Some(file) = guard.files.get(path) else {
            return false;
        };
        if !guard.units.contains_key(&file) {
            return false;
        }
        Arc::make_mut(&mut guard).units.remove(&file);
        debug!("removed {}", file);
        true
    }

    pub fn file_count(&self) -> usize {
        self.state.read().units.len()
    }

    /// A consistent view of everything published so far.
    pub fn analysis(&self) -> Analysis {
        Analysis {
            options: self.options,
            state: Arc::clone(&self.state.read()),
        }
    }
}

/// An immutable view of the published units.
///
/// Cheap to clone and safe to send to other threads. Later publishes on the
/// host are not visible through an existing `Analysis`.
#[derive(Clone)]
pub struct Analysis {
    options: AnalysisOptions,
    state: Arc<HostState>,
}

impl Analysis {
    pub fn file_id(&self, path: &str) -> Option<FileId> {
        self.state.files.get(path)
    }

    pub fn file_path(&self, file: FileId) -> Option<&str> {
        self.state.files.path(file)
    }

    /// Version of the snapshot published for `file`.
    pub fn version(&self, file: FileId) -> Option<u64> {
        self.state.units.get(&file).map(|snapshot| snapshot.version)
    }

    /// The full token stream of `file`, built on first use.
    pub fn token_stream(&self, file: FileId) -> Result<Arc<TokenStream>> {
        self.snapshot(file)?.token_stream(&self.options)
    }

    /// Tokens of the file at `path` overlapping `range`.
    pub fn semantic_tokens(&self, path: &str, range: Range) -> Result<Vec<SemanticToken>> {
        let file = self
            .file_id(path)
            .ok_or_else(|| SemanticTokensError::unknown_file(path))?;
        self.semantic_tokens_for(file, range)
    }

    /// Tokens of `file` overlapping `range`.
    pub fn semantic_tokens_for(&self, file: FileId, range: Range) -> Result<Vec<SemanticToken>> {
        let snapshot = self.snapshot(file)?;
        range.validate()?;
        if range.file() != file {
            return Err(RangeError::WrongFile {
                expected: file,
                found: range.file(),
            }
            .into());
        }
        let stream = snapshot.token_stream(&self.options)?;
        Ok(stream.in_range(&range)?)
    }

    /// Build the token stream of every published unit in parallel.
    ///
    /// Returns how many built. Failures are logged and stay uncached, so the
    /// next query for that file reports them.
    pub fn prime_caches(&self) -> usize {
        let snapshots: Vec<_> = self.state.units.values().collect();
        snapshots
            .par_iter()
            .filter(|snapshot| match snapshot.token_stream(&self.options) {
                Ok(_) => true,
                Err(err) => {
                    warn!("failed to build {}: {}", snapshot.unit.file(), err);
                    false
                }
            })
            .count()
    }

    fn snapshot(&self, file: FileId) -> Result<&UnitSnapshot> {
        self.state
            .units
            .get(&file)
            .map(Arc::as_ref)
            .ok_or_else(|| {
                let name = self
                    .file_path(file)
                    .map_or_else(|| file.to_string(), str::to_string);
                SemanticTokensError::UnknownFile(name)
            })
    }
}
