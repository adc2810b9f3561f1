//! Interned file identifiers.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;

/// A cheap, copyable handle for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u32);

impl FileId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

/// Bidirectional map between file paths and [`FileId`]s.
///
/// Ids are assigned in insertion order and never reused, so a `FileId`
/// stays valid for the lifetime of the table even if the file is dropped
/// from the host.
#[derive(Debug, Default, Clone)]
pub struct FileTable {
    paths: IndexSet<Arc<str>>,
}

impl FileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a path, returning its existing id if already known.
    pub fn intern(&mut self, path: &str) -> FileId {
        if let Some(index) = self.paths.get_index_of(path) {
            return FileId::new(index as u32);
        }
        let (index, _) = self.paths.insert_full(Arc::from(path));
        FileId::new(index as u32)
    }

    /// Look up a path without interning it.
    pub fn get(&self, path: &str) -> Option<FileId> {
        self.paths
            .get_index_of(path)
            .map(|index| FileId::new(index as u32))
    }

    /// The path a [`FileId`] was interned from.
    pub fn path(&self, file: FileId) -> Option<&str> {
        self.paths.get_index(file.index()).map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
