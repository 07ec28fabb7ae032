//! Backing stores for the serialized task collection.
//!
//! A [`Storage`] holds one opaque document: the whole task collection as
//! JSON text. It knows nothing about tasks; decoding and encoding happen in
//! [`crate::db::tasks::TaskStore`]. Writes always replace the full document.
//!
//! There is no locking. Two processes working on the same file at the same
//! time can lose updates (last writer wins) or leave a truncated file.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

pub trait Storage {
    /// Returns the stored document, or `None` when nothing has been stored yet.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replaces the stored document with `contents`.
    fn write(&mut self, contents: &str) -> io::Result<()>;
}

/// Storage backed by a single file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        fs::write(&self.path, contents)
    }
}

/// In-process storage, mainly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `contents` already stored, as if read from an existing file.
    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: Some(contents.to_string()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_reports_missing_file_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("tasks.json"));

        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn file_storage_overwrites_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("tasks.json"));

        storage.write("[1, 2, 3]").unwrap();
        storage.write("[]").unwrap();

        assert_eq!(storage.read().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn memory_storage_starts_empty() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read().unwrap(), None);

        storage.write("[]").unwrap();
        assert_eq!(storage.contents(), Some("[]"));
    }
}
