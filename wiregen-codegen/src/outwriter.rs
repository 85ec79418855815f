//! Output writer abstraction.
//!
//! The executor never touches the filesystem directly; it goes through
//! [`CodeGenOutWriter`] so that tests can run the full pipeline against an
//! in-memory writer.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use eyre::Result;
use wiregen_core::write_file;

/// Sink for generated files.
///
/// Paths are relative; implementations decide where they land. The executor
/// also needs to inspect what is already present to apply the
/// customization-preservation policy, hence `existing_content`.
pub trait CodeGenOutWriter {
    fn write_file(&mut self, path: &str, content: &str) -> Result<()>;

    /// Current content at `path`, or `None` when nothing exists there.
    fn existing_content(&self, path: &str) -> Result<Option<String>>;
}

/// Writer backed by the real filesystem.
///
/// Resolves paths against a base output directory and creates intermediate
/// directories as needed.
#[derive(Debug, Clone)]
pub struct FileSystemWriter {
    base: PathBuf,
}

impl FileSystemWriter {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base.join(path)
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new("generated")
    }
}

impl CodeGenOutWriter for FileSystemWriter {
    fn write_file(&mut self, path: &str, content: &str) -> Result<()> {
        write_file(&self.resolve(path), content)
    }

    fn existing_content(&self, path: &str) -> Result<Option<String>> {
        let full = self.resolve(path);
        if full.exists() {
            Ok(Some(std::fs::read_to_string(full)?))
        } else {
            Ok(None)
        }
    }
}

/// In-memory writer for tests.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    files: BTreeMap<String, String>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, e.g. to simulate output of a previous run.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn content(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }
}

impl CodeGenOutWriter for MemoryWriter {
    fn write_file(&mut self, path: &str, content: &str) -> Result<()> {
        self.files.insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn existing_content(&self, path: &str) -> Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }
}
