//! The persisted generation manifest.
//!
//! The only cross-run state of the generator: the list of stub paths the
//! previous run produced, relative to the operations root. It is a
//! best-effort cache — an unreadable or invalid manifest degrades to an
//! empty one so a broken artifact can never block generation.

use std::path::Path;

use eyre::Result;
use wiregen_core::write_file;

/// Well-known manifest file name inside the operations root.
pub const MANIFEST_FILE_NAME: &str = "generate.operations.json";

/// Stub paths produced by one run, relative to the operations root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationManifest {
    pub files: Vec<String>,
}

impl GenerationManifest {
    pub fn new(files: Vec<String>) -> Self {
        Self { files }
    }

    /// Load the manifest at `path`; a missing or unparseable file yields an
    /// empty manifest.
    pub fn load(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(files) => Self { files },
            Err(_) => Self::default(),
        }
    }

    /// Persist the manifest as a JSON array of path strings.
    pub fn store(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.files)?;
        write_file(path, &json)
    }

    pub fn contains(&self, file: &str) -> bool {
        self.files.iter().any(|have| have == file)
    }
}
