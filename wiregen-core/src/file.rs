//! Filesystem helpers shared by the generation pipelines.

use std::path::Path;

use eyre::Result;

/// Outcome of committing one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteDisposition {
    /// File was created or overwritten.
    Written,
    /// File already had the exact generated content; nothing was touched.
    UpToDate,
    /// File was customized by the developer and left alone.
    Preserved,
}

/// Write `content` to `path`, creating intermediate directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Remove `dir` if empty, then walk up removing newly empty parents, up to
/// but not including `base`.
pub fn remove_empty_dirs(dir: &Path, base: &Path) -> Result<()> {
    if dir == base || !dir.starts_with(base) || !dir.exists() {
        return Ok(());
    }

    if std::fs::read_dir(dir)?.next().is_none() {
        std::fs::remove_dir(dir)?;
        if let Some(parent) = dir.parent() {
            remove_empty_dirs(parent, base)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_remove_empty_dirs_walks_up_to_base() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        let nested = base.join("a").join("b").join("c");
        fs::create_dir_all(&nested).unwrap();

        remove_empty_dirs(&nested, base).unwrap();

        assert!(!base.join("a").exists());
        assert!(base.exists());
    }

    #[test]
    fn test_remove_empty_dirs_keeps_non_empty() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();
        let nested = base.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(base.join("a").join("keep.txt"), "x").unwrap();

        remove_empty_dirs(&nested, base).unwrap();

        assert!(!nested.exists());
        assert!(base.join("a").exists());
    }

    #[test]
    fn test_remove_empty_dirs_never_touches_base() {
        let temp = TempDir::new().unwrap();
        let base = temp.path();

        remove_empty_dirs(base, base).unwrap();

        assert!(base.exists());
    }
}
