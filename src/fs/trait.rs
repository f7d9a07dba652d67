//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Abstraction over the read-only file operations signal computations need
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read raw file contents
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Read file contents as text. Invalid UTF-8 sequences become U+FFFD.
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = self.read_bytes(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Recursively list every regular file under `root`.
    ///
    /// Nothing is filtered out: hidden files and ignore rules are not honored.
    /// A failure anywhere in the walk fails the whole listing.
    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
