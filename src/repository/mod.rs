//! Access to locally materialized project checkouts
//!
//! Cloning and updating mirrors happens elsewhere. This module only maps a
//! [`ProjectIdentity`] to a directory that already holds its source tree and
//! offers read-only access to it.

mod mirrors;

pub use mirrors::LocalMirrors;

use crate::error::SignalError;
use crate::fs::FileSystem;
use crate::project::ProjectIdentity;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub trait RepositoryAccess: Send + Sync {
    fn local_mirror_of(&self, project: &ProjectIdentity) -> Result<RepositoryHandle, SignalError>;
}

/// Read-only view of one project's source tree
#[derive(Clone)]
pub struct RepositoryHandle {
    root: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl std::fmt::Debug for RepositoryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryHandle")
            .field("root", &self.root)
            .finish()
    }
}

impl RepositoryHandle {
    pub fn new(root: PathBuf, fs: Arc<dyn FileSystem>) -> Self {
        Self { root, fs }
    }

    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// Reads a file by path relative to the root.
    ///
    /// Returns `Ok(None)` if no regular file exists there. Content that is not
    /// valid UTF-8 is decoded lossily.
    pub fn read(&self, relative_path: &str) -> Result<Option<String>, SignalError> {
        let path = self.root.join(relative_path);
        if !self.fs.is_file(&path) {
            return Ok(None);
        }

        self.fs
            .read_to_string(&path)
            .map(Some)
            .map_err(|source| SignalError::Repository { path, source })
    }

    /// Reads a file found by [`files_named`](Self::files_named)
    pub fn read_path(&self, path: &Path) -> Result<String, SignalError> {
        self.fs
            .read_to_string(path)
            .map_err(|source| SignalError::Repository {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Every regular file anywhere under the root whose base name is exactly `file_name`
    pub fn files_named(&self, file_name: &str) -> Result<Vec<PathBuf>, SignalError> {
        let files = self
            .fs
            .walk_files(&self.root)
            .map_err(|source| SignalError::Repository {
                path: self.root.clone(),
                source,
            })?;

        Ok(files
            .into_iter()
            .filter(|path| path.file_name().and_then(|n| n.to_str()) == Some(file_name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn handle(fs: MockFileSystem) -> RepositoryHandle {
        RepositoryHandle::new(PathBuf::from("/mock/repo"), Arc::new(fs))
    }

    #[test]
    fn test_read_existing_file() {
        let fs = MockFileSystem::new();
        fs.add_file("repo/pom.xml", "<project/>");

        let repo = handle(fs);
        assert_eq!(repo.read("pom.xml").unwrap().as_deref(), Some("<project/>"));
    }

    #[test]
    fn test_read_absent_file() {
        let fs = MockFileSystem::new();
        fs.add_dir("repo");

        assert!(handle(fs).read("pom.xml").unwrap().is_none());
    }

    #[test]
    fn test_read_directory_is_absent() {
        let fs = MockFileSystem::new();
        fs.add_dir("repo/pom.xml");

        assert!(handle(fs).read("pom.xml").unwrap().is_none());
    }

    #[test]
    fn test_read_non_utf8_file() {
        let fs = MockFileSystem::new();
        fs.add_bytes("repo/projects/aaa/Dockerfile", b"M\xfcller\nhttps://github.com/aaa/aaa");

        let repo = handle(fs);
        let content = repo
            .read_path(Path::new("/mock/repo/projects/aaa/Dockerfile"))
            .unwrap();
        assert!(content.contains("https://github.com/aaa/aaa"));
        assert!(repo.read("projects/aaa/Dockerfile").unwrap().is_some());
    }

    #[test]
    fn test_read_failure_is_error() {
        let fs = MockFileSystem::new();
        fs.add_unreadable_file("repo/pom.xml");

        let err = handle(fs).read("pom.xml").unwrap_err();
        assert!(matches!(err, SignalError::Repository { ref path, .. } if path == Path::new("/mock/repo/pom.xml")));
    }

    #[test]
    fn test_files_named_matches_exact_base_name() {
        let fs = MockFileSystem::new();
        fs.add_file("repo/projects/a/Dockerfile", "a");
        fs.add_file("repo/projects/b/Dockerfile.dev", "b");
        fs.add_file("repo/projects/c/dockerfile", "c");
        fs.add_file("repo/Dockerfile", "root");

        let files = handle(fs).files_named("Dockerfile").unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("/mock/repo/Dockerfile"),
                PathBuf::from("/mock/repo/projects/a/Dockerfile"),
            ]
        );
    }
}
