use super::{RepositoryAccess, RepositoryHandle};
use crate::error::SignalError;
use crate::fs::FileSystem;
use crate::project::ProjectIdentity;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Mirrors stored as `<base>/<owner>/<name>`
pub struct LocalMirrors {
    base: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl LocalMirrors {
    pub fn new(base: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            base: base.into(),
            fs,
        }
    }

    pub fn path_of(&self, project: &ProjectIdentity) -> PathBuf {
        self.base.join(project.owner()).join(project.name())
    }
}

impl RepositoryAccess for LocalMirrors {
    fn local_mirror_of(&self, project: &ProjectIdentity) -> Result<RepositoryHandle, SignalError> {
        let path = self.path_of(project);

        if !self.fs.is_dir(&path) {
            return Err(SignalError::MirrorNotFound {
                project: project.clone(),
                path,
            });
        }

        debug!(project = %project, path = %path.display(), "Using local mirror");
        Ok(RepositoryHandle::new(path, self.fs.clone()))
    }
}
