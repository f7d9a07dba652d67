use oss_signals::{LocalMirrors, RealFileSystem};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Base directory for all test fixtures
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[allow(dead_code)]
pub fn maven_fixture(name: &str) -> String {
    let path = fixtures_dir().join("maven").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Missing fixture {:?}: {}", path, e))
}

/// A mirror directory on disk, laid out as `<base>/<owner>/<name>`
#[allow(dead_code)]
pub struct MirrorTree {
    dir: TempDir,
}

#[allow(dead_code)]
impl MirrorTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn base(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, relative: &str, content: &str) -> &Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn add_bytes(&self, relative: &str, content: &[u8]) -> &Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn add_dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.dir.path().join(relative)).unwrap();
        self
    }

    pub fn mirrors(&self) -> Arc<LocalMirrors> {
        Arc::new(LocalMirrors::new(
            self.dir.path(),
            Arc::new(RealFileSystem::new()),
        ))
    }
}
