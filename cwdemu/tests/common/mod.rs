//! Common test utilities for integration tests.
//!
//! Every test works on its own temporary directory tree mounted as the
//! emulated root.

use std::fs;
use std::path::Path;

use cwdemu::{MountedFs, Session};
use tempfile::TempDir;

/// A mounted directory tree that is removed when dropped.
pub struct Tree {
    dir: TempDir,
}

impl Tree {
    /// An empty tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// The standard fixture: directory `/a/b` and regular file `/a/f`.
    pub fn standard() -> Self {
        Self::new().dir("a/b").file("a/f")
    }

    /// Add a directory (and its parents).
    pub fn dir(self, path: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(path)).unwrap();
        self
    }

    /// Add a regular file; its parent must already exist.
    pub fn file(self, path: &str) -> Self {
        fs::write(self.dir.path().join(path), "contents").unwrap();
        self
    }

    /// Add a symlink at `link` pointing to `target`, verbatim.
    #[allow(dead_code)]
    #[cfg(unix)]
    pub fn symlink(self, target: &str, link: &str) -> Self {
        std::os::unix::fs::symlink(target, self.dir.path().join(link)).unwrap();
        self
    }

    /// Host directory backing `/`.
    #[allow(dead_code)]
    pub fn host(&self) -> &Path {
        self.dir.path()
    }

    /// A filesystem mounted on this tree.
    #[allow(dead_code)]
    pub fn mount(&self) -> MountedFs {
        MountedFs::new(self.dir.path()).unwrap()
    }

    /// A session at `/` on this tree.
    #[allow(dead_code)]
    pub fn session(&self) -> Session {
        Session::new(self.mount())
    }
}
