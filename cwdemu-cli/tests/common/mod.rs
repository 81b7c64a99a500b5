//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Test environment: a temporary tree mounted as the emulated root.
///
/// The standard layout holds directory `/a/b` and regular file `/a/f`.
pub struct TestEnv {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create the standard tree.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join("a/b")).expect("Failed to create /a/b");
        std::fs::write(temp_dir.path().join("a/f"), "data").expect("Failed to create /a/f");
        Self { temp_dir }
    }

    /// Host directory mounted as `/`.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The cwdemu binary with nothing configured.
    ///
    /// Environment variables that would leak into the test are cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("cwdemu").expect("Failed to find cwdemu binary");
        for var in [
            "CWDEMU_MOUNT_ROOT",
            "CWDEMU_INITIAL_DIR",
            "CWDEMU_MAX_SYMLINK_DEPTH",
            "CWDEMU_LOG_MODE",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.root());
        cmd
    }

    /// The cwdemu binary with `--root` set to this tree.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--root").arg(self.root());
        cmd
    }

    /// Write a file under the tree and return its host path.
    pub fn write(&self, relative: &str, contents: &str) -> std::path::PathBuf {
        let path = self.root().join(relative);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
