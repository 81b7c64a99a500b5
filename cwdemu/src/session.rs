//! The command-session context: one emulated current directory together
//! with the filesystem it is resolved against.

use crate::config::Config;
use crate::cwd::CwdStore;
use crate::error::{ChangeError, Result};
use crate::path::fs::{Existence, Filesystem, MountedFs, DEFAULT_MAX_SYMLINK_DEPTH};
use crate::path::validate::{self, Invalid};
use crate::path::{compose, Resolution};

/// An emulated current directory bound to a filesystem.
///
/// Everything that would otherwise be process-wide state lives here and is
/// passed by reference, so independent sessions never interfere.
///
/// # Examples
///
/// ```no_run
/// use cwdemu::{MountedFs, Session};
///
/// let mut session = Session::new(MountedFs::new("/mnt/sdcard").unwrap());
/// session.change("logs").unwrap();
/// assert_eq!(session.pwd(), "/logs");
/// assert!(session.valid("today/new.txt"));
/// ```
#[derive(Debug)]
pub struct Session<F: Filesystem = MountedFs> {
    fs: F,
    cwd: CwdStore,
}

impl<F: Filesystem> Session<F> {
    /// A session at `/`.
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            cwd: CwdStore::default(),
        }
    }

    /// A session whose directory is set to `cwd` without checking it.
    pub fn with_cwd(fs: F, cwd: &str) -> Self {
        Self {
            fs,
            cwd: CwdStore::new(cwd),
        }
    }

    /// The current directory; empty when undefined.
    #[must_use]
    pub fn pwd(&self) -> &str {
        self.cwd.get()
    }

    /// The filesystem this session resolves against.
    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Compose `path` against the current directory.
    pub fn compose(&self, path: &str) -> Resolution {
        compose(&self.fs, self.cwd.get(), path)
    }

    /// Change the current directory to `path`.
    ///
    /// The root is always enterable. Anything else must exist and be a
    /// directory. The current directory is untouched on failure.
    ///
    /// # Errors
    ///
    /// - `ChangeError::Empty` if the composed path is empty
    /// - `ChangeError::NotFound` if it does not exist
    /// - `ChangeError::NotADirectory` if it exists but is not a directory
    pub fn change(&mut self, path: &str) -> std::result::Result<(), ChangeError> {
        let resolved = self.compose(path);
        if resolved.path.is_empty() {
            return Err(ChangeError::Empty);
        }

        if !resolved.is_root() {
            match resolved.existence {
                Existence::Missing => {
                    return Err(ChangeError::NotFound {
                        path: resolved.path,
                    })
                }
                Existence::Other => {
                    return Err(ChangeError::NotADirectory {
                        path: resolved.path,
                    })
                }
                Existence::Directory => {}
            }
        }

        log::debug!("cd {} -> {}", self.cwd.get(), resolved.path);
        self.cwd.set(&resolved.path);
        Ok(())
    }

    /// True if `path` is structurally acceptable here.
    pub fn valid(&self, path: &str) -> bool {
        validate::valid(&self.fs, self.cwd.get(), path)
    }

    /// Like [`Session::valid`], but says why a path was rejected.
    ///
    /// # Errors
    ///
    /// Returns the first problem found scanning from the end of `path`.
    pub fn check(&self, path: &str) -> std::result::Result<(), Invalid> {
        validate::check(&self.fs, self.cwd.get(), path)
    }

    /// Overwrite the current directory without consulting the filesystem.
    ///
    /// A blank `raw` leaves the directory undefined.
    pub fn set_unchecked(&mut self, raw: &str) {
        self.cwd.set(raw);
    }
}

impl Session<MountedFs> {
    /// Build a session from a validated configuration.
    ///
    /// Mounts `mount_root` (the host root when unset) and enters
    /// `initial_dir` when one is configured.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMountRoot` if the mount root is unusable, or
    /// `Change` if the initial directory cannot be entered.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fs = match config.mount_root {
            Some(ref root) => MountedFs::new(root)?,
            None => MountedFs::host()?,
        }
        .with_max_symlink_depth(
            config
                .max_symlink_depth
                .unwrap_or(DEFAULT_MAX_SYMLINK_DEPTH),
        );

        let mut session = Self::new(fs);
        if let Some(ref dir) = config.initial_dir {
            session.change(dir)?;
        }
        log::debug!(
            "session at {} on {}",
            session.pwd(),
            session.fs.root().display()
        );
        Ok(session)
    }
}
