//! The filesystem collaborator.
//!
//! Composition and validation only ever ask two questions of the filesystem:
//! "what is the canonical form of this absolute path?" and "does this path
//! exist, and is it a directory?". [`Filesystem`] is that seam.
//!
//! [`MountedFs`] answers both for a host directory mounted as the emulated
//! root, the way a storage volume appears under a VFS prefix. Canonicalization
//! walks the path one component at a time so that `..` is clamped at the
//! mount root and symlinks never resolve outside of it.

use std::collections::VecDeque;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::{is_absolute, DELIMITER, PARENT, ROOT};

/// Default limit on symlinks followed while canonicalizing one path.
pub const DEFAULT_MAX_SYMLINK_DEPTH: usize = 40;

/// What a probe found at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Existence {
    /// Nothing there (or it could not be inspected).
    Missing,
    /// A directory.
    Directory,
    /// A regular file, device, or anything else that is not a directory.
    Other,
}

impl Existence {
    /// True unless the path is missing.
    #[must_use]
    pub const fn exists(self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// True for directories only.
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Outcome of probing a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// What was found.
    pub existence: Existence,
    /// Raw OS error code reported by the probe, if it failed.
    pub os_error: Option<i32>,
}

impl Probe {
    /// A probe that found nothing and reported no error.
    #[must_use]
    pub const fn missing() -> Self {
        Self {
            existence: Existence::Missing,
            os_error: None,
        }
    }

    /// A successful probe.
    #[must_use]
    pub const fn found(is_dir: bool) -> Self {
        Self {
            existence: if is_dir {
                Existence::Directory
            } else {
                Existence::Other
            },
            os_error: None,
        }
    }
}

/// Filesystem operations consumed by path composition and validation.
///
/// All paths are absolute paths in the emulated namespace.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// Report whether `path` exists and whether it is a directory.
    fn probe(&self, path: &str) -> Probe;

    /// Resolve `.`, `..` and symlinks in `path`.
    ///
    /// # Errors
    ///
    /// Fails when a component does not exist, a non-directory is used as a
    /// directory, too many symlinks are followed, or the host reports an I/O
    /// error.
    fn canonicalize(&self, path: &str) -> Result<String>;
}

/// A host directory mounted as the emulated root.
///
/// # Examples
///
/// ```no_run
/// use cwdemu::path::{Filesystem, MountedFs};
///
/// let fs = MountedFs::new("/mnt/sdcard").unwrap();
/// // "/" in the emulated namespace is /mnt/sdcard on the host
/// assert_eq!(fs.canonicalize("/..").unwrap(), "/");
/// ```
#[derive(Debug, Clone)]
pub struct MountedFs {
    root: PathBuf,
    max_symlink_depth: usize,
}

impl MountedFs {
    /// Mount the host directory `root`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMountRoot` if `root` cannot be canonicalized on the
    /// host or is not a directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let requested = root.as_ref();
        let root = fs::canonicalize(requested).map_err(|e| Error::InvalidMountRoot {
            path: requested.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !root.is_dir() {
            return Err(Error::InvalidMountRoot {
                path: requested.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }
        log::debug!("mounted {} as {ROOT}", root.display());
        Ok(Self {
            root,
            max_symlink_depth: DEFAULT_MAX_SYMLINK_DEPTH,
        })
    }

    /// Mount the host's own root directory.
    ///
    /// # Errors
    ///
    /// Fails only if the host root cannot be inspected.
    pub fn host() -> Result<Self> {
        Self::new(ROOT)
    }

    /// Configure the maximum number of symlinks followed per path.
    #[must_use]
    pub fn with_max_symlink_depth(mut self, depth: usize) -> Self {
        self.max_symlink_depth = depth;
        self
    }

    /// The canonical host directory backing `/`.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an emulated path onto the host, lexically.
    ///
    /// `.` and empty components are skipped and `..` is clamped at the mount
    /// root. Symlinks are not resolved here; use [`Filesystem::canonicalize`]
    /// for that.
    #[must_use]
    pub fn host_path(&self, path: &str) -> PathBuf {
        let mut parts: Vec<&str> = Vec::new();
        for part in path.split(DELIMITER) {
            match part {
                "" | "." => {}
                PARENT => {
                    parts.pop();
                }
                name => parts.push(name),
            }
        }
        parts.iter().fold(self.root.clone(), |host, part| host.join(part))
    }

    fn host_of(&self, parts: &[String]) -> PathBuf {
        parts.iter().fold(self.root.clone(), |host, part| host.join(part))
    }

    fn map_io(err: std::io::Error, path: String) -> Error {
        match err.kind() {
            ErrorKind::NotFound => Error::PathNotFound { path },
            ErrorKind::PermissionDenied => Error::PermissionDenied { path },
            _ => Error::Io(err),
        }
    }
}

fn emulated(parts: &[String]) -> String {
    if parts.is_empty() {
        ROOT.to_string()
    } else {
        format!("{DELIMITER}{}", parts.join("/"))
    }
}

impl Filesystem for MountedFs {
    fn probe(&self, path: &str) -> Probe {
        if !is_absolute(path) {
            return Probe::missing();
        }
        match fs::metadata(self.host_path(path)) {
            Ok(meta) => Probe::found(meta.is_dir()),
            Err(e) => Probe {
                existence: Existence::Missing,
                os_error: e.raw_os_error(),
            },
        }
    }

    fn canonicalize(&self, path: &str) -> Result<String> {
        if !is_absolute(path) {
            return Err(Error::InvalidPath {
                path: path.to_string(),
                reason: "path must be absolute".to_string(),
            });
        }
        if path.contains('\0') {
            return Err(Error::InvalidPath {
                path: path.to_string(),
                reason: "path contains a NUL byte".to_string(),
            });
        }

        let mut resolved: Vec<String> = Vec::new();
        let mut pending: VecDeque<String> = path.split(DELIMITER).map(str::to_string).collect();
        let mut followed = 0;

        while let Some(part) = pending.pop_front() {
            match part.as_str() {
                "" | "." => {}
                PARENT => {
                    resolved.pop();
                }
                name => {
                    let host = self.host_of(&resolved).join(name);
                    let meta = fs::symlink_metadata(&host).map_err(|e| {
                        let mut missing = resolved.clone();
                        missing.push(name.to_string());
                        Self::map_io(e, emulated(&missing))
                    })?;

                    if meta.file_type().is_symlink() {
                        followed += 1;
                        if followed > self.max_symlink_depth {
                            return Err(Error::SymlinkLoop {
                                path: path.to_string(),
                            });
                        }
                        let target = fs::read_link(&host)?;
                        let target = target.to_str().ok_or_else(|| Error::InvalidPath {
                            path: path.to_string(),
                            reason: "symlink target is not valid UTF-8".to_string(),
                        })?;
                        // absolute targets are rooted at the mount, not the host
                        if is_absolute(target) {
                            resolved.clear();
                        }
                        for piece in target.split(DELIMITER).rev() {
                            pending.push_front(piece.to_string());
                        }
                        continue;
                    }

                    resolved.push(name.to_string());
                    if !meta.is_dir() && !pending.is_empty() {
                        return Err(Error::NotADirectory {
                            path: emulated(&resolved),
                        });
                    }
                }
            }
        }

        Ok(emulated(&resolved))
    }
}
