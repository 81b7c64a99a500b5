//! Composition of user-supplied paths into canonical absolute paths.

use serde::Serialize;

use crate::path::fs::{Existence, Filesystem, Probe};
use crate::path::{is_absolute, is_root, join, refine};

/// The outcome of composing one path.
///
/// Carries the composed path together with what the filesystem reported
/// about it, so callers never have to re-probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The composed absolute path.
    pub path: String,
    /// What the probe of `path` found.
    pub existence: Existence,
    /// Raw OS error code reported while probing, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_error: Option<i32>,
    /// False when canonicalization failed and `path` is only the
    /// concatenation of the current directory and the argument.
    pub canonical: bool,
}

impl Resolution {
    fn probed<F: Filesystem + ?Sized>(fs: &F, path: String) -> Self {
        let probe = if path.is_empty() {
            Probe::missing()
        } else {
            fs.probe(&path)
        };
        Self {
            path,
            existence: probe.existence,
            os_error: probe.os_error,
            canonical: true,
        }
    }

    /// True if the composed path exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.existence.exists()
    }

    /// True if the composed path is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.existence.is_dir()
    }

    /// True if the composed path is the root directory.
    #[must_use]
    pub fn is_root(&self) -> bool {
        is_root(&self.path)
    }
}

/// Compose `path` against the current directory `cwd`.
///
/// 1. `path` is trimmed.
/// 2. An empty `path` yields `cwd` itself.
/// 3. An absolute `path` is canonicalized as is.
/// 4. A relative `path` is refined and appended to `cwd`, then canonicalized.
/// 5. The canonical result is probed.
///
/// Composition never fails. When canonicalization does, the concatenated
/// path is returned with [`Existence::Missing`] and `canonical == false`, so
/// structural decisions can still be made on it.
///
/// # Examples
///
/// ```no_run
/// use cwdemu::path::{compose, MountedFs};
///
/// let fs = MountedFs::host().unwrap();
/// let resolution = compose(&fs, "/usr", "lib/../bin");
/// assert_eq!(resolution.path, "/usr/bin");
/// assert!(resolution.is_dir());
/// ```
pub fn compose<F: Filesystem + ?Sized>(fs: &F, cwd: &str, path: &str) -> Resolution {
    let path = path.trim();
    if path.is_empty() {
        return Resolution::probed(fs, cwd.to_string());
    }

    let candidate = if is_absolute(path) {
        path.to_string()
    } else {
        join(cwd, &refine(path))
    };

    match fs.canonicalize(&candidate) {
        Ok(canonical) => {
            let resolution = Resolution::probed(fs, canonical);
            log::trace!(
                "composed {path:?} against {cwd:?} as {} ({:?})",
                resolution.path,
                resolution.existence
            );
            resolution
        }
        Err(e) => {
            log::debug!("cannot canonicalize {candidate}: {e}");
            Resolution {
                path: candidate,
                existence: Existence::Missing,
                os_error: e.os_error(),
                canonical: false,
            }
        }
    }
}
