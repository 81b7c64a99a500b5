//! Structural validation of paths.
//!
//! A path is scanned from its last character to its first. Characters are
//! grouped into runs ([`Run`]) and every separator is a decision point: the
//! run it closes is checked, and the prefix to its left is composed and
//! checked against the filesystem according to the current [`Phase`].
//!
//! The phase records what is known about the ancestors still to be visited.
//! While scanning the leaf, nothing is known. Ancestors of a path that does
//! not exist yet may be missing too (`Optional`), but as soon as one ancestor
//! is found to be a directory every ancestor above it has to be one as well
//! (`Mandatory`). The root always satisfies either phase.

use thiserror::Error;

use crate::path::compose::{compose, Resolution};
use crate::path::fs::{Existence, Filesystem};
use crate::path::{dirname, is_absolute, is_root, DELIMITER, PARENT, ROOT};

/// Why a path was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Invalid {
    /// The path is exactly `/..`.
    #[error("parent of the root directory")]
    ParentOfRoot,

    /// Two separators in a row.
    #[error("doubled separator at offset {offset}")]
    DoubledSeparator {
        /// Byte offset of the first of the two separators.
        offset: usize,
    },

    /// A component made of more than two dots.
    #[error("component of {len} dots after offset {offset}")]
    DotRun {
        /// Byte offset of the separator in front of the component.
        offset: usize,
        /// Number of dots in the component.
        len: usize,
    },

    /// A `..` component directly below the root.
    #[error("'..' above the root after offset {offset}")]
    AboveRoot {
        /// Byte offset of the separator in front of the `..`.
        offset: usize,
    },

    /// An ancestor exists but is not a directory.
    #[error("{prefix}: not a directory")]
    NotADirectory {
        /// The composed ancestor.
        prefix: String,
    },

    /// An ancestor is missing although an ancestor below it exists.
    #[error("{prefix}: no such directory")]
    MissingAncestor {
        /// The composed ancestor.
        prefix: String,
    },
}

/// Classification of the run of characters most recently scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run {
    /// Nothing scanned yet.
    Initial,
    /// Only characters other than `.` and `/`.
    Letters {
        /// Run length.
        len: usize,
    },
    /// Only dots.
    Dots {
        /// Run length.
        len: usize,
    },
    /// Dots and other characters.
    Mixed,
    /// The last character was a separator.
    Separator,
}

impl Run {
    /// Longest run of dots that can be a valid component (`..`).
    pub const MAX_DOTS: usize = 2;

    /// The run after scanning `ch` (right to left).
    #[must_use]
    pub fn advance(self, ch: char) -> Self {
        match (ch, self) {
            (DELIMITER, _) => Self::Separator,
            ('.', Self::Dots { len }) => Self::Dots { len: len + 1 },
            ('.', Self::Letters { .. } | Self::Mixed) => Self::Mixed,
            ('.', Self::Initial | Self::Separator) => Self::Dots { len: 1 },
            (_, Self::Letters { len }) => Self::Letters { len: len + 1 },
            (_, Self::Dots { .. } | Self::Mixed) => Self::Mixed,
            (_, Self::Initial | Self::Separator) => Self::Letters { len: 1 },
        }
    }

    /// True for a run that spells `..`.
    #[must_use]
    pub fn is_parent(self) -> bool {
        self == Self::Dots {
            len: PARENT.len(),
        }
    }
}

/// What is required of the ancestors still to be scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Still on the leaf; nothing decided.
    Basename,
    /// Ancestors may be missing.
    Optional,
    /// Ancestors must exist as directories.
    Mandatory,
}

impl Phase {
    /// Phase implied by the whole path, probed before the scan starts.
    #[must_use]
    pub fn seed(whole: &Resolution) -> Self {
        if whole.exists() {
            Self::Mandatory
        } else {
            Self::Optional
        }
    }

    /// Phase implied by the directory a trailing separator names.
    ///
    /// # Errors
    ///
    /// Rejects a prefix that exists but is not a directory.
    pub fn bootstrap(prefix: &Resolution) -> Result<Self, Invalid> {
        if prefix.is_root() {
            return Ok(Self::Mandatory);
        }
        match prefix.existence {
            Existence::Directory => Ok(Self::Mandatory),
            Existence::Other => Err(Invalid::NotADirectory {
                prefix: prefix.path.clone(),
            }),
            Existence::Missing => Ok(Self::Optional),
        }
    }

    /// Phase after crossing a separator whose prefix composed to `prefix`.
    ///
    /// # Errors
    ///
    /// Rejects a prefix that exists but is not a directory, and a missing
    /// prefix once ancestors are mandatory.
    pub fn cross(self, prefix: &Resolution) -> Result<Self, Invalid> {
        if prefix.is_root() {
            return Ok(Self::Mandatory);
        }
        match (self, prefix.existence) {
            (Self::Basename, Existence::Missing) => Ok(Self::Optional),
            (Self::Basename, _) => Ok(Self::Mandatory),
            (_, Existence::Directory) => Ok(Self::Mandatory),
            (_, Existence::Other) => Err(Invalid::NotADirectory {
                prefix: prefix.path.clone(),
            }),
            (Self::Optional, Existence::Missing) => Ok(Self::Optional),
            (Self::Mandatory, Existence::Missing) => Err(Invalid::MissingAncestor {
                prefix: prefix.path.clone(),
            }),
        }
    }
}

/// Check that `path` is structurally possible, relative to `cwd`.
///
/// Empty paths, single characters and paths whose directory part is at most
/// one character long are accepted without touching the filesystem, except
/// `/..`.
///
/// # Errors
///
/// Returns the first problem found while scanning from the end of the path.
pub fn check<F: Filesystem + ?Sized>(fs: &F, cwd: &str, path: &str) -> Result<(), Invalid> {
    let path = path.trim();
    if path.chars().nth(1).is_none() {
        return Ok(());
    }
    if dirname(path).len() < 2 {
        return if path == parent_of_root() {
            Err(Invalid::ParentOfRoot)
        } else {
            Ok(())
        };
    }

    let mut run = Run::Initial;
    let mut phase = Phase::Basename;

    for (offset, ch) in path.char_indices().rev() {
        if ch == DELIMITER {
            match run {
                Run::Separator => return Err(Invalid::DoubledSeparator { offset }),
                Run::Dots { len } if len > Run::MAX_DOTS => {
                    return Err(Invalid::DotRun { offset, len });
                }
                _ => {}
            }

            let prefix = if offset == 0 { ROOT } else { &path[..offset] };
            let composed = compose(fs, cwd, prefix);
            log::trace!("{path}: prefix {prefix:?} is {:?} ({phase:?})", composed.existence);

            if run.is_parent() && composed.is_root() {
                return Err(Invalid::AboveRoot { offset });
            }
            phase = if run == Run::Initial {
                Phase::bootstrap(&composed)?
            } else {
                phase.cross(&composed)?
            };
        } else if run == Run::Initial {
            if path == parent_of_root() {
                return Err(Invalid::ParentOfRoot);
            }
            phase = Phase::seed(&compose(fs, cwd, path));
        }
        run = run.advance(ch);
    }

    // the leading component of a relative path is closed by the cwd itself
    if !is_absolute(path) {
        match run {
            Run::Dots { len } if len > Run::MAX_DOTS => {
                return Err(Invalid::DotRun { offset: 0, len });
            }
            _ if run.is_parent() && is_root(cwd) => {
                return Err(Invalid::AboveRoot { offset: 0 });
            }
            _ => {}
        }
    }

    Ok(())
}

/// Like [`check`], collapsing every problem into `false`.
pub fn valid<F: Filesystem + ?Sized>(fs: &F, cwd: &str, path: &str) -> bool {
    match check(fs, cwd, path) {
        Ok(()) => true,
        Err(reason) => {
            log::debug!("{path:?} is not a valid path: {reason}");
            false
        }
    }
}

fn parent_of_root() -> String {
    format!("{DELIMITER}{PARENT}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::fs::{MockFilesystem, MountedFs, Probe};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn mounted() -> (TempDir, MountedFs) {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/f"), "data").unwrap();
        let mount = MountedFs::new(dir.path()).unwrap();
        (dir, mount)
    }

    fn resolution(path: &str, existence: Existence) -> Resolution {
        Resolution {
            path: path.to_string(),
            existence,
            os_error: None,
            canonical: true,
        }
    }

    // ---- Run transitions ----

    #[test]
    fn test_run_starts_fresh_after_separator() {
        assert_eq!(Run::Initial.advance('a'), Run::Letters { len: 1 });
        assert_eq!(Run::Separator.advance('.'), Run::Dots { len: 1 });
        assert_eq!(Run::Letters { len: 4 }.advance('/'), Run::Separator);
    }

    #[test]
    fn test_run_counts_homogeneous_runs() {
        let run = "...".chars().fold(Run::Initial, Run::advance);
        assert_eq!(run, Run::Dots { len: 3 });
        let run = "abc".chars().fold(Run::Initial, Run::advance);
        assert_eq!(run, Run::Letters { len: 3 });
    }

    #[test]
    fn test_run_mixes_dots_and_letters() {
        assert_eq!(Run::Letters { len: 2 }.advance('.'), Run::Mixed);
        assert_eq!(Run::Dots { len: 2 }.advance('x'), Run::Mixed);
        assert_eq!(Run::Mixed.advance('.'), Run::Mixed);
        assert_eq!(Run::Mixed.advance('x'), Run::Mixed);
    }

    #[test]
    fn test_run_is_parent() {
        assert!(Run::Dots { len: 2 }.is_parent());
        assert!(!Run::Dots { len: 1 }.is_parent());
        assert!(!Run::Mixed.is_parent());
    }

    // ---- Phase transitions ----

    #[test]
    fn test_phase_seed() {
        assert_eq!(
            Phase::seed(&resolution("/a", Existence::Other)),
            Phase::Mandatory
        );
        assert_eq!(
            Phase::seed(&resolution("/z", Existence::Missing)),
            Phase::Optional
        );
    }

    #[test]
    fn test_phase_bootstrap() {
        assert_eq!(
            Phase::bootstrap(&resolution("/a", Existence::Directory)),
            Ok(Phase::Mandatory)
        );
        assert_eq!(
            Phase::bootstrap(&resolution("/z", Existence::Missing)),
            Ok(Phase::Optional)
        );
        assert!(Phase::bootstrap(&resolution("/f", Existence::Other)).is_err());
    }

    #[test]
    fn test_phase_from_basename() {
        assert_eq!(
            Phase::Basename.cross(&resolution("/f", Existence::Other)),
            Ok(Phase::Mandatory)
        );
        assert_eq!(
            Phase::Basename.cross(&resolution("/z", Existence::Missing)),
            Ok(Phase::Optional)
        );
    }

    #[test]
    fn test_phase_optional_transitions() {
        let optional = Phase::Optional;
        assert_eq!(
            optional.cross(&resolution("/z", Existence::Missing)),
            Ok(Phase::Optional)
        );
        assert_eq!(
            optional.cross(&resolution("/a", Existence::Directory)),
            Ok(Phase::Mandatory)
        );
        assert_eq!(
            optional.cross(&resolution("/", Existence::Missing)),
            Ok(Phase::Mandatory)
        );
        assert_eq!(
            optional.cross(&resolution("/a/f", Existence::Other)),
            Err(Invalid::NotADirectory {
                prefix: "/a/f".to_string()
            })
        );
    }

    #[test]
    fn test_phase_mandatory_is_sticky() {
        let mandatory = Phase::Mandatory;
        assert_eq!(
            mandatory.cross(&resolution("/a", Existence::Directory)),
            Ok(Phase::Mandatory)
        );
        assert_eq!(
            mandatory.cross(&resolution("/", Existence::Directory)),
            Ok(Phase::Mandatory)
        );
        assert_eq!(
            mandatory.cross(&resolution("/z", Existence::Missing)),
            Err(Invalid::MissingAncestor {
                prefix: "/z".to_string()
            })
        );
        assert!(mandatory
            .cross(&resolution("/a/f", Existence::Other))
            .is_err());
    }

    // ---- Fast paths ----

    #[test]
    fn test_fast_paths_do_not_touch_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_probe().never();
        fs.expect_canonicalize().never();

        for path in ["", "   ", "/", "a", ".", "/x", "/...", "ab", "/abc"] {
            assert_eq!(check(&fs, "/", path), Ok(()), "{path:?}");
        }
        assert_eq!(check(&fs, "/", "/.."), Err(Invalid::ParentOfRoot));
        assert_eq!(check(&fs, "/", " /.. "), Err(Invalid::ParentOfRoot));
    }

    // ---- Scans against a real tree ----

    #[test]
    fn test_optional_leaf_under_directory() {
        let (_dir, mount) = mounted();
        assert_eq!(check(&mount, "/", "/a/b/c"), Ok(()));
        assert_eq!(check(&mount, "/", "/a/b"), Ok(()));
    }

    #[test]
    fn test_missing_ancestors_are_optional() {
        let (_dir, mount) = mounted();
        assert_eq!(check(&mount, "/", "/x/y/z"), Ok(()));
        assert_eq!(check(&mount, "/", "/a/x/y/z"), Ok(()));
    }

    #[test]
    fn test_file_as_directory_rejected() {
        let (_dir, mount) = mounted();
        assert_eq!(
            check(&mount, "/", "/a/f/c"),
            Err(Invalid::NotADirectory {
                prefix: "/a/f".to_string()
            })
        );
        assert!(!valid(&mount, "/", "/a/f/x/y"));
    }

    #[test]
    fn test_trailing_separator_on_file_rejected() {
        let (_dir, mount) = mounted();
        assert!(!valid(&mount, "/", "/a/f/"));
        assert!(valid(&mount, "/", "/a/b/"));
    }

    #[test]
    fn test_three_dots_rejected() {
        let (_dir, mount) = mounted();
        assert!(matches!(
            check(&mount, "/", "/a/b/.../x"),
            Err(Invalid::DotRun { len: 3, .. })
        ));
        assert!(!valid(&mount, "/", "/a/b/..../x"));
        assert!(!valid(&mount, "/", "/a/b/..."));
    }

    #[test]
    fn test_dotted_names_accepted() {
        let (_dir, mount) = mounted();
        assert!(valid(&mount, "/", "/a/b/.hidden/x"));
        assert!(valid(&mount, "/", "/a/b/x.../y"));
        assert!(valid(&mount, "/", "/a/b/./c"));
        assert!(valid(&mount, "/", "/a/b/../b/c"));
    }

    #[test]
    fn test_doubled_separator_rejected() {
        let (_dir, mount) = mounted();
        assert_eq!(
            check(&mount, "/", "//x"),
            Err(Invalid::DoubledSeparator { offset: 0 })
        );
        assert!(!valid(&mount, "/", "/a//b"));
    }

    #[test]
    fn test_parent_above_root_rejected() {
        let (_dir, mount) = mounted();
        assert_eq!(
            check(&mount, "/", "/../a"),
            Err(Invalid::AboveRoot { offset: 0 })
        );
        assert!(!valid(&mount, "/", "/a/../../b"));
        assert!(valid(&mount, "/", "/a/../b"));
    }

    #[test]
    fn test_relative_paths() {
        let (_dir, mount) = mounted();
        assert!(valid(&mount, "/a", "b/c"));
        assert!(!valid(&mount, "/a", "f/c"));
        assert!(valid(&mount, "/a/b", "../f"));
        assert!(!valid(&mount, "/", "../a"));
        assert!(!valid(&mount, "/a", ".../b"));
    }

    #[test]
    fn test_missing_ancestor_above_existing_directory() {
        // "/a/b" exists but the scan sees "/ghost/.." as its own ancestor
        let mut fs = MockFilesystem::new();
        fs.expect_canonicalize().returning(|path| match path {
            "/ghost/../a/b/c" => Err(crate::error::Error::PathNotFound {
                path: "/ghost".to_string(),
            }),
            "/ghost/../a/b" => Ok("/a/b".to_string()),
            "/ghost/../a" => Ok("/a".to_string()),
            "/ghost/.." | "/ghost" => Err(crate::error::Error::PathNotFound {
                path: "/ghost".to_string(),
            }),
            other => Ok(other.to_string()),
        });
        fs.expect_probe().returning(|path| match path {
            "/a" | "/a/b" | "/" => Probe::found(true),
            _ => Probe::missing(),
        });

        assert_eq!(
            check(&fs, "/", "/ghost/../a/b/c"),
            Err(Invalid::MissingAncestor {
                prefix: "/ghost/..".to_string()
            })
        );
    }
}
