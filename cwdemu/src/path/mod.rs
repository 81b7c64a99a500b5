//! Path handling for the emulated current directory.
//!
//! Paths in this crate are plain strings in the emulated namespace, always
//! using `/` as the separator regardless of the host platform.
//!
//! # Key Concepts
//!
//! ## Refinement
//!
//! [`refine`] is the purely textual cleanup applied to anything that is about
//! to be stored as a directory: surrounding whitespace and trailing
//! separators are dropped and a leading separator is guaranteed.
//!
//! ## Composition
//!
//! [`compose::compose`] turns an arbitrary (absolute, relative or empty) path
//! into a canonical absolute one against a current directory, and reports
//! what the filesystem says about the result.
//!
//! ## Validation
//!
//! [`validate::check`] scans a path from its last character to its first and
//! rejects structurally impossible paths: doubled separators, runs of three
//! or more dots, `..` above the root, and ancestors that exist but are not
//! directories.
//!
//! # Examples
//!
//! ```
//! use cwdemu::path::{refine, is_root, basename, dirname};
//!
//! assert_eq!(refine("  usr/lib//  "), "/usr/lib");
//! assert!(is_root(&refine("")));
//! assert_eq!(basename("/a/b/c"), "c");
//! assert_eq!(dirname("/a/b/c"), "/a/b/");
//! ```

pub mod compose;
pub mod fs;
pub mod validate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use compose::{compose, Resolution};
pub use fs::{Existence, Filesystem, MountedFs, Probe};
pub use validate::{check, valid, Invalid};

/// The path separator.
pub const DELIMITER: char = '/';

/// The parent-directory pseudo component.
pub const PARENT: &str = "..";

/// The root directory.
pub const ROOT: &str = "/";

/// Returns true iff `path` is exactly the root directory.
#[must_use]
pub fn is_root(path: &str) -> bool {
    path == ROOT
}

/// Returns true if `path` starts at the root.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(DELIMITER)
}

/// Tune up a string for use as a full directory path.
///
/// - trims surrounding whitespace;
/// - drops every trailing separator;
/// - yields `/` when nothing is left;
/// - prepends a separator when the string does not start with one.
///
/// The result always starts with `/` and never ends with `/` unless it is
/// exactly `/`. Applying it twice changes nothing.
#[must_use]
pub fn refine(raw: &str) -> String {
    // whitespace uncovered by dropping separators goes too: "a /" is "/a"
    let trimmed = raw
        .trim_start()
        .trim_end_matches(|c: char| c == DELIMITER || c.is_whitespace());
    if trimmed.is_empty() {
        return ROOT.to_string();
    }
    if is_absolute(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DELIMITER}{trimmed}")
    }
}

/// The text after the last separator (empty when `path` ends with one).
#[must_use]
pub fn basename(path: &str) -> &str {
    path.rfind(DELIMITER).map_or(path, |i| &path[i + 1..])
}

/// Everything up to and including the last separator.
#[must_use]
pub fn dirname(path: &str) -> &str {
    &path[..path.len() - basename(path).len()]
}

/// Append an already refined relative part to a base directory.
///
/// A root or undefined (empty) base contributes no separator of its own, so
/// the result never starts with `//` because of the base.
#[must_use]
pub fn join(base: &str, refined: &str) -> String {
    if base.is_empty() || is_root(base) {
        refined.to_string()
    } else {
        format!("{base}{refined}")
    }
}
