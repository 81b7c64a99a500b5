//! Property-based tests for composition and validation.
//!
//! These run against a real mounted directory tree and are slower than the
//! unit tests, so they sit behind the `property-tests` feature.

use super::fs::{Filesystem, MountedFs};
use super::validate::{check, valid, Invalid, Run};
use super::{compose, refine};
use proptest::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

const DIRS: [&str; 4] = ["a", "a/b", "a/b/c", "d"];

fn tree() -> (TempDir, MountedFs) {
    let dir = tempdir().unwrap();
    for sub in DIRS {
        fs::create_dir_all(dir.path().join(sub)).unwrap();
    }
    fs::write(dir.path().join("a/f"), "data").unwrap();
    let mount = MountedFs::new(dir.path()).unwrap();
    (dir, mount)
}

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        Just("c".to_string()),
        Just("f".to_string()),
        Just(".".to_string()),
        Just("..".to_string()),
        "[a-z]{1,6}",
    ]
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    /// Existing directories compose to their canonical form and probe as directories
    #[test]
    fn compose_existing_directory(index in 0..DIRS.len(), cwd in prop::sample::select(vec!["/", "/a", "/d"])) {
        let (_dir, mount) = tree();
        let absolute = format!("/{}", DIRS[index]);
        let resolution = compose(&mount, cwd, &absolute);

        prop_assert_eq!(&resolution.path, &mount.canonicalize(&absolute).unwrap());
        prop_assert!(resolution.is_dir());
    }

    /// Canonical compositions are refined paths
    #[test]
    fn compose_canonical_is_refined(path in relative_path_strategy()) {
        let (_dir, mount) = tree();
        let resolution = compose(&mount, "/a", &path);
        if resolution.canonical {
            prop_assert_eq!(refine(&resolution.path), resolution.path);
        }
    }

    /// Validation is total and agrees with check
    #[test]
    fn valid_matches_check(path in "[ab/.]{0,16}") {
        let (_dir, mount) = tree();
        prop_assert_eq!(valid(&mount, "/a", &path), check(&mount, "/a", &path).is_ok());
    }

    /// Any component of three or more dots is rejected
    #[test]
    fn long_dot_runs_rejected(prefix in relative_path_strategy(), dots in 3usize..6, suffix in "[a-z]{1,4}") {
        let (_dir, mount) = tree();
        let path = format!("/{prefix}/{}/{suffix}", ".".repeat(dots));
        prop_assert_eq!(
            check(&mount, "/", &path),
            Err(Invalid::DotRun { offset: prefix.len() + 1, len: dots })
        );
    }

    /// Doubled separators are rejected wherever they appear
    #[test]
    fn doubled_separator_rejected(left in "[a-z]{1,4}", right in "[a-z]{1,4}") {
        let (_dir, mount) = tree();
        let path = format!("/{left}//{right}");
        prop_assert_eq!(check(&mount, "/", &path), Err(Invalid::DoubledSeparator { offset: left.len() + 1 }));
    }

    /// A run only ever grows while the same kind of character repeats
    #[test]
    fn run_lengths_count_characters(text in "[a-z]{1,20}") {
        let run = text.chars().rev().fold(Run::Initial, Run::advance);
        prop_assert_eq!(run, Run::Letters { len: text.len() });
    }
}
