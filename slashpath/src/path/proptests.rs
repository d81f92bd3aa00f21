//! Property-based tests for path handling.
//!
//! Note: The clean module already has quick property tests for cleaning.
//! This module checks how the operations relate to one another.

use super::{base, clean, dir, join, split, CleanPath};
use crate::pattern::{match_path, Pattern};
use proptest::prelude::*;

// Strategy for one raw segment, including the special ones
fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_.-]{1,6}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (prop::collection::vec(segment_strategy(), 0..10), any::<bool>()).prop_map(
        |(parts, rooted)| {
            let joined = parts.join("/");
            if rooted {
                format!("/{joined}")
            } else {
                joined
            }
        },
    )
}

// Non-empty path, possibly ending in a separator
fn non_empty_path_strategy() -> impl Strategy<Value = String> {
    (raw_path_strategy(), "[a-z0-9_./-]{1,6}").prop_map(|(head, tail)| format!("{head}{tail}"))
}

// Non-empty path whose last segment is never empty
fn file_path_strategy() -> impl Strategy<Value = String> {
    (raw_path_strategy(), "[a-z0-9_.-]{1,6}").prop_map(|(head, last)| {
        if head.is_empty() {
            last
        } else {
            format!("{head}/{last}")
        }
    })
}

// Segment text with no glob metacharacters
fn literal_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Cleaning is idempotent: clean(clean(p)) == clean(p)
    #[test]
    fn clean_idempotent(path in raw_path_strategy()) {
        let once = clean(&path);
        prop_assert_eq!(clean(&once), once);
    }

    // Cleaned paths contain no reducible pieces
    #[test]
    fn cleaned_paths_are_normalized(path in raw_path_strategy()) {
        let cleaned = clean(&path);
        prop_assert!(!cleaned.contains("//"));
        prop_assert!(!cleaned.contains("/./"));
        prop_assert!(!cleaned.ends_with("/."));
        prop_assert!(cleaned == "/" || !cleaned.ends_with('/'));

        // Any ".." must sit in a leading run of ".." segments of a relative path
        let segs: Vec<&str> = cleaned.split('/').filter(|s| !s.is_empty()).collect();
        let leading = segs.iter().take_while(|s| **s == "..").count();
        prop_assert!(!segs[leading..].contains(&".."));
        if cleaned.starts_with('/') {
            prop_assert_eq!(leading, 0);
        }
    }

    // Reassembling the halves of split and cleaning gives clean(p)
    #[test]
    fn split_join_round_trip(path in non_empty_path_strategy()) {
        let (directory, file) = split(&path);
        prop_assert_eq!(format!("{directory}{file}"), path.clone());
        prop_assert_eq!(join([directory, file]), clean(&path));
    }

    // dir and base reconstruct the cleaned path
    #[test]
    fn dir_base_reconstruct(path in file_path_strategy()) {
        prop_assert!(!path.is_empty() && !path.ends_with('/'));
        prop_assert_eq!(join([dir(&path).as_str(), base(&path)]), clean(&path));
    }

    // CleanPath never changes when cleaned again
    #[test]
    fn clean_path_invariant(path in raw_path_strategy()) {
        let typed = CleanPath::new(&path);
        prop_assert_eq!(CleanPath::new(typed.as_str()), typed.clone());
        prop_assert_eq!(typed.as_str(), clean(&path));
    }

    // A pattern with no metacharacters matches exactly itself
    #[test]
    fn literal_pattern_matches_itself(name in literal_name_strategy(), other in literal_name_strategy()) {
        prop_assert!(match_path(&name, &name).unwrap());
        prop_assert_eq!(match_path(&name, &other).unwrap(), name == other);
    }

    // "*" matches exactly the names without a separator
    #[test]
    fn star_matches_single_segments(path in raw_path_strategy()) {
        let star = Pattern::new("*").unwrap();
        prop_assert_eq!(star.matches(&path), !path.contains('/'));
    }
}
