//! Lexical path cleaning.
//!
//! Cleaning rewrites a path into the shortest equivalent form without
//! consulting any filesystem:
//! - Runs of separators collapse to one
//! - `.` segments are removed
//! - `..` cancels the preceding real segment
//! - `..` directly under the root is dropped
//! - `..` at the start of a relative path is kept
//!
//! The result ends in a separator only when it is exactly `/`, and an empty
//! result is spelled `.`.

use super::segments::{segments, SEPARATOR};

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Return the shortest path equivalent to `path` by purely lexical processing.
///
/// # Examples
///
/// ```
/// use slashpath::clean;
///
/// assert_eq!(clean("a/c/b/../k/../h"), "a/c/h");
/// assert_eq!(clean("a/../../b"), "../b");
/// assert_eq!(clean("/a/../../b"), "/b");
/// assert_eq!(clean("//"), "/");
/// assert_eq!(clean(""), ".");
/// ```
#[must_use]
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with(SEPARATOR);
    let mut stack: Vec<&str> = Vec::new();

    for segment in segments(path) {
        match segment {
            CURRENT_DIR => {}
            PARENT_DIR => {
                if stack.last().is_some_and(|&top| top != PARENT_DIR) {
                    stack.pop();
                } else if rooted {
                    log::trace!("dropping '..' above the root in {path:?}");
                } else {
                    stack.push(PARENT_DIR);
                }
            }
            name => stack.push(name),
        }
    }

    let mut out = String::with_capacity(path.len());
    if rooted {
        out.push(SEPARATOR);
    }
    for (i, segment) in stack.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(segment);
    }

    if out.is_empty() {
        out.push_str(CURRENT_DIR);
    }
    out
}

/// Returns true if `path` is already in cleaned form.
///
/// # Examples
///
/// ```
/// use slashpath::path::is_clean;
///
/// assert!(is_clean("/a/b"));
/// assert!(!is_clean("a//b"));
/// assert!(!is_clean("a/"));
/// ```
#[must_use]
pub fn is_clean(path: &str) -> bool {
    clean(path) == path
}
