//! Iteration over the segments of a slash-separated path.

use std::iter::FusedIterator;
use std::str::Split;

/// The path separator.
pub const SEPARATOR: char = '/';

/// An iterator over the non-empty segments of a path.
///
/// Repeated, leading and trailing separators produce no segments, so
/// `"//a///b/"` yields `"a"` then `"b"`. The `.` and `..` markers are
/// yielded as-is; use [`clean`](super::clean) first if they should be
/// resolved.
///
/// Created by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: Split<'a, char>,
}

/// Returns an iterator over the non-empty segments of `path`.
///
/// # Examples
///
/// ```
/// use slashpath::segments;
///
/// let parts: Vec<&str> = segments("/usr//local/./bin/").collect();
/// assert_eq!(parts, ["usr", "local", ".", "bin"]);
///
/// assert_eq!(segments("/").count(), 0);
/// assert_eq!(segments("a/b/c").next_back(), Some("c"));
/// ```
#[must_use]
pub fn segments(path: &str) -> Segments<'_> {
    Segments {
        inner: path.split(SEPARATOR),
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|segment| !segment.is_empty())
    }
}

impl DoubleEndedIterator for Segments<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next_back()? {
                "" => continue,
                segment => return Some(segment),
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_empty() {
        assert_eq!(segments("").count(), 0);
        assert_eq!(segments("///").count(), 0);
    }

    #[test]
    fn test_segments_skips_empty() {
        let parts: Vec<_> = segments("//a///b/").collect();
        assert_eq!(parts, ["a", "b"]);
    }

    #[test]
    fn test_segments_keeps_dots() {
        let parts: Vec<_> = segments("./a/../b").collect();
        assert_eq!(parts, [".", "a", "..", "b"]);
    }

    #[test]
    fn test_segments_reversed() {
        let parts: Vec<_> = segments("/a//b/c/").rev().collect();
        assert_eq!(parts, ["c", "b", "a"]);
    }

    #[test]
    fn test_segments_from_both_ends() {
        let mut iter = segments("a/b/c/d");
        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.next_back(), Some("d"));
        assert_eq!(iter.next(), Some("b"));
        assert_eq!(iter.next_back(), Some("c"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }
}
