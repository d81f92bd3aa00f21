//! Splitting, joining and inspecting slash-separated paths.
//!
//! None of these functions fail: empty strings, all-separator strings and
//! trailing separators each have a defined result.

use super::clean::clean;
use super::segments::SEPARATOR;

/// Split `path` immediately after its final separator.
///
/// The directory half keeps the trailing separator and the file half is
/// everything after it. Neither half is cleaned. If there is no separator,
/// the directory half is empty.
///
/// # Examples
///
/// ```
/// use slashpath::split;
///
/// assert_eq!(split("/a/b/c"), ("/a/b/", "c"));
/// assert_eq!(split("static/"), ("static/", ""));
/// assert_eq!(split("myfile.css"), ("", "myfile.css"));
/// ```
#[must_use]
pub fn split(path: &str) -> (&str, &str) {
    let at = path.rfind(SEPARATOR).map_or(0, |i| i + 1);
    path.split_at(at)
}

/// Join path elements with a single separator and clean the result.
///
/// Empty elements are ignored. Joining no elements, or only empty ones,
/// yields the empty string rather than `.`.
///
/// # Examples
///
/// ```
/// use slashpath::join;
///
/// assert_eq!(join(["a", "b", "../c"]), "a/c");
/// assert_eq!(join(["/", "a", "", "b"]), "/a/b");
/// assert_eq!(join(["", ""]), "");
/// ```
#[must_use]
pub fn join<I, S>(elements: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for element in elements {
        let element = element.as_ref();
        if element.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(SEPARATOR);
        }
        joined.push_str(element);
    }

    if joined.is_empty() {
        joined
    } else {
        clean(&joined)
    }
}

/// Return the extension of the final segment of `path`, including the dot.
///
/// Returns the empty string if the final segment has no dot.
///
/// # Examples
///
/// ```
/// use slashpath::ext;
///
/// assert_eq!(ext("archive.tar.gz"), ".gz");
/// assert_eq!(ext("/a.d/b"), "");
/// assert_eq!(ext("a/b.js/"), "");
/// ```
#[must_use]
pub fn ext(path: &str) -> &str {
    let (_, file) = split(path);
    file.rfind('.').map_or("", |i| &file[i..])
}

/// Return the last segment of `path`, ignoring trailing separators.
///
/// An empty path yields `.` and a path made only of separators yields `/`.
///
/// # Examples
///
/// ```
/// use slashpath::base;
///
/// assert_eq!(base("/a/b/"), "b");
/// assert_eq!(base(""), ".");
/// assert_eq!(base("///"), "/");
/// ```
#[must_use]
pub fn base(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return "/";
    }
    let (_, file) = split(trimmed);
    file
}

/// Return everything but the last segment of `path`, cleaned.
///
/// # Examples
///
/// ```
/// use slashpath::dir;
///
/// assert_eq!(dir("/a/b/c"), "/a/b");
/// assert_eq!(dir("a/b/"), "a/b");
/// assert_eq!(dir("x"), ".");
/// assert_eq!(dir(""), ".");
/// ```
#[must_use]
pub fn dir(path: &str) -> String {
    let (directory, _) = split(path);
    clean(directory)
}

/// Returns true if `path` begins with a separator.
///
/// # Examples
///
/// ```
/// use slashpath::is_abs;
///
/// assert!(is_abs("/x"));
/// assert!(!is_abs("x"));
/// assert!(!is_abs(""));
/// ```
#[must_use]
pub fn is_abs(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}
