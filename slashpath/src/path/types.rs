//! Owned path type that is always in cleaned form.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::clean::clean;
use super::elements::{base, dir, ext, is_abs, join};
use super::segments::{segments, Segments};

/// A slash-separated path that has been cleaned.
///
/// Every constructor runs [`clean`], so the wrapped string never contains
/// doubled separators, `.` segments, reducible `..` segments or a trailing
/// separator (except for the root itself), and is never empty.
///
/// # Examples
///
/// ```
/// use slashpath::CleanPath;
///
/// let path = CleanPath::new("/srv//www/./static/../index.html");
/// assert_eq!(path.as_str(), "/srv/www/index.html");
/// assert_eq!(path.base(), "index.html");
/// assert_eq!(path.ext(), ".html");
/// assert_eq!(path.parent().as_str(), "/srv/www");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
pub struct CleanPath {
    inner: String,
}

impl CleanPath {
    /// Create a clean path from any path string.
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            inner: clean(path),
        }
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Returns true if the path is rooted.
    #[must_use]
    pub fn is_abs(&self) -> bool {
        is_abs(&self.inner)
    }

    /// The last segment of the path.
    ///
    /// For the root this is `/`, and for the current directory `.`.
    #[must_use]
    pub fn base(&self) -> &str {
        base(&self.inner)
    }

    /// The extension of the last segment, including the dot.
    #[must_use]
    pub fn ext(&self) -> &str {
        ext(&self.inner)
    }

    /// The path with its last segment removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use slashpath::CleanPath;
    ///
    /// assert_eq!(CleanPath::new("a/b").parent().as_str(), "a");
    /// assert_eq!(CleanPath::new("a").parent().as_str(), ".");
    /// assert_eq!(CleanPath::new("/").parent().as_str(), "/");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        Self {
            inner: dir(&self.inner),
        }
    }

    /// Append `other` to this path and clean the result.
    ///
    /// An empty `other` leaves the path unchanged. A rooted `other` is still
    /// appended, not substituted.
    ///
    /// # Examples
    ///
    /// ```
    /// use slashpath::CleanPath;
    ///
    /// let root = CleanPath::new("/var/www");
    /// assert_eq!(root.join("../log").as_str(), "/var/log");
    /// assert_eq!(root.join("/index.html").as_str(), "/var/www/index.html");
    /// ```
    #[must_use]
    pub fn join(&self, other: &str) -> Self {
        Self {
            inner: join([self.inner.as_str(), other]),
        }
    }

    /// Iterate over the segments of the path.
    ///
    /// The root and the current directory have no segments.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        if self.inner == "." {
            segments("")
        } else {
            segments(&self.inner)
        }
    }
}

impl Default for CleanPath {
    fn default() -> Self {
        Self {
            inner: ".".to_string(),
        }
    }
}

impl fmt::Display for CleanPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl AsRef<str> for CleanPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for CleanPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for CleanPath {
    fn from(path: String) -> Self {
        Self::new(&path)
    }
}

impl From<CleanPath> for String {
    fn from(path: CleanPath) -> Self {
        path.inner
    }
}

impl FromStr for CleanPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl PartialEq<str> for CleanPath {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for CleanPath {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

impl<'a> IntoIterator for &'a CleanPath {
    type Item = &'a str;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments()
    }
}
