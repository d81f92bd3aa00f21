//! Shell-style glob matching for slash-separated names.
//!
//! # Pattern syntax
//!
//! | Pattern       | Matches                                                  |
//! |---------------|----------------------------------------------------------|
//! | `*`           | any run of characters, including none, except `/`        |
//! | `?`           | exactly one character except `/`                         |
//! | `[abc]`       | one listed character                                     |
//! | `[^abc]`      | one character not listed                                 |
//! | `[a-c]`       | one character in the inclusive range                     |
//! | `\c`          | the character `c` literally, even `*`, `?`, `[` or `\`   |
//! | `c`           | the character `c` itself                                 |
//!
//! Classes must be non-empty and never match `/`. Inside a class, `-` and
//! `]` must be escaped unless they act as range or class delimiters.
//!
//! A pattern must match the *whole* name. Since neither `*` nor `?` crosses a
//! separator, `*.go` matches `main.go` but not `cmd/main.go`.
//!
//! # Examples
//!
//! ```
//! use slashpath::{match_path, Pattern};
//!
//! assert!(match_path("*.go", "main.go").unwrap());
//! assert!(!match_path("*.go", "a/main.go").unwrap());
//! assert!(match_path("[", "x").is_err());
//!
//! // Compile once to match many names
//! let pattern = Pattern::new("src/*/mod.rs").unwrap();
//! assert!(pattern.matches("src/path/mod.rs"));
//! assert!(!pattern.matches("src/a/b/mod.rs"));
//! ```

mod matcher;
mod parser;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use parser::Chunk;

/// A validated glob pattern.
///
/// Building a `Pattern` checks the entire pattern for syntax errors, so
/// [`Pattern::matches`] cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Pattern {
    source: String,
    chunks: Vec<Chunk>,
}

impl Pattern {
    /// Compile a glob pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PatternSyntax`] if the pattern has an unterminated
    /// or empty character class, a misplaced `-` or `]` inside a class, or a
    /// trailing unescaped backslash.
    ///
    /// # Examples
    ///
    /// ```
    /// use slashpath::{Pattern, PatternErrorKind};
    ///
    /// assert!(Pattern::new("*.[ch]").is_ok());
    ///
    /// let err = Pattern::new("a\\").unwrap_err();
    /// assert_eq!(err.pattern_error_kind(), Some(PatternErrorKind::DanglingEscape));
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        Self::try_from(pattern.to_string())
    }

    /// Returns true if the pattern matches all of `name`.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        matcher::match_chunks(&self.chunks, name)
    }

    /// The pattern as originally written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Pattern {
    type Error = Error;

    fn try_from(pattern: String) -> Result<Self> {
        let chunks = parser::parse(&pattern).map_err(|err| {
            log::debug!("rejected glob pattern: {err}");
            err
        })?;
        Ok(Self {
            source: pattern,
            chunks,
        })
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.source
    }
}

/// Report whether `name` matches the shell glob `pattern`.
///
/// A malformed pattern is an error, never a silent non-match. The whole
/// pattern is checked, even when the name already fails to match earlier.
///
/// # Errors
///
/// Returns [`Error::PatternSyntax`] if `pattern` is malformed.
///
/// # Examples
///
/// ```
/// use slashpath::match_path;
///
/// assert!(match_path("a?c", "abc").unwrap());
/// assert!(!match_path("x*", "abc").unwrap());
/// assert!(match_path("x[", "abc").is_err());
/// ```
pub fn match_path(pattern: &str, name: &str) -> Result<bool> {
    Ok(Pattern::new(pattern)?.matches(name))
}
