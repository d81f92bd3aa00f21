//! Error types for the slashpath library.
//!
//! Every lexical path operation is total, so the only failure this crate
//! reports is a malformed glob pattern. Errors are built with `thiserror`.

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that may fail with a slashpath error.
///
/// # Examples
///
/// ```
/// use slashpath::{match_path, Result};
///
/// fn is_go_source(name: &str) -> Result<bool> {
///     match_path("*.go", name)
/// }
///
/// assert!(is_go_source("main.go").unwrap());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the slashpath library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A glob pattern could not be parsed.
    #[error("syntax error in pattern {pattern:?} at offset {offset}: {kind}")]
    PatternSyntax {
        /// The offending pattern.
        pattern: String,
        /// Byte offset into the pattern where the problem was detected.
        offset: usize,
        /// What is wrong with the pattern.
        kind: PatternErrorKind,
    },
}

/// The specific way in which a glob pattern is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternErrorKind {
    /// A `[` character class is never closed by `]`.
    UnterminatedClass,
    /// The pattern ends with a `\` that escapes nothing.
    DanglingEscape,
    /// A character class has no items, as in `[]` or `[^]`.
    EmptyClass,
    /// An unescaped `-` or `]` appears where a class character is expected.
    BadRangeBound,
}

impl fmt::Display for PatternErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedClass => write!(f, "unterminated character class"),
            Self::DanglingEscape => write!(f, "trailing unescaped backslash"),
            Self::EmptyClass => write!(f, "empty character class"),
            Self::BadRangeBound => write!(f, "unescaped '-' or ']' in character class"),
        }
    }
}

impl Error {
    /// Builds a pattern syntax error.
    pub(crate) fn pattern_syntax(pattern: &str, offset: usize, kind: PatternErrorKind) -> Self {
        Self::PatternSyntax {
            pattern: pattern.to_string(),
            offset,
            kind,
        }
    }

    /// Returns true if this error describes a malformed glob pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use slashpath::match_path;
    ///
    /// let err = match_path("[", "x").unwrap_err();
    /// assert!(err.is_pattern_syntax());
    /// ```
    #[must_use]
    pub fn is_pattern_syntax(&self) -> bool {
        matches!(self, Self::PatternSyntax { .. })
    }

    /// Returns the pattern error kind, if this is a pattern error.
    #[must_use]
    pub fn pattern_error_kind(&self) -> Option<PatternErrorKind> {
        match self {
            Self::PatternSyntax { kind, .. } => Some(*kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_syntax_error_display() {
        let err = Error::pattern_syntax("a[", 1, PatternErrorKind::UnterminatedClass);
        let msg = err.to_string();
        assert!(msg.starts_with("syntax error in pattern"));
        assert!(msg.contains("\"a[\""));
        assert!(msg.contains("offset 1"));
        assert!(msg.contains("unterminated character class"));
    }

    #[test]
    fn test_pattern_error_kind_display() {
        assert_eq!(
            PatternErrorKind::DanglingEscape.to_string(),
            "trailing unescaped backslash"
        );
        assert_eq!(PatternErrorKind::EmptyClass.to_string(), "empty character class");
        assert_eq!(
            PatternErrorKind::BadRangeBound.to_string(),
            "unescaped '-' or ']' in character class"
        );
    }

    #[test]
    fn test_predicates() {
        let err = Error::pattern_syntax("\\", 0, PatternErrorKind::DanglingEscape);
        assert!(err.is_pattern_syntax());
        assert_eq!(
            err.pattern_error_kind(),
            Some(PatternErrorKind::DanglingEscape)
        );
    }
}
