//! Lexical operations on slash-separated paths.
//!
//! Everything in this module works on the text of a path alone. There is no
//! filesystem access, no symlink resolution and no notion of a current
//! working directory, so every operation is a pure function of its input.
//!
//! # Key Concepts
//!
//! ## Segments
//!
//! A path is a sequence of segments separated by `/`. Empty segments (from
//! doubled, leading or trailing separators) carry no meaning. The special
//! segments `.` and `..` name the current and parent directory.
//!
//! ## Rooted paths
//!
//! A path that starts with `/` is rooted. Cleaning never lets `..` climb
//! above the root, while a relative path may legitimately start with `..`.
//!
//! ## Cleaning
//!
//! [`clean`] rewrites a path into its shortest lexically equivalent form.
//! [`join`] and [`dir`] clean their results; [`split`], [`base`] and [`ext`]
//! only slice their input.
//!
//! # Examples
//!
//! ```
//! use slashpath::path::{base, clean, dir, join, split};
//!
//! assert_eq!(clean("/a/b/../c/./d/"), "/a/c/d");
//! assert_eq!(split("/a/b/c"), ("/a/b/", "c"));
//! assert_eq!(join(["a", "b", "../c"]), "a/c");
//! assert_eq!(base("/a/b/"), "b");
//! assert_eq!(dir("/a/b/c"), "/a/b");
//! ```

mod clean;
mod elements;
mod segments;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key items
pub use clean::{clean, is_clean};
pub use elements::{base, dir, ext, is_abs, join, split};
pub use segments::{segments, Segments, SEPARATOR};
pub use types::CleanPath;
