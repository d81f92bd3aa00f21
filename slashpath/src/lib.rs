#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # slashpath
//!
//! Lexical manipulation and glob matching for slash-separated paths.
//!
//! This library works on paths such as URL paths, archive member names and
//! object-store keys, where `/` is always the separator. It never touches
//! the filesystem and knows nothing about drive letters or backslashes.
//!
//! ## Core Items
//!
//! - [`clean`], [`join`], [`split`], [`dir`], [`base`], [`ext`], [`is_abs`]:
//!   pure functions over path strings
//! - [`CleanPath`]: an owned path that is always in cleaned form
//! - [`match_path`] and [`Pattern`]: shell-style glob matching
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use slashpath::{clean, join, match_path, split};
//!
//! assert_eq!(clean("a/c/b/../k/../h"), "a/c/h");
//! assert_eq!(join(["static", "css", "../js/app.js"]), "static/js/app.js");
//! assert_eq!(split("/a/b/c"), ("/a/b/", "c"));
//! assert!(match_path("*.go", "main.go").unwrap());
//! ```

pub mod error;
pub mod path;
pub mod pattern;

// Re-export key items at crate root for convenience
pub use error::{Error, PatternErrorKind, Result};
pub use path::{base, clean, dir, ext, is_abs, join, segments, split, CleanPath, Segments};
pub use pattern::{match_path, Pattern};
