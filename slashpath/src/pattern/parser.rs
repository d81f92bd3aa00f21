//! Glob pattern parsing.
//!
//! A pattern is split into chunks. Each chunk is an optional leading run of
//! `*` followed by the single-character tokens up to the next `*`. The whole
//! pattern is validated here, so matching can never hit a syntax error.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{Error, PatternErrorKind, Result};

/// A single-character matcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Token {
    /// Matches exactly this character.
    Literal(char),
    /// `?`: any character except the separator.
    AnyChar,
    /// `[...]`: a character class.
    Class(CharClass),
}

/// A bracketed character class such as `[a-z_]` or `[^0-9]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CharClass {
    pub(crate) negated: bool,
    /// Inclusive ranges; a single character `c` is stored as `(c, c)`.
    pub(crate) ranges: Vec<(char, char)>,
}

/// A run of tokens, optionally preceded by a star.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Chunk {
    pub(crate) star: bool,
    pub(crate) tokens: Vec<Token>,
}

/// Parse `pattern` into chunks.
///
/// # Errors
///
/// Returns [`Error::PatternSyntax`] for an unterminated or empty class, a
/// misplaced `-` or `]` inside a class, or a trailing backslash.
pub(crate) fn parse(pattern: &str) -> Result<Vec<Chunk>> {
    let mut parser = Parser {
        pattern,
        chars: pattern.char_indices().peekable(),
    };

    let mut chunks = Vec::new();
    while parser.chars.peek().is_some() {
        let mut star = false;
        while parser.chars.next_if(|&(_, c)| c == '*').is_some() {
            star = true;
        }

        let mut tokens = Vec::new();
        while let Some((offset, c)) = parser.chars.next_if(|&(_, c)| c != '*') {
            let token = match c {
                '?' => Token::AnyChar,
                '[' => Token::Class(parser.class(offset)?),
                '\\' => Token::Literal(parser.escaped(offset)?),
                c => Token::Literal(c),
            };
            tokens.push(token);
        }

        chunks.push(Chunk { star, tokens });
    }

    Ok(chunks)
}

struct Parser<'a> {
    pattern: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    fn error(&self, offset: usize, kind: PatternErrorKind) -> Error {
        Error::pattern_syntax(self.pattern, offset, kind)
    }

    /// The character after a backslash at `offset`.
    fn escaped(&mut self, offset: usize) -> Result<char> {
        match self.chars.next() {
            Some((_, c)) => Ok(c),
            None => Err(self.error(offset, PatternErrorKind::DanglingEscape)),
        }
    }

    /// The body of a class whose `[` is at `open`.
    fn class(&mut self, open: usize) -> Result<CharClass> {
        let negated = self.chars.next_if(|&(_, c)| c == '^').is_some();
        let mut ranges = Vec::new();

        loop {
            if !ranges.is_empty() && self.chars.next_if(|&(_, c)| c == ']').is_some() {
                return Ok(CharClass { negated, ranges });
            }

            let lo = self.class_char(open, ranges.is_empty())?;
            let hi = if self.chars.next_if(|&(_, c)| c == '-').is_some() {
                self.class_char(open, false)?
            } else {
                lo
            };
            ranges.push((lo, hi));
        }
    }

    /// One class character, possibly escaped.
    fn class_char(&mut self, open: usize, first: bool) -> Result<char> {
        match self.chars.next() {
            None => Err(self.error(open, PatternErrorKind::UnterminatedClass)),
            Some((offset, ']')) if first => Err(self.error(offset, PatternErrorKind::EmptyClass)),
            Some((offset, '-' | ']')) => Err(self.error(offset, PatternErrorKind::BadRangeBound)),
            Some((offset, '\\')) => self.escaped(offset),
            Some((_, c)) => Ok(c),
        }
    }
}
