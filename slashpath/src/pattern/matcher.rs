//! Matching parsed glob chunks against a name.

use super::parser::{CharClass, Chunk, Token};
use crate::path::SEPARATOR;

impl CharClass {
    fn matches(&self, c: char) -> bool {
        if c == SEPARATOR {
            return false;
        }
        let listed = self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
        listed != self.negated
    }
}

impl Token {
    fn matches(&self, c: char) -> bool {
        match self {
            Self::Literal(literal) => *literal == c,
            Self::AnyChar => c != SEPARATOR,
            Self::Class(class) => class.matches(c),
        }
    }
}

/// Match `tokens` against the start of `name`, returning what is left.
fn match_tokens<'a>(tokens: &[Token], name: &'a str) -> Option<&'a str> {
    let mut rest = name;
    for token in tokens {
        let mut chars = rest.chars();
        let c = chars.next()?;
        if !token.matches(c) {
            return None;
        }
        rest = chars.as_str();
    }
    Some(rest)
}

/// Returns true if `chunks` match the whole of `name`.
///
/// Each starred chunk is placed at the leftmost position where it matches,
/// skipping only non-separator characters. The final chunk must also
/// consume the rest of the name.
pub(crate) fn match_chunks(chunks: &[Chunk], name: &str) -> bool {
    let mut name = name;

    'chunks: for (index, chunk) in chunks.iter().enumerate() {
        let last = index + 1 == chunks.len();

        if chunk.star && chunk.tokens.is_empty() {
            // Trailing star swallows the rest of the segment.
            return !name.contains(SEPARATOR);
        }

        if let Some(rest) = match_tokens(&chunk.tokens, name) {
            if rest.is_empty() || !last {
                name = rest;
                continue;
            }
        }

        if chunk.star {
            for (i, c) in name.char_indices() {
                if c == SEPARATOR {
                    break;
                }
                let Some(rest) = match_tokens(&chunk.tokens, &name[i + c.len_utf8()..]) else {
                    continue;
                };
                if last && !rest.is_empty() {
                    continue;
                }
                name = rest;
                continue 'chunks;
            }
        }

        return false;
    }

    name.is_empty()
}
