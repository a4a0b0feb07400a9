//! Placeholder scanner: finds `${...}` tokens in a template.

use std::sync::LazyLock;

use regex::{Matches, Regex};

use crate::constants::{TOKEN_CLOSE, TOKEN_OPEN};

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^}]*\}").unwrap_or_else(|e| unreachable!("{e}")));

/// A `${...}` token found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The full token text, delimiters included.
    pub text: &'a str,
    /// The text between `${` and `}`.
    pub body: &'a str,
    /// Byte offset of the `$`.
    pub start: usize,
    /// Byte offset one past the closing `}`.
    pub end: usize,
}

/// Lazy iterator over the tokens of a template, left to right.
///
/// A token closes at the first `}` after its `${`, so a `${` inside a body
/// does not nest. An unclosed `${` is plain text.
#[derive(Debug)]
pub struct Tokens<'a> {
    matches: Matches<'static, 'a>,
}

/// Scans `template` for placeholder tokens.
#[must_use]
pub fn scan(template: &str) -> Tokens<'_> {
    Tokens { matches: TOKEN_RE.find_iter(template) }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.matches.next()?;
        let text = found.as_str();
        Some(Token {
            text,
            body: &text[TOKEN_OPEN.len()..text.len() - TOKEN_CLOSE.len_utf8()],
            start: found.start(),
            end: found.end(),
        })
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
