//! Splits text into maximal runs of separator and non-separator characters.

use std::iter::FusedIterator;

use crate::separators::SeparatorSet;

/// Whether a token is made of word characters or separator characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of non-separator characters.
    Word,
    /// A run of separator characters.
    Separator,
}

/// A maximal homogeneous slice of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Borrowed token text.
    pub text: &'a str,
    /// Byte offset of the token within the tokenized text.
    pub offset: usize,
    /// Separator membership shared by every character of the token.
    pub kind: TokenKind,
}

impl Token<'_> {
    /// Returns `true` for word tokens.
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Returns the word or separator run of `text` that starts at byte offset `position`.
///
/// The run is homogeneous with respect to membership in `separators` and cannot be
/// extended without crossing a membership boundary or the end of `text`.
///
/// Returns `None` when `position` is out of bounds or not on a character boundary.
#[must_use]
pub fn next_word_or_separator<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Option<&'a str> {
    if position >= text.len() || !text.is_char_boundary(position) {
        return None;
    }
    let rest = &text[position..];
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;
    let kind = separators.contains(first);
    let end = chars
        .find(|&(_, ch)| separators.contains(ch) != kind)
        .map_or(rest.len(), |(idx, _)| idx);
    Some(&rest[..end])
}

/// Lazily partitions `text` into consecutive [`Token`]s.
///
/// Concatenating every yielded token reproduces `text` exactly.
pub fn tokenize<'a>(text: &'a str, separators: &'a SeparatorSet) -> Tokens<'a> {
    Tokens {
        text,
        position: 0,
        separators,
    }
}

/// Iterates over the word tokens of `text`, skipping separator runs.
pub fn words<'a>(text: &'a str, separators: &'a SeparatorSet) -> impl Iterator<Item = &'a str> {
    tokenize(text, separators)
        .filter(Token::is_word)
        .map(|token| token.text)
}

/// Iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    position: usize,
    separators: &'a SeparatorSet,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let run = next_word_or_separator(self.text, self.position, self.separators)?;
        let offset = self.position;
        self.position += run.len();
        let leading = run.chars().next()?;
        let kind = if self.separators.contains(leading) {
            TokenKind::Separator
        } else {
            TokenKind::Word
        };
        Some(Token {
            text: run,
            offset,
            kind,
        })
    }
}

impl FusedIterator for Tokens<'_> {}
