//! Token types for patent claim text.

use crate::span::Span;

/// Lexical classes of claim text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'src> {
    /// A word: letters, digits, hyphens and apostrophes, starting with a letter.
    Word(&'src str),
    /// A parenthesized integer, the digits only: `(12)` → `"12"`.
    Numeral(&'src str),
    /// A bare number such as the `1` in `claim 1`.
    Number(&'src str),
    /// A claim number at the start of a line: `1.` → `"1"`.
    ClaimMarker(&'src str),
    /// Clause-ending punctuation: `;`, `:`, `.`, `!`, `?`.
    Terminator(char),
    Comma,
    /// Any other character.
    Symbol(char),

    // Consumed by the lexer, never emitted
    Whitespace,
    Newline,
}

impl Token<'_> {
    /// Returns the word text if this is a [`Token::Word`].
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(word),
            _ => None,
        }
    }
}

/// A token with its location in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}

impl<'src> std::ops::Deref for PositionedToken<'src> {
    type Target = Token<'src>;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}
