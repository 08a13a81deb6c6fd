//! Lexical analyzer for patent claim text.
//!
//! The lexer converts claim text into a stream of [`Token`]s. Only numerals in
//! parentheses can become reference numerals, so they get their own token
//! class, distinct from bare numbers like the `1` in `claim 1`.
//!
//! Lexing is total: any character that starts no other token becomes a
//! [`Token::Symbol`], so [`tokenize`] never fails. Whitespace and newlines are
//! consumed but not emitted.

use winnow::{
    Parser as _,
    ascii::{digit1, space0},
    combinator::{alt, delimited, opt, peek, terminated},
    error::ModalResult,
    stream::{LocatingSlice, Location, Stream},
    token::{any, one_of, take_while},
};

use crate::{
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O>;

/// Parse a reference numeral: `(12)`, tolerating inner spaces `( 12 )`.
fn numeral<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    delimited(('(', space0), digit1, (space0, ')'))
        .map(Token::Numeral)
        .parse_next(input)
}

/// Parse a claim number at the start of a line: `1.` or `1)` followed by whitespace.
fn claim_marker<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    terminated(
        digit1,
        (one_of(['.', ')']), peek(one_of(|c: char| c.is_whitespace()))),
    )
    .map(Token::ClaimMarker)
    .parse_next(input)
}

/// Parse a bare integer or decimal number.
fn number<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    (digit1, opt(('.', digit1)))
        .take()
        .map(Token::Number)
        .parse_next(input)
}

/// Parse a word, allowing inner hyphens and apostrophes (`logic-gate`, `user's`).
fn word<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| {
        c.is_alphanumeric() || c == '-' || c == '\'' || c == '\u{2019}'
    })
    .verify(|s: &str| s.chars().next().is_some_and(char::is_alphabetic))
    .map(Token::Word)
    .parse_next(input)
}

fn terminator<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    one_of([';', ':', '.', '!', '?'])
        .map(Token::Terminator)
        .parse_next(input)
}

fn comma<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    ','.value(Token::Comma).parse_next(input)
}

/// Parse whitespace (spaces, tabs, carriage returns, but not newlines)
fn whitespace<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., |c: char| c.is_whitespace() && c != '\n')
        .value(Token::Whitespace)
        .parse_next(input)
}

fn newline<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    '\n'.value(Token::Newline).parse_next(input)
}

/// Catch-all for any other character.
fn symbol<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    any.map(Token::Symbol).parse_next(input)
}

/// Parse any token that may appear anywhere in a line.
fn inline_token<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        numeral,    // Must come before symbol '('
        number,     // Must come before word
        word,       // Must come before symbol
        terminator, // Must come before symbol
        comma,
        newline, // Must come before whitespace
        whitespace,
        symbol,
    ))
    .parse_next(input)
}

/// Parse a single token with position tracking.
///
/// Claim markers are only recognized at the start of a line.
fn positioned_token<'a>(
    input: &mut Input<'a>,
    at_line_start: bool,
) -> IResult<PositionedToken<'a>> {
    let start_pos = input.current_token_start();

    let token = if at_line_start {
        alt((claim_marker, inline_token)).parse_next(input)?
    } else {
        inline_token(input)?
    };

    let end_pos = input.current_token_start();
    let span = Span::new(start_pos..end_pos);

    Ok(PositionedToken::new(token, span))
}

/// Lexer that accumulates significant tokens.
struct Lexer<'a> {
    tokens: Vec<PositionedToken<'a>>,
    at_line_start: bool,
}

impl<'a> Lexer<'a> {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            at_line_start: true,
        }
    }

    fn tokenize(&mut self, mut input: Input<'a>) {
        while !input.is_empty() {
            match positioned_token(&mut input, self.at_line_start) {
                Ok(positioned) => match positioned.token {
                    // Indentation keeps us at the start of the line
                    Token::Whitespace => {}
                    Token::Newline => self.at_line_start = true,
                    _ => {
                        self.at_line_start = false;
                        self.tokens.push(positioned);
                    }
                },
                Err(_) => {
                    // Unreachable in practice: `symbol` accepts any character
                    input.next_token();
                }
            }
        }
    }

    fn finish(self) -> Vec<PositionedToken<'a>> {
        self.tokens
    }
}

/// Split claim text into significant tokens.
pub fn tokenize(input: &str) -> Vec<PositionedToken<'_>> {
    let mut lexer = Lexer::new();
    lexer.tokenize(LocatingSlice::new(input));
    lexer.finish()
}
