//! Tokenized claim text with clause and claim boundaries.

use std::ops::Range;

use crate::{
    lexer,
    span::Span,
    tokens::{PositionedToken, Token},
};

/// Claim text split into tokens, each tagged with the clause and claim it
/// belongs to.
///
/// A clause ends at every [`Token::Terminator`] and at every claim marker.
/// Claims are counted from zero; text before the first marker, or text with no
/// markers at all, belongs to claim 0.
#[derive(Debug, Clone)]
pub struct ClaimText<'src> {
    source: &'src str,
    tokens: Vec<PositionedToken<'src>>,
    clauses: Vec<usize>,
    claims: Vec<usize>,
}

impl<'src> ClaimText<'src> {
    /// Tokenize `source` and compute clause and claim boundaries.
    pub fn new(source: &'src str) -> Self {
        let tokens = lexer::tokenize(source);
        let mut clauses = Vec::with_capacity(tokens.len());
        let mut claims = Vec::with_capacity(tokens.len());

        let mut clause = 0;
        let mut claims_seen: usize = 0;
        let mut clause_open = false;

        for positioned in &tokens {
            if matches!(positioned.token, Token::ClaimMarker(_)) {
                claims_seen += 1;
                if clause_open {
                    clause += 1;
                }
            }

            clauses.push(clause);
            claims.push(claims_seen.saturating_sub(1));

            if matches!(positioned.token, Token::Terminator(_)) {
                clause += 1;
                clause_open = false;
            } else {
                clause_open = true;
            }
        }

        Self {
            source,
            tokens,
            clauses,
            claims,
        }
    }

    /// All significant tokens in order.
    pub fn tokens(&self) -> &[PositionedToken<'src>] {
        &self.tokens
    }

    /// Clause index of the token at `idx`.
    pub fn clause_of(&self, idx: usize) -> usize {
        self.clauses[idx]
    }

    /// Zero-based claim index of the token at `idx`.
    pub fn claim_of(&self, idx: usize) -> usize {
        self.claims[idx]
    }

    /// The source text covered by `span`.
    pub fn slice(&self, span: Span) -> &'src str {
        &self.source[span.range()]
    }

    /// Span covering the tokens in `range`, which must be non-empty.
    pub fn span_of(&self, range: Range<usize>) -> Span {
        let first = self.tokens[range.start].span;
        let last = self.tokens[range.end - 1].span;
        first.union(last)
    }

    /// Lowercased words among the tokens in `range`, in order.
    pub fn words_lowercase(&self, range: Range<usize>) -> Vec<String> {
        self.tokens[range]
            .iter()
            .filter_map(|positioned| positioned.as_word())
            .map(str::to_lowercase)
            .collect()
    }
}
