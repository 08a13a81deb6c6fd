//! Reference extraction: finding `<descriptive phrase> (<numeral>)` mentions.
//!
//! The extractor walks the token stream of a [`ClaimText`] and turns every
//! parenthesized numeral into either a [`ComponentMention`] or a warning
//! [`Diagnostic`]. Nothing is collected up front: [`ReferenceExtractor::mentions`]
//! hands out a fresh lazy iterator on each call.
//!
//! # Phrase recovery
//!
//! ```text
//! data received from a temperature sensor (16)
//!      └───── window (4 words) ─────┘
//!                     trimmed suffix: "temperature sensor"
//! ```
//!
//! At most `max_phrase_words` words directly before the numeral form the
//! window. Trailing stop-words are dropped, then the phrase is the longest
//! run at the end of the window that contains no stop-word.

use std::ops::Range;

use log::{debug, trace};

use crate::{
    error::{Diagnostic, ErrorCode},
    rules::ExtractConfig,
    span::Span,
    text::ClaimText,
    tokens::Token,
};

/// Head words that mark a numeral as a cross-reference rather than a component.
const CROSS_REFERENCE_WORDS: &[&str] = &["claim", "claims", "fig", "figs", "figure", "figures"];

/// First numeral handed out when inferring unnumbered components.
const FIRST_INFERRED_NUMERAL: u32 = 10;

/// One occurrence of a component in the claim text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMention {
    raw_text: String,
    reference_numeral: u32,
    descriptive_phrase: String,
    source_claim_index: usize,
    span: Span,
    tokens: Range<usize>,
    clause: usize,
}

impl ComponentMention {
    /// The matched source text, phrase and numeral together.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn reference_numeral(&self) -> u32 {
        self.reference_numeral
    }

    /// The component name as written, stop-words removed.
    pub fn descriptive_phrase(&self) -> &str {
        &self.descriptive_phrase
    }

    /// Number of words in the descriptive phrase.
    pub fn phrase_len(&self) -> usize {
        self.descriptive_phrase.split_whitespace().count()
    }

    /// Zero-based index of the claim this mention occurs in.
    pub fn source_claim_index(&self) -> usize {
        self.source_claim_index
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Indices of the mention's tokens in the [`ClaimText`] token stream.
    pub fn tokens(&self) -> Range<usize> {
        self.tokens.clone()
    }

    /// Zero-based index of the clause this mention occurs in.
    pub fn clause(&self) -> usize {
        self.clause
    }

    fn from_tokens(
        text: &ClaimText<'_>,
        tokens: Range<usize>,
        phrase: Range<usize>,
        reference_numeral: u32,
    ) -> Self {
        let anchor = tokens.end - 1;
        let span = text.span_of(tokens.clone());
        let descriptive_phrase = text.tokens()[phrase]
            .iter()
            .filter_map(|positioned| positioned.as_word())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            raw_text: text.slice(span).to_string(),
            reference_numeral,
            descriptive_phrase,
            source_claim_index: text.claim_of(anchor),
            span,
            tokens,
            clause: text.clause_of(anchor),
        }
    }
}

/// Produces component mentions from tokenized claim text.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceExtractor<'a, 'src> {
    text: &'a ClaimText<'src>,
    config: &'a ExtractConfig,
}

impl<'a, 'src> ReferenceExtractor<'a, 'src> {
    pub fn new(text: &'a ClaimText<'src>, config: &'a ExtractConfig) -> Self {
        Self { text, config }
    }

    /// Start a new pass over the text.
    ///
    /// Each call returns an independent iterator positioned at the start of
    /// the text. When inference of unnumbered components is enabled and the
    /// text has no numbered components, the iterator yields inferred mentions
    /// instead.
    pub fn mentions(&self) -> Mentions<'a, 'src> {
        let numbered = Mentions {
            text: self.text,
            config: self.config,
            state: State::Numbered { pos: 0 },
        };

        if !self.config.infer_unnumbered() || numbered.clone().any(|item| item.is_ok()) {
            return numbered;
        }

        let inferred = infer_unnumbered(self.text, self.config);
        debug!(count = inferred.len(); "No numbered components, inferred from trigger words");
        Mentions {
            text: self.text,
            config: self.config,
            state: State::Inferred(inferred.into_iter()),
        }
    }
}

#[derive(Debug, Clone)]
enum State {
    Numbered { pos: usize },
    Inferred(std::vec::IntoIter<ComponentMention>),
}

/// Lazy iterator over the mentions of one extraction pass.
///
/// `Err` items are warnings for numerals that could not become components.
#[derive(Debug, Clone)]
pub struct Mentions<'a, 'src> {
    text: &'a ClaimText<'src>,
    config: &'a ExtractConfig,
    state: State,
}

impl Iterator for Mentions<'_, '_> {
    type Item = Result<ComponentMention, Diagnostic>;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = match &mut self.state {
            State::Inferred(mentions) => return mentions.next().map(Ok),
            State::Numbered { pos } => pos,
        };

        let tokens = self.text.tokens();
        while *pos < tokens.len() {
            let idx = *pos;
            *pos += 1;

            if let Token::Numeral(digits) = tokens[idx].token {
                if let Some(item) = numbered_mention(self.text, self.config, idx, digits) {
                    return Some(item);
                }
            }
        }
        None
    }
}

/// What the numeral token at some index turns out to be.
enum Candidate {
    CrossReference,
    Unnamed,
    OutOfRange,
    Mention(ComponentMention),
}

/// Build the mention for the numeral token at `idx`.
///
/// Returns `None` for cross-references, which are neither mentions nor warnings.
fn numbered_mention(
    text: &ClaimText<'_>,
    config: &ExtractConfig,
    idx: usize,
    digits: &str,
) -> Option<Result<ComponentMention, Diagnostic>> {
    let numeral_span = text.tokens()[idx].span;

    match candidate(text, config, idx, digits) {
        Candidate::CrossReference => None,
        Candidate::Mention(mention) => {
            trace!(mention:?; "Extracted mention");
            Some(Ok(mention))
        }
        Candidate::Unnamed => {
            let mut diag = Diagnostic::warning(format!(
                "reference numeral `({digits})` has no descriptive phrase"
            ))
            .with_code(ErrorCode::E100)
            .with_label(numeral_span, "no component name precedes this numeral");
            if let Some(named) = named_elsewhere(text, config, idx, digits) {
                diag = diag.with_secondary_label(
                    named.span(),
                    format!("named `{}` here", named.descriptive_phrase()),
                );
            }
            Some(Err(diag.with_help(
                "write the component name directly before the numeral, e.g. `a processor (12)`",
            )))
        }
        Candidate::OutOfRange => Some(Err(Diagnostic::warning(format!(
            "reference numeral `({digits})` is out of range"
        ))
        .with_code(ErrorCode::E101)
        .with_label(numeral_span, "numeral too large")
        .with_help(format!("reference numerals must not exceed {}", u32::MAX)))),
    }
}

/// The first other occurrence of `digits` that does carry a component name.
fn named_elsewhere(
    text: &ClaimText<'_>,
    config: &ExtractConfig,
    idx: usize,
    digits: &str,
) -> Option<ComponentMention> {
    text.tokens()
        .iter()
        .enumerate()
        .filter(|(other, positioned)| {
            *other != idx && positioned.token == Token::Numeral(digits)
        })
        .find_map(|(other, _)| match candidate(text, config, other, digits) {
            Candidate::Mention(mention) => Some(mention),
            _ => None,
        })
}

fn candidate(text: &ClaimText<'_>, config: &ExtractConfig, idx: usize, digits: &str) -> Candidate {
    let tokens = text.tokens();

    let mut window_start = idx;
    while window_start > 0
        && idx - window_start < config.max_phrase_words()
        && tokens[window_start - 1].as_word().is_some()
    {
        window_start -= 1;
    }

    let is_stop = |i: usize| tokens[i].as_word().is_none_or(|word| config.is_stop_word(word));

    let mut phrase_end = idx;
    while phrase_end > window_start && is_stop(phrase_end - 1) {
        phrase_end -= 1;
    }
    let mut phrase_start = phrase_end;
    while phrase_start > window_start && !is_stop(phrase_start - 1) {
        phrase_start -= 1;
    }

    let head = (phrase_start < phrase_end)
        .then(|| tokens[phrase_end - 1].as_word())
        .flatten();
    if let Some(head) = head.filter(|head| {
        CROSS_REFERENCE_WORDS
            .iter()
            .any(|word| word.eq_ignore_ascii_case(head))
    }) {
        debug!(head, numeral = digits; "Skipping cross-reference numeral");
        return Candidate::CrossReference;
    }

    let noun_like = tokens[phrase_start..phrase_end].iter().any(|positioned| {
        positioned
            .as_word()
            .is_some_and(|word| word.chars().filter(|c| c.is_alphabetic()).count() >= 2)
    });
    if !noun_like {
        return Candidate::Unnamed;
    }

    match digits.parse::<u32>() {
        Ok(reference_numeral) => Candidate::Mention(ComponentMention::from_tokens(
            text,
            phrase_start..idx + 1,
            phrase_start..phrase_end,
            reference_numeral,
        )),
        Err(_) => Candidate::OutOfRange,
    }
}

/// Number every whole-word trigger occurrence, one numeral per distinct trigger.
///
/// Triggers are visited in classifier priority order. A token already claimed
/// by an earlier trigger is never claimed again. The result is in surface order.
fn infer_unnumbered(text: &ClaimText<'_>, config: &ExtractConfig) -> Vec<ComponentMention> {
    let tokens = text.tokens();
    let mut claimed = vec![false; tokens.len()];
    let mut mentions = Vec::new();
    let mut next_numeral = FIRST_INFERRED_NUMERAL;

    for rule in config.classifier().iter() {
        for trigger in rule.triggers() {
            let words: Vec<String> = trigger.split_whitespace().map(str::to_lowercase).collect();
            if words.is_empty() || words.len() > tokens.len() {
                continue;
            }

            let mut found = false;
            for start in 0..=tokens.len() - words.len() {
                let range = start..start + words.len();
                let matches = tokens[range.clone()].iter().zip(&words).all(|(positioned, word)| {
                    positioned
                        .as_word()
                        .is_some_and(|token| token.to_lowercase() == *word)
                });
                if !matches || claimed[range.clone()].iter().any(|&taken| taken) {
                    continue;
                }

                claimed[range.clone()].fill(true);
                mentions.push(ComponentMention::from_tokens(
                    text,
                    range.clone(),
                    range,
                    next_numeral,
                ));
                found = true;
            }

            if found {
                next_numeral += 2;
            }
        }
    }

    mentions.sort_by_key(|mention| mention.tokens.start);
    mentions
}
