//! Relationship extraction from connective phrases.
//!
//! Relationships are only ever inferred from an explicit connective phrase
//! between two mentions of known components in the same clause. Proximity
//! alone never connects anything.

use std::collections::BTreeSet;

use log::debug;

use claimdraw_core::semantic::Relationship;

use crate::{
    extract::ComponentMention,
    rules::{Connective, ConnectiveVocabulary},
    text::ClaimText,
};

#[derive(Debug, Clone)]
struct Pattern<'a> {
    words: Vec<String>,
    connective: &'a Connective,
}

/// Produces directed, labeled relationships between component mentions.
///
/// Every ordered pair of mentions that share a clause is a candidate, the
/// earlier mention first. The words between the two mentions are searched for
/// the first vocabulary entry they contain; without one, the pair yields
/// nothing. In "a processor (12) connected to a memory (14) and a display (16)"
/// the processor is therefore connected to both the memory and the display.
#[derive(Debug, Clone)]
pub struct RelationshipExtractor<'a, 'src> {
    text: &'a ClaimText<'src>,
    patterns: Vec<Pattern<'a>>,
    participants: Vec<&'a ComponentMention>,
}

impl<'a, 'src> RelationshipExtractor<'a, 'src> {
    /// Create an extractor over `mentions`, which must be in surface order.
    ///
    /// Mentions whose numeral is not in `known` are ignored.
    pub fn new(
        text: &'a ClaimText<'src>,
        vocabulary: &'a ConnectiveVocabulary,
        mentions: &'a [ComponentMention],
        known: &BTreeSet<u32>,
    ) -> Self {
        let patterns = vocabulary
            .iter()
            .map(|connective| Pattern {
                words: connective.words(),
                connective,
            })
            .filter(|pattern| !pattern.words.is_empty())
            .collect();

        let participants = mentions
            .iter()
            .filter(|mention| known.contains(&mention.reference_numeral()))
            .collect();

        Self {
            text,
            patterns,
            participants,
        }
    }

    /// Start a new pass over the candidate pairs.
    pub fn relationships(&self) -> Relationships<'_, 'a, 'src> {
        Relationships {
            extractor: self,
            first: 0,
            second: 1,
        }
    }

    fn relate(&self, first: &ComponentMention, second: &ComponentMention) -> Option<Relationship> {
        if first.clause() != second.clause()
            || first.reference_numeral() == second.reference_numeral()
        {
            return None;
        }

        let between = self
            .text
            .words_lowercase(first.tokens().end..second.tokens().start);
        let pattern = self
            .patterns
            .iter()
            .find(|pattern| contains_words(&between, &pattern.words))?;
        let connective = pattern.connective;

        let (source, target) = if connective.is_reversed() {
            (second.reference_numeral(), first.reference_numeral())
        } else {
            (first.reference_numeral(), second.reference_numeral())
        };

        debug!(
            source,
            target,
            phrase = connective.phrase(),
            label = connective.label();
            "Inferred relationship"
        );
        Some(Relationship::new(
            source,
            target,
            connective.label(),
            connective.style(),
        ))
    }
}

/// Lazy iterator over the relationships of one extraction pass.
///
/// Pairs are visited by earlier mention, then by later mention.
#[derive(Debug, Clone)]
pub struct Relationships<'e, 'a, 'src> {
    extractor: &'e RelationshipExtractor<'a, 'src>,
    first: usize,
    second: usize,
}

impl Iterator for Relationships<'_, '_, '_> {
    type Item = Relationship;

    fn next(&mut self) -> Option<Self::Item> {
        let participants = &self.extractor.participants;
        while self.first + 1 < participants.len() {
            let first = participants[self.first];

            // Mentions are in surface order, so the clause never comes back
            if self.second >= participants.len()
                || participants[self.second].clause() != first.clause()
            {
                self.first += 1;
                self.second = self.first + 1;
                continue;
            }

            let second = participants[self.second];
            self.second += 1;

            if let Some(relationship) = self.extractor.relate(first, second) {
                return Some(relationship);
            }
        }
        None
    }
}

/// Returns `true` if `needle` occurs as a contiguous run in `haystack`.
fn contains_words(haystack: &[String], needle: &[String]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
