//! Diagram assembly: merging mentions into components and validating edges.
//!
//! This is the last stage of the pipeline. It receives every extracted
//! mention and relationship and produces a [`Diagram`] in which:
//!
//! - each reference numeral appears on exactly one [`Component`];
//! - every [`Relationship`] connects two distinct, existing components;
//! - components are sorted by numeral and relationships keep extraction order.

use std::collections::{BTreeMap, HashSet};

use log::{debug, info, trace};

use claimdraw_core::{
    semantic::{Component, Diagram, Relationship},
    style::StyleConfig,
};

use crate::{
    classify::Classifier,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    extract::ComponentMention,
};

/// A successfully assembled diagram together with the warnings raised on the way.
#[derive(Debug)]
pub struct ParseOutput {
    pub diagram: Diagram,
    pub warnings: Vec<Diagnostic>,
}

/// Builds a [`Diagram`] from mentions and relationships.
pub struct Assembler<'a> {
    classifier: &'a Classifier,
    style: StyleConfig,
    dedupe: bool,
    collector: DiagnosticCollector,
}

impl<'a> Assembler<'a> {
    pub fn new(classifier: &'a Classifier, style: StyleConfig) -> Self {
        Self {
            classifier,
            style,
            dedupe: true,
            collector: DiagnosticCollector::new(),
        }
    }

    /// Collapse relationships with identical source, target and label (default `true`).
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Carry warnings from earlier stages into the result.
    pub fn with_warnings(mut self, warnings: impl IntoIterator<Item = Diagnostic>) -> Self {
        for warning in warnings {
            self.collector.emit(warning);
        }
        self
    }

    /// Merge mentions and validate relationships into a diagram.
    ///
    /// # Errors
    ///
    /// Fails with `E300` when `mentions` is empty. Dangling and self
    /// relationships are dropped with a warning instead.
    pub fn assemble<M, R>(mut self, mentions: M, relationships: R) -> Result<ParseOutput, ParseError>
    where
        M: IntoIterator<Item = ComponentMention>,
        R: IntoIterator<Item = Relationship>,
    {
        let components = self.merge(mentions);
        if components.is_empty() {
            self.collector.emit(
                Diagnostic::error("no components found in claim text")
                    .with_code(ErrorCode::E300)
                    .with_help(
                        "reference components with a parenthesized numeral, e.g. `a processor (12)`",
                    ),
            );
            return Err(ParseError::new(self.collector.into_diagnostics()));
        }

        let relationships = self.validate(&components, relationships);
        info!(
            components = components.len(),
            relationships = relationships.len();
            "Diagram assembled"
        );

        let diagram = Diagram::new(components.into_values().collect(), relationships, self.style);
        trace!(diagram:?; "Assembled diagram");

        let warnings = self.collector.finish()?;
        Ok(ParseOutput { diagram, warnings })
    }

    /// Collapse mentions by numeral.
    ///
    /// The display name comes from the first mention with the most words.
    fn merge<M>(&self, mentions: M) -> BTreeMap<u32, Component>
    where
        M: IntoIterator<Item = ComponentMention>,
    {
        let mut best: BTreeMap<u32, ComponentMention> = BTreeMap::new();
        for mention in mentions {
            let numeral = mention.reference_numeral();
            let fuller = best
                .get(&numeral)
                .is_none_or(|current| mention.phrase_len() > current.phrase_len());
            if fuller {
                best.insert(numeral, mention);
            }
        }

        best.into_iter()
            .map(|(numeral, mention)| {
                let category = self.classifier.classify(mention.descriptive_phrase());
                let name = title_case(mention.descriptive_phrase());
                debug!(numeral, name = name.as_str(), category:% = category; "Merged component");
                (numeral, Component::new(numeral, name, category))
            })
            .collect()
    }

    /// Drop dangling, self and (optionally) duplicate relationships.
    fn validate<R>(
        &mut self,
        components: &BTreeMap<u32, Component>,
        relationships: R,
    ) -> Vec<Relationship>
    where
        R: IntoIterator<Item = Relationship>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for relationship in relationships {
            let missing: Vec<u32> = [relationship.source(), relationship.target()]
                .into_iter()
                .filter(|numeral| !components.contains_key(numeral))
                .collect();

            if !missing.is_empty() {
                let numerals = missing
                    .iter()
                    .map(|n| format!("({n})"))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.collector.emit(
                    Diagnostic::warning(format!(
                        "relationship `{}` from ({}) to ({}) references unknown component {numerals}",
                        relationship.label(),
                        relationship.source(),
                        relationship.target(),
                    ))
                    .with_code(ErrorCode::E200)
                    .with_help("the relationship was dropped"),
                );
                continue;
            }

            if relationship.is_self_loop() {
                self.collector.emit(
                    Diagnostic::warning(format!(
                        "relationship `{}` connects ({}) to itself",
                        relationship.label(),
                        relationship.source(),
                    ))
                    .with_code(ErrorCode::E201)
                    .with_help("the relationship was dropped"),
                );
                continue;
            }

            if self.dedupe {
                let (source, target, label) = relationship.key();
                if !seen.insert((source, target, label.to_string())) {
                    debug!(source, target, label; "Dropping duplicate relationship");
                    continue;
                }
            }

            kept.push(relationship);
        }

        kept
    }
}

/// Capitalize the first letter of every word and lowercase the rest.
fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use claimdraw_core::semantic::{Category, LineStyle};

    use super::*;
    use crate::{extract::ReferenceExtractor, rules::ExtractConfig, text::ClaimText};

    fn mentions(source: &str) -> Vec<ComponentMention> {
        let text = ClaimText::new(source);
        let config = ExtractConfig::default();
        ReferenceExtractor::new(&text, &config)
            .mentions()
            .filter_map(Result::ok)
            .collect()
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("central PROCESSOR"), "Central Processor");
        assert_eq!(title_case("logic-gate"), "Logic-gate");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_longest_phrase_wins() {
        let classifier = Classifier::default();
        let output = Assembler::new(&classifier, StyleConfig::default())
            .assemble(
                mentions("a processor (12); the central processor (12); the main processor (12)"),
                Vec::new(),
            )
            .unwrap();

        let components = output.diagram.components();
        assert_eq!(components.len(), 1);
        // Ties go to the earliest mention
        assert_eq!(components[0].display_name(), "Central Processor");
        assert_eq!(components[0].category(), Category::Process);
    }

    #[test]
    fn test_components_sorted_by_numeral() {
        let classifier = Classifier::default();
        let output = Assembler::new(&classifier, StyleConfig::default())
            .assemble(mentions("a memory (14); a processor (12); a screen (8)"), Vec::new())
            .unwrap();

        let numerals: Vec<_> = output
            .diagram
            .components()
            .iter()
            .map(Component::reference_numeral)
            .collect();
        assert_eq!(numerals, vec![8, 12, 14]);
    }

    #[test]
    fn test_invalid_relationships_are_dropped_with_warnings() {
        let classifier = Classifier::default();
        let relationships = vec![
            Relationship::new(12, 14, "Connection", LineStyle::Solid),
            Relationship::new(12, 99, "Connection", LineStyle::Solid),
            Relationship::new(14, 14, "Storage", LineStyle::Dotted),
        ];

        let output = Assembler::new(&classifier, StyleConfig::default())
            .assemble(mentions("a processor (12); a memory (14)"), relationships)
            .unwrap();

        assert_eq!(output.diagram.relationships().len(), 1);
        let codes: Vec<_> = output.warnings.iter().map(Diagnostic::code).collect();
        assert_eq!(codes, vec![Some(ErrorCode::E200), Some(ErrorCode::E201)]);
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let classifier = Classifier::default();
        let relationships = || {
            vec![
                Relationship::new(12, 14, "Connection", LineStyle::Solid),
                Relationship::new(14, 12, "Data Flow", LineStyle::Dotted),
                Relationship::new(12, 14, "Connection", LineStyle::Solid),
                Relationship::new(12, 14, "Control", LineStyle::Solid),
            ]
        };

        let deduped = Assembler::new(&classifier, StyleConfig::default())
            .assemble(mentions("a processor (12); a memory (14)"), relationships())
            .unwrap();
        let labels: Vec<_> = deduped
            .diagram
            .relationships()
            .iter()
            .map(Relationship::label)
            .collect();
        assert_eq!(labels, vec!["Connection", "Data Flow", "Control"]);

        let kept = Assembler::new(&classifier, StyleConfig::default())
            .with_dedupe(false)
            .assemble(mentions("a processor (12); a memory (14)"), relationships())
            .unwrap();
        assert_eq!(kept.diagram.relationships().len(), 4);
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let classifier = Classifier::default();
        let err = Assembler::new(&classifier, StyleConfig::default())
            .with_warnings([Diagnostic::warning("numeral skipped").with_code(ErrorCode::E100)])
            .assemble(Vec::new(), Vec::new())
            .unwrap_err();

        assert!(err.is_empty_input());
        // Earlier warnings travel with the error
        assert_eq!(err.diagnostics().len(), 2);
    }
}
