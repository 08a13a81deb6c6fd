//! # Claimdraw Parser
//!
//! Extraction pipeline for patent claim text. This crate turns free-form
//! claim language into the semantic diagram model of `claimdraw-core`.
//!
//! ## Usage
//!
//! ```
//! # use claimdraw_parser::{parse, ExtractConfig, ParseError};
//! # use claimdraw_core::style::StyleConfig;
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "1. A system comprising a processor (12) connected to a memory (14).";
//!
//!     let output = parse(source, &ExtractConfig::default(), &StyleConfig::default())?;
//!     assert_eq!(output.diagram.components().len(), 2);
//!     assert_eq!(output.diagram.relationships().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod assemble;
pub mod classify;
pub mod error;
pub mod extract;
mod lexer;
pub mod relate;
pub mod rules;
mod span;
pub mod text;
mod tokens;

pub use assemble::{Assembler, ParseOutput};
pub use classify::Classifier;
pub use error::{Diagnostic, ErrorCode, ParseError, Severity};
pub use extract::{ComponentMention, ReferenceExtractor};
pub use relate::RelationshipExtractor;
pub use rules::ExtractConfig;
pub use span::Span;
pub use text::ClaimText;

use std::collections::BTreeSet;

use log::{debug, info};

use claimdraw_core::style::StyleConfig;

/// Extract a diagram from patent claim text.
///
/// This is the main entry point of the crate. It runs every stage in order:
///
/// 1. **Tokenize** - Split the text into words, numerals and clause breaks
/// 2. **Extract** - Find `<phrase> (<numeral>)` component mentions
/// 3. **Relate** - Infer relationships from connective phrases
/// 4. **Assemble** - Merge mentions, classify components and drop invalid edges
///
/// Skipped numerals and dropped relationships are returned as warnings in
/// [`ParseOutput::warnings`].
///
/// # Errors
///
/// Returns a [`ParseError`] when the text contains no extractable component.
pub fn parse(
    source: &str,
    config: &ExtractConfig,
    style: &StyleConfig,
) -> Result<ParseOutput, ParseError> {
    info!(bytes = source.len(); "Extracting diagram from claim text");

    // Step 1: Tokenize
    let text = ClaimText::new(source);
    debug!(tokens = text.tokens().len(); "Claim text tokenized");

    // Step 2: Extract
    let mut mentions = Vec::new();
    let mut warnings = Vec::new();
    for item in ReferenceExtractor::new(&text, config).mentions() {
        match item {
            Ok(mention) => mentions.push(mention),
            Err(warning) => warnings.push(warning),
        }
    }
    debug!(mentions = mentions.len(), skipped = warnings.len(); "Mentions extracted");

    // Step 3: Relate
    let known: BTreeSet<u32> = mentions
        .iter()
        .map(ComponentMention::reference_numeral)
        .collect();
    let relationships: Vec<_> =
        RelationshipExtractor::new(&text, config.connectives(), &mentions, &known)
            .relationships()
            .collect();
    debug!(relationships = relationships.len(); "Relationships extracted");

    // Step 4: Assemble
    let classifier = Classifier::new(config.classifier());
    Assembler::new(&classifier, style.clone())
        .with_dedupe(config.dedupe_relationships())
        .with_warnings(warnings)
        .assemble(mentions, relationships)
}
