//! Claimdraw - patent claim text to patent-style block diagrams.
//!
//! Extraction, classification and Mermaid rendering for patent claims. Claim
//! text goes in, a flowchart with one symbol per numbered component and one
//! labeled edge per recognized connection comes out.

pub mod config;

mod error;
pub mod export;
mod summary;

pub use claimdraw_core::{color, semantic, style};
pub use claimdraw_parser::{Diagnostic, ErrorCode, ParseError, Severity, Span};

pub use error::ClaimdrawError;
pub use summary::Summary;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, mermaid::MermaidExporter};

/// A parsed diagram together with the warnings raised while extracting it.
#[derive(Debug)]
pub struct Parsed {
    pub diagram: semantic::Diagram,
    pub warnings: Vec<Diagnostic>,
}

/// Builder for extracting and rendering claim diagrams.
///
/// This provides an API for processing patent claims through extraction,
/// assembly, and rendering stages. A builder holds only configuration, so one
/// instance can process any number of documents.
///
/// # Examples
///
/// ```rust
/// use claimdraw::{DiagramBuilder, config::AppConfig};
///
/// let source = "1. A system comprising a processor (12) connected to a memory (14).";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Extract the semantic model
/// let parsed = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render it as Mermaid markup
/// let markup = builder.render_mermaid(&parsed.diagram)
///     .expect("Failed to render");
/// assert!(markup.contains("flowchart TB"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
    title: Option<String>,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Extraction rules and style settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            title: None,
        }
    }

    /// Draw `title` above every diagram this builder parses.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Extract a semantic diagram from claim text.
    ///
    /// Skipped numerals and dropped relationships do not fail the parse; they
    /// are returned in [`Parsed::warnings`].
    ///
    /// # Errors
    ///
    /// Returns `ClaimdrawError::Parse` when the text contains no extractable
    /// component.
    pub fn parse(&self, source: &str) -> Result<Parsed, ClaimdrawError> {
        info!("Parsing claim text");

        let output = claimdraw_parser::parse(source, self.config.extract(), self.config.style())
            .map_err(|err| ClaimdrawError::new_parse_error(err, source))?;

        let diagram = match &self.title {
            Some(title) => output.diagram.with_title(title.as_str()),
            None => output.diagram,
        };

        debug!(warnings = output.warnings.len(); "Claim text parsed successfully");
        trace!(diagram:?; "Parsed diagram");

        Ok(Parsed {
            diagram,
            warnings: output.warnings,
        })
    }

    /// Render a semantic diagram to Mermaid markup.
    ///
    /// # Errors
    ///
    /// Returns `ClaimdrawError::Export` when a component's category has no
    /// symbol in the configured symbol table.
    pub fn render_mermaid(&self, diagram: &semantic::Diagram) -> Result<String, ClaimdrawError> {
        let markup = MermaidExporter::new().export_diagram(diagram)?;
        info!("Mermaid rendered successfully");
        Ok(markup)
    }
}
