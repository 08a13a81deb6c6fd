//! Export functionality for claimdraw diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting an assembled diagram into markup. It is the final stage in the
//! claimdraw pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Claim Text
//!     ↓ parse
//! Semantic Model
//!     ↓ export (this module)
//! Diagram Markup
//! ```
//!
//! # Available Backends
//!
//! - [`mermaid`]: Mermaid flowchart output via [`mermaid::MermaidExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`ClaimdrawError::Export`] at the crate boundary.
//!
//! [`ClaimdrawError::Export`]: crate::ClaimdrawError::Export

/// Mermaid export backend.
pub mod mermaid;

use std::fmt;

use claimdraw_core::semantic::{Category, Diagram};

/// Abstraction for diagram export backends.
///
/// Implementors turn a [`Diagram`] into text in a specific markup language.
/// Output must be a pure function of the diagram: exporting the same diagram
/// twice yields byte-identical text.
pub trait Exporter {
    /// Exports a diagram to the backend's markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSymbol`] if a component's category has no
    /// shape in the diagram's symbol table.
    fn export_diagram(&self, diagram: &Diagram) -> Result<String, Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A component category has no registered symbol.
    MissingSymbol(Category),
    /// A formatting failure described by `message`.
    Render(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSymbol(category) => {
                write!(f, "no symbol registered for category {category}")
            }
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Self::Render(err.to_string())
    }
}
