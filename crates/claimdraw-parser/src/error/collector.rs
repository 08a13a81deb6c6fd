//! Collector for accumulating diagnostics during a pipeline run.
//!
//! Extraction reports every skipped numeral and dropped relationship instead
//! of stopping at the first one. The [`DiagnosticCollector`] gathers them and
//! decides at the end whether the run failed.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics during a pipeline run.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    ///
    /// Warnings are logged as they arrive; an error marks the run as failed.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        } else {
            warn!(code:? = diagnostic.code(); "{}", diagnostic.message());
        }
        self.diagnostics.push(diagnostic);
    }

    /// Take every diagnostic emitted so far, regardless of severity.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Finish collection.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - Otherwise returns the warnings that were emitted.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(self.diagnostics)
        }
    }
}
