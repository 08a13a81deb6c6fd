//! The ParseError type for wrapping fatal pipeline diagnostics.

use std::fmt;

use crate::error::{Diagnostic, ErrorCode};

/// Error type for the extraction pipeline.
///
/// Wraps one or more diagnostics, at least one of which is an error. Any
/// warnings emitted before the failure are kept alongside it.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if the input held no extractable components.
    pub fn is_empty_input(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.code() == Some(ErrorCode::E300))
    }

    fn first_error(&self) -> Option<&Diagnostic> {
        self.diagnostics
            .iter()
            .find(|diag| diag.severity().is_error())
            .or_else(|| self.diagnostics.first())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.first_error() {
            write!(f, "{}", first)?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_from_diagnostic() {
        let diag = Diagnostic::error("no components found").with_code(ErrorCode::E300);
        let err: ParseError = diag.into();

        assert_eq!(err.diagnostics().len(), 1);
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_parse_error_display_leads_with_error() {
        let err = ParseError::new(vec![
            Diagnostic::warning("numeral skipped"),
            Diagnostic::error("no components found").with_code(ErrorCode::E300),
        ]);

        assert_eq!(
            err.to_string(),
            "error[E300]: no components found (+1 more)"
        );
    }
}
