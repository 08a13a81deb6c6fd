//! The core diagnostic type for the claimdraw error system.

use std::fmt;

use crate::{
    error::{ErrorCode, Label, Severity},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// warning[E100]: reference numeral `(7)` has no descriptive phrase
///   --> claims.txt:3:24
///    |
///  3 | wherein the signal of (7) is filtered;
///    |                       ^^^ no component name precedes this numeral
///    |
///    = help: write the component name directly before the numeral
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use claimdraw_parser::error::{Diagnostic, ErrorCode};
    ///
    /// let diag = Diagnostic::error("no components found in claim text")
    ///     .with_code(ErrorCode::E300)
    ///     .with_help("reference components with a numeral, e.g. `a processor (12)`");
    /// assert!(diag.severity().is_error());
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "warning[E100]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::warning("reference numeral `(7)` has no descriptive phrase")
            .with_code(ErrorCode::E100)
            .with_label(Span::new(22..25), "no component name precedes this numeral")
            .with_secondary_label(Span::new(0..5), "clause starts here")
            .with_help("write the component name directly before the numeral");

        assert!(diag.severity().is_warning());
        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(!diag.labels()[1].is_primary());
        assert_eq!(
            diag.help(),
            Some("write the component name directly before the numeral")
        );
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("no components found in claim text").with_code(ErrorCode::E300);

        assert_eq!(
            diag.to_string(),
            "error[E300]: no components found in claim text"
        );
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::warning("relationship dropped");

        assert_eq!(diag.to_string(), "warning: relationship dropped");
    }
}
