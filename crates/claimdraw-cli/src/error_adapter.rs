//! Bridges claimdraw errors and warnings to miette reports.
//!
//! A [`claimdraw_parser::error::ParseError`] may carry several diagnostics,
//! and a successful parse may return several warnings. Each one becomes its
//! own [`Reportable`] rendered against the claim text; every other
//! [`ClaimdrawError`] becomes a single report without source context.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, SourceSpan};

use claimdraw::ClaimdrawError;
use claimdraw_parser::error::{Diagnostic, Severity};

/// One report miette can render.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parser diagnostic plus the claim text its spans point into.
    Diagnostic { diag: &'a Diagnostic, src: &'a str },
    /// A library error with no source location.
    Error(&'a ClaimdrawError),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic { diag, .. } => f.write_str(diag.message()),
            Reportable::Error(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic { .. } => None,
            Reportable::Error(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic { diag, .. } => diag
                .code()
                .map(|code| Box::new(code) as Box<dyn fmt::Display>),
            Reportable::Error(err) => {
                error_code(err).map(|code| Box::new(code) as Box<dyn fmt::Display>)
            }
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        match self {
            Reportable::Diagnostic { diag, .. } if diag.severity() == Severity::Warning => {
                Some(miette::Severity::Warning)
            }
            _ => Some(miette::Severity::Error),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic { diag, .. } => diag
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
            Reportable::Error(ClaimdrawError::Export(_)) => Some(Box::new(
                "every category needs a symbol; a [style.symbols] table replaces the defaults",
            )),
            Reportable::Error(ClaimdrawError::Batch { .. }) => {
                Some(Box::new("each failed file was reported above"))
            }
            Reportable::Error(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic { src, .. } => Some(src as &dyn miette::SourceCode),
            Reportable::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Reportable::Diagnostic { diag, .. } = self else {
            return None;
        };
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let span = SourceSpan::new(label.span().start().into(), label.span().len());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

fn error_code(err: &ClaimdrawError) -> Option<&'static str> {
    match err {
        ClaimdrawError::Io(_) => Some("claimdraw::io"),
        ClaimdrawError::Parse { .. } => None,
        ClaimdrawError::Config(_) => Some("claimdraw::config"),
        ClaimdrawError::Export(_) => Some("claimdraw::export"),
        ClaimdrawError::Metadata(_) => Some("claimdraw::metadata"),
        ClaimdrawError::Batch { .. } => Some("claimdraw::batch"),
    }
}

/// Convert a [`ClaimdrawError`] into a list of reportable errors.
///
/// [`ClaimdrawError::Parse`] yields one [`Reportable`] per diagnostic; every
/// other variant yields exactly one.
pub fn to_reportables(err: &ClaimdrawError) -> Vec<Reportable<'_>> {
    match err {
        ClaimdrawError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::Diagnostic { diag, src })
            .collect(),
        _ => vec![Reportable::Error(err)],
    }
}

/// Render every reportable of `err` with miette's graphical handler.
pub fn render_error(err: &ClaimdrawError) -> Vec<String> {
    render_all(to_reportables(err))
}

/// Render parse warnings against the claim text they were raised on.
pub fn render_diagnostics(diagnostics: &[Diagnostic], src: &str) -> Vec<String> {
    render_all(
        diagnostics
            .iter()
            .map(|diag| Reportable::Diagnostic { diag, src })
            .collect(),
    )
}

fn render_all(reportables: Vec<Reportable<'_>>) -> Vec<String> {
    let reporter = GraphicalReportHandler::new();
    reportables
        .iter()
        .map(|reportable| {
            let mut writer = String::new();
            if reporter.render_report(&mut writer, reportable).is_err() {
                writer = reportable.to_string();
            }
            writer
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use claimdraw::export;
    use claimdraw_parser::{
        Span,
        error::{ErrorCode, ParseError},
    };

    use super::*;

    #[test]
    fn test_empty_input_is_one_error_report() {
        let diag = Diagnostic::error("no components found in claim text")
            .with_code(ErrorCode::E300)
            .with_label(Span::new(0..5), "here")
            .with_help("number the components");
        let err = ClaimdrawError::new_parse_error(ParseError::from(diag), "hello");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        assert_eq!(reportables[0].to_string(), "no components found in claim text");
        assert!(matches!(reportables[0].severity(), Some(miette::Severity::Error)));
        assert!(reportables[0].source_code().is_some());
    }

    #[test]
    fn test_each_diagnostic_is_reported() {
        let diags = vec![
            Diagnostic::warning("first")
                .with_code(ErrorCode::E100)
                .with_label(Span::new(0..5), "first"),
            Diagnostic::error("second")
                .with_code(ErrorCode::E300)
                .with_label(Span::new(10..15), "second"),
        ];
        let err = ClaimdrawError::new_parse_error(ParseError::new(diags), "source code here...");

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "first");
        assert!(matches!(
            reportables[0].severity(),
            Some(miette::Severity::Warning)
        ));
        assert_eq!(reportables[1].to_string(), "second");
    }

    #[test]
    fn test_config_error_has_code() {
        let err = ClaimdrawError::Config("bad color".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        assert_eq!(reportables[0].to_string(), "Configuration error: bad color");
        assert_eq!(
            reportables[0].code().map(|c| c.to_string()).as_deref(),
            Some("claimdraw::config")
        );
        assert!(reportables[0].labels().is_none());
    }

    #[test]
    fn test_export_error_has_help() {
        let err = ClaimdrawError::Export(export::Error::Render("boom".to_string()));
        assert!(to_reportables(&err)[0].help().is_some());
    }

    #[test]
    fn test_batch_failure_is_not_an_io_error() {
        let err = ClaimdrawError::Batch { failed: 2, total: 5 };
        let reportables = to_reportables(&err);

        assert_eq!(reportables[0].to_string(), "2 of 5 claim file(s) failed");
        assert_eq!(
            reportables[0].code().map(|c| c.to_string()).as_deref(),
            Some("claimdraw::batch")
        );
    }

    #[test]
    fn test_label_primacy_is_kept() {
        let diag = Diagnostic::warning("relationship dropped")
            .with_label(Span::new(0..5), "primary")
            .with_secondary_label(Span::new(10..15), "secondary");
        let reportable = Reportable::Diagnostic {
            diag: &diag,
            src: "some source code",
        };

        let labels: Vec<_> = reportable.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_render_diagnostics_mentions_code() {
        let diag = Diagnostic::warning("reference numeral has no descriptive phrase")
            .with_code(ErrorCode::E100)
            .with_label(Span::new(0..4), "numeral");

        let rendered = render_diagnostics(&[diag], "(12) alone");
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].contains("E100"));
    }
}
