//! Error and diagnostic system for the claimdraw extraction pipeline.
//!
//! Claim language is messy, so most problems are reported as warnings and
//! extraction carries on with whatever it could recover. Only structurally
//! impossible results (no components at all) are errors.
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, labeled source
//! locations, and help text. Diagnostics accumulate in a
//! [`DiagnosticCollector`]; a failed run returns them wrapped in
//! [`ParseError`], a successful one hands the warnings back to the caller.
//!
//! # Example
//!
//! ```
//! # use claimdraw_parser::error::{Diagnostic, ErrorCode};
//! # use claimdraw_parser::Span;
//!
//! let diag = Diagnostic::warning("reference numeral `(12)` has no descriptive phrase")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(40..44), "no component name precedes this numeral")
//!     .with_help("write the component name directly before the numeral, e.g. `a processor (12)`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
