//! Error types for claimdraw operations.
//!
//! This module provides the main error type [`ClaimdrawError`] which wraps
//! the error conditions that can occur while turning claims into a diagram.

use std::io;

use thiserror::Error;

use claimdraw_parser::error::ParseError;

/// The main error type for claimdraw operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the claim text next to the structured
/// diagnostics, so callers can render the labeled spans against it.
#[derive(Debug, Error)]
pub enum ClaimdrawError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),

    #[error("Metadata error: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("{failed} of {total} claim file(s) failed")]
    Batch { failed: usize, total: usize },
}

impl ClaimdrawError {
    /// Create a new `Parse` error with the associated claim text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
