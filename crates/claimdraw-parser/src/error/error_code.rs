//! Error codes for the claimdraw diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Reference extraction
//! - `E2xx` - Relationship validation
//! - `E3xx` - Diagram assembly

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Reference Extraction (E1xx)
    // =========================================================================
    /// Reference numeral without a descriptive phrase.
    ///
    /// A parenthesized numeral was found, but no component name could be
    /// recovered from the words before it.
    E100,

    /// Reference numeral out of range.
    ///
    /// The numeral does not fit in an unsigned 32-bit integer.
    E101,

    // =========================================================================
    // Relationship Validation (E2xx)
    // =========================================================================
    /// Dangling relationship.
    ///
    /// A relationship names a reference numeral that no component carries.
    E200,

    /// Self relationship.
    ///
    /// A relationship connects a component to itself.
    E201,

    // =========================================================================
    // Diagram Assembly (E3xx)
    // =========================================================================
    /// Empty input.
    ///
    /// The claim text contains no extractable components.
    E300,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E300 => "E300",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "numeral without descriptive phrase",
            ErrorCode::E101 => "numeral out of range",
            ErrorCode::E200 => "dangling relationship",
            ErrorCode::E201 => "self relationship",
            ErrorCode::E300 => "no components found",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E200.to_string(), "E200");
        assert_eq!(ErrorCode::E300.to_string(), "E300");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(
            ErrorCode::E100.description(),
            "numeral without descriptive phrase"
        );
        assert_eq!(ErrorCode::E300.description(), "no components found");
    }
}
