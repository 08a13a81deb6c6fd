//! Color handling for claimdraw diagrams
//!
//! This module provides the [`Color`] type which validates CSS color strings
//! with the `DynamicColor` type from the color crate, while keeping the text
//! the user wrote so it can be emitted verbatim into diagram markup.

use std::{fmt, str::FromStr};

use color::DynamicColor;
use serde::Deserialize;

/// A validated CSS color that remembers its source spelling.
///
/// Markup style directives separate properties with `,` and `;`, so colors
/// containing either character (e.g. `rgb(0, 0, 0)`) are rejected. Use hex or
/// named colors instead.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    color: DynamicColor,
    text: String,
}

impl Color {
    /// Create a new `Color` from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use claimdraw_core::color::Color;
    ///
    /// let black = Color::new("#000000").unwrap();
    /// assert_eq!(black.to_string(), "#000000");
    /// assert!(Color::new("rgb(0, 0, 0)").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let text = color_str.trim();
        if text.contains([',', ';']) {
            return Err(format!(
                "invalid color `{color_str}`: separators are not allowed, use a hex or named color"
            ));
        }

        match DynamicColor::from_str(text) {
            Ok(color) => Ok(Self {
                color,
                text: text.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// The value is between 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns `true` if the color has no transparency.
    pub fn is_opaque(&self) -> bool {
        self.alpha() >= 1.0
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Pure black, the drawing color of every stroke and label.
pub fn black() -> Color {
    Color::new("#000000").expect("'#000000' is a valid CSS color")
}

/// Pure white, the background of every node and label.
pub fn white() -> Color {
    Color::new("#ffffff").expect("'#ffffff' is a valid CSS color")
}
