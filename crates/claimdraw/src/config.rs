//! Configuration types for claimdraw.
//!
//! This module provides the top-level configuration that controls how claim
//! text is read and how the resulting diagram is drawn. All types implement
//! [`serde::Deserialize`], so a configuration can be loaded from TOML with
//! any subset of fields present.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining both sections.
//! - [`ExtractConfig`] - Stop-words, classification rules and connective vocabulary.
//! - [`StyleConfig`] - Font sizes, colors, strokes and the symbol table.
//!
//! # Example
//!
//! ```toml
//! [extract]
//! max_phrase_words = 5
//!
//! [style]
//! node_font_size = 22
//! group_by_category = true
//!
//! [style.symbols]
//! process = "rectangle"
//! storage = "cylinder"
//! ```
//!
//! ```
//! # use claimdraw::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

pub use claimdraw_core::style::StyleConfig;
pub use claimdraw_parser::ExtractConfig;

/// Top-level configuration combining extraction and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Extraction configuration section.
    #[serde(default)]
    extract: ExtractConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `extract` - Rules for reading claim text.
    /// * `style` - Visual styling of the rendered diagram.
    pub fn new(extract: ExtractConfig, style: StyleConfig) -> Self {
        Self { extract, style }
    }

    /// Returns the extraction configuration.
    pub fn extract(&self) -> &ExtractConfig {
        &self.extract
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Check both sections for settings that cannot work.
    ///
    /// # Errors
    ///
    /// Returns a message naming the section and the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.extract
            .validate()
            .map_err(|err| format!("invalid [extract] configuration: {err}"))?;
        self.style
            .validate()
            .map_err(|err| format!("invalid [style] configuration: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use claimdraw_core::{semantic::Category, style::Shape};

    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.extract(), &ExtractConfig::default());
        assert_eq!(config.style(), &StyleConfig::default());
    }

    #[test]
    fn test_sections_are_independent() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            edge_font_size = 28

            [style.symbols]
            process = "subroutine"
            "#,
        )
        .unwrap();

        assert_eq!(config.extract(), &ExtractConfig::default());
        assert_eq!(config.style().edge_font_size(), 28);
        assert_eq!(
            config.style().symbols().shape(Category::Process),
            Some(Shape::Subroutine)
        );
        assert_eq!(config.style().symbols().shape(Category::Storage), None);
    }

    #[test]
    fn test_validate_reports_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [extract]
            max_phrase_words = 0
            "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.starts_with("invalid [extract] configuration"), "{err}");

        let config: AppConfig = toml::from_str(
            r#"
            [style]
            stroke_width = 0
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("invalid [style] configuration"), "{err}");
    }

    #[test]
    fn test_invalid_color_is_rejected_at_load() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [style]
            text_color = "rgb(0, 0, 0)"
            "#,
        );
        assert!(result.is_err());
    }
}
