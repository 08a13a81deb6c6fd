//! Diagram element types for the semantic model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of symbol classes a component can be drawn as.
///
/// This is a closed enumeration: adding a category means updating the
/// renderer's symbol table in the same change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Process,
    Storage,
    Decision,
    Io,
    Display,
    Network,
    /// Nothing matched; drawn as a generic process box.
    #[default]
    Default,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Process,
        Category::Storage,
        Category::Decision,
        Category::Io,
        Category::Display,
        Category::Network,
        Category::Default,
    ];

    /// Upper-case name used in markup identifiers and metadata.
    pub fn name(self) -> &'static str {
        match self {
            Category::Process => "PROCESS",
            Category::Storage => "STORAGE",
            Category::Decision => "DECISION",
            Category::Io => "IO",
            Category::Display => "DISPLAY",
            Category::Network => "NETWORK",
            Category::Default => "DEFAULT",
        }
    }

    /// Look up a category by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Line style of a rendered relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dotted,
}

/// A patent component identified by its reference numeral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    reference_numeral: u32,
    display_name: String,
    category: Category,
}

impl Component {
    /// Create a new Component.
    pub fn new(reference_numeral: u32, display_name: impl Into<String>, category: Category) -> Self {
        Self {
            reference_numeral,
            display_name: display_name.into(),
            category,
        }
    }

    /// Get the reference numeral, the component's identity within a diagram.
    pub fn reference_numeral(&self) -> u32 {
        self.reference_numeral
    }

    /// Get the title-cased display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Get the symbol category.
    pub fn category(&self) -> Category {
        self.category
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_name, self.reference_numeral)
    }
}

/// A directed, labeled connection between two components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    source: u32,
    target: u32,
    label: String,
    style: LineStyle,
}

impl Relationship {
    /// Create a new Relationship from `source` to `target`.
    pub fn new(source: u32, target: u32, label: impl Into<String>, style: LineStyle) -> Self {
        Self {
            source,
            target,
            label: label.into(),
            style,
        }
    }

    /// Get the reference numeral of the source component.
    pub fn source(&self) -> u32 {
        self.source
    }

    /// Get the reference numeral of the target component.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Get the relationship label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the line style.
    pub fn style(&self) -> LineStyle {
        self.style
    }

    /// Returns `true` if both ends refer to the same component.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// The `(source, target, label)` triple relationships are deduplicated on.
    pub fn key(&self) -> (u32, u32, &str) {
        (self.source, self.target, &self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_are_unique() {
        let mut names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn test_category_from_name() {
        assert_eq!(Category::from_name("storage"), Some(Category::Storage));
        assert_eq!(Category::from_name(" IO "), Some(Category::Io));
        assert_eq!(Category::from_name("widget"), None);
    }

    #[test]
    fn test_component_display() {
        let component = Component::new(12, "Central Processor", Category::Process);
        assert_eq!(component.to_string(), "Central Processor 12");
    }

    #[test]
    fn test_relationship_self_loop() {
        assert!(Relationship::new(4, 4, "Connection", LineStyle::Solid).is_self_loop());
        assert!(!Relationship::new(4, 6, "Connection", LineStyle::Solid).is_self_loop());
    }
}
