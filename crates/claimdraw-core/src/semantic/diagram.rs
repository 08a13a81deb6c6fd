//! The assembled diagram.

use crate::{
    semantic::{Component, Relationship},
    style::StyleConfig,
};

/// A patent system diagram: components, relationships, and the style they
/// are drawn with.
///
/// A diagram is built once per input document and owns its elements.
/// Components are kept in ascending reference-numeral order; relationships
/// keep the order they were extracted in.
#[derive(Debug, Clone)]
pub struct Diagram {
    components: Vec<Component>,
    relationships: Vec<Relationship>,
    style: StyleConfig,
    title: Option<String>,
}

impl Diagram {
    /// Create a new diagram.
    ///
    /// Components are sorted by reference numeral; callers are responsible for
    /// numerals being unique.
    pub fn new(
        mut components: Vec<Component>,
        relationships: Vec<Relationship>,
        style: StyleConfig,
    ) -> Self {
        components.sort_by_key(Component::reference_numeral);
        Self {
            components,
            relationships,
            style,
            title: None,
        }
    }

    /// Attach a title drawn above the diagram.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Components in ascending reference-numeral order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Relationships in extraction order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// The style this diagram is drawn with.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// The diagram title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Look up a component by reference numeral.
    pub fn component(&self, reference_numeral: u32) -> Option<&Component> {
        self.components
            .binary_search_by_key(&reference_numeral, Component::reference_numeral)
            .ok()
            .map(|idx| &self.components[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::{Category, LineStyle};

    #[test]
    fn test_components_sorted_by_numeral() {
        let diagram = Diagram::new(
            vec![
                Component::new(20, "Display", Category::Display),
                Component::new(10, "Processor", Category::Process),
            ],
            vec![Relationship::new(20, 10, "Connection", LineStyle::Solid)],
            StyleConfig::default(),
        );

        let numerals: Vec<_> = diagram
            .components()
            .iter()
            .map(Component::reference_numeral)
            .collect();
        assert_eq!(numerals, vec![10, 20]);
        assert_eq!(diagram.component(20).unwrap().display_name(), "Display");
        assert!(diagram.component(30).is_none());
        assert!(diagram.title().is_none());
    }

    #[test]
    fn test_with_title() {
        let diagram = Diagram::new(vec![], vec![], StyleConfig::default()).with_title("FIG. 1");
        assert_eq!(diagram.title(), Some("FIG. 1"));
    }
}
