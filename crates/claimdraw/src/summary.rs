//! Serializable summary of an assembled diagram.

use serde::Serialize;

use claimdraw_core::semantic::{Component, Diagram};

/// Component and relationship counts plus the component list of a diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    title: Option<String>,
    component_count: usize,
    relationship_count: usize,
    components: Vec<Component>,
}

impl Summary {
    pub fn from_diagram(diagram: &Diagram) -> Self {
        Self {
            title: diagram.title().map(str::to_string),
            component_count: diagram.components().len(),
            relationship_count: diagram.relationships().len(),
            components: diagram.components().to_vec(),
        }
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    pub fn relationship_count(&self) -> usize {
        self.relationship_count
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }
}
