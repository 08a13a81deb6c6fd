//! Example: Rendering a diagram built from the semantic model
//!
//! This example builds a patent diagram directly from semantic model types,
//! without extracting anything from claim text, and prints its Mermaid markup.

use claimdraw::{
    DiagramBuilder,
    semantic::{Category, Component, Diagram, LineStyle, Relationship},
    style::StyleConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building diagram from semantic model...\n");

    // Components are identified by their reference numerals
    let components = vec![
        Component::new(10, "Temperature Sensor", Category::Io),
        Component::new(12, "Controller", Category::Process),
        Component::new(14, "Memory", Category::Storage),
        Component::new(16, "Threshold Comparator", Category::Decision),
        Component::new(18, "Display", Category::Display),
        Component::new(20, "Network", Category::Network),
    ];

    let relationships = vec![
        Relationship::new(10, 12, "Data Flow", LineStyle::Dotted),
        Relationship::new(12, 14, "Storage", LineStyle::Dotted),
        Relationship::new(12, 16, "Control", LineStyle::Solid),
        Relationship::new(16, 18, "Connection", LineStyle::Solid),
        Relationship::new(12, 20, "Communication", LineStyle::Dotted),
    ];

    let diagram = Diagram::new(components, relationships, StyleConfig::default())
        .with_title("PATENT SYSTEM - THERMOSTAT");

    println!(
        "Created diagram with {} components and {} relationships\n",
        diagram.components().len(),
        diagram.relationships().len()
    );

    let builder = DiagramBuilder::default();
    let markup = builder.render_mermaid(&diagram)?;

    println!("{markup}");
    Ok(())
}
