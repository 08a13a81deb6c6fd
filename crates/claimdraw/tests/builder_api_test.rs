//! Integration tests for the DiagramBuilder API

use claimdraw::{
    ClaimdrawError, DiagramBuilder, ErrorCode,
    config::AppConfig,
    semantic::{Category, Component, Diagram, LineStyle, Relationship},
    style::{Shape, StyleConfig, SymbolTable},
};
use proptest::prelude::*;

const CLAIMS: &str = "\
1. A data processing system, comprising:
   a processor (12) configured to receive input data;
   a database (14) operatively connected to the processor (12); and
   a display (16) in communication with the processor (12).
";

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_parse_and_render() {
    let builder = DiagramBuilder::default();
    let parsed = builder.parse(CLAIMS).expect("Failed to parse claims");

    assert_eq!(parsed.diagram.components().len(), 3);
    assert_eq!(parsed.diagram.relationships().len(), 2);
    assert!(parsed.warnings.is_empty());

    let markup = builder
        .render_mermaid(&parsed.diagram)
        .expect("Failed to render diagram");

    assert!(markup.starts_with("%%{init:"));
    assert!(markup.contains("flowchart TB\n"));
    assert!(markup.contains("COMP12[\"Processor 12\"]"));
    assert!(markup.contains("COMP14[(\"Database 14\")]"));
    assert!(markup.contains("COMP16[/\"Display 16\"/]"));
    assert!(markup.contains("COMP14 -->|"));
    assert!(markup.contains("COMP16 -.->|"));
    assert!(markup.contains("class COMP12,COMP14,COMP16 default"));
    assert!(!markup.contains("TITLE"));
}

#[test]
fn test_title_is_rendered() {
    let builder = DiagramBuilder::default().with_title("PATENT SYSTEM - DEMO");
    let parsed = builder.parse(CLAIMS).expect("Failed to parse claims");
    assert_eq!(parsed.diagram.title(), Some("PATENT SYSTEM - DEMO"));

    let markup = builder.render_mermaid(&parsed.diagram).unwrap();
    assert!(markup.contains("    TITLE[\"PATENT SYSTEM - DEMO\"]\n"));
}

#[test]
fn test_empty_input_returns_parse_error() {
    let builder = DiagramBuilder::default();
    let result = builder.parse("2. The system of claim 1, wherein the system is portable.");

    match result {
        Err(ClaimdrawError::Parse { err, src }) => {
            assert!(err.is_empty_input());
            assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E300));
            assert!(src.contains("claim 1"));
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_missing_symbol_is_export_error() {
    let style = StyleConfig::default()
        .with_symbols(SymbolTable::empty().with(Category::Process, Shape::Rectangle));
    let builder = DiagramBuilder::new(AppConfig::new(Default::default(), style));

    let parsed = builder.parse(CLAIMS).expect("Failed to parse claims");
    let result = builder.render_mermaid(&parsed.diagram);
    assert!(
        matches!(result, Err(ClaimdrawError::Export(_))),
        "Should fail without a storage symbol: {result:?}"
    );
}

#[test]
fn test_builder_with_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [extract]
        dedupe_relationships = false

        [style]
        node_font_size = 24
        group_by_category = true
        "#,
    )
    .expect("Failed to read config");

    let builder = DiagramBuilder::new(config);
    let parsed = builder
        .parse("a hub (10) connected to a lamp (11). the hub (10) connected to the lamp (11).")
        .expect("Failed to parse");
    assert_eq!(parsed.diagram.relationships().len(), 2);

    let markup = builder.render_mermaid(&parsed.diagram).unwrap();
    assert!(markup.contains("font-size:24px,font-weight:bold"));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let first = builder.parse("a sensor (2)").expect("Failed to parse first");
    let second = builder.parse("a router (4)").expect("Failed to parse second");

    assert_eq!(first.diagram.components()[0].category(), Category::Io);
    assert_eq!(second.diagram.components()[0].category(), Category::Network);
}

// ===================
// Strategies
// ===================

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn diagram_strategy() -> impl Strategy<Value = Diagram> {
    let components =
        prop::collection::btree_map(1u32..200, ("[A-Z][a-z]{1,8}", category_strategy()), 1..8);
    let edges = prop::collection::vec(
        (
            any::<prop::sample::Index>(),
            any::<prop::sample::Index>(),
            any::<bool>(),
        ),
        0..8,
    );

    (components, any::<bool>(), edges)
        .prop_map(|(components, grouped, edges)| {
            let numerals: Vec<u32> = components.keys().copied().collect();
            let relationships = edges
                .into_iter()
                .map(|(from, to, dotted)| {
                    let style = if dotted { LineStyle::Dotted } else { LineStyle::Solid };
                    Relationship::new(*from.get(&numerals), *to.get(&numerals), "Connection", style)
                })
                .collect();
            let components = components
                .into_iter()
                .map(|(numeral, (name, category))| Component::new(numeral, name, category))
                .collect();
            Diagram::new(
                components,
                relationships,
                StyleConfig::default().with_group_by_category(grouped),
            )
        })
}

// ===================
// Property Test Functions
// ===================

/// Rendering the same diagram twice yields byte-identical markup.
fn check_render_is_deterministic(diagram: &Diagram) -> Result<(), TestCaseError> {
    let builder = DiagramBuilder::default();
    let first = builder.render_mermaid(diagram);
    let second = builder.render_mermaid(diagram);

    prop_assert!(first.is_ok(), "render failed: {:?}", first.err());
    prop_assert_eq!(first.ok(), second.ok());
    Ok(())
}

/// Every component and relationship appears in the markup.
fn check_render_is_complete(diagram: &Diagram) -> Result<(), TestCaseError> {
    let markup = match DiagramBuilder::default().render_mermaid(diagram) {
        Ok(markup) => markup,
        Err(err) => return Err(TestCaseError::fail(format!("render failed: {err}"))),
    };

    for component in diagram.components() {
        let label = component.to_string();
        prop_assert!(markup.contains(&label), "missing node {}", label);
    }
    let edges = markup.lines().filter(|line| line.contains("|\"<span")).count();
    prop_assert_eq!(edges, diagram.relationships().len());
    Ok(())
}

// ===================
// Proptest Wrappers
// ===================

proptest! {
    #[test]
    fn render_is_deterministic(diagram in diagram_strategy()) {
        check_render_is_deterministic(&diagram)?;
    }

    #[test]
    fn render_is_complete(diagram in diagram_strategy()) {
        check_render_is_complete(&diagram)?;
    }
}
