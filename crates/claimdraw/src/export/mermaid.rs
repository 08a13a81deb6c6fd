//! Mermaid flowchart export.
//!
//! Renders a [`Diagram`] as a Mermaid `flowchart` in patent drawing style:
//! an init header carrying the palette, one node per component shaped by its
//! category, one labeled edge per relationship, and a trailing block of style
//! directives that apply the font, color and stroke rules to everything.
//!
//! ```text
//! %%{init: {...}}%%
//! flowchart TB
//!     TITLE["PATENT SYSTEM"]
//!
//!     COMP12["Processor 12"]
//!     COMP14[("Database 14")]
//!
//!     COMP14 -->|"<span style='...'>Connection</span>"| COMP12
//!
//!     classDef default fill:#ffffff,stroke:#000000,...
//!     class COMP12,COMP14 default
//!     linkStyle default stroke:#000000,stroke-width:3px
//! ```

use std::fmt::Write as _;

use log::{debug, info};

use claimdraw_core::{
    semantic::{Category, Component, Diagram, LineStyle, Relationship},
    style::{Shape, StyleConfig},
};

use super::{Error, Exporter};

const INDENT: &str = "    ";

/// Characters that cannot appear literally inside a quoted label.
const QUOTED_SPECIALS: &[char] = &['#', '"', '<', '>'];

/// Characters that cannot appear literally inside an edge label, which sits between pipes.
const EDGE_SPECIALS: &[char] = &['#', '"', '<', '>', '|'];

/// Characters that cannot appear literally inside an unquoted label.
const UNQUOTED_SPECIALS: &[char] = &[
    '#', '"', '<', '>', '|', '/', '\\', '[', ']', '(', ')', '{', '}',
];

/// Exporter producing Mermaid flowchart markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct MermaidExporter;

impl MermaidExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for MermaidExporter {
    fn export_diagram(&self, diagram: &Diagram) -> Result<String, Error> {
        let style = diagram.style();

        // Every component must have a symbol before anything is written
        let shapes = diagram
            .components()
            .iter()
            .map(|component| {
                style
                    .symbols()
                    .shape(component.category())
                    .ok_or(Error::MissingSymbol(component.category()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            components = diagram.components().len(),
            relationships = diagram.relationships().len();
            "Rendering Mermaid flowchart"
        );

        let mut out = String::new();
        write_header(&mut out, style)?;
        writeln!(out, "flowchart {}", style.direction().as_str())?;

        if let Some(title) = diagram.title() {
            writeln!(out, "{INDENT}TITLE[\"{}\"]", escape(title, QUOTED_SPECIALS))?;
            writeln!(out)?;
        }

        let nodes: Vec<(&Component, Shape)> =
            diagram.components().iter().zip(shapes).collect();
        if style.group_by_category() {
            write_grouped_nodes(&mut out, style, &nodes)?;
        } else {
            for (component, shape) in &nodes {
                writeln!(out, "{INDENT}{}", node(component, *shape))?;
            }
        }
        writeln!(out)?;

        for relationship in diagram.relationships() {
            writeln!(out, "{INDENT}{}", edge(relationship, style))?;
        }
        if !diagram.relationships().is_empty() {
            writeln!(out)?;
        }

        write_footer(&mut out, diagram)?;

        debug!(bytes = out.len(); "Mermaid flowchart rendered");
        Ok(out)
    }
}

fn write_header(out: &mut String, style: &StyleConfig) -> Result<(), Error> {
    let background = style.background_color();
    let text = style.text_color();
    let stroke = style.stroke_color();

    writeln!(
        out,
        "%%{{init: {{'theme':'base', 'themeVariables': {{\
         'fontSize':'{font}px', \
         'primaryColor':'{background}', \
         'primaryTextColor':'{text}', \
         'primaryBorderColor':'{stroke}', \
         'lineColor':'{stroke}', \
         'background':'{background}', \
         'mainBkg':'{background}', \
         'edgeLabelBackground':'{background}', \
         'clusterBkg':'{background}'}}, \
         'flowchart': {{'curve':'{curve}'}}}}}}%%",
        font = style.node_font_size(),
        curve = style.curve().as_str(),
    )?;
    Ok(())
}

/// Wrap categories with more than one component in a titled subgraph.
///
/// Groups appear in order of their first component; single components are
/// drawn outside any subgraph.
fn write_grouped_nodes(
    out: &mut String,
    style: &StyleConfig,
    nodes: &[(&Component, Shape)],
) -> Result<(), Error> {
    let mut order: Vec<Category> = Vec::new();
    for (component, _) in nodes {
        if !order.contains(&component.category()) {
            order.push(component.category());
        }
    }

    for category in order {
        let members: Vec<_> = nodes
            .iter()
            .filter(|(component, _)| component.category() == category)
            .collect();

        if members.len() == 1 {
            let (component, shape) = members[0];
            writeln!(out, "{INDENT}{}", node(component, *shape))?;
            continue;
        }

        let group = format!("{}_SYS", category.name());
        debug!(group = group.as_str(), size = members.len(); "Grouping components");
        writeln!(out, "{INDENT}subgraph {group} [\" \"]")?;
        writeln!(out, "{INDENT}{INDENT}direction {}", style.direction().as_str())?;
        writeln!(
            out,
            "{INDENT}{INDENT}{group}_TITLE[\"{} SYSTEM\"]",
            category.name()
        )?;
        for (component, shape) in &members {
            writeln!(out, "{INDENT}{INDENT}{}", node(component, *shape))?;
        }
        let (first, _) = members[0];
        writeln!(
            out,
            "{INDENT}{INDENT}{group}_TITLE ~~~ {}",
            node_id(first.reference_numeral())
        )?;
        writeln!(out, "{INDENT}end")?;
    }
    Ok(())
}

fn write_footer(out: &mut String, diagram: &Diagram) -> Result<(), Error> {
    let style = diagram.style();

    writeln!(
        out,
        "{INDENT}classDef default fill:{},stroke:{},stroke-width:{}px,color:{},font-size:{}px,font-weight:{}",
        style.background_color(),
        style.stroke_color(),
        style.stroke_width(),
        style.text_color(),
        style.node_font_size(),
        font_weight(style),
    )?;

    let ids: Vec<String> = diagram
        .components()
        .iter()
        .map(|component| node_id(component.reference_numeral()))
        .collect();
    if !ids.is_empty() {
        writeln!(out, "{INDENT}class {} default", ids.join(","))?;
    }

    if !diagram.relationships().is_empty() {
        writeln!(
            out,
            "{INDENT}linkStyle default stroke:{},stroke-width:{}px",
            style.stroke_color(),
            style.stroke_width(),
        )?;
    }
    Ok(())
}

fn node_id(reference_numeral: u32) -> String {
    format!("COMP{reference_numeral}")
}

fn node(component: &Component, shape: Shape) -> String {
    let id = node_id(component.reference_numeral());
    let name = component.to_string();
    let label = escape(&name, QUOTED_SPECIALS);

    match shape {
        Shape::Rectangle => format!("{id}[\"{label}\"]"),
        Shape::Cylinder => format!("{id}[(\"{label}\")]"),
        Shape::Diamond => format!("{id}{{\"{label}\"}}"),
        Shape::Parallelogram => format!("{id}[/{}/]", escape(&name, UNQUOTED_SPECIALS)),
        Shape::QuotedParallelogram => format!("{id}[/\"{label}\"/]"),
        Shape::Circle => format!("{id}((\"{label}\"))"),
        Shape::Subroutine => format!("{id}[[\"{label}\"]]"),
    }
}

fn edge(relationship: &Relationship, style: &StyleConfig) -> String {
    let arrow = match relationship.style() {
        LineStyle::Solid => "-->",
        LineStyle::Dotted => "-.->",
    };

    format!(
        "{} {arrow}|\"<span style='font-size:{}px;font-weight:{};background:{};padding:6px'>{}</span>\"| {}",
        node_id(relationship.source()),
        style.edge_font_size(),
        font_weight(style),
        style.background_color(),
        escape(relationship.label(), EDGE_SPECIALS),
        node_id(relationship.target()),
    )
}

fn font_weight(style: &StyleConfig) -> &'static str {
    if style.bold() { "bold" } else { "normal" }
}

/// Replace every character of `text` found in `specials` with its Mermaid entity code.
fn escape(text: &str, specials: &[char]) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if !specials.contains(&c) {
            escaped.push(c);
            continue;
        }
        match c {
            '"' => escaped.push_str("#quot;"),
            '<' => escaped.push_str("#lt;"),
            '>' => escaped.push_str("#gt;"),
            other => escaped.push_str(&format!("#{};", u32::from(other))),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use claimdraw_core::style::SymbolTable;

    use super::*;

    fn sample(style: StyleConfig) -> Diagram {
        Diagram::new(
            vec![
                Component::new(14, "Database", Category::Storage),
                Component::new(12, "Processor", Category::Process),
            ],
            vec![Relationship::new(14, 12, "Connection", LineStyle::Solid)],
            style,
        )
    }

    #[test]
    fn test_full_output() {
        let diagram = sample(StyleConfig::default()).with_title("PATENT SYSTEM");
        let markup = MermaidExporter::new().export_diagram(&diagram).unwrap();

        let expected = "\
%%{init: {'theme':'base', 'themeVariables': {'fontSize':'20px', 'primaryColor':'#ffffff', 'primaryTextColor':'#000000', 'primaryBorderColor':'#000000', 'lineColor':'#000000', 'background':'#ffffff', 'mainBkg':'#ffffff', 'edgeLabelBackground':'#ffffff', 'clusterBkg':'#ffffff'}, 'flowchart': {'curve':'linear'}}}%%
flowchart TB
    TITLE[\"PATENT SYSTEM\"]

    COMP12[\"Processor 12\"]
    COMP14[(\"Database 14\")]

    COMP14 -->|\"<span style='font-size:24px;font-weight:bold;background:#ffffff;padding:6px'>Connection</span>\"| COMP12

    classDef default fill:#ffffff,stroke:#000000,stroke-width:3px,color:#000000,font-size:20px,font-weight:bold
    class COMP12,COMP14 default
    linkStyle default stroke:#000000,stroke-width:3px
";
        assert_eq!(markup, expected);
    }

    #[test]
    fn test_shapes() {
        let cases = [
            (Shape::Rectangle, "COMP1[\"Hub 1\"]"),
            (Shape::Cylinder, "COMP1[(\"Hub 1\")]"),
            (Shape::Diamond, "COMP1{\"Hub 1\"}"),
            (Shape::Parallelogram, "COMP1[/Hub 1/]"),
            (Shape::QuotedParallelogram, "COMP1[/\"Hub 1\"/]"),
            (Shape::Circle, "COMP1((\"Hub 1\"))"),
            (Shape::Subroutine, "COMP1[[\"Hub 1\"]]"),
        ];

        let component = Component::new(1, "Hub", Category::Default);
        for (shape, expected) in cases {
            assert_eq!(node(&component, shape), expected);
        }
    }

    #[test]
    fn test_dotted_edge() {
        let relationship = Relationship::new(16, 12, "Data Flow", LineStyle::Dotted);
        let rendered = edge(&relationship, &StyleConfig::default());
        assert!(rendered.starts_with("COMP16 -.->|"), "{rendered}");
        assert!(rendered.ends_with("| COMP12"), "{rendered}");
        assert!(rendered.contains(">Data Flow<"), "{rendered}");
    }

    #[test]
    fn test_labels_are_escaped() {
        let diagram = sample(StyleConfig::default()).with_title("THE \"HUB\" SYSTEM");
        let markup = MermaidExporter::new().export_diagram(&diagram).unwrap();
        assert!(markup.contains("TITLE[\"THE #quot;HUB#quot; SYSTEM\"]"));
    }

    #[test]
    fn test_mermaid_delimiters_are_escaped() {
        let component = Component::new(3, "I/O Port [A]", Category::Io);
        assert_eq!(
            node(&component, Shape::Parallelogram),
            "COMP3[/I#47;O Port #91;A#93; 3/]"
        );
        assert_eq!(
            node(&component, Shape::Rectangle),
            "COMP3[\"I/O Port [A] 3\"]"
        );

        let relationship = Relationship::new(1, 2, "A|B <C> #1", LineStyle::Solid);
        let rendered = edge(&relationship, &StyleConfig::default());
        assert!(rendered.contains(">A#124;B #lt;C#gt; #35;1<"), "{rendered}");
    }

    #[test]
    fn test_empty_diagram_has_no_class_line() {
        let diagram = Diagram::new(Vec::new(), Vec::new(), StyleConfig::default());
        let markup = MermaidExporter::new().export_diagram(&diagram).unwrap();

        assert!(markup.contains("classDef default"));
        assert!(!markup.contains("class  default"));
        assert!(!markup.lines().any(|line| line.trim_start().starts_with("class ")));
    }

    #[test]
    fn test_missing_symbol_is_an_error() {
        let symbols = SymbolTable::empty().with(Category::Process, Shape::Rectangle);
        let diagram = sample(StyleConfig::default().with_symbols(symbols));

        let err = MermaidExporter::new().export_diagram(&diagram).unwrap_err();
        assert!(matches!(err, Error::MissingSymbol(Category::Storage)));
    }

    #[test]
    fn test_grouping_by_category() {
        let diagram = Diagram::new(
            vec![
                Component::new(12, "Processor", Category::Process),
                Component::new(14, "Memory", Category::Storage),
                Component::new(16, "Controller", Category::Process),
            ],
            Vec::new(),
            StyleConfig::default().with_group_by_category(true),
        );
        let markup = MermaidExporter::new().export_diagram(&diagram).unwrap();

        assert!(markup.contains("    subgraph PROCESS_SYS [\" \"]\n"));
        assert!(markup.contains("        PROCESS_SYS_TITLE[\"PROCESS SYSTEM\"]\n"));
        assert!(markup.contains("        COMP16[\"Controller 16\"]\n"));
        assert!(markup.contains("        PROCESS_SYS_TITLE ~~~ COMP12\n"));
        // A lone component stays outside any subgraph
        assert!(markup.contains("\n    COMP14[(\"Memory 14\")]\n"));
        assert!(!markup.contains("STORAGE_SYS"));
        // No edges, no link style
        assert!(!markup.contains("linkStyle"));
    }

    #[test]
    fn test_export_is_deterministic() {
        let diagram = sample(StyleConfig::default().with_group_by_category(true));
        let exporter = MermaidExporter::new();
        assert_eq!(
            exporter.export_diagram(&diagram).unwrap(),
            exporter.export_diagram(&diagram).unwrap()
        );
    }
}
