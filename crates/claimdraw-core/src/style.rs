//! Drawing conventions for patent diagrams.
//!
//! Patent drawings are monochrome with large, bold labels and thick strokes.
//! [`StyleConfig`] carries those constants as an explicit value so different
//! diagrams can be drawn with different styles side by side, and
//! [`SymbolTable`] maps every [`Category`] to the [`Shape`] it is drawn as.
//!
//! All types implement [`serde::Deserialize`]; missing fields fall back to
//! the defaults below.
//!
//! | setting | default |
//! |---|---|
//! | component label size | 20px |
//! | relationship label size | 24px |
//! | text / stroke color | `#000000` |
//! | background color | `#ffffff` |
//! | stroke width | 3px |

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    color::{self, Color},
    semantic::Category,
};

/// Node outline shapes available in the diagram markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// `["label"]`
    Rectangle,
    /// `[("label")]`
    Cylinder,
    /// `{"label"}`
    Diamond,
    /// `[/label/]`, label unquoted
    Parallelogram,
    /// `[/"label"/]`
    QuotedParallelogram,
    /// `(("label"))`
    Circle,
    /// `[["label"]]`
    Subroutine,
}

/// Mapping from component category to node shape.
///
/// A configured table replaces the default one wholesale, so a category left
/// out of a configured table has no symbol and cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Shape>")]
pub struct SymbolTable(BTreeMap<Category, Shape>);

impl TryFrom<BTreeMap<String, Shape>> for SymbolTable {
    type Error = String;

    fn try_from(entries: BTreeMap<String, Shape>) -> Result<Self, Self::Error> {
        entries
            .into_iter()
            .try_fold(Self::empty(), |table, (name, shape)| {
                let category = Category::from_name(&name)
                    .ok_or_else(|| format!("unknown category `{name}` in symbol table"))?;
                Ok(table.with(category, shape))
            })
    }
}

impl SymbolTable {
    /// An empty table; every lookup misses.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Set the shape for a category, returning the updated table.
    pub fn with(mut self, category: Category, shape: Shape) -> Self {
        self.0.insert(category, shape);
        self
    }

    /// Look up the shape for a category.
    pub fn shape(&self, category: Category) -> Option<Shape> {
        self.0.get(&category).copied()
    }

    /// Categories that have no shape in this table.
    pub fn missing(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|category| !self.0.contains_key(category))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::empty()
            .with(Category::Process, Shape::Rectangle)
            .with(Category::Storage, Shape::Cylinder)
            .with(Category::Decision, Shape::Diamond)
            .with(Category::Io, Shape::Parallelogram)
            .with(Category::Display, Shape::QuotedParallelogram)
            .with(Category::Network, Shape::Circle)
            .with(Category::Default, Shape::Rectangle)
    }
}

/// Flow direction of the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "TB")]
    TopToBottom,
    #[serde(rename = "BT")]
    BottomToTop,
    #[serde(rename = "LR")]
    LeftToRight,
    #[serde(rename = "RL")]
    RightToLeft,
}

impl Direction {
    /// The markup keyword for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::TopToBottom => "TB",
            Direction::BottomToTop => "BT",
            Direction::LeftToRight => "LR",
            Direction::RightToLeft => "RL",
        }
    }
}

/// Edge curve interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    #[default]
    Linear,
    Basis,
    Step,
}

impl Curve {
    /// The markup keyword for this curve.
    pub fn as_str(self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::Basis => "basis",
            Curve::Step => "step",
        }
    }
}

/// Smallest legible component label, in pixels.
pub const MIN_NODE_FONT_SIZE: u32 = 20;

/// Smallest legible relationship label, in pixels.
pub const MIN_EDGE_FONT_SIZE: u32 = 24;

/// Visual styling applied to every node and edge of a diagram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    node_font_size: u32,
    edge_font_size: u32,
    text_color: Color,
    stroke_color: Color,
    background_color: Color,
    stroke_width: u32,
    bold: bool,
    direction: Direction,
    curve: Curve,
    group_by_category: bool,
    symbols: SymbolTable,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            node_font_size: MIN_NODE_FONT_SIZE,
            edge_font_size: MIN_EDGE_FONT_SIZE,
            text_color: color::black(),
            stroke_color: color::black(),
            background_color: color::white(),
            stroke_width: 3,
            bold: true,
            direction: Direction::default(),
            curve: Curve::default(),
            group_by_category: false,
            symbols: SymbolTable::default(),
        }
    }
}

impl StyleConfig {
    /// Font size in pixels for component labels.
    pub fn node_font_size(&self) -> u32 {
        self.node_font_size
    }

    /// Font size in pixels for relationship labels.
    pub fn edge_font_size(&self) -> u32 {
        self.edge_font_size
    }

    /// Color of all label text.
    pub fn text_color(&self) -> &Color {
        &self.text_color
    }

    /// Color of node outlines and edges.
    pub fn stroke_color(&self) -> &Color {
        &self.stroke_color
    }

    /// Fill color of the canvas, nodes and edge labels.
    pub fn background_color(&self) -> &Color {
        &self.background_color
    }

    /// Stroke width in pixels.
    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Whether labels are drawn bold.
    pub fn bold(&self) -> bool {
        self.bold
    }

    /// Chart flow direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Edge curve interpolation.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Whether categories with several components are grouped in subgraphs.
    pub fn group_by_category(&self) -> bool {
        self.group_by_category
    }

    /// The category symbol table.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Replace the category symbol table.
    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    /// Enable or disable category grouping.
    pub fn with_group_by_category(mut self, group: bool) -> Self {
        self.group_by_category = group;
        self
    }

    /// Check the style for values that cannot produce a legible drawing.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.node_font_size < MIN_NODE_FONT_SIZE {
            return Err(format!(
                "node_font_size {} is below the {MIN_NODE_FONT_SIZE}px minimum",
                self.node_font_size
            ));
        }
        if self.edge_font_size < MIN_EDGE_FONT_SIZE {
            return Err(format!(
                "edge_font_size {} is below the {MIN_EDGE_FONT_SIZE}px minimum",
                self.edge_font_size
            ));
        }
        if self.stroke_width == 0 {
            return Err("stroke width must be greater than zero".to_string());
        }
        for (name, color) in [
            ("text_color", &self.text_color),
            ("stroke_color", &self.stroke_color),
            ("background_color", &self.background_color),
        ] {
            if !color.is_opaque() {
                return Err(format!("{name} `{color}` must be fully opaque"));
            }
        }
        Ok(())
    }
}
