//! Semantic diagram model types.
//!
//! This module contains the structured representation of a patent system
//! after extraction and assembly. These types are what the markup renderer
//! consumes.
//!
//! # Pipeline Position
//!
//! ```text
//! Claim Text
//!     ↓ lexer
//! Tokens
//!     ↓ reference extraction + classification
//! Component Mentions
//!     ↓ relationship extraction
//! Relationships
//!     ↓ assembly (merge, validate)
//! Semantic Model (these types)
//!     ↓ export
//! Diagram Markup
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - The assembled [`Diagram`]
//! - [`element`] - Diagram elements: [`Category`], [`Component`], [`Relationship`], [`LineStyle`]

pub mod diagram;
pub mod element;

pub use diagram::*;
pub use element::*;
