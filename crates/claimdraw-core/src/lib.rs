//! Claimdraw Core Types and Definitions
//!
//! This crate provides the foundational types shared by every stage of the
//! claimdraw pipeline. It includes:
//!
//! - **Colors**: Validated CSS color values ([`color::Color`])
//! - **Semantic**: The diagram model produced from claim text ([`semantic`] module)
//! - **Style**: Fixed drawing conventions and the category symbol table ([`style`] module)

pub mod color;
pub mod semantic;
pub mod style;
