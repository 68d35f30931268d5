//! # md2docx
//!
//! Markdown to word-processing document renderer.
//!
//! Markdown is parsed into a small arena tree ([`crate::core::Ast`]) and walked by
//! [`converter::DocxRenderer`], which drives an [`OutputModel`]: paragraphs,
//! runs, hyperlinks, tables and numbering references.
//!
//! ## Example
//!
//! ```no_run
//! use md2docx::config::RenderConfig;
//! use md2docx::render::{OutlineRenderer, Renderer};
//! use md2docx::MarkdownToDocx;
//!
//! let options = RenderConfig::builtin().unwrap().into();
//! let converter = MarkdownToDocx::new(options);
//! let document = converter.convert("README.md").unwrap();
//! println!("{}", OutlineRenderer.render(&document).unwrap());
//! ```

pub mod adapters;
pub mod config;
pub mod converter;
pub mod core;
pub mod document;
pub mod error;
pub mod render;

pub use converter::{MarkdownToDocx, StyleConfig};
pub use document::{OutputModel, WordDocument};
pub use error::{Error, Result};

use document::NumberingDefinition;
use serde::{Deserialize, Serialize};

/// Options for Markdown to document rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Style identifiers applied per semantic role.
    pub styles: StyleConfig,
    /// What to do with node kinds that have no rendering rule.
    pub unsupported_nodes: UnsupportedNodePolicy,
    /// Numbering definitions registered on documents created by
    /// [`MarkdownToDocx::convert`].
    pub numbering: Vec<NumberingDefinition>,
}

/// Specifies how node kinds without a rendering rule are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedNodePolicy {
    /// Abort the render with [`Error::UnsupportedNodeKind`].
    Fail,
    /// Log a warning and keep walking; the node's children are still visited.
    #[default]
    Ignore,
}
