//! Converter modules for Markdown to document rendering.

mod numbering;
mod styles;
mod table;
mod text;
mod visitor;

use crate::adapters::{AstExtractor, MarkdownExtractor};
use crate::core::Ast;
use crate::document::{OutputModel, WordDocument};
use crate::{RenderOptions, Result};
use std::path::Path;
use tracing::debug;

pub use self::numbering::NumberingResolver;
pub use self::styles::{StyleConfig, StyleRole};
pub use self::visitor::DocxRenderer;

/// Main converter struct that orchestrates Markdown to document rendering.
pub struct MarkdownToDocx {
    options: RenderOptions,
    extractor: MarkdownExtractor,
}

impl MarkdownToDocx {
    /// Creates a new converter with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            extractor: MarkdownExtractor::default(),
        }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(RenderOptions::default())
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Converts a Markdown file.
    ///
    /// # Arguments
    /// * `path` - Path to the Markdown file
    ///
    /// # Returns
    /// A fresh document with the configured numbering definitions registered.
    pub fn convert<P: AsRef<Path>>(&self, path: P) -> Result<WordDocument> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading markdown");
        let markdown = std::fs::read_to_string(path)?;
        self.convert_str(&markdown)
    }

    /// Converts Markdown text into a fresh document.
    pub fn convert_str(&self, markdown: &str) -> Result<WordDocument> {
        let mut doc = WordDocument::with_numbering(self.options.numbering.iter().cloned());
        self.render_into(markdown, &mut doc)?;
        Ok(doc)
    }

    /// Renders Markdown into an existing output model, appending after its
    /// current content. No rollback happens on failure.
    pub fn render_into<M: OutputModel>(&self, markdown: &str, model: &mut M) -> Result<()> {
        let ast = self.extractor.extract(markdown)?;
        self.render_ast(&ast, model)
    }

    /// Renders an already built tree.
    pub fn render_ast<M: OutputModel>(&self, ast: &Ast, model: &mut M) -> Result<()> {
        debug!(nodes = ast.len(), "rendering markdown tree");
        DocxRenderer::new(model, &self.options.styles, self.options.unsupported_nodes).render(ast)
    }
}
