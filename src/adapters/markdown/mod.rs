mod extractor;

use crate::core::Ast;
use crate::Result;

/// Builds the renderer's syntax tree from source text.
pub trait AstExtractor {
    fn extract(&self, source: &str) -> Result<Ast>;
}

pub use extractor::MarkdownExtractor;
