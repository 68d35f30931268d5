//! Source-format adapters that produce the renderer's [`Ast`](crate::core::Ast).

pub mod markdown;

pub use markdown::{AstExtractor, MarkdownExtractor};
