//! Text dumps of a rendered [`WordDocument`].

mod json;
mod outline;

use crate::document::WordDocument;
use crate::Result;

pub use json::JsonRenderer;
pub use outline::OutlineRenderer;

pub trait Renderer {
    fn render(&self, document: &WordDocument) -> Result<String>;
}
