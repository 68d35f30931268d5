//! Style configuration - maps semantic roles to document style identifiers.

use serde::{Deserialize, Serialize};

/// Semantic role a style identifier is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    Hyperlink,
    ListOrdered,
    ListUnordered,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    CodeBlock,
    CodeInline,
    BlockQuote,
    Table,
}

impl StyleRole {
    /// Heading role for a markdown heading level; 5 and deeper share `Heading5`.
    pub fn heading(level: u8) -> Self {
        match level {
            0 | 1 => StyleRole::Heading1,
            2 => StyleRole::Heading2,
            3 => StyleRole::Heading3,
            4 => StyleRole::Heading4,
            _ => StyleRole::Heading5,
        }
    }

    pub fn list(ordered: bool) -> Self {
        if ordered {
            StyleRole::ListOrdered
        } else {
            StyleRole::ListUnordered
        }
    }
}

/// Style identifiers per role. An empty string applies no explicit style,
/// leaving the output's default in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub hyperlink: String,
    pub list_ordered: String,
    pub list_unordered: String,
    pub heading1: String,
    pub heading2: String,
    pub heading3: String,
    pub heading4: String,
    pub heading5: String,
    pub code_block: String,
    pub code_inline: String,
    pub block_quote: String,
    pub table: String,
}

impl StyleConfig {
    /// Configured identifier for `role`, or `None` when left empty.
    pub fn style(&self, role: StyleRole) -> Option<&str> {
        let id = match role {
            StyleRole::Hyperlink => &self.hyperlink,
            StyleRole::ListOrdered => &self.list_ordered,
            StyleRole::ListUnordered => &self.list_unordered,
            StyleRole::Heading1 => &self.heading1,
            StyleRole::Heading2 => &self.heading2,
            StyleRole::Heading3 => &self.heading3,
            StyleRole::Heading4 => &self.heading4,
            StyleRole::Heading5 => &self.heading5,
            StyleRole::CodeBlock => &self.code_block,
            StyleRole::CodeInline => &self.code_inline,
            StyleRole::BlockQuote => &self.block_quote,
            StyleRole::Table => &self.table,
        };
        Some(id.as_str()).filter(|s| !s.is_empty())
    }
}
