//! Numbering (list) definitions registered on an output document.

use serde::{Deserialize, Serialize};

/// Identifier of a registered numbering definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberingId(pub u32);

/// Marker format of one numbering level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberFormat {
    #[default]
    Decimal,
    Bullet,
    LowerLetter,
    UpperLetter,
    LowerRoman,
    UpperRoman,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingLevel {
    pub level: u32,
    /// Paragraph style this level is declared for, if any.
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub format: NumberFormat,
    /// Marker template, e.g. `%1.` or `•`.
    #[serde(default)]
    pub text: String,
}

impl NumberingLevel {
    pub fn new(level: u32, format: NumberFormat) -> Self {
        Self {
            level,
            style: None,
            format,
            text: String::new(),
        }
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingDefinition {
    pub id: NumberingId,
    #[serde(default)]
    pub levels: Vec<NumberingLevel>,
}

impl NumberingDefinition {
    pub fn new(id: u32) -> Self {
        Self {
            id: NumberingId(id),
            levels: Vec::new(),
        }
    }

    pub fn push_level(mut self, level: NumberingLevel) -> Self {
        self.levels.push(level);
        self
    }

    /// Style reference declared by `level`, ignoring empty declarations.
    pub fn level_style(&self, level: u32) -> Option<&str> {
        self.levels
            .iter()
            .find(|l| l.level == level)
            .and_then(|l| l.style.as_deref())
            .filter(|s| !s.is_empty())
    }
}
