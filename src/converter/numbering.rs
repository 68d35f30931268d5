//! Numbering resolver - finds the numbering definition behind a list style.

use crate::document::{NumberingDefinition, NumberingId};
use crate::{Error, Result};
use std::collections::HashMap;

/// Maps paragraph style identifiers to the numbering definition whose
/// level 0 declares that style.
///
/// Built once per render; when several definitions declare the same style
/// the first registered one wins.
#[derive(Debug, Default)]
pub struct NumberingResolver {
    by_style: HashMap<String, NumberingId>,
}

impl NumberingResolver {
    pub fn new(definitions: &[NumberingDefinition]) -> Self {
        let mut by_style = HashMap::new();
        for def in definitions {
            if let Some(style) = def.level_style(0) {
                by_style.entry(style.to_string()).or_insert(def.id);
            }
        }
        Self { by_style }
    }

    /// Looks up the definition for `style`.
    pub fn resolve(&self, style: &str) -> Result<NumberingId> {
        self.by_style
            .get(style)
            .copied()
            .ok_or_else(|| Error::NumberingDefinitionNotFound {
                style: style.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.by_style.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_style.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{NumberFormat, NumberingLevel};

    fn def(id: u32, style: &str) -> NumberingDefinition {
        NumberingDefinition::new(id)
            .push_level(NumberingLevel::new(0, NumberFormat::Decimal).style(style))
    }

    #[test]
    fn test_first_registered_definition_wins() {
        let resolver = NumberingResolver::new(&[def(1, "ListOrdered"), def(2, "ListOrdered")]);
        assert_eq!(resolver.resolve("ListOrdered").unwrap(), NumberingId(1));
        assert_eq!(resolver.len(), 1);
    }

    #[test]
    fn test_only_level_zero_style_counts() {
        let nested_only = NumberingDefinition::new(5)
            .push_level(NumberingLevel::new(0, NumberFormat::Bullet))
            .push_level(NumberingLevel::new(1, NumberFormat::Bullet).style("ListParagraph"));
        let resolver = NumberingResolver::new(&[nested_only]);

        let err = resolver.resolve("ListParagraph").unwrap_err();
        assert!(matches!(
            err,
            Error::NumberingDefinitionNotFound { ref style } if style == "ListParagraph"
        ));
        assert!(err.is_recoverable());
    }
}
