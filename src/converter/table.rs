//! Table cursors - which table, row and cell the renderer is writing into.

use crate::core::CellAlignment;
use crate::document::{Alignment, CellId, RowId, TableId};
use crate::{Error, Result};

/// Open table plus the row and cell most recently entered inside it.
///
/// Only exists between Table enter and leave, so table-scoped events that
/// arrive without one are reported instead of writing into a stale table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TableContext {
    pub table: TableId,
    pub row: Option<RowId>,
    pub cell: Option<CellId>,
}

impl TableContext {
    pub fn new(table: TableId) -> Self {
        Self {
            table,
            row: None,
            cell: None,
        }
    }

    pub fn row(&self) -> Result<RowId> {
        self.row
            .ok_or_else(|| Error::invariant("table cell entered outside a table row"))
    }

    pub fn cell(&self) -> Result<CellId> {
        self.cell
            .ok_or_else(|| Error::invariant("cell text outside a table cell"))
    }
}

/// Paragraph alignment for a declared column alignment.
pub(crate) fn cell_alignment(alignment: CellAlignment) -> Option<Alignment> {
    match alignment {
        CellAlignment::Unset => None,
        CellAlignment::Left => Some(Alignment::Left),
        CellAlignment::Center => Some(Alignment::Center),
        CellAlignment::Right => Some(Alignment::Right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{OutputModel, WordDocument};

    #[test]
    fn test_cell_before_row_is_rejected() {
        let mut doc = WordDocument::new();
        let ctx = TableContext::new(doc.add_table());
        assert!(matches!(ctx.row(), Err(Error::InvariantViolation(_))));
        assert!(matches!(ctx.cell(), Err(Error::InvariantViolation(_))));
    }

    #[test]
    fn test_unset_alignment_applies_nothing() {
        assert_eq!(cell_alignment(CellAlignment::Unset), None);
        assert_eq!(cell_alignment(CellAlignment::Right), Some(Alignment::Right));
    }
}
