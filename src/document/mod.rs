//! Output document model.
//!
//! [`OutputModel`] is the set of primitives the renderer drives. Handles are
//! plain indices handed out by the model; passing a handle the model never
//! issued is reported as [`Error::InvariantViolation`](crate::Error).
//! [`WordDocument`] is the in-memory implementation used by the crate.

mod model;
mod numbering;

use crate::Result;

pub use model::{
    BodyElement, Hyperlink, Inline, Paragraph, ParagraphNumbering, Run, RunContent, Table,
    TableCell, TableRow, WordDocument,
};
pub use numbering::{NumberFormat, NumberingDefinition, NumberingId, NumberingLevel};

macro_rules! handle {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $name(pub(crate) usize);
        )*
    };
}

handle!(
    /// Handle to a paragraph, in the body or inside a table cell.
    ParagraphId,
    /// Handle to a run, either directly in a paragraph or inside a hyperlink.
    RunId,
    HyperlinkId,
    TableId,
    RowId,
    CellId,
);

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Preferred table width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableWidth {
    #[default]
    Auto,
    /// Percentage of the text area width.
    Percent(u32),
}

impl TableWidth {
    pub const FULL: TableWidth = TableWidth::Percent(100);
}

/// Primitives a rendering target must provide.
pub trait OutputModel {
    /// Appends a paragraph to the document body.
    fn add_paragraph(&mut self) -> ParagraphId;
    fn add_run(&mut self, paragraph: ParagraphId) -> Result<RunId>;
    /// Last run of `paragraph`; for a trailing hyperlink this is the
    /// hyperlink's last run.
    fn last_run(&self, paragraph: ParagraphId) -> Result<Option<RunId>>;
    fn append_text(&mut self, run: RunId, text: &str) -> Result<()>;
    fn append_break(&mut self, run: RunId) -> Result<()>;
    fn set_bold(&mut self, run: RunId, bold: bool) -> Result<()>;
    fn set_italic(&mut self, run: RunId, italic: bool) -> Result<()>;
    fn set_run_style(&mut self, run: RunId, style: &str) -> Result<()>;

    fn set_paragraph_style(&mut self, paragraph: ParagraphId, style: &str) -> Result<()>;
    fn set_alignment(&mut self, paragraph: ParagraphId, alignment: Alignment) -> Result<()>;
    fn alignment(&self, paragraph: ParagraphId) -> Result<Option<Alignment>>;
    fn set_numbering(
        &mut self,
        paragraph: ParagraphId,
        numbering: NumberingId,
        level: u32,
    ) -> Result<()>;

    fn add_hyperlink(&mut self, paragraph: ParagraphId, target: &str) -> Result<HyperlinkId>;
    fn add_hyperlink_run(&mut self, link: HyperlinkId) -> Result<RunId>;
    fn set_tooltip(&mut self, link: HyperlinkId, tooltip: &str) -> Result<()>;

    /// Appends a table to the document body.
    fn add_table(&mut self) -> TableId;
    fn set_table_width(&mut self, table: TableId, width: TableWidth) -> Result<()>;
    fn set_table_style(&mut self, table: TableId, style: &str) -> Result<()>;
    fn add_row(&mut self, table: TableId) -> Result<RowId>;
    fn add_cell(&mut self, row: RowId) -> Result<CellId>;
    fn add_cell_paragraph(&mut self, cell: CellId) -> Result<ParagraphId>;

    /// Numbering definitions in registration order.
    fn numbering_definitions(&self) -> &[NumberingDefinition];
}
