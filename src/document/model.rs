//! In-memory word-processing document.

use super::{
    Alignment, CellId, HyperlinkId, NumberingDefinition, NumberingId, OutputModel, ParagraphId,
    RowId, RunId, TableId, TableWidth,
};
use crate::{Error, Result};

/// Top-level body element, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyElement {
    Paragraph(ParagraphId),
    Table(TableId),
}

/// Paragraph content, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    Run(RunId),
    Hyperlink(HyperlinkId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphNumbering {
    pub id: NumberingId,
    pub level: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub style: Option<String>,
    pub alignment: Option<Alignment>,
    pub numbering: Option<ParagraphNumbering>,
    pub content: Vec<Inline>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    Text(String),
    Break,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    pub bold: bool,
    pub italic: bool,
    pub style: Option<String>,
    pub content: Vec<RunContent>,
}

impl Run {
    /// Text of the run with breaks rendered as `\n`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for item in &self.content {
            match item {
                RunContent::Text(t) => out.push_str(t),
                RunContent::Break => out.push('\n'),
            }
        }
        out
    }

    pub fn break_count(&self) -> usize {
        self.content
            .iter()
            .filter(|c| matches!(c, RunContent::Break))
            .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hyperlink {
    pub target: String,
    pub tooltip: Option<String>,
    pub runs: Vec<RunId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub width: TableWidth,
    pub style: Option<String>,
    pub rows: Vec<RowId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<CellId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    pub paragraphs: Vec<ParagraphId>,
}

/// Append-only document: every element lives in an arena and is referenced
/// by the handles issued when it was created.
#[derive(Debug, Clone, Default)]
pub struct WordDocument {
    body: Vec<BodyElement>,
    paragraphs: Vec<Paragraph>,
    runs: Vec<Run>,
    hyperlinks: Vec<Hyperlink>,
    tables: Vec<Table>,
    rows: Vec<TableRow>,
    cells: Vec<TableCell>,
    numbering: Vec<NumberingDefinition>,
}

impl WordDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document with `definitions` already registered.
    pub fn with_numbering(definitions: impl IntoIterator<Item = NumberingDefinition>) -> Self {
        let mut doc = Self::new();
        for def in definitions {
            doc.register_numbering(def);
        }
        doc
    }

    pub fn register_numbering(&mut self, definition: NumberingDefinition) {
        self.numbering.push(definition);
    }

    pub fn body(&self) -> &[BodyElement] {
        &self.body
    }

    pub fn numbering(&self) -> &[NumberingDefinition] {
        &self.numbering
    }

    pub fn paragraph(&self, id: ParagraphId) -> Option<&Paragraph> {
        self.paragraphs.get(id.0)
    }

    pub fn run(&self, id: RunId) -> Option<&Run> {
        self.runs.get(id.0)
    }

    pub fn hyperlink(&self, id: HyperlinkId) -> Option<&Hyperlink> {
        self.hyperlinks.get(id.0)
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.get(id.0)
    }

    pub fn row(&self, id: RowId) -> Option<&TableRow> {
        self.rows.get(id.0)
    }

    pub fn cell(&self, id: CellId) -> Option<&TableCell> {
        self.cells.get(id.0)
    }

    /// Paragraphs placed directly in the body, in document order.
    pub fn body_paragraphs(&self) -> impl Iterator<Item = (ParagraphId, &Paragraph)> + '_ {
        self.body.iter().filter_map(move |el| match el {
            BodyElement::Paragraph(id) => Some((*id, &self.paragraphs[id.0])),
            BodyElement::Table(_) => None,
        })
    }

    /// Tables placed in the body, in document order.
    pub fn body_tables(&self) -> impl Iterator<Item = (TableId, &Table)> + '_ {
        self.body.iter().filter_map(move |el| match el {
            BodyElement::Table(id) => Some((*id, &self.tables[id.0])),
            BodyElement::Paragraph(_) => None,
        })
    }

    /// Ordinary runs of a paragraph, hyperlink runs excluded.
    pub fn paragraph_runs(&self, id: ParagraphId) -> Vec<&Run> {
        self.paragraph(id)
            .map(|p| {
                p.content
                    .iter()
                    .filter_map(|inline| match inline {
                        Inline::Run(run) => self.runs.get(run.0),
                        Inline::Hyperlink(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Hyperlinks of a paragraph in order.
    pub fn paragraph_hyperlinks(&self, id: ParagraphId) -> Vec<&Hyperlink> {
        self.paragraph(id)
            .map(|p| {
                p.content
                    .iter()
                    .filter_map(|inline| match inline {
                        Inline::Hyperlink(link) => self.hyperlinks.get(link.0),
                        Inline::Run(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Visible text of a paragraph, hyperlinks included, breaks as `\n`.
    pub fn paragraph_text(&self, id: ParagraphId) -> String {
        let mut out = String::new();
        let Some(para) = self.paragraph(id) else {
            return out;
        };
        for inline in &para.content {
            match inline {
                Inline::Run(run) => out.push_str(&self.runs[run.0].text()),
                Inline::Hyperlink(link) => {
                    for run in &self.hyperlinks[link.0].runs {
                        out.push_str(&self.runs[run.0].text());
                    }
                }
            }
        }
        out
    }

    fn paragraph_mut(&mut self, id: ParagraphId) -> Result<&mut Paragraph> {
        self.paragraphs
            .get_mut(id.0)
            .ok_or_else(|| Error::invariant(format!("unknown paragraph handle {}", id.0)))
    }

    fn run_mut(&mut self, id: RunId) -> Result<&mut Run> {
        self.runs
            .get_mut(id.0)
            .ok_or_else(|| Error::invariant(format!("unknown run handle {}", id.0)))
    }

    fn hyperlink_mut(&mut self, id: HyperlinkId) -> Result<&mut Hyperlink> {
        self.hyperlinks
            .get_mut(id.0)
            .ok_or_else(|| Error::invariant(format!("unknown hyperlink handle {}", id.0)))
    }

    fn table_mut(&mut self, id: TableId) -> Result<&mut Table> {
        self.tables
            .get_mut(id.0)
            .ok_or_else(|| Error::invariant(format!("unknown table handle {}", id.0)))
    }

    fn new_paragraph(&mut self) -> ParagraphId {
        let id = ParagraphId(self.paragraphs.len());
        self.paragraphs.push(Paragraph::default());
        id
    }

    fn new_run(&mut self) -> RunId {
        let id = RunId(self.runs.len());
        self.runs.push(Run::default());
        id
    }
}

impl OutputModel for WordDocument {
    fn add_paragraph(&mut self) -> ParagraphId {
        let id = self.new_paragraph();
        self.body.push(BodyElement::Paragraph(id));
        id
    }

    fn add_run(&mut self, paragraph: ParagraphId) -> Result<RunId> {
        self.paragraph_mut(paragraph)?;
        let run = self.new_run();
        self.paragraph_mut(paragraph)?.content.push(Inline::Run(run));
        Ok(run)
    }

    fn last_run(&self, paragraph: ParagraphId) -> Result<Option<RunId>> {
        let para = self
            .paragraph(paragraph)
            .ok_or_else(|| Error::invariant(format!("unknown paragraph handle {}", paragraph.0)))?;
        Ok(para.content.last().and_then(|inline| match inline {
            Inline::Run(run) => Some(*run),
            Inline::Hyperlink(link) => self.hyperlinks[link.0].runs.last().copied(),
        }))
    }

    fn append_text(&mut self, run: RunId, text: &str) -> Result<()> {
        self.run_mut(run)?
            .content
            .push(RunContent::Text(text.to_string()));
        Ok(())
    }

    fn append_break(&mut self, run: RunId) -> Result<()> {
        self.run_mut(run)?.content.push(RunContent::Break);
        Ok(())
    }

    fn set_bold(&mut self, run: RunId, bold: bool) -> Result<()> {
        self.run_mut(run)?.bold = bold;
        Ok(())
    }

    fn set_italic(&mut self, run: RunId, italic: bool) -> Result<()> {
        self.run_mut(run)?.italic = italic;
        Ok(())
    }

    fn set_run_style(&mut self, run: RunId, style: &str) -> Result<()> {
        self.run_mut(run)?.style = Some(style.to_string());
        Ok(())
    }

    fn set_paragraph_style(&mut self, paragraph: ParagraphId, style: &str) -> Result<()> {
        self.paragraph_mut(paragraph)?.style = Some(style.to_string());
        Ok(())
    }

    fn set_alignment(&mut self, paragraph: ParagraphId, alignment: Alignment) -> Result<()> {
        self.paragraph_mut(paragraph)?.alignment = Some(alignment);
        Ok(())
    }

    fn alignment(&self, paragraph: ParagraphId) -> Result<Option<Alignment>> {
        self.paragraph(paragraph)
            .map(|p| p.alignment)
            .ok_or_else(|| Error::invariant(format!("unknown paragraph handle {}", paragraph.0)))
    }

    fn set_numbering(
        &mut self,
        paragraph: ParagraphId,
        numbering: NumberingId,
        level: u32,
    ) -> Result<()> {
        self.paragraph_mut(paragraph)?.numbering = Some(ParagraphNumbering {
            id: numbering,
            level,
        });
        Ok(())
    }

    fn add_hyperlink(&mut self, paragraph: ParagraphId, target: &str) -> Result<HyperlinkId> {
        self.paragraph_mut(paragraph)?;
        let link = HyperlinkId(self.hyperlinks.len());
        self.hyperlinks.push(Hyperlink {
            target: target.to_string(),
            ..Default::default()
        });
        self.paragraph_mut(paragraph)?
            .content
            .push(Inline::Hyperlink(link));
        Ok(link)
    }

    fn add_hyperlink_run(&mut self, link: HyperlinkId) -> Result<RunId> {
        self.hyperlink_mut(link)?;
        let run = self.new_run();
        self.hyperlink_mut(link)?.runs.push(run);
        Ok(run)
    }

    fn set_tooltip(&mut self, link: HyperlinkId, tooltip: &str) -> Result<()> {
        self.hyperlink_mut(link)?.tooltip = Some(tooltip.to_string());
        Ok(())
    }

    fn add_table(&mut self) -> TableId {
        let id = TableId(self.tables.len());
        self.tables.push(Table::default());
        self.body.push(BodyElement::Table(id));
        id
    }

    fn set_table_width(&mut self, table: TableId, width: TableWidth) -> Result<()> {
        self.table_mut(table)?.width = width;
        Ok(())
    }

    fn set_table_style(&mut self, table: TableId, style: &str) -> Result<()> {
        self.table_mut(table)?.style = Some(style.to_string());
        Ok(())
    }

    fn add_row(&mut self, table: TableId) -> Result<RowId> {
        self.table_mut(table)?;
        let row = RowId(self.rows.len());
        self.rows.push(TableRow::default());
        self.table_mut(table)?.rows.push(row);
        Ok(row)
    }

    fn add_cell(&mut self, row: RowId) -> Result<CellId> {
        if row.0 >= self.rows.len() {
            return Err(Error::invariant(format!("unknown row handle {}", row.0)));
        }
        let cell = CellId(self.cells.len());
        self.cells.push(TableCell::default());
        self.rows[row.0].cells.push(cell);
        Ok(cell)
    }

    fn add_cell_paragraph(&mut self, cell: CellId) -> Result<ParagraphId> {
        if cell.0 >= self.cells.len() {
            return Err(Error::invariant(format!("unknown cell handle {}", cell.0)));
        }
        let para = self.new_paragraph();
        self.cells[cell.0].paragraphs.push(para);
        Ok(para)
    }

    fn numbering_definitions(&self) -> &[NumberingDefinition] {
        &self.numbering
    }
}
