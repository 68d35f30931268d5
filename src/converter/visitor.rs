//! Rendering visitor - turns enter/leave events of the markdown tree into
//! paragraphs, runs, hyperlinks and tables on an [`OutputModel`].

use super::numbering::NumberingResolver;
use super::styles::{StyleConfig, StyleRole};
use super::table::{cell_alignment, TableContext};
use super::text::{split_cell_text, write_breaking_text};
use crate::core::{Ast, CellAlignment, NodeId, NodeKind, NodeVisitor, WalkStatus};
use crate::document::{HyperlinkId, OutputModel, ParagraphId, RunId, TableWidth};
use crate::{Error, Result, UnsupportedNodePolicy};
use tracing::{debug, warn};

/// Where a node sits, decided from its parent's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    Generic,
    InLink,
    InTableCell,
    InListItem,
}

impl Placement {
    fn of(ast: &Ast, node: NodeId) -> Self {
        match ast.parent(node).map(|parent| ast.kind(parent)) {
            Some(NodeKind::Link { .. }) => Placement::InLink,
            Some(NodeKind::TableCell { .. }) => Placement::InTableCell,
            Some(NodeKind::Item) => Placement::InListItem,
            _ => Placement::Generic,
        }
    }
}

/// Cursor state carried across events.
#[derive(Debug)]
struct RenderState {
    paragraph: Option<ParagraphId>,
    /// Hyperlink opened for the Link node currently being walked.
    link: Option<(NodeId, HyperlinkId)>,
    table: Option<TableContext>,
    /// -1 outside any list.
    list_level: i32,
    // Flags, not counters: nested same-type emphasis does not stack and the
    // inner leave clears the flag for the rest of the outer span.
    bold: bool,
    italic: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            paragraph: None,
            link: None,
            table: None,
            list_level: -1,
            bold: false,
            italic: false,
        }
    }
}

/// Single-pass renderer driven by [`Ast::walk`].
///
/// Holds the output model exclusively for one traversal; build a new
/// renderer per document.
pub struct DocxRenderer<'a, M: OutputModel> {
    model: &'a mut M,
    styles: &'a StyleConfig,
    policy: UnsupportedNodePolicy,
    numbering: NumberingResolver,
    state: RenderState,
}

impl<'a, M: OutputModel> DocxRenderer<'a, M> {
    pub fn new(model: &'a mut M, styles: &'a StyleConfig, policy: UnsupportedNodePolicy) -> Self {
        let numbering = NumberingResolver::new(model.numbering_definitions());
        debug!(
            numbered_styles = numbering.len(),
            "numbering definitions indexed"
        );
        Self {
            model,
            styles,
            policy,
            numbering,
            state: RenderState::default(),
        }
    }

    /// Renders the whole tree.
    pub fn render(mut self, ast: &Ast) -> Result<()> {
        ast.walk(&mut self)
    }

    /// Current list nesting depth; -1 outside lists.
    pub fn list_level(&self) -> i32 {
        self.state.list_level
    }

    fn open_paragraph(&mut self) -> ParagraphId {
        let para = self.model.add_paragraph();
        self.state.paragraph = Some(para);
        para
    }

    fn current(&self, event: &str) -> Result<ParagraphId> {
        self.state
            .paragraph
            .ok_or_else(|| Error::invariant(format!("{} with no open paragraph", event)))
    }

    fn table_context(&self, event: &str) -> Result<TableContext> {
        self.state
            .table
            .ok_or_else(|| Error::invariant(format!("{} outside a table", event)))
    }

    fn style_paragraph(&mut self, para: ParagraphId, role: StyleRole) -> Result<()> {
        let styles = self.styles;
        if let Some(style) = styles.style(role) {
            self.model.set_paragraph_style(para, style)?;
        }
        Ok(())
    }

    /// New run carrying the active bold/italic flags.
    fn emphasized_run(&mut self, para: ParagraphId) -> Result<RunId> {
        let run = self.model.add_run(para)?;
        if self.state.bold {
            self.model.set_bold(run, true)?;
        }
        if self.state.italic {
            self.model.set_italic(run, true)?;
        }
        Ok(run)
    }

    fn enter_paragraph(&mut self, ast: &Ast, node: NodeId, placement: Placement) -> Result<()> {
        match placement {
            // The cell already opened its paragraph; keep writing into it.
            Placement::InTableCell => {
                self.table_context("Paragraph")?.cell()?;
                self.current("Paragraph")?;
            }
            Placement::InListItem => {
                let para = self.open_paragraph();
                let ordered = ast
                    .parent(node)
                    .and_then(|item| ast.parent(item))
                    .is_some_and(|list| {
                        matches!(ast.kind(list), NodeKind::List { ordered: true, .. })
                    });
                self.apply_list_style(para, ordered)?;
            }
            Placement::Generic | Placement::InLink => {
                self.open_paragraph();
            }
        }
        Ok(())
    }

    /// Styles a list item paragraph; nested levels also get numbering.
    fn apply_list_style(&mut self, para: ParagraphId, ordered: bool) -> Result<()> {
        let styles = self.styles;
        let role = StyleRole::list(ordered);
        let style = styles.style(role).unwrap_or_default();
        if !style.is_empty() {
            self.model.set_paragraph_style(para, style)?;
        }

        let level = self.state.list_level;
        if level <= 0 {
            return Ok(());
        }
        match self.numbering.resolve(style) {
            Ok(numbering) => self.model.set_numbering(para, numbering, level as u32)?,
            Err(err) => {
                warn!(list_level = level, error = %err, "list paragraph left without numbering")
            }
        }
        Ok(())
    }

    fn enter_heading(&mut self, level: u8) -> Result<()> {
        let para = self.open_paragraph();
        self.style_paragraph(para, StyleRole::heading(level))
    }

    fn leave_block_quote(&mut self) -> Result<()> {
        match self.state.paragraph {
            Some(para) => self.style_paragraph(para, StyleRole::BlockQuote),
            None => {
                debug!("block quote closed before any paragraph was opened");
                Ok(())
            }
        }
    }

    fn code_block(&mut self, literal: &str) -> Result<()> {
        let para = self.open_paragraph();
        self.style_paragraph(para, StyleRole::CodeBlock)?;
        let run = self.model.add_run(para)?;
        write_breaking_text(&mut *self.model, run, literal)
    }

    fn inline_code(&mut self, literal: &str) -> Result<()> {
        let para = self.current("Code")?;
        let run = self.model.add_run(para)?;
        self.model.append_text(run, literal)?;
        let styles = self.styles;
        if let Some(style) = styles.style(StyleRole::CodeInline) {
            self.model.set_run_style(run, style)?;
        }
        Ok(())
    }

    /// Breaks land on the paragraph's last run; a paragraph whose content so
    /// far produced no run (e.g. an ignored image) gets an empty one.
    fn hard_break(&mut self) -> Result<()> {
        let para = self.current("Hardbreak")?;
        let run = match self.model.last_run(para)? {
            Some(run) => run,
            None => self.emphasized_run(para)?,
        };
        self.model.append_break(run)
    }

    fn soft_break(&mut self, ast: &Ast, node: NodeId, placement: Placement) -> Result<()> {
        if placement == Placement::InLink {
            return self.link_text(ast, node, " ");
        }
        let para = self.current("Softbreak")?;
        let run = self.emphasized_run(para)?;
        self.model.append_text(run, " ")
    }

    fn text(&mut self, ast: &Ast, node: NodeId, literal: &str, placement: Placement) -> Result<()> {
        match placement {
            Placement::InLink => self.link_text(ast, node, literal),
            Placement::InTableCell => self.cell_text(literal),
            Placement::Generic | Placement::InListItem => {
                let para = self.current("Text")?;
                let run = self.emphasized_run(para)?;
                write_breaking_text(&mut *self.model, run, literal)
            }
        }
    }

    /// Every child of one Link node writes into the same hyperlink.
    fn link_text(&mut self, ast: &Ast, node: NodeId, literal: &str) -> Result<()> {
        let link = self.hyperlink_for(ast, node)?;
        let run = self.model.add_hyperlink_run(link)?;
        let styles = self.styles;
        if let Some(style) = styles.style(StyleRole::Hyperlink) {
            self.model.set_run_style(run, style)?;
        }
        self.model.append_text(run, literal)
    }

    fn hyperlink_for(&mut self, ast: &Ast, node: NodeId) -> Result<HyperlinkId> {
        let parent = ast
            .parent(node)
            .ok_or_else(|| Error::invariant("link content without a Link parent"))?;
        if let Some((open, link)) = self.state.link {
            if open == parent {
                return Ok(link);
            }
        }

        let NodeKind::Link { destination, title } = ast.kind(parent) else {
            return Err(Error::invariant("link content without a Link parent"));
        };
        let para = self.current("Text")?;
        let link = self.model.add_hyperlink(para, destination)?;
        if !title.is_empty() {
            self.model.set_tooltip(link, title)?;
        }
        self.state.link = Some((parent, link));
        Ok(link)
    }

    /// Cell text: every escaped `\n` starts a new paragraph in the same cell
    /// that inherits the previous paragraph's alignment.
    fn cell_text(&mut self, literal: &str) -> Result<()> {
        let cell = self.table_context("Text")?.cell()?;
        let mut para = self.current("Text")?;

        for (i, segment) in split_cell_text(literal).enumerate() {
            if i > 0 {
                let alignment = self.model.alignment(para)?;
                para = self.model.add_cell_paragraph(cell)?;
                if let Some(alignment) = alignment {
                    self.model.set_alignment(para, alignment)?;
                }
                self.state.paragraph = Some(para);
            }
            let run = self.emphasized_run(para)?;
            self.model.append_text(run, segment)?;
        }
        Ok(())
    }

    fn enter_table(&mut self) -> Result<()> {
        let table = self.model.add_table();
        self.model.set_table_width(table, TableWidth::FULL)?;
        let styles = self.styles;
        if let Some(style) = styles.style(StyleRole::Table) {
            self.model.set_table_style(table, style)?;
        }
        self.state.table = Some(TableContext::new(table));
        Ok(())
    }

    fn enter_row(&mut self) -> Result<()> {
        let mut ctx = self.table_context("TableRow")?;
        ctx.row = Some(self.model.add_row(ctx.table)?);
        ctx.cell = None;
        self.state.table = Some(ctx);
        Ok(())
    }

    fn enter_cell(&mut self, alignment: CellAlignment) -> Result<()> {
        let mut ctx = self.table_context("TableCell")?;
        let cell = self.model.add_cell(ctx.row()?)?;
        let para = self.model.add_cell_paragraph(cell)?;
        if let Some(alignment) = cell_alignment(alignment) {
            self.model.set_alignment(para, alignment)?;
        }
        ctx.cell = Some(cell);
        self.state.table = Some(ctx);
        self.state.paragraph = Some(para);
        Ok(())
    }

    fn leave_list(&mut self) -> Result<()> {
        if self.state.list_level < 0 {
            return Err(Error::invariant("List leave without a matching enter"));
        }
        self.state.list_level -= 1;
        Ok(())
    }

    fn unsupported(&mut self, name: &str) -> Result<()> {
        match self.policy {
            UnsupportedNodePolicy::Fail => Err(Error::UnsupportedNodeKind(name.to_string())),
            UnsupportedNodePolicy::Ignore => {
                warn!(node = name, "skipping unsupported node");
                Ok(())
            }
        }
    }
}

impl<M: OutputModel> NodeVisitor for DocxRenderer<'_, M> {
    type Error = Error;

    fn visit(&mut self, ast: &Ast, node: NodeId, entering: bool) -> Result<WalkStatus> {
        let placement = Placement::of(ast, node);

        match ast.kind(node) {
            NodeKind::Document | NodeKind::Item | NodeKind::TableHead | NodeKind::TableBody => {}
            NodeKind::Link { .. } => {
                if !entering {
                    self.state.link = None;
                }
            }
            NodeKind::Paragraph => {
                if entering {
                    self.enter_paragraph(ast, node, placement)?;
                }
            }
            NodeKind::Heading { level } => {
                if entering {
                    self.enter_heading(*level)?;
                }
            }
            NodeKind::BlockQuote => {
                if !entering {
                    self.leave_block_quote()?;
                }
            }
            NodeKind::CodeBlock { literal, .. } => {
                if entering {
                    self.code_block(literal)?;
                }
            }
            NodeKind::Code(literal) => {
                if entering {
                    self.inline_code(literal)?;
                }
            }
            NodeKind::Hardbreak => {
                if entering {
                    self.hard_break()?;
                }
            }
            NodeKind::Softbreak => {
                if entering {
                    self.soft_break(ast, node, placement)?;
                }
            }
            NodeKind::Strong => self.state.bold = entering,
            NodeKind::Emphasis => self.state.italic = entering,
            NodeKind::List { .. } => {
                if entering {
                    self.state.list_level += 1;
                } else {
                    self.leave_list()?;
                }
            }
            NodeKind::Text(literal) => {
                if entering {
                    self.text(ast, node, literal, placement)?;
                }
            }
            NodeKind::Table => {
                if entering {
                    self.enter_table()?;
                } else {
                    self.state.table = None;
                }
            }
            NodeKind::TableRow => {
                if entering {
                    self.enter_row()?;
                }
            }
            NodeKind::TableCell { alignment } => {
                if entering {
                    self.enter_cell(*alignment)?;
                }
            }
            NodeKind::Unknown(name) => {
                if entering {
                    self.unsupported(name)?;
                }
            }
        }

        Ok(WalkStatus::Continue)
    }
}
