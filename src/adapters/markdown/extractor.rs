use super::AstExtractor;
use crate::core::{Ast, CellAlignment, NodeId, NodeKind};
use crate::Result;
use pulldown_cmark::{Alignment, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};
use std::fmt::Debug;

/// CommonMark (plus tables and strikethrough) extractor backed by
/// `pulldown-cmark`.
///
/// The event stream is reshaped into the tree the renderer expects:
/// adjacent text events are merged, inline content sitting directly in a
/// list item is wrapped in a paragraph, header cells get their own row, and
/// code block literals lose their final line ending.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownExtractor {
    options: u32,
}

impl Default for MarkdownExtractor {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self::new(options)
    }
}

impl MarkdownExtractor {
    pub fn new(options: Options) -> Self {
        Self {
            options: options.bits(),
        }
    }
}

impl AstExtractor for MarkdownExtractor {
    fn extract(&self, source: &str) -> Result<Ast> {
        let options = Options::from_bits_truncate(self.options);
        let mut builder = TreeBuilder::new();
        for event in Parser::new_ext(source, options) {
            builder.push(event);
        }
        Ok(builder.finish())
    }
}

#[derive(Debug, Clone, Copy)]
struct Open {
    id: NodeId,
    /// Inserted by the builder; closed implicitly rather than by an End event.
    synthetic: bool,
}

struct TreeBuilder {
    ast: Ast,
    stack: Vec<Open>,
    alignments: Vec<Alignment>,
    column: usize,
}

impl TreeBuilder {
    fn new() -> Self {
        let ast = Ast::new();
        let root = ast.root();
        Self {
            ast,
            stack: vec![Open {
                id: root,
                synthetic: false,
            }],
            alignments: Vec::new(),
            column: 0,
        }
    }

    fn finish(self) -> Ast {
        self.ast
    }

    fn top(&self) -> NodeId {
        self.stack
            .last()
            .map(|open| open.id)
            .unwrap_or_else(|| self.ast.root())
    }

    fn open(&mut self, kind: NodeKind, synthetic: bool) -> NodeId {
        let parent = self.top();
        let id = self.ast.append(parent, kind);
        self.stack.push(Open { id, synthetic });
        id
    }

    fn leaf(&mut self, kind: NodeKind) {
        let parent = self.top();
        self.ast.append(parent, kind);
    }

    fn close_synthetic(&mut self) {
        while self.stack.last().is_some_and(|open| open.synthetic) {
            self.stack.pop();
        }
    }

    fn close(&mut self) {
        self.close_synthetic();
        // The root is never closed by an End event.
        if self.stack.len() > 1 {
            if let Some(open) = self.stack.pop() {
                if let NodeKind::CodeBlock { literal, .. } = self.ast.kind_mut(open.id) {
                    if literal.ends_with('\n') {
                        literal.pop();
                    }
                }
            }
        }
    }

    /// Tight list items carry inline content without a paragraph.
    fn prepare_inline(&mut self) {
        if matches!(self.ast.kind(self.top()), NodeKind::Item) {
            self.open(NodeKind::Paragraph, true);
        }
    }

    /// Block content ends an implicit item paragraph.
    fn prepare_block(&mut self) {
        while let Some(open) = self.stack.last() {
            if !open.synthetic || *self.ast.kind(open.id) != NodeKind::Paragraph {
                break;
            }
            self.stack.pop();
        }
    }

    fn push_text(&mut self, text: &str) {
        let top = self.top();
        if let NodeKind::CodeBlock { literal, .. } = self.ast.kind_mut(top) {
            literal.push_str(text);
            return;
        }

        self.prepare_inline();
        let parent = self.top();
        if let Some(last) = self.ast.last_child(parent) {
            if let NodeKind::Text(existing) = self.ast.kind_mut(last) {
                existing.push_str(text);
                return;
            }
        }
        self.leaf(NodeKind::Text(text.to_string()));
    }

    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(_) => self.close(),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => {
                self.prepare_inline();
                self.leaf(NodeKind::Code(code.into_string()));
            }
            Event::SoftBreak => {
                self.prepare_inline();
                self.leaf(NodeKind::Softbreak);
            }
            Event::HardBreak => {
                self.prepare_inline();
                self.leaf(NodeKind::Hardbreak);
            }
            Event::Rule => {
                self.prepare_block();
                self.leaf(NodeKind::Unknown("Rule".to_string()));
            }
            other => {
                self.prepare_inline();
                self.leaf(NodeKind::Unknown(variant_name(&other)));
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        if is_block(&tag) {
            self.prepare_block();
        } else {
            self.prepare_inline();
        }

        match tag {
            Tag::Paragraph => {
                self.open(NodeKind::Paragraph, false);
            }
            Tag::Heading { level, .. } => {
                self.open(
                    NodeKind::Heading {
                        level: heading_level(level),
                    },
                    false,
                );
            }
            Tag::BlockQuote(_) => {
                self.open(NodeKind::BlockQuote, false);
            }
            Tag::CodeBlock(kind) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info.into_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.open(
                    NodeKind::CodeBlock {
                        literal: String::new(),
                        info,
                    },
                    false,
                );
            }
            Tag::List(start) => {
                self.open(
                    NodeKind::List {
                        ordered: start.is_some(),
                        start,
                    },
                    false,
                );
            }
            Tag::Item => {
                self.open(NodeKind::Item, false);
            }
            Tag::Table(alignments) => {
                self.alignments = alignments;
                self.open(NodeKind::Table, false);
            }
            Tag::TableHead => {
                self.open(NodeKind::TableHead, false);
                self.column = 0;
                self.open(NodeKind::TableRow, true);
            }
            Tag::TableRow => {
                // Body rows share the TableBody container.
                if matches!(self.ast.kind(self.top()), NodeKind::Table) {
                    self.open(NodeKind::TableBody, true);
                }
                self.column = 0;
                self.open(NodeKind::TableRow, false);
            }
            Tag::TableCell => {
                let alignment = self
                    .alignments
                    .get(self.column)
                    .map(|a| cell_alignment(*a))
                    .unwrap_or_default();
                self.column += 1;
                self.open(NodeKind::TableCell { alignment }, false);
            }
            Tag::Emphasis => {
                self.open(NodeKind::Emphasis, false);
            }
            Tag::Strong => {
                self.open(NodeKind::Strong, false);
            }
            Tag::Link {
                dest_url, title, ..
            } => {
                self.open(
                    NodeKind::Link {
                        destination: dest_url.into_string(),
                        title: title.into_string(),
                    },
                    false,
                );
            }
            other => {
                self.open(NodeKind::Unknown(variant_name(&other)), false);
            }
        }
    }
}

fn is_block(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Paragraph
            | Tag::Heading { .. }
            | Tag::BlockQuote(_)
            | Tag::CodeBlock(_)
            | Tag::HtmlBlock
            | Tag::List(_)
            | Tag::Item
            | Tag::FootnoteDefinition(_)
            | Tag::Table(_)
            | Tag::TableHead
            | Tag::TableRow
            | Tag::TableCell
            | Tag::MetadataBlock(_)
    )
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn cell_alignment(alignment: Alignment) -> CellAlignment {
    match alignment {
        Alignment::None => CellAlignment::Unset,
        Alignment::Left => CellAlignment::Left,
        Alignment::Center => CellAlignment::Center,
        Alignment::Right => CellAlignment::Right,
    }
}

/// `Image { .. }` -> `Image`, `Html("..")` -> `Html`.
fn variant_name(value: &impl Debug) -> String {
    let debug = format!("{:?}", value);
    debug
        .split(|c: char| !c.is_ascii_alphanumeric())
        .next()
        .unwrap_or_default()
        .to_string()
}
