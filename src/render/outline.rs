use crate::document::{
    BodyElement, Inline, ParagraphId, Run, RunContent, TableId, TableWidth, WordDocument,
};
use crate::render::Renderer;
use crate::Result;

/// Human-readable outline, one line per paragraph.
///
/// ```text
/// ¶ [Heading1] Title
/// ¶ hello **world** [link](https://example.com "tip")
/// table [GridTable4] width=100%
///   row
///     cell
///       ¶ {center} text
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct OutlineRenderer;

impl Renderer for OutlineRenderer {
    fn render(&self, document: &WordDocument) -> Result<String> {
        let mut out = String::new();
        for element in document.body() {
            match element {
                BodyElement::Paragraph(id) => render_paragraph(document, *id, 0, &mut out),
                BodyElement::Table(id) => render_table(document, *id, &mut out),
            }
        }
        Ok(out)
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn render_paragraph(document: &WordDocument, id: ParagraphId, depth: usize, out: &mut String) {
    let Some(para) = document.paragraph(id) else {
        return;
    };

    indent(out, depth);
    out.push('¶');
    if let Some(style) = &para.style {
        out.push_str(&format!(" [{}]", style));
    }
    if let Some(alignment) = para.alignment {
        out.push_str(&format!(" {{{}}}", alignment.as_str()));
    }
    if let Some(numbering) = para.numbering {
        out.push_str(&format!(" (num {} lvl {})", numbering.id.0, numbering.level));
    }
    if !para.content.is_empty() {
        out.push(' ');
    }

    for inline in &para.content {
        match inline {
            Inline::Run(run) => {
                if let Some(run) = document.run(*run) {
                    out.push_str(&format_run(run));
                }
            }
            Inline::Hyperlink(link) => {
                let Some(link) = document.hyperlink(*link) else {
                    continue;
                };
                let text: String = link
                    .runs
                    .iter()
                    .filter_map(|r| document.run(*r))
                    .map(run_text)
                    .collect();
                match &link.tooltip {
                    Some(tip) => out.push_str(&format!("[{}]({} {:?})", text, link.target, tip)),
                    None => out.push_str(&format!("[{}]({})", text, link.target)),
                }
            }
        }
    }
    out.push('\n');
}

fn run_text(run: &Run) -> String {
    let mut text = String::new();
    for item in &run.content {
        match item {
            RunContent::Text(t) => text.push_str(t),
            RunContent::Break => text.push('⏎'),
        }
    }
    text
}

fn format_run(run: &Run) -> String {
    let text = run_text(run);
    let mut result = match (run.bold, run.italic) {
        (true, true) => format!("***{}***", text),
        (true, false) => format!("**{}**", text),
        (false, true) => format!("*{}*", text),
        (false, false) => text,
    };
    if let Some(style) = &run.style {
        result = format!("`{}`{{{}}}", result, style);
    }
    result
}

fn render_table(document: &WordDocument, id: TableId, out: &mut String) {
    let Some(table) = document.table(id) else {
        return;
    };

    out.push_str("table");
    if let Some(style) = &table.style {
        out.push_str(&format!(" [{}]", style));
    }
    if let TableWidth::Percent(pct) = table.width {
        out.push_str(&format!(" width={}%", pct));
    }
    out.push('\n');

    for row in table.rows.iter().filter_map(|r| document.row(*r)) {
        indent(out, 1);
        out.push_str("row\n");
        for cell in row.cells.iter().filter_map(|c| document.cell(*c)) {
            indent(out, 2);
            out.push_str("cell\n");
            for para in &cell.paragraphs {
                render_paragraph(document, *para, 3, out);
            }
        }
    }
}
