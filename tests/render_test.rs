use md2docx::config::RenderConfig;
use md2docx::document::{Alignment, NumberingId, ParagraphNumbering, TableWidth};
use md2docx::{Error, MarkdownToDocx, RenderOptions, UnsupportedNodePolicy, WordDocument};
use pretty_assertions::assert_eq;

fn converter() -> MarkdownToDocx {
    let options: RenderOptions = RenderConfig::builtin()
        .expect("builtin config must parse")
        .into();
    MarkdownToDocx::new(options)
}

fn render(markdown: &str) -> WordDocument {
    converter()
        .convert_str(markdown)
        .expect("render must succeed")
}

fn runs_of(doc: &WordDocument, index: usize) -> Vec<(String, bool, bool)> {
    let (id, _) = doc
        .body_paragraphs()
        .nth(index)
        .expect("paragraph must exist");
    doc.paragraph_runs(id)
        .into_iter()
        .map(|run| (run.text(), run.bold, run.italic))
        .collect()
}

#[test]
fn test_paragraph_count_and_text() {
    let doc = render("one\n\ntwo words\n\nthree\n");
    let texts: Vec<String> = doc
        .body_paragraphs()
        .map(|(id, _)| doc.paragraph_text(id))
        .collect();
    assert_eq!(texts, vec!["one", "two words", "three"]);
}

#[test]
fn test_hello_world_runs() {
    let doc = render("hello **world**\n");
    assert_eq!(doc.body().len(), 1);
    assert_eq!(
        runs_of(&doc, 0),
        vec![
            ("hello ".to_string(), false, false),
            ("world".to_string(), true, false),
        ]
    );
}

#[test]
fn test_adjacent_strong_spans() {
    let doc = render("**a**b**c**\n");
    assert_eq!(
        runs_of(&doc, 0),
        vec![
            ("a".to_string(), true, false),
            ("b".to_string(), false, false),
            ("c".to_string(), true, false),
        ]
    );
}

#[test]
fn test_strong_inside_emphasis() {
    let doc = render("*x **y** z*\n");
    assert_eq!(
        runs_of(&doc, 0),
        vec![
            ("x ".to_string(), false, true),
            ("y".to_string(), true, true),
            (" z".to_string(), false, true),
        ]
    );
}

#[test]
fn test_soft_break_is_space_run() {
    let doc = render("soft\n*break*\n");
    assert_eq!(
        runs_of(&doc, 0),
        vec![
            ("soft".to_string(), false, false),
            (" ".to_string(), false, false),
            ("break".to_string(), false, true),
        ]
    );
}

#[test]
fn test_hard_break_lands_on_previous_run() {
    let doc = render("first\\\nsecond\n");
    let (id, _) = doc.body_paragraphs().next().unwrap();
    let runs = doc.paragraph_runs(id);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].break_count(), 1);
    assert_eq!(runs[1].text(), "second");
    assert_eq!(doc.paragraph_text(id), "first\nsecond");
}

#[test]
fn test_code_block_breaks_between_lines() {
    let doc = render("```rust\nline1\nline2\nline3\n```\n");
    let (id, para) = doc.body_paragraphs().next().unwrap();
    assert_eq!(para.style.as_deref(), Some("IntenseQuote"));

    let runs = doc.paragraph_runs(id);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].break_count(), 2);
    assert_eq!(runs[0].text(), "line1\nline2\nline3");
}

#[test]
fn test_inline_code_style() {
    let doc = render("run `cargo` now\n");
    let (id, _) = doc.body_paragraphs().next().unwrap();
    let runs = doc.paragraph_runs(id);
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[1].text(), "cargo");
    assert_eq!(runs[1].style.as_deref(), Some("BookTitle"));
    assert_eq!(runs[0].style, None);
}

#[test]
fn test_heading_styles_clamp_at_five() {
    let doc = render("# One\n\n## Two\n\n###### Six\n");
    let styles: Vec<Option<String>> = doc
        .body_paragraphs()
        .map(|(_, p)| p.style.clone())
        .collect();
    assert_eq!(
        styles,
        vec![
            Some("Heading1".to_string()),
            Some("Heading2".to_string()),
            Some("Heading5".to_string()),
        ]
    );
}

#[test]
fn test_block_quote_styles_last_paragraph() {
    let doc = render("> first\n>\n> second\n\nafter\n");
    let styles: Vec<Option<String>> = doc
        .body_paragraphs()
        .map(|(_, p)| p.style.clone())
        .collect();
    assert_eq!(styles, vec![None, Some("Quote".to_string()), None]);
}

#[test]
fn test_link_becomes_single_hyperlink_run() {
    let doc = render("see [click here](https://example.com \"Tip\")\n");
    let (id, _) = doc.body_paragraphs().next().unwrap();

    let runs = doc.paragraph_runs(id);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].text(), "see ");

    let links = doc.paragraph_hyperlinks(id);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].target, "https://example.com");
    assert_eq!(links[0].tooltip.as_deref(), Some("Tip"));
    assert_eq!(links[0].runs.len(), 1);
    let link_run = doc.run(links[0].runs[0]).unwrap();
    assert_eq!(link_run.text(), "click here");
    assert_eq!(link_run.style.as_deref(), Some("Hyperlink"));
}

#[test]
fn test_single_level_list_has_no_numbering() {
    let doc = render("- a\n- b\n");
    let paragraphs: Vec<_> = doc.body_paragraphs().map(|(_, p)| p.clone()).collect();
    assert_eq!(paragraphs.len(), 2);
    for para in paragraphs {
        assert_eq!(para.style.as_deref(), Some("ListParagraph"));
        assert_eq!(para.numbering, None);
    }
}

#[test]
fn test_nested_lists_resolve_numbering() {
    let doc = render("- outer\n  - inner\n\n1. first\n   1. nested\n");
    let numbering: Vec<(Option<String>, Option<ParagraphNumbering>)> = doc
        .body_paragraphs()
        .map(|(_, p)| (p.style.clone(), p.numbering))
        .collect();

    assert_eq!(
        numbering,
        vec![
            (Some("ListParagraph".to_string()), None),
            (
                Some("ListParagraph".to_string()),
                Some(ParagraphNumbering {
                    id: NumberingId(2),
                    level: 1
                })
            ),
            (Some("ListOrdered".to_string()), None),
            (
                Some("ListOrdered".to_string()),
                Some(ParagraphNumbering {
                    id: NumberingId(1),
                    level: 1
                })
            ),
        ]
    );
}

#[test]
fn test_nested_list_without_definitions_still_renders() {
    let options = RenderOptions {
        styles: RenderConfig::builtin().unwrap().styles,
        ..Default::default()
    };
    let doc = MarkdownToDocx::new(options)
        .convert_str("- outer\n  - inner\n")
        .expect("missing numbering is not fatal");

    let last = doc.body_paragraphs().last().unwrap().1;
    assert_eq!(last.style.as_deref(), Some("ListParagraph"));
    assert_eq!(last.numbering, None);
}

#[test]
fn test_table_cells_and_escaped_newlines() {
    let doc = render("| A | B |\n|:-:|--:|\n| **x**\\ny\\nz | w |\n");
    assert_eq!(doc.body_paragraphs().count(), 0);

    let (_, table) = doc.body_tables().next().expect("table rendered");
    assert_eq!(table.width, TableWidth::FULL);
    assert_eq!(table.style.as_deref(), Some("GridTable4-Accent1"));
    assert_eq!(table.rows.len(), 2);

    let header = doc.row(table.rows[0]).unwrap();
    let header_text: Vec<String> = header
        .cells
        .iter()
        .map(|c| doc.paragraph_text(doc.cell(*c).unwrap().paragraphs[0]))
        .collect();
    assert_eq!(header_text, vec!["A", "B"]);

    let body = doc.row(table.rows[1]).unwrap();
    let first = doc.cell(body.cells[0]).unwrap();
    let texts: Vec<String> = first
        .paragraphs
        .iter()
        .map(|p| doc.paragraph_text(*p))
        .collect();
    assert_eq!(texts, vec!["x", "y", "z"]);
    for para in &first.paragraphs {
        assert_eq!(doc.paragraph(*para).unwrap().alignment, Some(Alignment::Center));
    }
    assert!(doc.paragraph_runs(first.paragraphs[0])[0].bold);

    let second = doc.cell(body.cells[1]).unwrap();
    assert_eq!(second.paragraphs.len(), 1);
    assert_eq!(
        doc.paragraph(second.paragraphs[0]).unwrap().alignment,
        Some(Alignment::Right)
    );
}

#[test]
fn test_unsupported_policy() {
    let markdown = "before\n\n~~gone~~\n";

    let doc = render(markdown);
    let (id, _) = doc.body_paragraphs().nth(1).unwrap();
    assert_eq!(doc.paragraph_text(id), "gone");

    let strict = MarkdownToDocx::new(RenderOptions {
        unsupported_nodes: UnsupportedNodePolicy::Fail,
        ..Default::default()
    });
    let mut partial = WordDocument::new();
    let err = strict.render_into(markdown, &mut partial).unwrap_err();
    assert!(matches!(err, Error::UnsupportedNodeKind(ref kind) if kind == "Strikethrough"));
    // Already emitted output is kept.
    assert_eq!(partial.body().len(), 2);
}

#[test]
fn test_render_into_appends() {
    let converter = converter();
    let mut doc = WordDocument::new();
    converter.render_into("first\n", &mut doc).unwrap();
    converter.render_into("# second\n", &mut doc).unwrap();

    let texts: Vec<String> = doc
        .body_paragraphs()
        .map(|(id, _)| doc.paragraph_text(id))
        .collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[test]
fn test_hard_break_after_ignored_image() {
    for markdown in ["![](logo.png)\\\nnext\n", "<span></span>\\\nnext\n"] {
        let doc = render(markdown);
        let (id, _) = doc.body_paragraphs().next().expect("paragraph rendered");
        let runs = doc.paragraph_runs(id);
        assert_eq!(runs[0].break_count(), 1, "{:?}", markdown);
        assert_eq!(runs.last().map(|r| r.text()), Some("next".to_string()));
    }
}

#[test]
fn test_soft_break_inside_link_keeps_one_hyperlink() {
    let doc = render("[a\nb](http://x)\n");
    let (id, _) = doc.body_paragraphs().next().unwrap();

    assert!(doc.paragraph_runs(id).is_empty());
    let links = doc.paragraph_hyperlinks(id);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].target, "http://x");
    assert_eq!(doc.paragraph_text(id), "a b");
}
