use crate::document::{
    BodyElement, Inline, ParagraphId, Run, RunContent, TableId, TableWidth, WordDocument,
};
use crate::render::Renderer;
use crate::Result;
use serde_json::{json, Value};

/// Nested JSON dump of the document body and its numbering definitions.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn to_value(&self, document: &WordDocument) -> Result<Value> {
        let body: Vec<Value> = document
            .body()
            .iter()
            .map(|element| match element {
                BodyElement::Paragraph(id) => paragraph_value(document, *id),
                BodyElement::Table(id) => table_value(document, *id),
            })
            .collect();

        Ok(json!({
            "body": body,
            "numbering": serde_json::to_value(document.numbering())?,
        }))
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, document: &WordDocument) -> Result<String> {
        let value = self.to_value(document)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }
}

fn run_value(run: &Run) -> Value {
    let content: Vec<Value> = run
        .content
        .iter()
        .map(|item| match item {
            RunContent::Text(t) => json!({ "text": t }),
            RunContent::Break => json!({ "break": true }),
        })
        .collect();
    json!({
        "bold": run.bold,
        "italic": run.italic,
        "style": run.style,
        "content": content,
    })
}

fn paragraph_value(document: &WordDocument, id: ParagraphId) -> Value {
    let Some(para) = document.paragraph(id) else {
        return Value::Null;
    };

    let content: Vec<Value> = para
        .content
        .iter()
        .filter_map(|inline| match inline {
            Inline::Run(run) => document.run(*run).map(|r| json!({ "run": run_value(r) })),
            Inline::Hyperlink(link) => document.hyperlink(*link).map(|link| {
                let runs: Vec<Value> = link
                    .runs
                    .iter()
                    .filter_map(|r| document.run(*r))
                    .map(run_value)
                    .collect();
                json!({
                    "hyperlink": {
                        "target": link.target,
                        "tooltip": link.tooltip,
                        "runs": runs,
                    }
                })
            }),
        })
        .collect();

    json!({
        "paragraph": {
            "style": para.style,
            "alignment": para.alignment.map(|a| a.as_str()),
            "numbering": para.numbering.map(|n| json!({ "id": n.id, "level": n.level })),
            "content": content,
        }
    })
}

fn table_value(document: &WordDocument, id: TableId) -> Value {
    let Some(table) = document.table(id) else {
        return Value::Null;
    };

    let width = match table.width {
        TableWidth::Auto => json!("auto"),
        TableWidth::Percent(pct) => json!(format!("{}%", pct)),
    };
    let rows: Vec<Value> = table
        .rows
        .iter()
        .filter_map(|r| document.row(*r))
        .map(|row| {
            let cells: Vec<Value> = row
                .cells
                .iter()
                .filter_map(|c| document.cell(*c))
                .map(|cell| {
                    let paragraphs: Vec<Value> = cell
                        .paragraphs
                        .iter()
                        .map(|p| paragraph_value(document, *p))
                        .collect();
                    json!({ "paragraphs": paragraphs })
                })
                .collect();
            json!({ "cells": cells })
        })
        .collect();

    json!({
        "table": {
            "style": table.style,
            "width": width,
            "rows": rows,
        }
    })
}
