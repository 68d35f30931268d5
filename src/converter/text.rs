//! Run text helpers shared by flowed paragraphs, code blocks and table cells.

use crate::document::{OutputModel, RunId};
use crate::Result;

/// Two-character `\n` escape that starts a new paragraph inside a table cell.
pub(crate) const ESCAPED_NEWLINE: &str = "\\n";

/// Writes `text` into `run`, turning each line ending into an explicit break.
///
/// Every line is emitted, empty ones included, so `k` line endings always
/// give `k` breaks and `k + 1` text segments with no break after the last.
pub(crate) fn write_breaking_text<M: OutputModel + ?Sized>(
    model: &mut M,
    run: RunId,
    text: &str,
) -> Result<()> {
    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        model.append_text(run, line.strip_suffix('\r').unwrap_or(line))?;
        if lines.peek().is_some() {
            model.append_break(run)?;
        }
    }
    Ok(())
}

/// Splits table cell text on the escaped newline sequence.
pub(crate) fn split_cell_text(text: &str) -> impl Iterator<Item = &str> {
    text.split(ESCAPED_NEWLINE)
}
