//! Plain-text rendering of line regions.

use crate::boxes::LineBox;

/// Render lines as plain text: line contents joined by newlines, words
/// within a line joined by single spaces. No trailing newline.
#[must_use = "rendered text is returned but not used"]
pub fn render_lines(lines: &[LineBox]) -> String {
    lines
        .iter()
        .map(LineBox::content)
        .collect::<Vec<_>>()
        .join("\n")
}
