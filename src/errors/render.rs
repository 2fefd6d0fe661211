//! Human-facing rendering of syntax errors.
//!
//! ```text
//! test.lox:1:9: syntax error: binary operator * must have left and right operands
//! var a = * 2;
//!         ^
//! ```
//!
//! Underlines are measured in terminal cells rather than bytes, so they
//! stay aligned under wide and combining characters. Lines that are not
//! valid UTF-8 are never printed; the error falls back to its header.

use unicode_width::UnicodeWidthChar;

use super::errors::SyntaxError;

const HIGHLIGHT: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

pub fn render_syntax_error(error: &SyntaxError, color: bool) -> String {
    let mut rendered = format!("{}: syntax error: {}", error.start, error.message());

    if let Some(excerpt) = excerpt(error, color) {
        rendered.push('\n');
        rendered.push_str(&excerpt);
    }

    rendered
}

fn excerpt(error: &SyntaxError, color: bool) -> Option<String> {
    let (start, end) = (&error.start, &error.end);
    let file = &start.file;

    if start == end {
        let line = decode(file.line(start.line)?)?;
        return (!line.is_empty()).then(|| line.to_string());
    }

    // an end at the very start of a line closes the span on the line before
    let last_line = if end.line > start.line && end.column <= 1 {
        end.line - 1
    } else {
        end.line
    };
    if last_line < start.line {
        return None;
    }

    let mut lines = Vec::new();
    for number in start.line..=last_line {
        let text = decode(file.line(number)?)?;

        let to = if number == end.line {
            end.column.saturating_sub(1).min(text.len())
        } else {
            text.len()
        };
        let from = if number == start.line {
            start.column.saturating_sub(1).min(to)
        } else {
            0
        };

        let before = text.get(..from)?;
        let spanned = text.get(from..to)?;
        let after = text.get(to..)?;

        lines.push(format!("{}{}{}", before, paint(spanned, color), after));

        let carets = display_width(spanned);
        if carets > 0 {
            lines.push(format!(
                "{}{}",
                indent(before),
                paint(&"^".repeat(carets), color)
            ));
        }
    }

    Some(lines.join("\n"))
}

fn decode(line: &[u8]) -> Option<&str> {
    std::str::from_utf8(line).ok()
}

fn paint(text: &str, color: bool) -> String {
    if color && !text.is_empty() {
        format!("{}{}{}", HIGHLIGHT, text, RESET)
    } else {
        text.to_string()
    }
}

fn cell_width(ch: char) -> usize {
    if ch == '\t' {
        return 1;
    }
    ch.width().unwrap_or(0)
}

/// Number of terminal cells `text` occupies.
pub fn display_width(text: &str) -> usize {
    text.chars().map(cell_width).sum()
}

/// Blank padding as wide as `text`. Tabs are kept so the terminal expands
/// them the same way it expanded the source line above.
fn indent(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\t' => String::from("\t"),
            _ => " ".repeat(cell_width(ch)),
        })
        .collect()
}
