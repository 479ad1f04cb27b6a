//! Visible-width measurement and line alignment for text that may carry
//! ANSI escape sequences.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

use crate::config::Align;

/// CSI and OSC escape sequences (SGR colors, hyperlinks, cursor moves).
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[\x1b\x{9b}][\[\]()#;?]*(?:",
        r"(?:(?:(?:;[-a-zA-Z\d/#&.:=?%@~_]+)*|[a-zA-Z\d]+(?:;[-a-zA-Z\d/#&.:=?%@~_]*)*)?\x07)",
        r"|(?:(?:\d{1,4}(?:;\d{0,4})*)?[\dA-PR-TZcf-ntqry=><~]))",
    ))
    .expect("ansi escape pattern")
});

/// Remove every escape sequence from `text`.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}

/// Terminal columns occupied by a single line of text.
///
/// Escape sequences and control characters take no room; wide characters
/// (CJK, emoji) take two columns.
pub fn visible_width(line: &str) -> usize {
    let stripped = strip_ansi(line);
    if stripped.chars().any(char::is_control) {
        let printable: String = stripped.chars().filter(|c| !c.is_control()).collect();
        return printable.width();
    }
    stripped.width()
}

/// Visible width of the widest line in `text`.
pub fn widest_line(text: &str) -> usize {
    text.split('\n').map(visible_width).max().unwrap_or(0)
}

/// Align each line of `text` against the widest line.
///
/// Lines are only ever shifted right by prepending spaces: `center` adds
/// half the slack (rounded down), `right` adds all of it. `left` returns
/// the text untouched. The line count is preserved.
pub fn align_lines(text: &str, align: Align) -> String {
    if align == Align::Left {
        return text.to_string();
    }

    let lines: Vec<(&str, usize)> = text.split('\n').map(|l| (l, visible_width(l))).collect();
    let widest = lines.iter().map(|(_, w)| *w).max().unwrap_or(0);

    lines
        .iter()
        .map(|(line, width)| {
            let slack = widest - width;
            let pad = match align {
                Align::Center => slack / 2,
                _ => slack,
            };
            format!("{}{}", " ".repeat(pad), line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_text.rs"]
mod tests;
