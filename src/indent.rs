//! Auto-indent for newline keystrokes
//!
//! When a single newline is typed, the editor replaces it with the result
//! of [`compute_insertion`]: the newline, the current line's leading
//! whitespace, and one extra tab when the text before the cursor leaves
//! something open.
//!
//! The scan works on raw characters. It knows nothing about strings or
//! comments, so brackets and operators inside them count too.

use log::trace;

/// Last characters of a line that ask for a deeper next line
const CONTINUATION_CHARS: &[u8] = b"{+-*/%^=";

fn is_blank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// Signed open/close balance of the line prefix ending at `cursor`, and
/// the offset where that line starts
///
/// Negative means the next line should be indented one level deeper.
pub fn continuation_level(text: &str, cursor: usize) -> (i32, usize) {
    let bytes = text.as_bytes();
    let mut level = 0;
    let mut seen_non_blank = false;
    let mut pos = cursor.min(bytes.len());

    while pos > 0 {
        let c = bytes[pos - 1];
        if c == b'\n' {
            break;
        }
        if !is_blank(c) {
            if !seen_non_blank {
                if CONTINUATION_CHARS.contains(&c) {
                    level -= 1;
                }
                seen_non_blank = true;
            }
            match c {
                b'(' => level -= 1,
                b')' => level += 1,
                _ => {}
            }
        }
        pos -= 1;
    }

    (level, pos)
}

/// Text to insert in place of a newline typed over `start..end`
///
/// `start..end` is the replaced range; it is empty when nothing is
/// selected. The result always starts with `\n`.
pub fn compute_insertion(text: &str, start: usize, end: usize) -> String {
    let bytes = text.as_bytes();
    let start = start.min(bytes.len());
    let end = end.clamp(start, bytes.len());

    let (level, line_start) = continuation_level(text, start);

    // A `//` in the indentation carries over as a comment marker, unless
    // the cursor sits at the end of its line.
    let cursor_mid_line = bytes.get(start).is_some_and(|&c| c != b'\n');
    let mut indent_end = line_start;
    while indent_end < end {
        let c = bytes[indent_end];
        if cursor_mid_line && c == b'/' && indent_end + 1 < end && bytes[indent_end + 1] == b'/' {
            indent_end = (indent_end + 3).min(end);
            while !text.is_char_boundary(indent_end) {
                indent_end -= 1;
            }
            break;
        }
        if !is_blank(c) {
            break;
        }
        indent_end += 1;
    }

    let mut insertion = String::with_capacity(indent_end - line_start + 2);
    insertion.push('\n');
    insertion.push_str(&text[line_start..indent_end]);
    if level < 0 {
        insertion.push('\t');
    }

    trace!(
        "auto-indent at {}: level {}, inserting {:?}",
        start,
        level,
        insertion
    );
    insertion
}

/// Newline insertion for a collapsed cursor
pub fn newline_at(text: &str, cursor: usize) -> String {
    compute_insertion(text, cursor, cursor)
}
