//! Whole-buffer highlighter
//!
//! Every pass recomputes the markup from scratch: an optional error-line
//! background first, then one foreground span per match of each rule in
//! declaration order. Consumers paint spans in the order returned, so a
//! later rule wins wherever it overlaps an earlier one.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use super::language::LanguageDefinition;
use super::style::Span;
use super::theme::Theme;

/// One line including its newline. A last line without `\n` never matches.
fn line_pattern() -> &'static Regex {
    static LINE: OnceLock<Regex> = OnceLock::new();
    LINE.get_or_init(|| Regex::new(r".*\n").expect("line pattern is valid"))
}

/// Byte range of the 1-based `line`, if the buffer has that many
/// newline-terminated lines
pub fn error_line_range(text: &str, line: usize) -> Option<(usize, usize)> {
    if line == 0 {
        return None;
    }
    line_pattern()
        .find_iter(text)
        .nth(line - 1)
        .map(|m| (m.start(), m.end()))
        .filter(|(start, end)| start <= end && *end <= text.len())
}

/// Compute the spans for `text`
///
/// `error_line` is 1-based; 0 disables the error background.
pub fn highlight(
    text: &str,
    language: &LanguageDefinition,
    theme: &Theme,
    error_line: usize,
) -> Vec<Span> {
    let mut spans = Vec::new();
    if text.is_empty() {
        return spans;
    }

    if let Some((start, end)) = error_line_range(text, error_line) {
        spans.push(Span::background(start, end, theme.error));
    }

    for rule in language.rules() {
        let color = theme.resolve(rule.role);
        for (start, end) in rule.find_all(text) {
            spans.push(Span::foreground(start, end, color));
        }
    }

    debug!(
        "highlighted {} bytes as {}: {} spans (error line {})",
        text.len(),
        language.name,
        spans.len(),
        error_line
    );
    spans
}
