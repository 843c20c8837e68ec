//! Fixed-width tab markers
//!
//! Tabs are drawn as blank boxes of a configured width rather than
//! jumping to the next tab stop.

use log::trace;
use unicode_width::UnicodeWidthStr;

use crate::syntax::Span;

/// Glyph whose width defines one "character" of tab width
const REFERENCE_GLYPH: &str = "m";

/// Cell width of a tab that is `characters` reference glyphs wide
pub fn tab_cell_width(characters: usize) -> usize {
    REFERENCE_GLYPH.width() * characters
}

/// Fixed-width markers for every tab in `start..end`
///
/// Returns nothing when `tab_width` is 0, leaving tabs at their native
/// width.
pub fn tag_tabs(text: &str, start: usize, end: usize, tab_width: usize) -> Vec<Span> {
    if tab_width < 1 {
        return Vec::new();
    }
    let end = end.min(text.len());
    let start = start.min(end);

    let markers: Vec<Span> = text.as_bytes()[start..end]
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'\t')
        .map(|(i, _)| Span::fixed_width(start + i, tab_width))
        .collect();

    trace!("tagged {} tabs in {}..{}", markers.len(), start, end);
    markers
}
