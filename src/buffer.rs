//! Buffer representation - the editable text and the spans laid over it

use crate::syntax::{Color, Span, SpanKind};

/// Text plus its markup
///
/// Offsets are byte offsets into the text. Spans follow the text through
/// edits: a span never grows to take in text inserted at either of its
/// edges, and a span whose whole range is deleted disappears.
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    /// Full text content
    text: String,
    /// Applied spans, in application order
    spans: Vec<Span>,
}

impl Buffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text` with no markup
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// All applied spans
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Replace `start..end` with `insert`
    ///
    /// The range may be given in either order. Offsets are clamped to the
    /// text and snapped back to character boundaries. Returns the range
    /// the new text occupies.
    pub fn replace(&mut self, start: usize, end: usize, insert: &str) -> (usize, usize) {
        let (lo, hi) = (start.min(end), start.max(end));
        let start = self.floor_boundary(lo);
        let end = self.floor_boundary(hi);
        self.text.replace_range(start..end, insert);

        let inserted_end = start + insert.len();
        for span in &mut self.spans {
            span.start = shift_offset(span.start, start, end, inserted_end, true);
            span.end = shift_offset(span.end, start, end, inserted_end, false);
        }
        self.spans.retain(|s| !s.is_empty());

        (start, inserted_end)
    }

    /// Drop every highlighter span, keeping tab markers
    pub fn clear_color_spans(&mut self) {
        self.spans.retain(|s| !s.is_color());
    }

    /// Replace the highlighter spans with a freshly computed set
    pub fn set_color_spans(&mut self, spans: Vec<Span>) {
        self.clear_color_spans();
        self.spans.extend(spans);
    }

    /// Drop every tab marker
    pub fn clear_fixed_width_spans(&mut self) {
        self.spans.retain(|s| s.is_color());
    }

    /// Apply tab markers, replacing any marker already at the same offset
    pub fn add_fixed_width_spans(&mut self, markers: Vec<Span>) {
        for marker in markers {
            self.spans.retain(|s| {
                !(matches!(s.kind, SpanKind::FixedWidth(_)) && s.start == marker.start)
            });
            self.spans.push(marker);
        }
    }

    /// Visible foreground and background at `pos`, last-applied wins
    pub fn style_at(&self, pos: usize) -> (Option<Color>, Option<Color>) {
        let mut fg = None;
        let mut bg = None;
        for span in self.spans.iter().filter(|s| s.contains(pos)) {
            match span.kind {
                SpanKind::Foreground(c) => fg = Some(c),
                SpanKind::Background(c) => bg = Some(c),
                SpanKind::FixedWidth(_) => {}
            }
        }
        (fg, bg)
    }

    /// Fixed render width of the character at `pos`, if it has one
    pub fn cell_width_at(&self, pos: usize) -> Option<usize> {
        self.spans.iter().rev().find_map(|s| match s.kind {
            SpanKind::FixedWidth(w) if s.contains(pos) => Some(w),
            _ => None,
        })
    }

    fn floor_boundary(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}

/// Where `offset` lands after `start..end` is replaced by text ending at
/// `inserted_end`
///
/// Span starts sitting exactly at an insertion point move past the new
/// text; span ends stay put.
fn shift_offset(offset: usize, start: usize, end: usize, inserted_end: usize, is_start: bool) -> usize {
    if offset < start || (offset == start && !is_start) {
        offset
    } else if offset >= end {
        offset - end + inserted_end
    } else if is_start {
        inserted_end
    } else {
        start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color(0xFF0000);
    const BLUE: Color = Color(0x0000FF);

    #[test]
    fn test_replace_text() {
        let mut buffer = Buffer::from_text("hello world");
        assert_eq!(buffer.replace(6, 11, "there"), (6, 11));
        assert_eq!(buffer.text(), "hello there");
        assert_eq!(buffer.replace(5, 5, ","), (5, 6));
        assert_eq!(buffer.text(), "hello, there");
        assert_eq!(buffer.replace(99, 99, "!"), (12, 13));
        assert_eq!(buffer.text(), "hello, there!");
    }

    #[test]
    fn test_replace_reversed_range() {
        let mut buffer = Buffer::from_text("hello world");
        assert_eq!(buffer.replace(11, 6, "there"), (6, 11));
        assert_eq!(buffer.text(), "hello there");
    }

    #[test]
    fn test_spans_shift_after_edit() {
        let mut buffer = Buffer::from_text("ab cd");
        buffer.set_color_spans(vec![Span::foreground(3, 5, RED)]);

        buffer.replace(0, 0, "xx");
        assert_eq!(buffer.spans(), &[Span::foreground(5, 7, RED)]);
    }

    #[test]
    fn test_spans_do_not_grow_at_edges() {
        let mut buffer = Buffer::from_text("abcd");
        buffer.set_color_spans(vec![Span::foreground(1, 3, RED)]);

        // insertion at the start pushes the span along
        buffer.replace(1, 1, "_");
        assert_eq!(buffer.spans(), &[Span::foreground(2, 4, RED)]);
        // insertion at the end leaves it alone
        buffer.replace(4, 4, "_");
        assert_eq!(buffer.spans(), &[Span::foreground(2, 4, RED)]);
    }

    #[test]
    fn test_deleted_span_disappears() {
        let mut buffer = Buffer::from_text("a\tb");
        buffer.add_fixed_width_spans(vec![Span::fixed_width(1, 4)]);
        buffer.replace(1, 2, "");
        assert!(buffer.spans().is_empty());
        assert_eq!(buffer.text(), "ab");
    }

    #[test]
    fn test_partial_delete_trims_span() {
        let mut buffer = Buffer::from_text("abcdef");
        buffer.set_color_spans(vec![Span::foreground(1, 4, RED)]);
        buffer.replace(2, 5, "");
        assert_eq!(buffer.spans(), &[Span::foreground(1, 2, RED)]);
    }

    #[test]
    fn test_color_spans_replace_previous_pass() {
        let mut buffer = Buffer::from_text("a\tb");
        buffer.add_fixed_width_spans(vec![Span::fixed_width(1, 4)]);
        buffer.set_color_spans(vec![Span::foreground(0, 1, RED)]);
        buffer.set_color_spans(vec![Span::foreground(2, 3, BLUE)]);

        assert_eq!(
            buffer.spans(),
            &[Span::fixed_width(1, 4), Span::foreground(2, 3, BLUE)]
        );
    }

    #[test]
    fn test_style_at_last_wins() {
        let mut buffer = Buffer::from_text("abc");
        buffer.set_color_spans(vec![
            Span::background(0, 3, BLUE),
            Span::foreground(0, 3, RED),
            Span::foreground(1, 2, BLUE),
        ]);

        assert_eq!(buffer.style_at(0), (Some(RED), Some(BLUE)));
        assert_eq!(buffer.style_at(1), (Some(BLUE), Some(BLUE)));
        assert_eq!(buffer.style_at(3), (None, None));
    }

    #[test]
    fn test_fixed_width_marker_not_duplicated() {
        let mut buffer = Buffer::from_text("\t");
        buffer.add_fixed_width_spans(vec![Span::fixed_width(0, 4)]);
        buffer.add_fixed_width_spans(vec![Span::fixed_width(0, 8)]);
        assert_eq!(buffer.spans().len(), 1);
        assert_eq!(buffer.cell_width_at(0), Some(8));
        assert_eq!(buffer.cell_width_at(1), None);
    }
}
