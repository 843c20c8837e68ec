//! Style types for text rendering
//!
//! Colors are packed 24-bit RGB values. Spans are the markup the
//! highlighter and tab expansion lay over the buffer text.

use crate::error::{EditorError, Result};

/// A packed `0xRRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// The neutral color returned for unmapped lookups
    pub const NONE: Color = Color(0);

    /// Create a color from its components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Parse a `#RRGGBB` literal
    pub fn parse(literal: &str) -> Result<Self> {
        let hex = literal
            .strip_prefix('#')
            .filter(|h| h.len() == 6)
            .ok_or_else(|| EditorError::InvalidColor(literal.to_string()))?;
        u32::from_str_radix(hex, 16)
            .map(Color)
            .map_err(|_| EditorError::InvalidColor(literal.to_string()))
    }

    pub fn r(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(&self) -> u8 {
        self.0 as u8
    }
}

/// What a span does to the characters it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Paint the text in this color
    Foreground(Color),
    /// Paint behind the text in this color
    Background(Color),
    /// Draw the (single) character as a blank box this many cells wide
    FixedWidth(usize),
}

/// A marked range of buffer text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Attribute applied to this span
    pub kind: SpanKind,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, kind: SpanKind) -> Self {
        Self { start, end, kind }
    }

    pub fn foreground(start: usize, end: usize, color: Color) -> Self {
        Self::new(start, end, SpanKind::Foreground(color))
    }

    pub fn background(start: usize, end: usize, color: Color) -> Self {
        Self::new(start, end, SpanKind::Background(color))
    }

    pub fn fixed_width(offset: usize, width: usize) -> Self {
        Self::new(offset, offset + 1, SpanKind::FixedWidth(width))
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether this span is highlighter output (as opposed to a tab marker)
    pub fn is_color(&self) -> bool {
        matches!(self.kind, SpanKind::Foreground(_) | SpanKind::Background(_))
    }
}
