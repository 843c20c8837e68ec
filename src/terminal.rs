//! Terminal rendering using crossterm
//!
//! Writes a highlighted buffer as 24-bit colored text. Tabs carrying a
//! fixed-width marker become that many blank cells.

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::buffer::Buffer;
use crate::error::Result;
use crate::syntax::{Color, Theme};

fn term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r(),
        g: color.g(),
        b: color.b(),
    }
}

/// Render `buffer` to `out`
///
/// Unpainted text uses the theme's text color; unpainted cells the theme
/// background. Colors are reset before every newline so the terminal does
/// not extend them to the right edge.
pub fn render<W: Write>(out: &mut W, buffer: &Buffer, theme: &Theme) -> Result<()> {
    let mut current: Option<(Color, Color)> = None;

    for (pos, ch) in buffer.text().char_indices() {
        if ch == '\n' {
            queue!(out, ResetColor, Print('\n'))?;
            current = None;
            continue;
        }

        let (fg, bg) = buffer.style_at(pos);
        let colors = (fg.unwrap_or(theme.text), bg.unwrap_or(theme.background));
        if current != Some(colors) {
            queue!(
                out,
                SetForegroundColor(term_color(colors.0)),
                SetBackgroundColor(term_color(colors.1))
            )?;
            current = Some(colors);
        }

        match buffer.cell_width_at(pos) {
            Some(width) => queue!(out, Print(" ".repeat(width)))?,
            None => queue!(out, Print(ch))?,
        }
    }

    queue!(out, ResetColor)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;

    fn rendered(buffer: &Buffer) -> String {
        let mut out = Vec::new();
        render(&mut out, buffer, &Theme::one_dark()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_plain_text() {
        let output = rendered(&Buffer::from_text("ab\ncd"));
        assert!(output.contains("ab"));
        assert!(output.contains("cd"));
        // text color of One Dark
        assert!(output.contains("38;2;151;159;173"));
    }

    #[test]
    fn test_render_uses_span_colors() {
        let mut buffer = Buffer::from_text("x");
        buffer.set_color_spans(vec![Span::foreground(0, 1, Color(0xFF0000))]);
        assert!(rendered(&buffer).contains("38;2;255;0;0"));
    }

    #[test]
    fn test_render_fixed_width_tab() {
        let mut buffer = Buffer::from_text("\tx");
        buffer.add_fixed_width_spans(vec![Span::fixed_width(0, 3)]);
        let output = rendered(&buffer);
        assert!(output.contains("   x"));
        assert!(!output.contains('\t'));
    }
}
