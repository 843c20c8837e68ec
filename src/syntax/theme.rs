//! Color roles and themes
//!
//! This module defines the closed set of semantic color roles that
//! language rules refer to, and the theme palette that resolves them
//! to concrete colors.

use log::info;

use super::style::Color;
use crate::error::{EditorError, Result};

/// Semantic color roles for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Editor background
    Background,
    /// Plain text
    Text,
    /// Single-line comments (`-- ...`)
    CommentSingle,
    /// Block comments (`--[[ ... ]]`)
    CommentMulti,
    /// Operators and punctuation
    Operator,
    /// Numeric literals
    Number,
    /// String literals
    String,
    /// Language keywords
    Keyword,
    /// Error annotation background
    Error,
    /// Warning annotation background
    Warning,
}

impl ColorRole {
    /// Every role, in declaration order
    pub const ALL: [ColorRole; 10] = [
        ColorRole::Background,
        ColorRole::Text,
        ColorRole::CommentSingle,
        ColorRole::CommentMulti,
        ColorRole::Operator,
        ColorRole::Number,
        ColorRole::String,
        ColorRole::Keyword,
        ColorRole::Error,
        ColorRole::Warning,
    ];

    /// Get a human-readable name for this role
    pub fn name(&self) -> &'static str {
        match self {
            ColorRole::Background => "Background",
            ColorRole::Text => "Text",
            ColorRole::CommentSingle => "CommentSingle",
            ColorRole::CommentMulti => "CommentMulti",
            ColorRole::Operator => "Operator",
            ColorRole::Number => "Number",
            ColorRole::String => "String",
            ColorRole::Keyword => "Keyword",
            ColorRole::Error => "Error",
            ColorRole::Warning => "Warning",
        }
    }

    /// Parse a role from its name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|role| role.name() == name)
    }
}

/// Default error background, shared by every theme
pub const DEFAULT_ERROR: Color = Color(0xFF1919);
/// Default warning background, shared by every theme
pub const DEFAULT_WARNING: Color = Color(0xFFE605);

/// A palette mapping each role to a color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub text: Color,
    pub comment_single: Color,
    pub comment_multi: Color,
    pub operator: Color,
    pub number: Color,
    pub string: Color,
    pub keyword: Color,
    pub error: Color,
    pub warning: Color,
}

impl Theme {
    /// A theme with every syntax role unset and default annotation colors
    pub fn blank(name: &str) -> Self {
        Self {
            name: name.to_string(),
            background: Color::NONE,
            text: Color::NONE,
            comment_single: Color::NONE,
            comment_multi: Color::NONE,
            operator: Color::NONE,
            number: Color::NONE,
            string: Color::NONE,
            keyword: Color::NONE,
            error: DEFAULT_ERROR,
            warning: DEFAULT_WARNING,
        }
    }

    /// The One Dark palette
    pub fn one_dark() -> Self {
        Self {
            background: Color(0x282C34),
            text: Color(0x979FAD),
            comment_single: Color(0x59626F),
            comment_multi: Color(0x59626F),
            operator: Color(0x61AFEF),
            number: Color(0xD19A66),
            string: Color(0x98C379),
            keyword: Color(0xC679DD),
            ..Self::blank("one-dark")
        }
    }

    /// Resolve a role to its color
    pub fn resolve(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Text => self.text,
            ColorRole::CommentSingle => self.comment_single,
            ColorRole::CommentMulti => self.comment_multi,
            ColorRole::Operator => self.operator,
            ColorRole::Number => self.number,
            ColorRole::String => self.string,
            ColorRole::Keyword => self.keyword,
            ColorRole::Error => self.error,
            ColorRole::Warning => self.warning,
        }
    }

    fn slot_mut(&mut self, role: ColorRole) -> &mut Color {
        match role {
            ColorRole::Background => &mut self.background,
            ColorRole::Text => &mut self.text,
            ColorRole::CommentSingle => &mut self.comment_single,
            ColorRole::CommentMulti => &mut self.comment_multi,
            ColorRole::Operator => &mut self.operator,
            ColorRole::Number => &mut self.number,
            ColorRole::String => &mut self.string,
            ColorRole::Keyword => &mut self.keyword,
            ColorRole::Error => &mut self.error,
            ColorRole::Warning => &mut self.warning,
        }
    }

    /// Look up a built-in theme by name
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "one-dark" => Some(Self::one_dark()),
            _ => None,
        }
    }

    /// Load a theme from TOML
    ///
    /// ```toml
    /// name = "paper"
    /// [colors]
    /// Background = "#FFFFFF"
    /// Keyword = "#0000AA"
    /// ```
    ///
    /// Roles left out resolve to the neutral color, except `Error` and
    /// `Warning` which keep their defaults.
    pub fn from_toml(source: &str) -> Result<Self> {
        let table: toml::Table = source.parse()?;
        let name = table
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("custom");
        let mut theme = Self::blank(name);

        if let Some(colors) = table.get("colors") {
            let colors = colors
                .as_table()
                .ok_or_else(|| EditorError::Message("'colors' must be a table".to_string()))?;
            for (key, value) in colors {
                let role = ColorRole::from_name(key)
                    .ok_or_else(|| EditorError::UnknownRole(key.clone()))?;
                let literal = value
                    .as_str()
                    .ok_or_else(|| EditorError::InvalidColor(value.to_string()))?;
                *theme.slot_mut(role) = Color::parse(literal)?;
            }
        }

        info!("loaded theme '{}'", theme.name);
        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::one_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for role in ColorRole::ALL {
            assert_eq!(ColorRole::from_name(role.name()), Some(role));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(ColorRole::from_name("Comment"), None);
        assert_eq!(ColorRole::from_name(""), None);
    }

    #[test]
    fn test_one_dark_palette() {
        let theme = Theme::one_dark();
        assert_eq!(theme.resolve(ColorRole::Keyword), Color(0xC679DD));
        assert_eq!(theme.resolve(ColorRole::String), Color(0x98C379));
        assert_eq!(theme.resolve(ColorRole::Error), Color(0xFF1919));
        assert_eq!(theme.resolve(ColorRole::Warning), Color(0xFFE605));
    }

    #[test]
    fn test_from_toml() {
        let theme = Theme::from_toml(
            r##"
name = "paper"
[colors]
Background = "#FFFFFF"
Keyword = "#0000AA"
"##,
        )
        .unwrap();

        assert_eq!(theme.name, "paper");
        assert_eq!(theme.resolve(ColorRole::Background), Color(0xFFFFFF));
        assert_eq!(theme.resolve(ColorRole::Keyword), Color(0x0000AA));
        // unset roles are neutral, annotations keep their defaults
        assert_eq!(theme.resolve(ColorRole::Number), Color::NONE);
        assert_eq!(theme.resolve(ColorRole::Error), DEFAULT_ERROR);
    }

    #[test]
    fn test_from_toml_unknown_role() {
        let err = Theme::from_toml("[colors]\nBuiltin = \"#FFFFFF\"\n").unwrap_err();
        assert!(matches!(err, EditorError::UnknownRole(name) if name == "Builtin"));
    }
}
