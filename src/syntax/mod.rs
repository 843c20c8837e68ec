//! Syntax highlighting
//!
//! This module provides the pieces of the highlighting engine:
//! - Colors and spans
//! - Color roles and themes
//! - Pattern rules and language definitions
//! - The whole-buffer highlighter

mod style;
mod theme;
mod rules;
mod language;
mod manager;
mod highlighter;
pub mod builtin;

pub use style::{Color, Span, SpanKind};
pub use theme::{ColorRole, Theme, DEFAULT_ERROR, DEFAULT_WARNING};
pub use rules::Rule;
pub use language::LanguageDefinition;
pub use manager::LanguageRegistry;
pub use highlighter::{error_line_range, highlight};
