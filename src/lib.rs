//! codeedit - an embeddable code editing core
//!
//! Regex-driven syntax highlighting, auto-indent on newline and
//! fixed-width tabs, wrapped in a [`CodeEditor`] session that a host
//! widget feeds with edits and renders from.

pub mod buffer;
pub mod config;
pub mod debounce;
pub mod editor;
pub mod error;
pub mod indent;
pub mod syntax;
pub mod tabs;
pub mod terminal;

pub use buffer::Buffer;
pub use config::Config;
pub use editor::{CodeEditor, Phase, UpdateMode};
pub use error::{EditorError, Result};
pub use syntax::{Color, ColorRole, LanguageDefinition, LanguageRegistry, Span, SpanKind, Theme};
