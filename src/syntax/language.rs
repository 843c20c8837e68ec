//! Language definitions for syntax highlighting
//!
//! A language is its name, the file extensions it claims and an ordered
//! list of rules. Definitions are built once and never change afterwards.

use log::info;

use super::rules::Rule;
use super::theme::ColorRole;
use crate::error::{EditorError, Result};

/// A complete language definition for syntax highlighting
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Language name (e.g., "lua")
    pub name: String,
    /// File extensions including the dot (e.g., [".lua"])
    extensions: Vec<String>,
    /// Rules in application order
    rules: Vec<Rule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Builder: claim a file extension
    pub fn with_extension(mut self, ext: &str) -> Self {
        self.extensions.push(ext.to_string());
        self
    }

    /// Builder: compile and append a rule
    pub fn with_rule(mut self, name: &str, pattern: &str, role: ColorRole) -> Result<Self> {
        self.rules.push(Rule::new(name, pattern, role)?);
        Ok(self)
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// File extensions in declaration order
    pub fn file_extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Load a language from TOML
    ///
    /// ```toml
    /// name = "ini"
    /// extensions = [".ini"]
    ///
    /// [[rules]]
    /// name = "comment"
    /// pattern = ";.*$"
    /// role = "CommentSingle"
    /// ```
    ///
    /// Every pattern is compiled here, so a bad definition is rejected
    /// before it ever reaches an editor.
    pub fn from_toml(source: &str) -> Result<Self> {
        let table: toml::Table = source.parse()?;

        let name = table
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| EditorError::Message("language needs a 'name'".to_string()))?;
        let mut lang = Self::new(name);

        if let Some(exts) = table.get("extensions").and_then(|v| v.as_array()) {
            for ext in exts {
                let ext = ext
                    .as_str()
                    .ok_or_else(|| EditorError::Message("extensions must be strings".to_string()))?;
                lang = lang.with_extension(ext);
            }
        }

        if let Some(rules) = table.get("rules").and_then(|v| v.as_array()) {
            for rule in rules {
                let field = |key: &str| {
                    rule.get(key).and_then(|v| v.as_str()).ok_or_else(|| {
                        EditorError::Message(format!("rule in '{name}' is missing '{key}'"))
                    })
                };
                let rule_name = field("name")?;
                let pattern = field("pattern")?;
                let role_name = field("role")?;
                let role = ColorRole::from_name(role_name)
                    .ok_or_else(|| EditorError::UnknownRole(role_name.to_string()))?;
                lang = lang.with_rule(rule_name, pattern, role)?;
            }
        }

        info!("loaded language '{}' with {} rules", lang.name, lang.rules.len());
        Ok(lang)
    }
}
