//! Pattern rules for syntax highlighting
//!
//! A rule binds a regular expression to a color role. Rules are applied
//! in declaration order over the whole buffer.

use fancy_regex::Regex;
use log::warn;

use super::theme::ColorRole;
use crate::error::{EditorError, Result};

/// A named pattern-to-role binding
///
/// Patterns are compiled in multi-line mode, so `^` and `$` match at line
/// boundaries while `.` still stops at a newline.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Role painted over every match
    pub role: ColorRole,
}

impl Rule {
    /// Compile a new rule
    pub fn new(name: &str, pattern: &str, role: ColorRole) -> Result<Self> {
        let regex = Regex::new(&format!("(?m){pattern}")).map_err(|e| {
            EditorError::InvalidPattern {
                rule: name.to_string(),
                source: Box::new(e),
            }
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern: regex,
            role,
        })
    }

    /// All leftmost non-overlapping matches over `text`, as byte ranges
    ///
    /// A matcher failure (e.g. the backtrack limit) ends the scan for this
    /// rule; the matches found before it are still returned.
    pub fn find_all(&self, text: &str) -> Vec<(usize, usize)> {
        let mut ranges = Vec::new();
        for found in self.pattern.find_iter(text) {
            match found {
                Ok(m) => ranges.push((m.start(), m.end())),
                Err(e) => {
                    warn!("rule '{}' stopped matching: {}", self.name, e);
                    break;
                }
            }
        }
        ranges
    }
}
