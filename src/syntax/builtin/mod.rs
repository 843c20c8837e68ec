//! Built-in language definitions

mod lua;

pub use lua::lua_language;

use super::language::LanguageDefinition;
use crate::error::Result;

/// Get all built-in language definitions
pub fn all_languages() -> Result<Vec<LanguageDefinition>> {
    Ok(vec![lua_language()?])
}
