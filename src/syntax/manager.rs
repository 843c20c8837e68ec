//! Language registry
//!
//! Holds the available language definitions and picks one for a file
//! by its extension.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::builtin;
use super::language::LanguageDefinition;
use crate::error::Result;

/// Known languages, indexed by name and by extension
pub struct LanguageRegistry {
    /// Loaded language definitions
    languages: HashMap<String, Arc<LanguageDefinition>>,
    /// Extension (lowercase, with dot) to language name mapping
    extension_map: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Create a registry with the built-in languages
    pub fn new() -> Result<Self> {
        let mut registry = Self::empty();
        for lang in builtin::all_languages()? {
            registry.add_language(lang);
        }
        Ok(registry)
    }

    /// Add a language definition, replacing any with the same name
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let name = lang.name.clone();
        for ext in lang.file_extensions() {
            self.extension_map.insert(ext.to_lowercase(), name.clone());
        }
        self.languages.insert(name, Arc::new(lang));
    }

    /// Load a TOML language definition from disk and register it
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path)?;
        self.add_language(LanguageDefinition::from_toml(&source)?);
        Ok(())
    }

    /// Detect language from filename
    pub fn detect(&self, filename: &Path) -> Option<Arc<LanguageDefinition>> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        let name = self.extension_map.get(&format!(".{ext}"))?;
        self.get(name)
    }

    /// Get a language definition by name
    pub fn get(&self, name: &str) -> Option<Arc<LanguageDefinition>> {
        self.languages.get(name).cloned()
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_language() {
        let registry = LanguageRegistry::new().unwrap();

        assert_eq!(registry.detect(Path::new("init.lua")).unwrap().name, "lua");
        assert_eq!(registry.detect(Path::new("INIT.LUA")).unwrap().name, "lua");
        assert!(registry.detect(Path::new("main.rs")).is_none());
        assert!(registry.detect(Path::new("no_extension")).is_none());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "name = \"ini\"\nextensions = [\".ini\"]\n[[rules]]\nname = \"c\"\npattern = \";.*$\"\nrole = \"CommentSingle\""
        )
        .unwrap();

        let mut registry = LanguageRegistry::new().unwrap();
        registry.load_file(file.path()).unwrap();

        assert_eq!(registry.list_languages(), vec!["ini", "lua"]);
        assert_eq!(registry.detect(Path::new("a.ini")).unwrap().rules().len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let mut registry = LanguageRegistry::empty();
        assert!(registry.load_file(Path::new("/nonexistent/lang.toml")).is_err());
        assert!(registry.list_languages().is_empty());
    }
}
