//! Configuration file support
//!
//! Loads settings from ~/.codeedit.toml (or %USERPROFILE%\.codeedit.toml on
//! Windows).
//!
//! Example:
//! ```toml
//! # codeedit configuration
//! update-delay = 500
//! immediate = false
//! tab-width = 4
//! theme = "one-dark"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::editor::{CodeEditor, UpdateMode};
use crate::error::Result;
use crate::syntax::Theme;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Quiet period before a deferred update, in milliseconds
    pub update_delay_ms: u64,
    /// Highlight and notify inline with every edit
    pub immediate: bool,
    /// Tab width in characters, 0 for native tabs
    pub tab_width: usize,
    /// Name of the built-in theme
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update_delay_ms: 1000,
            immediate: true,
            tab_width: 0,
            theme: "one-dark".to_string(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".codeedit.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".codeedit.toml"))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing or unreadable file yields the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("ignoring {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config file contents, applying known keys over the defaults
    pub fn parse(contents: &str) -> Result<Self> {
        let table: toml::Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table);
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, settings: &toml::Table) {
        if let Some(n) = settings.get("update-delay").and_then(|v| v.as_integer()) {
            self.update_delay_ms = n.max(0) as u64;
        }

        if let Some(value) = settings.get("immediate").and_then(|v| v.as_bool()) {
            self.immediate = value;
        }

        if let Some(n) = settings.get("tab-width").and_then(|v| v.as_integer()) {
            self.tab_width = n.clamp(0, 16) as usize; // Between 0 and 16
        }

        if let Some(name) = settings.get("theme").and_then(|v| v.as_str()) {
            self.theme = name.to_string();
        }
    }

    /// Push these settings into an editor
    pub fn apply_to(&self, editor: &mut CodeEditor) {
        editor.set_update_delay(self.update_delay_ms);
        editor.set_update_mode(if self.immediate {
            UpdateMode::Immediate
        } else {
            UpdateMode::Debounced
        });
        editor.set_tab_width(self.tab_width);

        match Theme::builtin(&self.theme) {
            Some(theme) => editor.set_theme(theme),
            None => warn!("unknown theme '{}', keeping '{}'", self.theme, editor.theme().name),
        }
    }
}
