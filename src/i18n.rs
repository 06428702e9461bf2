//! Translation Lookup
//!
//! Resolves literal message keys to localized strings. Ships with built-in
//! English defaults; a YAML file from the config can override any subset of
//! keys. The lookup is passed into render functions rather than living in a
//! global, so views can be exercised in tests without an application
//! environment.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Shown when the folder listing request fails
pub const LOADING_ERROR: &str = "library.loading-error";
/// Shown when an active filter matches nothing
pub const NO_MUSIC: &str = "library.folders.no-music";
/// Shown when the folder itself is empty
pub const EMPTY_FOLDER: &str = "library.folders.empty-folder";

#[derive(Debug, Clone)]
pub struct Translations {
    strings: HashMap<String, String>,
}

impl Translations {
    /// Built-in English strings
    pub fn new() -> Self {
        let mut strings = HashMap::new();
        strings.insert(
            LOADING_ERROR.to_string(),
            "Error while loading the library".to_string(),
        );
        strings.insert(
            NO_MUSIC.to_string(),
            "No music matches the filter".to_string(),
        );
        strings.insert(
            EMPTY_FOLDER.to_string(),
            "This folder is empty".to_string(),
        );
        Self { strings }
    }

    /// Merge overrides from a YAML file of `key: string` pairs.
    /// Keys not present in the file keep their defaults.
    pub fn load_overrides(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read translations file {:?}", path))?;
        let overrides: HashMap<String, String> = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse translations file {:?}", path))?;

        for (key, value) in overrides {
            self.strings.insert(key, value);
        }

        Ok(())
    }

    /// Resolve a key; unknown keys fall back to the key itself
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new()
    }
}
