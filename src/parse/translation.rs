use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ordered_properties::OrderedProperties;
use super::properties_parser::PropertiesParser;

/// One locale's translation file, loaded fresh from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    /// File name as discovered (e.g., "messages_de.properties")
    pub name: String,
    /// Directory the file lives in
    pub dir: PathBuf,
    /// Entries in file order
    pub properties: OrderedProperties,
}

impl TranslationFile {
    pub fn load(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(name);
        let properties = PropertiesParser::parse_file(&path)?;
        debug!(file = %path.display(), keys = properties.len(), "loaded translation file");

        Ok(Self {
            name: name.to_string(),
            dir: dir.to_path_buf(),
            properties,
        })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    /// Keys in the order they appear in the file
    pub fn keys(&self) -> Vec<&str> {
        self.properties.keys().collect()
    }

    /// Keys sorted ordinally, for order-independent comparison
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys = self.keys();
        keys.sort_unstable();
        keys
    }

    /// Keys whose value is the empty string, in file order
    pub fn empty_keys(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(key, _)| key)
            .collect()
    }
}
