//! Properties management: flat key/value configuration loaded from files or
//! readers.

use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::error::{Result, SieveError};

/// An immutable store of string properties.
///
/// Properties are a flat TOML table of string values, e.g.:
///
/// ```toml
/// host = "example.com"
/// retries = "3"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PropertiesStore {
    properties: HashMap<String, String>,
}

impl PropertiesStore {
    /// Wrap an already-built property map.
    pub fn new(properties: HashMap<String, String>) -> Self {
        Self { properties }
    }

    /// Load properties from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SieveError::PropertiesNotFound {
                path: PathBuf::from(path),
            });
        }

        let raw = std::fs::read_to_string(path)?;
        trace!(path = %path.display(), "loaded properties file");

        Self::parse(&raw)
    }

    /// Load properties from any readable source.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;

        Self::parse(&raw)
    }

    fn parse(raw: &str) -> Result<Self> {
        let store: Self = toml::from_str(raw)?;
        trace!(count = store.len(), "parsed properties");

        Ok(store)
    }

    /// Look up a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Look up a property value, falling back to `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// The full property map.
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
