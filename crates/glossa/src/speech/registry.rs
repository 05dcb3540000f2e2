//! Registry of speech mappings keyed by language variant.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::interpreter::{EvalError, LoadError};
use crate::speech::builtin::{self, AMERICAN, BRITISH};
use crate::speech::convert;
use crate::speech::mapping::{SpeechMapping, SpeechMappingData};

/// Keyed set of compiled speech mappings.
///
/// [`SpeechRegistry::new`] starts with the `american` and `british`
/// mappings; more variants are added with [`SpeechRegistry::load`].
#[derive(Debug, Clone)]
pub struct SpeechRegistry {
    mappings: BTreeMap<String, SpeechMapping>,
}

impl Default for SpeechRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechRegistry {
    /// Create a registry holding the built-in English mappings.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (key, data) in [(AMERICAN, builtin::american()), (BRITISH, builtin::british())] {
            registry
                .load(key, data)
                .expect("built-in speech mappings should compile");
        }
        registry
    }

    /// Create a registry with no mappings.
    pub fn empty() -> Self {
        SpeechRegistry {
            mappings: BTreeMap::new(),
        }
    }

    /// Validate, compile and register `data` under `key`, replacing any
    /// mapping already registered there. On error the registry is unchanged.
    pub fn load(&mut self, key: impl Into<String>, data: SpeechMappingData) -> Result<(), LoadError> {
        let key = key.into();
        let mapping = SpeechMapping::compile(key.clone(), data)?;
        let replaced = self.mappings.insert(key.clone(), mapping).is_some();
        tracing::debug!(key = %key, replaced, "registered speech mapping");
        Ok(())
    }

    /// Parse a JSON speech mapping and register it.
    pub fn load_json(&mut self, key: impl Into<String>, json: &str) -> Result<(), LoadError> {
        let key = key.into();
        let data = serde_json::from_str(json).map_err(|source| LoadError::Json {
            path: key.clone().into(),
            source,
        })?;
        self.load(key, data)
    }

    /// Read a JSON speech mapping from `path` and register it.
    pub fn load_file(&mut self, key: impl Into<String>, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        self.load(key, data)
    }

    pub fn get(&self, key: &str) -> Option<&SpeechMapping> {
        self.mappings.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.mappings.contains_key(key)
    }

    /// Remove a mapping, returning it if it was registered.
    pub fn remove(&mut self, key: &str) -> Option<SpeechMapping> {
        let removed = self.mappings.remove(key);
        if removed.is_some() {
            tracing::debug!(key, "removed speech mapping");
        }
        removed
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        self.mappings.keys().map(String::as_str).collect()
    }

    /// Speak `n` with the mapping registered under `key`.
    ///
    /// Fails with [`EvalError::UnknownSpeechMapping`] if no such mapping is
    /// registered.
    pub fn to_speech(&self, n: i64, key: &str) -> Result<String, EvalError> {
        let Some(mapping) = self.get(key) else {
            return Err(EvalError::UnknownSpeechMapping {
                key: key.to_string(),
                available: self.mappings.keys().cloned().collect(),
            });
        };
        convert::to_speech(n, mapping)
    }
}
