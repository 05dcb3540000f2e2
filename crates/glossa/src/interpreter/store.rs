//! In-memory translation storage, one namespace per locale.

use std::collections::HashMap;

use serde_json::Value as Json;

use crate::interpreter::LoadError;
use crate::parser::{parse_namespace, parse_translation_data};
use crate::types::{LocaleId, Namespace, TranslationValue};

/// Per-locale translation trees.
///
/// The store is a plain lookup table: [`get`](Self::get) never falls back to
/// another locale. Fallback is the [`Translator`](crate::Translator)'s job.
///
/// The `*_json` methods accept untyped data and fail with
/// [`LoadError::InvalidTranslationData`] if it is not a mapping; the typed
/// methods cannot fail.
#[derive(Debug, Default, Clone)]
pub struct TranslationStore {
    locales: HashMap<LocaleId, Namespace>,
}

impl TranslationStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a locale's namespace. No fallback.
    pub fn get(&self, locale: &LocaleId) -> Option<&Namespace> {
        self.locales.get(locale)
    }

    /// True if the locale has a namespace.
    pub fn contains(&self, locale: &LocaleId) -> bool {
        self.locales.contains_key(locale)
    }

    /// Replace a locale's whole namespace.
    pub fn set(&mut self, locale: LocaleId, namespace: Namespace) {
        tracing::debug!(%locale, keys = namespace.len(), "set translations");
        self.locales.insert(locale, namespace);
    }

    /// Shallow-merge into a locale's namespace, creating it if absent.
    ///
    /// Top-level keys in `namespace` overwrite existing ones; nested
    /// namespaces are replaced, not merged.
    pub fn merge(&mut self, locale: LocaleId, namespace: Namespace) {
        tracing::debug!(%locale, keys = namespace.len(), "merge translations");
        self.locales.entry(locale).or_default().extend(namespace);
    }

    /// Discard every locale and install `locales` wholesale.
    pub fn replace_all(&mut self, locales: HashMap<LocaleId, Namespace>) {
        tracing::debug!(locales = locales.len(), "replace all translations");
        self.locales = locales;
    }

    /// Remove one locale. Returns its namespace if it was present.
    pub fn remove(&mut self, locale: &LocaleId) -> Option<Namespace> {
        self.locales.remove(locale)
    }

    /// Remove every locale.
    pub fn remove_all(&mut self) {
        self.locales.clear();
    }

    /// Validate `data` and [`set`](Self::set) it.
    pub fn set_json(&mut self, locale: LocaleId, data: Json) -> Result<(), LoadError> {
        let namespace = parse_namespace(Some(&locale), data)?;
        self.set(locale, namespace);
        Ok(())
    }

    /// Validate `data` and [`merge`](Self::merge) it.
    pub fn merge_json(&mut self, locale: LocaleId, data: Json) -> Result<(), LoadError> {
        let namespace = parse_namespace(Some(&locale), data)?;
        self.merge(locale, namespace);
        Ok(())
    }

    /// Validate a locale → tree mapping and [`replace_all`](Self::replace_all)
    /// with it. On error the store is left untouched.
    pub fn replace_all_json(&mut self, data: Json) -> Result<(), LoadError> {
        let locales = parse_translation_data(data)?;
        self.replace_all(locales);
        Ok(())
    }

    /// Locales with translations, sorted.
    pub fn locales(&self) -> Vec<&LocaleId> {
        let mut locales: Vec<&LocaleId> = self.locales.keys().collect();
        locales.sort();
        locales
    }

    /// Number of locales.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// True if no locale has translations.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

/// Dotted paths of every text or plural entry in a namespace, sorted.
///
/// # Example
///
/// ```
/// use glossa::leaf_keys;
/// use glossa::parser::parse_namespace;
/// use serde_json::json;
///
/// let ns = parse_namespace(None, json!({
///     "menu": { "home": "Home", "about": "About" },
///     "apple": { "one": "apple", "other": "apples" }
/// }))
/// .unwrap();
/// assert_eq!(leaf_keys(&ns), vec!["apple", "menu.about", "menu.home"]);
/// ```
pub fn leaf_keys(namespace: &Namespace) -> Vec<String> {
    let mut keys = Vec::new();
    collect_leaf_keys(namespace, "", &mut keys);
    keys.sort();
    keys
}

fn collect_leaf_keys(namespace: &Namespace, prefix: &str, keys: &mut Vec<String>) {
    for (key, value) in namespace {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            TranslationValue::Namespace(child) => collect_leaf_keys(child, &path, keys),
            TranslationValue::Leaf(_) | TranslationValue::PluralForm(_) => keys.push(path),
        }
    }
}
