//! The user-facing translation context.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use serde_json::Value as Json;

use crate::interpreter::config::{Config, ConfigUpdate};
use crate::interpreter::context::{Resolution, TranslateOptions};
use crate::interpreter::error::{EvalError, LoadError, LoadWarning};
use crate::interpreter::evaluator;
use crate::interpreter::plural::{PluralKind, PluralRule, resolve_plural_category};
use crate::interpreter::store::{TranslationStore, leaf_keys};
use crate::types::{LocaleId, Namespace, PluralCategory, Quantity, TranslationValue};

/// A translation store plus the configuration used to resolve keys in it.
///
/// Create one per process, per thread, or per request; nothing is shared
/// between translators.
///
/// # Example
///
/// ```
/// use glossa::{TranslateOptions, Translator, vars};
/// use serde_json::json;
///
/// let mut translator = Translator::new();
/// translator
///     .set_translations("en", json!({
///         "welcome": "Welcome, {{name}}!",
///         "cart": { "one": "One item in your cart.", "other": "{{quantity}} items in your cart." }
///     }))
///     .unwrap();
///
/// let options = TranslateOptions::builder()
///     .locale("en-GB")
///     .variables(vars! { "name" => "Alice" })
///     .build();
/// assert_eq!(translator.translate("welcome", &options).unwrap(), "Welcome, Alice!");
///
/// let options = TranslateOptions::builder().locale("en").quantity(6).build();
/// assert_eq!(translator.translate("cart", &options).unwrap(), "6 items in your cart.");
/// ```
#[derive(Debug, Default, Builder)]
pub struct Translator {
    /// Resolution configuration.
    #[builder(default)]
    config: Config,

    /// Per-locale translation trees.
    #[builder(skip)]
    store: TranslationStore,

    /// File paths for reload support. Only populated for file-loaded locales.
    #[builder(skip)]
    loaded_paths: HashMap<LocaleId, PathBuf>,
}

impl Translator {
    /// Create a translator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Translator::builder().config(config).build()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current configuration (mutable).
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Merge a partial configuration update and return the result.
    pub fn configure(&mut self, update: ConfigUpdate) -> &Config {
        self.config.merge(update);
        &self.config
    }

    /// The current locale, or the default locale if none is set.
    pub fn locale(&self) -> &LocaleId {
        self.config.active_locale()
    }

    /// Set the current locale.
    ///
    /// Translations for it need not be loaded yet.
    pub fn set_locale(&mut self, locale: impl Into<LocaleId>) {
        self.config.locale = Some(locale.into());
    }

    /// Clear the current locale so the default locale applies.
    pub fn clear_locale(&mut self) {
        self.config.locale = None;
    }

    /// Register a custom plural rule for a locale.
    pub fn set_plural_rule(&mut self, locale: impl Into<LocaleId>, rule: PluralRule) {
        self.config.plural_rules.insert(locale.into(), rule);
    }

    /// Plural category for `quantity` in `locale`, honouring custom rules.
    pub fn plural_category(
        &self,
        quantity: impl Into<Quantity>,
        locale: &LocaleId,
        kind: PluralKind,
    ) -> PluralCategory {
        resolve_plural_category(quantity.into(), locale, kind, &self.config.plural_rules)
    }

    // =========================================================================
    // Store Access
    // =========================================================================

    /// The translation store (read-only).
    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// The translation store (mutable), for typed updates.
    pub fn store_mut(&mut self) -> &mut TranslationStore {
        &mut self.store
    }

    /// A locale's translations. No fallback.
    pub fn translations(&self, locale: impl Into<LocaleId>) -> Option<&Namespace> {
        self.store.get(&locale.into())
    }

    /// Replace a locale's translations with `data`, which must be a mapping.
    pub fn set_translations(
        &mut self,
        locale: impl Into<LocaleId>,
        data: Json,
    ) -> Result<(), LoadError> {
        let locale = locale.into();
        self.loaded_paths.remove(&locale);
        self.store.set_json(locale, data)
    }

    /// Shallow-merge `data`, which must be a mapping, into a locale.
    pub fn add_translations(
        &mut self,
        locale: impl Into<LocaleId>,
        data: Json,
    ) -> Result<(), LoadError> {
        self.store.merge_json(locale.into(), data)
    }

    /// Replace every locale with `data`, a mapping of locale to translations.
    pub fn replace_all_translations(&mut self, data: Json) -> Result<(), LoadError> {
        self.store.replace_all_json(data)?;
        self.loaded_paths.clear();
        Ok(())
    }

    /// Remove one locale's translations. No error if absent.
    pub fn remove_translations(&mut self, locale: impl Into<LocaleId>) {
        let locale = locale.into();
        self.loaded_paths.remove(&locale);
        self.store.remove(&locale);
    }

    /// Remove all translations.
    pub fn remove_all_translations(&mut self) {
        self.loaded_paths.clear();
        self.store.remove_all();
    }

    // =========================================================================
    // File Loading
    // =========================================================================

    /// Load a JSON translation file for a locale, replacing its translations.
    ///
    /// The path is remembered for [`reload_translations`](Self::reload_translations).
    /// Returns the number of translatable keys loaded.
    pub fn load_translations(
        &mut self,
        locale: impl Into<LocaleId>,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let locale = locale.into();
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let data: Json = serde_json::from_str(&content).map_err(|e| LoadError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.store.set_json(locale.clone(), data)?;
        let count = self.store.get(&locale).map_or(0, |ns| leaf_keys(ns).len());
        self.loaded_paths.insert(locale, path.to_path_buf());
        Ok(count)
    }

    /// Re-read a locale's translations from the file it was loaded from.
    pub fn reload_translations(&mut self, locale: impl Into<LocaleId>) -> Result<usize, LoadError> {
        let locale = locale.into();
        let path = self
            .loaded_paths
            .get(&locale)
            .cloned()
            .ok_or_else(|| LoadError::NoPathForReload {
                locale: locale.to_string(),
            })?;
        self.load_translations(locale, path)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Compare a target locale's keys against a source locale.
    ///
    /// Reports keys the source does not have and keys whose shape (text,
    /// plural, namespace) differs. Returns nothing if either locale is not
    /// loaded.
    pub fn validate_translations(
        &self,
        source: impl Into<LocaleId>,
        target: impl Into<LocaleId>,
    ) -> Vec<LoadWarning> {
        let target = target.into();
        let mut warnings = Vec::new();
        let (Some(source_ns), Some(target_ns)) =
            (self.store.get(&source.into()), self.store.get(&target))
        else {
            return warnings;
        };
        compare_namespaces(source_ns, target_ns, "", &target, &mut warnings);
        warnings
    }

    /// Translatable keys in `source` that `target` does not have, sorted.
    pub fn missing_keys(
        &self,
        source: impl Into<LocaleId>,
        target: impl Into<LocaleId>,
    ) -> Vec<String> {
        let Some(source_ns) = self.store.get(&source.into()) else {
            return Vec::new();
        };
        let present = self
            .store
            .get(&target.into())
            .map(leaf_keys)
            .unwrap_or_default();
        leaf_keys(source_ns)
            .into_iter()
            .filter(|key| present.binary_search(key).is_err())
            .collect()
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translate a key.
    ///
    /// The locale is `options.locale`, else the current locale, else the
    /// default locale, falling back to its base language. If that fails or the
    /// key is not found, the configured policy applies: an error with
    /// `throw_on_error`, else the missing-translation handler's text, else the
    /// key itself (with a logged warning).
    ///
    /// Unfilled placeholders are always an error.
    pub fn translate(&self, key: &str, options: &TranslateOptions) -> Result<String, EvalError> {
        self.resolve(key, options).map(|resolution| resolution.text)
    }

    /// Translate a key with default options.
    pub fn t(&self, key: &str) -> Result<String, EvalError> {
        self.translate(key, &TranslateOptions::default())
    }

    /// Translate a key and report how the text was obtained.
    pub fn resolve(&self, key: &str, options: &TranslateOptions) -> Result<Resolution, EvalError> {
        evaluator::resolve(&self.store, &self.config, key, options)
    }
}

fn compare_namespaces(
    source: &Namespace,
    target: &Namespace,
    prefix: &str,
    locale: &LocaleId,
    warnings: &mut Vec<LoadWarning>,
) {
    for (key, target_value) in target {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        let Some(source_value) = source.get(key) else {
            warnings.push(LoadWarning::UnknownKey {
                key: path,
                locale: locale.to_string(),
            });
            continue;
        };
        match (source_value, target_value) {
            (TranslationValue::Namespace(s), TranslationValue::Namespace(t)) => {
                compare_namespaces(s, t, &path, locale, warnings);
            }
            (s, t) if s.kind() != t.kind() => warnings.push(LoadWarning::ShapeMismatch {
                key: path,
                locale: locale.to_string(),
                expected: s.kind(),
                found: t.kind(),
            }),
            _ => {}
        }
    }
}
