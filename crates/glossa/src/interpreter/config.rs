//! Translator configuration and partial updates.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use bon::Builder;

use crate::interpreter::TranslateOptions;
use crate::interpreter::plural::PluralRule;
use crate::types::LocaleId;

/// Callback producing replacement text when a translation cannot be resolved.
///
/// Called with the key, the locale the lookup failed in, and the caller's
/// options. The returned string is used verbatim as the translation.
#[derive(Clone)]
pub struct MissingTranslationHandler(Arc<HandlerFn>);

type HandlerFn = dyn Fn(&str, &LocaleId, &TranslateOptions) -> String + Send + Sync;

impl MissingTranslationHandler {
    /// Wrap a handler function.
    pub fn new(
        handler: impl Fn(&str, &LocaleId, &TranslateOptions) -> String + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(handler))
    }

    /// Invoke the handler.
    pub fn call(&self, key: &str, locale: &LocaleId, options: &TranslateOptions) -> String {
        (self.0)(key, locale, options)
    }
}

impl Debug for MissingTranslationHandler {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("MissingTranslationHandler(..)")
    }
}

/// Translator configuration.
///
/// # Example
///
/// ```
/// use glossa::Config;
///
/// let config = Config::builder()
///     .default_locale("sv-SE")
///     .throw_on_error(true)
///     .build();
///
/// assert_eq!(config.default_locale.to_string(), "sv-SE");
/// assert!(config.polyfill_zero_category);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Config {
    /// Locale used when neither the call nor `locale` names one.
    #[builder(into, default = LocaleId::new("en-US"))]
    pub default_locale: LocaleId,

    /// Current locale override.
    #[builder(into)]
    pub locale: Option<LocaleId>,

    /// Fail with an error instead of falling back when a locale or key is
    /// missing.
    #[builder(default)]
    pub throw_on_error: bool,

    /// Select a plural map's `zero` branch for quantity 0 even when the
    /// locale's grammar has no zero category.
    #[builder(default = true)]
    pub polyfill_zero_category: bool,

    /// Fallback text producer for missing translations.
    pub on_missing_translation: Option<MissingTranslationHandler>,

    /// Custom plural rules keyed by locale.
    #[builder(default)]
    pub plural_rules: HashMap<LocaleId, PluralRule>,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    /// The current locale, or the default locale if none is set. An empty
    /// current locale counts as unset.
    pub fn active_locale(&self) -> &LocaleId {
        self.locale
            .as_ref()
            .filter(|locale| !locale.is_empty())
            .unwrap_or(&self.default_locale)
    }

    /// Merge a partial update. Fields absent from `update` are left as they
    /// are, [`Setting::Clear`] unsets them, and plural rules are merged per
    /// locale.
    pub fn merge(&mut self, update: ConfigUpdate) {
        let ConfigUpdate {
            default_locale,
            locale,
            throw_on_error,
            polyfill_zero_category,
            on_missing_translation,
            plural_rules,
        } = update;

        if let Some(default_locale) = default_locale {
            self.default_locale = default_locale;
        }
        locale.apply(&mut self.locale);
        if let Some(throw_on_error) = throw_on_error {
            self.throw_on_error = throw_on_error;
        }
        if let Some(polyfill) = polyfill_zero_category {
            self.polyfill_zero_category = polyfill;
        }
        on_missing_translation.apply(&mut self.on_missing_translation);
        self.plural_rules.extend(plural_rules);
    }
}

/// How a [`ConfigUpdate`] changes an optional setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Setting<T> {
    /// Leave the current value.
    #[default]
    Keep,
    /// Replace the current value.
    Set(T),
    /// Unset the current value.
    Clear,
}

impl<T> Setting<T> {
    fn apply(self, target: &mut Option<T>) {
        match self {
            Setting::Keep => {}
            Setting::Set(value) => *target = Some(value),
            Setting::Clear => *target = None,
        }
    }
}

impl<T> From<T> for Setting<T> {
    fn from(value: T) -> Self {
        Setting::Set(value)
    }
}

impl From<&str> for Setting<LocaleId> {
    fn from(locale: &str) -> Self {
        Setting::Set(locale.into())
    }
}

impl From<String> for Setting<LocaleId> {
    fn from(locale: String) -> Self {
        Setting::Set(locale.into())
    }
}

/// A partial configuration applied with
/// [`Translator::configure`](crate::Translator::configure).
///
/// # Example
///
/// ```
/// use glossa::{ConfigUpdate, Setting, Translator};
///
/// let mut translator = Translator::new();
/// translator.configure(ConfigUpdate::builder().locale("fr-FR").build());
///
/// assert_eq!(translator.locale().to_string(), "fr-FR");
/// assert!(!translator.config().throw_on_error);
///
/// translator.configure(ConfigUpdate::builder().locale(Setting::Clear).build());
/// assert_eq!(translator.locale().to_string(), "en-US");
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct ConfigUpdate {
    #[builder(into)]
    pub default_locale: Option<LocaleId>,
    #[builder(into, default)]
    pub locale: Setting<LocaleId>,
    pub throw_on_error: Option<bool>,
    pub polyfill_zero_category: Option<bool>,
    #[builder(into, default)]
    pub on_missing_translation: Setting<MissingTranslationHandler>,
    #[builder(default)]
    pub plural_rules: HashMap<LocaleId, PluralRule>,
}
