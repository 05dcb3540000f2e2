//! Key → text resolution.
//!
//! Stages, each terminal on failure:
//! 1. locale resolution (requested locale, then its base language);
//! 2. dotted key lookup through nested namespaces;
//! 3. plural branch selection;
//! 4. interpolation, including the unresolved-placeholder check.
//!
//! Failures in stages 1 and 2 go through the missing-translation policy;
//! failures in stage 4 always surface as errors.

use crate::interpreter::config::Config;
use crate::interpreter::context::{Resolution, ResolutionSource, TranslateOptions};
use crate::interpreter::error::{EvalError, compute_suggestions};
use crate::interpreter::interpolate::{substitute, unresolved_placeholders};
use crate::interpreter::plural::{PluralKind, plural_category};
use crate::interpreter::store::TranslationStore;
use crate::types::{LocaleId, Namespace, PluralCategory, PluralForms, Quantity, TranslationValue};

/// Why a lookup could not produce a translation.
enum Missing {
    /// Neither the requested locale nor its base language has translations.
    Locale,
    /// The locale exists but the key does not resolve to text.
    Key {
        locale: LocaleId,
        suggestions: Vec<String>,
    },
}

/// Resolve `key` against `store` under `config`.
pub fn resolve(
    store: &TranslationStore,
    config: &Config,
    key: &str,
    options: &TranslateOptions,
) -> Result<Resolution, EvalError> {
    let requested = options
        .locale
        .as_ref()
        .filter(|locale| !locale.is_empty())
        .unwrap_or_else(|| config.active_locale())
        .clone();

    let Some((locale, namespace)) = resolve_locale(store, &requested) else {
        return apply_missing_policy(config, key, options, requested, Missing::Locale);
    };

    let value = match lookup(namespace, key) {
        Ok(value) => value,
        Err(suggestions) => {
            let missing = Missing::Key {
                locale,
                suggestions,
            };
            return apply_missing_policy(config, key, options, requested, missing);
        }
    };

    let Some((text, category)) = select_text(value, &locale, options.quantity, config) else {
        let missing = Missing::Key {
            locale,
            suggestions: Vec::new(),
        };
        return apply_missing_policy(config, key, options, requested, missing);
    };

    let text = substitute(text, &options.variables, options.quantity);
    let unresolved = unresolved_placeholders(&text);
    if !unresolved.is_empty() {
        return Err(EvalError::MissingInterpolationVariable {
            key: Some(key.to_string()),
            placeholders: unresolved,
        });
    }

    Ok(Resolution {
        text,
        requested_locale: requested,
        locale: Some(locale),
        category,
        source: ResolutionSource::Translation,
    })
}

/// Find the namespace for `requested`, falling back to its base language.
fn resolve_locale<'s>(
    store: &'s TranslationStore,
    requested: &LocaleId,
) -> Option<(LocaleId, &'s Namespace)> {
    if let Some(namespace) = store.get(requested) {
        return Some((requested.clone(), namespace));
    }
    let base = requested.base()?;
    let namespace = store.get(&base)?;
    tracing::debug!(%requested, fallback = %base, "using base language translations");
    Some((base, namespace))
}

/// Walk a dotted key through nested namespaces.
///
/// On failure returns suggestions for the segment that was not found (empty
/// when the path breaks for another reason). An empty leaf string counts as
/// missing.
fn lookup<'n>(namespace: &'n Namespace, key: &str) -> Result<&'n TranslationValue, Vec<String>> {
    if key.is_empty() {
        return Err(Vec::new());
    }
    let segments: Vec<&str> = key.split('.').collect();
    let mut current = namespace;
    for (index, segment) in segments.iter().enumerate() {
        let Some(value) = current.get(*segment) else {
            return Err(suggest(current, &segments[..index], segment));
        };
        if index + 1 == segments.len() {
            return match value {
                TranslationValue::Leaf(text) if text.is_empty() => Err(Vec::new()),
                _ => Ok(value),
            };
        }
        match value {
            TranslationValue::Namespace(child) => current = child,
            TranslationValue::Leaf(_) | TranslationValue::PluralForm(_) => return Err(Vec::new()),
        }
    }
    Err(Vec::new())
}

/// Suggest full dotted keys for a misspelled segment.
fn suggest(level: &Namespace, parents: &[&str], segment: &str) -> Vec<String> {
    let available: Vec<String> = level.keys().cloned().collect();
    compute_suggestions(segment, &available)
        .into_iter()
        .map(|candidate| {
            parents
                .iter()
                .copied()
                .chain([candidate.as_str()])
                .collect::<Vec<_>>()
                .join(".")
        })
        .collect()
}

/// Pick the text for a found value. Returns `None` for a namespace, which
/// has no text of its own.
fn select_text<'v>(
    value: &'v TranslationValue,
    locale: &LocaleId,
    quantity: Option<Quantity>,
    config: &Config,
) -> Option<(&'v str, Option<PluralCategory>)> {
    match value {
        TranslationValue::Leaf(text) => Some((text.as_str(), None)),
        TranslationValue::PluralForm(forms) => Some(match quantity {
            Some(quantity) => select_branch(forms, locale, quantity, config),
            None => (forms.other(), None),
        }),
        TranslationValue::Namespace(_) => None,
    }
}

/// Choose a plural branch: custom rule, then zero polyfill, then CLDR.
fn select_branch<'f>(
    forms: &'f PluralForms,
    locale: &LocaleId,
    quantity: Quantity,
    config: &Config,
) -> (&'f str, Option<PluralCategory>) {
    if let Some(rule) = config.plural_rules.get(locale) {
        let category = rule.category(quantity);
        return (forms.select(category), Some(category));
    }
    let polyfill_zero = config.polyfill_zero_category && quantity.is_zero();
    if let Some(zero) = forms.get(PluralCategory::Zero).filter(|_| polyfill_zero) {
        return (zero, Some(PluralCategory::Zero));
    }
    let category = plural_category(&locale.to_string(), quantity, PluralKind::Cardinal);
    (forms.select(category), Some(category))
}

/// Throw, call the handler, or degrade to the key, in that order of
/// preference.
fn apply_missing_policy(
    config: &Config,
    key: &str,
    options: &TranslateOptions,
    requested: LocaleId,
    missing: Missing,
) -> Result<Resolution, EvalError> {
    let (failed_in, resolved) = match missing {
        Missing::Locale => {
            if config.throw_on_error {
                return Err(EvalError::InvalidLocale {
                    locale: requested.to_string(),
                });
            }
            (requested.clone(), None)
        }
        Missing::Key {
            locale,
            suggestions,
        } => {
            if config.throw_on_error {
                return Err(EvalError::MissingTranslation {
                    key: key.to_string(),
                    locale: locale.to_string(),
                    suggestions,
                });
            }
            (locale.clone(), Some(locale))
        }
    };

    let (text, source) = match &config.on_missing_translation {
        Some(handler) => (
            handler.call(key, &failed_in, options),
            ResolutionSource::Handler,
        ),
        None => {
            tracing::warn!(key, locale = %failed_in, "missing translation");
            (key.to_string(), ResolutionSource::Key)
        }
    };

    Ok(Resolution {
        text,
        requested_locale: requested,
        locale: resolved,
        category: None,
        source,
    })
}
