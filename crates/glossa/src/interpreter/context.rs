//! Per-call options and the resolution record produced by a translation.

use bon::Builder;

use crate::types::{LocaleId, PluralCategory, Quantity, Variables};

/// Options for a single [`Translator::translate`](crate::Translator::translate)
/// call.
///
/// # Example
///
/// ```
/// use glossa::{Quantity, TranslateOptions, vars};
///
/// let options = TranslateOptions::builder()
///     .locale("en-GB")
///     .variables(vars! { "name" => "Alice" })
///     .quantity(3)
///     .build();
///
/// assert_eq!(options.locale.unwrap().to_string(), "en-GB");
/// assert_eq!(options.quantity, Some(Quantity::Integer(3)));
///
/// let options = TranslateOptions::with_quantity(1.5);
/// assert_eq!(options.quantity, Some(Quantity::Fraction(1.5)));
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct TranslateOptions {
    /// Locale for this call, overriding the translator's current locale. An
    /// empty locale counts as unset.
    #[builder(into)]
    pub locale: Option<LocaleId>,

    /// Values for `{{name}}` placeholders.
    #[builder(default)]
    pub variables: Variables,

    /// Quantity for plural selection and the `{{quantity}}` placeholder.
    #[builder(into)]
    pub quantity: Option<Quantity>,
}

impl TranslateOptions {
    /// Options that only select a locale.
    pub fn for_locale(locale: impl Into<LocaleId>) -> Self {
        Self {
            locale: Some(locale.into()),
            ..Self::default()
        }
    }

    /// Options that only carry a quantity.
    pub fn with_quantity(quantity: impl Into<Quantity>) -> Self {
        Self {
            quantity: Some(quantity.into()),
            ..Self::default()
        }
    }
}

/// Where a resolved text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Found in the translation store.
    Translation,
    /// Produced by the missing-translation handler.
    Handler,
    /// The key itself, returned as a degraded result.
    Key,
}

/// The outcome of one translation call.
///
/// Ephemeral: built per call and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The text to show.
    pub text: String,
    /// Locale requested by the call (or the translator's current/default).
    pub requested_locale: LocaleId,
    /// Locale the key was found in, after base-language fallback. `None`
    /// when no translations exist for the requested locale or its base.
    pub locale: Option<LocaleId>,
    /// Plural category used to pick a branch, if one was picked.
    pub category: Option<PluralCategory>,
    /// Where `text` came from.
    pub source: ResolutionSource,
}
