//! Plural-driven cardinal and ordinal formatting.

use crate::interpreter::{PluralKind, Translator};
use crate::types::{LocaleId, PluralCategory, PluralForms, Quantity};

/// Placeholder replaced by the number in [`format_cardinal`] forms.
pub const NUMBER_PLACEHOLDER: &str = "{{number}}";

/// Pick the form for `n` and substitute the first `{{number}}`.
///
/// A `zero` form is used for exactly `0` regardless of the locale's grammar.
/// Otherwise the cardinal category for `locale` selects the form, falling
/// back to `other`. Custom plural rules registered on the translator win
/// over CLDR rules.
///
/// # Example
///
/// ```
/// use glossa::{PluralCategory, PluralForms, Translator, format_cardinal};
///
/// let translator = Translator::new();
/// let forms = PluralForms::new("{{number}} items")
///     .with(PluralCategory::Zero, "No items")
///     .with(PluralCategory::One, "{{number}} item");
/// let en = "en-US".into();
/// assert_eq!(format_cardinal(&translator, 0, &en, &forms), "No items");
/// assert_eq!(format_cardinal(&translator, 1, &en, &forms), "1 item");
/// assert_eq!(format_cardinal(&translator, 2, &en, &forms), "2 items");
/// assert_eq!(format_cardinal(&translator, 1.5, &en, &forms), "1.5 items");
/// ```
pub fn format_cardinal(
    translator: &Translator,
    n: impl Into<Quantity>,
    locale: &LocaleId,
    forms: &PluralForms,
) -> String {
    let n = n.into();
    let text = match forms.get(PluralCategory::Zero) {
        Some(zero) if n.is_zero() => zero,
        _ => forms.select(translator.plural_category(n, locale, PluralKind::Cardinal)),
    };
    text.replacen(NUMBER_PLACEHOLDER, &n.to_string(), 1)
}

/// Suffixes used by [`format_ordinal`] when none are given.
pub fn english_ordinal_suffixes() -> PluralForms {
    PluralForms::new("th")
        .with(PluralCategory::One, "st")
        .with(PluralCategory::Two, "nd")
        .with(PluralCategory::Few, "rd")
}

/// Append the ordinal suffix for `n`.
///
/// `locale` defaults to the translator's active locale and `suffixes` to
/// English `st`/`nd`/`rd`/`th`.
///
/// # Example
///
/// ```
/// use glossa::{PluralCategory, PluralForms, Translator, format_ordinal};
///
/// let translator = Translator::new();
/// assert_eq!(format_ordinal(&translator, 1, None, None), "1st");
/// assert_eq!(format_ordinal(&translator, 22, None, None), "22nd");
/// assert_eq!(format_ordinal(&translator, 113, None, None), "113th");
///
/// let swedish = PluralForms::new(":e").with(PluralCategory::One, ":a");
/// let sv = "sv-SE".into();
/// assert_eq!(format_ordinal(&translator, 9, Some(&sv), Some(&swedish)), "9:e");
/// assert_eq!(format_ordinal(&translator, 2, Some(&sv), Some(&swedish)), "2:a");
/// ```
pub fn format_ordinal(
    translator: &Translator,
    n: i64,
    locale: Option<&LocaleId>,
    suffixes: Option<&PluralForms>,
) -> String {
    let locale = locale.unwrap_or_else(|| translator.locale());
    let category = translator.plural_category(n, locale, PluralKind::Ordinal);
    let suffix = match suffixes {
        Some(suffixes) => suffixes.select(category).to_string(),
        None => english_ordinal_suffixes().select(category).to_string(),
    };
    format!("{n}{suffix}")
}
