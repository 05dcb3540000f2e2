//! Locale-aware decimal formatting.

use fixed_decimal::Decimal;
use icu_decimal::DecimalFormatter;
use icu_decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu_locale_core::Locale as IcuLocale;

use crate::interpreter::Translator;
use crate::types::{LocaleId, Quantity};

/// Format a number with the locale's digit grouping and decimal separator.
///
/// `locale` defaults to the translator's active locale. Grouping follows
/// the locale's minimum grouping rule unless `grouping` is given. A locale
/// ICU cannot format for, or a non-finite number, falls back to the plain
/// number.
///
/// # Example
///
/// ```
/// use glossa::{LocaleId, Translator, format_number};
///
/// let translator = Translator::new();
/// assert_eq!(format_number(&translator, 12345.67, None, None), "12,345.67");
///
/// let de = LocaleId::new("de-DE");
/// assert_eq!(format_number(&translator, 12345.67, Some(&de), None), "12.345,67");
/// ```
pub fn format_number(
    translator: &Translator,
    number: impl Into<Quantity>,
    locale: Option<&LocaleId>,
    grouping: Option<GroupingStrategy>,
) -> String {
    let number = number.into();
    let locale = locale.unwrap_or_else(|| translator.locale());
    match decimal_formatter(locale, grouping) {
        Some(formatter) => match to_decimal(number) {
            Some(decimal) => formatter.format(&decimal).to_string(),
            None => number.to_string(),
        },
        None => number.to_string(),
    }
}

fn decimal_formatter(
    locale: &LocaleId,
    grouping: Option<GroupingStrategy>,
) -> Option<DecimalFormatter> {
    let icu_locale: IcuLocale = match locale.to_string().parse() {
        Ok(icu_locale) => icu_locale,
        Err(e) => {
            tracing::warn!(%locale, error = %e, "unparsable locale, number left unformatted");
            return None;
        }
    };
    let mut options = DecimalFormatterOptions::default();
    options.grouping_strategy = grouping;
    match DecimalFormatter::try_new(icu_locale.into(), options) {
        Ok(formatter) => Some(formatter),
        Err(e) => {
            tracing::warn!(%locale, error = %e, "no decimal symbols, number left unformatted");
            None
        }
    }
}

fn to_decimal(number: Quantity) -> Option<Decimal> {
    match number {
        Quantity::Integer(n) => Some(Decimal::from(n)),
        Quantity::Fraction(n) => Decimal::try_from_str(&number.to_string())
            .inspect_err(|e| tracing::debug!(number = n, error = %e, "not a finite decimal"))
            .ok(),
    }
}
