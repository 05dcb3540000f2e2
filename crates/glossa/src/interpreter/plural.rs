//! CLDR plural category resolution.
//!
//! Categories come from ICU4X `PluralRules` unless a custom rule is registered
//! for the locale. Rules are cached per thread per (locale, rule type) so
//! repeated lookups do not rebuild `PluralRules`. A locale ICU cannot handle
//! resolves to `other`; plural resolution never fails.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use icu_locale_core::Locale as IcuLocale;
use icu_plurals::{PluralCategory as IcuCategory, PluralRuleType, PluralRules};

use crate::types::{LocaleId, PluralCategory, Quantity};

/// Whether to classify a quantity as a count or as a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PluralKind {
    /// "1 item", "2 items".
    #[default]
    Cardinal,
    /// "1st", "2nd".
    Ordinal,
}

impl From<PluralKind> for PluralRuleType {
    fn from(kind: PluralKind) -> Self {
        match kind {
            PluralKind::Cardinal => PluralRuleType::Cardinal,
            PluralKind::Ordinal => PluralRuleType::Ordinal,
        }
    }
}

impl From<IcuCategory> for PluralCategory {
    fn from(category: IcuCategory) -> Self {
        match category {
            IcuCategory::Zero => PluralCategory::Zero,
            IcuCategory::One => PluralCategory::One,
            IcuCategory::Two => PluralCategory::Two,
            IcuCategory::Few => PluralCategory::Few,
            IcuCategory::Many => PluralCategory::Many,
            IcuCategory::Other => PluralCategory::Other,
        }
    }
}

/// A caller-supplied plural rule for one locale.
///
/// Custom rules replace the CLDR classifier entirely for their locale and
/// are called for both cardinal and ordinal lookups.
///
/// # Example
///
/// ```
/// use glossa::{PluralCategory, PluralRule, Quantity};
///
/// let rule = PluralRule::new(|n| match n {
///     Quantity::Integer(0) => PluralCategory::Zero,
///     Quantity::Integer(1) => PluralCategory::One,
///     _ => PluralCategory::Other,
/// });
/// assert_eq!(rule.category(0), PluralCategory::Zero);
/// assert_eq!(rule.category(1.5), PluralCategory::Other);
/// ```
#[derive(Clone)]
pub struct PluralRule(Arc<RuleFn>);

type RuleFn = dyn Fn(Quantity) -> PluralCategory + Send + Sync;

impl PluralRule {
    /// Wrap a rule function.
    pub fn new(rule: impl Fn(Quantity) -> PluralCategory + Send + Sync + 'static) -> Self {
        Self(Arc::new(rule))
    }

    /// Classify a quantity.
    pub fn category(&self, quantity: impl Into<Quantity>) -> PluralCategory {
        (self.0)(quantity.into())
    }
}

impl Debug for PluralRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("PluralRule(..)")
    }
}

type CacheEntry = (String, PluralKind, Option<PluralRules>);

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by locale tag and rule type.
    /// `None` records a locale ICU could not build rules for.
    static PLURAL_RULES_CACHE: RefCell<Vec<CacheEntry>> = const { RefCell::new(Vec::new()) };
}

/// Build `PluralRules` for a locale tag, or `None` if the tag is not a
/// well-formed BCP 47 locale.
fn build_rules(tag: &str, kind: PluralKind) -> Option<PluralRules> {
    let locale: IcuLocale = match tag.parse() {
        Ok(locale) => locale,
        Err(e) => {
            tracing::debug!(locale = tag, error = %e, "unparsable locale, plural category is 'other'");
            return None;
        }
    };
    match PluralRules::try_new(locale.into(), PluralRuleType::from(kind).into()) {
        Ok(rules) => Some(rules),
        Err(e) => {
            tracing::debug!(locale = tag, error = %e, "no plural rules, plural category is 'other'");
            None
        }
    }
}

/// Get the CLDR plural category for a quantity in a locale.
///
/// Unknown or malformed locales, and non-finite quantities, yield
/// [`PluralCategory::Other`].
///
/// # Examples
///
/// ```
/// use glossa::{PluralCategory, PluralKind, plural_category};
///
/// assert_eq!(plural_category("en-US", 1, PluralKind::Cardinal), PluralCategory::One);
/// assert_eq!(plural_category("en-US", 2, PluralKind::Cardinal), PluralCategory::Other);
/// assert_eq!(plural_category("ru", 5, PluralKind::Cardinal), PluralCategory::Many);
/// assert_eq!(plural_category("en", 3, PluralKind::Ordinal), PluralCategory::Few);
/// assert_eq!(plural_category("fr", 1.5, PluralKind::Cardinal), PluralCategory::One);
/// assert_eq!(plural_category("en", 1.5, PluralKind::Cardinal), PluralCategory::Other);
/// ```
pub fn plural_category(
    locale: &str,
    quantity: impl Into<Quantity>,
    kind: PluralKind,
) -> PluralCategory {
    let quantity = quantity.into();
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some((_, _, rules)) = cache
            .iter()
            .find(|(tag, cached_kind, _)| tag == locale && *cached_kind == kind)
        {
            return categorize(rules.as_ref(), quantity);
        }
        let rules = build_rules(locale, kind);
        let category = categorize(rules.as_ref(), quantity);
        cache.push((locale.to_string(), kind, rules));
        category
    })
}

fn categorize(rules: Option<&PluralRules>, quantity: Quantity) -> PluralCategory {
    match (rules, quantity.operands()) {
        (Some(rules), Some(operands)) => rules.category_for(operands).into(),
        _ => PluralCategory::Other,
    }
}

/// Resolve a plural category, preferring a custom rule registered for the
/// exact locale.
///
/// Custom rules ignore `kind`; they define their own semantics.
pub fn resolve_plural_category(
    quantity: Quantity,
    locale: &LocaleId,
    kind: PluralKind,
    custom_rules: &HashMap<LocaleId, PluralRule>,
) -> PluralCategory {
    match custom_rules.get(locale) {
        Some(rule) => rule.category(quantity),
        None => plural_category(&locale.to_string(), quantity, kind),
    }
}
