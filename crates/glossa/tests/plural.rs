//! Tests for plural category resolution.

use glossa::{
    ConfigUpdate, LocaleId, PluralCategory, PluralKind, PluralRule, Quantity, TranslateOptions,
    Translator, plural_category,
};
use serde_json::json;

// =========================================================================
// CLDR Rules
// =========================================================================

#[test]
fn english_cardinal() {
    assert_eq!(plural_category("en", 0, PluralKind::Cardinal), PluralCategory::Other);
    assert_eq!(plural_category("en", 1, PluralKind::Cardinal), PluralCategory::One);
    assert_eq!(plural_category("en", 2, PluralKind::Cardinal), PluralCategory::Other);
}

#[test]
fn english_ordinal() {
    assert_eq!(plural_category("en", 1, PluralKind::Ordinal), PluralCategory::One);
    assert_eq!(plural_category("en", 2, PluralKind::Ordinal), PluralCategory::Two);
    assert_eq!(plural_category("en", 23, PluralKind::Ordinal), PluralCategory::Few);
    assert_eq!(plural_category("en", 11, PluralKind::Ordinal), PluralCategory::Other);
}

#[test]
fn arabic_has_all_six_categories() {
    let categories: Vec<_> = [0, 1, 2, 3, 11, 100]
        .into_iter()
        .map(|n| plural_category("ar", n, PluralKind::Cardinal))
        .collect();
    assert_eq!(
        categories,
        vec![
            PluralCategory::Zero,
            PluralCategory::One,
            PluralCategory::Two,
            PluralCategory::Few,
            PluralCategory::Many,
            PluralCategory::Other,
        ]
    );
}

#[test]
fn negative_quantities_use_magnitude() {
    assert_eq!(plural_category("en", -1, PluralKind::Cardinal), PluralCategory::One);
}

#[test]
fn unparsable_locale_is_other() {
    assert_eq!(
        plural_category("not a locale!", 1, PluralKind::Cardinal),
        PluralCategory::Other
    );
}

#[test]
fn fractions_follow_visible_digits() {
    assert_eq!(plural_category("fr", 1.5, PluralKind::Cardinal), PluralCategory::One);
    assert_eq!(plural_category("en", 1.5, PluralKind::Cardinal), PluralCategory::Other);
    assert_eq!(plural_category("en", 1.0, PluralKind::Cardinal), PluralCategory::One);
    assert_eq!(plural_category("ru", 2.5, PluralKind::Cardinal), PluralCategory::Other);
}

#[test]
fn non_finite_quantity_is_other() {
    assert_eq!(
        plural_category("en", f64::NAN, PluralKind::Cardinal),
        PluralCategory::Other
    );
    assert_eq!(
        plural_category("en", f64::INFINITY, PluralKind::Cardinal),
        PluralCategory::Other
    );
}

#[test]
fn cache_keeps_cardinal_and_ordinal_apart() {
    assert_eq!(plural_category("en", 2, PluralKind::Cardinal), PluralCategory::Other);
    assert_eq!(plural_category("en", 2, PluralKind::Ordinal), PluralCategory::Two);
    assert_eq!(plural_category("en", 2, PluralKind::Cardinal), PluralCategory::Other);
}

// =========================================================================
// Custom Rules
// =========================================================================

fn everything_is_few() -> PluralRule {
    PluralRule::new(|_| PluralCategory::Few)
}

#[test]
fn custom_rule_overrides_cldr_for_both_kinds() {
    let mut translator = Translator::new();
    translator.set_plural_rule("en", everything_is_few());
    let en = LocaleId::new("en");

    assert_eq!(
        translator.plural_category(1, &en, PluralKind::Cardinal),
        PluralCategory::Few
    );
    assert_eq!(
        translator.plural_category(1, &en, PluralKind::Ordinal),
        PluralCategory::Few
    );
    assert_eq!(
        translator.plural_category(1, &LocaleId::new("en-GB"), PluralKind::Cardinal),
        PluralCategory::One
    );
}

#[test]
fn custom_rule_bypasses_zero_polyfill() {
    let mut translator = Translator::new();
    translator
        .set_translations(
            "en",
            json!({ "apples": { "zero": "none", "few": "a few", "other": "lots" } }),
        )
        .unwrap();
    translator.configure(
        ConfigUpdate::builder()
            .plural_rules([(LocaleId::new("en"), everything_is_few())].into())
            .build(),
    );

    let options = TranslateOptions::builder().locale("en").quantity(0).build();
    assert_eq!(translator.translate("apples", &options).unwrap(), "a few");
}

#[test]
fn custom_rule_category_missing_from_map_uses_other() {
    let mut translator = Translator::new();
    translator
        .set_translations("en", json!({ "apples": { "one": "one apple", "other": "apples" } }))
        .unwrap();
    translator.set_plural_rule("en", everything_is_few());

    let options = TranslateOptions::builder().locale("en").quantity(1).build();
    assert_eq!(translator.translate("apples", &options).unwrap(), "apples");
}

#[test]
fn custom_rule_sees_fractions() {
    let mut translator = Translator::new();
    translator.set_plural_rule(
        "xx",
        PluralRule::new(|n| match n {
            Quantity::Integer(_) => PluralCategory::One,
            Quantity::Fraction(_) => PluralCategory::Many,
        }),
    );
    let xx = LocaleId::new("xx");
    assert_eq!(
        translator.plural_category(2, &xx, PluralKind::Cardinal),
        PluralCategory::One
    );
    assert_eq!(
        translator.plural_category(0.5, &xx, PluralKind::Cardinal),
        PluralCategory::Many
    );
}
