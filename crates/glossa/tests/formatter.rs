//! Tests for cardinal, ordinal, decimal and relative time formatting.

use glossa::formatter::{
    GroupingStrategy, RelativeTimeUnit, english_ordinal_suffixes, english_relative_time,
};
use glossa::{
    LocaleId, PluralCategory, PluralForms, PluralRule, Translator, format_cardinal, format_number,
    format_ordinal, format_relative_time_sections,
};

fn items() -> PluralForms {
    PluralForms::new("{{number}} items")
        .with(PluralCategory::Zero, "No items")
        .with(PluralCategory::One, "{{number}} item")
}

#[test]
fn cardinal_selects_by_category() {
    let translator = Translator::new();
    let en = LocaleId::new("en-US");
    assert_eq!(format_cardinal(&translator, 0, &en, &items()), "No items");
    assert_eq!(format_cardinal(&translator, 1, &en, &items()), "1 item");
    assert_eq!(format_cardinal(&translator, 25, &en, &items()), "25 items");
}

#[test]
fn cardinal_replaces_first_placeholder_only() {
    let translator = Translator::new();
    let forms = PluralForms::new("{{number}} of {{number}}");
    let text = format_cardinal(&translator, 3, &LocaleId::new("en"), &forms);
    assert_eq!(text, "3 of {{number}}");
}

#[test]
fn cardinal_zero_without_zero_form_uses_grammar() {
    let translator = Translator::new();
    let forms = PluralForms::new("{{number}} items").with(PluralCategory::One, "{{number}} item");
    let text = format_cardinal(&translator, 0, &LocaleId::new("en"), &forms);
    assert_eq!(text, "0 items");
}

#[test]
fn cardinal_fraction_uses_locale_grammar() {
    let translator = Translator::new();
    let forms = PluralForms::new("{{number}} heures").with(PluralCategory::One, "{{number}} heure");
    let text = format_cardinal(&translator, 1.5, &LocaleId::new("fr"), &forms);
    assert_eq!(text, "1.5 heure");
    assert_eq!(format_cardinal(&translator, 1.5, &LocaleId::new("en"), &items()), "1.5 items");
}

#[test]
fn cardinal_honours_custom_rules() {
    let mut translator = Translator::new();
    translator.set_plural_rule("en", PluralRule::new(|_| PluralCategory::One));
    let text = format_cardinal(&translator, 7, &LocaleId::new("en"), &items());
    assert_eq!(text, "7 item");
}

#[test]
fn ordinal_english_suffixes() {
    let translator = Translator::new();
    let ordinals: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 101, 111]
        .into_iter()
        .map(|n| format_ordinal(&translator, n, None, None))
        .collect();
    assert_eq!(
        ordinals,
        vec![
            "1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd", "101st",
            "111th"
        ]
    );
}

#[test]
fn ordinal_uses_translator_locale() {
    let mut translator = Translator::new();
    translator.set_locale("sv-SE");
    let swedish = PluralForms::new(":e").with(PluralCategory::One, ":a");
    assert_eq!(format_ordinal(&translator, 1, None, Some(&swedish)), "1:a");
    assert_eq!(format_ordinal(&translator, 3, None, Some(&swedish)), "3:e");
    assert_eq!(format_ordinal(&translator, 21, None, Some(&swedish)), "21:a");
}

#[test]
fn ordinal_missing_suffix_uses_other() {
    let translator = Translator::new();
    let suffixes = PluralForms::new(".");
    assert_eq!(format_ordinal(&translator, 2, None, Some(&suffixes)), "2.");
}

#[test]
fn default_suffixes() {
    let suffixes = english_ordinal_suffixes();
    assert_eq!(suffixes.get(PluralCategory::Two), Some("nd"));
    assert_eq!(suffixes.other(), "th");
}

// =========================================================================
// Decimal Formatting
// =========================================================================

#[test]
fn number_uses_locale_separators() {
    let translator = Translator::new();
    assert_eq!(format_number(&translator, 12345.67, None, None), "12,345.67");
    let de = LocaleId::new("de-DE");
    assert_eq!(format_number(&translator, 12345.67, Some(&de), None), "12.345,67");
    assert_eq!(format_number(&translator, -1234567, None, None), "-1,234,567");
}

#[test]
fn number_follows_translator_locale() {
    let mut translator = Translator::new();
    translator.set_locale("de");
    assert_eq!(format_number(&translator, 1234.5, None, None), "1.234,5");
}

#[test]
fn number_grouping_can_be_disabled() {
    let translator = Translator::new();
    let text = format_number(&translator, 12345.67, None, Some(GroupingStrategy::Never));
    assert_eq!(text, "12345.67");
}

#[test]
fn number_with_unusable_locale_is_plain() {
    let translator = Translator::new();
    let bad = LocaleId::new("not a locale!");
    assert_eq!(format_number(&translator, 12345.67, Some(&bad), None), "12345.67");
    assert_eq!(format_number(&translator, f64::NAN, None, None), "NaN");
}

// =========================================================================
// Relative Time
// =========================================================================

#[test]
fn relative_sections_keep_sign() {
    let future = format_relative_time_sections(63_072_009, None, english_relative_time);
    assert_eq!(future, "in 2 years, in 9 seconds");
    let past = format_relative_time_sections(-63_072_009, None, english_relative_time);
    assert_eq!(past, "2 years ago, 9 seconds ago");
}

#[test]
fn relative_sections_walk_every_default_unit() {
    let seconds = 2_592_000 + 2 * 604_800 + 86_400 + 3_600 + 61;
    let text = format_relative_time_sections(seconds, None, english_relative_time);
    assert_eq!(
        text,
        "in 1 month, in 2 weeks, in 1 day, in 1 hour, in 61 seconds"
    );
}

#[test]
fn relative_sections_with_custom_units_and_formatter() {
    let units = [RelativeTimeUnit::Hour, RelativeTimeUnit::Minute, RelativeTimeUnit::Second];
    let text = format_relative_time_sections(3_725, Some(units.as_slice()), |value, unit| {
        format!("{value}{}", &unit.as_str()[..1])
    });
    assert_eq!(text, "1h, 2m, 5s");
}

#[test]
fn relative_sections_of_zero_are_empty() {
    assert_eq!(format_relative_time_sections(0, None, english_relative_time), "");
}
