//! Tests for translation store mutation and data validation.

use glossa::{LoadError, LocaleId, TranslationStore, TranslationValue, Translator};
use serde_json::json;

fn en() -> LocaleId {
    LocaleId::new("en")
}

// =========================================================================
// Set / Merge / Replace
// =========================================================================

#[test]
fn set_replaces_whole_namespace() {
    let mut translator = Translator::new();
    translator
        .set_translations("en", json!({ "a": "A", "b": "B" }))
        .unwrap();
    translator
        .set_translations("en", json!({ "c": "C" }))
        .unwrap();

    let ns = translator.translations("en").unwrap();
    assert_eq!(ns.keys().collect::<Vec<_>>(), vec!["c"]);
}

#[test]
fn merge_is_shallow() {
    let mut translator = Translator::new();
    translator
        .set_translations(
            "en",
            json!({ "title": "Title", "menu": { "home": "Home", "about": "About" } }),
        )
        .unwrap();
    translator
        .add_translations("en", json!({ "menu": { "contact": "Contact" }, "footer": "Footer" }))
        .unwrap();

    let ns = translator.translations("en").unwrap();
    assert_eq!(ns["title"], TranslationValue::from("Title"));
    assert_eq!(ns["footer"], TranslationValue::from("Footer"));
    let menu = ns["menu"].as_namespace().unwrap();
    assert_eq!(menu.keys().collect::<Vec<_>>(), vec!["contact"]);
}

#[test]
fn merge_creates_missing_locale() {
    let mut translator = Translator::new();
    translator
        .add_translations("sv", json!({ "hello": "Hej" }))
        .unwrap();
    assert_eq!(
        translator.translations("sv").unwrap()["hello"],
        TranslationValue::from("Hej")
    );
}

#[test]
fn replace_all_discards_other_locales() {
    let mut translator = Translator::new();
    translator
        .set_translations("de", json!({ "hello": "Hallo" }))
        .unwrap();
    translator
        .replace_all_translations(json!({
            "en": { "hello": "Hello" },
            "sv-SE": { "hello": "Hej" }
        }))
        .unwrap();

    let locales = translator.store().locales();
    assert_eq!(locales, vec![&LocaleId::new("en"), &LocaleId::new("sv-SE")]);
    assert!(translator.translations("de").is_none());
}

#[test]
fn replace_all_failure_leaves_store_untouched() {
    let mut translator = Translator::new();
    translator
        .set_translations("de", json!({ "hello": "Hallo" }))
        .unwrap();
    let result = translator.replace_all_translations(json!({
        "en": { "hello": "Hello" },
        "fr": { "count": 3 }
    }));

    assert!(result.is_err());
    assert!(translator.translations("de").is_some());
    assert!(translator.translations("en").is_none());
}

#[test]
fn remove_one_and_all() {
    let mut translator = Translator::new();
    translator
        .replace_all_translations(json!({ "en": { "a": "A" }, "sv": { "a": "Å" } }))
        .unwrap();

    translator.remove_translations("en");
    translator.remove_translations("fi");
    assert_eq!(translator.store().len(), 1);

    translator.remove_all_translations();
    assert!(translator.store().is_empty());
}

#[test]
fn get_does_not_fall_back() {
    let mut store = TranslationStore::new();
    store.set_json(en(), json!({ "a": "A" })).unwrap();
    assert!(store.get(&LocaleId::new("en-US")).is_none());
    assert!(store.contains(&en()));
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn non_mapping_payload_is_rejected() {
    let mut translator = Translator::new();
    let err = translator
        .set_translations("en", json!(["hello"]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid translation data for locale 'en': expected a mapping, found an array"
    );
}

#[test]
fn merge_rejects_non_mapping() {
    let mut translator = Translator::new();
    let err = translator.add_translations("en", json!("hello")).unwrap_err();
    assert!(matches!(err, LoadError::InvalidTranslationData { .. }));
}

#[test]
fn nested_invalid_value_names_its_path() {
    let mut store = TranslationStore::new();
    let err = store
        .set_json(en(), json!({ "menu": { "items": { "count": 4 } } }))
        .unwrap_err();
    let LoadError::InvalidTranslationData { locale, path, .. } = err else {
        panic!("expected InvalidTranslationData, got {err:?}");
    };
    assert_eq!(locale.as_deref(), Some("en"));
    assert_eq!(path, "menu.items.count");
}

#[test]
fn object_with_plural_keys_and_other_is_plural() {
    let mut store = TranslationStore::new();
    store
        .set_json(
            en(),
            json!({
                "apples": { "one": "an apple", "other": "apples" },
                "sizes": { "one": "small", "few": "medium" },
                "labels": { "one": "x", "other": { "deep": "y" } }
            }),
        )
        .unwrap();

    let ns = store.get(&en()).unwrap();
    assert_eq!(ns["apples"].kind(), "plural");
    assert_eq!(ns["sizes"].kind(), "namespace");
    assert_eq!(ns["labels"].kind(), "namespace");
}
