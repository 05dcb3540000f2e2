//! Tests for loading, validating and managing speech mappings.

use std::io::Write;

use glossa::{InsertPosition, LoadError, SpeechMappingData, SpeechRegistry, SpeechRuleData};
use tempfile::NamedTempFile;

fn words(list: &str) -> Vec<String> {
    list.split_whitespace().map(ToString::to_string).collect()
}

fn plain_english(rules: Vec<SpeechRuleData>) -> SpeechMappingData {
    SpeechMappingData {
        negative: "minus".to_string(),
        zero: "zero".to_string(),
        units: words("one two three four five six seven eight nine"),
        teens: words(
            "ten eleven twelve thirteen fourteen fifteen sixteen seventeen eighteen nineteen",
        ),
        tens: words("twenty thirty forty fifty sixty seventy eighty ninety"),
        hundred: "hundred".to_string(),
        thousand: "thousand".to_string(),
        million: "million".to_string(),
        rules,
    }
}

fn replace(pattern: &str, replacement: &str) -> SpeechRuleData {
    SpeechRuleData::Replace {
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
    }
}

fn insert(pattern: &str, insertion: &str, position: InsertPosition) -> SpeechRuleData {
    SpeechRuleData::Insert {
        pattern: pattern.to_string(),
        insertion: insertion.to_string(),
        position,
    }
}

// =========================================================================
// Registry Contents
// =========================================================================

#[test]
fn new_registry_has_builtins() {
    let registry = SpeechRegistry::new();
    assert_eq!(registry.keys(), vec!["american", "british"]);
    assert!(registry.contains("british"));
}

#[test]
fn empty_registry_has_nothing() {
    let registry = SpeechRegistry::empty();
    assert!(registry.keys().is_empty());
    assert!(registry.to_speech(1, "american").is_err());
}

#[test]
fn load_adds_and_replaces() {
    let mut registry = SpeechRegistry::new();
    registry.load("plain", plain_english(Vec::new())).unwrap();
    assert_eq!(registry.keys(), vec!["american", "british", "plain"]);
    assert_eq!(registry.to_speech(42, "plain").unwrap(), "forty two");

    registry
        .load("american", plain_english(Vec::new()))
        .unwrap();
    assert_eq!(registry.to_speech(42, "american").unwrap(), "forty two");
}

#[test]
fn remove_mapping() {
    let mut registry = SpeechRegistry::new();
    assert!(registry.remove("british").is_some());
    assert!(registry.remove("british").is_none());
    assert_eq!(registry.keys(), vec!["american"]);
}

// =========================================================================
// Rules
// =========================================================================

#[test]
fn rules_run_as_a_pipeline() {
    let mut registry = SpeechRegistry::empty();
    let rules = vec![
        replace("(forty) (two)", "$1-$2"),
        replace("forty-two", "the answer"),
    ];
    registry.load("pipeline", plain_english(rules)).unwrap();
    assert_eq!(registry.to_speech(42, "pipeline").unwrap(), "the answer");
}

#[test]
fn replace_is_global() {
    let mut registry = SpeechRegistry::empty();
    registry
        .load("shout", plain_english(vec![replace("hundred", "HUNDRED")]))
        .unwrap();
    assert_eq!(
        registry.to_speech(101_101, "shout").unwrap(),
        "one HUNDRED one thousand one HUNDRED one"
    );
}

#[test]
fn insert_after_is_the_default_position() {
    let data: SpeechMappingData = serde_json::from_value(serde_json::json!({
        "negative": "minus", "zero": "zero",
        "units": words("one two three four five six seven eight nine"),
        "teens": words("ten eleven twelve thirteen fourteen fifteen sixteen seventeen eighteen nineteen"),
        "tens": words("twenty thirty forty fifty sixty seventy eighty ninety"),
        "hundred": "hundred", "thousand": "thousand", "million": "million",
        "rules": [{ "type": "insert", "pattern": "hundred", "insertion": " and" }]
    }))
    .unwrap();
    assert_eq!(
        data.rules[0],
        insert("hundred", " and", InsertPosition::After)
    );

    let mut registry = SpeechRegistry::empty();
    registry.load("and", data).unwrap();
    assert_eq!(
        registry.to_speech(305, "and").unwrap(),
        "three hundred and five"
    );
}

#[test]
fn insert_before_every_match() {
    let mut registry = SpeechRegistry::empty();
    let rules = vec![insert("thousand|million", "big ", InsertPosition::Before)];
    registry.load("big", plain_english(rules)).unwrap();
    assert_eq!(
        registry.to_speech(2_003_000, "big").unwrap(),
        "two big million three big thousand"
    );
}

#[test]
fn insertion_text_is_literal() {
    let mut registry = SpeechRegistry::empty();
    let rules = vec![insert("one", " ($1)", InsertPosition::After)];
    registry.load("literal", plain_english(rules)).unwrap();
    assert_eq!(registry.to_speech(1, "literal").unwrap(), "one ($1)");
}

#[test]
fn whole_match_and_escaped_dollar() {
    let mut registry = SpeechRegistry::empty();
    let rules = vec![replace("seven", "[$&] $$")];
    registry.load("marks", plain_english(rules)).unwrap();
    assert_eq!(registry.to_speech(7, "marks").unwrap(), "[seven] $");
}

#[test]
fn lookahead_patterns_are_supported() {
    let mut registry = SpeechRegistry::empty();
    let rules = vec![replace("one(?= thousand)", "a")];
    registry.load("a", plain_english(rules)).unwrap();
    assert_eq!(registry.to_speech(1001, "a").unwrap(), "a thousand one");
}

#[test]
fn rules_see_the_phrase_before_the_sign() {
    let mut registry = SpeechRegistry::empty();
    registry
        .load("anchored", plain_english(vec![replace("^five", "FIVE")]))
        .unwrap();
    assert_eq!(registry.to_speech(-5, "anchored").unwrap(), "minus FIVE");
}

#[test]
fn trailing_space_from_rules_is_trimmed() {
    let mut registry = SpeechRegistry::empty();
    registry
        .load("pad", plain_english(vec![replace("$", " ")]))
        .unwrap();
    assert_eq!(registry.to_speech(3, "pad").unwrap(), "three");
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn wrong_unit_count_is_rejected() {
    let mut data = plain_english(Vec::new());
    data.units.pop();
    let err = SpeechRegistry::empty().load("short", data).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid speech mapping 'short': 'units' needs 9 words, found 8"
    );
}

#[test]
fn wrong_teen_and_tens_counts_are_rejected() {
    let mut teens = plain_english(Vec::new());
    teens.teens.push("twenty".to_string());
    let mut tens = plain_english(Vec::new());
    tens.tens.clear();

    let mut registry = SpeechRegistry::empty();
    assert!(matches!(
        registry.load("teens", teens).unwrap_err(),
        LoadError::InvalidSpeechMapping { .. }
    ));
    assert!(matches!(
        registry.load("tens", tens).unwrap_err(),
        LoadError::InvalidSpeechMapping { .. }
    ));
}

#[test]
fn invalid_pattern_is_rejected_at_load() {
    let rules = vec![replace("(unclosed", "x")];
    let err = SpeechRegistry::empty()
        .load("broken", plain_english(rules))
        .unwrap_err();
    let LoadError::InvalidSpeechRule { key, index, .. } = err else {
        panic!("expected InvalidSpeechRule, got {err:?}");
    };
    assert_eq!(key, "broken");
    assert_eq!(index, 0);
}

#[test]
fn backreference_to_missing_group_is_rejected_at_load() {
    let rules = vec![replace("(one)", "$1"), replace("(two) (three)", "$1 $3")];
    let err = SpeechRegistry::empty()
        .load("arity", plain_english(rules))
        .unwrap_err();
    assert!(matches!(
        err,
        LoadError::InvalidSpeechRule { index: 1, .. }
    ));
    assert!(err.to_string().contains("$3"), "{err}");
}

#[test]
fn failed_load_leaves_registry_unchanged() {
    let mut registry = SpeechRegistry::new();
    let mut data = plain_english(Vec::new());
    data.tens.pop();
    assert!(registry.load("american", data).is_err());
    assert_eq!(registry.to_speech(21, "american").unwrap(), "twenty-one");
}

// =========================================================================
// JSON and Files
// =========================================================================

#[test]
fn load_json_rejects_unknown_rule_type() {
    let json = r#"{
        "negative": "minus", "zero": "zero",
        "units": [], "teens": [], "tens": [],
        "hundred": "", "thousand": "", "million": "",
        "rules": [{ "type": "delete", "pattern": "x" }]
    }"#;
    let err = SpeechRegistry::empty().load_json("bad", json).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
}

#[test]
fn load_file_reads_mapping() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(include_bytes!("fixtures/sv-speech.json"))
        .unwrap();
    file.flush().unwrap();

    let mut registry = SpeechRegistry::empty();
    registry.load_file("sv", file.path()).unwrap();
    assert_eq!(registry.to_speech(32, "sv").unwrap(), "trettiotvå");
}

#[test]
fn load_file_missing_is_io_error() {
    let err = SpeechRegistry::empty()
        .load_file("sv", "/nonexistent/sv-speech.json")
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
