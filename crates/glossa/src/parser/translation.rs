//! Conversion of untyped JSON translation data into typed trees.
//!
//! Shape rules:
//! - a string is a [`TranslationValue::Leaf`];
//! - an object whose keys are all plural category tags, whose values are all
//!   strings, and which has an `other` key is a [`TranslationValue::PluralForm`];
//! - any other object is a [`TranslationValue::Namespace`];
//! - numbers, booleans, nulls and arrays are rejected.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value as Json};

use crate::interpreter::LoadError;
use crate::types::{LocaleId, Namespace, PluralCategory, PluralForms, TranslationValue};

/// Parse one locale's translation tree.
///
/// # Example
///
/// ```
/// use glossa::parser::parse_namespace;
/// use glossa::{LocaleId, TranslationValue};
/// use serde_json::json;
///
/// let ns = parse_namespace(
///     Some(&LocaleId::new("en")),
///     json!({ "menu": { "home": "Home" }, "apple": { "one": "apple", "other": "apples" } }),
/// )
/// .unwrap();
/// assert_eq!(ns["apple"].kind(), "plural");
/// assert_eq!(ns["menu"].as_namespace().unwrap()["home"], TranslationValue::from("Home"));
/// ```
pub fn parse_namespace(locale: Option<&LocaleId>, data: Json) -> Result<Namespace, LoadError> {
    match data {
        Json::Object(map) => parse_object(locale, map, ""),
        other => Err(invalid(
            locale,
            "",
            format!("expected a mapping, found {}", json_kind(&other)),
        )),
    }
}

/// Parse a full data set: a mapping from locale tag to translation tree.
pub fn parse_translation_data(data: Json) -> Result<HashMap<LocaleId, Namespace>, LoadError> {
    let Json::Object(locales) = data else {
        return Err(invalid(
            None,
            "",
            format!("expected a mapping of locales, found {}", json_kind(&data)),
        ));
    };
    locales
        .into_iter()
        .map(|(tag, tree)| {
            let locale = LocaleId::new(&tag);
            let namespace = parse_namespace(Some(&locale), tree)?;
            Ok((locale, namespace))
        })
        .collect()
}

fn parse_object(
    locale: Option<&LocaleId>,
    map: Map<String, Json>,
    path: &str,
) -> Result<Namespace, LoadError> {
    map.into_iter()
        .map(|(key, value)| {
            let child_path = join_path(path, &key);
            let parsed = parse_value(locale, value, &child_path)?;
            Ok((key, parsed))
        })
        .collect()
}

fn parse_value(
    locale: Option<&LocaleId>,
    value: Json,
    path: &str,
) -> Result<TranslationValue, LoadError> {
    match value {
        Json::String(text) => Ok(TranslationValue::Leaf(text)),
        Json::Object(map) => match plural_forms(&map) {
            Some(forms) => Ok(TranslationValue::PluralForm(forms)),
            None => parse_object(locale, map, path).map(TranslationValue::Namespace),
        },
        other => Err(invalid(
            locale,
            path,
            format!(
                "expected text, plural forms, or a nested mapping, found {}",
                json_kind(&other)
            ),
        )),
    }
}

/// Interpret an object as plural forms, if it has that shape.
fn plural_forms(map: &Map<String, Json>) -> Option<PluralForms> {
    let forms = map
        .iter()
        .map(|(tag, value)| Some((PluralCategory::from_tag(tag)?, value.as_str()?.to_string())))
        .collect::<Option<BTreeMap<_, _>>>()?;
    PluralForms::from_map(forms)
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "a mapping",
    }
}

fn invalid(locale: Option<&LocaleId>, path: &str, reason: String) -> LoadError {
    LoadError::InvalidTranslationData {
        locale: locale.map(ToString::to_string),
        path: path.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::parse_namespace;
    use crate::types::TranslationValue;

    #[test]
    fn object_without_other_is_a_namespace() {
        let ns = parse_namespace(None, json!({ "item": { "one": "a", "few": "b" } })).unwrap();
        assert_eq!(ns["item"].kind(), "namespace");
    }

    #[test]
    fn object_with_non_category_key_is_a_namespace() {
        let ns =
            parse_namespace(None, json!({ "item": { "one": "a", "other": "b", "x": "c" } }))
                .unwrap();
        assert_eq!(ns["item"].kind(), "namespace");
    }

    #[test]
    fn empty_object_is_an_empty_namespace() {
        let ns = parse_namespace(None, json!({ "empty": {} })).unwrap();
        assert_eq!(ns["empty"], TranslationValue::Namespace(Default::default()));
    }

    #[test]
    fn number_leaf_reports_dotted_path() {
        let err = parse_namespace(None, json!({ "a": { "b": 3 } })).unwrap_err();
        assert!(err.to_string().contains("at 'a.b'"), "{err}");
    }
}
